use sqlx::SqlitePool;
use uuid::Uuid;

use super::models::User;
use super::StoreError;

/// Fields for a new account; `password` is the already-hashed credential.
pub struct NewUser<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub hospital: &'a str,
    pub region: &'a str,
    pub email: &'a str,
}

pub struct UserRepository;

impl UserRepository {
    pub async fn create(pool: &SqlitePool, new_user: NewUser<'_>) -> Result<User, StoreError> {
        let id = Uuid::new_v4().to_string();
        let created_at = chrono::Utc::now();

        let user = sqlx::query_as::<_, User>(
            r#"
INSERT INTO users (id, username, password, hospital, region, email, created_at)
VALUES (?, ?, ?, ?, ?, ?, ?)
RETURNING *
            "#,
        )
        .bind(&id)
        .bind(new_user.username)
        .bind(new_user.password)
        .bind(new_user.hospital)
        .bind(new_user.region)
        .bind(new_user.email)
        .bind(created_at)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_username(
        pool: &SqlitePool,
        username: &str,
    ) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_pool;

    fn alice() -> NewUser<'static> {
        NewUser {
            username: "alice",
            password: "$2b$10$not-a-real-hash",
            hospital: "H1",
            region: "R1",
            email: "a@x.com",
        }
    }

    #[tokio::test]
    async fn create_and_find() {
        let pool = test_pool().await;

        let created = UserRepository::create(&pool, alice()).await.unwrap();
        assert_eq!(created.username, "alice");
        assert!(!created.id.is_empty());

        let found = UserRepository::find_by_username(&pool, "alice")
            .await
            .unwrap()
            .expect("alice exists");
        assert_eq!(found.id, created.id);
        assert_eq!(found.hospital, "H1");

        assert!(UserRepository::find_by_username(&pool, "bob")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn username_is_unique() {
        let pool = test_pool().await;

        UserRepository::create(&pool, alice()).await.unwrap();
        let second = UserRepository::create(&pool, alice()).await;
        assert!(second.is_err());
    }
}
