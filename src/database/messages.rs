use sqlx::SqlitePool;
use uuid::Uuid;

use super::models::Message;
use super::StoreError;

pub struct NewMessage {
    pub user_id: String,
    pub hospital_name: String,
    pub query: String,
}

pub struct MessageRepository;

impl MessageRepository {
    pub async fn create(pool: &SqlitePool, message: NewMessage) -> Result<Message, StoreError> {
        let id = Uuid::new_v4().to_string();
        let created_at = chrono::Utc::now();

        let message = sqlx::query_as::<_, Message>(
            r#"
INSERT INTO messages (id, user_id, hospital_name, query, created_at)
VALUES (?, ?, ?, ?, ?)
RETURNING *
            "#,
        )
        .bind(&id)
        .bind(message.user_id)
        .bind(message.hospital_name)
        .bind(message.query)
        .bind(created_at)
        .fetch_one(pool)
        .await?;

        Ok(message)
    }

    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Message>, StoreError> {
        let messages = sqlx::query_as::<_, Message>("SELECT * FROM messages ORDER BY created_at")
            .fetch_all(pool)
            .await?;

        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_pool;

    #[tokio::test]
    async fn create_and_list() {
        let pool = test_pool().await;

        let created = MessageRepository::create(
            &pool,
            NewMessage {
                user_id: "u1".to_string(),
                hospital_name: "H1".to_string(),
                query: "Need more gloves".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(created.query, "Need more gloves");

        MessageRepository::create(
            &pool,
            NewMessage {
                user_id: "u2".to_string(),
                hospital_name: "H2".to_string(),
                query: "Oxygen supply status?".to_string(),
            },
        )
        .await
        .unwrap();

        // The board is shared: both users' messages come back
        let all = MessageRepository::list_all(&pool).await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
