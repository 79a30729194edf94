use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use super::models::Content;
use super::StoreError;

/// Payload for a new inventory record. Nothing is required; absent fields
/// persist as NULL.
#[derive(Debug, Default)]
pub struct NewContent {
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub manufacturing_date: Option<DateTime<Utc>>,
    pub hospital: Option<String>,
    pub region: Option<String>,
}

/// The four mutable fields. A `None` leaves the stored value untouched;
/// owner, hospital and region are immutable after creation.
#[derive(Debug, Default)]
pub struct ContentChanges {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub manufacturing_date: Option<DateTime<Utc>>,
}

pub struct ContentRepository;

impl ContentRepository {
    pub async fn create(pool: &SqlitePool, item: NewContent) -> Result<Content, StoreError> {
        let id = Uuid::new_v4().to_string();
        let created_at = Utc::now();

        let record = sqlx::query_as::<_, Content>(
            r#"
INSERT INTO content (id, user_id, name, quantity, expiry_date, manufacturing_date, hospital, region, created_at)
VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
RETURNING *
            "#,
        )
        .bind(&id)
        .bind(item.user_id)
        .bind(item.name)
        .bind(item.quantity)
        .bind(item.expiry_date)
        .bind(item.manufacturing_date)
        .bind(item.hospital)
        .bind(item.region)
        .bind(created_at)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Content>, StoreError> {
        let records = sqlx::query_as::<_, Content>("SELECT * FROM content ORDER BY created_at")
            .fetch_all(pool)
            .await?;

        Ok(records)
    }

    pub async fn list_by_user(
        pool: &SqlitePool,
        user_id: &str,
    ) -> Result<Vec<Content>, StoreError> {
        let records = sqlx::query_as::<_, Content>(
            "SELECT * FROM content WHERE user_id = ? ORDER BY created_at",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Apply `changes` to the record with the given id and return the
    /// post-update row, or `None` when the id is unknown.
    pub async fn update(
        pool: &SqlitePool,
        id: &str,
        changes: ContentChanges,
    ) -> Result<Option<Content>, StoreError> {
        let record = sqlx::query_as::<_, Content>(
            r#"
UPDATE content
SET name = COALESCE(?, name),
    quantity = COALESCE(?, quantity),
    expiry_date = COALESCE(?, expiry_date),
    manufacturing_date = COALESCE(?, manufacturing_date)
WHERE id = ?
RETURNING *
            "#,
        )
        .bind(changes.name)
        .bind(changes.quantity)
        .bind(changes.expiry_date)
        .bind(changes.manufacturing_date)
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Remove the record if it exists; returns the number of rows deleted.
    pub async fn delete(pool: &SqlitePool, id: &str) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM content WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}
