use chrono::{DateTime, Utc};
use serde::Serialize;

/// Registered account. The `password` column holds the bcrypt hash; the
/// struct is never serialized into a response wholesale, so the hash stays
/// server-side (profile responses are built field by field).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
    pub hospital: String,
    pub region: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Inventory record: a quantity of a named medical supply at a hospital.
/// Creation performs no field validation, so everything past the id is
/// nullable.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub id: String,
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub manufacturing_date: Option<DateTime<Utc>>,
    pub hospital: Option<String>,
    pub region: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Inquiry on the shared board; append-only.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub user_id: String,
    pub hospital_name: String,
    pub query: String,
    pub created_at: DateTime<Utc>,
}
