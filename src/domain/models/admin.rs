use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Serialize, FromRow, Clone)]
pub struct Admin {
    pub id: i64,
    pub username: String,
    // argon2 hash, never serialized out
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
}
