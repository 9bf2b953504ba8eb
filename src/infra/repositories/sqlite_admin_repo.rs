use crate::domain::{models::admin::Admin, ports::AdminRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct SqliteAdminRepo {
    pool: SqlitePool,
}

impl SqliteAdminRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminRepository for SqliteAdminRepo {
    async fn find_by_username(&self, username: &str) -> Result<Option<Admin>, AppError> {
        sqlx::query_as::<_, Admin>(
            "SELECT id, username, password, created_at FROM admins WHERE username = ?",
        )
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn seed(&self, username: &str, password_hash: &str) -> Result<(), AppError> {
        sqlx::query("INSERT OR IGNORE INTO admins (username, password, created_at) VALUES (?, ?, ?)")
            .bind(username)
            .bind(password_hash)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
