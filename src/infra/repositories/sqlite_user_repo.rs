use crate::domain::models::user::{NewUser, User, UserStats, UserStatus, UserUpdate};
use crate::domain::ports::UserRepository;
use crate::domain::services::listing::{self, ListQuery};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct SqliteUserRepo {
    pool: SqlitePool,
}

impl SqliteUserRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepo {
    async fn count(&self, query: &ListQuery) -> Result<i64, AppError> {
        let sql = listing::build_sql(query);
        let mut stmt = sqlx::query_scalar::<_, i64>(&sql.count_sql);
        for bind in &sql.binds {
            stmt = stmt.bind(bind);
        }
        stmt.fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self, query: &ListQuery) -> Result<Vec<User>, AppError> {
        let sql = listing::build_sql(query);
        let mut stmt = sqlx::query_as::<_, User>(&sql.list_sql);
        for bind in &sql.binds {
            stmt = stmt.bind(bind);
        }
        stmt.fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT id, name, email, phone, address, status, created_at, updated_at \
             FROM users WHERE id = ?",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn insert(&self, user: &NewUser) -> Result<User, AppError> {
        let now = Utc::now();
        sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, phone, address, status, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?) \
             RETURNING id, name, email, phone, address, status, created_at, updated_at",
        )
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.phone)
            .bind(&user.address)
            .bind(UserStatus::Active)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from_sqlx)
    }

    async fn update(&self, id: i64, user: &UserUpdate) -> Result<User, AppError> {
        // Single statement: the uniqueness constraint decides the race, and
        // an absent id simply returns no row.
        sqlx::query_as::<_, User>(
            "UPDATE users SET name = ?, email = ?, phone = ?, address = ?, status = ?, updated_at = ? \
             WHERE id = ? \
             RETURNING id, name, email, phone, address, status, created_at, updated_at",
        )
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.phone)
            .bind(&user.address)
            .bind(user.status)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from_sqlx)?
            .ok_or_else(|| AppError::NotFound("User not found".into()))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn stats(&self) -> Result<UserStats, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        let active =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE status = 'active'")
                .fetch_one(&self.pool)
                .await
                .map_err(AppError::Database)?;
        let inactive =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE status = 'inactive'")
                .fetch_one(&self.pool)
                .await
                .map_err(AppError::Database)?;

        Ok(UserStats {
            total,
            active,
            inactive,
        })
    }
}
