use crate::domain::models::{
    admin::Admin,
    user::{NewUser, User, UserStats, UserUpdate},
};
use crate::domain::services::listing::ListQuery;
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Record count under the query's filter, ignoring pagination.
    async fn count(&self, query: &ListQuery) -> Result<i64, AppError>;
    /// One page of records under the same filter, ordered by the resolved
    /// sort field ascending.
    async fn list(&self, query: &ListQuery) -> Result<Vec<User>, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;
    /// Fails with `DuplicateEmail` if the email is already present.
    async fn insert(&self, user: &NewUser) -> Result<User, AppError>;
    /// Full-field replace. Fails with `NotFound` for an absent id and
    /// `DuplicateEmail` if the new email belongs to a different record.
    async fn update(&self, id: i64, user: &UserUpdate) -> Result<User, AppError>;
    /// Idempotent: deleting an absent id is a no-op success.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
    /// Three independent fresh counts over the unfiltered record set.
    async fn stats(&self) -> Result<UserStats, AppError>;
}

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<Admin>, AppError>;
    /// Inserts the credential row only if the username is not present yet.
    async fn seed(&self, username: &str, password_hash: &str) -> Result<(), AppError>;
}
