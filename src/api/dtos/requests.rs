use crate::domain::models::user::UserStatus;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Full-record replace: every field is resupplied. A missing status falls
/// back to active, matching the create default.
#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub status: UserStatus,
}

#[derive(Deserialize)]
pub struct ListUsersParams {
    pub page: Option<i64>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub status: Option<String>,
}
