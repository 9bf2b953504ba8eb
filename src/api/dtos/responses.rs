use crate::domain::models::user::User;
use serde::Serialize;

/// One listing page plus the echo of the filters as they were resolved,
/// so the client renders exactly what the query used.
#[derive(Serialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
    pub page: i64,
    pub total: i64,
    pub total_pages: i64,
    pub search: String,
    pub status: &'static str,
    pub sort_by: &'static str,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub username: String,
}
