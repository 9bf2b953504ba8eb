use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use time::Duration;
use tower_cookies::cookie::SameSite;
use tower_cookies::{Cookie, Cookies};
use tracing::info;

use crate::api::dtos::responses::AuthResponse;
use crate::error::AppError;
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "admin_session";

#[derive(serde::Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let admin = state
        .admin_repo
        .find_by_username(&payload.username)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let parsed_hash = PasswordHash::new(&admin.password).map_err(|_| AppError::Internal)?;

    Argon2::default()
        .verify_password(payload.password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::Unauthorized)?;

    let token = state.session_service.issue(&admin)?;
    set_session_cookie(&cookies, &token);

    info!("Admin logged in: {}", admin.username);

    Ok(Json(AuthResponse {
        username: admin.username,
    }))
}

pub async fn logout(cookies: Cookies) -> impl IntoResponse {
    cookies.remove(Cookie::build((SESSION_COOKIE, "")).path("/").into());

    info!("Admin logged out");

    StatusCode::OK
}

fn set_session_cookie(cookies: &Cookies, token: &str) {
    let mut cookie = Cookie::new(SESSION_COOKIE, token.to_string());
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Strict);
    cookie.set_path("/");
    cookie.set_max_age(Duration::hours(8));
    cookies.add(cookie);
}
