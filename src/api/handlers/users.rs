use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateUserRequest, ListUsersParams, UpdateUserRequest};
use crate::api::dtos::responses::UserListResponse;
use crate::api::extractors::auth::AuthAdmin;
use crate::domain::models::user::{NewUser, UserUpdate};
use crate::domain::services::{listing, listing::ListQuery, validation};
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_users(
    State(state): State<Arc<AppState>>,
    _admin: AuthAdmin,
    Query(params): Query<ListUsersParams>,
) -> Result<impl IntoResponse, AppError> {
    let query = ListQuery::from_params(params.search, params.status, params.sort_by, params.page);

    let total = state.user_repo.count(&query).await?;
    let users = state.user_repo.list(&query).await?;

    Ok(Json(UserListResponse {
        users,
        page: query.page,
        total,
        total_pages: listing::total_pages(total),
        search: query.search,
        status: query.status.as_str(),
        sort_by: query.sort.column(),
    }))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    _admin: AuthAdmin,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .user_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    Ok(Json(user))
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    _admin: AuthAdmin,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let name = payload.name.trim().to_string();
    let email = payload.email.trim().to_string();
    let phone = normalize_optional(payload.phone);
    let address = normalize_optional(payload.address);

    validate_fields(&name, &email, phone.as_deref())?;

    let created = state
        .user_repo
        .insert(&NewUser {
            name,
            email,
            phone,
            address,
        })
        .await?;

    info!("User created: {}", created.id);

    Ok(Json(created))
}

pub async fn update_user(
    State(state): State<Arc<AppState>>,
    _admin: AuthAdmin,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let name = payload.name.trim().to_string();
    let email = payload.email.trim().to_string();
    let phone = normalize_optional(payload.phone);
    let address = normalize_optional(payload.address);

    validate_fields(&name, &email, phone.as_deref())?;

    let updated = state
        .user_repo
        .update(
            id,
            &UserUpdate {
                name,
                email,
                phone,
                address,
                status: payload.status,
            },
        )
        .await?;

    info!("User updated: {}", updated.id);

    Ok(Json(updated))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    _admin: AuthAdmin,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.user_repo.delete(id).await?;

    info!("User deleted: {}", id);

    Ok(Json(serde_json::json!({ "status": "deleted" })))
}

fn normalize_optional(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Runs before any store access; a failure here never mutates state.
fn validate_fields(name: &str, email: &str, phone: Option<&str>) -> Result<(), AppError> {
    if !validation::validate_name(name) {
        return Err(AppError::Validation {
            field: "name",
            reason: "Name must be at least 2 characters".into(),
        });
    }

    if !validation::validate_email(email) {
        return Err(AppError::Validation {
            field: "email",
            reason: "Invalid email format".into(),
        });
    }

    if !validation::validate_phone(phone.unwrap_or("")) {
        return Err(AppError::Validation {
            field: "phone",
            reason: "Phone must be at least 10 digits".into(),
        });
    }

    Ok(())
}
