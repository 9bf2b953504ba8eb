use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use crate::api::extractors::auth::AuthAdmin;
use crate::error::AppError;
use crate::state::AppState;

pub async fn stats(
    State(state): State<Arc<AppState>>,
    _admin: AuthAdmin,
) -> Result<impl IntoResponse, AppError> {
    let stats = state.user_repo.stats().await?;
    Ok(Json(stats))
}
