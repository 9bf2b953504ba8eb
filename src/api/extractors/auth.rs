use axum::{
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, StatusCode},
};
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::Span;

use crate::api::handlers::auth::SESSION_COOKIE;
use crate::domain::services::session_service::SessionClaims;
use crate::state::AppState;

/// Session gate: every gated handler takes this extractor, so the check
/// runs before the handler body does.
pub struct AuthAdmin(pub SessionClaims);

impl<S> FromRequestParts<S> for AuthAdmin
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let cookies = parts
            .extensions
            .get::<Cookies>()
            .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;

        let token = cookies
            .get(SESSION_COOKIE)
            .ok_or(StatusCode::UNAUTHORIZED)?
            .value()
            .to_string();

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let claims = app_state
            .session_service
            .verify(&token)
            .map_err(|_| StatusCode::UNAUTHORIZED)?;

        Span::current().record("admin_id", claims.sub);
        Span::current().record("admin_username", claims.username.as_str());

        Ok(AuthAdmin(claims))
    }
}
