use user_admin_backend::{
    api::router::create_router,
    config::Config,
    domain::services::session_service::SessionService,
    infra::factory::seed_default_admin,
    infra::repositories::{sqlite_admin_repo::SqliteAdminRepo, sqlite_user_repo::SqliteUserRepo},
    state::AppState,
};

use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            session_secret: "test-secret".to_string(),
            admin_username: "admin".to_string(),
            admin_password: "admin123".to_string(),
        };

        let admin_repo = Arc::new(SqliteAdminRepo::new(pool.clone()));
        seed_default_admin(
            admin_repo.as_ref(),
            &config.admin_username,
            &config.admin_password,
        )
        .await;

        let state = Arc::new(AppState {
            config: config.clone(),
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            admin_repo,
            session_service: Arc::new(SessionService::new(&config)),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Logs in and returns the session cookie value for gated requests.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let payload = serde_json::json!({
            "username": username,
            "password": password
        });

        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/auth/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        if !response.status().is_success() {
            panic!("Login failed in test helper: status {}", response.status());
        }

        let session_cookie = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|h| h.to_str().unwrap().to_string())
            .find(|c| c.contains("admin_session="))
            .expect("No admin_session cookie returned");

        let start = session_cookie.find("admin_session=").unwrap() + "admin_session=".len();
        let end = session_cookie[start..]
            .find(';')
            .unwrap_or(session_cookie.len() - start);
        session_cookie[start..start + end].to_string()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
