use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use argon2::{password_hash::{PasswordHasher, SaltString}, Argon2};
use rand::rngs::OsRng;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::domain::ports::AdminRepository;
use crate::domain::services::session_service::SessionService;
use crate::infra::repositories::{
    sqlite_admin_repo::SqliteAdminRepo, sqlite_user_repo::SqliteUserRepo,
};
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    info!("Initializing SQLite connection with WAL Mode...");

    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .expect("Invalid SQLite connection string")
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await
        .expect("Failed to connect to SQLite");

    run_migrations(&pool).await;

    let admin_repo = Arc::new(SqliteAdminRepo::new(pool.clone()));
    seed_default_admin(
        admin_repo.as_ref(),
        &config.admin_username,
        &config.admin_password,
    )
    .await;

    AppState {
        config: config.clone(),
        user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
        admin_repo,
        session_service: Arc::new(SessionService::new(config)),
    }
}

async fn run_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}

/// Idempotent bootstrap: the insert is ignored when the username exists.
pub async fn seed_default_admin(repo: &dyn AdminRepository, username: &str, password: &str) {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .expect("Failed to hash admin password")
        .to_string();

    repo.seed(username, &password_hash)
        .await
        .expect("Failed to seed default admin");

    info!("Default admin ensured: {}", username);
}
