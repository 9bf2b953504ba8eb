use crate::config::Config;
use crate::domain::ports::{AdminRepository, UserRepository};
use crate::domain::services::session_service::SessionService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub admin_repo: Arc<dyn AdminRepository>,
    pub session_service: Arc<SessionService>,
}
