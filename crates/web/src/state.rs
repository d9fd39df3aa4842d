//! Application state for dependency injection.

use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use common::AppResult;
use user_service_lib::infra::Database;
use user_service_lib::repository::UserStore;
use user_service_lib::service::{UserManager, UserService};

use crate::config::WebConfig;
use crate::templates::Templates;

/// Application state shared across handlers.
///
/// Built once at startup and cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub database: Arc<Database>,
    pub templates: Arc<Templates>,
    pub config: Arc<WebConfig>,
    cookie_key: Key,
}

impl AppState {
    /// Wire the service stack on top of an open database.
    pub fn new(database: Database, config: WebConfig) -> AppResult<Self> {
        let user_repo = Arc::new(UserStore::new(database.get_connection()));
        let user_service = Arc::new(UserManager::new(user_repo));

        Self::with_service(database, config, user_service)
    }

    /// Build the state around an already wired user service.
    pub fn with_service(
        database: Database,
        config: WebConfig,
        user_service: Arc<dyn UserService>,
    ) -> AppResult<Self> {
        Ok(Self {
            user_service,
            database: Arc::new(database),
            templates: Arc::new(Templates::load()?),
            cookie_key: config.cookie_key(),
            config: Arc::new(config),
        })
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}
