//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::domain::AppInfo;
use crate::infra::InMemoryUserRepository;
use crate::services::{UserManager, UserService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Static metadata for the info endpoint
    pub app_info: Arc<AppInfo>,
}

impl AppState {
    /// Create application state backed by an in-memory repository.
    ///
    /// The repository is seeded with the sample users when `seed` is set.
    pub fn in_memory(config: &Config, seed: bool) -> Self {
        let repository = if seed {
            InMemoryUserRepository::seeded()
        } else {
            InMemoryUserRepository::new()
        };

        Self::new(
            Arc::new(UserManager::new(Arc::new(repository))),
            config.app_info(),
        )
    }

    /// Create new application state with manually injected services.
    pub fn new(user_service: Arc<dyn UserService>, app_info: AppInfo) -> Self {
        Self {
            user_service,
            app_info: Arc::new(app_info),
        }
    }
}
