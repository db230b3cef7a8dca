use std::sync::Arc;

use crate::application::services::{LogService, UserService};
use crate::domain::entities::{Log, User};
use crate::infrastructure::persistence::{DataStore, MemoryStore};

/// User service wired to the in-memory tables.
pub type AppUserService = UserService<MemoryStore<User>, MemoryStore<Log>>;

/// Log service wired to the in-memory log table.
pub type AppLogService = LogService<MemoryStore<Log>>;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<AppUserService>,
    pub log_service: Arc<AppLogService>,
}

impl AppState {
    /// Builds both services on top of `store`.
    pub fn new(store: &DataStore) -> Self {
        Self {
            user_service: Arc::new(UserService::new(store.users.clone(), store.logs.clone())),
            log_service: Arc::new(LogService::new(store.logs.clone())),
        }
    }
}
