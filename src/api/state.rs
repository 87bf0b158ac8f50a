//! Application state shared by all handlers.

use std::sync::Arc;

use crate::infra::{Database, Persistence};
use crate::services::UserCrud;

/// Application state (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User accounts resource
    pub users: UserCrud,
    /// Database handle, for health checks
    pub database: Arc<Database>,
    /// Title published in the OpenAPI document
    pub api_title: String,
}

impl AppState {
    /// Build all resources over one connection pool.
    pub fn new(database: Arc<Database>, api_title: impl Into<String>) -> Self {
        let persistence = Arc::new(Persistence::new(database.get_connection()));

        Self {
            users: UserCrud::new(persistence),
            database,
            api_title: api_title.into(),
        }
    }
}
