//! Application state shared across HTTP handlers

use crate::auth::AuthService;
use crate::config::Config;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for sharing across worker threads.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Authentication service
    pub auth: Arc<AuthService>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, auth: AuthService) -> Self {
        Self {
            config: Arc::new(config),
            auth: Arc::new(auth),
        }
    }
}
