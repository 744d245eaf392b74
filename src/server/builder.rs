//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{AuthError, Result};
use std::path::Path;
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| AuthError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config).await
    }
}

/// Load configuration from `path` when given, otherwise from the environment
pub async fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path).await,
        None => Config::from_env(),
    }
}

/// Build and run the server with the given configuration
pub async fn run_server(config: Config) -> Result<()> {
    let server = ServerBuilder::new().with_config(config).build().await?;

    info!("Server starting at: http://{}", server.config().address());
    info!("Routes:");
    info!("   GET    /                          - Welcome");
    info!("   POST   /users                     - Register");
    info!("   POST   /sessions                  - Log in");
    info!("   DELETE /sessions                  - Log out");
    info!("   GET    /profile                   - Profile");
    info!("   POST   /reset_password            - Request reset token");
    info!("   PUT    /reset_password            - Reset password");
    info!("   GET    /api/v1/status             - Status");
    info!("   GET    /api/v1/users/me           - Current user");
    info!("   POST   /api/v1/auth_session/login - Session login");

    server.start().await
}
