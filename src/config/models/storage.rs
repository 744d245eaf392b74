//! Storage configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Storage configuration
///
/// Without a database URL users live in process memory and vanish on restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Database URL (`sqlite://...` or `postgres://...`)
    #[serde(default)]
    pub database_url: Option<String>,
    /// Maximum connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
        }
    }
}

impl StorageConfig {
    /// Merge storage configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.database_url.is_some() {
            self.database_url = other.database_url;
        }
        if other.max_connections != default_max_connections() {
            self.max_connections = other.max_connections;
        }
        if other.connection_timeout != default_connection_timeout() {
            self.connection_timeout = other.connection_timeout;
        }
        self
    }

    pub fn uses_database(&self) -> bool {
        self.database_url.is_some()
    }

    pub fn validate(&self) -> Result<(), String> {
        if let Some(url) = &self.database_url {
            if url.is_empty() {
                return Err("Database URL cannot be empty".to_string());
            }
        }
        if self.max_connections == 0 {
            return Err("Max connections cannot be 0".to_string());
        }
        Ok(())
    }
}
