//! Configuration data models
//!
//! This module defines all configuration structures used by the service.

#![allow(missing_docs)]

pub mod auth;
pub mod logging;
pub mod server;
pub mod storage;

pub use auth::*;
pub use logging::*;
pub use server::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    5000
}

pub fn default_session_name() -> String {
    "session_id".to_string()
}

pub fn default_excluded_paths() -> Vec<String> {
    vec![
        "/api/v1/status/".to_string(),
        "/api/v1/unauthorized/".to_string(),
        "/api/v1/forbidden/".to_string(),
        "/api/v1/auth_session/login/".to_string(),
    ]
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_pii_fields() -> Vec<String> {
    crate::utils::logging::DEFAULT_PII_FIELDS
        .iter()
        .map(|f| f.to_string())
        .collect()
}

pub fn default_redaction() -> String {
    crate::utils::logging::redaction::DEFAULT_MARKER.to_string()
}

pub fn default_separator() -> String {
    crate::utils::logging::redaction::DEFAULT_SEPARATOR.to_string()
}

/// Split a comma separated environment value, dropping blank items
pub(crate) fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
