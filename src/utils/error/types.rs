//! Error types for the auth service

use thiserror::Error;

/// Result type alias for the auth service
pub type Result<T> = std::result::Result<T, AuthError>;

/// Main error type for the auth service
#[derive(Error, Debug)]
pub enum AuthError {
    /// Lookup miss: user, session or reset token
    #[error("Not found: {0}")]
    NotFound(String),

    /// Duplicate registration
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Credential mismatch. Never distinguished from `NotFound` in a response.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Header, base64 or token parse failure
    #[error("Malformed input: {0}")]
    Malformed(String),

    /// Session past its TTL
    #[error("Expired: {0}")]
    Expired(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Crypto errors
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
