//! Helper functions for creating specific error types

use super::types::AuthError;

/// Helper functions for creating specific errors
impl AuthError {
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn already_exists<S: Into<String>>(message: S) -> Self {
        Self::AlreadyExists(message.into())
    }

    pub fn invalid_credentials<S: Into<String>>(message: S) -> Self {
        Self::InvalidCredentials(message.into())
    }

    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::Malformed(message.into())
    }

    pub fn expired<S: Into<String>>(message: S) -> Self {
        Self::Expired(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn crypto<S: Into<String>>(message: S) -> Self {
        Self::Crypto(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}

impl AuthError {
    /// Whether the error is one of the authentication failures that must
    /// collapse into a single "unauthorized" outcome for callers.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::InvalidCredentials(_) | Self::Malformed(_) | Self::Expired(_)
        )
    }
}
