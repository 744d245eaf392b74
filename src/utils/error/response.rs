//! HTTP response handling for errors

use super::types::AuthError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

/// Error body returned to HTTP clients
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new<S: Into<String>>(error: S) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl AuthError {
    /// Message safe to show a client.
    ///
    /// Auth failures share one message so a client cannot tell which part of
    /// a credential pair was wrong, or whether the account exists.
    pub fn public_message(&self) -> &'static str {
        match self {
            e if e.is_auth_failure() => "Unauthorized",
            AuthError::AlreadyExists(_) => "email already registered",
            AuthError::Database(_) => "Database operation failed",
            _ => "Internal server error",
        }
    }
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            e if e.is_auth_failure() => StatusCode::UNAUTHORIZED,
            AuthError::AlreadyExists(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.public_message()))
    }
}
