//! Utility modules
//!
//! - **auth**: password hashing and token generation
//! - **error**: the crate error type and its HTTP mapping
//! - **logging**: PII redaction and the tracing formatter

pub mod auth;
pub mod error;
pub mod logging;
