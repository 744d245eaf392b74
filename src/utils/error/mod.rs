//! Error handling for the auth service
//!
//! This module defines the error taxonomy shared by every component and its
//! mapping onto HTTP responses.

#![allow(missing_docs)]

mod helpers;
mod response;
#[cfg(test)]
mod tests;
mod types;

pub use response::ErrorResponse;
pub use types::{AuthError, Result};
