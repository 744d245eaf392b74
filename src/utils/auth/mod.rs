//! Authentication and security utilities
//!
//! This module provides password hashing and opaque token generation.

pub mod crypto;

// Re-export commonly used types and functions
pub use crypto::*;
