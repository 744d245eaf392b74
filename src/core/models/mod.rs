//! Core data models
//!
//! This module defines the user record and the value types used to look it up
//! and modify it.

pub mod user;

pub use user::*;
