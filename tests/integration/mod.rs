//! Integration tests for userauth-rs
//!
//! These tests drive the public API end to end without mocking.

pub mod auth_flow_tests;
pub mod config_tests;
pub mod gate_tests;
pub mod redaction_tests;
