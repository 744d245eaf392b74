//! Common test utilities for userauth-rs

pub mod fixtures;

pub use fixtures::{ServiceFactory, fast_cost};
