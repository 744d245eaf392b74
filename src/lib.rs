//! # userauth-rs
//!
//! User authentication service built on actix-web and SeaORM.
//!
//! ## Features
//!
//! - **PII redaction**: log formatter that masks configured fields in every record
//! - **Credential hashing**: salted Argon2id password hashes
//! - **Basic auth**: `Authorization: Basic` header parsing and verification
//! - **Sessions**: opaque session ids with optional expiry
//! - **Password reset**: single-use reset tokens that also force a logout
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use userauth_rs::{AuthService, Config, storage::MemoryUserStore};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let auth = AuthService::from_config(&config.auth, Arc::new(MemoryUserStore::new()))?;
//!
//!     auth.register("alice@example.com", "s3cret").await?;
//!     let session_id = auth.create_session("alice@example.com").await;
//!     println!("session: {:?}", session_id);
//!     Ok(())
//! }
//! ```
//!
//! ## Server Mode
//!
//! ```rust,no_run
//! use userauth_rs::{Config, server::builder::run_server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/userauth.yaml").await?;
//!     run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::{AuthService, PathAuthGate, SessionStore, requires_auth};
pub use config::Config;
pub use core::models::{User, UserLookup, UserPatch};
pub use storage::UserStore;
pub use utils::auth::crypto::{CredentialHasher, HashCost, new_token};
pub use utils::error::{AuthError, Result};
pub use utils::logging::{RedactingFormatter, RedactionSpec, redact};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
