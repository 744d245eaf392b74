//! Storage layer
//!
//! Users are persisted behind the [`UserStore`] trait. A SeaORM database is
//! used when a database URL is configured, otherwise an in-memory store.

/// Database storage module
pub mod database;
/// In-memory storage module
pub mod memory;

#[cfg(test)]
mod tests;

pub use database::Database;
pub use memory::MemoryUserStore;

use crate::config::StorageConfig;
use crate::core::models::{User, UserLookup, UserPatch};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// Persistence boundary for user records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find the first user matching a lookup
    async fn find(&self, lookup: UserLookup) -> Result<Option<User>>;

    /// Insert a new user with a freshly assigned id.
    ///
    /// Fails with `AlreadyExists` when the email is taken.
    async fn insert(&self, email: &str, hashed_password: &str) -> Result<User>;

    /// Apply a patch to the user with `id`.
    ///
    /// Fails with `NotFound` when no such user exists.
    async fn update(&self, id: &str, patch: UserPatch) -> Result<()>;

    /// Number of stored users
    async fn count(&self) -> Result<u64>;
}

/// Open the configured user store and prepare its schema
pub async fn connect(config: &StorageConfig) -> Result<Arc<dyn UserStore>> {
    match &config.database_url {
        Some(url) => {
            info!("Using database user store");
            let database = Database::new(url, config).await?;
            database.migrate().await?;
            database.health_check().await?;
            Ok(Arc::new(database))
        }
        None => {
            warn!("No DATABASE_URL configured, users are kept in memory");
            Ok(Arc::new(MemoryUserStore::new()))
        }
    }
}
