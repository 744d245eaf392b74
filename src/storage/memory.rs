//! In-memory user store

use super::UserStore;
use crate::core::models::{User, UserLookup, UserPatch};
use crate::utils::auth::crypto::new_token;
use crate::utils::error::{AuthError, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

/// User store backed by a vector in process memory.
///
/// Insertion order is kept so lookups return the oldest matching user first.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find(&self, lookup: UserLookup) -> Result<Option<User>> {
        debug!("Finding user by {}", lookup.attribute());
        let users = self.users.read();
        Ok(users.iter().find(|user| lookup.matches(user)).cloned())
    }

    async fn insert(&self, email: &str, hashed_password: &str) -> Result<User> {
        let mut users = self.users.write();
        if users.iter().any(|user| user.email == email) {
            return Err(AuthError::already_exists(format!("User {}", email)));
        }

        let user = User::new(new_token(), email, hashed_password);
        users.push(user.clone());
        debug!(user_id = %user.id, "User inserted");
        Ok(user)
    }

    async fn update(&self, id: &str, patch: UserPatch) -> Result<()> {
        let mut users = self.users.write();
        let user = users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| AuthError::not_found(format!("User {}", id)))?;
        user.apply(patch);
        Ok(())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.users.read().len() as u64)
    }
}
