use crate::core::models::{User, UserLookup, UserPatch};
use crate::storage::UserStore;
use crate::utils::auth::crypto::new_token;
use crate::utils::error::{AuthError, Result};
use async_trait::async_trait;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, user};
use super::types::SeaOrmDatabase;

#[async_trait]
impl UserStore for SeaOrmDatabase {
    async fn find(&self, lookup: UserLookup) -> Result<Option<User>> {
        debug!("Finding user by {}", lookup.attribute());

        let condition = match lookup {
            UserLookup::Email(email) => user::Column::Email.eq(email),
            UserLookup::Id(id) => user::Column::Id.eq(id),
            UserLookup::SessionId(sid) => user::Column::SessionId.eq(sid),
            UserLookup::ResetToken(token) => user::Column::ResetToken.eq(token),
        };

        let user_model = entities::User::find()
            .filter(condition)
            .one(&self.db)
            .await
            .map_err(AuthError::Database)?;

        Ok(user_model.map(|model| model.to_domain_user()))
    }

    async fn insert(&self, email: &str, hashed_password: &str) -> Result<User> {
        let user = User::new(new_token(), email, hashed_password);
        debug!(user_id = %user.id, "Creating user");

        let active_model = user::Model::from_domain_user(&user);

        entities::User::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    AuthError::already_exists(format!("User {}", email))
                }
                _ => AuthError::Database(e),
            })?;

        Ok(user)
    }

    async fn update(&self, id: &str, patch: UserPatch) -> Result<()> {
        debug!("Updating user: {}", id);

        let mut user: user::ActiveModel = entities::User::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(AuthError::Database)?
            .ok_or_else(|| AuthError::not_found(format!("User {}", id)))?
            .into();

        if patch.is_empty() {
            return Ok(());
        }

        if let Some(hashed_password) = patch.hashed_password {
            user.hashed_password = Set(hashed_password);
        }
        if let Some(session_id) = patch.session_id {
            user.session_id = Set(session_id);
        }
        if let Some(reset_token) = patch.reset_token {
            user.reset_token = Set(reset_token);
        }

        user.update(&self.db)
            .await
            .map_err(AuthError::Database)?;

        Ok(())
    }

    async fn count(&self) -> Result<u64> {
        entities::User::find()
            .count(&self.db)
            .await
            .map_err(AuthError::Database)
    }
}
