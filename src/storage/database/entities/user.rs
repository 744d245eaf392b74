use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// User ID
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Email address
    #[sea_orm(unique)]
    pub email: String,

    /// Password hash (PHC string)
    pub hashed_password: String,

    /// Latest session id
    pub session_id: Option<String>,

    /// Outstanding password reset token
    pub reset_token: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert to the domain user
    pub fn to_domain_user(&self) -> crate::core::models::User {
        crate::core::models::User {
            id: self.id.clone(),
            email: self.email.clone(),
            hashed_password: self.hashed_password.clone(),
            session_id: self.session_id.clone(),
            reset_token: self.reset_token.clone(),
        }
    }

    /// Build an insertable model from a domain user
    pub fn from_domain_user(user: &crate::core::models::User) -> ActiveModel {
        ActiveModel {
            id: Set(user.id.clone()),
            email: Set(user.email.clone()),
            hashed_password: Set(user.hashed_password.clone()),
            session_id: Set(user.session_id.clone()),
            reset_token: Set(user.reset_token.clone()),
        }
    }
}
