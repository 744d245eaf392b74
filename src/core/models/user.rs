//! User models
//!
//! This module defines user-related data structures.

use serde::{Deserialize, Serialize};

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier assigned on insert
    pub id: String,
    /// Email address (unique)
    pub email: String,
    /// Password hash
    #[serde(skip_serializing)]
    pub hashed_password: String,
    /// Latest session id, mirrored from the session store
    #[serde(skip_serializing)]
    pub session_id: Option<String>,
    /// Outstanding password reset token
    #[serde(skip_serializing)]
    pub reset_token: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>, email: impl Into<String>, hashed_password: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            hashed_password: hashed_password.into(),
            session_id: None,
            reset_token: None,
        }
    }

    /// Apply a patch in place
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(hashed_password) = patch.hashed_password {
            self.hashed_password = hashed_password;
        }
        if let Some(session_id) = patch.session_id {
            self.session_id = session_id;
        }
        if let Some(reset_token) = patch.reset_token {
            self.reset_token = reset_token;
        }
    }
}

/// The single attribute a user is looked up by
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLookup {
    Email(String),
    Id(String),
    SessionId(String),
    ResetToken(String),
}

impl UserLookup {
    /// Whether `user` is the record this lookup names
    pub fn matches(&self, user: &User) -> bool {
        match self {
            UserLookup::Email(email) => &user.email == email,
            UserLookup::Id(id) => &user.id == id,
            UserLookup::SessionId(sid) => user.session_id.as_ref() == Some(sid),
            UserLookup::ResetToken(token) => user.reset_token.as_ref() == Some(token),
        }
    }

    pub fn attribute(&self) -> &'static str {
        match self {
            UserLookup::Email(_) => "email",
            UserLookup::Id(_) => "id",
            UserLookup::SessionId(_) => "session_id",
            UserLookup::ResetToken(_) => "reset_token",
        }
    }
}

/// Partial update of a user.
///
/// `None` leaves a column untouched. For the nullable columns `Some(None)`
/// clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub hashed_password: Option<String>,
    pub session_id: Option<Option<String>>,
    pub reset_token: Option<Option<String>>,
}

impl UserPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hashed_password(mut self, hashed_password: impl Into<String>) -> Self {
        self.hashed_password = Some(hashed_password.into());
        self
    }

    pub fn session_id(mut self, session_id: Option<String>) -> Self {
        self.session_id = Some(session_id);
        self
    }

    pub fn reset_token(mut self, reset_token: Option<String>) -> Self {
        self.reset_token = Some(reset_token);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.hashed_password.is_none() && self.session_id.is_none() && self.reset_token.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serialization_hides_secrets() {
        let mut user = User::new("u1", "bob@example.com", "$argon2id$hash");
        user.session_id = Some("sid".to_string());
        user.reset_token = Some("tok".to_string());

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json, serde_json::json!({"id": "u1", "email": "bob@example.com"}));
    }

    #[test]
    fn test_patch_apply() {
        let mut user = User::new("u1", "bob@example.com", "h1");
        user.reset_token = Some("tok".to_string());

        user.apply(UserPatch::new().session_id(Some("sid".to_string())));
        assert_eq!(user.session_id.as_deref(), Some("sid"));
        assert_eq!(user.reset_token.as_deref(), Some("tok"));
        assert_eq!(user.hashed_password, "h1");

        user.apply(UserPatch::new().hashed_password("h2").reset_token(None));
        assert_eq!(user.hashed_password, "h2");
        assert!(user.reset_token.is_none());
        assert_eq!(user.session_id.as_deref(), Some("sid"));
    }

    #[test]
    fn test_lookup_matches() {
        let mut user = User::new("u1", "bob@example.com", "h");
        assert!(UserLookup::Email("bob@example.com".into()).matches(&user));
        assert!(UserLookup::Id("u1".into()).matches(&user));
        assert!(!UserLookup::SessionId("sid".into()).matches(&user));

        user.session_id = Some("sid".into());
        assert!(UserLookup::SessionId("sid".into()).matches(&user));
        assert!(!UserLookup::ResetToken("sid".into()).matches(&user));
    }

    #[test]
    fn test_empty_patch() {
        assert!(UserPatch::new().is_empty());
        assert!(!UserPatch::new().reset_token(None).is_empty());
    }
}
