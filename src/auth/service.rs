//! Authentication service
//!
//! Registration, login, sessions and password reset over a [`UserStore`].

use super::extractor::AUTHORIZATION;
use super::gate::PathAuthGate;
use super::session::SessionStore;
use super::strategy::{CredentialStrategy, Credentials, SessionCookieStrategy, strategy_for};
use crate::config::{AuthConfig, default_excluded_paths, default_session_name};
use crate::core::models::{User, UserLookup, UserPatch};
use crate::server::request::AuthRequest;
use crate::storage::UserStore;
use crate::utils::auth::crypto::{CredentialHasher, new_token};
use crate::utils::error::{AuthError, Result};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Main authentication service
///
/// Read-modify-write flows (register, session creation and teardown, reset)
/// run under one async mutex so two of them never interleave on the same
/// user record.
pub struct AuthService {
    users: Arc<dyn UserStore>,
    sessions: Arc<SessionStore>,
    hasher: CredentialHasher,
    strategy: Arc<dyn CredentialStrategy>,
    gate: PathAuthGate,
    session_name: String,
    session_ttl: i64,
    lock: Mutex<()>,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("strategy", &self.strategy.name())
            .field("session_name", &self.session_name)
            .field("session_ttl", &self.session_ttl)
            .field("sessions", &self.sessions.len())
            .finish_non_exhaustive()
    }
}

impl AuthService {
    /// Create a service with session-cookie auth, no expiry and the default exempt paths
    pub fn new(users: Arc<dyn UserStore>, sessions: Arc<SessionStore>, hasher: CredentialHasher) -> Self {
        let session_name = default_session_name();
        Self {
            users,
            sessions,
            hasher,
            strategy: Arc::new(SessionCookieStrategy::new(session_name.clone())),
            gate: PathAuthGate::new(default_excluded_paths()),
            session_name,
            session_ttl: 0,
            lock: Mutex::new(()),
        }
    }

    /// Build the service described by the auth configuration
    pub fn from_config(config: &AuthConfig, users: Arc<dyn UserStore>) -> Result<Self> {
        let hasher = CredentialHasher::new(config.hash_cost)?;
        let service = Self::new(users, Arc::new(SessionStore::new()), hasher)
            .with_session_name(config.session_name.clone())
            .with_strategy(strategy_for(config.auth_type, &config.session_name))
            .with_gate(PathAuthGate::new(config.excluded_paths.clone()))
            .with_session_ttl(config.session_ttl());

        info!(
            strategy = service.strategy.name(),
            session_ttl = service.session_ttl,
            "Authentication service initialized"
        );
        Ok(service)
    }

    pub fn with_strategy(mut self, strategy: Arc<dyn CredentialStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_gate(mut self, gate: PathAuthGate) -> Self {
        self.gate = gate;
        self
    }

    /// Session lifetime in seconds; `0` or negative never expires
    pub fn with_session_ttl(mut self, ttl_seconds: i64) -> Self {
        self.session_ttl = ttl_seconds;
        self
    }

    pub fn with_session_name(mut self, session_name: impl Into<String>) -> Self {
        self.session_name = session_name.into();
        self
    }

    pub fn sessions(&self) -> &Arc<SessionStore> {
        &self.sessions
    }

    pub fn users(&self) -> &Arc<dyn UserStore> {
        &self.users
    }

    pub fn session_name(&self) -> &str {
        &self.session_name
    }

    pub fn session_ttl(&self) -> i64 {
        self.session_ttl
    }

    pub fn strategy(&self) -> &dyn CredentialStrategy {
        self.strategy.as_ref()
    }

    /// Register a new user.
    ///
    /// Fails with `AlreadyExists` when the email is taken; the existing
    /// record is left untouched.
    pub async fn register(&self, email: &str, password: &str) -> Result<User> {
        let _guard = self.lock.lock().await;

        if self
            .users
            .find(UserLookup::Email(email.to_string()))
            .await?
            .is_some()
        {
            return Err(AuthError::already_exists(format!("User {}", email)));
        }

        let hashed_password = self.hasher.hash(password)?;
        let user = self.users.insert(email, &hashed_password).await?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Whether `email` and `password` identify a user
    pub async fn login(&self, email: &str, password: &str) -> bool {
        self.user_from_credentials(email, password).await.is_some()
    }

    /// The user identified by `email` and `password`
    pub async fn user_from_credentials(&self, email: &str, password: &str) -> Option<User> {
        let user = self.find(UserLookup::Email(email.to_string())).await?;
        if self.hasher.verify(&user.hashed_password, password) {
            Some(user)
        } else {
            debug!(user_id = %user.id, "Password mismatch");
            None
        }
    }

    /// Open a session for the user with `email`.
    ///
    /// Any earlier session of that user is destroyed, so only the newest
    /// survives. The new id is mirrored on the user record.
    pub async fn create_session(&self, email: &str) -> Option<String> {
        let _guard = self.lock.lock().await;

        let user = self.find(UserLookup::Email(email.to_string())).await?;

        let replaced = self.sessions.destroy_for_user(&user.id);
        if replaced > 0 {
            debug!(user_id = %user.id, replaced, "Replacing previous session");
        }

        let session_id = self.sessions.create(&user.id)?;

        if let Err(e) = self
            .users
            .update(&user.id, UserPatch::new().session_id(Some(session_id.clone())))
            .await
        {
            warn!(user_id = %user.id, "Failed to record session on user: {}", e);
            self.sessions.destroy(&session_id);
            return None;
        }

        info!(user_id = %user.id, "Session created");
        Some(session_id)
    }

    /// The user owning a live session
    pub async fn resolve_session(&self, session_id: &str) -> Option<User> {
        let user_id = self.sessions.resolve(session_id, self.session_ttl)?;

        let user = self.find(UserLookup::Id(user_id)).await;
        if user.is_none() {
            debug!("Session refers to a user that no longer exists");
        }
        user
    }

    /// Drop every session of `user_id`. Never fails; errors are logged.
    pub async fn destroy_session(&self, user_id: &str) {
        if user_id.is_empty() {
            return;
        }

        let _guard = self.lock.lock().await;

        let destroyed = self.sessions.destroy_for_user(user_id);
        match self
            .users
            .update(user_id, UserPatch::new().session_id(None))
            .await
        {
            Ok(()) => debug!(user_id = %user_id, destroyed, "Sessions destroyed"),
            Err(AuthError::NotFound(_)) => debug!(user_id = %user_id, "No user to clear session on"),
            Err(e) => warn!(user_id = %user_id, "Failed to clear session on user: {}", e),
        }
    }

    /// End one session by id; `false` when it was not live
    pub async fn end_session(&self, session_id: &str) -> bool {
        let _guard = self.lock.lock().await;

        let Some(user_id) = self.sessions.resolve(session_id, self.session_ttl) else {
            return false;
        };
        self.sessions.destroy(session_id);

        if let Some(user) = self.find(UserLookup::Id(user_id)).await {
            if user.session_id.as_deref() == Some(session_id) {
                if let Err(e) = self
                    .users
                    .update(&user.id, UserPatch::new().session_id(None))
                    .await
                {
                    warn!(user_id = %user.id, "Failed to clear session on user: {}", e);
                }
            }
        }

        true
    }

    /// Issue a single-use password reset token, replacing any earlier one
    pub async fn issue_reset_token(&self, email: &str) -> Result<String> {
        let _guard = self.lock.lock().await;

        let user = self
            .users
            .find(UserLookup::Email(email.to_string()))
            .await?
            .ok_or_else(|| AuthError::not_found(format!("User {}", email)))?;

        let token = new_token();
        self.users
            .update(&user.id, UserPatch::new().reset_token(Some(token.clone())))
            .await?;

        info!(user_id = %user.id, "Reset token issued");
        Ok(token)
    }

    /// Replace the password of the user holding `token`.
    ///
    /// The token is consumed and all of the user's sessions end.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<()> {
        if token.is_empty() {
            return Err(AuthError::not_found("Reset token"));
        }

        let _guard = self.lock.lock().await;

        let user = self
            .users
            .find(UserLookup::ResetToken(token.to_string()))
            .await?
            .ok_or_else(|| AuthError::not_found("Reset token"))?;

        let hashed_password = self.hasher.hash(new_password)?;
        self.users
            .update(
                &user.id,
                UserPatch::new()
                    .hashed_password(hashed_password)
                    .reset_token(None)
                    .session_id(None),
            )
            .await?;

        let destroyed = self.sessions.destroy_for_user(&user.id);
        info!(user_id = %user.id, destroyed, "Password reset");
        Ok(())
    }

    /// Identity carried by a request under the configured strategy
    pub async fn current_user(&self, request: &dyn AuthRequest) -> Option<User> {
        match self.strategy.extract(request)? {
            Credentials::Basic { email, password } => {
                self.user_from_credentials(&email, &password).await
            }
            Credentials::Session(session_id) => self.resolve_session(&session_id).await,
        }
    }

    /// Whether the request carries an `Authorization` header or a session cookie
    pub fn has_credentials(&self, request: &dyn AuthRequest) -> bool {
        request.header(AUTHORIZATION).is_some() || request.cookie(&self.session_name).is_some()
    }

    /// Whether guarded routes are checked at all
    pub fn enabled(&self) -> bool {
        self.strategy.enabled()
    }

    /// Whether `path` needs authentication
    pub fn requires_auth(&self, path: &str) -> bool {
        self.gate.requires(Some(path))
    }

    async fn find(&self, lookup: UserLookup) -> Option<User> {
        match self.users.find(lookup).await {
            Ok(user) => user,
            Err(e) => {
                warn!("User lookup failed: {}", e);
                None
            }
        }
    }
}
