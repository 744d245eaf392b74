//! Authentication configuration

use super::*;
use crate::utils::auth::crypto::HashCost;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

/// Which credential source identifies callers of guarded routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthType {
    /// Guarded routes never resolve an identity
    None,
    /// `Authorization: Basic ...` header checked on every request
    BasicAuth,
    /// Session cookie without expiry
    #[default]
    SessionAuth,
    /// Session cookie expiring after `session_duration` seconds
    SessionExpAuth,
}

impl AuthType {
    /// Session lifetime in seconds under this mode; `0` never expires
    pub fn session_ttl(&self, session_duration: i64) -> i64 {
        match self {
            AuthType::SessionExpAuth => session_duration,
            _ => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthType::None => "none",
            AuthType::BasicAuth => "basic_auth",
            AuthType::SessionAuth => "session_auth",
            AuthType::SessionExpAuth => "session_exp_auth",
        }
    }
}

impl FromStr for AuthType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" => Ok(AuthType::None),
            "basic_auth" => Ok(AuthType::BasicAuth),
            "session_auth" => Ok(AuthType::SessionAuth),
            "session_exp_auth" => Ok(AuthType::SessionExpAuth),
            other => Err(format!("Unknown auth type: {}", other)),
        }
    }
}

/// Authentication configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Credential strategy for guarded routes
    #[serde(default)]
    pub auth_type: AuthType,
    /// Session cookie name
    #[serde(default = "default_session_name")]
    pub session_name: String,
    /// Session lifetime in seconds for `session_exp_auth`; `0` or negative never expires
    #[serde(default)]
    pub session_duration: i64,
    /// Paths that skip authentication (exact, prefix, or glob)
    #[serde(default = "default_excluded_paths")]
    pub excluded_paths: Vec<String>,
    /// Password hashing cost
    #[serde(default)]
    pub hash_cost: HashCost,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            auth_type: AuthType::default(),
            session_name: default_session_name(),
            session_duration: 0,
            excluded_paths: default_excluded_paths(),
            hash_cost: HashCost::default(),
        }
    }
}

impl AuthConfig {
    /// Merge auth configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.auth_type != AuthType::default() {
            self.auth_type = other.auth_type;
        }
        if other.session_name != default_session_name() {
            self.session_name = other.session_name;
        }
        if other.session_duration != 0 {
            self.session_duration = other.session_duration;
        }
        if other.excluded_paths != default_excluded_paths() {
            self.excluded_paths = other.excluded_paths;
        }
        if other.hash_cost != HashCost::default() {
            self.hash_cost = other.hash_cost;
        }
        self
    }

    /// Effective session TTL in seconds
    pub fn session_ttl(&self) -> i64 {
        self.auth_type.session_ttl(self.session_duration)
    }

    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.session_name.is_empty() {
            return Err("Session cookie name cannot be empty".to_string());
        }

        if self.session_name.contains([';', '=', ' ', ',']) {
            return Err(format!(
                "Session cookie name '{}' contains a reserved character",
                self.session_name
            ));
        }

        self.hash_cost.params().map_err(|e| e.to_string())?;

        Ok(())
    }
}

/// Warn about configurations that leave guarded routes open or sessions eternal
pub fn warn_insecure_config(config: &AuthConfig) {
    if config.auth_type == AuthType::None {
        warn!("AUTH_TYPE is none: the request gate is disabled and guarded routes are open");
    }
    if config.auth_type == AuthType::SessionExpAuth && config.session_duration <= 0 {
        warn!("session_exp_auth is configured without a positive session duration; sessions never expire");
    }
}
