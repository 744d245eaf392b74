//! Where a request's credentials come from

use super::extractor::{AUTHORIZATION, basic_credentials};
use crate::config::AuthType;
use crate::server::request::AuthRequest;
use std::fmt;
use std::sync::Arc;

/// Credentials carried by a request
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    Basic { email: String, password: String },
    Session(String),
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Basic { email, .. } => f
                .debug_struct("Basic")
                .field("email", email)
                .field("password", &"***")
                .finish(),
            Credentials::Session(_) => f.debug_tuple("Session").field(&"***").finish(),
        }
    }
}

/// Pulls credentials out of a request
pub trait CredentialStrategy: Send + Sync + fmt::Debug {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    fn extract(&self, request: &dyn AuthRequest) -> Option<Credentials>;

    /// Whether guarded routes are checked at all
    fn enabled(&self) -> bool {
        true
    }
}

/// `Authorization: Basic base64(email:password)`
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicAuthStrategy;

impl CredentialStrategy for BasicAuthStrategy {
    fn name(&self) -> &'static str {
        "basic_auth"
    }

    fn extract(&self, request: &dyn AuthRequest) -> Option<Credentials> {
        let header = request.header(AUTHORIZATION);
        let (email, password) = basic_credentials(header.as_deref())?;
        Some(Credentials::Basic { email, password })
    }
}

/// Session id read from a named cookie
#[derive(Debug, Clone)]
pub struct SessionCookieStrategy {
    cookie_name: String,
}

impl SessionCookieStrategy {
    pub fn new(cookie_name: impl Into<String>) -> Self {
        Self {
            cookie_name: cookie_name.into(),
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }
}

impl CredentialStrategy for SessionCookieStrategy {
    fn name(&self) -> &'static str {
        "session_cookie"
    }

    fn extract(&self, request: &dyn AuthRequest) -> Option<Credentials> {
        request
            .cookie(&self.cookie_name)
            .filter(|sid| !sid.is_empty())
            .map(Credentials::Session)
    }
}

/// Never yields credentials and switches the route guard off
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuthStrategy;

impl CredentialStrategy for NoAuthStrategy {
    fn name(&self) -> &'static str {
        "none"
    }

    fn extract(&self, _request: &dyn AuthRequest) -> Option<Credentials> {
        None
    }

    fn enabled(&self) -> bool {
        false
    }
}

/// Strategy for a configured auth type
pub fn strategy_for(auth_type: AuthType, session_name: &str) -> Arc<dyn CredentialStrategy> {
    match auth_type {
        AuthType::None => Arc::new(NoAuthStrategy),
        AuthType::BasicAuth => Arc::new(BasicAuthStrategy),
        AuthType::SessionAuth | AuthType::SessionExpAuth => {
            Arc::new(SessionCookieStrategy::new(session_name))
        }
    }
}
