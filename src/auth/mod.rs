//! Authentication
//!
//! Turns a raw request into an authenticated user. The leaves are the
//! `Authorization` header parser ([`extractor`]), the path exemption rules
//! ([`gate`]) and the in-memory [`session`] store; [`strategy`] picks where
//! credentials come from, and [`service::AuthService`] ties them to the user
//! store.

pub mod extractor;
pub mod gate;
pub mod service;
pub mod session;
pub mod strategy;


pub use extractor::{basic_credentials, decode_basic, extract_scheme_and_token, split_credentials};
pub use gate::{PathAuthGate, requires_auth};
pub use service::AuthService;
pub use session::{Clock, ManualClock, SessionEntry, SessionStore, SystemClock};
pub use strategy::{
    BasicAuthStrategy, CredentialStrategy, Credentials, NoAuthStrategy, SessionCookieStrategy,
    strategy_for,
};
