//! Test fixtures and service factories
//!
//! All factories build real objects. Hashing runs at the cheapest cost
//! Argon2 accepts so tests stay fast.

use chrono::{TimeZone, Utc};
use std::sync::Arc;
use userauth_rs::auth::{AuthService, ManualClock, SessionStore};
use userauth_rs::config::{AuthConfig, AuthType, StorageConfig};
use userauth_rs::storage::{Database, MemoryUserStore, UserStore};
use userauth_rs::utils::auth::crypto::{CredentialHasher, HashCost};

/// Cheapest valid Argon2 cost
pub fn fast_cost() -> HashCost {
    HashCost {
        memory_kib: 64,
        iterations: 1,
        parallelism: 1,
    }
}

/// Factory for wired-up auth services
pub struct ServiceFactory;

impl ServiceFactory {
    /// Service over an in-memory user store and the system clock
    pub fn memory() -> AuthService {
        let config = Self::config(AuthType::SessionAuth, 0);
        AuthService::from_config(&config, Arc::new(MemoryUserStore::new()))
            .expect("valid auth config")
    }

    /// Service over an in-memory store whose session clock is under test control
    pub fn with_clock(ttl_seconds: i64) -> (AuthService, ManualClock) {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap());
        let sessions = Arc::new(SessionStore::with_clock(Arc::new(clock.clone())));
        let hasher = CredentialHasher::new(fast_cost()).expect("valid hash cost");
        let service = AuthService::new(Arc::new(MemoryUserStore::new()), sessions, hasher)
            .with_session_ttl(ttl_seconds);
        (service, clock)
    }

    /// Service over a migrated in-memory SQLite database
    #[cfg(feature = "sqlite")]
    pub async fn sqlite() -> AuthService {
        let storage = StorageConfig {
            max_connections: 1,
            ..StorageConfig::default()
        };
        let db = Database::new("sqlite::memory:", &storage)
            .await
            .expect("sqlite connects");
        db.migrate().await.expect("migrations run");
        let users: Arc<dyn UserStore> = Arc::new(db);

        let config = Self::config(AuthType::SessionAuth, 0);
        AuthService::from_config(&config, users).expect("valid auth config")
    }

    /// Auth configuration with a cheap hash cost
    pub fn config(auth_type: AuthType, session_duration: i64) -> AuthConfig {
        AuthConfig {
            auth_type,
            session_duration,
            hash_cost: fast_cost(),
            ..AuthConfig::default()
        }
    }
}
