//! In-memory session store with lazy expiry

use crate::utils::auth::crypto::new_token;
use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::debug;

/// Source of the current time
pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

/// A live session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEntry {
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

/// Session id to user mapping.
///
/// Expired entries are removed when a lookup notices them; nothing sweeps
/// the map in the background.
#[derive(Debug)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, SessionEntry>>,
    clock: Arc<dyn Clock>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Open a session for `user_id` and return its id
    pub fn create(&self, user_id: &str) -> Option<String> {
        if user_id.is_empty() {
            return None;
        }

        let session_id = new_token();
        let entry = SessionEntry {
            user_id: user_id.to_string(),
            created_at: self.clock.now(),
        };
        self.sessions.lock().insert(session_id.clone(), entry);

        debug!(user_id = %user_id, "Session created");
        Some(session_id)
    }

    /// Resolve a session id to its user id.
    ///
    /// With `ttl_seconds > 0` a session older than the TTL is evicted and
    /// treated as unknown. `ttl_seconds <= 0` disables expiry.
    pub fn resolve(&self, session_id: &str, ttl_seconds: i64) -> Option<String> {
        if session_id.is_empty() {
            return None;
        }

        let mut sessions = self.sessions.lock();
        let entry = sessions.get(session_id)?;

        // A deadline too far out to represent never arrives
        let deadline = Duration::try_seconds(ttl_seconds)
            .and_then(|ttl| entry.created_at.checked_add_signed(ttl));
        if ttl_seconds > 0 && deadline.is_some_and(|deadline| self.clock.now() > deadline) {
            sessions.remove(session_id);
            debug!("Session expired and evicted");
            return None;
        }

        Some(entry.user_id.clone())
    }

    /// Remove a session; `false` when it did not exist
    pub fn destroy(&self, session_id: &str) -> bool {
        self.sessions.lock().remove(session_id).is_some()
    }

    /// Remove every session of `user_id`, returning how many there were
    pub fn destroy_for_user(&self, user_id: &str) -> usize {
        let mut sessions = self.sessions.lock();
        let before = sessions.len();
        sessions.retain(|_, entry| entry.user_id != user_id);
        before - sessions.len()
    }

    /// Entry for `session_id` regardless of age
    pub fn session(&self, session_id: &str) -> Option<SessionEntry> {
        self.sessions.lock().get(session_id).cloned()
    }

    pub fn contains(&self, session_id: &str) -> bool {
        self.sessions.lock().contains_key(session_id)
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }
}
