//! Session store: TTL-bounded conversational memory.
//!
//! Maps session ids to per-session memory (query history, last matched
//! entry, expiry). The store owns all mutation; the dialogue engine
//! requests changes through this API and never holds the lock across
//! an external call.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Duration, Utc};

// =============================================================================
// SessionMemory
// =============================================================================

/// Per-session conversational memory.
#[derive(Debug, Clone)]
pub struct SessionMemory {
    /// Normalized queries, append-only, oldest first.
    pub history: Vec<String>,
    /// Entry id of the last directly answered question, if any.
    pub last_faq: Option<usize>,
    /// Instant after which the session is eligible for eviction.
    pub expires_at: DateTime<Utc>,
}

impl SessionMemory {
    fn fresh(expires_at: DateTime<Utc>) -> Self {
        Self {
            history: Vec::new(),
            last_faq: None,
            expires_at,
        }
    }
}

// =============================================================================
// SessionStore
// =============================================================================

/// Thread-safe, in-memory session table with lazy TTL eviction.
///
/// Expired entries are only reaped when [`SessionStore::cleanup_expired`]
/// runs (at the top of each inbound request); a few may linger harmlessly
/// between requests.
pub struct SessionStore {
    sessions: Mutex<HashMap<String, SessionMemory>>,
    ttl: Duration,
}

impl SessionStore {
    /// Create a store whose sessions idle out after `ttl_minutes`.
    pub fn new(ttl_minutes: u32) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl: Duration::minutes(i64::from(ttl_minutes)),
        }
    }

    /// Create-or-fetch the session and push its expiry out by the TTL.
    pub fn touch(&self, session_id: &str) {
        let expires_at = Utc::now() + self.ttl;
        let mut sessions = self.lock();
        sessions
            .entry(session_id.to_string())
            .or_insert_with(|| SessionMemory::fresh(expires_at))
            .expires_at = expires_at;
    }

    /// Read-only snapshot of a session's memory.
    pub fn get(&self, session_id: &str) -> Option<SessionMemory> {
        self.lock().get(session_id).cloned()
    }

    /// Append a normalized query to the session's history and bind
    /// `last_faq` to the matched entry.
    pub fn record_match(&self, session_id: &str, entry_id: usize, normalized_query: &str) {
        let expires_at = Utc::now() + self.ttl;
        let mut sessions = self.lock();
        let memory = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| SessionMemory::fresh(expires_at));
        memory.history.push(normalized_query.to_string());
        memory.last_faq = Some(entry_id);
    }

    /// Remove every session whose expiry lies strictly before `now`.
    pub fn cleanup_expired(&self, now: DateTime<Utc>) {
        self.lock().retain(|_, memory| memory.expires_at >= now);
    }

    /// Number of live (not yet reaped) sessions.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A poisoned lock only means another thread panicked mid-update;
    // the map itself is still usable, so recover the guard.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, SessionMemory>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// =============================================================================
// Tests
// =============================================================================
