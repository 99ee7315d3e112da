//! Session-scoped collaborators for the optimistic controllers: who is
//! acting, where speculative state lives, and how failures reach the user.
//!
//! The cache and pending set are plain data guarded by std mutexes. None of
//! their operations suspend, which keeps the optimistic phase of a vote or
//! bookmark action fully synchronous.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::sync::Mutex;

use interactions_shared::types::UserId;
use tracing::warn;

/// Resolves the acting user, if any.
pub trait IdentityProvider: Send + Sync {
    /// The current user's id, or `None` when unauthenticated.
    fn current_user(&self) -> Option<UserId>;
}

/// A fixed identity, for sessions whose user is known at wiring time.
pub struct StaticIdentity {
    user: Option<UserId>,
}

impl StaticIdentity {
    pub fn signed_in(user: UserId) -> Self {
        Self { user: Some(user) }
    }

    pub fn anonymous() -> Self {
        Self { user: None }
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> Option<UserId> {
        self.user
    }
}

/// Receives user-facing failure notifications.
///
/// The controllers make exactly one call per rejected or rolled-back
/// action; failures never reach callers any other way.
pub trait Notifier: Send + Sync {
    fn report_failure(&self, message: &str);
}

/// Notifier that reports failures through the `tracing` pipeline.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn report_failure(&self, message: &str) {
        warn!(reason = %message, "reporting failure to user");
    }
}

/// Keyed cache backing the optimistic writes.
///
/// `store` returns the value it replaced so the caller keeps a rollback
/// snapshot in the same operation that performs the speculative write.
/// `restore` puts that snapshot back, and an absent snapshot removes the
/// entry, so rollback reproduces the pre-action cache exactly.
pub struct SessionCache<K, V> {
    entries: Mutex<HashMap<K, V>>,
}

impl<K, V> SessionCache<K, V> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl<K, V> Default for SessionCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Copy, V: Clone> SessionCache<K, V> {
    pub fn get(&self, key: &K) -> Option<V> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    /// Sets a value and returns what it replaced.
    pub fn store(&self, key: K, value: V) -> Option<V> {
        self.entries.lock().unwrap().insert(key, value)
    }

    /// Puts a snapshot back, clearing the entry when the snapshot is `None`.
    pub fn restore(&self, key: K, snapshot: Option<V>) {
        let mut entries = self.entries.lock().unwrap();
        match snapshot {
            Some(value) => {
                entries.insert(key, value);
            }
            None => {
                entries.remove(&key);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

/// Tracks which keys have a mutation in flight.
pub struct PendingSet<K> {
    keys: Mutex<HashSet<K>>,
}

impl<K> PendingSet<K> {
    pub fn new() -> Self {
        Self {
            keys: Mutex::new(HashSet::new()),
        }
    }
}

impl<K> Default for PendingSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Copy> PendingSet<K> {
    /// Claims the key; `false` means a mutation is already in flight.
    pub fn try_begin(&self, key: K) -> bool {
        self.keys.lock().unwrap().insert(key)
    }

    /// Releases the key once its mutation settled.
    pub fn finish(&self, key: K) {
        self.keys.lock().unwrap().remove(&key);
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.keys.lock().unwrap().contains(key)
    }
}
