//! In-memory session credential store
//!
//! Maps opaque session ids to bearer tokens with a fixed TTL. Entries
//! are checked for expiry lazily on lookup, and a periodic sweep purges
//! the rest, so no per-session timer exists. Nothing persists; a
//! process restart invalidates every session.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use uuid::Uuid;

struct SessionEntry {
    token: String,
    expires_at: Instant,
}

/// Concurrent map from session id to credential
///
/// Shared across all relay request handlers behind an `Arc`; the single
/// mutex is enough because entries are independent keys and operations
/// are short.
pub struct SessionStore {
    ttl: Duration,
    entries: Mutex<HashMap<String, SessionEntry>>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Store a credential under a freshly generated opaque id
    pub fn create(&self, token: String) -> String {
        let id = Uuid::new_v4().to_string();
        let entry = SessionEntry {
            token,
            expires_at: Instant::now() + self.ttl,
        };
        self.entries.lock().unwrap().insert(id.clone(), entry);
        id
    }

    /// Resolve a session id to its credential
    ///
    /// An expired entry is removed on the spot and treated as absent.
    pub fn resolve(&self, id: &str) -> Option<String> {
        let mut entries = self.entries.lock().unwrap();
        match entries.get(id) {
            Some(entry) if entry.expires_at > Instant::now() => Some(entry.token.clone()),
            Some(_) => {
                entries.remove(id);
                None
            }
            None => None,
        }
    }

    /// Drop every expired entry; returns how many were removed
    pub fn purge_expired(&self) -> usize {
        let mut entries = self.entries.lock().unwrap();
        let now = Instant::now();
        let before = entries.len();
        entries.retain(|_, entry| entry.expires_at > now);
        before - entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_then_resolve() {
        let store = SessionStore::new(Duration::from_secs(300));
        let id = store.create("ghp_secret".to_string());
        assert_eq!(store.resolve(&id), Some("ghp_secret".to_string()));
    }

    #[test]
    fn test_ids_are_unique() {
        let store = SessionStore::new(Duration::from_secs(300));
        let first = store.create("a".to_string());
        let second = store.create("b".to_string());
        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_unknown_id_does_not_resolve() {
        let store = SessionStore::new(Duration::from_secs(300));
        assert_eq!(store.resolve("not-a-session"), None);
    }

    #[test]
    fn test_expired_entry_is_removed_on_lookup() {
        let store = SessionStore::new(Duration::ZERO);
        let id = store.create("ghp_secret".to_string());
        assert_eq!(store.resolve(&id), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_purge_removes_only_expired_entries() {
        let expired = SessionStore::new(Duration::ZERO);
        expired.create("a".to_string());
        expired.create("b".to_string());
        assert_eq!(expired.purge_expired(), 2);
        assert!(expired.is_empty());

        let live = SessionStore::new(Duration::from_secs(300));
        live.create("c".to_string());
        assert_eq!(live.purge_expired(), 0);
        assert_eq!(live.len(), 1);
    }

    #[test]
    fn test_store_is_shareable_across_threads() {
        let store = std::sync::Arc::new(SessionStore::new(Duration::from_secs(300)));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || store.create(format!("token-{i}")))
            })
            .collect();
        for handle in handles {
            let id = handle.join().unwrap();
            assert!(store.resolve(&id).is_some());
        }
        assert_eq!(store.len(), 4);
    }
}
