//! # Storage Module Core
//!
//! In-memory string key/value store shared by every module for the lifetime
//! of the process. Nothing is persisted.
//!
//! Keys are exact, case-sensitive strings; the empty string is a valid key.
//! Values are opaque. Any enrichment (such as the device suffix appended by
//! the storage module wrapper) happens before the value reaches this store.

use std::collections::HashMap;
use parking_lot::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
pub struct KeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl KeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the value stored under `key`.
    pub fn set_item(&self, key: &str, value: &str) {
        let previous = self.entries.write().insert(key.to_string(), value.to_string());
        debug!(key, replaced = previous.is_some(), "Stored item");
    }

    /// Returns the value stored under `key`, if any.
    pub fn get_item(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    /// Removes `key`. Removing an absent key is a no-op.
    pub fn remove_item(&self, key: &str) {
        if self.entries.write().remove(key).is_some() {
            debug!(key, "Removed item");
        }
    }

    /// Snapshot of all current keys, in no particular order.
    pub fn get_all_keys(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    /// Removes every entry.
    pub fn clear(&self) {
        let mut entries = self.entries.write();
        let removed = entries.len();
        entries.clear();
        debug!(removed, "Cleared storage");
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_set_then_get() {
        let store = KeyValueStore::new();
        store.set_item("test-key", "Hello from WebView!");
        assert_eq!(
            store.get_item("test-key").as_deref(),
            Some("Hello from WebView!")
        );
    }

    #[test]
    fn test_missing_key() {
        let store = KeyValueStore::new();
        assert_eq!(store.get_item("missing"), None);
    }

    #[test]
    fn test_overwrite() {
        let store = KeyValueStore::new();
        store.set_item("k", "one");
        store.set_item("k", "two");
        assert_eq!(store.get_item("k").as_deref(), Some("two"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_empty_key_and_value() {
        let store = KeyValueStore::new();
        store.set_item("", "");
        assert_eq!(store.get_item("").as_deref(), Some(""));
        assert!(store.contains_key(""));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let store = KeyValueStore::new();
        store.set_item("Key", "upper");
        assert_eq!(store.get_item("key"), None);
    }

    #[test]
    fn test_remove() {
        let store = KeyValueStore::new();
        store.set_item("k", "v");
        store.remove_item("k");
        assert_eq!(store.get_item("k"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let store = KeyValueStore::new();
        store.set_item("keep", "v");
        store.remove_item("gone");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_all_keys() {
        let store = KeyValueStore::new();
        store.set_item("a", "1");
        store.set_item("b", "2");
        store.set_item("c", "3");

        let mut keys = store.get_all_keys();
        keys.sort();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_clear() {
        let store = KeyValueStore::new();
        store.set_item("a", "1");
        store.set_item("b", "2");
        store.clear();
        assert!(store.get_all_keys().is_empty());
        assert_eq!(store.get_item("a"), None);
    }

    #[test]
    fn test_usable_after_panic_while_locked() {
        let store = Arc::new(KeyValueStore::new());
        store.set_item("k", "v");

        let holder = Arc::clone(&store);
        let result = std::thread::spawn(move || {
            let _guard = holder.entries.write();
            panic!("writer panicked");
        })
        .join();
        assert!(result.is_err());

        assert_eq!(store.get_item("k").as_deref(), Some("v"));
        store.set_item("k2", "v2");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_readers_see_whole_writes() {
        let store = Arc::new(KeyValueStore::new());
        let writer = {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for i in 0..200 {
                    store.set_item("counter", &i.to_string());
                }
            })
        };

        for _ in 0..200 {
            if let Some(value) = store.get_item("counter") {
                assert!(value.parse::<u32>().is_ok_and(|n| n < 200));
            }
        }
        writer.join().unwrap();
        assert_eq!(store.get_item("counter").as_deref(), Some("199"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_writers_distinct_keys() {
        let store = Arc::new(KeyValueStore::new());

        let handles: Vec<_> = (0..8)
            .map(|task| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    for i in 0..50 {
                        store.set_item(&format!("{task}-{i}"), &i.to_string());
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.len(), 400);
        assert_eq!(store.get_item("7-49").as_deref(), Some("49"));
    }
}
