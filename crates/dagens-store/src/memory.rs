use crate::traits::{KeyValueStore, StoredValue};
use crate::{Error, Result};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Process-local store, used for `--no-cache` runs and tests.
///
/// An optional capacity makes writes of new keys fail once full, like a
/// browser storage quota.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, Vec<u8>>>,
    capacity: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::default(),
            capacity: Some(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| Error::Unavailable("memory store lock poisoned".to_string()))?;

        if let Some(capacity) = self.capacity
            && !entries.contains_key(key)
            && entries.len() >= capacity
        {
            return Err(Error::Unavailable(format!(
                "memory store full ({} entries)",
                capacity
            )));
        }

        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn scan(&self, prefix: &str) -> Result<Vec<StoredValue>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| Error::Unavailable("memory store lock poisoned".to_string()))?;
        Ok(entries
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| StoredValue {
                key: key.clone(),
                value: value.clone(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_rejects_new_keys_only() {
        let store = MemoryStore::with_capacity(1);
        store.set("a", b"1").unwrap();
        assert!(store.set("b", b"2").is_err());

        // Overwriting an existing key still works when full
        store.set("a", b"3").unwrap();
        assert_eq!(store.get("a"), Some(b"3".to_vec()));
        assert_eq!(store.get("b"), None);
    }

    #[test]
    fn test_scan_sorted() {
        let store = MemoryStore::new();
        store.set("otd:b", b"").unwrap();
        store.set("otd:a", b"").unwrap();
        store.set("x", b"").unwrap();

        let keys: Vec<String> = store.scan("otd:").unwrap().into_iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["otd:a", "otd:b"]);
    }
}
