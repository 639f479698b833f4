use crate::Result;

/// One stored key and its raw value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredValue {
    pub key: String,
    pub value: Vec<u8>,
}

/// Best-effort persistent key-value capability.
///
/// Reads never fail: an unreadable store behaves like an empty one. Writes
/// report failure so callers can decide to ignore it.
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, or `None` if absent or unreadable
    fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// All entries whose key starts with `prefix`, ordered by key
    fn scan(&self, prefix: &str) -> Result<Vec<StoredValue>>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        (**self).set(key, value)
    }

    fn scan(&self, prefix: &str) -> Result<Vec<StoredValue>> {
        (**self).scan(prefix)
    }
}
