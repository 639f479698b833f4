//! Time-bounded cache of raw feed payloads on top of a [`KeyValueStore`].
//!
//! The store is best-effort in both directions. Unreadable or malformed
//! entries are misses, and failed writes are logged and otherwise ignored.

use chrono::{DateTime, Utc};
use dagens_store::KeyValueStore;
use dagens_types::{CacheEnvelope, CacheKey};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// One stored entry as shown by `cache list`
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntryInfo {
    pub key: String,
    /// `None` when the stored value is not a readable envelope
    pub captured_at: Option<DateTime<Utc>>,
    pub size_bytes: usize,
    pub fresh: bool,
}

#[derive(Clone)]
pub struct HistoryCache {
    store: Arc<dyn KeyValueStore>,
    ttl: Duration,
}

impl HistoryCache {
    pub fn new(store: Arc<dyn KeyValueStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Payload stored under `key` if it was captured less than `ttl` ago.
    ///
    /// A capture time ahead of `now` (clock skew) counts as fresh.
    pub fn load(&self, key: &CacheKey, now: DateTime<Utc>) -> Option<Value> {
        let raw_key = key.to_string();
        let bytes = self.store.get(&raw_key)?;

        let envelope = match CacheEnvelope::from_slice(&bytes) {
            Ok(envelope) => envelope,
            Err(e) => {
                debug!(key = %raw_key, error = %e, "ignoring malformed cache entry");
                return None;
            }
        };

        if !self.is_fresh(envelope.captured_at_ms, now) {
            debug!(key = %raw_key, "cache entry expired");
            return None;
        }

        Some(envelope.payload)
    }

    /// Store `payload` stamped with `now`. Returns whether the write landed.
    pub fn save(&self, key: &CacheKey, payload: &Value, now: DateTime<Utc>) -> bool {
        let raw_key = key.to_string();
        let bytes = match CacheEnvelope::new(now, payload.clone()).to_vec() {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!(key = %raw_key, error = %e, "could not encode cache entry");
                return false;
            }
        };

        match self.store.set(&raw_key, &bytes) {
            Ok(()) => true,
            Err(e) => {
                debug!(key = %raw_key, error = %e, "cache write failed, continuing without cache");
                false
            }
        }
    }

    /// Every "on this day" entry in key order
    pub fn entries(&self, now: DateTime<Utc>) -> crate::Result<Vec<CacheEntryInfo>> {
        let prefix = format!("{}:", CacheKey::prefix());
        let stored = self.store.scan(&prefix)?;

        Ok(stored
            .into_iter()
            .map(|entry| {
                let envelope = CacheEnvelope::from_slice(&entry.value).ok();
                CacheEntryInfo {
                    captured_at: envelope.as_ref().and_then(CacheEnvelope::captured_at),
                    fresh: envelope
                        .as_ref()
                        .is_some_and(|e| self.is_fresh(e.captured_at_ms, now)),
                    size_bytes: entry.value.len(),
                    key: entry.key,
                }
            })
            .collect())
    }

    fn is_fresh(&self, captured_at_ms: i64, now: DateTime<Utc>) -> bool {
        let age_ms = i128::from(now.timestamp_millis()) - i128::from(captured_at_ms);
        age_ms < self.ttl.as_millis() as i128
    }
}
