use super::{DateKey, Language, QueryType};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

const KEY_PREFIX: &str = "otd";

/// Storage address of one cached feed response.
///
/// Rendered as `otd:{lang}:{type}:{MMDD}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub language: Language,
    pub query_type: QueryType,
    pub date: DateKey,
}

impl CacheKey {
    pub fn new(language: Language, query_type: QueryType, date: DateKey) -> Self {
        Self {
            language,
            query_type,
            date,
        }
    }

    /// Parse a rendered key back into its parts
    pub fn parse(raw: &str) -> Result<Self> {
        let parts: Vec<&str> = raw.split(':').collect();
        match parts.as_slice() {
            [prefix, lang, query_type, date] if *prefix == KEY_PREFIX => Ok(Self {
                language: lang.parse()?,
                query_type: query_type.parse()?,
                date: DateKey::from_compact(date)?,
            }),
            _ => Err(Error::Parse(format!("not a cache key: '{}'", raw))),
        }
    }

    pub fn prefix() -> &'static str {
        KEY_PREFIX
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            KEY_PREFIX,
            self.language,
            self.query_type,
            self.date.compact()
        )
    }
}

/// Stored value: capture time plus the untouched feed payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEnvelope {
    /// Capture time in epoch milliseconds
    #[serde(rename = "ts")]
    pub captured_at_ms: i64,

    #[serde(rename = "data")]
    pub payload: Value,
}

impl CacheEnvelope {
    pub fn new(captured_at: DateTime<Utc>, payload: Value) -> Self {
        Self {
            captured_at_ms: captured_at.timestamp_millis(),
            payload,
        }
    }

    pub fn captured_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.captured_at_ms)
    }

    /// Decode stored bytes. Missing/zero timestamps and payloads that are
    /// not a JSON object or array are rejected the same way as unparseable
    /// JSON.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let envelope: CacheEnvelope = serde_json::from_slice(bytes)?;
        if envelope.captured_at_ms <= 0 {
            return Err(Error::Parse("cache envelope has no timestamp".to_string()));
        }
        if !(envelope.payload.is_object() || envelope.payload.is_array()) {
            return Err(Error::Parse("cache envelope has no payload".to_string()));
        }
        Ok(envelope)
    }

    pub fn to_vec(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}
