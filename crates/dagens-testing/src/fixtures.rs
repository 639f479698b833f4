//! Feed payloads shaped like the Wikimedia "on this day" response.

use chrono::{DateTime, Utc};
use dagens_store::KeyValueStore;
use dagens_types::{CacheEnvelope, CacheKey};
use serde_json::{Value, json};

/// One item with a single referenced page
pub fn item(year: i64, text: &str, page_title: &str) -> Value {
    json!({
        "year": year,
        "text": text,
        "pages": [{"title": page_title}]
    })
}

/// `n` numbered items whose text starts with `label`
pub fn items(n: usize, label: &str) -> Vec<Value> {
    (0..n)
        .map(|i| item(1900 + i as i64, &format!("{label} {i}"), &format!("{label} page {i}")))
        .collect()
}

pub fn payload_with_selected(selected: Vec<Value>) -> Value {
    json!({ "selected": selected })
}

pub fn payload_with_events(events: Vec<Value>) -> Value {
    json!({ "events": events })
}

/// A small realistic English payload for 17 May
pub fn sample_payload() -> Value {
    json!({
        "selected": [
            {
                "year": 1814,
                "text": "The Constitution of Norway is signed at Eidsvoll.",
                "pages": [{
                    "title": "Constitution of Norway",
                    "content_urls": {"desktop": {"page": "https://en.wikipedia.org/wiki/Constitution_of_Norway"}}
                }]
            },
            {
                "year": 1954,
                "text": "Brown v. Board of Education is decided.",
                "pages": [{"title": "Brown v. Board of Education"}]
            }
        ],
        "events": items(4, "event")
    })
}

/// Write an envelope directly, bypassing the panel
pub fn seed_cache(
    store: &dyn KeyValueStore,
    key: &CacheKey,
    payload: Value,
    captured_at: DateTime<Utc>,
) -> anyhow::Result<()> {
    let bytes = CacheEnvelope::new(captured_at, payload).to_vec()?;
    store.set(&key.to_string(), &bytes)?;
    Ok(())
}
