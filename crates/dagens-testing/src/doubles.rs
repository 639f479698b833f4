//! In-process stand-ins for the panel's collaborators.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, TimeZone};
use dagens_engine::PanelContent;
use dagens_feeds::{FeedRequest, FeedSource, RateSource};
use dagens_runtime::{Clock, Surface};
use dagens_store::{KeyValueStore, StoredValue};
use dagens_types::CurrencyCode;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone)]
enum Scripted {
    Payload(Value),
    Status(u16),
}

/// Feed source with per-language scripted responses.
///
/// Languages without a script answer with HTTP 404.
#[derive(Default)]
pub struct MockFeed {
    responses: Mutex<HashMap<String, Scripted>>,
    requests: Mutex<Vec<FeedRequest>>,
}

impl MockFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer requests for `language` with `payload`
    pub fn respond(self, language: &str, payload: Value) -> Self {
        self.script(language, Scripted::Payload(payload));
        self
    }

    /// Answer requests for `language` with a non-success status
    pub fn fail(self, language: &str, status: u16) -> Self {
        self.script(language, Scripted::Status(status));
        self
    }

    fn script(&self, language: &str, response: Scripted) {
        self.responses
            .lock()
            .unwrap()
            .insert(language.to_string(), response);
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<FeedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Languages requested, in order
    pub fn requested_languages(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| r.language.to_string())
            .collect()
    }
}

#[async_trait]
impl FeedSource for MockFeed {
    async fn fetch(&self, request: &FeedRequest) -> dagens_feeds::Result<Value> {
        self.requests.lock().unwrap().push(request.clone());

        let scripted = self
            .responses
            .lock()
            .unwrap()
            .get(request.language.as_str())
            .cloned()
            .unwrap_or(Scripted::Status(404));

        match scripted {
            Scripted::Payload(value) => Ok(value),
            Scripted::Status(code) => Err(dagens_feeds::Error::Status {
                code,
                url: format!(
                    "mock://{}/onthisday/{}/{}/{}",
                    request.language,
                    request.query_type,
                    request.date.mm(),
                    request.date.dd()
                ),
            }),
        }
    }
}

/// Rate source quoting fixed rates per target currency.
///
/// Unquoted currencies fail the way a response without that rate does.
#[derive(Default)]
pub struct MockRates {
    quotes: HashMap<String, f64>,
    requests: Mutex<Vec<(CurrencyCode, CurrencyCode)>>,
}

impl MockRates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quote(mut self, target: &str, rate: f64) -> Self {
        self.quotes.insert(target.to_ascii_uppercase(), rate);
        self
    }

    /// (base, target) pairs requested, in order
    pub fn requests(&self) -> Vec<(CurrencyCode, CurrencyCode)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RateSource for MockRates {
    async fn rate(&self, base: &CurrencyCode, target: &CurrencyCode) -> dagens_feeds::Result<f64> {
        self.requests
            .lock()
            .unwrap()
            .push((base.clone(), target.clone()));

        self.quotes.get(target.as_str()).copied().ok_or_else(|| {
            dagens_feeds::Error::Decode(format!("response has no usable {} rate", target))
        })
    }
}

/// Surface that keeps every content it was given
#[derive(Default)]
pub struct RecordingSurface {
    history: Mutex<Vec<PanelContent>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<PanelContent> {
        self.history.lock().unwrap().clone()
    }

    /// What the surface shows now
    pub fn current(&self) -> Option<PanelContent> {
        self.history.lock().unwrap().last().cloned()
    }
}

impl Surface for RecordingSurface {
    fn replace(&self, content: &PanelContent) {
        self.history.lock().unwrap().push(content.clone());
    }
}

/// Clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    /// Local wall-clock time at UTC+1 (Oslo winter time)
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        let offset = FixedOffset::east_opt(3600).unwrap();
        Self(
            offset
                .with_ymd_and_hms(year, month, day, hour, minute, 0)
                .unwrap(),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Store whose reads find nothing and whose writes always fail
#[derive(Default)]
pub struct FailingStore {
    writes: Mutex<usize>,
}

impl FailingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_attempts(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Option<Vec<u8>> {
        None
    }

    fn set(&self, _key: &str, _value: &[u8]) -> dagens_store::Result<()> {
        *self.writes.lock().unwrap() += 1;
        Err(dagens_store::Error::Unavailable("storage quota exceeded".to_string()))
    }

    fn scan(&self, _prefix: &str) -> dagens_store::Result<Vec<StoredValue>> {
        Err(dagens_store::Error::Unavailable("storage disabled".to_string()))
    }
}
