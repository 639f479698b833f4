//! The "on this day" panel.
//!
//! One initialization walks [`PanelState`] from the primary-language cache,
//! through the primary fetch and the fallback-language cache, to the
//! fallback fetch, stopping at the first payload it can render. Nothing
//! escapes as an error: exhausting every source ends in the failure message.

mod state;

pub use state::{PanelEvent, PanelState, RenderSource};

use crate::cache::HistoryCache;
use crate::clock::Clock;
use crate::surface::Surface;
use chrono::{DateTime, Utc};
use dagens_engine::{PanelContent, RenderOptions, build_content};
use dagens_feeds::{FeedRequest, FeedSource};
use dagens_store::KeyValueStore;
use dagens_types::{CacheKey, DateKey, Language, QueryType};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    pub primary_language: Language,
    pub fallback_language: Language,
    pub max_items: usize,
    pub cache_ttl: Duration,
    pub query_type: QueryType,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            primary_language: Language::english(),
            fallback_language: Language::english(),
            max_items: crate::config::DEFAULT_MAX_ITEMS,
            cache_ttl: Duration::from_secs(crate::config::DEFAULT_CACHE_TTL_SECS),
            query_type: QueryType::All,
        }
    }
}

/// What one initialization did
#[derive(Debug)]
pub struct PanelReport {
    pub state: PanelState,
    pub date: DateKey,
    /// Language of the rendered payload; `None` on failure
    pub language: Option<Language>,
    pub content: PanelContent,
    /// Fetch errors in the order they happened
    pub errors: Vec<dagens_feeds::Error>,
}

impl PanelReport {
    pub fn source(&self) -> Option<RenderSource> {
        match self.state {
            PanelState::Rendered(source) => Some(source),
            _ => None,
        }
    }
}

pub struct HistoricalEventsPanel {
    config: PanelConfig,
    feed: Arc<dyn FeedSource>,
    cache: HistoryCache,
    clock: Arc<dyn Clock>,
    surface: Arc<dyn Surface>,
    date_override: Option<DateKey>,
}

impl HistoricalEventsPanel {
    pub fn new(
        config: PanelConfig,
        feed: Arc<dyn FeedSource>,
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        surface: Arc<dyn Surface>,
    ) -> Self {
        let cache = HistoryCache::new(store, config.cache_ttl);
        Self {
            config,
            feed,
            cache,
            clock,
            surface,
            date_override: None,
        }
    }

    /// Show another calendar day instead of today's
    pub fn with_date(mut self, date: DateKey) -> Self {
        self.date_override = Some(date);
        self
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Run the lookup once and leave the final content on the surface
    pub async fn init(&self) -> PanelReport {
        let now = self.clock.now();
        let captured_at = now.with_timezone(&Utc);
        let date = self
            .date_override
            .unwrap_or_else(|| DateKey::from_datetime(&now));

        let primary = self.key(&self.config.primary_language, date);
        let fallback = self.key(&self.config.fallback_language, date);

        let mut errors = Vec::new();
        let mut payload: Option<Value> = None;
        let mut state = PanelState::TryPrimaryCache;

        loop {
            let event = match state {
                PanelState::TryPrimaryCache => self.try_cache(&primary, captured_at, &mut payload),
                PanelState::FetchPrimary => {
                    self.surface.replace(&PanelContent::loading());
                    match self.fetch(&primary, captured_at).await {
                        Ok(value) => {
                            payload = Some(value);
                            PanelEvent::FetchSucceeded
                        }
                        Err(e) => {
                            warn!(
                                language = %primary.language,
                                error = %e,
                                "primary on-this-day fetch failed, trying fallback"
                            );
                            errors.push(e);
                            PanelEvent::FetchFailed
                        }
                    }
                }
                PanelState::TryFallbackCache => {
                    self.try_cache(&fallback, captured_at, &mut payload)
                }
                PanelState::FetchFallback => match self.fetch(&fallback, captured_at).await {
                    Ok(value) => {
                        payload = Some(value);
                        PanelEvent::FetchSucceeded
                    }
                    Err(e) => {
                        errors.push(e);
                        PanelEvent::FetchFailed
                    }
                },
                PanelState::Rendered(_) | PanelState::Failed => break,
            };

            let next = state.next(event);
            debug!(from = ?state, to = ?next, "panel transition");
            state = next;
        }

        let (content, language) = match (state, payload) {
            (PanelState::Rendered(source), Some(payload)) => {
                let language = if source.is_fallback() {
                    fallback.language.clone()
                } else {
                    primary.language.clone()
                };
                let options = RenderOptions {
                    language: language.clone(),
                    query_type: self.config.query_type,
                    date,
                    max_items: self.config.max_items,
                };
                info!(?source, language = %language, "rendering on-this-day panel");
                (build_content(&payload, &options), Some(language))
            }
            _ => {
                let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
                error!(errors = %details.join("; "), "could not load on-this-day history");
                (PanelContent::failed(), None)
            }
        };

        self.surface.replace(&content);

        PanelReport {
            state,
            date,
            language,
            content,
            errors,
        }
    }

    fn key(&self, language: &Language, date: DateKey) -> CacheKey {
        CacheKey::new(language.clone(), self.config.query_type, date)
    }

    fn try_cache(
        &self,
        key: &CacheKey,
        now: DateTime<Utc>,
        payload: &mut Option<Value>,
    ) -> PanelEvent {
        match self.cache.load(key, now) {
            Some(value) => {
                debug!(key = %key, "on-this-day cache hit");
                *payload = Some(value);
                PanelEvent::CacheHit
            }
            None => PanelEvent::CacheMiss,
        }
    }

    /// Fetch and, on success, write through to the cache
    async fn fetch(
        &self,
        key: &CacheKey,
        now: DateTime<Utc>,
    ) -> Result<Value, dagens_feeds::Error> {
        let request = FeedRequest::new(key.language.clone(), key.query_type, key.date);
        let value = self.feed.fetch(&request).await?;
        self.cache.save(key, &value, now);
        Ok(value)
    }
}
