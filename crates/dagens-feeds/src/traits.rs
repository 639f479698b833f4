use crate::Result;
use async_trait::async_trait;
use dagens_types::{Coordinates, CurrencyCode, DateKey, Forecast, GeoPlace, Language, QueryType};
use serde_json::Value;

/// Address of one "on this day" query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRequest {
    pub language: Language,
    pub query_type: QueryType,
    pub date: DateKey,
}

impl FeedRequest {
    pub fn new(language: Language, query_type: QueryType, date: DateKey) -> Self {
        Self {
            language,
            query_type,
            date,
        }
    }
}

/// Remote "on this day" source.
///
/// Returns the raw JSON payload so it can be cached verbatim. Implementations
/// must be object-safe to allow `Arc<dyn FeedSource>`.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch(&self, request: &FeedRequest) -> Result<Value>;
}

/// Place-name lookup
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn search(&self, name: &str) -> Result<Vec<GeoPlace>>;
}

/// Current and daily forecast for a coordinate
#[async_trait]
pub trait ForecastSource: Send + Sync {
    async fn forecast(&self, at: Coordinates) -> Result<Forecast>;
}

/// Latest exchange rate: units of `target` per one unit of `base`
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn rate(&self, base: &CurrencyCode, target: &CurrencyCode) -> Result<f64>;
}
