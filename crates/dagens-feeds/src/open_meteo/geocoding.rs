use crate::http::{HttpSettings, read_json, trim_base};
use crate::traits::Geocoder;
use crate::{Error, Result};
use async_trait::async_trait;
use dagens_types::{GeoPlace, GeocodingResponse};
use tracing::info;

pub const DEFAULT_GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Fixed search parameters sent with every lookup
#[derive(Debug, Clone)]
pub struct GeocodeQuery {
    pub count: u32,
    pub language: String,
    /// ISO country filter; `None` searches worldwide
    pub country_code: Option<String>,
}

impl Default for GeocodeQuery {
    fn default() -> Self {
        Self {
            count: 10,
            language: "no".to_string(),
            country_code: Some("NO".to_string()),
        }
    }
}

pub struct GeocodingClient {
    client: reqwest::Client,
    base_url: String,
    query: GeocodeQuery,
}

impl GeocodingClient {
    pub fn new(settings: &HttpSettings, query: GeocodeQuery) -> Result<Self> {
        Ok(Self {
            client: settings.build_client()?,
            base_url: DEFAULT_GEOCODING_BASE_URL.to_string(),
            query,
        })
    }

    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = trim_base(base_url.as_ref());
        self
    }

    fn params(&self, name: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("name", name.to_string()),
            ("count", self.query.count.to_string()),
            ("language", self.query.language.clone()),
            ("format", "json".to_string()),
        ];
        if let Some(code) = self.query.country_code.as_ref().filter(|c| !c.is_empty()) {
            params.push(("countryCode", code.clone()));
        }
        params
    }
}

#[async_trait]
impl Geocoder for GeocodingClient {
    async fn search(&self, name: &str) -> Result<Vec<GeoPlace>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidRequest("place name must not be empty".to_string()));
        }
        info!(name, "geocoding place name");

        let response = self
            .client
            .get(&self.base_url)
            .query(&self.params(name))
            .send()
            .await?;

        let body: GeocodingResponse = read_json(response).await?;
        Ok(body.results.unwrap_or_default())
    }
}
