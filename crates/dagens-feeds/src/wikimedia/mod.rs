//! Wikimedia Feed API "on this day" source
//!
//! `GET {base}/{lang}/onthisday/{type}/{MM}/{DD}`

use crate::http::{HttpSettings, read_json, trim_base};
use crate::traits::{FeedRequest, FeedSource};
use crate::Result;
use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

pub const DEFAULT_FEED_BASE_URL: &str = "https://api.wikimedia.org/feed/v1/wikipedia";

pub struct WikimediaFeed {
    client: reqwest::Client,
    base_url: String,
    user_agent: String,
}

impl WikimediaFeed {
    pub fn new(settings: &HttpSettings) -> Result<Self> {
        Ok(Self {
            client: settings.build_client()?,
            base_url: DEFAULT_FEED_BASE_URL.to_string(),
            user_agent: settings.user_agent.clone(),
        })
    }

    /// Point the source at another feed root (mirrors, tests)
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = trim_base(base_url.as_ref());
        self
    }

    pub fn url_for(&self, request: &FeedRequest) -> String {
        format!(
            "{}/{}/onthisday/{}/{}/{}",
            self.base_url,
            request.language,
            request.query_type,
            request.date.mm(),
            request.date.dd()
        )
    }
}

#[async_trait]
impl FeedSource for WikimediaFeed {
    async fn fetch(&self, request: &FeedRequest) -> Result<Value> {
        let url = self.url_for(request);
        info!(url = %url, "fetching on-this-day feed");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .header("Api-User-Agent", &self.user_agent)
            .send()
            .await?;

        read_json(response).await
    }
}
