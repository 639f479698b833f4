use crate::http::{HttpSettings, read_json, trim_base};
use crate::traits::RateSource;
use crate::{Error, Result};
use async_trait::async_trait;
use dagens_types::{CurrencyCode, RateTable};
use tracing::info;

pub const DEFAULT_EXCHANGE_RATE_BASE_URL: &str = "https://api.exchangerate.host/latest";

/// Client for `latest?base=XXX&symbols=YYY` style exchange-rate services
pub struct ExchangeRateClient {
    client: reqwest::Client,
    base_url: String,
}

impl ExchangeRateClient {
    pub fn new(settings: &HttpSettings) -> Result<Self> {
        Ok(Self {
            client: settings.build_client()?,
            base_url: DEFAULT_EXCHANGE_RATE_BASE_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = trim_base(base_url.as_ref());
        self
    }
}

#[async_trait]
impl RateSource for ExchangeRateClient {
    async fn rate(&self, base: &CurrencyCode, target: &CurrencyCode) -> Result<f64> {
        info!(%base, %target, "fetching exchange rate");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("base", base.as_str()), ("symbols", target.as_str())])
            .send()
            .await?;

        let table: RateTable = read_json(response).await?;
        table
            .rate(target)
            .ok_or_else(|| Error::Decode(format!("response has no usable {} rate", target)))
    }
}
