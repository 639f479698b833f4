use crate::http::{HttpSettings, read_json, trim_base};
use crate::traits::ForecastSource;
use crate::Result;
use async_trait::async_trait;
use dagens_types::{Coordinates, Forecast};
use tracing::info;

pub const DEFAULT_FORECAST_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

const CURRENT_VARIABLES: &str = "temperature_2m,apparent_temperature,weather_code,wind_speed_10m";
const DAILY_VARIABLES: &str =
    "temperature_2m_max,temperature_2m_min,precipitation_probability_max";

pub struct ForecastClient {
    client: reqwest::Client,
    base_url: String,
    timezone: String,
}

impl ForecastClient {
    pub fn new(settings: &HttpSettings, timezone: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: settings.build_client()?,
            base_url: DEFAULT_FORECAST_BASE_URL.to_string(),
            timezone: timezone.into(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = trim_base(base_url.as_ref());
        self
    }
}

#[async_trait]
impl ForecastSource for ForecastClient {
    async fn forecast(&self, at: Coordinates) -> Result<Forecast> {
        info!(lat = at.latitude, lon = at.longitude, "fetching forecast");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", at.latitude.to_string()),
                ("longitude", at.longitude.to_string()),
                ("current", CURRENT_VARIABLES.to_string()),
                ("daily", DAILY_VARIABLES.to_string()),
                ("timezone", self.timezone.clone()),
            ])
            .send()
            .await?;

        read_json(response).await
    }
}
