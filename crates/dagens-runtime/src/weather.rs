use crate::Result;
use dagens_engine::WeatherReport;
use dagens_feeds::{ForecastSource, Geocoder};
use dagens_types::{Coordinates, GeoPlace};
use std::sync::Arc;
use tracing::info;

/// Geocoding hits for a name plus the forecast for the first one
#[derive(Debug, Clone)]
pub struct CityLookup {
    pub places: Vec<GeoPlace>,
    /// `None` when the name matched nothing
    pub report: Option<WeatherReport>,
}

pub struct WeatherLookup {
    geocoder: Arc<dyn Geocoder>,
    forecast: Arc<dyn ForecastSource>,
}

impl WeatherLookup {
    pub fn new(geocoder: Arc<dyn Geocoder>, forecast: Arc<dyn ForecastSource>) -> Self {
        Self { geocoder, forecast }
    }

    pub async fn by_city(&self, name: &str) -> Result<CityLookup> {
        let places = self.geocoder.search(name).await?;
        let Some(first) = places.first() else {
            info!(name, "no places matched");
            return Ok(CityLookup {
                places,
                report: None,
            });
        };

        let at = first.coordinates()?;
        let forecast = self.forecast.forecast(at).await?;
        let report = WeatherReport::new(first.name.clone(), at, &forecast);

        Ok(CityLookup {
            places,
            report: Some(report),
        })
    }

    pub async fn by_coordinates(&self, at: Coordinates) -> Result<WeatherReport> {
        let forecast = self.forecast.forecast(at).await?;
        let label = format!("{:.4}, {:.4}", at.latitude, at.longitude);
        Ok(WeatherReport::new(label, at, &forecast))
    }
}
