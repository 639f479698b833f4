use crate::presentation;
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use dagens_feeds::{ForecastClient, GeocodingClient};
use dagens_runtime::{Config, WeatherLookup};
use dagens_types::Coordinates;
use std::sync::Arc;

pub enum WeatherTarget {
    City(String),
    Coordinates { lat: f64, lon: f64 },
}

pub async fn handle(config: &Config, target: WeatherTarget, format: OutputFormat) -> Result<()> {
    let settings = config.http_settings();
    let geocoder = GeocodingClient::new(&settings, config.geocode_query())?
        .with_base_url(&config.weather.geocoding_base_url);
    let forecast = ForecastClient::new(&settings, config.weather.timezone.clone())?
        .with_base_url(&config.weather.forecast_base_url);
    let lookup = WeatherLookup::new(Arc::new(geocoder), Arc::new(forecast));
    let color = presentation::use_color();

    let output = match target {
        WeatherTarget::City(name) => {
            let result = lookup
                .by_city(&name)
                .await
                .with_context(|| format!("weather lookup for '{}' failed", name))?;
            presentation::weather::render_city(&result, format, color)?
        }
        WeatherTarget::Coordinates { lat, lon } => {
            let at = Coordinates::new(lat, lon)?;
            let report = lookup
                .by_coordinates(at)
                .await
                .context("forecast lookup failed")?;
            presentation::weather::render_report(&report, format, color)?
        }
    };

    println!("{}", output);
    Ok(())
}
