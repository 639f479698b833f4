mod forecast;
mod geocoding;

pub use forecast::{ForecastClient, DEFAULT_FORECAST_BASE_URL};
pub use geocoding::{GeocodeQuery, GeocodingClient, DEFAULT_GEOCODING_BASE_URL};
