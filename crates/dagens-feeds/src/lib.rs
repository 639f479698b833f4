pub mod error;
pub mod exchange_rate;
pub mod http;
pub mod open_meteo;
pub mod traits;
pub mod wikimedia;

pub use error::{Error, Result};
pub use exchange_rate::ExchangeRateClient;
pub use http::HttpSettings;
pub use open_meteo::{ForecastClient, GeocodeQuery, GeocodingClient};
pub use traits::{FeedRequest, FeedSource, ForecastSource, Geocoder, RateSource};
pub use wikimedia::WikimediaFeed;
