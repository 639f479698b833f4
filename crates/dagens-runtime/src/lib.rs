pub mod cache;
pub mod clock;
pub mod config;
pub mod currency;
pub mod error;
pub mod panel;
pub mod surface;
pub mod weather;

pub use cache::{CacheEntryInfo, HistoryCache};
pub use clock::{Clock, SystemClock};
pub use config::{Config, CurrencySettings, HttpSection, OnThisDaySettings, WeatherSettings};
pub use currency::CurrencyConverter;
pub use error::{Error, Result};
pub use panel::{HistoricalEventsPanel, PanelConfig, PanelEvent, PanelReport, PanelState, RenderSource};
pub use surface::Surface;
pub use weather::{CityLookup, WeatherLookup};
