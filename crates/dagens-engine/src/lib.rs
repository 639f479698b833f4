pub mod calc;
pub mod error;
pub mod messages;
pub mod panel;
pub mod weather;

pub use error::{Error, Result};
pub use panel::{
    ItemLine, Listing, PanelContent, RenderOptions, build_content, encode_uri_component,
    resolve_link, select_items,
};
pub use weather::{WeatherReport, describe_weather_code, format_place};
