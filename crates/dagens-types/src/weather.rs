use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Validated latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(Error::Parse("coordinates must be finite numbers".to_string()));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::Parse(format!(
                "latitude {} out of range [-90, 90]",
                latitude
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::Parse(format!(
                "longitude {} out of range [-180, 180]",
                longitude
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// One geocoding hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPlace {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub admin1: Option<String>,
    #[serde(default)]
    pub admin2: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
}

impl GeoPlace {
    pub fn coordinates(&self) -> Result<Coordinates> {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// "admin1, admin2, country" with empty parts skipped
    pub fn region_label(&self) -> String {
        [&self.admin1, &self.admin2, &self.country]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<Vec<GeoPlace>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub temperature_2m: Option<f64>,
    #[serde(default)]
    pub apparent_temperature: Option<f64>,
    #[serde(default)]
    pub weather_code: Option<i64>,
    #[serde(default)]
    pub wind_speed_10m: Option<f64>,
}

/// Daily series; index 0 is today
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyWeather {
    #[serde(default)]
    pub temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    pub temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation_probability_max: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub current: Option<CurrentWeather>,
    #[serde(default)]
    pub daily: Option<DailyWeather>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coordinates_validation() {
        assert!(Coordinates::new(59.9139, 10.7522).is_ok());
        assert!(Coordinates::new(91.0, 0.0).is_err());
        assert!(Coordinates::new(0.0, -180.5).is_err());
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_region_label_skips_missing() {
        let place: GeoPlace = serde_json::from_value(json!({
            "name": "Bergen",
            "latitude": 60.39,
            "longitude": 5.32,
            "admin1": "Vestland",
            "country": "Norge"
        }))
        .unwrap();
        assert_eq!(place.region_label(), "Vestland, Norge");
    }

    #[test]
    fn test_forecast_tolerates_nulls() {
        let forecast: Forecast = serde_json::from_value(json!({
            "current": {"temperature_2m": null, "weather_code": 3},
            "daily": {"temperature_2m_max": [null, 12.5]}
        }))
        .unwrap();
        let current = forecast.current.unwrap();
        assert_eq!(current.temperature_2m, None);
        assert_eq!(current.weather_code, Some(3));
        assert_eq!(forecast.daily.unwrap().temperature_2m_max, vec![None, Some(12.5)]);
    }
}
