use crate::messages::MISSING_VALUE;
use dagens_types::{Coordinates, Forecast, GeoPlace};
use serde::Serialize;

/// Forecast flattened into display strings; missing values are "—"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherReport {
    pub label: String,
    pub latitude: String,
    pub longitude: String,
    pub time: String,
    pub temperature: String,
    pub apparent_temperature: String,
    pub wind_speed: String,
    pub weather_code: String,
    pub weather_description: Option<String>,
    pub today_min: String,
    pub today_max: String,
    pub precipitation_probability: String,
}

impl WeatherReport {
    pub fn new(label: impl Into<String>, at: Coordinates, forecast: &Forecast) -> Self {
        let current = forecast.current.clone().unwrap_or_default();
        let daily = forecast.daily.clone().unwrap_or_default();
        Self {
            label: label.into(),
            latitude: fmt_number(Some(at.latitude), 4),
            longitude: fmt_number(Some(at.longitude), 4),
            time: current.time.unwrap_or_else(|| MISSING_VALUE.to_string()),
            temperature: fmt_number(current.temperature_2m, 1),
            apparent_temperature: fmt_number(current.apparent_temperature, 1),
            wind_speed: fmt_number(current.wind_speed_10m, 1),
            weather_code: current
                .weather_code
                .map(|c| c.to_string())
                .unwrap_or_else(|| MISSING_VALUE.to_string()),
            weather_description: current
                .weather_code
                .and_then(describe_weather_code)
                .map(str::to_string),
            today_min: fmt_number(today(&daily.temperature_2m_min), 1),
            today_max: fmt_number(today(&daily.temperature_2m_max), 1),
            precipitation_probability: fmt_number(today(&daily.precipitation_probability_max), 0),
        }
    }
}

fn today(series: &[Option<f64>]) -> Option<f64> {
    series.first().copied().flatten()
}

fn fmt_number(value: Option<f64>, digits: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.*}", digits, v),
        _ => MISSING_VALUE.to_string(),
    }
}

/// "Name — region (lat, lon)" for one geocoding hit
pub fn format_place(place: &GeoPlace) -> String {
    let region = place.region_label();
    let region = if region.is_empty() {
        String::new()
    } else {
        format!(" — {}", region)
    };
    format!(
        "{}{} ({}, {})",
        place.name,
        region,
        fmt_number(Some(place.latitude), 4),
        fmt_number(Some(place.longitude), 4)
    )
}

/// WMO weather interpretation codes as used by Open-Meteo
pub fn describe_weather_code(code: i64) -> Option<&'static str> {
    let text = match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 | 48 => "Fog",
        51 | 53 | 55 => "Drizzle",
        56 | 57 => "Freezing drizzle",
        61 | 63 | 65 => "Rain",
        66 | 67 => "Freezing rain",
        71 | 73 | 75 => "Snow fall",
        77 => "Snow grains",
        80..=82 => "Rain showers",
        85 | 86 => "Snow showers",
        95 => "Thunderstorm",
        96 | 99 => "Thunderstorm with hail",
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dagens_types::{CurrentWeather, DailyWeather};

    #[test]
    fn test_report_formats_and_fills_gaps() {
        let forecast = Forecast {
            current: Some(CurrentWeather {
                time: Some("2024-04-09T12:00".to_string()),
                temperature_2m: Some(7.26),
                apparent_temperature: None,
                weather_code: Some(61),
                wind_speed_10m: Some(5.0),
            }),
            daily: Some(DailyWeather {
                temperature_2m_max: vec![Some(9.04)],
                temperature_2m_min: vec![],
                precipitation_probability_max: vec![None],
            }),
        };
        let at = Coordinates::new(59.91391, 10.75221).unwrap();
        let report = WeatherReport::new("Oslo", at, &forecast);

        assert_eq!(report.latitude, "59.9139");
        assert_eq!(report.longitude, "10.7522");
        assert_eq!(report.temperature, "7.3");
        assert_eq!(report.apparent_temperature, "—");
        assert_eq!(report.wind_speed, "5.0");
        assert_eq!(report.weather_code, "61");
        assert_eq!(report.weather_description.as_deref(), Some("Rain"));
        assert_eq!(report.today_max, "9.0");
        assert_eq!(report.today_min, "—");
        assert_eq!(report.precipitation_probability, "—");
    }

    #[test]
    fn test_empty_forecast_is_all_missing() {
        let at = Coordinates::new(0.0, 0.0).unwrap();
        let report = WeatherReport::new("Null Island", at, &Forecast::default());
        assert_eq!(report.time, "—");
        assert_eq!(report.weather_code, "—");
        assert_eq!(report.weather_description, None);
    }

    #[test]
    fn test_format_place() {
        let place = GeoPlace {
            name: "Bodø".to_string(),
            latitude: 67.28,
            longitude: 14.405,
            admin1: Some("Nordland".to_string()),
            admin2: None,
            country: Some("Norge".to_string()),
            country_code: Some("NO".to_string()),
        };
        assert_eq!(format_place(&place), "Bodø — Nordland, Norge (67.2800, 14.4050)");

        let bare = GeoPlace {
            admin1: None,
            country: None,
            ..place
        };
        assert_eq!(format_place(&bare), "Bodø (67.2800, 14.4050)");
    }
}
