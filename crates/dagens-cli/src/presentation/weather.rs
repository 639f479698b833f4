use crate::types::OutputFormat;
use anyhow::Result;
use dagens_engine::{WeatherReport, format_place};
use dagens_runtime::CityLookup;
use dagens_types::GeoPlace;
use owo_colors::OwoColorize;
use serde::Serialize;

pub const NO_MATCHES: &str = "No places matched that name.";

#[derive(Serialize)]
struct CityLookupView<'a> {
    places: &'a [GeoPlace],
    weather: Option<&'a WeatherReport>,
}

pub fn render_city(lookup: &CityLookup, format: OutputFormat, color: bool) -> Result<String> {
    if let OutputFormat::Json = format {
        return super::to_json(&CityLookupView {
            places: &lookup.places,
            weather: lookup.report.as_ref(),
        });
    }

    let Some(report) = &lookup.report else {
        return Ok(NO_MATCHES.to_string());
    };

    let mut out = render_report_text(report, format, color);
    if lookup.places.len() > 1 {
        let hits: Vec<String> = lookup.places.iter().map(format_place).collect();
        match format {
            OutputFormat::Html => {
                out.push_str("\n<ul class=\"weather-hits\">\n");
                for hit in hits {
                    out.push_str(&format!("  <li>{}</li>\n", super::html::escape(&hit)));
                }
                out.push_str("</ul>");
            }
            _ => {
                out.push_str("\n\nOther matches:");
                for hit in hits.iter().skip(1) {
                    out.push_str(&format!("\n  {}", hit));
                }
            }
        }
    }
    Ok(out)
}

pub fn render_report(report: &WeatherReport, format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Json => super::to_json(report),
        _ => Ok(render_report_text(report, format, color)),
    }
}

fn report_rows(report: &WeatherReport) -> Vec<(&'static str, String)> {
    let conditions = match &report.weather_description {
        Some(description) => format!("{} (code {})", description, report.weather_code),
        None => format!("code {}", report.weather_code),
    };
    vec![
        ("Coordinates", format!("{}, {}", report.latitude, report.longitude)),
        ("Time", report.time.clone()),
        ("Temperature", format!("{} °C", report.temperature)),
        ("Feels like", format!("{} °C", report.apparent_temperature)),
        ("Wind", format!("{} m/s", report.wind_speed)),
        ("Conditions", conditions),
        ("Today", format!("{} / {} °C", report.today_min, report.today_max)),
        ("Precipitation", format!("{} %", report.precipitation_probability)),
    ]
}

fn render_report_text(report: &WeatherReport, format: OutputFormat, color: bool) -> String {
    let rows = report_rows(report);

    if let OutputFormat::Html = format {
        let mut out = format!(
            "<div class=\"weather-header\"><strong>{}</strong></div>\n<dl class=\"weather\">\n",
            super::html::escape(&report.label)
        );
        for (label, value) in rows {
            out.push_str(&format!(
                "  <dt>{}</dt><dd>{}</dd>\n",
                label,
                super::html::escape(&value)
            ));
        }
        out.push_str("</dl>");
        return out;
    }

    let mut lines = vec![if color {
        report.label.bold().to_string()
    } else {
        report.label.clone()
    }];
    for (label, value) in rows {
        lines.push(format!("  {:<14}{}", label, value));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use dagens_types::{Coordinates, CurrentWeather, Forecast};

    fn report() -> WeatherReport {
        let forecast = Forecast {
            current: Some(CurrentWeather {
                time: Some("2024-04-09T12:00".to_string()),
                temperature_2m: Some(6.4),
                apparent_temperature: Some(3.0),
                weather_code: Some(3),
                wind_speed_10m: Some(4.2),
            }),
            daily: None,
        };
        WeatherReport::new("Oslo", Coordinates::new(59.9139, 10.7522).unwrap(), &forecast)
    }

    #[test]
    fn test_plain_report() {
        insta::assert_snapshot!(render_report(&report(), OutputFormat::Plain, false).unwrap(), @r"
        Oslo
          Coordinates   59.9139, 10.7522
          Time          2024-04-09T12:00
          Temperature   6.4 °C
          Feels like    3.0 °C
          Wind          4.2 m/s
          Conditions    Overcast (code 3)
          Today         — / — °C
          Precipitation — %
        ");
    }

    #[test]
    fn test_no_matches() {
        let lookup = CityLookup {
            places: vec![],
            report: None,
        };
        assert_eq!(
            render_city(&lookup, OutputFormat::Plain, false).unwrap(),
            NO_MATCHES
        );
    }
}
