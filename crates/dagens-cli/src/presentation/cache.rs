use crate::types::OutputFormat;
use anyhow::Result;
use chrono::{DateTime, Local, Utc};
use dagens_runtime::CacheEntryInfo;
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Serialize)]
struct CacheEntryView<'a> {
    key: &'a str,
    captured_at: Option<DateTime<Utc>>,
    age_secs: Option<i64>,
    size_bytes: usize,
    fresh: bool,
}

pub fn render_entries(
    entries: &[CacheEntryInfo],
    now: DateTime<Utc>,
    format: OutputFormat,
    color: bool,
) -> Result<String> {
    if let OutputFormat::Json = format {
        let views: Vec<CacheEntryView> = entries
            .iter()
            .map(|entry| CacheEntryView {
                key: &entry.key,
                captured_at: entry.captured_at,
                age_secs: entry.captured_at.map(|at| (now - at).num_seconds()),
                size_bytes: entry.size_bytes,
                fresh: entry.fresh,
            })
            .collect();
        return super::to_json(&views);
    }

    if entries.is_empty() {
        return Ok("No cached entries.".to_string());
    }

    let mut lines = vec![format!(
        "{:<24} {:<17} {:>8} {:>9}  {}",
        "KEY", "CAPTURED", "AGE", "SIZE", "STATUS"
    )];
    for entry in entries {
        let captured = entry
            .captured_at
            .map(|at| at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        let age = entry
            .captured_at
            .map(|at| format_age(now - at))
            .unwrap_or_else(|| "-".to_string());
        let status = match (entry.captured_at.is_some(), entry.fresh) {
            (false, _) => "unreadable",
            (true, true) => "fresh",
            (true, false) => "expired",
        };
        let status = if !color {
            status.to_string()
        } else if entry.fresh {
            status.green().to_string()
        } else {
            status.yellow().to_string()
        };

        lines.push(format!(
            "{:<24} {:<17} {:>8} {:>9}  {}",
            entry.key,
            captured,
            age,
            format!("{} B", entry.size_bytes),
            status
        ));
    }
    Ok(lines.join("\n"))
}

/// Coarse human age: "42s", "17m", "5h", "3d"
pub fn format_age(age: chrono::Duration) -> String {
    let secs = age.num_seconds();
    if secs < 0 {
        return "future".to_string();
    }
    match secs {
        0..=59 => format!("{}s", secs),
        60..=3_599 => format!("{}m", secs / 60),
        3_600..=86_399 => format!("{}h", secs / 3_600),
        _ => format!("{}d", secs / 86_400),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_age() {
        assert_eq!(format_age(Duration::seconds(42)), "42s");
        assert_eq!(format_age(Duration::minutes(17)), "17m");
        assert_eq!(format_age(Duration::hours(5) + Duration::minutes(59)), "5h");
        assert_eq!(format_age(Duration::days(3)), "3d");
        assert_eq!(format_age(Duration::seconds(-1)), "future");
    }

    #[test]
    fn test_empty_listing() {
        let out = render_entries(&[], Utc::now(), OutputFormat::Plain, false).unwrap();
        assert_eq!(out, "No cached entries.");
    }

    #[test]
    fn test_unreadable_entry_status() {
        let entries = vec![CacheEntryInfo {
            key: "otd:en:all:0101".to_string(),
            captured_at: None,
            size_bytes: 4,
            fresh: false,
        }];
        let out = render_entries(&entries, Utc::now(), OutputFormat::Plain, false).unwrap();
        let row = out.lines().nth(1).unwrap();
        assert!(row.starts_with("otd:en:all:0101"));
        assert!(row.ends_with("unreadable"));
        assert!(row.contains("4 B"));
    }
}
