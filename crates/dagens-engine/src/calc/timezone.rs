use crate::{Error, Result};
use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;
use serde::Serialize;

/// Wall-clock time in one IANA zone
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneTime {
    pub zone: String,
    pub local: DateTime<FixedOffset>,
}

impl ZoneTime {
    /// Day-first local time, e.g. "17.05.2024, 14:00:00"
    pub fn display_time(&self) -> String {
        self.local.format("%d.%m.%Y, %H:%M:%S").to_string()
    }

    /// Offset from UTC, e.g. "+02:00"
    pub fn utc_offset(&self) -> String {
        self.local.offset().to_string()
    }
}

/// `now` as seen in `zone` (an IANA name such as "America/New_York")
pub fn time_in_zone(zone: &str, now: DateTime<Utc>) -> Result<ZoneTime> {
    let zone = zone.trim();
    let tz: Tz = zone
        .parse()
        .map_err(|_| Error::InvalidInput(format!("unknown time zone: '{}'", zone)))?;

    Ok(ZoneTime {
        zone: tz.name().to_string(),
        local: now.with_timezone(&tz).fixed_offset(),
    })
}
