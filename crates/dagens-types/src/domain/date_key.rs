use crate::{Error, Result};
use chrono::{DateTime, Datelike, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calendar day without a year component.
///
/// Addresses both the cache and the remote "on this day" query. The feed is an
/// aggregate across all years, so only month and day matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DateKey {
    month: u32,
    day: u32,
}

impl DateKey {
    /// Create a DateKey, rejecting days that never occur (Feb 29 is allowed)
    pub fn new(month: u32, day: u32) -> Result<Self> {
        // 2000 is a leap year, so every real month/day pair is representable
        if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
            return Err(Error::Parse(format!(
                "invalid month/day: {:02}-{:02}",
                month, day
            )));
        }
        Ok(Self { month, day })
    }

    /// DateKey of a calendar date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    /// DateKey of a point in time, evaluated in that time's own timezone
    pub fn from_datetime<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        Self::from_date(now.date_naive())
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Two-digit zero-padded month ("03")
    pub fn mm(&self) -> String {
        format!("{:02}", self.month)
    }

    /// Two-digit zero-padded day ("07")
    pub fn dd(&self) -> String {
        format!("{:02}", self.day)
    }

    /// Concatenated month and day digits ("0307"), as used in cache keys
    pub fn compact(&self) -> String {
        format!("{:02}{:02}", self.month, self.day)
    }

    /// Human-facing day/month ("07.03")
    pub fn day_month(&self) -> String {
        format!("{:02}.{:02}", self.day, self.month)
    }

    /// Parse the compact "MMDD" form
    pub fn from_compact(s: &str) -> Result<Self> {
        if s.len() != 4 || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::Parse(format!("expected MMDD, got '{}'", s)));
        }
        let month = s[..2]
            .parse()
            .map_err(|_| Error::Parse(format!("invalid month in '{}'", s)))?;
        let day = s[2..]
            .parse()
            .map_err(|_| Error::Parse(format!("invalid day in '{}'", s)))?;
        Self::new(month, day)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// Accepts "MM-DD" or "MMDD"
impl FromStr for DateKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.split_once('-') {
            Some((month, day)) => {
                let month = month
                    .parse()
                    .map_err(|_| Error::Parse(format!("invalid month in '{}'", s)))?;
                let day = day
                    .parse()
                    .map_err(|_| Error::Parse(format!("invalid day in '{}'", s)))?;
                Self::new(month, day)
            }
            None => Self::from_compact(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_zero_padding() {
        let key = DateKey::new(3, 7).unwrap();
        assert_eq!(key.mm(), "03");
        assert_eq!(key.dd(), "07");
        assert_eq!(key.compact(), "0307");
        assert_eq!(key.day_month(), "07.03");
        assert_eq!(key.to_string(), "03-07");
    }

    #[test]
    fn test_leap_day_is_valid() {
        assert!(DateKey::new(2, 29).is_ok());
        assert!(DateKey::new(2, 30).is_err());
        assert!(DateKey::new(13, 1).is_err());
        assert!(DateKey::new(0, 1).is_err());
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!("12-31".parse::<DateKey>().unwrap(), DateKey::new(12, 31).unwrap());
        assert_eq!("0101".parse::<DateKey>().unwrap(), DateKey::new(1, 1).unwrap());
        assert!("1-1-1".parse::<DateKey>().is_err());
        assert!("abcd".parse::<DateKey>().is_err());
        assert!("123".parse::<DateKey>().is_err());
    }

    #[test]
    fn test_uses_local_wall_clock_date() {
        // 23:30 UTC on Jan 31 is already Feb 1 at UTC+2
        let utc = Utc.with_ymd_and_hms(2024, 1, 31, 23, 30, 0).unwrap();
        let oslo_summer = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = utc.with_timezone(&oslo_summer);

        assert_eq!(DateKey::from_datetime(&utc), DateKey::new(1, 31).unwrap());
        assert_eq!(DateKey::from_datetime(&local), DateKey::new(2, 1).unwrap());
    }
}
