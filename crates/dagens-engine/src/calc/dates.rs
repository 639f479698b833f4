use crate::{Error, Result};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

const DAYS_PER_YEAR: f64 = 365.25;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Age {
    /// Fractional years, floored to one decimal
    pub years_decimal: f64,
    pub years: i64,
    pub months: i64,
}

/// Approximate age on `today`, using 365.25-day years
pub fn age(birth: NaiveDate, today: NaiveDate) -> Result<Age> {
    if birth > today {
        return Err(Error::InvalidInput(format!(
            "birth date {} is in the future",
            birth
        )));
    }

    let days = (today - birth).num_days() as f64;
    let years_exact = days / DAYS_PER_YEAR;
    let years = years_exact.floor();
    let months = ((years_exact - years) * 12.0).floor();

    Ok(Age {
        years_decimal: (years_exact * 10.0).floor() / 10.0,
        years: years as i64,
        months: months as i64,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateDiff {
    pub days: i64,
    pub years: i64,
    pub months: i64,
}

/// Absolute distance between two dates, in days and in whole calendar
/// years/months. Argument order does not matter.
pub fn date_diff(a: NaiveDate, b: NaiveDate) -> DateDiff {
    let (start, end) = if a <= b { (a, b) } else { (b, a) };

    let mut total_months =
        (end.year() - start.year()) as i64 * 12 + end.month() as i64 - start.month() as i64;
    if end.day() < start.day() {
        total_months -= 1;
    }

    DateDiff {
        days: (end - start).num_days(),
        years: total_months / 12,
        months: total_months % 12,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Duration {
    pub minutes: f64,
    pub hours: f64,
    pub days: f64,
}

/// Minutes expressed as hours and days
pub fn minutes(minutes: f64) -> Result<Duration> {
    if !minutes.is_finite() {
        return Err(Error::InvalidInput("expected a finite number of minutes".to_string()));
    }
    Ok(Duration {
        minutes,
        hours: minutes / 60.0,
        days: minutes / 60.0 / 24.0,
    })
}
