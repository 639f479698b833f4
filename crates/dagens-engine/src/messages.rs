//! User-facing panel texts

pub const LOADING: &str = "Loading historical events…";
pub const NO_RESULTS: &str = "No historical events found for today.";
pub const FETCH_FAILED: &str = "Could not fetch 'On this day' right now (network / API error).";
pub const UNKNOWN_EVENT: &str = "Unknown event";
pub const SOURCE_LABEL: &str = "Source: Wikipedia";
pub const MISSING_VALUE: &str = "—";

pub fn header(day_month: &str) -> String {
    format!("On this day ({})", day_month)
}
