use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// ISO 4217 alphabetic code, stored uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl AsRef<str>) -> Result<Self> {
        let code = code.as_ref().trim().to_ascii_uppercase();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(Error::Parse(format!(
                "invalid currency code: '{}' (expected three letters, e.g. EUR)",
                code
            )));
        }
        Ok(Self(code))
    }

    pub fn nok() -> Self {
        Self("NOK".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for CurrencyCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        CurrencyCode::new(raw).map_err(serde::de::Error::custom)
    }
}

/// `latest` response of an exchange-rate service: units of each symbol per
/// one unit of `base`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RateTable {
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub rates: BTreeMap<String, f64>,
}

impl RateTable {
    pub fn rate(&self, currency: &CurrencyCode) -> Option<f64> {
        self.rates
            .get(currency.as_str())
            .copied()
            .filter(|rate| rate.is_finite() && *rate > 0.0)
    }
}
