use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wikipedia language edition tag ("en", "nb", "de", ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    /// Create a Language, normalising to lowercase and rejecting empty or
    /// non-tag input
    pub fn new(tag: impl Into<String>) -> Result<Self> {
        let tag = tag.into().trim().to_ascii_lowercase();
        if tag.is_empty() {
            return Err(Error::Parse("language tag must not be empty".to_string()));
        }
        if !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(Error::Parse(format!("invalid language tag: '{}'", tag)));
        }
        Ok(Self(tag))
    }

    pub fn english() -> Self {
        Self("en".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Base URL of this language's Wikipedia edition, with trailing slash
    pub fn wikipedia_root(&self) -> String {
        format!("https://{}.wikipedia.org/", self.0)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for Language {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Which "on this day" list the feed is asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryType {
    #[default]
    All,
    Selected,
    Events,
    Births,
    Deaths,
    Holidays,
}

impl QueryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::All => "all",
            QueryType::Selected => "selected",
            QueryType::Events => "events",
            QueryType::Births => "births",
            QueryType::Deaths => "deaths",
            QueryType::Holidays => "holidays",
        }
    }

    pub fn all_types() -> &'static [QueryType] {
        &[
            QueryType::All,
            QueryType::Selected,
            QueryType::Events,
            QueryType::Births,
            QueryType::Deaths,
            QueryType::Holidays,
        ]
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QueryType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        QueryType::all_types()
            .iter()
            .find(|t| t.as_str() == s.trim().to_ascii_lowercase())
            .copied()
            .ok_or_else(|| Error::Parse(format!("unknown query type: '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_normalised() {
        assert_eq!(Language::new(" NB ").unwrap().as_str(), "nb");
        assert!(Language::new("").is_err());
        assert!(Language::new("en/../x").is_err());
    }

    #[test]
    fn test_wikipedia_root() {
        assert_eq!(
            Language::new("nb").unwrap().wikipedia_root(),
            "https://nb.wikipedia.org/"
        );
    }

    #[test]
    fn test_query_type_round_trip_names() {
        for t in QueryType::all_types() {
            assert_eq!(t.as_str().parse::<QueryType>().unwrap(), *t);
        }
        assert!("weather".parse::<QueryType>().is_err());
    }
}
