use crate::panel::PanelConfig;
use crate::{Error, Result};
use dagens_feeds::HttpSettings;
use dagens_feeds::open_meteo::{DEFAULT_FORECAST_BASE_URL, DEFAULT_GEOCODING_BASE_URL};
use dagens_feeds::wikimedia::DEFAULT_FEED_BASE_URL;
use dagens_feeds::GeocodeQuery;
use dagens_feeds::exchange_rate::DEFAULT_EXCHANGE_RATE_BASE_URL;
use dagens_types::{CurrencyCode, Language, QueryType};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_MAX_ITEMS: usize = 5;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 6 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnThisDaySettings {
    pub primary_language: String,
    pub fallback_language: String,
    pub max_items: usize,
    pub cache_ttl_secs: u64,
    pub query_type: QueryType,
    pub feed_base_url: String,
}

impl Default for OnThisDaySettings {
    fn default() -> Self {
        Self {
            primary_language: "en".to_string(),
            fallback_language: "en".to_string(),
            max_items: DEFAULT_MAX_ITEMS,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            query_type: QueryType::All,
            feed_base_url: DEFAULT_FEED_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSection {
    pub user_agent: String,
    /// 0 keeps the transport default
    pub timeout_secs: u64,
}

impl Default for HttpSection {
    fn default() -> Self {
        Self {
            user_agent: dagens_feeds::http::default_user_agent(),
            timeout_secs: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherSettings {
    pub forecast_base_url: String,
    pub geocoding_base_url: String,
    pub language: String,
    /// Empty searches worldwide
    pub country_code: String,
    pub timezone: String,
    pub result_count: u32,
}

impl Default for WeatherSettings {
    fn default() -> Self {
        let query = GeocodeQuery::default();
        Self {
            forecast_base_url: DEFAULT_FORECAST_BASE_URL.to_string(),
            geocoding_base_url: DEFAULT_GEOCODING_BASE_URL.to_string(),
            language: query.language,
            country_code: query.country_code.unwrap_or_default(),
            timezone: "Europe/Oslo".to_string(),
            result_count: query.count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencySettings {
    pub base_url: String,
    /// Currency that amounts are given in
    pub base_currency: String,
}

impl Default for CurrencySettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_EXCHANGE_RATE_BASE_URL.to_string(),
            base_currency: CurrencyCode::nok().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub onthisday: OnThisDaySettings,
    #[serde(default)]
    pub http: HttpSection,
    #[serde(default)]
    pub weather: WeatherSettings,
    #[serde(default)]
    pub currency: CurrencySettings,
}

impl Config {
    /// Missing file means defaults; a present file must parse and validate
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.panel_config()?;

        if self.onthisday.feed_base_url.trim().is_empty() {
            return Err(Error::Config("onthisday.feed_base_url must not be empty".to_string()));
        }
        if self.http.user_agent.trim().is_empty() {
            return Err(Error::Config("http.user_agent must not be empty".to_string()));
        }
        if !(1..=100).contains(&self.weather.result_count) {
            return Err(Error::Config(
                "weather.result_count must be between 1 and 100".to_string(),
            ));
        }
        if self.currency.base_url.trim().is_empty() {
            return Err(Error::Config("currency.base_url must not be empty".to_string()));
        }
        self.base_currency()?;
        Ok(())
    }

    pub fn panel_config(&self) -> Result<PanelConfig> {
        let section = &self.onthisday;
        if section.max_items == 0 {
            return Err(Error::Config("onthisday.max_items must be at least 1".to_string()));
        }
        if section.cache_ttl_secs == 0 {
            return Err(Error::Config(
                "onthisday.cache_ttl_secs must be at least 1".to_string(),
            ));
        }

        Ok(PanelConfig {
            primary_language: Language::new(&section.primary_language)?,
            fallback_language: Language::new(&section.fallback_language)?,
            max_items: section.max_items,
            cache_ttl: Duration::from_secs(section.cache_ttl_secs),
            query_type: section.query_type,
        })
    }

    pub fn http_settings(&self) -> HttpSettings {
        HttpSettings {
            user_agent: self.http.user_agent.clone(),
            timeout: (self.http.timeout_secs > 0)
                .then(|| Duration::from_secs(self.http.timeout_secs)),
        }
    }

    pub fn base_currency(&self) -> Result<CurrencyCode> {
        Ok(CurrencyCode::new(&self.currency.base_currency)?)
    }

    pub fn geocode_query(&self) -> GeocodeQuery {
        let country_code = self.weather.country_code.trim();
        GeocodeQuery {
            count: self.weather.result_count,
            language: self.weather.language.clone(),
            country_code: (!country_code.is_empty()).then(|| country_code.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        let panel = config.panel_config().unwrap();

        assert_eq!(panel.primary_language, Language::english());
        assert_eq!(panel.fallback_language, Language::english());
        assert_eq!(panel.max_items, 5);
        assert_eq!(panel.cache_ttl, Duration::from_secs(21_600));
        assert_eq!(panel.query_type, QueryType::All);
        assert_eq!(config.http_settings().timeout, None);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.onthisday.primary_language = "nb".to_string();
        config.onthisday.query_type = QueryType::Births;
        config.http.timeout_secs = 7;
        config.save_to(&config_path)?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        assert_eq!(loaded.http_settings().timeout, Some(Duration::from_secs(7)));

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("missing.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            "[onthisday]\nprimary_language = \"de\"\nquery_type = \"events\"\n",
        )?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.onthisday.primary_language, "de");
        assert_eq!(config.onthisday.query_type, QueryType::Events);
        assert_eq!(config.onthisday.max_items, DEFAULT_MAX_ITEMS);
        assert_eq!(config.weather, WeatherSettings::default());
        Ok(())
    }

    #[test]
    fn test_invalid_values_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        for body in [
            "[onthisday]\nmax_items = 0\n",
            "[onthisday]\ncache_ttl_secs = 0\n",
            "[onthisday]\nprimary_language = \"\"\n",
            "[onthisday]\nquery_type = \"weather\"\n",
            "[weather]\nresult_count = 0\n",
            "[weather]\nresult_count = 101\n",
            "[currency]\nbase_currency = \"kroner\"\n",
            "[currency]\nbase_url = \" \"\n",
        ] {
            std::fs::write(&config_path, body)?;
            assert!(
                matches!(Config::load_from(&config_path), Err(Error::Config(_)) | Err(Error::Invalid(_))),
                "accepted: {body}"
            );
        }
        Ok(())
    }

    #[test]
    fn test_geocode_query_empty_country_is_worldwide() {
        let mut config = Config::default();
        assert_eq!(config.geocode_query().country_code.as_deref(), Some("NO"));

        config.weather.country_code = " ".to_string();
        assert_eq!(config.geocode_query().country_code, None);
    }

    #[test]
    fn test_currency_section() -> Result<()> {
        let config = Config::default();
        assert_eq!(config.base_currency()?, CurrencyCode::nok());
        assert_eq!(config.currency.base_url, DEFAULT_EXCHANGE_RATE_BASE_URL);

        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            "[currency]\nbase_currency = \"sek\"\nbase_url = \"http://localhost:9/latest\"\n",
        )?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.base_currency()?.as_str(), "SEK");
        assert_eq!(loaded.currency.base_url, "http://localhost:9/latest");
        Ok(())
    }
}
