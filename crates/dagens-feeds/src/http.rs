use crate::{Error, Result};
use reqwest::Response;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Client settings shared by every outbound source
#[derive(Debug, Clone)]
pub struct HttpSettings {
    /// Sent as both `User-Agent` and Wikimedia's `Api-User-Agent`
    pub user_agent: String,
    /// `None` leaves the transport defaults in place
    pub timeout: Option<Duration>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout: None,
        }
    }
}

impl HttpSettings {
    pub fn build_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder().user_agent(self.user_agent.clone());
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|e| Error::InvalidRequest(format!("failed to build HTTP client: {}", e)))
    }
}

pub fn default_user_agent() -> String {
    format!("dagens/{} (personal dashboard)", env!("CARGO_PKG_VERSION"))
}

/// Reject non-success statuses, then decode the body as JSON
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status {
            code: status.as_u16(),
            url: response.url().to_string(),
        });
    }

    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

pub(crate) fn trim_base(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_user_agent_names_crate() {
        assert!(default_user_agent().starts_with("dagens/"));
    }

    #[test]
    fn test_trim_base() {
        assert_eq!(trim_base("https://x.org/feed/"), "https://x.org/feed");
        assert_eq!(trim_base("https://x.org/feed"), "https://x.org/feed");
    }

    #[test]
    fn test_build_client_with_timeout() {
        let settings = HttpSettings {
            user_agent: "test/1.0".to_string(),
            timeout: Some(Duration::from_secs(5)),
        };
        assert!(settings.build_client().is_ok());
    }
}
