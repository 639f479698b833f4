use std::fmt;

/// Result type for dagens-feeds operations
pub type Result<T> = std::result::Result<T, Error>;

/// Ways an outbound request can fail
#[derive(Debug)]
pub enum Error {
    /// Connection, TLS, DNS or timeout failure
    Transport(reqwest::Error),

    /// Server answered with a non-success status
    Status { code: u16, url: String },

    /// Body was not the expected JSON
    Decode(String),

    /// Request could not be built (bad base URL, invalid client settings)
    InvalidRequest(String),
}

impl Error {
    /// HTTP status code, when the failure was a status error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(err) => write!(f, "Transport error: {}", err),
            Error::Status { code, url } => write!(f, "HTTP {} from {}", code, url),
            Error::Decode(msg) => write!(f, "Malformed response: {}", msg),
            Error::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(err) => Some(err),
            Error::Status { .. } | Error::Decode(_) | Error::InvalidRequest(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Error::InvalidRequest(err.to_string())
        } else if err.is_decode() {
            Error::Decode(err.to_string())
        } else {
            Error::Transport(err)
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = Error::Status {
            code: 503,
            url: "https://example.org/feed".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503 from https://example.org/feed");
        assert_eq!(err.status_code(), Some(503));
    }

    #[test]
    fn test_json_error_is_decode() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Decode(_)));
        assert_eq!(err.status_code(), None);
    }
}
