use std::fmt;

/// Result type for dagens-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Storage layer error
    Store(dagens_store::Error),

    /// Outbound request failed
    Feed(dagens_feeds::Error),

    /// Invalid domain value (language tag, date, coordinates)
    Invalid(dagens_types::Error),

    /// Calculator input rejected
    Calc(dagens_engine::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Store(err) => write!(f, "Store error: {}", err),
            Error::Feed(err) => write!(f, "Request failed: {}", err),
            Error::Invalid(err) => write!(f, "Invalid value: {}", err),
            Error::Calc(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Store(err) => Some(err),
            Error::Feed(err) => Some(err),
            Error::Invalid(err) => Some(err),
            Error::Calc(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<dagens_store::Error> for Error {
    fn from(err: dagens_store::Error) -> Self {
        Error::Store(err)
    }
}

impl From<dagens_feeds::Error> for Error {
    fn from(err: dagens_feeds::Error) -> Self {
        Error::Feed(err)
    }
}

impl From<dagens_types::Error> for Error {
    fn from(err: dagens_types::Error) -> Self {
        Error::Invalid(err)
    }
}

impl From<dagens_engine::Error> for Error {
    fn from(err: dagens_engine::Error) -> Self {
        Error::Calc(err)
    }
}

impl From<dagens_core::Error> for Error {
    fn from(err: dagens_core::Error) -> Self {
        match err {
            dagens_core::Error::Io(err) => Error::Io(err),
            dagens_core::Error::Config(msg) => Error::Config(msg),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
