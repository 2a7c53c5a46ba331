//! Error types for galerie-core

use std::path::PathBuf;
use thiserror::Error;

/// Failure while talking to the gallery API
///
/// The site never distinguishes these for the visitor (every failure renders
/// the not-found or empty branch), but they are logged with their cause.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: {status}")]
    Http { status: u16 },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// 404 responses are treated like an empty body by the detail pages
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Http { status: 404 })
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(err.to_string())
    }
}

/// Failure while loading the configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        assert_eq!(ApiError::Http { status: 502 }.to_string(), "HTTP error: 502");
        assert!(ApiError::Http { status: 404 }.is_not_found());
        assert!(!ApiError::Network("offline".into()).is_not_found());
    }

    #[test]
    fn test_parse_error_conversion() {
        let err: ApiError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ApiError::Parse(_)));
    }
}
