//! Server and CLI configuration
//!
//! Loaded from `<config_dir>/galerie/config.toml` (or an explicit path);
//! a missing file yields the defaults. Command-line flags override it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::assets::DEFAULT_BASE_URL;
use crate::error::ConfigError;
use crate::i18n::Lang;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalerieConfig {
    /// Port the web host listens on
    pub port: u16,
    /// Backend origin API requests are proxied to
    pub api_origin: String,
    /// Origin used to resolve relative asset paths
    pub asset_base_url: String,
    /// Directory holding the compiled frontend (Trunk output)
    pub dist_dir: PathBuf,
    /// Language used when the browser gives no usable hint
    pub default_language: Lang,
    /// Timeout for proxied upstream requests
    pub upstream_timeout_secs: u64,
}

impl Default for GalerieConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            api_origin: "http://localhost:8000".to_string(),
            asset_base_url: DEFAULT_BASE_URL.to_string(),
            dist_dir: PathBuf::from("crates/galerie-web/dist"),
            default_language: Lang::Fr,
            upstream_timeout_secs: 30,
        }
    }
}

impl GalerieConfig {
    /// `<config_dir>/galerie/config.toml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("galerie").join("config.toml"))
    }

    /// Load from `path`, or from [`Self::default_path`] when `None`
    ///
    /// A missing file is not an error; an explicitly given path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if !explicit && err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        let config = Self::from_toml_str(&content).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.clone(),
                source,
            },
            other => other,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("api_origin", &self.api_origin),
            ("asset_base_url", &self.asset_base_url),
        ] {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(ConfigError::Invalid {
                    message: format!("{} must be an http(s) URL, got '{}'", name, value),
                });
            }
        }
        if self.upstream_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                message: "upstream_timeout_secs must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Backend origin without trailing slash
    pub fn api_origin_trimmed(&self) -> &str {
        self.api_origin.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = GalerieConfig::from_toml_str(
            r#"
            port = 8080
            default_language = "en"
            "#,
        )
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.default_language, Lang::En);
        assert_eq!(config.api_origin, "http://localhost:8000");
    }

    #[test]
    fn test_invalid_origin_rejected() {
        let err = GalerieConfig::from_toml_str(r#"api_origin = "localhost:8000""#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GalerieConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_origin = \"http://backend:9000/\"\n").unwrap();

        let config = GalerieConfig::load(Some(&path)).unwrap();
        assert_eq!(config.api_origin_trimmed(), "http://backend:9000");
    }

    #[test]
    fn test_bad_toml_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "port = \"not a number\"").unwrap();

        match GalerieConfig::load(Some(&path)) {
            Err(ConfigError::Parse { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
