//! Configuration loading and saving.
//!
//! Settings live in `<root>/config.json`. Every field has a default, so a
//! missing or partial file is fine. A malformed file falls back to defaults
//! with a warning; use [`VaultConfig::load_strict`] to surface the error.

use std::path::Path;
use std::time::Duration;

use fs_err as fs;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VaultError};

/// Environment variable that overrides the contact endpoint.
pub const API_URL_ENV: &str = "PRISI_OPS_API_URL";

const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// Base URL of the contact API gateway.
    pub contact_endpoint: Option<String>,
    pub api_region: String,
    pub request_timeout_secs: u64,
}

impl Default for VaultConfig {
    fn default() -> Self {
        VaultConfig {
            contact_endpoint: None,
            api_region: DEFAULT_REGION.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl VaultConfig {
    /// Loads config from `path`, returning defaults if it is missing or malformed.
    pub fn load(path: &Path) -> VaultConfig {
        match Self::load_strict(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "Using default configuration");
                VaultConfig::default()
            }
        }
    }

    /// Like [`VaultConfig::load`], but malformed files are an error.
    pub fn load_strict(path: &Path) -> Result<VaultConfig> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(VaultConfig::default())
            }
            Err(source) => {
                return Err(VaultError::Io {
                    context: "reading config".to_string(),
                    source,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(VaultConfig::default());
        }

        serde_json::from_str(&content).map_err(|e| VaultError::ConfigMalformed {
            path: path.to_path_buf(),
            details: e.to_string(),
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| VaultError::ConfigWriteFailed {
                path: path.to_path_buf(),
                source,
            })?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|source| VaultError::Json {
            context: "serializing config".to_string(),
            source,
        })?;
        fs::write(path, content).map_err(|source| VaultError::ConfigWriteFailed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies environment overrides (currently only [`API_URL_ENV`]).
    pub fn with_env_overrides(self) -> VaultConfig {
        self.with_endpoint_override(std::env::var(API_URL_ENV).ok())
    }

    fn with_endpoint_override(mut self, endpoint: Option<String>) -> VaultConfig {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.contact_endpoint = Some(endpoint);
        }
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = tempdir().unwrap();
        let config = VaultConfig::load(&temp.path().join("config.json"));
        assert_eq!(config, VaultConfig::default());
        assert_eq!(config.api_region, "us-east-1");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, r#"{"contact_endpoint":"https://api.example.com/contact"}"#)
            .unwrap();

        let config = VaultConfig::load(&path);
        assert_eq!(
            config.contact_endpoint.as_deref(),
            Some("https://api.example.com/contact")
        );
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn malformed_file_is_strict_error_but_lenient_default() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, "{ nope").unwrap();

        assert!(matches!(
            VaultConfig::load_strict(&path),
            Err(VaultError::ConfigMalformed { .. })
        ));
        assert_eq!(VaultConfig::load(&path), VaultConfig::default());
    }

    #[test]
    fn save_then_load() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("config.json");
        let config = VaultConfig {
            contact_endpoint: Some("https://api.example.com".to_string()),
            api_region: "eu-west-1".to_string(),
            request_timeout_secs: 3,
        };
        config.save(&path).unwrap();
        assert_eq!(VaultConfig::load_strict(&path).unwrap(), config);
    }

    #[test]
    fn endpoint_override_ignores_blank_values() {
        let base = VaultConfig {
            contact_endpoint: Some("https://file.example.com".to_string()),
            ..Default::default()
        };
        let kept = base.clone().with_endpoint_override(Some("   ".to_string()));
        assert_eq!(kept, base);

        let replaced = base.with_endpoint_override(Some("https://env.example.com".to_string()));
        assert_eq!(
            replaced.contact_endpoint.as_deref(),
            Some("https://env.example.com")
        );
    }
}
