//! Console configuration
//!
//! Defaults are baked in at build time from `PAAS_API_BASE_URL` and
//! `PAAS_LOG_LEVEL`. A JSON object stored in local storage under
//! [`STORAGE_KEY`] overrides individual settings at run time, e.g.
//! `{"api_base_url": "https://paas.example.com"}`.

use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

pub const STORAGE_KEY: &str = "paas-console.config";

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Root of the Connect services, without a trailing slash
    pub api_base_url: String,
    /// `EnvFilter` directive, e.g. `info` or `paas_common=debug,info`
    pub log_level: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("PAAS_API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            log_level: option_env!("PAAS_LOG_LEVEL")
                .unwrap_or(DEFAULT_LOG_LEVEL)
                .to_string(),
        }
    }
}

/// Settings stored in the browser; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigOverrides {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub log_level: Option<String>,
}

impl ConsoleConfig {
    /// Load the build-time defaults with any stored overrides applied.
    /// A missing entry is not an error.
    pub fn load() -> Result<Self, StorageError> {
        let mut config = Self::default();
        match LocalStorage::get::<ConfigOverrides>(STORAGE_KEY) {
            Ok(overrides) => config.apply(overrides),
            Err(StorageError::KeyNotFound(_)) => {}
            Err(e) => return Err(e),
        }
        Ok(config)
    }

    /// Apply non-blank overrides
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(url) = non_blank(overrides.api_base_url) {
            self.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(level) = non_blank(overrides.log_level) {
            self.log_level = level;
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
