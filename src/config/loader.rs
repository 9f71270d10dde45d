//! Assembling the raw configuration object from file, environment and flags.

use serde_json::Value;
use std::path::{Path, PathBuf};

use super::{Config, RawConfig, API_ENDPOINT_KEY};
use crate::error::ConfigError;

/// Environment variable overriding the file's `apiEndpoint`.
pub const ENDPOINT_ENV_VAR: &str = "GA4_PANEL_API_ENDPOINT";

/// `~/.config/ga4-panel/config.json` (platform config dir).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ga4-panel").join("config.json"))
}

/// Where configuration may come from. Later sources win:
/// file, then environment, then command-line flag.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    /// Explicit config file; an error if it cannot be read
    pub file: Option<PathBuf>,
    /// Fallback file, silently skipped when absent
    pub default_file: Option<PathBuf>,
    /// Value of [`ENDPOINT_ENV_VAR`]
    pub env_endpoint: Option<String>,
    /// `--endpoint` flag
    pub flag_endpoint: Option<String>,
}

impl ConfigSources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sources with the default file path and the environment filled in.
    pub fn from_env() -> Self {
        Self {
            default_file: default_config_path(),
            env_endpoint: std::env::var(ENDPOINT_ENV_VAR).ok(),
            ..Self::default()
        }
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    pub fn with_flag_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.flag_endpoint = Some(endpoint.into());
        self
    }

    /// Merge all sources into one raw object. `None` when no source had anything.
    pub fn load_raw(&self) -> Result<Option<RawConfig>, ConfigError> {
        let mut raw = match (&self.file, &self.default_file) {
            (Some(path), _) => Some(read_config_file(path)?),
            (None, Some(path)) if path.exists() => Some(read_config_file(path)?),
            _ => None,
        };

        for endpoint in [&self.env_endpoint, &self.flag_endpoint].into_iter().flatten() {
            raw.get_or_insert_with(RawConfig::new)
                .insert(API_ENDPOINT_KEY.to_string(), Value::String(endpoint.clone()));
        }

        Ok(raw)
    }

    /// Load and validate.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let raw = self.load_raw()?;
        let config = Config::from_raw(raw.as_ref())?;
        tracing::info!("Loaded config: apiEndpoint={}", config.api_endpoint);
        Ok(config)
    }
}

fn read_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
