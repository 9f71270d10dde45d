//! Panel configuration.
//!
//! Raw configuration is an untyped JSON object. It is checked once, here,
//! and turned into a [`Config`]; nothing downstream re-validates.

mod loader;

pub use loader::{default_config_path, ConfigSources, ENDPOINT_ENV_VAR};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ConfigError;

/// JSON key holding the endpoint.
pub const API_ENDPOINT_KEY: &str = "apiEndpoint";

/// Untyped configuration object as supplied by the host.
pub type RawConfig = Map<String, Value>;

/// Validated configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// URL (or URL prefix) that accepts a `codename` query parameter
    #[serde(rename = "apiEndpoint")]
    pub api_endpoint: String,
}

impl Config {
    /// Validate a raw configuration object.
    pub fn from_raw(raw: Option<&RawConfig>) -> Result<Self, ConfigError> {
        let raw = raw.ok_or(ConfigError::Missing)?;
        match raw.get(API_ENDPOINT_KEY) {
            None => Err(ConfigError::MissingEndpoint),
            Some(Value::String(endpoint)) if endpoint.is_empty() => Err(ConfigError::EmptyEndpoint),
            Some(Value::String(endpoint)) => Ok(Self {
                api_endpoint: endpoint.clone(),
            }),
            Some(_) => Err(ConfigError::EndpointNotString),
        }
    }
}

/// True iff `value` is present and its `apiEndpoint` is a non-empty string.
pub fn is_config(value: Option<&RawConfig>) -> bool {
    Config::from_raw(value).is_ok()
}
