use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors.
///
/// Raised at the boundary where raw configuration enters the program; the
/// panel itself only ever sees a validated [`crate::config::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration object was supplied at all
    #[error("No configuration was provided")]
    Missing,

    /// `apiEndpoint` key is absent
    #[error("Configuration is missing \"apiEndpoint\"")]
    MissingEndpoint,

    /// `apiEndpoint` is present but not a string
    #[error("\"apiEndpoint\" must be a string")]
    EndpointNotString,

    /// `apiEndpoint` is an empty string
    #[error("\"apiEndpoint\" must not be empty")]
    EmptyEndpoint,

    /// Config file could not be read
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not a JSON object
    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
