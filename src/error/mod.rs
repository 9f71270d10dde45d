//! Error types for the panel.
//!
//! - [`ConfigError`]: raw configuration failed validation or could not be loaded
//! - [`FetchError`]: one analytics fetch cycle failed; always rendered, never fatal
//! - [`CliError`]: command-line arguments could not be parsed

mod cli;
mod config;
mod fetch;

pub use cli::CliError;
pub use config::ConfigError;
pub use fetch::{FetchError, UNEXPECTED_ERROR_MESSAGE};
