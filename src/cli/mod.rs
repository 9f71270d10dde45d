//! CLI module: argument parsing, version and usage text.

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions};
pub use version::{version_string, USAGE, VERSION};
