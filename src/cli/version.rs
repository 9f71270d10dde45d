//! Version and usage text.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage text printed by `--help` and on argument errors.
pub const USAGE: &str = "\
Usage: ga4-panel [OPTIONS] --item CODENAME[=NAME]...

Options:
  --item CODENAME[=NAME]  Item to show (repeatable; Tab switches between them)
  --endpoint URL          Analytics endpoint (overrides config file and GA4_PANEL_API_ENDPOINT)
  --config PATH           JSON config file with {\"apiEndpoint\": \"...\"}
  --log PATH              Write logs to PATH (filter with GA4_PANEL_LOG)
  -h, --help              Print this help
  -V, --version           Print version";

/// Version line.
pub fn version_string() -> String {
    format!("ga4-panel {}", VERSION)
}
