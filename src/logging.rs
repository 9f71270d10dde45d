//! File logging.
//!
//! The TUI owns stdout, so logs only go to a file, and only when one is
//! requested. Filtering follows `GA4_PANEL_LOG` (EnvFilter syntax), default
//! `info`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter.
pub const LOG_FILTER_ENV_VAR: &str = "GA4_PANEL_LOG";

/// Build the filter from [`LOG_FILTER_ENV_VAR`], falling back to `info`.
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a global subscriber appending to `path`.
pub fn init_file_logging(path: &Path) -> color_eyre::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::registry()
        .with(log_filter())
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;

    tracing::info!("ga4-panel {} logging to {}", crate::cli::VERSION, path.display());
    Ok(())
}
