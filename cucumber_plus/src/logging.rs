//! Structured logging for the command-line front end.
//!
//! Logs go to stderr so stdout only carries the JSON result.

use tracing_subscriber::EnvFilter;

use crate::settings::Settings;

fn filter_from_settings(settings: &Settings) -> EnvFilter {
    EnvFilter::new(settings.log_level.as_filter_str())
}

/// Installs a global `tracing` subscriber at the configured level.
///
/// Only the first call installs a subscriber; later calls leave it in place.
pub fn init_logging(settings: &Settings) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter_from_settings(settings))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        tracing::debug!(%err, "logging already initialised");
    }
}
