//! Error types produced by the configuration resolver.

mod constructors;
mod types;

pub use types::{ConfigError, ResolutionError};

/// Result type used throughout the crate.
///
/// Errors are shared behind an [`std::sync::Arc`] so callers can fan a single
/// failure out to several listeners (for example a notification and a log
/// line) without cloning the underlying I/O error.
pub type ConfigResult<T> = Result<T, std::sync::Arc<ConfigError>>;
