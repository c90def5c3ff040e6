//! Primary error enums for configuration resolution flows.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving export configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The selected files cannot be mapped onto the project structure.
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// Error reading or writing a configuration file or folder.
    #[error("Configuration file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Layered properties could not be extracted.
    #[error("Failed to gather configuration: {0}")]
    Gathering(#[from] Box<figment::Error>),

    /// The configured date pattern uses letters the formatter does not support.
    #[error("Invalid date format '{pattern}': {message}")]
    DateFormat {
        /// Pattern read from the `dateFormat` property.
        pattern: String,
        /// Human-readable explanation.
        message: String,
    },

    /// Invalid runtime settings (environment variables or CLI flags).
    #[error("Invalid settings: {0}")]
    InvalidConfig(String),
}

/// User-facing failures locating the configuration hierarchy for a selection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResolutionError {
    /// The file is not located below any registered source root.
    #[error("Please select files from resources: '{path}' is not under a source root")]
    NoSourceRoot {
        /// The file that was selected.
        path: Utf8PathBuf,
    },

    /// The selected files share no common ancestor directory.
    #[error("Selected files do not belong to the same project structure")]
    NotSameProject,

    /// Walking upwards from the target never reached its source root.
    #[error("'{path}' is outside its source root '{root}'")]
    OutsideSourceRoot {
        /// Directory the walk started from.
        path: Utf8PathBuf,
        /// Source root the walk was expected to reach.
        root: Utf8PathBuf,
    },
}
