//! Runtime settings for the command-line front end.
//!
//! Settings come from environment variables prefixed with `CUCUMBER_PLUS_`;
//! command-line flags override them.

use std::str::FromStr;

use crate::ConfigError;

/// Environment variable selecting the log level.
pub const LOG_LEVEL_VAR: &str = "CUCUMBER_PLUS_LOG_LEVEL";

/// Log level enumeration matching tracing levels.
///
/// Defaults to `Warn` so diagnostics stay out of the way of the JSON written
/// to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Everything, including per-layer tracing.
    Trace,
    /// Collected layers and registry refreshes.
    Debug,
    /// Provisioning writes.
    Info,
    /// Warnings only.
    #[default]
    Warn,
    /// Errors only.
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ConfigError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`.
    #[must_use]
    pub const fn as_filter_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Settings for a command-line invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Log level.
    pub log_level: LogLevel,
}

impl Settings {
    /// Reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfig`] when a variable holds an
    /// invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`, which maps variable names to values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfig`] when a variable holds an
    /// invalid value.
    ///
    /// # Examples
    ///
    /// ```
    /// use cucumber_plus::settings::{LogLevel, Settings};
    ///
    /// let settings = Settings::from_lookup(|name| {
    ///     (name == "CUCUMBER_PLUS_LOG_LEVEL").then(|| "debug".to_owned())
    /// })?;
    /// assert_eq!(settings.log_level, LogLevel::Debug);
    /// # Ok::<(), cucumber_plus::ConfigError>(())
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(value) => value.parse()?,
            None => LogLevel::default(),
        };
        Ok(Self { log_level })
    }

    /// Applies command-line overrides on top of environment settings.
    #[must_use]
    pub const fn apply_overrides(mut self, log_level: Option<LogLevel>) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        self
    }
}
