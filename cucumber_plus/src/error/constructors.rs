//! Constructors for `ConfigError` values shared across modules.

use std::sync::Arc;

use camino::Utf8Path;

use super::{ConfigError, ResolutionError};

impl ConfigError {
    /// Construct a [`ConfigError::File`] for `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use cucumber_plus::ConfigError;
    ///
    /// let err = ConfigError::file(
    ///     Utf8Path::new("/project/.cucumber+"),
    ///     std::io::Error::other("disk full"),
    /// );
    /// assert!(matches!(err, ConfigError::File { .. }));
    /// ```
    #[must_use]
    pub fn file(path: &Utf8Path, source: std::io::Error) -> Self {
        Self::File {
            path: path.to_owned(),
            source,
        }
    }

    /// Construct a gathering error from a [`figment::Error`].
    #[must_use]
    pub fn gathering(source: figment::Error) -> Self {
        Self::Gathering(Box::new(source))
    }

    /// Construct a [`ConfigError::DateFormat`] for `pattern`.
    #[must_use]
    pub fn date_format(pattern: &str, message: impl Into<String>) -> Self {
        Self::DateFormat {
            pattern: pattern.to_owned(),
            message: message.into(),
        }
    }

    /// Returns the resolution failure when this error is user-facing.
    #[must_use]
    pub const fn as_resolution(&self) -> Option<&ResolutionError> {
        match self {
            Self::Resolution(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ResolutionError> for Arc<ConfigError> {
    fn from(err: ResolutionError) -> Self {
        Self::new(ConfigError::Resolution(err))
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::gathering(err)
    }
}
