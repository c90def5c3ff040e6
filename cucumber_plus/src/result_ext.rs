//! Extensions for mapping errors to `ConfigResult` concisely.
//!
//! These helpers reduce repetitive
//! `.map_err(|e| Arc::new(ConfigError::file(path, e)))` patterns around the
//! filesystem calls made while provisioning and reading configuration
//! folders.
//!
//! # Examples
//!
//! ```
//! use camino::Utf8Path;
//! use cucumber_plus::{ConfigResult, IoResultExt};
//!
//! fn read(path: &Utf8Path) -> ConfigResult<String> {
//!     std::fs::read_to_string(path).with_path(path)
//! }
//!
//! assert!(read(Utf8Path::new("/definitely/missing.properties")).is_err());
//! ```

use std::sync::Arc;

use camino::Utf8Path;

use crate::{ConfigError, ConfigResult};

/// Attach a path to I/O failures, producing a [`ConfigError::File`].
pub trait IoResultExt<T> {
    /// Convert `io::Result<T>` into `ConfigResult<T>` tagged with `path`.
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped in [`ConfigError::File`].
    fn with_path(self, path: &Utf8Path) -> ConfigResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: &Utf8Path) -> ConfigResult<T> {
        self.map_err(|e| Arc::new(ConfigError::file(path, e)))
    }
}

/// Extension mapping `figment::Error` into [`ConfigError::Gathering`].
pub trait GatheringExt<T> {
    /// Convert `Result<T, figment::Error>` into `ConfigResult<T>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped in [`ConfigError::Gathering`].
    fn into_gathering(self) -> ConfigResult<T>;
}

impl<T> GatheringExt<T> for Result<T, figment::Error> {
    fn into_gathering(self) -> ConfigResult<T> {
        self.map_err(|e| Arc::new(ConfigError::gathering(e)))
    }
}
