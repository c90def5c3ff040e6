//! Notifications emitted while provisioning configuration folders.
//!
//! The resolver never talks to a notification system directly. It returns
//! the events in order and the host decides how to present them; every event
//! carries the path a notification link should open.

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;

/// A filesystem change made while resolving configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "camelCase")]
pub enum ConfigEvent {
    /// The root configuration folder was created and populated with defaults.
    FolderCreated(Utf8PathBuf),
    /// A missing default file was written.
    DefaultFileAdded(Utf8PathBuf),
    /// An outdated default file was overwritten with the bundled version.
    DefaultFileUpdated(Utf8PathBuf),
}

impl ConfigEvent {
    /// Path a notification link should navigate to.
    #[must_use]
    pub fn target(&self) -> &Utf8Path {
        match self {
            Self::FolderCreated(path)
            | Self::DefaultFileAdded(path)
            | Self::DefaultFileUpdated(path) => path,
        }
    }
}

impl fmt::Display for ConfigEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FolderCreated(_) => write!(f, "Configuration files were created"),
            Self::DefaultFileAdded(_) => write!(f, "Configuration file added"),
            Self::DefaultFileUpdated(_) => write!(f, "Configuration file updated"),
        }
    }
}
