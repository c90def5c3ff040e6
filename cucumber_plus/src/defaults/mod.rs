//! Bundled default configuration files and their on-disk synchronisation.
//!
//! The crate ships a default properties file and a default stylesheet. Both
//! are copied into the root `.cucumber+` folder and kept identical to the
//! bundled bytes: whenever the SHA-256 of the copy on disk differs from the
//! bundled resource, the copy is overwritten. User-authored files in the same
//! folder are never touched.

mod sync;

use std::borrow::Cow;

use sha2::{Digest, Sha256};

use crate::file::{CSS_DEFAULT_FILENAME, PROPERTIES_DEFAULT_FILENAME};

pub(crate) use sync::provision;

const BUNDLED_PROPERTIES: &[u8] = include_bytes!("../../resources/cucumber+.default.properties");
const BUNDLED_STYLESHEET: &[u8] = include_bytes!("../../resources/cucumber+.default.css");

/// One of the two default files kept in sync with the bundled resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultFile {
    /// `cucumber+.default.properties`
    Properties,
    /// `cucumber+.default.css`
    Stylesheet,
}

impl DefaultFile {
    /// Both default files, in provisioning order.
    pub const ALL: [Self; 2] = [Self::Properties, Self::Stylesheet];

    /// File name inside a configuration folder.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Properties => PROPERTIES_DEFAULT_FILENAME,
            Self::Stylesheet => CSS_DEFAULT_FILENAME,
        }
    }
}

/// Contents of the default files, normally the resources compiled into the
/// crate.
///
/// Hosts embedding a newer set of defaults, and tests simulating an upgrade,
/// can substitute their own bytes.
///
/// # Examples
///
/// ```
/// use cucumber_plus::{BundledDefaults, DefaultFile};
///
/// let bundled = BundledDefaults::default();
/// assert!(!bundled.contents(DefaultFile::Properties).is_empty());
///
/// let upgraded = BundledDefaults::new(b"dateFormat=yyyy".to_vec(), b"body {}".to_vec());
/// assert_ne!(bundled.hash(DefaultFile::Stylesheet), upgraded.hash(DefaultFile::Stylesheet));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundledDefaults {
    properties: Cow<'static, [u8]>,
    stylesheet: Cow<'static, [u8]>,
}

impl Default for BundledDefaults {
    fn default() -> Self {
        Self {
            properties: Cow::Borrowed(BUNDLED_PROPERTIES),
            stylesheet: Cow::Borrowed(BUNDLED_STYLESHEET),
        }
    }
}

impl BundledDefaults {
    /// Uses `properties` and `stylesheet` as the authoritative defaults.
    #[must_use]
    pub fn new(
        properties: impl Into<Cow<'static, [u8]>>,
        stylesheet: impl Into<Cow<'static, [u8]>>,
    ) -> Self {
        Self {
            properties: properties.into(),
            stylesheet: stylesheet.into(),
        }
    }

    /// Bundled bytes for `file`.
    #[must_use]
    pub fn contents(&self, file: DefaultFile) -> &[u8] {
        match file {
            DefaultFile::Properties => &self.properties,
            DefaultFile::Stylesheet => &self.stylesheet,
        }
    }

    /// Hex-encoded SHA-256 of the bundled bytes for `file`.
    #[must_use]
    pub fn hash(&self, file: DefaultFile) -> String {
        content_hash(self.contents(file))
    }
}

/// Hex-encoded SHA-256 digest of `content`.
#[must_use]
pub fn content_hash(content: &[u8]) -> String {
    let digest = Sha256::digest(content);
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}

#[cfg(test)]
mod tests;
