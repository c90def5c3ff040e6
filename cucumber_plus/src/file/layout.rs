//! On-disk layout of a configuration folder.
//!
//! Every directory level may hold one `.cucumber+` folder. The names below
//! are persisted state shared with existing projects and must not change.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::{ConfigResult, IoResultExt};

/// Name of the configuration folder looked up at every directory level.
pub const CONFIG_FOLDER: &str = ".cucumber+";
/// User-editable properties file.
pub const PROPERTIES_FILENAME: &str = "cucumber+.properties";
/// Default properties file provisioned from the bundled resource.
pub const PROPERTIES_DEFAULT_FILENAME: &str = "cucumber+.default.properties";
/// User-editable stylesheet.
pub const CSS_FILENAME: &str = "cucumber+.css";
/// Default stylesheet provisioned from the bundled resource.
pub const CSS_DEFAULT_FILENAME: &str = "cucumber+.default.css";

/// Handle on an existing `.cucumber+` folder.
///
/// All reads and writes go through a capability [`Dir`] opened on the folder
/// itself, so a handle can never touch files outside it.
#[derive(Debug)]
pub struct ConfigFolder {
    path: Utf8PathBuf,
    dir: Dir,
}

impl ConfigFolder {
    /// Opens the configuration folder directly below `level`.
    ///
    /// Returns `Ok(None)` when `level` holds no such folder (or holds a plain
    /// file with the folder's name).
    ///
    /// # Errors
    ///
    /// Returns a [`crate::ConfigError::File`] if `level` or the folder cannot
    /// be opened.
    pub fn open(level: &Utf8Path) -> ConfigResult<Option<Self>> {
        let parent = Dir::open_ambient_dir(level, ambient_authority()).with_path(level)?;
        if !parent.is_dir(CONFIG_FOLDER) {
            return Ok(None);
        }
        let path = level.join(CONFIG_FOLDER);
        let dir = parent.open_dir(CONFIG_FOLDER).with_path(&path)?;
        Ok(Some(Self { path, dir }))
    }

    /// Creates the configuration folder directly below `level`.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::ConfigError::File`] if the folder already exists as
    /// a file or cannot be created.
    pub fn create(level: &Utf8Path) -> ConfigResult<Self> {
        let parent = Dir::open_ambient_dir(level, ambient_authority()).with_path(level)?;
        let path = level.join(CONFIG_FOLDER);
        parent.create_dir(CONFIG_FOLDER).with_path(&path)?;
        let dir = parent.open_dir(CONFIG_FOLDER).with_path(&path)?;
        Ok(Self { path, dir })
    }

    /// Absolute path of the folder.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Absolute path of `name` inside the folder.
    #[must_use]
    pub fn file_path(&self, name: &str) -> Utf8PathBuf {
        self.path.join(name)
    }

    /// Whether `name` exists as a regular file in the folder.
    #[must_use]
    pub fn has_file(&self, name: &str) -> bool {
        self.dir.is_file(name)
    }

    /// Reads `name`, returning `Ok(None)` when it is absent.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::ConfigError::File`] if the file exists but cannot
    /// be read.
    pub fn read(&self, name: &str) -> ConfigResult<Option<Vec<u8>>> {
        if !self.has_file(name) {
            return Ok(None);
        }
        self.dir.read(name).with_path(&self.file_path(name)).map(Some)
    }

    /// Reads `name` as UTF-8 text, replacing invalid sequences.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::ConfigError::File`] if the file exists but cannot
    /// be read.
    pub fn read_text(&self, name: &str) -> ConfigResult<Option<String>> {
        Ok(self
            .read(name)?
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
    }

    /// Writes `contents` to `name`, creating or truncating it.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::ConfigError::File`] if the write fails.
    pub fn write(&self, name: &str, contents: &[u8]) -> ConfigResult<()> {
        self.dir.write(name, contents).with_path(&self.file_path(name))
    }
}
