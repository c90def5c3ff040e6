//! Temporary project trees for filesystem-backed tests.
//!
//! A [`ProjectTree`] owns a temporary directory whose path is canonicalised
//! and checked for UTF-8 up front, so tests can compare the paths reported
//! by the resolver with paths built here.
//!
//! # Examples
//!
//! ```
//! use test_helpers::tree::ProjectTree;
//!
//! # fn main() -> anyhow::Result<()> {
//! let tree = ProjectTree::new()?;
//! let feature = tree.write("src/test/resources/login.feature", "Feature: Login")?;
//! assert!(feature.starts_with(tree.root()));
//! assert_eq!(tree.read("src/test/resources/login.feature")?, "Feature: Login");
//! # Ok(())
//! # }
//! ```

use std::time::SystemTime;

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Temporary directory tree removed when dropped.
#[derive(Debug)]
pub struct ProjectTree {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl ProjectTree {
    /// Creates an empty tree in a fresh temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or its canonical
    /// path is not valid UTF-8.
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().context("create temporary project directory")?;
        let canonical =
            std::fs::canonicalize(dir.path()).context("canonicalise temporary directory")?;
        let root = Utf8PathBuf::from_path_buf(canonical)
            .map_err(|path| anyhow!("temporary path is not valid UTF-8: {}", path.display()))?;
        Ok(Self { _dir: dir, root })
    }

    /// Root of the tree.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Absolute path of `relative` inside the tree.
    #[must_use]
    pub fn path(&self, relative: &str) -> Utf8PathBuf {
        self.root.join(relative)
    }

    /// Creates `relative` and all missing parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created.
    pub fn mkdir(&self, relative: &str) -> Result<Utf8PathBuf> {
        let path = self.path(relative);
        std::fs::create_dir_all(&path).with_context(|| format!("create directory {path}"))?;
        Ok(path)
    }

    /// Writes `contents` to `relative`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if a parent directory or the file cannot be written.
    pub fn write(&self, relative: &str, contents: impl AsRef<[u8]>) -> Result<Utf8PathBuf> {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create directory {parent}"))?;
        }
        std::fs::write(&path, contents).with_context(|| format!("write {path}"))?;
        Ok(path)
    }

    /// Reads `relative` as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    pub fn read(&self, relative: &str) -> Result<String> {
        let path = self.path(relative);
        std::fs::read_to_string(&path).with_context(|| format!("read {path}"))
    }

    /// Whether `relative` exists.
    #[must_use]
    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    /// Last modification time of `relative`.
    ///
    /// # Errors
    ///
    /// Returns an error if the metadata cannot be read.
    pub fn modified(&self, relative: &str) -> Result<SystemTime> {
        let path = self.path(relative);
        std::fs::metadata(&path)
            .and_then(|meta| meta.modified())
            .with_context(|| format!("read modification time of {path}"))
    }
}
