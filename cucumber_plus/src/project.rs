//! Host project collaborators consumed by the resolver.
//!
//! The editor host owns the project model and the open document buffers.
//! The resolver only needs two things from it: which source root a path
//! belongs to, and a way to flush unsaved documents to disk before the
//! configuration folders are read.

use camino::{Utf8Path, Utf8PathBuf};

use crate::ConfigResult;
use crate::ancestry::is_within;

/// Maps paths onto the source roots declared by the host project model.
pub trait ProjectIndex: Send + Sync {
    /// Returns the source root that owns `path`, if any.
    fn source_root_for(&self, path: &Utf8Path) -> Option<Utf8PathBuf>;
}

/// Flushes pending editor buffers so on-disk state is current.
pub trait DocumentSync: Send + Sync {
    /// Commit and save every pending document.
    ///
    /// # Errors
    ///
    /// Implementations report failures saving documents as
    /// [`crate::ConfigError::File`].
    fn flush_all(&self) -> ConfigResult<()>;
}

/// A [`DocumentSync`] for hosts without editor buffers.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPendingDocuments;

impl DocumentSync for NoPendingDocuments {
    fn flush_all(&self) -> ConfigResult<()> {
        Ok(())
    }
}

impl<F> DocumentSync for F
where
    F: Fn() -> ConfigResult<()> + Send + Sync,
{
    fn flush_all(&self) -> ConfigResult<()> {
        self()
    }
}

/// Fixed list of source-root directories.
///
/// A path belongs to the deepest registered root that contains it, matching
/// nested content roots such as `src/test` and `src/test/resources`.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use cucumber_plus::{ProjectIndex, SourceRoots};
///
/// let roots = SourceRoots::new(["/project/src/test", "/project/src/test/resources"]);
/// assert_eq!(
///     roots.source_root_for(Utf8Path::new("/project/src/test/resources/a.feature")).as_deref(),
///     Some(Utf8Path::new("/project/src/test/resources")),
/// );
/// assert!(roots.source_root_for(Utf8Path::new("/project/README.md")).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRoots {
    roots: Vec<Utf8PathBuf>,
}

impl SourceRoots {
    /// Registers `roots`.
    #[must_use]
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Utf8PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds another root.
    pub fn push(&mut self, root: impl Into<Utf8PathBuf>) {
        self.roots.push(root.into());
    }

    /// Registered roots in insertion order.
    #[must_use]
    pub fn roots(&self) -> &[Utf8PathBuf] {
        &self.roots
    }
}

impl ProjectIndex for SourceRoots {
    fn source_root_for(&self, path: &Utf8Path) -> Option<Utf8PathBuf> {
        self.roots
            .iter()
            .filter(|root| is_within(path, root))
            .max_by_key(|root| root.components().count())
            .cloned()
    }
}
