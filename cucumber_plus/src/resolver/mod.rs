//! Cascading resolution of export configuration.
//!
//! A selection of feature files is reduced to a single target, which is
//! mapped onto its source root. The root configuration folder is provisioned
//! with the bundled defaults, then every directory from the target up to the
//! root contributes its `.cucumber+` folder, nearest folder first.
//!
//! # Examples
//!
//! ```
//! use cucumber_plus::ConfigResolver;
//! use test_helpers::tree::ProjectTree;
//!
//! # fn main() -> anyhow::Result<()> {
//! let tree = ProjectTree::new()?;
//! let root = tree.mkdir("src/test/resources")?;
//! let feature = tree.write("src/test/resources/shop/cart.feature", "Feature: Cart")?;
//! tree.write("src/test/resources/shop/.cucumber+/cucumber+.properties", "topLeft=Shop")?;
//!
//! let resolver = ConfigResolver::builder().source_roots([root]).build();
//! let resolution = resolver.resolve_file(&feature).map_err(|e| anyhow::anyhow!("{e}"))?;
//! assert_eq!(resolution.config.top_left, "Shop");
//! assert_eq!(resolution.config.date_format, "dd/MM/yyyy");
//! assert_eq!(resolution.events.len(), 1);
//! # Ok(())
//! # }
//! ```

mod builder;
mod cascade;

use std::sync::Arc;

use camino::Utf8Path;
use serde::Serialize;
use tracing::debug;

use crate::ancestry::{Levels, common_ancestor};
use crate::defaults::{BundledDefaults, provision};
use crate::events::ConfigEvent;
use crate::project::{DocumentSync, ProjectIndex};
use crate::style::ConfigDto;
use crate::{ConfigResult, ResolutionError};

pub use builder::ConfigResolverBuilder;
use cascade::Cascade;

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The merged configuration.
    pub config: ConfigDto,
    /// Filesystem changes made while provisioning, in the order they happened.
    pub events: Vec<ConfigEvent>,
}

/// Resolves [`ConfigDto`] values for files inside a project.
pub struct ConfigResolver {
    index: Arc<dyn ProjectIndex>,
    documents: Arc<dyn DocumentSync>,
    defaults: BundledDefaults,
}

impl std::fmt::Debug for ConfigResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigResolver")
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

impl ConfigResolver {
    /// Starts building a resolver.
    #[must_use]
    pub fn builder() -> ConfigResolverBuilder {
        ConfigResolverBuilder::new()
    }

    /// Resolves the configuration for a selection of files.
    ///
    /// A single file resolves as [`Self::resolve_file`]. Several files
    /// resolve through the deepest directory containing all of them.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::NotSameProject`] for an empty selection,
    /// for files without a common ancestor, and when that ancestor is not
    /// under a source root. Otherwise fails as [`Self::resolve_file`].
    pub fn resolve<P: AsRef<Utf8Path>>(&self, files: &[P]) -> ConfigResult<Resolution> {
        match files {
            [] => Err(ResolutionError::NotSameProject.into()),
            [file] => self.resolve_file(file),
            _ => self.resolve_files(files),
        }
    }

    /// Resolves the configuration for one file or directory.
    ///
    /// # Errors
    ///
    /// - [`ResolutionError::NoSourceRoot`] when no source root contains
    ///   `file`.
    /// - [`ResolutionError::OutsideSourceRoot`] when the walk from `file`
    ///   cannot reach the root the index reported.
    /// - [`crate::ConfigError::File`] for I/O failures while flushing,
    ///   provisioning or reading configuration folders.
    /// - [`crate::ConfigError::Gathering`] when the merged properties cannot
    ///   be extracted.
    pub fn resolve_file(&self, file: impl AsRef<Utf8Path>) -> ConfigResult<Resolution> {
        let file = file.as_ref();
        let root = self
            .index
            .source_root_for(file)
            .ok_or_else(|| ResolutionError::NoSourceRoot {
                path: file.to_owned(),
            })?;
        self.resolve_under(file, &root)
    }

    /// Resolves the configuration shared by several files.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::NotSameProject`] when the files share no
    /// directory under a source root; otherwise fails as
    /// [`Self::resolve_file`].
    pub fn resolve_files<P: AsRef<Utf8Path>>(&self, files: &[P]) -> ConfigResult<Resolution> {
        let common = common_ancestor(files).ok_or(ResolutionError::NotSameProject)?;
        let root = self
            .index
            .source_root_for(&common)
            .ok_or(ResolutionError::NotSameProject)?;
        debug!(ancestor = %common, "reduced selection to common ancestor");
        self.resolve_under(&common, &root)
    }

    fn resolve_under(&self, target: &Utf8Path, root: &Utf8Path) -> ConfigResult<Resolution> {
        self.documents.flush_all()?;
        let levels = Levels::new(walk_start(target), root)?;
        let events = provision(root, &self.defaults)?;
        let cascade = Cascade::collect(levels)?;
        debug!(path = %target, root = %root, layers = cascade.depth(), "resolved configuration");
        Ok(Resolution {
            config: cascade.into_config()?,
            events,
        })
    }
}

/// Directories are walked from themselves, files from their parent.
fn walk_start(target: &Utf8Path) -> &Utf8Path {
    if target.is_dir() {
        return target;
    }
    target.parent().unwrap_or(target)
}
