//! Builder for [`ConfigResolver`].

use std::sync::Arc;

use camino::Utf8PathBuf;

use super::ConfigResolver;
use crate::defaults::BundledDefaults;
use crate::project::{DocumentSync, NoPendingDocuments, ProjectIndex, SourceRoots};

/// Builder for [`ConfigResolver`].
///
/// Without further configuration the resolver knows no source roots, has no
/// documents to flush and provisions the bundled defaults.
///
/// # Examples
///
/// ```
/// use cucumber_plus::{ConfigResolver, ResolutionError};
///
/// let resolver = ConfigResolver::builder()
///     .source_roots(["/project/src/test/resources"])
///     .build();
/// let err = resolver.resolve_file("/elsewhere/login.feature").err();
/// assert!(matches!(
///     err.as_deref().and_then(|e| e.as_resolution()),
///     Some(ResolutionError::NoSourceRoot { .. })
/// ));
/// ```
#[derive(Clone)]
pub struct ConfigResolverBuilder {
    index: Option<Arc<dyn ProjectIndex>>,
    roots: SourceRoots,
    documents: Arc<dyn DocumentSync>,
    defaults: BundledDefaults,
}

impl Default for ConfigResolverBuilder {
    fn default() -> Self {
        Self {
            index: None,
            roots: SourceRoots::default(),
            documents: Arc::new(NoPendingDocuments),
            defaults: BundledDefaults::default(),
        }
    }
}

impl std::fmt::Debug for ConfigResolverBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigResolverBuilder")
            .field("custom_index", &self.index.is_some())
            .field("roots", &self.roots)
            .finish_non_exhaustive()
    }
}

impl ConfigResolverBuilder {
    /// Creates a builder with default collaborators.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds directories treated as source roots.
    ///
    /// Ignored when a custom [`ProjectIndex`] is supplied.
    #[must_use]
    pub fn source_roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Utf8PathBuf>,
    {
        for root in roots {
            self.roots.push(root);
        }
        self
    }

    /// Uses `index` to map files onto source roots.
    #[must_use]
    pub fn project_index(mut self, index: impl ProjectIndex + 'static) -> Self {
        self.index = Some(Arc::new(index));
        self
    }

    /// Flushes editor buffers through `documents` before each resolution.
    #[must_use]
    pub fn document_sync(mut self, documents: impl DocumentSync + 'static) -> Self {
        self.documents = Arc::new(documents);
        self
    }

    /// Replaces the defaults written into the root configuration folder.
    #[must_use]
    pub fn bundled_defaults(mut self, defaults: BundledDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Finalises the builder.
    #[must_use]
    pub fn build(self) -> ConfigResolver {
        let index = self
            .index
            .unwrap_or_else(|| Arc::new(self.roots) as Arc<dyn ProjectIndex>);
        ConfigResolver {
            index,
            documents: self.documents,
            defaults: self.defaults,
        }
    }
}
