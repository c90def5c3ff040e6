//! Directory-chain helpers used to locate configuration layers.
//!
//! [`Levels`] walks from a starting directory up to, and including, a known
//! source root. The root is validated before iteration starts, so the walk
//! never has to guess whether running out of parents means "reached the
//! root" or "escaped the project".

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};

use crate::ResolutionError;

/// Iterator over the directory levels between a start directory and its root.
///
/// Levels are produced innermost first; the last item is always the root.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use cucumber_plus::Levels;
///
/// # fn main() -> Result<(), cucumber_plus::ResolutionError> {
/// let levels: Vec<_> = Levels::new(
///     Utf8Path::new("/project/src/features/login"),
///     Utf8Path::new("/project/src"),
/// )?
/// .collect();
/// assert_eq!(
///     levels,
///     ["/project/src/features/login", "/project/src/features", "/project/src"]
///         .map(Utf8Path::new)
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Levels<'a> {
    next: Option<&'a Utf8Path>,
    root: &'a Utf8Path,
}

impl<'a> Levels<'a> {
    /// Prepares a walk from `start` to `root`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::OutsideSourceRoot`] when `start` is not
    /// `root` or one of its descendants. Paths containing `..` are never
    /// descendants.
    pub fn new(start: &'a Utf8Path, root: &'a Utf8Path) -> Result<Self, ResolutionError> {
        if !is_within(start, root) {
            return Err(ResolutionError::OutsideSourceRoot {
                path: start.to_owned(),
                root: root.to_owned(),
            });
        }
        Ok(Self {
            next: Some(start),
            root,
        })
    }

    /// The root the walk terminates at.
    #[must_use]
    pub const fn root(&self) -> &'a Utf8Path {
        self.root
    }
}

impl<'a> Iterator for Levels<'a> {
    type Item = &'a Utf8Path;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if current != self.root {
            self.next = current.parent();
        }
        Some(current)
    }
}

/// Whether `path` is `root` or lies below it, compared component-wise.
///
/// Either side containing a `..` component is never within.
pub(crate) fn is_within(path: &Utf8Path, root: &Utf8Path) -> bool {
    let climbs = |p: &Utf8Path| p.components().any(|c| c == Utf8Component::ParentDir);
    !climbs(path) && !climbs(root) && path.starts_with(root)
}

/// Returns the deepest directory containing every file in `files`.
///
/// Each file contributes the chain of its parent directories; the result is
/// the longest chain prefix shared by all of them. Returns `None` for an
/// empty slice or when the files share no directory at all (for example
/// relative paths with different first components, or different Windows
/// drives).
///
/// # Examples
///
/// ```
/// use camino::{Utf8Path, Utf8PathBuf};
/// use cucumber_plus::common_ancestor;
///
/// let files = [
///     Utf8PathBuf::from("/root/a/x.feature"),
///     Utf8PathBuf::from("/root/b/y.feature"),
/// ];
/// assert_eq!(common_ancestor(&files).as_deref(), Some(Utf8Path::new("/root")));
/// ```
#[must_use]
pub fn common_ancestor<P: AsRef<Utf8Path>>(files: &[P]) -> Option<Utf8PathBuf> {
    let mut parents = files.iter().map(|file| file.as_ref().parent());
    let first: Vec<Utf8Component<'_>> = parents.next()??.components().collect();
    let mut shared = first.len();
    for parent in parents {
        let components = parent?.components();
        shared = first
            .iter()
            .zip(components)
            .take(shared)
            .take_while(|(lhs, rhs)| *lhs == rhs)
            .count();
    }
    let common: Utf8PathBuf = first.into_iter().take(shared).collect();
    (!common.as_str().is_empty()).then_some(common)
}

#[cfg(test)]
mod tests {
    use camino::{Utf8Path, Utf8PathBuf};
    use rstest::rstest;

    use super::{Levels, common_ancestor};
    use crate::ResolutionError;

    #[test]
    fn start_at_root_yields_only_root() {
        let root = Utf8Path::new("/p/src");
        let levels: Vec<_> = Levels::new(root, root).into_iter().flatten().collect();
        assert_eq!(levels, vec![root]);
    }

    #[test]
    fn start_outside_root_is_rejected() {
        let err = Levels::new(Utf8Path::new("/elsewhere/dir"), Utf8Path::new("/p/src"))
            .err();
        assert_eq!(
            err,
            Some(ResolutionError::OutsideSourceRoot {
                path: Utf8PathBuf::from("/elsewhere/dir"),
                root: Utf8PathBuf::from("/p/src"),
            })
        );
    }

    #[test]
    fn sibling_with_shared_prefix_is_outside() {
        // "/p/src2" starts with the string "/p/src" but not with the path.
        assert!(Levels::new(Utf8Path::new("/p/src2"), Utf8Path::new("/p/src")).is_err());
    }

    #[rstest]
    #[case("/p/src/../other")]
    #[case("/p/src/a/../../other")]
    #[case("/p/src/..")]
    fn parent_components_never_stay_inside(#[case] start: &str) {
        let err = Levels::new(Utf8Path::new(start), Utf8Path::new("/p/src")).err();
        assert!(
            matches!(err, Some(ResolutionError::OutsideSourceRoot { .. })),
            "{start} must be rejected, got {err:?}"
        );
    }

    #[test]
    fn root_with_parent_component_is_rejected() {
        assert!(Levels::new(Utf8Path::new("/p/x/src/a"), Utf8Path::new("/p/x/../x/src")).is_err());
    }

    #[rstest]
    #[case(&["/root/a/x.feature", "/root/b/y.feature"], Some("/root"))]
    #[case(&["/root/a/x.feature", "/root/a/y.feature"], Some("/root/a"))]
    #[case(&["/root/a/b/x.feature", "/root/a/y.feature"], Some("/root/a"))]
    #[case(&["/root/a/x.feature"], Some("/root/a"))]
    #[case(&["/one/x.feature", "/two/y.feature"], Some("/"))]
    #[case(&["one/x.feature", "two/y.feature"], None)]
    #[case(&[], None)]
    fn common_ancestors(#[case] files: &[&str], #[case] expected: Option<&str>) {
        assert_eq!(
            common_ancestor(files).as_deref(),
            expected.map(Utf8Path::new)
        );
    }
}
