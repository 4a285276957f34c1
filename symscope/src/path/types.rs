//! Result type for scoped resolution.

use std::path::{Path, PathBuf};

/// A path resolved inside a scope, with the inputs it came from.
///
/// Whether a symlink tried to leave the scope is not recorded:
/// a link clamped to the scope root and a path that legitimately ends at the
/// scope root look the same.
///
/// # Examples
///
/// ```
/// use symscope::path::ResolvedPath;
/// use std::path::PathBuf;
///
/// let resolved = ResolvedPath::new(
///     PathBuf::from("/srv/root/b/data"),
///     PathBuf::from("a/link/data"),
///     PathBuf::from("/srv/root"),
///     1,
/// );
/// assert_eq!(resolved.path(), PathBuf::from("/srv/root/b/data"));
/// assert_eq!(resolved.links_followed(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPath {
    /// The resolved absolute path.
    path: PathBuf,
    /// The input path as the caller gave it.
    original: PathBuf,
    /// The absolute scope the path was confined to.
    scope: PathBuf,
    /// Number of symlinks followed.
    links_followed: usize,
}

impl ResolvedPath {
    /// Create a new resolved path.
    #[must_use]
    pub fn new(path: PathBuf, original: PathBuf, scope: PathBuf, links_followed: usize) -> Self {
        Self {
            path,
            original,
            scope,
            links_followed,
        }
    }

    /// Get a reference to the resolved path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get a reference to the original path before resolution.
    #[must_use]
    pub fn original(&self) -> &Path {
        &self.original
    }

    /// Get a reference to the absolute scope.
    #[must_use]
    pub fn scope(&self) -> &Path {
        &self.scope
    }

    /// Number of symlinks followed during resolution.
    #[must_use]
    pub fn links_followed(&self) -> usize {
        self.links_followed
    }

    /// The resolved path relative to the scope.
    ///
    /// Empty when the resolution ended at the scope root.
    ///
    /// # Examples
    ///
    /// ```
    /// use symscope::path::ResolvedPath;
    /// use std::path::{Path, PathBuf};
    ///
    /// let resolved = ResolvedPath::new(
    ///     PathBuf::from("/srv/root/b"),
    ///     PathBuf::from("/srv/root/a"),
    ///     PathBuf::from("/srv/root"),
    ///     1,
    /// );
    /// assert_eq!(resolved.scope_relative(), Path::new("b"));
    /// ```
    #[must_use]
    pub fn scope_relative(&self) -> &Path {
        self.path.strip_prefix(&self.scope).unwrap_or(&self.path)
    }

    /// Convert into the underlying `PathBuf`.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}

impl AsRef<Path> for ResolvedPath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}
