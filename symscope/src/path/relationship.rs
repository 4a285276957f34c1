//! Path containment checks.
//!
//! Containment is decided component by component after lexical cleaning, so
//! `/srv/root-evil` is never considered inside `/srv/root` and `/srv/root/..`
//! is never considered inside anything below `/srv`.

use std::cmp::Ordering;
use std::path::Path;

use crate::path::normalize::clean;

/// How one path sits relative to another in the directory tree.
///
/// # Examples
///
/// ```
/// use symscope::path::PathRelationship;
/// use std::path::Path;
///
/// let scope = Path::new("/srv/root");
/// let inner = Path::new("/srv/root/www");
///
/// assert_eq!(PathRelationship::between(scope, inner), PathRelationship::Ancestor);
/// assert_eq!(PathRelationship::between(inner, scope), PathRelationship::Descendant);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// `left` strictly contains `right`.
    Ancestor,
    /// `right` strictly contains `left`.
    Descendant,
    /// Both name the same location once cleaned.
    Same,
    /// Neither contains the other.
    Unrelated,
}

impl PathRelationship {
    /// Classify `left` against `right`.
    ///
    /// Both paths are cleaned lexically; the filesystem is not consulted, so
    /// symlinks in either path are compared by name.
    ///
    /// ```
    /// use symscope::path::PathRelationship;
    /// use std::path::Path;
    ///
    /// // `/a` is a string prefix of `/ab` but not an ancestor
    /// let rel = PathRelationship::between(Path::new("/a"), Path::new("/ab"));
    /// assert_eq!(rel, PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(left: &Path, right: &Path) -> Self {
        let left = clean(left);
        let right = clean(right);

        let shared = left
            .components()
            .zip(right.components())
            .take_while(|(l, r)| l == r)
            .count();
        let left_len = left.components().count();
        let right_len = right.components().count();

        if shared < left_len.min(right_len) {
            return Self::Unrelated;
        }
        match left_len.cmp(&right_len) {
            Ordering::Equal => Self::Same,
            Ordering::Less => Self::Ancestor,
            Ordering::Greater => Self::Descendant,
        }
    }

    /// Whether `path` is `scope` or lies beneath it.
    ///
    /// ```
    /// use symscope::path::PathRelationship;
    /// use std::path::Path;
    ///
    /// let scope = Path::new("/srv/root");
    /// assert!(PathRelationship::is_within(Path::new("/srv/root/a"), scope));
    /// assert!(PathRelationship::is_within(scope, scope));
    /// assert!(!PathRelationship::is_within(Path::new("/srv/root/../etc"), scope));
    /// ```
    #[must_use]
    pub fn is_within(path: &Path, scope: &Path) -> bool {
        matches!(Self::between(path, scope), Self::Descendant | Self::Same)
    }

    /// Whether `scope` is `path` or one of its ancestors.
    #[must_use]
    pub fn contains(scope: &Path, path: &Path) -> bool {
        Self::is_within(path, scope)
    }
}
