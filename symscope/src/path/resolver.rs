//! Scope-constrained symlink resolution.
//!
//! This module provides the `ScopedResolver` type, which follows symlinks in
//! a path while keeping every intermediate location inside a scope directory.
//!
//! The walk treats the scope as the root of the filesystem:
//! - an absolute link target is re-rooted under the scope,
//! - a relative link target is walked from the link's own directory,
//! - a `..` at the scope root stays at the scope root.
//!
//! A link aiming outside the scope therefore lands on the scope root. This is
//! not reported: callers cannot tell a clamped link from a path that really
//! ends at the scope root, nor how far outside the link pointed.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::path::normalize;
use crate::path::probe::{Entry, LinkProbe, SystemProbe};
use crate::path::relationship::PathRelationship;
use crate::path::segment::{Cursor, Segment};
use crate::path::types::ResolvedPath;

/// Default number of symlinks followed before giving up.
///
/// Same as `MAXSYMLINKS` on Linux.
pub const DEFAULT_MAX_LINK_DEPTH: usize = 40;

/// Resolves paths inside a scope directory.
///
/// # Examples
///
/// ```no_run
/// use symscope::path::ScopedResolver;
/// use std::path::Path;
///
/// let resolver = ScopedResolver::new();
/// let resolved = resolver
///     .resolve(Path::new("/srv/root/www/index.html"), Path::new("/srv/root"))
///     .unwrap();
/// assert!(resolved.path().starts_with("/srv/root"));
/// ```
#[derive(Debug, Clone)]
pub struct ScopedResolver<P = SystemProbe> {
    probe: P,
    /// Maximum symlinks followed in one resolution.
    max_link_depth: usize,
}

impl Default for ScopedResolver<SystemProbe> {
    fn default() -> Self {
        Self::with_probe(SystemProbe)
    }
}

impl ScopedResolver<SystemProbe> {
    /// Create a resolver over the real filesystem with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver over the real filesystem using a configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use symscope::config::Config;
    /// use symscope::path::ScopedResolver;
    ///
    /// let config = Config { max_link_depth: Some(8), ..Default::default() };
    /// let resolver = ScopedResolver::from_config(&config);
    /// assert_eq!(resolver.max_link_depth(), 8);
    /// ```
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new().with_max_link_depth(config.effective_max_link_depth())
    }
}

impl<P: LinkProbe> ScopedResolver<P> {
    /// Create a resolver that queries `probe` instead of the filesystem.
    #[must_use]
    pub fn with_probe(probe: P) -> Self {
        Self {
            probe,
            max_link_depth: DEFAULT_MAX_LINK_DEPTH,
        }
    }

    /// Configure the maximum number of symlinks followed.
    ///
    /// Exceeding it fails with [`Error::SymlinkLoop`]; this is the only guard
    /// against link cycles.
    ///
    /// # Examples
    ///
    /// ```
    /// use symscope::path::ScopedResolver;
    ///
    /// let resolver = ScopedResolver::new().with_max_link_depth(100);
    /// assert_eq!(resolver.max_link_depth(), 100);
    /// ```
    #[must_use]
    pub fn with_max_link_depth(mut self, depth: usize) -> Self {
        self.max_link_depth = depth;
        self
    }

    /// The configured symlink limit.
    #[must_use]
    pub fn max_link_depth(&self) -> usize {
        self.max_link_depth
    }

    /// Resolve `path`, following symlinks, without leaving `scope`.
    ///
    /// Both arguments may be relative to the current directory. Components of
    /// `path` that do not exist are accepted as-is. Components of `scope`
    /// itself are never resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `scope` cannot be stat'd or is not a directory
    /// - `path` does not start inside `scope` ([`Error::OutsideScope`])
    /// - a filesystem query fails for a reason other than non-existence
    /// - more than `max_link_depth` symlinks are followed
    pub fn resolve(&self, path: &Path, scope: &Path) -> Result<ResolvedPath> {
        let root = self.open_scope(scope)?;
        let absolute = normalize::absolutize(path)?;

        let relative = PathRelationship::is_within(&absolute, &root)
            .then(|| absolute.strip_prefix(&root).ok())
            .flatten()
            .ok_or_else(|| Error::OutsideScope {
                path: absolute.clone(),
                scope: root.clone(),
            })?;

        let mut cursor = Cursor::new(relative);
        let mut links_followed = 0;

        while let Some(segment) = cursor.next_segment() {
            let name = match segment {
                Segment::Parent => {
                    cursor.ascend();
                    continue;
                }
                Segment::Name(name) => name,
            };

            let candidate = root.join(cursor.candidate(&name));
            match self.probe.probe(&candidate)? {
                Entry::Missing | Entry::Other => {
                    log::trace!("walked {}", candidate.display());
                    cursor.descend(name);
                }
                Entry::Link(target) => {
                    links_followed += 1;
                    if links_followed > self.max_link_depth {
                        return Err(Error::SymlinkLoop {
                            path: absolute,
                            limit: self.max_link_depth,
                        });
                    }

                    log::debug!(
                        "following {} -> {}",
                        candidate.display(),
                        target.display()
                    );
                    if target.has_root() {
                        cursor.reroot();
                    }
                    cursor.splice(&target);
                }
            }
        }

        Ok(ResolvedPath::new(
            cursor.under(&root),
            path.to_path_buf(),
            root,
            links_followed,
        ))
    }

    /// Make the scope absolute and check that it is a directory.
    fn open_scope(&self, scope: &Path) -> Result<PathBuf> {
        let root = normalize::absolutize(scope)?;
        let is_dir = self
            .probe
            .is_dir(&root)
            .map_err(|source| Error::ScopeUnavailable {
                scope: root.clone(),
                source,
            })?;

        if !is_dir {
            return Err(Error::InvalidPath {
                path: root,
                reason: "scope is not a directory".to_string(),
            });
        }
        Ok(root)
    }
}

/// Resolve `path` inside `scope` with the default resolver.
///
/// This is the single entry point most callers need: it returns an absolute
/// path with every symlink resolved that is equal to, or beneath, `scope`.
///
/// # Errors
///
/// See [`ScopedResolver::resolve`].
///
/// # Examples
///
/// ```no_run
/// use symscope::follow_symlink_in_scope;
///
/// let resolved = follow_symlink_in_scope("rootfs/etc/passwd", "rootfs").unwrap();
/// assert!(resolved.is_absolute());
/// ```
pub fn follow_symlink_in_scope(path: impl AsRef<Path>, scope: impl AsRef<Path>) -> Result<PathBuf> {
    ScopedResolver::new()
        .resolve(path.as_ref(), scope.as_ref())
        .map(ResolvedPath::into_path_buf)
}
