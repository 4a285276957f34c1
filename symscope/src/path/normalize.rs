//! Lexical path normalization.
//!
//! Nothing here touches the filesystem. [`clean`] collapses `.` and `..`
//! without ever climbing above the root, and [`absolutize`] anchors relative
//! input at the working directory before cleaning it. [`expand_tilde`] is
//! for command-line front ends only.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Replace a leading `~` or `~/` with the current user's home directory.
///
/// Any other path, including one with a `~` later on or one that is not
/// valid UTF-8, comes back unchanged. The resolver never calls this, since a
/// directory named `~` is an ordinary component inside a scope.
///
/// # Errors
///
/// Fails with [`Error::InvalidPath`] for `~name` forms, which would need a
/// password database lookup, and when no home directory is known.
///
/// # Examples
///
/// ```
/// use symscope::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let rootfs = expand_tilde(Path::new("~/images/rootfs")).unwrap();
/// assert!(rootfs.is_absolute());
/// assert!(rootfs.ends_with("images/rootfs"));
///
/// assert_eq!(expand_tilde(Path::new("srv/~x")).unwrap(), Path::new("srv/~x"));
/// assert!(expand_tilde(Path::new("~root/etc")).is_err());
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let mut components = path.components();
    let Some(Component::Normal(first)) = components.next() else {
        return Ok(path.to_path_buf());
    };
    let Some(first) = first.to_str().filter(|f| f.starts_with('~')) else {
        return Ok(path.to_path_buf());
    };

    if first != "~" {
        return Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "expanding ~user is not supported, only ~ and ~/".to_string(),
        });
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "no home directory to expand ~ into".to_string(),
    })?;
    let rest = components.as_path();
    if rest.as_os_str().is_empty() {
        Ok(home)
    } else {
        Ok(home.join(rest))
    }
}

/// Lexically collapse `.` and `..` components.
///
/// A `..` at the root of an absolute path stays at the root, so `/..` is `/`.
/// Leading `..` components of a relative path are kept since there is
/// nothing to pop. An empty relative result becomes `.`.
///
/// No filesystem access happens here: `a/link/..` becomes `a` even if `link`
/// is a symlink.
///
/// # Examples
///
/// ```
/// use symscope::path::normalize::clean;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(clean(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(clean(Path::new("/a/../../..")), PathBuf::from("/"));
/// assert_eq!(clean(Path::new("../a/./b/..")), PathBuf::from("../a"));
/// assert_eq!(clean(Path::new("a/..")), PathBuf::from("."));
/// ```
#[must_use]
pub fn clean(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    // Number of Normal components currently on `result`, so `..` never pops
    // a root, a prefix or a leading `..`.
    let mut depth = 0usize;
    let mut rooted = false;

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => {
                result.push(prefix.as_os_str());
            }
            Component::RootDir => {
                result.push(component);
                rooted = true;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    result.pop();
                    depth -= 1;
                } else if !rooted {
                    result.push(component);
                }
            }
            Component::Normal(c) => {
                result.push(c);
                depth += 1;
            }
        }
    }

    if result.as_os_str().is_empty() {
        result.push(Component::CurDir);
    }

    result
}

/// Make a path absolute and lexically clean.
///
/// Relative paths are joined against the current working directory. Symlinks
/// are not followed.
///
/// # Errors
///
/// Returns an error if the path is relative and the current directory cannot
/// be determined.
///
/// # Examples
///
/// ```no_run
/// use symscope::path::normalize::absolutize;
/// use std::path::Path;
///
/// let absolute = absolutize(Path::new("./src")).unwrap();
/// assert!(absolute.is_absolute());
///
/// let absolute = absolutize(Path::new("/a/./b/../c")).unwrap();
/// assert_eq!(absolute, Path::new("/a/c"));
/// ```
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(clean(path));
    }

    let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: format!("Cannot get current directory: {e}"),
    })?;
    Ok(clean(&cwd.join(path)))
}
