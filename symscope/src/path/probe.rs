//! Read-only filesystem queries used while walking a path.
//!
//! The resolver asks exactly one question of the filesystem per segment: is
//! this entry a symlink, and if so where does it point. [`LinkProbe`] is that
//! question as a trait, so the walk can run against the real filesystem
//! ([`SystemProbe`]) or a scripted one in tests.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// What the filesystem holds at a path, as far as resolution cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Nothing exists at the path.
    Missing,
    /// A symlink with the given raw target.
    Link(PathBuf),
    /// Anything that is not a symlink: directory, file, device, socket.
    Other,
}

/// Source of symlink information for the resolver.
#[cfg_attr(test, mockall::automock)]
pub trait LinkProbe {
    /// Inspect `path` without following a final symlink.
    ///
    /// # Errors
    ///
    /// Returns an error for any failure other than the path not existing.
    fn probe(&self, path: &Path) -> Result<Entry>;

    /// Whether `path` is a directory, following symlinks.
    ///
    /// # Errors
    ///
    /// Returns the underlying error if `path` cannot be stat'd.
    fn is_dir(&self, path: &Path) -> std::io::Result<bool>;
}

/// [`LinkProbe`] backed by `lstat(2)` and `readlink(2)`.
///
/// # Examples
///
/// ```no_run
/// use symscope::path::probe::{Entry, LinkProbe, SystemProbe};
/// use std::path::Path;
///
/// let entry = SystemProbe.probe(Path::new("/tmp")).unwrap();
/// assert_ne!(entry, Entry::Missing);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl LinkProbe for SystemProbe {
    fn probe(&self, path: &Path) -> Result<Entry> {
        let metadata = match fs::symlink_metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entry::Missing),
            Err(e) => return Err(query_error(path, e)),
        };

        if !metadata.file_type().is_symlink() {
            return Ok(Entry::Other);
        }

        fs::read_link(path)
            .map(Entry::Link)
            .map_err(|e| query_error(path, e))
    }

    fn is_dir(&self, path: &Path) -> std::io::Result<bool> {
        fs::metadata(path).map(|metadata| metadata.is_dir())
    }
}

fn query_error(path: &Path, e: std::io::Error) -> Error {
    match e.kind() {
        ErrorKind::PermissionDenied => Error::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => Error::Resolution {
            path: path.to_path_buf(),
            source: e,
        },
    }
}
