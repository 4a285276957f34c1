//! Common test utilities for integration tests.
//!
//! This module provides helpers for laying out directory trees containing
//! symlinks and for checking scoped resolution against them.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use symscope::path::normalize;

/// One entry of a test filesystem: a directory, or a symlink to `target`.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// Directory at the path, created with its parents.
    Dir(&'a str),
    /// Symlink at the first path pointing at the second.
    Link(&'a str, &'a str),
}

/// Creates a temporary directory for testing.
///
/// The directory will be automatically cleaned up when the returned
/// `TempDir` is dropped.
#[allow(dead_code)]
pub fn create_temp_dir() -> io::Result<tempfile::TempDir> {
    tempfile::tempdir()
}

/// Lay out `nodes` under `base`.
///
/// Parents of links are created as directories. A link that already exists
/// is left alone, so fixtures can be replayed.
#[cfg(unix)]
#[allow(dead_code)]
pub fn build_tree(base: &Path, nodes: &[Node<'_>]) -> io::Result<()> {
    for node in nodes {
        match *node {
            Node::Dir(path) => fs::create_dir_all(base.join(path))?,
            Node::Link(path, target) => {
                let link = base.join(path);
                if let Some(parent) = link.parent() {
                    fs::create_dir_all(parent)?;
                }
                match std::os::unix::fs::symlink(target, &link) {
                    Err(e) if e.kind() != io::ErrorKind::AlreadyExists => return Err(e),
                    _ => {}
                }
            }
        }
    }
    Ok(())
}

/// Resolve `base/path` in `base/scope` and compare with `base/expected`.
#[allow(dead_code)]
pub fn assert_resolves(base: &Path, path: &str, expected: &str, scope: &str) {
    let resolved = symscope::follow_symlink_in_scope(join(base, path), join(base, scope))
        .unwrap_or_else(|e| panic!("resolving {path} in '{scope}' failed: {e}"));
    let expected = normalize::absolutize(&join(base, expected)).unwrap();

    assert_eq!(
        resolved, expected,
        "resolving {path} in '{scope}' gave {} instead of {}",
        resolved.display(),
        expected.display()
    );
}

/// Join treating an empty relative part as the base itself.
fn join(base: &Path, relative: &str) -> PathBuf {
    if relative.is_empty() {
        base.to_path_buf()
    } else {
        base.join(relative)
    }
}
