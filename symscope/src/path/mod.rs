//! Path handling for scope-constrained symlink resolution.
//!
//! # Key Concepts
//!
//! ## Scope
//!
//! The scope is a directory that acts as the root of the filesystem for one
//! resolution. Every path the resolver returns is the scope itself or lies
//! beneath it, compared component by component.
//!
//! ## Lexical vs. real
//!
//! Normalization (collapsing `.` and `..`) is purely lexical and never trusts
//! the filesystem. Whether a component is a symlink, and where it points, is
//! always asked of the real filesystem through a [`probe::LinkProbe`].
//!
//! ## Clamping
//!
//! Symlinks that point outside the scope, whether through an absolute target
//! or too many `..` components, land on the scope root. Clamping is silent:
//! it is how escape is prevented, not an error condition.
//!
//! # Examples
//!
//! ```no_run
//! use symscope::path::ScopedResolver;
//! use std::path::Path;
//!
//! let resolver = ScopedResolver::new();
//!
//! // rootfs/etc/localtime -> /usr/share/zoneinfo/UTC
//! let resolved = resolver
//!     .resolve(Path::new("rootfs/etc/localtime"), Path::new("rootfs"))
//!     .unwrap();
//! assert!(resolved.path().ends_with("rootfs/usr/share/zoneinfo/UTC"));
//! ```
//!
//! # Path Relationships
//!
//! ```
//! use symscope::path::PathRelationship;
//! use std::path::Path;
//!
//! let scope = Path::new("/srv/root");
//! assert!(PathRelationship::is_within(Path::new("/srv/root/a"), scope));
//! assert!(!PathRelationship::is_within(Path::new("/srv/rootkit"), scope));
//! ```

pub mod normalize;
pub mod probe;
pub mod relationship;
pub mod resolver;
pub mod segment;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use relationship::PathRelationship;
pub use resolver::{follow_symlink_in_scope, ScopedResolver, DEFAULT_MAX_LINK_DEPTH};
pub use types::ResolvedPath;
