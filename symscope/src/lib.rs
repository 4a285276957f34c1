#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # symscope
//!
//! Resolve symbolic links in a path without ever leaving a scope directory.
//!
//! Container filesystem layers, archive extractors and static file servers
//! expose a subtree of the filesystem to callers they do not fully trust. A
//! naive `canonicalize` lets a symlink inside that subtree point anywhere.
//! This library resolves paths as though the scope directory were the root
//! of the filesystem, so the result is always the scope or a descendant of
//! it, even for paths whose final components do not exist yet.
//!
//! ## Core Types
//!
//! - [`follow_symlink_in_scope`]: the one-call entry point
//! - [`ScopedResolver`] and [`ResolvedPath`]: configurable resolution
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use symscope::follow_symlink_in_scope;
//!
//! // rootfs/lib -> /usr/lib is re-rooted under rootfs
//! let resolved = follow_symlink_in_scope("rootfs/lib/libc.so", "rootfs").unwrap();
//! assert!(resolved.ends_with("rootfs/usr/lib/libc.so"));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;

pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{follow_symlink_in_scope, PathRelationship, ResolvedPath, ScopedResolver};
