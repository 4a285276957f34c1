//! Error types for the symscope library.
//!
//! Resolution only fails for two reasons: a filesystem query could not be
//! answered, or the input path did not start inside the scope. Symlinks that
//! point outside the scope are clamped by the resolver and never show up here.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a symscope error.
///
/// # Examples
///
/// ```
/// use symscope::{Error, Result};
/// use std::path::PathBuf;
///
/// fn example_operation() -> Result<PathBuf> {
///     Ok(PathBuf::from("/srv/root"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the symscope library.
#[derive(Debug, Error)]
pub enum Error {
    /// The scope directory could not be stat'd.
    #[error("scope {} is unavailable: {source}", scope.display())]
    ScopeUnavailable {
        /// The scope that was requested.
        scope: PathBuf,
        /// The underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// A filesystem query failed while walking a path.
    #[error("failed to resolve {}: {source}", path.display())]
    Resolution {
        /// The path being queried when the failure happened.
        path: PathBuf,
        /// The underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// Too many symlinks were followed in a single resolution.
    #[error("too many levels of symbolic links resolving {} (limit {limit})", path.display())]
    SymlinkLoop {
        /// The input path being resolved.
        path: PathBuf,
        /// The link limit that was exceeded.
        limit: usize,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// The input path does not start inside the scope.
    #[error("{} is not within scope {}", path.display(), scope.display())]
    OutsideScope {
        /// The absolute input path.
        path: PathBuf,
        /// The absolute scope.
        scope: PathBuf,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error came from failing to resolve a path.
    ///
    /// # Examples
    ///
    /// ```
    /// use symscope::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::SymlinkLoop { path: PathBuf::from("/srv/loop"), limit: 40 };
    /// assert!(err.is_resolution_error());
    /// ```
    #[must_use]
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Self::ScopeUnavailable { .. }
                | Self::Resolution { .. }
                | Self::PermissionDenied { .. }
                | Self::SymlinkLoop { .. }
                | Self::InvalidPath { .. }
        )
    }

    /// Check if the input path started outside the scope.
    ///
    /// # Examples
    ///
    /// ```
    /// use symscope::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::OutsideScope {
    ///     path: PathBuf::from("/etc/passwd"),
    ///     scope: PathBuf::from("/srv/root"),
    /// };
    /// assert!(err.is_scope_violation());
    /// assert!(!err.is_resolution_error());
    /// ```
    #[must_use]
    pub fn is_scope_violation(&self) -> bool {
        matches!(self, Self::OutsideScope { .. })
    }

    /// Check if error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}
