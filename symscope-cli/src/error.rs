//! Errors surfaced by the `symscope` binary and their exit codes.
//!
//! Library errors are wrapped unchanged. Exit codes let scripts tell scope
//! violations apart from resolution and setup failures.

use std::fmt;
use symscope::Error as LibError;

/// Anything that stops a command, mapped to a process exit code.
#[derive(Debug)]
pub enum CliError {
    /// Failure reported by the resolver or configuration layer.
    Library(LibError),

    /// Arguments that parsed but cannot be used, such as a zero link depth.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Configuration error.
    Config(String),
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// Success exits with 0. Otherwise:
    /// - 1: Path is not inside the scope
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 6: Resolution error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(lib_err) => match lib_err {
                LibError::OutsideScope { .. } => 1,
                LibError::Configuration(_) | LibError::Validation { .. } => 7,
                LibError::Io(_) => 5,
                _ => 6,
            },
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
