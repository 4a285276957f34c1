//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including path expansion and configuration loading.

use crate::error::CliError;
use std::env;
use std::path::{Path, PathBuf};
use symscope::config::{Config, ConfigBuilder};
use symscope::path::normalize;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Expand a leading `~` in a user-supplied path.
///
/// The path is otherwise left as typed; the resolver makes it absolute.
pub fn expand_path(path: &Path) -> Result<PathBuf, CliError> {
    normalize::expand_tilde(path).map_err(|e| CliError::InvalidArguments(e.to_string()))
}

/// Expand a path, using CWD if not specified.
pub fn expand_or_current(path: Option<&Path>) -> Result<PathBuf, CliError> {
    match path {
        Some(p) => expand_path(p),
        None => Ok(env::current_dir()?),
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. The `--config` file
/// 3. The user configuration file
/// 4. Built-in defaults (lowest priority)
///
/// Command-line flags are layered on top by the individual commands.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref file) = global.config {
        builder = builder.with_file(expand_path(file)?);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}
