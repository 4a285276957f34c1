//! Library exports for symscope-cli.
//!
//! This module exports the CLI structure and error mapping so integration
//! tests and benches can reach them.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
