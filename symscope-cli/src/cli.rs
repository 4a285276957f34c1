//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, ResolveCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Resolve symlinks without leaving a scope directory.
#[derive(Parser)]
#[command(name = "symscope")]
#[command(version, about = "Resolve symlinks without leaving a scope directory", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read configuration from this file as well as the user file
    #[arg(long, value_name = "FILE", global = true, env = "SYMSCOPE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve a path inside a scope directory
    Resolve(ResolveCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
