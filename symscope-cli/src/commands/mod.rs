//! CLI command implementations.
//!
//! - `resolve`: Resolve a path inside a scope directory
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod resolve;

pub use completions::CompletionsCommand;
pub use resolve::ResolveCommand;
