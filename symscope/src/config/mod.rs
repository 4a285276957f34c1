//! Configuration system for symscope.
//!
//! Configuration is merged from several sources, highest precedence first:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`SYMSCOPE_*`)
//! 3. An explicit file (via `ConfigBuilder::with_file`)
//! 4. The user file `~/.symscope/config.yaml`
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use symscope::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .with_file("symscope.yaml")
//!     .build()
//!     .unwrap();
//!
//! println!("following at most {} links", config.effective_max_link_depth());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::{EnvironmentConfig, ENV_LOG_MODE, ENV_MAX_LINK_DEPTH, ENV_OUTPUT_FORMAT};
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat};
pub use validator::ConfigValidator;
