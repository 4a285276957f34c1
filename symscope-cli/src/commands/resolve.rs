//! Command to resolve a path inside a scope directory.

use crate::error::CliError;
use crate::utils::{expand_or_current, expand_path, GlobalOptions};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use symscope::config::{Config, ConfigMerger, ConfigValidator, OutputFormat};
use symscope::{ResolvedPath, ScopedResolver};

/// Resolve symlinks in a path without leaving a scope directory.
#[derive(Args)]
pub struct ResolveCommand {
    /// Path to resolve (relative paths start at the current directory)
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Directory the result must stay inside (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub scope: Option<PathBuf>,

    /// Output format: plain or json
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Maximum number of symlinks to follow
    #[arg(long, value_name = "N")]
    pub max_link_depth: Option<usize>,
}

/// JSON shape of a resolution.
#[derive(Serialize)]
struct ResolveOutput {
    path: String,
    scope: String,
    resolved: String,
    relative: String,
    links_followed: usize,
}

impl From<&ResolvedPath> for ResolveOutput {
    fn from(resolved: &ResolvedPath) -> Self {
        Self {
            path: resolved.original().display().to_string(),
            scope: resolved.scope().display().to_string(),
            resolved: resolved.path().display().to_string(),
            relative: resolved.scope_relative().display().to_string(),
            links_followed: resolved.links_followed(),
        }
    }
}

impl ResolveCommand {
    pub fn execute(self, _global: &GlobalOptions, config: &Config) -> Result<(), CliError> {
        let config = self.layer_flags(config)?;

        let path = expand_path(&self.path)?;
        let scope = expand_or_current(self.scope.as_deref())?;

        let resolved = ScopedResolver::from_config(&config).resolve(&path, &scope)?;
        if resolved.links_followed() > 0 {
            log::info!(
                "followed {} symlink(s) resolving {}",
                resolved.links_followed(),
                path.display()
            );
        }

        match config.effective_output_format() {
            OutputFormat::Plain => println!("{}", resolved.path().display()),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&ResolveOutput::from(&resolved))
                    .map_err(|e| CliError::Io(e.into()))?;
                println!("{json}");
            }
        }
        Ok(())
    }

    /// Apply command-line flags over the loaded configuration.
    fn layer_flags(&self, config: &Config) -> Result<Config, CliError> {
        let flags = Config {
            max_link_depth: self.max_link_depth,
            output_format: self.format,
            ..Default::default()
        };

        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &flags);
        ConfigValidator::validate(&merged)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
        Ok(merged)
    }
}
