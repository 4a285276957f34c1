//! Environment variable handling for configuration overrides.
//!
//! This module provides support for SYMSCOPE_* environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;

/// Overrides the maximum symlink depth.
pub const ENV_MAX_LINK_DEPTH: &str = "SYMSCOPE_MAX_LINK_DEPTH";

/// Overrides the log mode.
pub const ENV_LOG_MODE: &str = "SYMSCOPE_LOG_MODE";

/// Overrides the output format.
pub const ENV_OUTPUT_FORMAT: &str = "SYMSCOPE_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use symscope::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(depth) = env::var(ENV_MAX_LINK_DEPTH) {
            config.max_link_depth = Some(depth.trim().parse().map_err(|_| Error::Validation {
                field: ENV_MAX_LINK_DEPTH.into(),
                message: format!("Must be a positive integer, got '{depth}'"),
            })?);
        }

        if let Ok(mode) = env::var(ENV_LOG_MODE) {
            config.log_mode = Some(mode);
        }

        if let Ok(format) = env::var(ENV_OUTPUT_FORMAT) {
            config.output_format = Some(format.parse().map_err(|message| Error::Validation {
                field: ENV_OUTPUT_FORMAT.into(),
                message,
            })?);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var(ENV_MAX_LINK_DEPTH);
        env::remove_var(ENV_LOG_MODE);
        env::remove_var(ENV_OUTPUT_FORMAT);
    }

    #[test]
    #[serial]
    fn test_no_env_leaves_config_untouched() {
        clear_env();
        let mut config = Config {
            max_link_depth: Some(7),
            ..Default::default()
        };
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.max_link_depth, Some(7));
    }

    #[test]
    #[serial]
    fn test_env_overrides_values() {
        clear_env();
        env::set_var(ENV_MAX_LINK_DEPTH, "12");
        env::set_var(ENV_LOG_MODE, "verbose");
        env::set_var(ENV_OUTPUT_FORMAT, "json");

        let mut config = Config::default();
        let result = EnvironmentConfig::apply_overrides(&mut config);
        clear_env();

        result.unwrap();
        assert_eq!(config.max_link_depth, Some(12));
        assert_eq!(config.log_mode.as_deref(), Some("verbose"));
        assert_eq!(config.output_format, Some(OutputFormat::Json));
    }

    #[test]
    #[serial]
    fn test_invalid_depth_rejected() {
        clear_env();
        env::set_var(ENV_MAX_LINK_DEPTH, "lots");

        let mut config = Config::default();
        let result = EnvironmentConfig::apply_overrides(&mut config);
        clear_env();

        assert!(matches!(result, Err(Error::Validation { .. })));
    }
}
