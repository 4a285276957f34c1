//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::LogLevel;

/// Largest accepted `max_link_depth`.
///
/// Matches the traversal limit of common Unix path resolvers; anything higher
/// only delays the failure of a genuine link cycle.
pub const MAX_LINK_DEPTH_LIMIT: usize = 255;

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use symscope::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let zero = Config { max_link_depth: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&zero).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(depth) = config.max_link_depth {
            if !(1..=MAX_LINK_DEPTH_LIMIT).contains(&depth) {
                return Err(Error::Validation {
                    field: "max_link_depth".into(),
                    message: format!("Must be between 1 and {MAX_LINK_DEPTH_LIMIT}, got {depth}"),
                });
            }
        }

        if let Some(ref mode) = config.log_mode {
            LogLevel::parse(mode).map_err(|message| Error::Validation {
                field: "log_mode".into(),
                message,
            })?;
        }

        Ok(())
    }
}
