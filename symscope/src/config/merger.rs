//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use symscope::config::{Config, ConfigMerger};
///
/// let low = Config { max_link_depth: Some(8), ..Default::default() };
/// let high = Config { max_link_depth: Some(16), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.max_link_depth, Some(16));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources, given lowest precedence first, into one configuration.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target. Fields set in `source` win.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.max_link_depth.is_some() {
            target.max_link_depth = source.max_link_depth;
        }

        if source.log_mode.is_some() {
            target.log_mode.clone_from(&source.log_mode);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
