//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Complete configuration structure.
///
/// Every field is optional so that configurations from several sources can
/// be layered; unset fields fall back to the built-in defaults.
///
/// # Examples
///
/// ```
/// use symscope::config::Config;
///
/// let config: Config = serde_yaml::from_str("max_link_depth: 16").unwrap();
/// assert_eq!(config.max_link_depth, Some(16));
/// assert_eq!(config.effective_max_link_depth(), 16);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum number of symlinks followed in one resolution.
    pub max_link_depth: Option<usize>,

    /// Log verbosity: `quiet`, `normal` or `verbose`.
    pub log_mode: Option<String>,

    /// Output format for resolved paths.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The link depth to use, falling back to the default.
    #[must_use]
    pub fn effective_max_link_depth(&self) -> usize {
        self.max_link_depth
            .unwrap_or(crate::path::resolver::DEFAULT_MAX_LINK_DEPTH)
    }

    /// The output format to use, falling back to plain.
    #[must_use]
    pub fn effective_output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

/// How a resolved path is printed.
///
/// # Examples
///
/// ```
/// use symscope::config::OutputFormat;
///
/// let format: OutputFormat = "json".parse().unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The bare resolved path.
    #[default]
    Plain,
    /// A JSON object with the inputs and the resolved path.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid output format: {s} (expected plain or json)")),
        }
    }
}
