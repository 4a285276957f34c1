//! Reading YAML configuration files from disk.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-user configuration directory under the home directory.
pub const USER_CONFIG_DIR: &str = ".symscope";

/// One parsed configuration file.
///
/// When sources are merged, fields from a higher `precedence` win.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Where the file was read from.
    pub path: PathBuf,
    /// 1 for the user file, 2 for an explicit file.
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use symscope::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Some(Path::new("symscope.yaml"))).unwrap();
/// assert!(sources.len() <= 2);
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the user configuration and an optional explicit file.
    ///
    /// The user file `~/.symscope/config.yaml` is skipped when absent. The
    /// explicit file must exist. Sources are returned lowest precedence first.
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists but cannot be read or parsed, or if
    /// the explicit file is missing.
    pub fn load_all(explicit: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_path) = Self::user_config_path() {
            if user_path.exists() {
                let config = Self::load_file(&user_path)?;
                sources.push(ConfigSource {
                    path: user_path,
                    precedence: 1,
                    config,
                });
            }
        }

        if let Some(path) = explicit {
            sources.push(ConfigSource {
                path: path.to_path_buf(),
                precedence: 2,
                config: Self::load_file(path)?,
            });
        }

        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file is an empty configuration.
    ///
    /// # Errors
    ///
    /// Fails when the file is unreadable or is not a valid configuration.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }

    /// Location of the user configuration file, if a home directory exists.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(USER_CONFIG_DIR).join("config.yaml"))
    }
}
