//! Logging infrastructure for the symscope library.
//!
//! The resolver reports what it does through the `log` facade: each followed
//! symlink at debug level and each walked segment at trace level. Nothing is
//! printed unless a backend is installed. [`Logger`] is a small stderr
//! backend with three verbosity settings for front ends that do not bring
//! their own.

use std::env;
use std::fmt;
use std::io::Write;

use crate::config::environment::ENV_LOG_MODE;

/// How much diagnostic output a front end wants.
///
/// Ordered from least to most output.
///
/// # Examples
///
/// ```
/// use symscope::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Nothing at all.
    Quiet,
    /// Errors and warnings.
    #[default]
    Normal,
    /// Everything, including per-link and per-segment tracing.
    Verbose,
}

impl LogLevel {
    /// Parse `quiet`, `normal` or `verbose`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns a message naming the rejected value.
    ///
    /// # Examples
    ///
    /// ```
    /// use symscope::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("Verbose").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("loud").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.trim().to_ascii_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!(
                "unknown log mode '{value}' (expected quiet, normal or verbose)"
            )),
        }
    }

    /// The most detailed `log` level let through at this setting.
    #[must_use]
    pub fn max_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Off,
            Self::Normal => log::LevelFilter::Warn,
            Self::Verbose => log::LevelFilter::Trace,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        })
    }
}

/// `log` backend writing `LEVEL: message` lines to stderr.
///
/// # Examples
///
/// ```no_run
/// use symscope::{LogLevel, Logger};
///
/// Logger::new(LogLevel::Verbose).install().unwrap();
/// log::debug!("shown on stderr as DEBUG: ...");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// A logger filtering at `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// The configured verbosity.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Make this logger the process-wide `log` backend.
    ///
    /// # Errors
    ///
    /// Fails if another backend was installed first.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(self.level.max_level_filter());
        Ok(())
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.level.max_level_filter()
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            // A closed stderr has nowhere to report to
            let _ = writeln!(std::io::stderr().lock(), "{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Pick the logger for a front end.
///
/// Sources, first match wins:
/// 1. `verbose` then `quiet` flags
/// 2. `configured`, usually the `log_mode` of a loaded [`Config`](crate::Config)
/// 3. The `SYMSCOPE_LOG_MODE` environment variable
/// 4. [`LogLevel::Normal`]
///
/// Unparseable configured or environment values are skipped.
///
/// # Examples
///
/// ```
/// use symscope::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, false, Some("quiet")).level(), LogLevel::Verbose);
/// assert_eq!(init_logger(false, false, Some("quiet")).level(), LogLevel::Quiet);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool, configured: Option<&str>) -> Logger {
    let level = if verbose {
        LogLevel::Verbose
    } else if quiet {
        LogLevel::Quiet
    } else {
        configured
            .and_then(|mode| LogLevel::parse(mode).ok())
            .or_else(|| {
                env::var(ENV_LOG_MODE)
                    .ok()
                    .and_then(|mode| LogLevel::parse(&mode).ok())
            })
            .unwrap_or_default()
    };
    Logger::new(level)
}
