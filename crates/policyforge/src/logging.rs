//! # Logging Infrastructure
//!
//! Structured logging with `tracing`. Logs always go to stderr so stdout
//! carries nothing but the rendered document; an optional file layer writes
//! through a non-blocking daily-rolling appender.
//!
//! ## Quick Start
//!
//! ```no_run
//! use policyforge::logging::{init_logging, LogConfig};
//!
//! let _guard = init_logging(&LogConfig::default()).expect("logging init");
//! tracing::info!("ready");
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Error type for logging initialization failures.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Failed to create log file or directory
    #[error("Failed to create log file: {0}")]
    FileCreation(String),
    /// Failed to initialize the subscriber
    #[error("Failed to initialize logging: {0}")]
    SubscriberInit(String),
    /// Invalid configuration
    #[error("Invalid log configuration: {0}")]
    InvalidConfig(String),
}

/// Minimum severity of logged messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// trace and above
    Trace,
    /// debug and above
    Debug,
    /// info and above
    Info,
    /// warn and above (default for the CLI)
    #[default]
    Warn,
    /// error only
    Error,
}

impl LogLevel {
    /// Directive string for [`EnvFilter`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// JSON lines for machine parsing.
    Json,
    /// Single-line output.
    Compact,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Compact => write!(f, "compact"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "compact" => Ok(Self::Compact),
            other => Err(LogError::InvalidConfig(format!("unknown format '{other}'"))),
        }
    }
}

/// Configuration for the logging system.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Minimum level.
    pub level: LogLevel,

    /// Output format for both stderr and the file.
    pub format: LogFormat,

    /// Optional log file, written in addition to stderr.
    ///
    /// The parent directory is created if missing.
    pub file_path: Option<PathBuf>,
}

/// Keeps the non-blocking file writer alive; logs are flushed on drop.
pub struct LogGuard {
    guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

impl LogGuard {
    const fn new(guard: Option<tracing_appender::non_blocking::WorkerGuard>) -> Self {
        Self { guard }
    }
}

impl std::fmt::Debug for LogGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogGuard")
            .field("has_file_guard", &self.guard.is_some())
            .finish()
    }
}

/// Initialize the global subscriber.
///
/// `RUST_LOG` is not consulted; the level comes from `config`.
///
/// # Errors
///
/// Returns [`LogError`] if the log directory cannot be created, the file
/// name is unusable, or a subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<LogGuard, LogError> {
    let filter = EnvFilter::try_new(config.level.as_str())
        .map_err(|e| LogError::InvalidConfig(e.to_string()))?;

    let (file_writer, guard) = match config.file_path {
        Some(ref path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));
            std::fs::create_dir_all(dir)
                .map_err(|e| LogError::FileCreation(format!("{}: {e}", dir.display())))?;

            let filename = path
                .file_name()
                .and_then(|s| s.to_str())
                .ok_or_else(|| LogError::InvalidConfig("Invalid log file name".to_string()))?;

            let appender = tracing_appender::rolling::daily(dir, filename);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (Some(non_blocking), Some(guard))
        }
        None => (None, None),
    };

    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .with(file_writer.map(|writer| {
                fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_target(true)
            }))
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_writer(std::io::stderr),
            )
            .with(file_writer.map(|writer| fmt::layer().json().with_writer(writer)))
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .with(file_writer.map(|writer| {
                fmt::layer()
                    .compact()
                    .with_writer(writer)
                    .with_ansi(false)
            }))
            .try_init(),
    };
    result.map_err(|e| LogError::SubscriberInit(e.to_string()))?;

    Ok(LogGuard::new(guard))
}

/// Map `-v` occurrences to a level: 0 warn, 1 info, 2 debug, 3+ trace.
#[must_use]
pub const fn verbosity_to_level(verbose: u8) -> LogLevel {
    match verbose {
        0 => LogLevel::Warn,
        1 => LogLevel::Info,
        2 => LogLevel::Debug,
        _ => LogLevel::Trace,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_verbosity_to_level() {
        assert_eq!(verbosity_to_level(0), LogLevel::Warn);
        assert_eq!(verbosity_to_level(1), LogLevel::Info);
        assert_eq!(verbosity_to_level(2), LogLevel::Debug);
        assert_eq!(verbosity_to_level(3), LogLevel::Trace);
        assert_eq!(verbosity_to_level(u8::MAX), LogLevel::Trace);
    }

    #[test]
    fn test_level_strings() {
        assert_eq!(LogLevel::Debug.as_str(), "debug");
        assert_eq!(LogLevel::Error.as_str(), "error");
        assert_eq!(LogLevel::default(), LogLevel::Warn);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert!(matches!(
            "xml".parse::<LogFormat>(),
            Err(LogError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_format_display_round_trips() {
        for format in [LogFormat::Pretty, LogFormat::Json, LogFormat::Compact] {
            assert_eq!(format.to_string().parse::<LogFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_guard_debug() {
        let guard = LogGuard::new(None);
        assert!(format!("{guard:?}").contains("has_file_guard: false"));
    }
}
