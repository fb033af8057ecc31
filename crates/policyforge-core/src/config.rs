//! Application configuration for `policyforge`.
//!
//! The configuration covers where exported documents are written and how the
//! CLI logs. It does not describe policies themselves; those live in
//! [`crate::types::PolicyConfig`].
//!
//! # Configuration File
//!
//! Configuration is stored in TOML format at `~/.policyforge/config.toml`.
//!
//! # Examples
//!
//! ```
//! use policyforge_core::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.output.directory, ".");
//! assert!(config.output.pretty);
//! assert_eq!(config.logging.format, "pretty");
//! ```
//!
//! # Default TOML Output
//!
//! ```toml
//! [output]
//! directory = "."
//! pretty = true
//!
//! [logging]
//! format = "pretty"
//! # file = "~/.policyforge/policyforge.log"
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Log formats accepted in `[logging] format`.
pub const LOG_FORMATS: &[&str] = &["pretty", "json", "compact"];

/// Top-level configuration.
///
/// - **Output**: Download directory and JSON layout
/// - **Logging**: Log format and optional log file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_output_directory() -> String {
    ".".to_string()
}

const fn default_pretty() -> bool {
    true
}

/// Where and how policy documents are written.
///
/// # Examples
///
/// ```
/// use policyforge_core::config::OutputConfig;
///
/// let output: OutputConfig = toml::from_str("pretty = false").expect("valid TOML");
/// assert_eq!(output.directory, ".");
/// assert!(!output.pretty);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Directory that `--download` writes `<sanitized name>.json` into.
    ///
    /// Supports `~` expansion.
    ///
    /// Default: `.`
    #[serde(default = "default_output_directory")]
    pub directory: String,

    /// Emit 2-space indented JSON; `false` emits a single line.
    ///
    /// Default: `true`
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            pretty: default_pretty(),
        }
    }
}

fn default_log_format() -> String {
    "pretty".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// One of [`LOG_FORMATS`].
    ///
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Optional log file; logs also go to stderr.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if:
    /// - `output.directory` is empty
    /// - `logging.format` is not one of [`LOG_FORMATS`]
    /// - `logging.file` is set but empty
    ///
    /// # Examples
    ///
    /// ```
    /// use policyforge_core::config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.logging.format = "xml".to_string();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.directory.is_empty() {
            return Err(ConfigError::invalid_value("output.directory", "<empty>"));
        }

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::invalid_value(
                "logging.format",
                self.logging.format.clone(),
            ));
        }

        if self.logging.file.as_deref() == Some("") {
            return Err(ConfigError::invalid_value("logging.file", "<empty>"));
        }

        Ok(())
    }

    /// The commented default configuration file.
    ///
    /// # Examples
    ///
    /// ```
    /// use policyforge_core::config::Config;
    ///
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[output]"));
    /// assert!(toml.contains("[logging]"));
    /// ```
    #[must_use]
    pub fn default_toml() -> String {
        r#"# policyforge configuration

[output]
# Directory that --download writes <policy name>.json into
directory = "."
# Indent JSON output with 2 spaces
pretty = true

[logging]
# pretty | json | compact
format = "pretty"
# file = "~/.policyforge/policyforge.log"
"#
        .to_string()
    }
}
