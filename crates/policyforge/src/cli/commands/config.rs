//! # Config Command
//!
//! Displays and initializes the `policyforge` configuration file.
//!
//! ## Usage
//!
//! ```text
//! policyforge config               # Display the effective configuration
//! policyforge config path          # Show the configuration file path
//! policyforge config init [--force]
//! ```

use std::path::PathBuf;

use policyforge_core::{Config, ConfigError, ConfigLoader};

use crate::cli::args::ConfigAction;
use crate::cli::commands::output::write_stdout;

// ============================================================================
// ConfigCommandError
// ============================================================================

/// Errors that can occur during config command execution.
#[derive(Debug, thiserror::Error)]
pub enum ConfigCommandError {
    /// `init` without `--force` over an existing file.
    #[error("Configuration already exists at {0}. Use --force to overwrite.")]
    AlreadyExists(String),

    /// Failed to serialize the effective configuration.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Failed to write the configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

// ============================================================================
// ConfigCommand
// ============================================================================

/// The `policyforge config` command handler.
#[derive(Debug, Clone)]
pub struct ConfigCommand {
    /// The action to perform (None = show config).
    pub action: Option<ConfigAction>,
    /// Configuration file the action applies to.
    pub path: PathBuf,
}

impl ConfigCommand {
    /// Create a new `ConfigCommand` for the file at `path`.
    #[must_use]
    pub const fn new(action: Option<ConfigAction>, path: PathBuf) -> Self {
        Self { action, path }
    }

    /// Create a `ConfigCommand` for the default location, `~/.policyforge/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigCommandError::Config`] if the home directory cannot be
    /// determined.
    pub fn with_default_path(action: Option<ConfigAction>) -> Result<Self, ConfigCommandError> {
        Ok(Self::new(action, ConfigLoader::new()?.config_path()))
    }

    /// Run the config command.
    ///
    /// `config` is the effective configuration, shown when no action is
    /// given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigCommandError`] if serialization or writing fails, or
    /// `init` would overwrite an existing file without `--force`.
    pub fn run(&self, config: &Config) -> Result<(), ConfigCommandError> {
        match self.action {
            None => write_stdout(&self.show(config)?),
            Some(ConfigAction::Path) => write_stdout(&self.path.display().to_string()),
            Some(ConfigAction::Init { force }) => {
                self.init(force)?;
                write_stdout(&format!("Wrote {}", self.path.display()));
            }
        }
        Ok(())
    }

    /// The effective configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigCommandError::Serialize`] if serialization fails.
    pub fn show(&self, config: &Config) -> Result<String, ConfigCommandError> {
        let body = toml::to_string_pretty(config)?;
        Ok(format!("# {}\n\n{body}", self.path.display()))
    }

    /// Write the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigCommandError::AlreadyExists`] if the file exists and
    /// `force` is false, or [`ConfigCommandError::Config`] on write failure.
    pub fn init(&self, force: bool) -> Result<(), ConfigCommandError> {
        if self.path.exists() && !force {
            return Err(ConfigCommandError::AlreadyExists(
                self.path.display().to_string(),
            ));
        }
        ConfigLoader::write_default_to(&self.path)?;
        Ok(())
    }
}
