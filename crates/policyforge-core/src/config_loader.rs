//! Loading and saving the application configuration file.
//!
//! Configuration lives at `~/.policyforge/config.toml` unless a different
//! base directory or an explicit file is supplied. A missing file is not an
//! error: [`ConfigLoader::load`] falls back to [`Config::default`].
//!
//! # Examples
//!
//! ```
//! use policyforge_core::config_loader::ConfigLoader;
//! use std::path::PathBuf;
//!
//! let loader = ConfigLoader::with_base_dir(PathBuf::from("/nonexistent/policyforge"));
//! assert!(!loader.exists());
//!
//! let config = loader.load().expect("defaults when the file is missing");
//! assert_eq!(config.output.directory, ".");
//! ```

use crate::config::Config;
use crate::error::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";

const BASE_DIR_NAME: &str = ".policyforge";

/// Reads and writes `config.toml` under a base directory.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    base_dir: PathBuf,
}

impl ConfigLoader {
    /// Loader rooted at `~/.policyforge`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoHomeDirectory`] if the home directory cannot be determined.
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            base_dir: default_base_dir()?,
        })
    }

    /// Loader rooted at a custom directory.
    #[must_use]
    pub const fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Path of the configuration file.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.base_dir.join(CONFIG_FILE_NAME)
    }

    /// The base directory.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Load the configuration, or defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseFailed`] for invalid TOML and
    /// [`ConfigError::Io`] if the file cannot be read.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let config_path = self.config_path();

        if !self.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load and validate a configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileNotFound`] if `path` does not exist,
    /// [`ConfigError::ParseFailed`] for invalid TOML, or
    /// [`ConfigError::InvalidValue`] if validation fails.
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::file_not_found(path.display().to_string()));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::io(format!("failed to read {}", path.display()), e))?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            ConfigError::parse_failed(format!("invalid TOML in {}: {e}", path.display()))
        })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Write [`Config::default_toml`] to an explicit file, creating its
    /// parent directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the directory or file cannot be written.
    pub fn write_default_to(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::io(
                    format!("failed to create directory {}", parent.display()),
                    e,
                )
            })?;
        }

        fs::write(path, Config::default_toml()).map_err(|e| {
            ConfigError::io(
                format!("failed to write default configuration to {}", path.display()),
                e,
            )
        })?;
        tracing::info!(path = %path.display(), "wrote default configuration");
        Ok(())
    }

    /// Whether the configuration file exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.config_path().exists()
    }
}

/// Expand a leading `~` to the home directory.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the path starts with `~` and
/// the home directory cannot be determined.
///
/// # Examples
///
/// ```
/// use policyforge_core::config_loader::expand_path;
///
/// let path = expand_path("/srv/policies").expect("absolute paths are unchanged");
/// assert_eq!(path.to_string_lossy(), "/srv/policies");
/// ```
pub fn expand_path(path: &str) -> Result<PathBuf, ConfigError> {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = dirs::home_dir().ok_or_else(ConfigError::no_home_directory)?;
        Ok(home.join(rest))
    } else if path == "~" {
        dirs::home_dir().ok_or_else(ConfigError::no_home_directory)
    } else {
        Ok(PathBuf::from(path))
    }
}

/// The default base directory, `~/.policyforge`.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the home directory cannot be determined.
pub fn default_base_dir() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or_else(ConfigError::no_home_directory)?;
    Ok(home.join(BASE_DIR_NAME))
}
