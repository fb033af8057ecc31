//! # policyforge
//!
//! Compose custodial signing policies and export them as JSON.
//!
//! ## Usage
//!
//! ```bash
//! # Render a saved configuration
//! policyforge build policy.json
//!
//! # Start from a preset and override the name
//! policyforge compose --preset eth-value-limit --name "Treasury cap" --download
//!
//! # Browse presets and dialects
//! policyforge preset list --category solana
//! policyforge dialects
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::path::Path;

use clap::Parser;
use policyforge::cli::commands::exit_codes::EXIT_ERROR;
use policyforge::cli::commands::{
    BuildCommand, ComposeCommand, ConfigCommand, DialectsCommand, PresetCommand,
};
use policyforge::cli::{Cli, Commands};
use policyforge::logging::{init_logging, verbosity_to_level, LogConfig, LogError, LogGuard};
use policyforge_core::{expand_path, Config, ConfigError, ConfigLoader};

/// Load the configuration from `-c PATH`, or `~/.policyforge/config.toml`.
fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => ConfigLoader::load_from(path),
        None => ConfigLoader::new()?.load(),
    }
}

/// Set up logging from verbosity and the `[logging]` section.
///
/// # Errors
///
/// Returns [`LogError`] if the format is unknown or initialization fails.
fn setup_logging(verbose: u8, config: &Config) -> Result<LogGuard, LogError> {
    let file_path = match config.logging.file {
        Some(ref file) => Some(
            expand_path(file).map_err(|e| LogError::InvalidConfig(e.to_string()))?,
        ),
        None => None,
    };

    let config = LogConfig {
        level: verbosity_to_level(verbose),
        format: config.logging.format.parse()?,
        file_path,
    };
    init_logging(&config)
}

/// Main entry point for the `policyforge` application.
fn main() {
    let cli = Cli::parse();

    // `config` must work over a broken file so `config init --force` can repair it
    let (config, load_error) = match load_config(cli.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) if matches!(cli.command, Commands::Config { .. }) => (Config::default(), Some(e)),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(EXIT_ERROR);
        }
    };

    let _guard = match setup_logging(cli.verbose, &config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            std::process::exit(EXIT_ERROR);
        }
    };

    if let Some(e) = load_error {
        tracing::warn!(error = %e, "configuration not loaded, using defaults");
    }

    // Dispatch to command handlers
    let result = match cli.command {
        Commands::Build { input, output } => {
            let cmd = BuildCommand::new(input, output);
            cmd.run(&config).map_err(|e| e.to_string())
        }
        Commands::Compose(args) => {
            let cmd = ComposeCommand::new(args);
            cmd.run(&config).map_err(|e| e.to_string())
        }
        Commands::Preset { action } => {
            let cmd = PresetCommand::new(action);
            cmd.run(&config).map_err(|e| e.to_string())
        }
        Commands::Dialects { id } => {
            let cmd = DialectsCommand::new(id);
            cmd.run().map_err(|e| e.to_string())
        }
        Commands::Config { action } => {
            let cmd = match cli.config {
                Some(path) => Ok(ConfigCommand::new(action, path)),
                None => ConfigCommand::with_default_path(action),
            };
            cmd.and_then(|cmd| cmd.run(&config))
                .map_err(|e| e.to_string())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(EXIT_ERROR);
    }
}
