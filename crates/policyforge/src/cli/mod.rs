//! # CLI Module
//!
//! Command-line interface for `policyforge`.
//!
//! ## Module Structure
//!
//! - [`args`] - Argument parsing and CLI structure definitions
//! - [`commands`] - Command handler implementations
//!
//! ## Usage
//!
//! ```no_run
//! use clap::Parser;
//! use policyforge::cli::{Cli, Commands};
//!
//! let cli = Cli::parse();
//!
//! match cli.command {
//!     Commands::Dialects { .. } => {
//!         // Print the dialect table
//!     }
//!     _ => {}
//! }
//! ```

pub mod args;
pub mod commands;

// Re-export main types for convenience
pub use args::{Cli, Commands, ComposeArgs, ConfigAction, OutputArgs, PresetAction};
