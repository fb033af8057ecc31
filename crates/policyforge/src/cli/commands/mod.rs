//! # CLI Command Handlers
//!
//! ## Module Structure
//!
//! - [`build`] - Render a policy configuration file
//! - [`compose`] - Build a policy from flags and presets
//! - [`preset`] - Browse the preset catalog
//! - [`dialects`] - Describe the condition dialects
//! - [`config`] - Configuration management
//! - [`output`] - Writing documents to stdout, files, and the download directory
//!
//! Command handlers return `Result<(), XError>`; `main` turns errors into
//! [`exit_codes::EXIT_ERROR`] and a message on stderr.

pub mod build;
pub mod compose;
pub mod config;
pub mod dialects;
pub mod exit_codes;
pub mod output;
pub mod preset;

// Re-export command types for convenience
pub use build::{BuildCommand, BuildError};
pub use compose::{ComposeCommand, ComposeError};
pub use config::{ConfigCommand, ConfigCommandError};
pub use dialects::{DialectsCommand, DialectsError};
pub use output::{emit_document, OutputError};
pub use preset::{PresetCommand, PresetCommandError};
