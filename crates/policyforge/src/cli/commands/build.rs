//! # Build Command
//!
//! `policyforge build <FILE|->` reads a saved policy configuration and
//! prints its rendered document.
//!
//! ## Usage
//!
//! ```text
//! policyforge build policy.json              # JSON configuration
//! policyforge build policy.toml --compact    # TOML, single-line output
//! cat policy.json | policyforge build -      # read stdin
//! ```

use std::io::Read;
use std::path::Path;

use policyforge_core::{Config, ParseError, PolicyConfig};
use policyforge_policy::build_policy;

use crate::cli::args::OutputArgs;
use crate::cli::commands::output::{emit_document, OutputError};

/// Input name that selects stdin.
pub const STDIN: &str = "-";

/// Errors that can occur while building a document.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The input could not be read.
    #[error("Failed to read {input}: {source}")]
    Read {
        /// File name or `-`.
        input: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The input is not a valid policy configuration.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The document could not be written.
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// The `policyforge build` command handler.
#[derive(Debug, Clone)]
pub struct BuildCommand {
    /// File name, or [`STDIN`].
    pub input: String,
    /// Output options.
    pub output: OutputArgs,
}

impl BuildCommand {
    /// Create a new `BuildCommand`.
    #[must_use]
    pub const fn new(input: String, output: OutputArgs) -> Self {
        Self { input, output }
    }

    /// Read, render, and emit.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] if the input cannot be read or parsed, or the
    /// output cannot be written.
    pub fn run(&self, config: &Config) -> Result<(), BuildError> {
        let policy = self.load()?;
        let document = build_policy(&policy);
        emit_document(&document, &self.output, config)?;
        Ok(())
    }

    /// Read and parse the input configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Read`] or [`BuildError::Parse`].
    pub fn load(&self) -> Result<PolicyConfig, BuildError> {
        let content = self.read_input()?;
        tracing::debug!(input = %self.input, bytes = content.len(), "read policy configuration");
        Ok(parse_config(&self.input, &content)?)
    }

    fn read_input(&self) -> Result<String, BuildError> {
        let read_err = |source| BuildError::Read {
            input: self.input.clone(),
            source,
        };

        if self.input == STDIN {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .map_err(read_err)?;
            Ok(content)
        } else {
            std::fs::read_to_string(&self.input).map_err(read_err)
        }
    }
}

/// Parse `content` as TOML when `input` ends in `.toml`, otherwise as JSON.
///
/// # Errors
///
/// Returns [`ParseError::InvalidDocument`] for malformed content.
pub fn parse_config(input: &str, content: &str) -> Result<PolicyConfig, ParseError> {
    let is_toml = Path::new(input)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        PolicyConfig::from_toml_str(content)
    } else {
        PolicyConfig::from_json_str(content)
    }
}
