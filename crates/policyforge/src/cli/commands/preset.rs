//! # Preset Command
//!
//! ```text
//! policyforge preset list [--category solana]
//! policyforge preset show eth-value-limit [--editable] [--compact]
//! ```

use std::fmt::{self, Write as _};

use policyforge_core::{Config, PresetError};
use policyforge_policy::{build_policy, format_policy_json, presets_by_category, require_preset, Preset};

use crate::cli::args::PresetAction;
use crate::cli::commands::output::write_stdout;

/// Errors from the preset command.
#[derive(Debug, thiserror::Error)]
pub enum PresetCommandError {
    /// Unknown preset id or category.
    #[error(transparent)]
    Preset(#[from] PresetError),

    /// The editable configuration could not be serialized.
    #[error("Failed to serialize preset configuration: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The preset listing could not be formatted.
    #[error("Failed to format preset list")]
    Format(#[from] fmt::Error),
}

/// The `policyforge preset` command handler.
#[derive(Debug, Clone)]
pub struct PresetCommand {
    /// The action to perform.
    pub action: PresetAction,
}

impl PresetCommand {
    /// Create a new `PresetCommand`.
    #[must_use]
    pub const fn new(action: PresetAction) -> Self {
        Self { action }
    }

    /// Run the preset command.
    ///
    /// # Errors
    ///
    /// Returns [`PresetCommandError::Preset`] for an unknown id or category.
    pub fn run(&self, config: &Config) -> Result<(), PresetCommandError> {
        let text = self.render(config)?;
        write_stdout(&text);
        Ok(())
    }

    /// The text this command prints.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run).
    pub fn render(&self, config: &Config) -> Result<String, PresetCommandError> {
        match self.action {
            PresetAction::List { ref category } => Ok(format_list(&presets_by_category(category)?)?),
            PresetAction::Show {
                ref id,
                editable,
                compact,
            } => {
                let preset = require_preset(id)?;
                let pretty = config.output.pretty && !compact;
                if editable {
                    let rendered = if pretty {
                        serde_json::to_string_pretty(&preset.config)?
                    } else {
                        serde_json::to_string(&preset.config)?
                    };
                    Ok(rendered)
                } else {
                    Ok(format_policy_json(&build_policy(&preset.config), pretty))
                }
            }
        }
    }
}

/// One block per preset: id, category and name, then the description and
/// documentation link indented below.
///
/// # Errors
///
/// Returns [`fmt::Error`] if a line cannot be written.
pub fn format_list(presets: &[&Preset]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for preset in presets {
        write_entry(&mut out, preset)?;
    }
    if presets.is_empty() {
        out.push_str("No presets found.\n");
    }
    Ok(out.trim_end().to_string())
}

fn write_entry(out: &mut String, preset: &Preset) -> fmt::Result {
    writeln!(
        out,
        "{:<24} {:<9} {}",
        preset.id,
        preset.category.as_str(),
        preset.name
    )?;
    writeln!(out, "    {}", preset.description)?;
    writeln!(out, "    {}", preset.doc_url)
}
