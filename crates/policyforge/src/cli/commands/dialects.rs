//! # Dialects Command
//!
//! `policyforge dialects [ID]` prints every condition dialect, or just the
//! one named, with its fields, hints, example values and documentation link.

use std::fmt::{self, Write as _};

use policyforge_dialect::{Dialect, DialectRegistry};

use crate::cli::commands::output::write_stdout;

/// Errors from the dialects command.
#[derive(Debug, thiserror::Error)]
pub enum DialectsError {
    /// No dialect has the requested id.
    #[error("Unknown dialect '{id}' (expected one of: {known})")]
    UnknownDialect {
        /// The id that was requested.
        id: String,
        /// Registered ids, comma separated.
        known: String,
    },

    /// The description could not be formatted.
    #[error("Failed to format dialect description")]
    Format(#[from] fmt::Error),
}

/// The `policyforge dialects` command handler.
#[derive(Debug, Clone, Default)]
pub struct DialectsCommand {
    registry: DialectRegistry,
    id: Option<String>,
}

impl DialectsCommand {
    /// Command over the built-in dialects, optionally narrowed to one id.
    #[must_use]
    pub fn new(id: Option<String>) -> Self {
        Self {
            registry: DialectRegistry::new(),
            id,
        }
    }

    /// Print the descriptions.
    ///
    /// # Errors
    ///
    /// Returns [`DialectsError::UnknownDialect`] if the requested id is not registered.
    pub fn run(&self) -> Result<(), DialectsError> {
        write_stdout(&self.render()?);
        Ok(())
    }

    /// The text [`run`](Self::run) prints.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run).
    pub fn render(&self) -> Result<String, DialectsError> {
        let mut out = String::new();

        if let Some(ref id) = self.id {
            let dialect = self
                .registry
                .get(id)
                .ok_or_else(|| DialectsError::UnknownDialect {
                    id: id.clone(),
                    known: self.registry.ids().join(", "),
                })?;
            describe(&mut out, dialect)?;
            return Ok(out);
        }

        for (i, dialect) in self.registry.iter().enumerate() {
            if i > 0 {
                out.push_str("\n\n");
            }
            describe(&mut out, dialect)?;
        }
        Ok(out)
    }
}

fn describe(out: &mut String, dialect: &dyn Dialect) -> fmt::Result {
    write!(
        out,
        "{} ({})\n  docs: {}",
        dialect.label(),
        dialect.id(),
        dialect.doc_url()
    )?;

    for field in dialect.fields() {
        let quoting = if field.numeric { "unquoted" } else { "quoted" };
        write!(out, "\n  {:<18} {:<26} {quoting}", field.name, field.label)?;
        if let Some(hint) = field.hint {
            write!(out, "  ({hint})")?;
        }
    }

    let examples = dialect.examples();
    if !examples.is_empty() {
        write!(out, "\n  examples:")?;
        for example in examples {
            write!(out, "\n    {example}")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_render_lists_every_dialect_in_order() {
        let text = DialectsCommand::default().render().unwrap();
        let headers: Vec<&str> = text
            .lines()
            .filter(|line| !line.is_empty() && !line.starts_with(' '))
            .collect();
        assert_eq!(
            headers,
            vec![
                "Ethereum / EVM (ethereum)",
                "Solana (solana)",
                "Tron (tron)",
                "Activity-based (activity)",
                "Raw Expression (raw)",
            ]
        );
    }

    #[test]
    fn test_numeric_fields_are_marked() {
        let text = DialectsCommand::default().render().unwrap();
        let amount = text
            .lines()
            .find(|line| line.contains("Amount (sun)"))
            .unwrap();
        assert!(amount.contains("unquoted"));
    }

    #[test]
    fn test_single_dialect() {
        let text = DialectsCommand::new(Some("raw".to_string()))
            .render()
            .unwrap();
        assert!(text.starts_with("Raw Expression (raw)\n  docs: https://docs.turnkey.com"));
        assert!(text.contains("examples:"));
        assert!(!text.contains("Tron"));
    }

    #[test]
    fn test_unknown_dialect() {
        let err = DialectsCommand::new(Some("bitcoin".to_string()))
            .render()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown dialect 'bitcoin' (expected one of: ethereum, solana, tron, activity, raw)"
        );
    }
}
