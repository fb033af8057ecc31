//! # Compose Command
//!
//! `policyforge compose` drives the [`PolicyEditor`] from flags, one
//! [`EditAction`] per flag value, in a fixed order: the preset, then
//! metadata, consensus, and finally condition rows.
//!
//! ## Usage
//!
//! ```text
//! policyforge compose --preset eth-value-limit --name "Treasury cap"
//! policyforge compose --operator count --threshold 2 \
//!     --user alice --user bob --user carol \
//!     --ethereum "to == 0xabc" --ethereum "value <= 1000"
//! policyforge compose --raw "activity.type == 'ACTIVITY_TYPE_CREATE_USERS'" --effect deny
//! ```

use policyforge_core::{Config, DialectKind, PresetError};
use policyforge_policy::{EditAction, PolicyEditor};

use crate::cli::args::ComposeArgs;
use crate::cli::commands::output::{emit_document, emit_text, OutputError};

/// Errors that can occur while composing.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    /// Row flags for more than one dialect were given.
    #[error("Conflicting condition flags: {first} and {second} rows cannot be combined")]
    ConflictingDialects {
        /// First dialect named by the flags.
        first: DialectKind,
        /// Second dialect named by the flags.
        second: DialectKind,
    },

    /// The preset does not exist.
    #[error(transparent)]
    Preset(#[from] PresetError),

    /// The result could not be written.
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// The `policyforge compose` command handler.
#[derive(Debug, Clone)]
pub struct ComposeCommand {
    /// Parsed flags.
    pub args: ComposeArgs,
}

impl ComposeCommand {
    /// Create a new `ComposeCommand`.
    #[must_use]
    pub const fn new(args: ComposeArgs) -> Self {
        Self { args }
    }

    /// Compose and emit the document, or the configuration with `--show-config`.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError`] for conflicting flags, an unknown preset, or
    /// an output failure.
    pub fn run(&self, config: &Config) -> Result<(), ComposeError> {
        let editor = self.compose()?;

        if self.args.show_config {
            let policy = editor.config();
            let rendered = if self.args.output.compact || !config.output.pretty {
                serde_json::to_string(policy)
            } else {
                serde_json::to_string_pretty(policy)
            };
            // PolicyConfig holds only strings, integers and unit enums.
            emit_text(&rendered.unwrap_or_default(), self.args.output.output.as_deref())?;
            return Ok(());
        }

        emit_document(&editor.document(), &self.args.output, config)?;
        Ok(())
    }

    /// Apply every action to a blank editor.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::ConflictingDialects`] or
    /// [`ComposeError::Preset`].
    pub fn compose(&self) -> Result<PolicyEditor, ComposeError> {
        let actions = edit_actions(&self.args)?;
        tracing::debug!(count = actions.len(), "composing policy");
        Ok(actions
            .into_iter()
            .try_fold(PolicyEditor::new(), PolicyEditor::try_apply)?)
    }
}

/// Translate flags into editor actions.
///
/// # Errors
///
/// Returns [`ComposeError::ConflictingDialects`] if row flags name more
/// than one dialect.
pub fn edit_actions(args: &ComposeArgs) -> Result<Vec<EditAction>, ComposeError> {
    check_single_dialect(args)?;

    let mut actions = Vec::new();

    if let Some(ref id) = args.preset {
        actions.push(EditAction::LoadPreset(id.clone()));
    }
    if let Some(ref name) = args.name {
        actions.push(EditAction::SetName(name.clone()));
    }
    if let Some(effect) = args.effect {
        actions.push(EditAction::SetEffect(effect));
    }
    if let Some(ref notes) = args.notes {
        actions.push(EditAction::SetNotes(notes.clone()));
    }

    if let Some(operator) = args.operator {
        actions.push(EditAction::SetConsensusOperator(operator));
    }
    actions.extend(args.users.iter().map(|user_id| EditAction::AddUser {
        user_id: user_id.clone(),
    }));
    if let Some(threshold) = args.threshold {
        actions.push(EditAction::SetThreshold(threshold));
    }

    actions.extend(args.ethereum.iter().cloned().map(EditAction::AddEthereum));

    if let Some(clause) = args.instruction_count {
        actions.push(EditAction::SetInstructionCount(Some(clause)));
    }
    if let Some(clause) = args.transfer_count {
        actions.push(EditAction::SetTransferCount(Some(clause)));
    }
    actions.extend(
        args.solana_transfer
            .iter()
            .cloned()
            .map(|row| EditAction::AddSolana(row.into())),
    );
    actions.extend(
        args.solana_instruction
            .iter()
            .cloned()
            .map(|row| EditAction::AddSolana(row.into())),
    );

    actions.extend(args.tron.iter().cloned().map(EditAction::AddTron));
    actions.extend(args.activity.iter().cloned().map(EditAction::AddActivity));

    if let Some(ref expression) = args.raw {
        actions.push(EditAction::SetRaw(expression.clone()));
    }

    Ok(actions)
}

/// Dialects named by the condition flags, in flag order.
fn requested_dialects(args: &ComposeArgs) -> Vec<DialectKind> {
    let solana = !args.solana_transfer.is_empty()
        || !args.solana_instruction.is_empty()
        || args.instruction_count.is_some()
        || args.transfer_count.is_some();

    [
        (!args.ethereum.is_empty(), DialectKind::Ethereum),
        (solana, DialectKind::Solana),
        (!args.tron.is_empty(), DialectKind::Tron),
        (!args.activity.is_empty(), DialectKind::Activity),
        (args.raw.is_some(), DialectKind::Raw),
    ]
    .into_iter()
    .filter_map(|(requested, kind)| requested.then_some(kind))
    .collect()
}

fn check_single_dialect(args: &ComposeArgs) -> Result<(), ComposeError> {
    match requested_dialects(args).as_slice() {
        [first, second, ..] => Err(ComposeError::ConflictingDialects {
            first: *first,
            second: *second,
        }),
        _ => Ok(()),
    }
}
