//! Immutable editing state for a policy form.
//!
//! A [`PolicyEditor`] owns one [`PolicyConfig`]. Every change goes through
//! [`PolicyEditor::apply`], which consumes the editor and returns the next
//! one; there is no other mutation path. [`PolicyEditor::document`] renders
//! the current state.
//!
//! # Example
//!
//! ```
//! use policyforge_core::{ConsensusOperator, DialectKind};
//! use policyforge_policy::{EditAction, PolicyEditor};
//!
//! let editor = PolicyEditor::new()
//!     .apply(EditAction::SetName("Treasury".to_string()))
//!     .apply(EditAction::AddUser { user_id: "alice".to_string() })
//!     .apply(EditAction::AddUser { user_id: "bob".to_string() })
//!     .apply(EditAction::SetConsensusOperator(ConsensusOperator::Count))
//!     .apply(EditAction::SetThreshold(2))
//!     .apply(EditAction::AddEthereum("chain_id == 1".parse().unwrap()));
//!
//! let document = editor.document();
//! assert_eq!(
//!     document.consensus.as_deref(),
//!     Some("approvers.count(user, user.id == 'alice' || user.id == 'bob') >= 2")
//! );
//! assert_eq!(document.condition.as_deref(), Some("eth.tx.chain_id == 1"));
//! assert_eq!(editor.dialect(), Some(DialectKind::Ethereum));
//! ```

use policyforge_core::{
    ActivityCondition, ConditionConfig, ConsensusConfig, ConsensusOperator, CountClause,
    DialectKind, EthereumCondition, PolicyConfig, PolicyDocument, PolicyEffect, PresetResult,
    SolanaCondition, TronCondition, UserEntry,
};

use crate::builder::build_policy;
use crate::presets::require_preset;

/// One edit to the policy form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    /// Set the policy name.
    SetName(String),
    /// Set allow / deny.
    SetEffect(PolicyEffect),
    /// Set the notes.
    SetNotes(String),
    /// Set the consensus quantifier.
    SetConsensusOperator(ConsensusOperator),
    /// Append a user with a fresh row key.
    AddUser {
        /// Platform user id.
        user_id: String,
    },
    /// Change the id of the user with row key `key`.
    UpdateUser {
        /// Row key.
        key: String,
        /// New platform user id.
        user_id: String,
    },
    /// Remove the user with row key `key`.
    RemoveUser {
        /// Row key.
        key: String,
    },
    /// Set the `count` threshold.
    SetThreshold(u32),
    /// Switch the condition dialect.
    SelectDialect(DialectKind),
    /// Append an Ethereum row.
    AddEthereum(EthereumCondition),
    /// Append a Solana row.
    AddSolana(SolanaCondition),
    /// Append a Tron row.
    AddTron(TronCondition),
    /// Append an activity row.
    AddActivity(ActivityCondition),
    /// Remove the structured row at an index; out of range is a no-op.
    RemoveRow(usize),
    /// Set or clear the Solana instruction-count clause.
    SetInstructionCount(Option<CountClause>),
    /// Set or clear the Solana transfer-count clause.
    SetTransferCount(Option<CountClause>),
    /// Set the raw expression, hiding any structured rows behind it.
    ///
    /// An empty expression behaves like [`ClearRaw`](Self::ClearRaw).
    SetRaw(String),
    /// Leave raw mode, restoring the structured rows it was hiding.
    ClearRaw,
    /// Replace the whole state with a preset's configuration.
    LoadPreset(String),
    /// Return to the blank form.
    Reset,
}

/// Editing state for one policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyEditor {
    config: PolicyConfig,
    /// Structured condition kept while a raw expression overrides it.
    hidden: Option<ConditionConfig>,
}

impl PolicyEditor {
    /// Editor over the blank form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current configuration.
    #[must_use]
    pub const fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// The current condition dialect, if a condition is set.
    #[must_use]
    pub fn dialect(&self) -> Option<DialectKind> {
        self.config.condition.as_ref().map(ConditionConfig::kind)
    }

    /// Render the current state.
    #[must_use]
    pub fn document(&self) -> PolicyDocument {
        build_policy(&self.config)
    }

    /// Apply an action and return the next state.
    ///
    /// Unknown preset ids leave the state unchanged; use
    /// [`try_apply`](Self::try_apply) to observe the failure.
    #[must_use]
    pub fn apply(self, action: EditAction) -> Self {
        match self.clone().try_apply(action) {
            Ok(next) => next,
            Err(err) => {
                tracing::warn!(error = %err, "edit ignored");
                self
            }
        }
    }

    /// Apply an action, reporting preset lookup failures.
    ///
    /// # Errors
    ///
    /// Returns [`policyforge_core::PresetError::NotFound`] for
    /// [`EditAction::LoadPreset`] with an unknown id.
    pub fn try_apply(mut self, action: EditAction) -> PresetResult<Self> {
        tracing::debug!(?action, "applying edit");
        let Self { config, hidden } = &mut self;

        match action {
            EditAction::SetName(name) => config.policy_name = name,
            EditAction::SetEffect(effect) => config.effect = effect,
            EditAction::SetNotes(notes) => config.notes = Some(notes),
            EditAction::SetConsensusOperator(operator) => consensus_mut(config).operator = operator,
            EditAction::AddUser { user_id } => {
                consensus_mut(config).users.push(UserEntry::new(user_id));
            }
            EditAction::UpdateUser { key, user_id } => {
                if let Some(user) = consensus_mut(config)
                    .users
                    .iter_mut()
                    .find(|user| user.key == key)
                {
                    user.user_id = user_id;
                }
            }
            EditAction::RemoveUser { key } => {
                consensus_mut(config).users.retain(|user| user.key != key);
            }
            EditAction::SetThreshold(threshold) => {
                consensus_mut(config).count_threshold = Some(threshold);
            }
            EditAction::SelectDialect(DialectKind::Raw) => enter_raw(config, hidden, None),
            EditAction::SelectDialect(kind) => {
                condition_for(config, hidden, kind);
            }
            EditAction::AddEthereum(row) => {
                if let ConditionConfig::Ethereum { conditions } =
                    condition_for(config, hidden, DialectKind::Ethereum)
                {
                    conditions.push(row);
                }
            }
            EditAction::AddSolana(row) => {
                if let ConditionConfig::Solana(solana) =
                    condition_for(config, hidden, DialectKind::Solana)
                {
                    solana.conditions.push(row);
                }
            }
            EditAction::AddTron(row) => {
                if let ConditionConfig::Tron { conditions } =
                    condition_for(config, hidden, DialectKind::Tron)
                {
                    conditions.push(row);
                }
            }
            EditAction::AddActivity(row) => {
                if let ConditionConfig::Activity { conditions } =
                    condition_for(config, hidden, DialectKind::Activity)
                {
                    conditions.push(row);
                }
            }
            EditAction::RemoveRow(index) => remove_row(config, index),
            EditAction::SetInstructionCount(clause) => {
                if let ConditionConfig::Solana(solana) =
                    condition_for(config, hidden, DialectKind::Solana)
                {
                    solana.instruction_count = clause;
                }
            }
            EditAction::SetTransferCount(clause) => {
                if let ConditionConfig::Solana(solana) =
                    condition_for(config, hidden, DialectKind::Solana)
                {
                    solana.transfer_count = clause;
                }
            }
            EditAction::SetRaw(text) if text.is_empty() => leave_raw(config, hidden),
            EditAction::SetRaw(text) => enter_raw(config, hidden, Some(text)),
            EditAction::ClearRaw => leave_raw(config, hidden),
            EditAction::LoadPreset(id) => {
                let preset = require_preset(&id)?;
                tracing::info!(preset = preset.id, "loaded preset");
                *config = preset.config.clone();
                *hidden = None;
            }
            EditAction::Reset => {
                *config = PolicyConfig::default();
                *hidden = None;
            }
        }

        Ok(self)
    }
}

fn consensus_mut(config: &mut PolicyConfig) -> &mut ConsensusConfig {
    config.consensus.get_or_insert_with(ConsensusConfig::default)
}

fn is_raw(config: &PolicyConfig) -> bool {
    matches!(config.condition, Some(ConditionConfig::Raw { .. }))
}

/// Switch to raw, stashing a structured condition. `None` keeps the current
/// raw text, or starts it empty.
fn enter_raw(
    config: &mut PolicyConfig,
    hidden: &mut Option<ConditionConfig>,
    expression: Option<String>,
) {
    let current = match config.condition.take() {
        Some(ConditionConfig::Raw { expression }) => expression,
        structured => {
            *hidden = structured;
            String::new()
        }
    };
    config.condition = Some(ConditionConfig::Raw {
        expression: expression.unwrap_or(current),
    });
}

/// Drop the raw expression and bring back the stashed structured condition.
fn leave_raw(config: &mut PolicyConfig, hidden: &mut Option<ConditionConfig>) {
    if is_raw(config) {
        config.condition = hidden.take();
    }
}

/// Switching to another dialect starts it empty; reselecting keeps rows.
fn select_dialect(config: &mut PolicyConfig, kind: DialectKind) {
    let current = config.condition.as_ref().map(ConditionConfig::kind);
    if current != Some(kind) {
        config.condition = Some(ConditionConfig::empty(kind));
    }
}

/// The structured condition, switched to `kind` first if needed. Leaving raw
/// restores the hidden rows before the switch.
fn condition_for<'a>(
    config: &'a mut PolicyConfig,
    hidden: &mut Option<ConditionConfig>,
    kind: DialectKind,
) -> &'a mut ConditionConfig {
    leave_raw(config, hidden);
    select_dialect(config, kind);
    config
        .condition
        .get_or_insert_with(|| ConditionConfig::empty(kind))
}

fn remove_row(config: &mut PolicyConfig, index: usize) {
    fn remove<T>(rows: &mut Vec<T>, index: usize) {
        if index < rows.len() {
            rows.remove(index);
        }
    }

    match &mut config.condition {
        Some(ConditionConfig::Ethereum { conditions }) => remove(conditions, index),
        Some(ConditionConfig::Solana(solana)) => remove(&mut solana.conditions, index),
        Some(ConditionConfig::Tron { conditions }) => remove(conditions, index),
        Some(ConditionConfig::Activity { conditions }) => remove(conditions, index),
        Some(ConditionConfig::Raw { .. }) | None => {}
    }
}
