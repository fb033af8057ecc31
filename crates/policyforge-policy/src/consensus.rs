//! Consensus expression rendering.
//!
//! The consensus says which approvers must sign off. Every operator tests the
//! same inner predicate, an OR over the listed user ids:
//!
//! ```text
//! any   -> approvers.any(user, <inner>)
//! all   -> approvers.all(user, <inner>)
//! count -> approvers.count(user, <inner>) >= <threshold>
//! ```

use policyforge_core::{ConsensusConfig, ConsensusOperator};

/// Render the consensus expression.
///
/// An empty user list renders the empty string, which the assembler treats
/// as "no consensus". User ids are inserted as written.
///
/// # Example
///
/// ```
/// use policyforge_core::{ConsensusConfig, ConsensusOperator, UserEntry};
/// use policyforge_policy::render_consensus;
///
/// let config = ConsensusConfig {
///     operator: ConsensusOperator::Count,
///     users: vec![UserEntry::new("alice"), UserEntry::new("bob")],
///     count_threshold: Some(2),
/// };
///
/// assert_eq!(
///     render_consensus(&config),
///     "approvers.count(user, user.id == 'alice' || user.id == 'bob') >= 2"
/// );
/// ```
#[must_use]
pub fn render_consensus(config: &ConsensusConfig) -> String {
    if config.users.is_empty() {
        return String::new();
    }

    let inner = config
        .users
        .iter()
        .map(|user| format!("user.id == '{}'", user.user_id))
        .collect::<Vec<_>>()
        .join(" || ");

    match config.operator {
        ConsensusOperator::Any => format!("approvers.any(user, {inner})"),
        ConsensusOperator::All => format!("approvers.all(user, {inner})"),
        ConsensusOperator::Count => format!(
            "approvers.count(user, {inner}) >= {}",
            config.effective_threshold()
        ),
    }
}
