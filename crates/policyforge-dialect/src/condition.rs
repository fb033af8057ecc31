//! Dispatch from a [`ConditionConfig`] to its dialect renderer.

use policyforge_core::{ConditionConfig, DialectKind};

use crate::{ActivityDialect, Dialect, EthereumDialect, RawDialect, SolanaDialect, TronDialect};

/// The built-in dialect that renders `kind`.
#[must_use]
pub fn dialect_for(kind: DialectKind) -> &'static dyn Dialect {
    match kind {
        DialectKind::Ethereum => &EthereumDialect,
        DialectKind::Solana => &SolanaDialect,
        DialectKind::Tron => &TronDialect,
        DialectKind::Activity => &ActivityDialect,
        DialectKind::Raw => &RawDialect,
    }
}

/// Render a condition to an expression string.
///
/// Total over every variant. An empty result means "no condition" and is
/// suppressed by the policy assembler.
///
/// # Example
///
/// ```
/// use policyforge_core::ConditionConfig;
/// use policyforge_dialect::render_condition;
///
/// let raw = ConditionConfig::Raw {
///     expression: "activity.type == 'ACTIVITY_TYPE_CREATE_WALLET'".to_string(),
/// };
/// assert_eq!(
///     render_condition(&raw),
///     "activity.type == 'ACTIVITY_TYPE_CREATE_WALLET'"
/// );
/// assert_eq!(render_condition(&ConditionConfig::default()), "");
/// ```
#[must_use]
pub fn render_condition(condition: &ConditionConfig) -> String {
    let rendered = dialect_for(condition.kind())
        .render(condition)
        .unwrap_or_default();
    tracing::trace!(
        dialect = %condition.kind(),
        rows = condition.row_count(),
        empty = rendered.is_empty(),
        "rendered condition"
    );
    rendered
}
