//! Solana condition rendering.
//!
//! Clauses are emitted in a fixed order: the instruction-count clause, the
//! transfer-count clause, then each row in list order. Transfer values are
//! always quoted, including `amount`; instruction-count values never are.

use policyforge_core::{
    ConditionConfig, CountClause, DialectKind, SolanaCondition, SolanaConditionConfig,
    SolanaInstructionCondition, SolanaQuantifier, SolanaTransferCondition,
};

use crate::dialect::{join_clauses, Dialect, FieldInfo};

const FIELDS: &[FieldInfo] = &[
    FieldInfo::new("transfers", "Native SOL Transfers"),
    FieldInfo::new("spl_transfers", "SPL Token Transfers"),
    FieldInfo::new("to", "Recipient (to)"),
    FieldInfo::new("from", "Sender (from)"),
    FieldInfo::new("amount", "Amount (lamports)"),
    FieldInfo::new("program_key", "Program Key").with_hint("Instruction program id"),
    FieldInfo::new("count", "Instruction Count").numeric(),
];

/// `solana.tx.instructions.count() <op> <n>`
#[must_use]
pub fn render_instruction_count(clause: &CountClause) -> String {
    format!(
        "solana.tx.instructions.count() {} {}",
        clause.operator, clause.value
    )
}

/// `solana.tx.transfers.count() <op> <n>`
#[must_use]
pub fn render_transfer_count(clause: &CountClause) -> String {
    format!(
        "solana.tx.transfers.count() {} {}",
        clause.operator, clause.value
    )
}

/// Render a quantified transfer row.
#[must_use]
pub fn render_transfer(row: &SolanaTransferCondition) -> String {
    let collection = row.kind.collection();
    let inner = format!("transfer.{} {} '{}'", row.field, row.operator, row.value);
    match row.quantifier {
        SolanaQuantifier::Count => format!(
            "{collection}.count(transfer, {inner}) >= {}",
            row.effective_count()
        ),
        quantifier => format!("{collection}.{quantifier}(transfer, {inner})"),
    }
}

/// Render an instruction row.
#[must_use]
pub fn render_instruction(row: &SolanaInstructionCondition) -> String {
    match row {
        SolanaInstructionCondition::ProgramKey {
            quantifier,
            operator,
            value,
        } => format!("solana.tx.instructions.{quantifier}(i, i.program_key {operator} '{value}')"),
        SolanaInstructionCondition::Count { operator, value } => {
            format!("solana.tx.instructions.count() {operator} {value}")
        }
    }
}

/// Render one row of either kind.
#[must_use]
pub fn render_row(row: &SolanaCondition) -> String {
    match row {
        SolanaCondition::Transfer(transfer) => render_transfer(transfer),
        SolanaCondition::Instruction(instruction) => render_instruction(instruction),
    }
}

/// Render the whole Solana payload.
///
/// # Example
///
/// ```
/// use policyforge_core::{CountClause, CountOperator, SolanaConditionConfig};
/// use policyforge_dialect::solana;
///
/// let config = SolanaConditionConfig {
///     conditions: vec!["transfers all to == ADDR".parse().unwrap()],
///     instruction_count: Some(CountClause::new(CountOperator::Eq, 1)),
///     transfer_count: None,
/// };
///
/// assert_eq!(
///     solana::render(&config),
///     "solana.tx.instructions.count() == 1 && \
///      solana.tx.transfers.all(transfer, transfer.to == 'ADDR')"
/// );
/// ```
#[must_use]
pub fn render(config: &SolanaConditionConfig) -> String {
    let counts = config
        .instruction_count
        .iter()
        .map(render_instruction_count)
        .chain(config.transfer_count.iter().map(render_transfer_count));
    join_clauses(counts.chain(config.conditions.iter().map(render_row)))
}

/// The Solana dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolanaDialect;

impl Dialect for SolanaDialect {
    fn kind(&self) -> DialectKind {
        DialectKind::Solana
    }

    fn label(&self) -> &'static str {
        "Solana"
    }

    fn doc_url(&self) -> &'static str {
        "https://docs.turnkey.com/concepts/policies/examples#solana-policies"
    }

    fn fields(&self) -> &'static [FieldInfo] {
        FIELDS
    }

    fn render(&self, condition: &ConditionConfig) -> Option<String> {
        match condition {
            ConditionConfig::Solana(config) => Some(render(config)),
            _ => None,
        }
    }
}
