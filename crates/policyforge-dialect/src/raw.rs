//! Raw expression override.
//!
//! A non-empty raw expression is emitted verbatim and bypasses every
//! structured row. Nothing is trimmed or validated.

use policyforge_core::{ConditionConfig, DialectKind};

use crate::dialect::{Dialect, FieldInfo};

/// The raw-expression dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawDialect;

impl Dialect for RawDialect {
    fn kind(&self) -> DialectKind {
        DialectKind::Raw
    }

    fn label(&self) -> &'static str {
        "Raw Expression"
    }

    fn doc_url(&self) -> &'static str {
        "https://docs.turnkey.com/concepts/policies/language"
    }

    fn fields(&self) -> &'static [FieldInfo] {
        &[]
    }

    fn examples(&self) -> &'static [&'static str] {
        &["eth.tx.to == '0x...' && eth.tx.value <= 1000000000000000000"]
    }

    fn render(&self, condition: &ConditionConfig) -> Option<String> {
        match condition {
            ConditionConfig::Raw { expression } => Some(expression.clone()),
            _ => None,
        }
    }
}
