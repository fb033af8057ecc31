//! Ethereum / EVM condition rendering.
//!
//! Rows compare fields of `eth.tx`. Numeric fields (`value`, `gas`,
//! `gas_price`, `chain_id`) render their value unquoted; every other field,
//! and every `startsWith` test, renders it single-quoted.
//!
//! # Example
//!
//! ```
//! use policyforge_core::EthereumCondition;
//! use policyforge_dialect::ethereum;
//!
//! let rows: Vec<EthereumCondition> = vec![
//!     "to == 0xABC".parse().unwrap(),
//!     "value <= 1000000000000000000".parse().unwrap(),
//! ];
//!
//! assert_eq!(
//!     ethereum::render(&rows),
//!     "eth.tx.to == '0xABC' && eth.tx.value <= 1000000000000000000"
//! );
//! ```

use policyforge_core::{ConditionConfig, DialectKind, EthereumCondition, EthereumOperator};

use crate::dialect::{join_clauses, Dialect, FieldInfo};

const FIELDS: &[FieldInfo] = &[
    FieldInfo::new("to", "Recipient Address (to)").with_hint("The recipient Ethereum address"),
    FieldInfo::new("value", "Value (wei)")
        .with_hint("Transaction value in wei (1 ETH = 1e18 wei)")
        .numeric(),
    FieldInfo::new("chain_id", "Chain ID")
        .with_hint("1 = Mainnet, 137 = Polygon, 42161 = Arbitrum")
        .numeric(),
    FieldInfo::new("gas", "Gas Limit")
        .with_hint("Maximum gas units for the transaction")
        .numeric(),
    FieldInfo::new("gas_price", "Gas Price")
        .with_hint("Gas price in wei")
        .numeric(),
    FieldInfo::new("data", "Call Data").with_hint("Transaction call data (hex encoded)"),
];

/// Render one row.
#[must_use]
pub fn render_row(row: &EthereumCondition) -> String {
    let path = format!("eth.tx.{}", row.field);
    match row.operator {
        EthereumOperator::StartsWith => format!("{path}.startsWith('{}')", row.value),
        op if row.field.is_numeric() => format!("{path} {op} {}", row.value),
        op => format!("{path} {op} '{}'", row.value),
    }
}

/// Render all rows, AND-joined in order.
#[must_use]
pub fn render(rows: &[EthereumCondition]) -> String {
    join_clauses(rows.iter().map(render_row))
}

/// The Ethereum dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct EthereumDialect;

impl Dialect for EthereumDialect {
    fn kind(&self) -> DialectKind {
        DialectKind::Ethereum
    }

    fn label(&self) -> &'static str {
        "Ethereum / EVM"
    }

    fn doc_url(&self) -> &'static str {
        "https://docs.turnkey.com/concepts/policies/examples#ethereum-policies"
    }

    fn fields(&self) -> &'static [FieldInfo] {
        FIELDS
    }

    fn render(&self, condition: &ConditionConfig) -> Option<String> {
        match condition {
            ConditionConfig::Ethereum { conditions } => Some(render(conditions)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use policyforge_core::EthereumField;

    fn row(field: EthereumField, operator: EthereumOperator, value: &str) -> EthereumCondition {
        EthereumCondition {
            field,
            operator,
            value: value.to_string(),
        }
    }

    #[test]
    fn test_numeric_fields_render_unquoted() {
        for field in [
            EthereumField::Value,
            EthereumField::Gas,
            EthereumField::GasPrice,
            EthereumField::ChainId,
        ] {
            let rendered = render_row(&row(field, EthereumOperator::Gt, "10"));
            assert_eq!(rendered, format!("eth.tx.{field} > 10"));
        }
    }

    #[test]
    fn test_string_fields_render_quoted() {
        assert_eq!(
            render_row(&row(EthereumField::To, EthereumOperator::Ne, "0xabc")),
            "eth.tx.to != '0xabc'"
        );
        assert_eq!(
            render_row(&row(EthereumField::Data, EthereumOperator::Eq, "")),
            "eth.tx.data == ''"
        );
    }

    #[test]
    fn test_starts_with_always_quotes() {
        assert_eq!(
            render_row(&row(EthereumField::Data, EthereumOperator::StartsWith, "0xa9059cbb")),
            "eth.tx.data.startsWith('0xa9059cbb')"
        );
        assert_eq!(
            render_row(&row(EthereumField::Value, EthereumOperator::StartsWith, "1")),
            "eth.tx.value.startsWith('1')"
        );
    }

    #[test]
    fn test_render_joins_in_order() {
        let rows = vec![
            row(EthereumField::ChainId, EthereumOperator::Eq, "1"),
            row(EthereumField::To, EthereumOperator::Eq, "0xA"),
        ];
        assert_eq!(render(&rows), "eth.tx.chain_id == 1 && eth.tx.to == '0xA'");
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn test_dialect_renders_only_its_variant() {
        let dialect = EthereumDialect;
        assert_eq!(dialect.id(), "ethereum");
        assert!(dialect
            .render(&ConditionConfig::empty(DialectKind::Tron))
            .is_none());
        assert_eq!(
            dialect.render(&ConditionConfig::default()),
            Some(String::new())
        );
    }

    #[test]
    fn test_fields_match_numeric_flags() {
        for info in EthereumDialect.fields() {
            let field: EthereumField = info.name.parse().unwrap();
            assert_eq!(field.is_numeric(), info.numeric, "{}", info.name);
        }
    }
}
