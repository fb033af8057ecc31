//! Tron condition rendering.
//!
//! Every row tests the first contract of the transaction,
//! `tron.tx.contract[0]`. A row with a field compares that field (only
//! `amount` is unquoted); a row with only a contract type tests `.type`; a row
//! with neither contributes nothing. When a row carries both, the field
//! comparison is rendered and the contract type is not, so presets express
//! the type test as its own row.

use policyforge_core::{ConditionConfig, DialectKind, TronCondition};

use crate::dialect::{join_clauses, Dialect, FieldInfo};

const CONTRACT: &str = "tron.tx.contract[0]";

const FIELDS: &[FieldInfo] = &[
    FieldInfo::new("owner_address", "Owner Address"),
    FieldInfo::new("to_address", "Recipient Address"),
    FieldInfo::new("amount", "Amount (sun)").numeric(),
    FieldInfo::new("contract_address", "Contract Address"),
];

/// Render one row, or `None` if it has neither a field nor a contract type.
///
/// # Example
///
/// ```
/// use policyforge_core::{TronCondition, TronContractType};
/// use policyforge_dialect::tron;
///
/// let row = TronCondition::contract(TronContractType::TransferContract);
/// assert_eq!(
///     tron::render_row(&row).as_deref(),
///     Some("tron.tx.contract[0].type == 'TransferContract'")
/// );
/// ```
#[must_use]
pub fn render_row(row: &TronCondition) -> Option<String> {
    match (row.field, row.contract_type) {
        (Some(field), _) if field.is_numeric() => Some(format!(
            "{CONTRACT}.{field} {} {}",
            row.operator, row.value
        )),
        (Some(field), _) => Some(format!(
            "{CONTRACT}.{field} {} '{}'",
            row.operator, row.value
        )),
        (None, Some(contract_type)) => Some(format!("{CONTRACT}.type == '{contract_type}'")),
        (None, None) => None,
    }
}

/// Render all rows, AND-joined in order.
#[must_use]
pub fn render(rows: &[TronCondition]) -> String {
    join_clauses(rows.iter().filter_map(render_row))
}

/// The Tron dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct TronDialect;

impl Dialect for TronDialect {
    fn kind(&self) -> DialectKind {
        DialectKind::Tron
    }

    fn label(&self) -> &'static str {
        "Tron"
    }

    fn doc_url(&self) -> &'static str {
        "https://docs.turnkey.com/concepts/policies/examples#tron-policies"
    }

    fn fields(&self) -> &'static [FieldInfo] {
        FIELDS
    }

    fn examples(&self) -> &'static [&'static str] {
        &[
            "TransferContract",
            "TriggerSmartContract",
            "DelegateResourceContract",
            "UnDelegateResourceContract",
            "FreezeBalanceV2Contract",
            "UnfreezeBalanceV2Contract",
            "AccountPermissionUpdateContract",
        ]
    }

    fn render(&self, condition: &ConditionConfig) -> Option<String> {
        match condition {
            ConditionConfig::Tron { conditions } => Some(render(conditions)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use policyforge_core::{ComparisonOperator, TronContractType, TronField};

    #[test]
    fn test_amount_is_unquoted() {
        let row = TronCondition::field(TronField::Amount, ComparisonOperator::Le, "1000000");
        assert_eq!(
            render_row(&row).unwrap(),
            "tron.tx.contract[0].amount <= 1000000"
        );
    }

    #[test]
    fn test_address_fields_are_quoted() {
        let row = TronCondition::field(TronField::OwnerAddress, ComparisonOperator::Ne, "T9yD");
        assert_eq!(
            render_row(&row).unwrap(),
            "tron.tx.contract[0].owner_address != 'T9yD'"
        );
    }

    #[test]
    fn test_field_wins_over_contract_type_on_same_row() {
        let row = TronCondition {
            contract_type: Some(TronContractType::TriggerSmartContract),
            ..TronCondition::field(TronField::ContractAddress, ComparisonOperator::Eq, "TC")
        };
        assert_eq!(
            render_row(&row).unwrap(),
            "tron.tx.contract[0].contract_address == 'TC'"
        );
    }

    #[test]
    fn test_empty_row_is_dropped() {
        let empty = TronCondition {
            contract_type: None,
            field: None,
            operator: ComparisonOperator::Eq,
            value: "ignored".to_string(),
        };
        let rows = vec![
            empty,
            TronCondition::contract(TronContractType::FreezeBalanceV2Contract),
        ];
        assert_eq!(
            render(&rows),
            "tron.tx.contract[0].type == 'FreezeBalanceV2Contract'"
        );
    }

    #[test]
    fn test_examples_cover_every_contract_type() {
        let examples = TronDialect.examples();
        assert_eq!(examples.len(), TronContractType::ALL.len());
        for contract in TronContractType::ALL {
            assert!(examples.contains(&contract.as_str()));
        }
    }
}
