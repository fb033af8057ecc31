//! The built-in preset catalog.
//!
//! Presets are complete [`PolicyConfig`] values covering common patterns per
//! chain. Identifiers such as `<USER_ID>` and `<ALLOWED_ADDRESS>` are literal
//! placeholders meant to be replaced before the policy is submitted.
//!
//! The catalog is built once on first use and never changes.
//!
//! # Example
//!
//! ```
//! use policyforge_policy::presets::{preset_by_id, presets, presets_by_category};
//!
//! assert_eq!(presets().len(), 10);
//! assert_eq!(presets_by_category("solana").expect("known category").len(), 3);
//!
//! let preset = preset_by_id("deny-all").expect("shipped preset");
//! assert_eq!(preset.name, "General: Deny All");
//! ```

use once_cell::sync::Lazy;

use policyforge_core::{
    ComparisonOperator, ConditionConfig, ConsensusConfig, ConsensusOperator, CountClause,
    CountOperator, EthereumCondition, EthereumField, EthereumOperator, PolicyConfig,
    PolicyEffect, PresetCategory, PresetError, PresetResult, SolanaConditionConfig,
    SolanaQuantifier, SolanaTransferCondition, SolanaTransferField, SolanaTransferKind,
    TronCondition, TronContractType, TronField, UserEntry,
};

const ETHEREUM_DOCS: &str = "https://docs.turnkey.com/concepts/policies/examples#ethereum-policies";
const SOLANA_DOCS: &str = "https://docs.turnkey.com/concepts/policies/examples#solana-policies";
const TRON_DOCS: &str = "https://docs.turnkey.com/concepts/policies/examples#tron-policies";
const OVERVIEW_DOCS: &str = "https://docs.turnkey.com/concepts/policies/overview";
const CONSENSUS_DOCS: &str = "https://docs.turnkey.com/concepts/policies/overview#consensus";

/// Filter value that selects every category.
pub const ALL_CATEGORIES: &str = "all";

/// A named, documented policy template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    /// Stable identifier, e.g. `eth-value-limit`.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Catalog category.
    pub category: PresetCategory,
    /// Reference documentation.
    pub doc_url: &'static str,
    /// The configuration loaded into the editor.
    pub config: PolicyConfig,
}

static PRESETS: Lazy<Vec<Preset>> = Lazy::new(build_catalog);

/// All presets, in catalog order.
#[must_use]
pub fn presets() -> &'static [Preset] {
    &PRESETS
}

/// Presets in a category, or every preset for `"all"`.
///
/// # Errors
///
/// Returns [`PresetError::UnknownCategory`] if `filter` is neither `"all"`
/// nor a [`PresetCategory`] token.
pub fn presets_by_category(filter: &str) -> PresetResult<Vec<&'static Preset>> {
    if filter == ALL_CATEGORIES {
        return Ok(presets().iter().collect());
    }
    let category: PresetCategory = filter
        .parse()
        .map_err(|_| PresetError::unknown_category(filter))?;
    Ok(presets()
        .iter()
        .filter(|preset| preset.category == category)
        .collect())
}

/// Look up a preset by id.
#[must_use]
pub fn preset_by_id(id: &str) -> Option<&'static Preset> {
    presets().iter().find(|preset| preset.id == id)
}

/// Look up a preset by id, failing if it does not exist.
///
/// # Errors
///
/// Returns [`PresetError::NotFound`] for an unknown id.
pub fn require_preset(id: &str) -> PresetResult<&'static Preset> {
    preset_by_id(id).ok_or_else(|| PresetError::not_found(id))
}

// ============================================================================
// Catalog
// ============================================================================

fn single_user() -> Option<ConsensusConfig> {
    Some(ConsensusConfig {
        operator: ConsensusOperator::Any,
        users: vec![UserEntry::with_key("1", "<USER_ID>")],
        count_threshold: None,
    })
}

fn allowed(policy_name: &str, condition: Option<ConditionConfig>, notes: &str) -> PolicyConfig {
    PolicyConfig {
        policy_name: policy_name.to_string(),
        effect: PolicyEffect::Allow,
        consensus: single_user(),
        condition,
        notes: Some(notes.to_string()),
    }
}

fn ethereum(field: EthereumField, operator: EthereumOperator, value: &str) -> Option<ConditionConfig> {
    Some(ConditionConfig::Ethereum {
        conditions: vec![EthereumCondition {
            field,
            operator,
            value: value.to_string(),
        }],
    })
}

fn transfer_to(kind: SolanaTransferKind, address: &str) -> SolanaTransferCondition {
    SolanaTransferCondition {
        kind,
        quantifier: SolanaQuantifier::All,
        field: SolanaTransferField::To,
        operator: ComparisonOperator::Eq,
        value: address.to_string(),
        count_value: None,
    }
}

fn tron(contract_type: TronContractType, field: TronField, value: &str) -> Option<ConditionConfig> {
    Some(ConditionConfig::Tron {
        conditions: vec![
            TronCondition::contract(contract_type),
            TronCondition::field(field, ComparisonOperator::Eq, value),
        ],
    })
}

#[allow(clippy::too_many_lines)]
fn build_catalog() -> Vec<Preset> {
    vec![
        Preset {
            id: "eth-allowlist-address",
            name: "Ethereum: Allow Single Address",
            description: "Allow a user to sign Ethereum transactions to a specific address",
            category: PresetCategory::Ethereum,
            doc_url: ETHEREUM_DOCS,
            config: allowed(
                "Allow ETH transactions to specific address",
                ethereum(EthereumField::To, EthereumOperator::Eq, "<ALLOWED_ADDRESS>"),
                "Replace <USER_ID> and <ALLOWED_ADDRESS> with actual values",
            ),
        },
        Preset {
            id: "eth-value-limit",
            name: "Ethereum: Value Limit",
            description: "Allow transactions up to a maximum value (in wei)",
            category: PresetCategory::Ethereum,
            doc_url: ETHEREUM_DOCS,
            config: allowed(
                "Allow ETH transactions under value limit",
                ethereum(EthereumField::Value, EthereumOperator::Le, "1000000000000000000"),
                "Allows transactions up to 1 ETH (1e18 wei)",
            ),
        },
        Preset {
            id: "eth-chain-specific",
            name: "Ethereum: Specific Chain Only",
            description: "Restrict transactions to a specific chain (e.g., mainnet)",
            category: PresetCategory::Ethereum,
            doc_url: ETHEREUM_DOCS,
            config: allowed(
                "Allow ETH mainnet only",
                ethereum(EthereumField::ChainId, EthereumOperator::Eq, "1"),
                "Chain ID 1 = Ethereum Mainnet",
            ),
        },
        Preset {
            id: "sol-single-transfer",
            name: "Solana: Single Transfer to Address",
            description: "Allow single SOL transfer to a specific address",
            category: PresetCategory::Solana,
            doc_url: SOLANA_DOCS,
            config: allowed(
                "Allow single SOL transfer to address",
                Some(ConditionConfig::Solana(SolanaConditionConfig {
                    conditions: vec![
                        transfer_to(SolanaTransferKind::Transfers, "<ALLOWED_ADDRESS>").into(),
                    ],
                    instruction_count: Some(CountClause::new(CountOperator::Eq, 1)),
                    transfer_count: Some(CountClause::new(CountOperator::Eq, 1)),
                })),
                "Most restrictive - only allows single transfer transactions",
            ),
        },
        Preset {
            id: "sol-allowlist",
            name: "Solana: Allowlist Transfers",
            description: "Allow transfers only to allowlisted addresses",
            category: PresetCategory::Solana,
            doc_url: SOLANA_DOCS,
            config: allowed(
                "Allow SOL transfers to allowlist",
                Some(ConditionConfig::Solana(SolanaConditionConfig {
                    conditions: vec![
                        transfer_to(SolanaTransferKind::Transfers, "<ALLOWED_ADDRESS>").into(),
                    ],
                    ..SolanaConditionConfig::default()
                })),
                "All transfers must go to the allowed address",
            ),
        },
        Preset {
            id: "sol-spl-transfer",
            name: "Solana: SPL Token Transfer",
            description: "Allow SPL token transfers to a specific address",
            category: PresetCategory::Solana,
            doc_url: SOLANA_DOCS,
            config: allowed(
                "Allow SPL token transfer",
                Some(ConditionConfig::Solana(SolanaConditionConfig {
                    conditions: vec![transfer_to(
                        SolanaTransferKind::SplTransfers,
                        "<TOKEN_ACCOUNT_ADDRESS>",
                    )
                    .into()],
                    ..SolanaConditionConfig::default()
                })),
                "Use the token account address, not the wallet address",
            ),
        },
        Preset {
            id: "tron-trx-transfer",
            name: "Tron: TRX Transfer",
            description: "Allow TRX transfers to a specific address",
            category: PresetCategory::Tron,
            doc_url: TRON_DOCS,
            config: allowed(
                "Allow TRX transfer",
                tron(
                    TronContractType::TransferContract,
                    TronField::ToAddress,
                    "<ALLOWED_ADDRESS>",
                ),
                "Allow TRX transfers only to specified address",
            ),
        },
        Preset {
            id: "tron-smart-contract",
            name: "Tron: Smart Contract Interaction",
            description: "Allow interaction with a specific smart contract",
            category: PresetCategory::Tron,
            doc_url: TRON_DOCS,
            config: allowed(
                "Allow smart contract interaction",
                tron(
                    TronContractType::TriggerSmartContract,
                    TronField::ContractAddress,
                    "<CONTRACT_ADDRESS>",
                ),
                "Allow calling a specific smart contract",
            ),
        },
        Preset {
            id: "deny-all",
            name: "General: Deny All",
            description: "Explicitly deny all actions for a user",
            category: PresetCategory::General,
            doc_url: OVERVIEW_DOCS,
            config: PolicyConfig {
                policy_name: "Deny all actions".to_string(),
                effect: PolicyEffect::Deny,
                consensus: single_user(),
                condition: None,
                notes: Some("Explicitly denies all actions for the specified user".to_string()),
            },
        },
        Preset {
            id: "multi-user-consensus",
            name: "General: Multi-User Approval",
            description: "Require approval from multiple users",
            category: PresetCategory::General,
            doc_url: CONSENSUS_DOCS,
            config: PolicyConfig {
                policy_name: "Require multi-user approval".to_string(),
                effect: PolicyEffect::Allow,
                consensus: Some(ConsensusConfig {
                    operator: ConsensusOperator::Count,
                    users: vec![
                        UserEntry::with_key("1", "<USER_ID_1>"),
                        UserEntry::with_key("2", "<USER_ID_2>"),
                        UserEntry::with_key("3", "<USER_ID_3>"),
                    ],
                    count_threshold: Some(2),
                }),
                condition: None,
                notes: Some("Requires at least 2 of 3 users to approve".to_string()),
            },
        },
    ]
}
