//! Core types for `policyforge`.
//!
//! This module holds the editable policy configuration and the exported
//! policy document:
//!
//! - [`PolicyConfig`] - The in-memory, editable representation of a policy
//! - [`ConsensusConfig`] - Who must approve (operator, users, threshold)
//! - [`ConditionConfig`] - What is being approved, as one chain dialect or a raw expression
//! - [`PolicyDocument`] - The rendered artifact handed to the policy-creation API
//!
//! Every enumerated token (operators, fields, quantifiers) is a closed enum
//! with a wire representation identical to the token written into the
//! rendered expression.
//!
//! # Examples
//!
//! ```
//! use policyforge_core::types::{
//!     ConditionConfig, EthereumCondition, EthereumField, EthereumOperator, PolicyConfig,
//!     PolicyEffect,
//! };
//!
//! let config = PolicyConfig {
//!     policy_name: "Cap ETH value".to_string(),
//!     effect: PolicyEffect::Allow,
//!     consensus: None,
//!     condition: Some(ConditionConfig::Ethereum {
//!         conditions: vec![EthereumCondition {
//!             field: EthereumField::Value,
//!             operator: EthereumOperator::Le,
//!             value: "1000000000000000000".to_string(),
//!         }],
//!     }),
//!     notes: None,
//! };
//!
//! assert!(config.condition.is_some());
//! assert!(EthereumField::Value.is_numeric());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, ParseResult};

/// Declares a closed token enum with its wire token, `ALL`, `as_str`,
/// `Display` and `FromStr`.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The token used on the wire and inside rendered expressions.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $token),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok(Self::$variant),)+
                    other => Err(ParseError::unknown_token($kind, other)),
                }
            }
        }
    };
}

/// Placeholder policy name used when the configured name is empty.
pub const UNNAMED_POLICY: &str = "Unnamed Policy";

/// Generates a fresh row key for list entries created locally.
///
/// Keys identify rows while editing; they never appear in rendered output.
#[must_use]
pub fn new_row_key() -> String {
    uuid::Uuid::new_v4().to_string()
}

// ============================================================================
// Effect
// ============================================================================

/// Whether a matching policy allows or denies the action.
///
/// Deny always takes precedence over allow on the target platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyEffect {
    /// Allow matching actions.
    #[default]
    #[serde(rename = "EFFECT_ALLOW")]
    Allow,
    /// Deny matching actions.
    #[serde(rename = "EFFECT_DENY")]
    Deny,
}

impl PolicyEffect {
    /// The wire name (`EFFECT_ALLOW` / `EFFECT_DENY`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "EFFECT_ALLOW",
            Self::Deny => "EFFECT_DENY",
        }
    }
}

impl fmt::Display for PolicyEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyEffect {
    type Err = ParseError;

    /// Accepts `allow`/`deny` in any case, or the wire names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "allow" | "effect_allow" => Ok(Self::Allow),
            "deny" | "effect_deny" => Ok(Self::Deny),
            _ => Err(ParseError::unknown_token("effect", s)),
        }
    }
}

// ============================================================================
// Operators
// ============================================================================

token_enum! {
    /// Quantifier applied over the approvers collection.
    pub enum ConsensusOperator as "consensus operator" {
        /// At least one listed user approves.
        Any => "any",
        /// Every approver is one of the listed users.
        All => "all",
        /// At least `threshold` listed users approve.
        Count => "count",
    }
}

impl Default for ConsensusOperator {
    fn default() -> Self {
        Self::Any
    }
}

token_enum! {
    /// Infix comparison operators shared by most dialects.
    pub enum ComparisonOperator as "comparison operator" {
        /// Equal.
        Eq => "==",
        /// Not equal.
        Ne => "!=",
        /// Greater than.
        Gt => ">",
        /// Less than.
        Lt => "<",
        /// Greater than or equal.
        Ge => ">=",
        /// Less than or equal.
        Le => "<=",
    }
}

token_enum! {
    /// Operators allowed when comparing a collection count.
    pub enum CountOperator as "count operator" {
        /// Exactly.
        Eq => "==",
        /// More than.
        Gt => ">",
        /// Less than.
        Lt => "<",
        /// At least.
        Ge => ">=",
        /// At most.
        Le => "<=",
    }
}

token_enum! {
    /// Equality-only operators (activity conditions).
    pub enum EqualityOperator as "equality operator" {
        /// Equal.
        Eq => "==",
        /// Not equal.
        Ne => "!=",
    }
}

token_enum! {
    /// Ethereum operators: the comparisons plus a prefix match.
    pub enum EthereumOperator as "ethereum operator" {
        /// Equal.
        Eq => "==",
        /// Not equal.
        Ne => "!=",
        /// Greater than.
        Gt => ">",
        /// Less than.
        Lt => "<",
        /// Greater than or equal.
        Ge => ">=",
        /// Less than or equal.
        Le => "<=",
        /// Prefix match, rendered as a method call.
        StartsWith => "startsWith",
    }
}

// ============================================================================
// Consensus
// ============================================================================

/// One approving identity in a consensus list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEntry {
    /// Locally generated row key.
    #[serde(rename = "id", default = "new_row_key")]
    pub key: String,

    /// The platform user identifier (expected, not enforced, to be a UUID).
    #[serde(default)]
    pub user_id: String,
}

impl UserEntry {
    /// Create an entry with a freshly generated row key.
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            key: new_row_key(),
            user_id: user_id.into(),
        }
    }

    /// Create an entry with an explicit row key.
    #[must_use]
    pub fn with_key(key: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            user_id: user_id.into(),
        }
    }
}

/// Who must approve an action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsensusConfig {
    /// Quantifier over the approvers.
    #[serde(default)]
    pub operator: ConsensusOperator,

    /// Ordered list of approving identities.
    #[serde(default)]
    pub users: Vec<UserEntry>,

    /// Minimum number of approvals, only meaningful for [`ConsensusOperator::Count`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count_threshold: Option<u32>,
}

impl ConsensusConfig {
    /// The threshold actually rendered: the configured value when at least 1, else 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use policyforge_core::types::ConsensusConfig;
    ///
    /// let mut config = ConsensusConfig::default();
    /// assert_eq!(config.effective_threshold(), 1);
    ///
    /// config.count_threshold = Some(0);
    /// assert_eq!(config.effective_threshold(), 1);
    ///
    /// config.count_threshold = Some(3);
    /// assert_eq!(config.effective_threshold(), 3);
    /// ```
    #[must_use]
    pub fn effective_threshold(&self) -> u32 {
        self.count_threshold.filter(|t| *t >= 1).unwrap_or(1)
    }
}

// ============================================================================
// Ethereum
// ============================================================================

token_enum! {
    /// Ethereum transaction fields exposed under `eth.tx`.
    pub enum EthereumField as "ethereum field" {
        /// Recipient address.
        To => "to",
        /// Value in wei.
        Value => "value",
        /// EIP-155 chain id.
        ChainId => "chain_id",
        /// Gas limit.
        Gas => "gas",
        /// Gas price in wei.
        GasPrice => "gas_price",
        /// Call data (hex).
        Data => "data",
    }
}

impl EthereumField {
    /// Numeric fields render their value unquoted.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Value | Self::Gas | Self::GasPrice | Self::ChainId)
    }
}

/// One Ethereum condition row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthereumCondition {
    /// Transaction field being tested.
    pub field: EthereumField,
    /// Comparison operator.
    pub operator: EthereumOperator,
    /// Comparison value, passed through unchanged.
    #[serde(default)]
    pub value: String,
}

impl Default for EthereumCondition {
    fn default() -> Self {
        Self {
            field: EthereumField::To,
            operator: EthereumOperator::Eq,
            value: String::new(),
        }
    }
}

// ============================================================================
// Solana
// ============================================================================

token_enum! {
    /// The transfer collection a transfer condition ranges over.
    pub enum SolanaTransferKind as "solana transfer type" {
        /// Native SOL transfers.
        Transfers => "transfers",
        /// SPL token transfers.
        SplTransfers => "spl_transfers",
    }
}

impl SolanaTransferKind {
    /// The collection path in the expression language.
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Transfers => "solana.tx.transfers",
            Self::SplTransfers => "solana.tx.spl_transfers",
        }
    }
}

token_enum! {
    /// Quantifier over a Solana transfer collection.
    pub enum SolanaQuantifier as "solana quantifier" {
        /// Every element must match.
        All => "all",
        /// At least one element must match.
        Any => "any",
        /// At least `count_value` elements must match.
        Count => "count",
    }
}

token_enum! {
    /// Quantifier over the instruction collection.
    pub enum InstructionQuantifier as "instruction quantifier" {
        /// Every instruction must match.
        All => "all",
        /// At least one instruction must match.
        Any => "any",
    }
}

token_enum! {
    /// Fields of a Solana transfer.
    pub enum SolanaTransferField as "solana transfer field" {
        /// Recipient.
        To => "to",
        /// Sender.
        From => "from",
        /// Amount in lamports (or token base units).
        Amount => "amount",
    }
}

/// A quantified test over native or SPL transfers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolanaTransferCondition {
    /// Which transfer collection to range over.
    #[serde(rename = "type")]
    pub kind: SolanaTransferKind,
    /// Quantifier over the collection.
    pub quantifier: SolanaQuantifier,
    /// Transfer field being tested.
    pub field: SolanaTransferField,
    /// Comparison operator.
    pub operator: ComparisonOperator,
    /// Comparison value, passed through unchanged.
    #[serde(default)]
    pub value: String,
    /// Minimum matches for [`SolanaQuantifier::Count`] (defaults to 1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count_value: Option<u32>,
}

impl Default for SolanaTransferCondition {
    fn default() -> Self {
        Self {
            kind: SolanaTransferKind::Transfers,
            quantifier: SolanaQuantifier::All,
            field: SolanaTransferField::To,
            operator: ComparisonOperator::Eq,
            value: String::new(),
            count_value: None,
        }
    }
}

impl SolanaTransferCondition {
    /// The `count` threshold actually rendered.
    #[must_use]
    pub fn effective_count(&self) -> u32 {
        self.count_value.filter(|c| *c >= 1).unwrap_or(1)
    }
}

/// A test over the transaction's instructions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field")]
pub enum SolanaInstructionCondition {
    /// Quantified program-key comparison.
    #[serde(rename = "program_key")]
    ProgramKey {
        /// Quantifier over the instructions.
        quantifier: InstructionQuantifier,
        /// Comparison operator.
        operator: ComparisonOperator,
        /// Program key, passed through unchanged.
        #[serde(default)]
        value: String,
    },
    /// Instruction count comparison.
    #[serde(rename = "count")]
    Count {
        /// Comparison operator.
        operator: ComparisonOperator,
        /// Count, rendered unquoted.
        #[serde(default)]
        value: String,
    },
}

/// One Solana condition row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SolanaCondition {
    /// Transfer condition (carries a `type`).
    Transfer(SolanaTransferCondition),
    /// Instruction condition (carries a `field` of `program_key` or `count`).
    Instruction(SolanaInstructionCondition),
}

impl From<SolanaTransferCondition> for SolanaCondition {
    fn from(condition: SolanaTransferCondition) -> Self {
        Self::Transfer(condition)
    }
}

impl From<SolanaInstructionCondition> for SolanaCondition {
    fn from(condition: SolanaInstructionCondition) -> Self {
        Self::Instruction(condition)
    }
}

/// A scalar comparison against a collection count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountClause {
    /// Comparison operator.
    pub operator: CountOperator,
    /// Count to compare against.
    pub value: u64,
}

impl CountClause {
    /// Create a count clause.
    #[must_use]
    pub const fn new(operator: CountOperator, value: u64) -> Self {
        Self { operator, value }
    }
}

/// The Solana dialect payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolanaConditionConfig {
    /// Transfer and instruction rows.
    #[serde(default)]
    pub conditions: Vec<SolanaCondition>,
    /// Optional instruction-count clause, rendered first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction_count: Option<CountClause>,
    /// Optional transfer-count clause, rendered second.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_count: Option<CountClause>,
}

// ============================================================================
// Tron
// ============================================================================

token_enum! {
    /// Tron contract types.
    pub enum TronContractType as "tron contract type" {
        /// TRX transfer.
        TransferContract => "TransferContract",
        /// Smart contract call.
        TriggerSmartContract => "TriggerSmartContract",
        /// Resource delegation.
        DelegateResourceContract => "DelegateResourceContract",
        /// Resource undelegation.
        UnDelegateResourceContract => "UnDelegateResourceContract",
        /// Stake 2.0 freeze.
        FreezeBalanceV2Contract => "FreezeBalanceV2Contract",
        /// Stake 2.0 unfreeze.
        UnfreezeBalanceV2Contract => "UnfreezeBalanceV2Contract",
        /// Account permission update.
        AccountPermissionUpdateContract => "AccountPermissionUpdateContract",
    }
}

token_enum! {
    /// Fields of the first Tron contract.
    pub enum TronField as "tron field" {
        /// Owner (sender) address.
        OwnerAddress => "owner_address",
        /// Recipient address.
        ToAddress => "to_address",
        /// Amount in sun.
        Amount => "amount",
        /// Called contract address.
        ContractAddress => "contract_address",
    }
}

impl TronField {
    /// Only `amount` renders unquoted.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Amount)
    }
}

/// One Tron condition row.
///
/// A row with only `contract_type` tests the contract type; a row with a
/// `field` compares that field and ignores `contract_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TronCondition {
    /// Contract type to match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<TronContractType>,
    /// Contract field to compare.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<TronField>,
    /// Comparison operator (used with `field`).
    #[serde(default = "default_comparison")]
    pub operator: ComparisonOperator,
    /// Comparison value, passed through unchanged.
    #[serde(default)]
    pub value: String,
}

const fn default_comparison() -> ComparisonOperator {
    ComparisonOperator::Eq
}

impl TronCondition {
    /// A row testing only the contract type.
    #[must_use]
    pub const fn contract(contract_type: TronContractType) -> Self {
        Self {
            contract_type: Some(contract_type),
            field: None,
            operator: ComparisonOperator::Eq,
            value: String::new(),
        }
    }

    /// A row comparing a contract field.
    #[must_use]
    pub fn field(field: TronField, operator: ComparisonOperator, value: impl Into<String>) -> Self {
        Self {
            contract_type: None,
            field: Some(field),
            operator,
            value: value.into(),
        }
    }
}

// ============================================================================
// Activity
// ============================================================================

token_enum! {
    /// Fields of a platform activity.
    pub enum ActivityField as "activity field" {
        /// Activity type, e.g. `ACTIVITY_TYPE_SIGN_TRANSACTION_V2`.
        Type => "type",
        /// Resource the activity acts on.
        Resource => "resource",
    }
}

/// One activity condition row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCondition {
    /// Activity field being tested.
    pub field: ActivityField,
    /// Equality operator.
    pub operator: EqualityOperator,
    /// Comparison value, passed through unchanged.
    #[serde(default)]
    pub value: String,
}

// ============================================================================
// Condition
// ============================================================================

token_enum! {
    /// Tag of a [`ConditionConfig`] variant.
    pub enum DialectKind as "dialect" {
        /// Ethereum / EVM transactions.
        Ethereum => "ethereum",
        /// Solana transactions.
        Solana => "solana",
        /// Tron transactions.
        Tron => "tron",
        /// Platform activities.
        Activity => "activity",
        /// Raw expression override.
        Raw => "raw",
    }
}

/// What is being approved: one chain dialect's rows, or a raw expression.
///
/// The chain tag and its payload travel together, so a Solana payload under
/// an Ethereum tag cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "chain", rename_all = "snake_case")]
pub enum ConditionConfig {
    /// Ethereum rows.
    Ethereum {
        /// Rows, AND-joined.
        #[serde(default)]
        conditions: Vec<EthereumCondition>,
    },
    /// Solana payload.
    Solana(SolanaConditionConfig),
    /// Tron rows.
    Tron {
        /// Rows, AND-joined.
        #[serde(default)]
        conditions: Vec<TronCondition>,
    },
    /// Activity rows.
    Activity {
        /// Rows, AND-joined.
        #[serde(default)]
        conditions: Vec<ActivityCondition>,
    },
    /// Raw expression used verbatim when non-empty.
    Raw {
        /// The expression text.
        #[serde(default)]
        expression: String,
    },
}

impl Default for ConditionConfig {
    fn default() -> Self {
        Self::empty(DialectKind::Ethereum)
    }
}

impl ConditionConfig {
    /// An empty payload for the given dialect.
    #[must_use]
    pub fn empty(kind: DialectKind) -> Self {
        match kind {
            DialectKind::Ethereum => Self::Ethereum {
                conditions: Vec::new(),
            },
            DialectKind::Solana => Self::Solana(SolanaConditionConfig::default()),
            DialectKind::Tron => Self::Tron {
                conditions: Vec::new(),
            },
            DialectKind::Activity => Self::Activity {
                conditions: Vec::new(),
            },
            DialectKind::Raw => Self::Raw {
                expression: String::new(),
            },
        }
    }

    /// The dialect tag of this payload.
    #[must_use]
    pub const fn kind(&self) -> DialectKind {
        match self {
            Self::Ethereum { .. } => DialectKind::Ethereum,
            Self::Solana(_) => DialectKind::Solana,
            Self::Tron { .. } => DialectKind::Tron,
            Self::Activity { .. } => DialectKind::Activity,
            Self::Raw { .. } => DialectKind::Raw,
        }
    }

    /// Number of structured rows (0 for raw).
    #[must_use]
    pub fn row_count(&self) -> usize {
        match self {
            Self::Ethereum { conditions } => conditions.len(),
            Self::Solana(solana) => solana.conditions.len(),
            Self::Tron { conditions } => conditions.len(),
            Self::Activity { conditions } => conditions.len(),
            Self::Raw { .. } => 0,
        }
    }
}

// ============================================================================
// Policy
// ============================================================================

/// The editable representation of one policy.
///
/// [`PolicyConfig::default`] is the blank form: empty name, allow, an `any`
/// consensus with no users, an Ethereum condition with no rows, empty notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyConfig {
    /// Policy name; empty renders as [`UNNAMED_POLICY`].
    #[serde(default)]
    pub policy_name: String,

    /// Allow or deny.
    #[serde(default)]
    pub effect: PolicyEffect,

    /// Approval requirements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consensus: Option<ConsensusConfig>,

    /// Transaction or activity conditions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<ConditionConfig>,

    /// Free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            policy_name: String::new(),
            effect: PolicyEffect::Allow,
            consensus: Some(ConsensusConfig::default()),
            condition: Some(ConditionConfig::default()),
            notes: Some(String::new()),
        }
    }
}

impl PolicyConfig {
    /// Parse a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidDocument`] if the JSON does not describe a
    /// policy configuration.
    pub fn from_json_str(input: &str) -> ParseResult<Self> {
        serde_json::from_str(input).map_err(|e| ParseError::invalid_document(e.to_string()))
    }

    /// Parse a configuration from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidDocument`] if the TOML does not describe a
    /// policy configuration.
    pub fn from_toml_str(input: &str) -> ParseResult<Self> {
        toml::from_str(input).map_err(|e| ParseError::invalid_document(e.to_string()))
    }
}

/// The exported policy, as consumed by the policy-creation API.
///
/// Absent fields are omitted from the JSON; an empty rendering is never
/// emitted as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyDocument {
    /// Policy name.
    pub policy_name: String,
    /// Allow or deny.
    pub effect: PolicyEffect,
    /// Rendered consensus expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consensus: Option<String>,
    /// Rendered condition expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    /// Notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

token_enum! {
    /// Preset catalog categories.
    pub enum PresetCategory as "preset category" {
        /// Ethereum presets.
        Ethereum => "ethereum",
        /// Solana presets.
        Solana => "solana",
        /// Tron presets.
        Tron => "tron",
        /// Chain-independent presets.
        General => "general",
    }
}
