//! # policyforge-core
//!
//! Core types, configuration, and error definitions for `policyforge`.
//!
//! This crate provides the foundational types shared by every `policyforge`
//! crate. It performs no rendering: the dialect and policy crates turn the
//! types defined here into expression strings.
//!
//! ## Modules
//!
//! - [`types`] - Editable policy configuration ([`PolicyConfig`]) and output
//!   document ([`PolicyDocument`])
//! - [`parse`] - Compact textual row forms used by the CLI
//! - [`error`] - Error types and result aliases
//! - [`config`] - Application configuration ([`Config`])
//! - [`config_loader`] - Reading and writing `~/.policyforge/config.toml`
//!
//! ## Example
//!
//! ```rust
//! use policyforge_core::{ConditionConfig, DialectKind, EthereumCondition, PolicyConfig};
//!
//! let row: EthereumCondition = "to == 0xABC".parse().expect("valid row");
//!
//! let mut config = PolicyConfig::default();
//! config.policy_name = "Allow one recipient".to_string();
//! config.condition = Some(ConditionConfig::Ethereum { conditions: vec![row] });
//!
//! assert_eq!(
//!     config.condition.as_ref().map(ConditionConfig::kind),
//!     Some(DialectKind::Ethereum)
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod config_loader;
pub mod error;
pub mod parse;
pub mod types;

// Re-export commonly used error types at crate root for convenience
pub use error::{ConfigError, ParseError, ParseResult, PresetError, PresetResult};

// Re-export config types at crate root for convenience
pub use config::{Config, LoggingConfig, OutputConfig};

// Re-export config loader types at crate root for convenience
pub use config_loader::{expand_path, ConfigLoader};

// Re-export core types at crate root for convenience
pub use types::{
    new_row_key, ActivityCondition, ActivityField, ComparisonOperator, ConditionConfig,
    ConsensusConfig, ConsensusOperator, CountClause, CountOperator, DialectKind,
    EqualityOperator, EthereumCondition, EthereumField, EthereumOperator, InstructionQuantifier,
    PolicyConfig, PolicyDocument, PolicyEffect, PresetCategory, SolanaCondition,
    SolanaConditionConfig, SolanaInstructionCondition, SolanaQuantifier, SolanaTransferCondition,
    SolanaTransferField, SolanaTransferKind, TronCondition, TronContractType, TronField,
    UserEntry, UNNAMED_POLICY,
};
