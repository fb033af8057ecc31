//! # policyforge-dialect
//!
//! Chain-dialect condition renderers for `policyforge`.
//!
//! Each supported condition language turns an ordered list of typed rows into
//! one expression string, clauses joined with `" && "`:
//!
//! - **Ethereum** (`eth.tx.*`) - [`ethereum`]
//! - **Solana** (`solana.tx.*`) - [`solana`]
//! - **Tron** (`tron.tx.contract[0].*`) - [`tron`]
//! - **Activity** (`activity.*`) - [`activity`]
//! - **Raw** - verbatim expression, [`RawDialect`]
//!
//! Rendering is total: values are inserted as written, never validated.
//!
//! ## Quick Start
//!
//! ```
//! use policyforge_core::{ConditionConfig, TronCondition, TronContractType};
//! use policyforge_dialect::render_condition;
//!
//! let condition = ConditionConfig::Tron {
//!     conditions: vec![
//!         TronCondition::contract(TronContractType::TransferContract),
//!         "to_address == TXYZ".parse().expect("valid row"),
//!     ],
//! };
//!
//! assert_eq!(
//!     render_condition(&condition),
//!     "tron.tx.contract[0].type == 'TransferContract' && \
//!      tron.tx.contract[0].to_address == 'TXYZ'"
//! );
//! ```
//!
//! ## Dialect metadata
//!
//! Every dialect also implements [`Dialect`], which carries labels, field
//! hints and documentation links. [`DialectRegistry`] lists them in order.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod activity;
pub mod condition;
pub mod dialect;
pub mod ethereum;
pub mod raw;
pub mod registry;
pub mod solana;
pub mod tron;

pub use activity::ActivityDialect;
pub use condition::{dialect_for, render_condition};
pub use dialect::{Dialect, FieldInfo};
pub use ethereum::EthereumDialect;
pub use raw::RawDialect;
pub use registry::DialectRegistry;
pub use solana::SolanaDialect;
pub use tron::TronDialect;
