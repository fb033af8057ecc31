//! # Test Utilities for `policyforge`
//!
//! ## Functions
//!
//! - [`load_fixture`] - Load a JSON fixture from `tests/fixtures/`
//! - [`fixture_path`] - Absolute path of a fixture file
//! - [`temp_data_dir`] - Create an isolated temporary directory
//!
//! ## Proptest Strategies
//!
//! - [`user_id`] - Platform user ids
//! - [`ethereum_address`] - `0x`-prefixed addresses
//! - [`consensus_config`] - Consensus blocks with any operator and threshold
//! - [`ethereum_row`] - Ethereum condition rows

#![allow(dead_code)]
#![allow(clippy::expect_used)]

use std::path::PathBuf;

use policyforge_core::{
    ConsensusConfig, ConsensusOperator, EthereumCondition, EthereumField, EthereumOperator,
    UserEntry,
};
use proptest::prelude::*;
use tempfile::TempDir;

/// Error type for fixture loading operations.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// The fixture file could not be found.
    #[error("Fixture not found: {0}")]
    NotFound(String),

    /// The fixture file could not be read.
    #[error("Failed to read fixture: {0}")]
    ReadError(#[from] std::io::Error),

    /// The fixture JSON could not be parsed.
    #[error("Failed to parse fixture JSON: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Load a JSON fixture, e.g. `"presets/deny-all.json"`.
pub fn load_fixture(path: &str) -> Result<serde_json::Value, FixtureError> {
    let content = read_fixture(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Read a fixture file verbatim.
pub fn read_fixture(path: &str) -> Result<String, FixtureError> {
    let fixture_path = fixture_path(path);
    if !fixture_path.exists() {
        return Err(FixtureError::NotFound(fixture_path.display().to_string()));
    }
    Ok(std::fs::read_to_string(&fixture_path)?)
}

/// Absolute path of a fixture file.
pub fn fixture_path(path: &str) -> PathBuf {
    fixtures_dir().join(path)
}

/// `tests/fixtures` at the workspace root.
fn fixtures_dir() -> PathBuf {
    // CARGO_MANIFEST_DIR is crates/policyforge
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(manifest_dir)
        .parent()
        .and_then(|p| p.parent())
        .map_or_else(
            || PathBuf::from("tests/fixtures"),
            |p| p.join("tests").join("fixtures"),
        )
}

/// Create a temporary directory, removed on drop.
///
/// # Panics
///
/// Panics if the directory cannot be created.
#[must_use]
pub fn temp_data_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("policyforge-test-")
        .tempdir()
        .expect("Failed to create temporary directory for test")
}

// =============================================================================
// Proptest Strategies
// =============================================================================

/// Platform user ids: UUID-like or free text without quotes.
pub fn user_id() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}",
        "[A-Za-z0-9_<>]{1,16}",
    ]
}

/// A `0x`-prefixed, 40 hex digit address.
pub fn ethereum_address() -> impl Strategy<Value = String> {
    "[0-9a-fA-F]{40}".prop_map(|hex| format!("0x{hex}"))
}

/// Any consensus operator.
pub fn consensus_operator() -> impl Strategy<Value = ConsensusOperator> {
    prop::sample::select(ConsensusOperator::ALL.to_vec())
}

/// A consensus block with 0..6 users and an optional threshold.
pub fn consensus_config() -> impl Strategy<Value = ConsensusConfig> {
    (
        consensus_operator(),
        prop::collection::vec(user_id(), 0..6),
        prop::option::of(0u32..10),
    )
        .prop_map(|(operator, ids, count_threshold)| ConsensusConfig {
            operator,
            users: ids
                .into_iter()
                .enumerate()
                .map(|(i, id)| UserEntry::with_key(i.to_string(), id))
                .collect(),
            count_threshold,
        })
}

/// An Ethereum row comparing any field with a non-`startsWith` operator.
pub fn ethereum_row() -> impl Strategy<Value = EthereumCondition> {
    let operators: Vec<EthereumOperator> = EthereumOperator::ALL
        .iter()
        .copied()
        .filter(|op| *op != EthereumOperator::StartsWith)
        .collect();
    (
        prop::sample::select(EthereumField::ALL.to_vec()),
        prop::sample::select(operators),
        "[0-9]{1,20}",
    )
        .prop_map(|(field, operator, value)| EthereumCondition {
            field,
            operator,
            value,
        })
}
