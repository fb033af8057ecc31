//! Fuzz target for the condition row parsers and their renderers.
//!
//! # Running
//!
//! ```bash
//! cargo +nightly fuzz run row_parsers
//! ```
//!
//! Any row that parses must render without panicking, and the rendered
//! clause must start with the dialect's namespace.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use policyforge_core::{
    ActivityCondition, CountClause, EthereumCondition, SolanaCondition, TronCondition,
};
use policyforge_dialect::{activity, ethereum, solana, tron};

/// Which parser the input string is fed to.
#[derive(Debug, Arbitrary)]
enum RowInput {
    Ethereum(String),
    Solana(String),
    Count(String),
    Tron(String),
    Activity(String),
}

fuzz_target!(|input: RowInput| {
    match input {
        RowInput::Ethereum(row) => {
            if let Ok(row) = row.parse::<EthereumCondition>() {
                assert!(ethereum::render_row(&row).starts_with("eth.tx."));
            }
        }
        RowInput::Solana(row) => {
            if let Ok(row) = row.parse::<SolanaCondition>() {
                assert!(solana::render_row(&row).starts_with("solana.tx."));
            }
        }
        RowInput::Count(clause) => {
            if let Ok(clause) = clause.parse::<CountClause>() {
                assert!(solana::render_instruction_count(&clause)
                    .starts_with("solana.tx.instructions.count() "));
            }
        }
        RowInput::Tron(row) => {
            if let Ok(row) = row.parse::<TronCondition>() {
                if let Some(clause) = tron::render_row(&row) {
                    assert!(clause.starts_with("tron.tx.contract[0]."));
                }
            }
        }
        RowInput::Activity(row) => {
            if let Ok(row) = row.parse::<ActivityCondition>() {
                assert!(activity::render_row(&row).starts_with("activity."));
            }
        }
    }
});
