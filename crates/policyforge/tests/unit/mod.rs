//! Unit tests for the `policyforge` binary crate.

pub mod cli_parsing_test;
pub mod error_message_test;
