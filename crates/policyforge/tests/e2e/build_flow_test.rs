//! Configuration files through the `build` command.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use policyforge::cli::commands::build::parse_config;
use policyforge::cli::commands::{BuildCommand, BuildError};
use policyforge::cli::OutputArgs;
use policyforge_core::{Config, PolicyEffect};
use policyforge_policy::{build_policy, format_policy_json};

use crate::common;

fn build_fixture(name: &str) -> policyforge_core::PolicyDocument {
    let content = common::read_fixture(&format!("configs/{name}")).unwrap();
    build_policy(&parse_config(name, &content).unwrap())
}

#[test]
fn test_solana_json_config() {
    let document = build_fixture("solana_spl_cap.json");

    assert_eq!(document.policy_name, "Cap SPL outflows");
    assert_eq!(
        document.consensus.as_deref(),
        Some(
            "approvers.all(user, user.id == '4b7e1a4c-0000-4000-8000-000000000001' || \
             user.id == '4b7e1a4c-0000-4000-8000-000000000002')"
        )
    );
    assert_eq!(
        document.condition.as_deref(),
        Some(
            "solana.tx.instructions.count() <= 3 && \
             solana.tx.spl_transfers.count(transfer, transfer.amount <= '5000000') >= 2 && \
             solana.tx.instructions.all(i, i.program_key == 'TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA')"
        )
    );
    assert_eq!(
        document.notes.as_deref(),
        Some("At least two small SPL transfers, token program only")
    );
}

#[test]
fn test_ethereum_toml_config() {
    let document = build_fixture("multisig_eth.toml");

    assert_eq!(
        document.consensus.as_deref(),
        Some("approvers.count(user, user.id == 'alice' || user.id == 'bob' || user.id == 'carol') >= 2")
    );
    assert_eq!(
        document.condition.as_deref(),
        Some(
            "eth.tx.to == '0x52908400098527886E0F7030069857D2E4169EE7' && \
             eth.tx.value <= 5000000000000000000"
        )
    );
    // empty notes are omitted
    assert_eq!(document.notes, None);
}

#[test]
fn test_raw_config_omits_absent_sections() {
    let document = build_fixture("raw_override.json");
    assert_eq!(document.effect, PolicyEffect::Deny);

    let json = format_policy_json(&document, false);
    assert_eq!(
        json,
        "{\"policyName\":\"Block user creation\",\"effect\":\"EFFECT_DENY\",\
         \"condition\":\"activity.type == 'ACTIVITY_TYPE_CREATE_USERS'\"}"
    );
}

#[test]
fn test_unknown_chain_is_rejected() {
    let cmd = BuildCommand::new(
        common::fixture_path("configs/invalid_chain.json")
            .display()
            .to_string(),
        OutputArgs::default(),
    );
    assert!(matches!(cmd.load(), Err(BuildError::Parse(_))));
}

#[test]
fn test_build_with_download() {
    let temp_dir = common::temp_data_dir();
    let mut config = Config::default();
    config.output.directory = temp_dir.path().display().to_string();
    config.output.pretty = false;
    let out = temp_dir.path().join("stdout.json");

    let cmd = BuildCommand::new(
        common::fixture_path("configs/raw_override.json")
            .display()
            .to_string(),
        OutputArgs {
            output: Some(out.clone()),
            download: true,
            compact: false,
        },
    );
    cmd.run(&config).unwrap();

    let downloaded = std::fs::read_to_string(temp_dir.path().join("Block_user_creation.json")).unwrap();
    let written = std::fs::read_to_string(out).unwrap();
    assert_eq!(downloaded, written);
    assert_eq!(downloaded.lines().count(), 1);
}
