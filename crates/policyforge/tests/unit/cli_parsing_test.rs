//! Argument parsing across every command.

#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::panic,
    clippy::indexing_slicing
)]

use clap::Parser;
use policyforge::cli::commands::compose::edit_actions;
use policyforge::cli::{Cli, Commands, ConfigAction, PresetAction};
use policyforge_core::{
    ComparisonOperator, CountOperator, EthereumField, EthereumOperator, PolicyEffect,
    SolanaInstructionCondition, SolanaQuantifier,
};
use policyforge_policy::EditAction;

fn compose_args(args: &[&str]) -> policyforge::cli::ComposeArgs {
    let argv: Vec<&str> = ["policyforge", "compose"].iter().chain(args).copied().collect();
    match Cli::try_parse_from(argv).expect("should parse").command {
        Commands::Compose(args) => args,
        other => panic!("expected compose, got {other:?}"),
    }
}

#[test]
fn test_command_dispatch() {
    let cli = Cli::try_parse_from(["policyforge", "dialects"]).expect("should parse");
    assert!(matches!(cli.command, Commands::Dialects { id: None }));

    let cli = Cli::try_parse_from(["policyforge", "dialects", "tron"]).expect("should parse");
    assert!(matches!(cli.command, Commands::Dialects { id: Some(ref id) } if id == "tron"));

    let cli = Cli::try_parse_from(["policyforge", "config"]).expect("should parse");
    assert!(matches!(cli.command, Commands::Config { action: None }));

    let cli = Cli::try_parse_from(["policyforge", "config", "path"]).expect("should parse");
    assert!(matches!(
        cli.command,
        Commands::Config {
            action: Some(ConfigAction::Path)
        }
    ));

    let cli = Cli::try_parse_from(["policyforge", "preset", "list"]).expect("should parse");
    assert!(matches!(
        cli.command,
        Commands::Preset {
            action: PresetAction::List { ref category }
        } if category == "all"
    ));
}

#[test]
fn test_build_stdin_and_output_flags() {
    let cli = Cli::try_parse_from(["policyforge", "build", "-", "-o", "out.json", "--download"])
        .expect("should parse");
    match cli.command {
        Commands::Build { input, output } => {
            assert_eq!(input, "-");
            assert_eq!(output.output.unwrap().to_str(), Some("out.json"));
            assert!(output.download);
            assert!(!output.compact);
        }
        other => panic!("expected build, got {other:?}"),
    }
}

#[test]
fn test_effect_accepts_both_spellings() {
    assert_eq!(compose_args(&["--effect", "deny"]).effect, Some(PolicyEffect::Deny));
    assert_eq!(
        compose_args(&["--effect", "EFFECT_ALLOW"]).effect,
        Some(PolicyEffect::Allow)
    );
    assert!(Cli::try_parse_from(["policyforge", "compose", "--effect", "maybe"]).is_err());
}

#[test]
fn test_ethereum_row_values() {
    let args = compose_args(&["--ethereum", "data startsWith 0xa9059cbb", "--ethereum", "to =="]);
    assert_eq!(args.ethereum[0].field, EthereumField::Data);
    assert_eq!(args.ethereum[0].operator, EthereumOperator::StartsWith);
    assert_eq!(args.ethereum[0].value, "0xa9059cbb");
    assert_eq!(args.ethereum[1].value, "");
}

#[test]
fn test_solana_rows() {
    let args = compose_args(&[
        "--solana-transfer",
        "spl_transfers count:3 amount < 10",
        "--solana-instruction",
        "count <= 4",
        "--transfer-count",
        ">= 1",
    ]);
    assert_eq!(args.solana_transfer[0].quantifier, SolanaQuantifier::Count);
    assert_eq!(args.solana_transfer[0].count_value, Some(3));
    assert_eq!(
        args.solana_instruction[0],
        SolanaInstructionCondition::Count {
            operator: ComparisonOperator::Le,
            value: "4".to_string()
        }
    );
    assert_eq!(args.transfer_count.unwrap().operator, CountOperator::Ge);
}

#[test]
fn test_count_clause_rejects_negative_values() {
    assert!(Cli::try_parse_from(["policyforge", "compose", "--instruction-count", "== -1"]).is_err());
    assert!(Cli::try_parse_from(["policyforge", "compose", "--transfer-count", "!= 1"]).is_err());
}

#[test]
fn test_compose_flags_become_actions_in_order() {
    let args = compose_args(&[
        "--raw",
        "true",
        "--name",
        "n",
        "--preset",
        "deny-all",
        "--threshold",
        "2",
    ]);
    let actions = edit_actions(&args).unwrap();
    assert_eq!(
        actions,
        vec![
            EditAction::LoadPreset("deny-all".to_string()),
            EditAction::SetName("n".to_string()),
            EditAction::SetThreshold(2),
            EditAction::SetRaw("true".to_string()),
        ]
    );
}

#[test]
fn test_verbosity_counts() {
    let cli = Cli::try_parse_from(["policyforge", "-vvv", "dialects"]).expect("should parse");
    assert_eq!(cli.verbose, 3);
}
