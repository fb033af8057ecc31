//! The compiled `policyforge` binary: streams and exit codes.
//!
//! Every invocation passes `-c` with a config file inside a temp directory
//! so the user's home directory is never read.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use policyforge::cli::commands::exit_codes::{EXIT_ERROR, EXIT_SUCCESS};
use tempfile::TempDir;

use crate::common;

fn write_config(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, body).unwrap();
    path
}

fn policyforge(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_policyforge"))
        .arg("-c")
        .arg(config)
        .args(args)
        .output()
        .expect("binary should run")
}

#[test]
fn test_preset_show_prints_golden_document() {
    let dir = common::temp_data_dir();
    let config = write_config(&dir, "");

    let output = policyforge(&config, &["preset", "show", "eth-chain-specific"]);

    assert_eq!(output.status.code(), Some(EXIT_SUCCESS));
    let expected = common::read_fixture("presets/eth-chain-specific.json").unwrap();
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected);
}

#[test]
fn test_unknown_preset_exits_with_error() {
    let dir = common::temp_data_dir();
    let config = write_config(&dir, "");

    let output = policyforge(&config, &["preset", "show", "nope"]);

    assert_eq!(output.status.code(), Some(EXIT_ERROR));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error:"), "stderr: {stderr}");
    assert!(stderr.contains("nope"), "stderr: {stderr}");
}

#[test]
fn test_build_from_stdin_respects_compact_config() {
    let dir = common::temp_data_dir();
    let config = write_config(&dir, "[output]\npretty = false\n");

    let mut child = Command::new(env!("CARGO_BIN_EXE_policyforge"))
        .arg("-c")
        .arg(&config)
        .args(["build", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"{"policyName":"Stdin","effect":"EFFECT_DENY"}"#)
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(EXIT_SUCCESS));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "{\"policyName\":\"Stdin\",\"effect\":\"EFFECT_DENY\"}\n"
    );
}

#[test]
fn test_compose_download() {
    let dir = common::temp_data_dir();
    let exports = dir.path().join("exports");
    let config = write_config(
        &dir,
        &format!("[output]\ndirectory = {:?}\n", exports.display().to_string()),
    );

    let output = policyforge(
        &config,
        &[
            "compose",
            "--name",
            "Ops: hot wallet",
            "--user",
            "ops-1",
            "--tron",
            "contract TransferContract",
            "--tron",
            "amount <= 1000000",
            "--download",
        ],
    );

    assert_eq!(output.status.code(), Some(EXIT_SUCCESS));
    let downloaded = std::fs::read_to_string(exports.join("Ops__hot_wallet.json")).unwrap();
    assert_eq!(downloaded, String::from_utf8(output.stdout).unwrap());

    let value: serde_json::Value = serde_json::from_str(&downloaded).unwrap();
    assert_eq!(
        value["condition"],
        "tron.tx.contract[0].type == 'TransferContract' && tron.tx.contract[0].amount <= 1000000"
    );
    assert_eq!(value["consensus"], "approvers.any(user, user.id == 'ops-1')");
}

#[test]
fn test_invalid_config_file_is_fatal_except_for_config_init() {
    let dir = common::temp_data_dir();
    let config = write_config(&dir, "[logging]\nformat = \"xml\"\n");

    let output = policyforge(&config, &["dialects"]);
    assert_eq!(output.status.code(), Some(EXIT_ERROR));

    let output = policyforge(&config, &["config", "init", "--force"]);
    assert_eq!(output.status.code(), Some(EXIT_SUCCESS));

    let output = policyforge(&config, &["dialects"]);
    assert_eq!(output.status.code(), Some(EXIT_SUCCESS));
    assert!(String::from_utf8(output.stdout)
        .unwrap()
        .starts_with("Ethereum / EVM (ethereum)"));
}

#[test]
fn test_config_path_prints_explicit_file() {
    let dir = common::temp_data_dir();
    let config = write_config(&dir, "");

    let output = policyforge(&config, &["config", "path"]);

    assert_eq!(output.status.code(), Some(EXIT_SUCCESS));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap().trim_end(),
        config.display().to_string()
    );
}

#[test]
fn test_dialects_single_and_unknown_id() {
    let dir = common::temp_data_dir();
    let config = write_config(&dir, "");

    let output = policyforge(&config, &["dialects", "tron"]);
    assert_eq!(output.status.code(), Some(EXIT_SUCCESS));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Tron (tron)"));
    assert!(!stdout.contains("Solana"));

    let output = policyforge(&config, &["dialects", "bitcoin"]);
    assert_eq!(output.status.code(), Some(EXIT_ERROR));
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("Unknown dialect 'bitcoin'"));
}
