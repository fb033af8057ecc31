//! Error messages printed after `Error: `.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use policyforge::cli::commands::{
    BuildCommand, BuildError, ComposeCommand, ComposeError, PresetCommand, PresetCommandError,
};
use policyforge::cli::{ComposeArgs, OutputArgs, PresetAction};
use policyforge_core::Config;

#[test]
fn test_unknown_preset_message() {
    let err = PresetCommand::new(PresetAction::Show {
        id: "eth-everything".to_string(),
        editable: false,
        compact: false,
    })
    .render(&Config::default())
    .unwrap_err();
    assert!(matches!(err, PresetCommandError::Preset(_)));
    assert!(err.to_string().contains("eth-everything"));
}

#[test]
fn test_unknown_category_message() {
    let err = PresetCommand::new(PresetAction::List {
        category: "cosmos".to_string(),
    })
    .render(&Config::default())
    .unwrap_err();
    assert!(err.to_string().contains("cosmos"));
}

#[test]
fn test_unreadable_input_names_the_file() {
    let err = BuildCommand::new("/no/such/policy.json".to_string(), OutputArgs::default())
        .load()
        .unwrap_err();
    assert!(matches!(err, BuildError::Read { .. }));
    assert!(err.to_string().starts_with("Failed to read /no/such/policy.json"));
}

#[test]
fn test_malformed_input_message() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{\"effect\": \"EFFECT_MAYBE\"}").unwrap();

    let err = BuildCommand::new(path.display().to_string(), OutputArgs::default())
        .load()
        .unwrap_err();
    assert!(matches!(err, BuildError::Parse(_)));
    assert!(err.to_string().contains("EFFECT_MAYBE"));
}

#[test]
fn test_conflicting_dialects_message() {
    let err = ComposeCommand::new(ComposeArgs {
        activity: vec!["type == ACTIVITY_TYPE_CREATE_WALLET".parse().unwrap()],
        raw: Some("true".to_string()),
        ..ComposeArgs::default()
    })
    .compose()
    .unwrap_err();
    assert!(matches!(err, ComposeError::ConflictingDialects { .. }));
    assert_eq!(
        err.to_string(),
        "Conflicting condition flags: activity and raw rows cannot be combined"
    );
}
