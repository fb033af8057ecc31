//! Every shipped preset renders to its golden document in
//! `tests/fixtures/presets/<id>.json`.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use policyforge_core::PolicyDocument;
use policyforge_policy::presets::presets;
use policyforge_policy::{build_policy, format_policy_json, EditAction, PolicyEditor};

use crate::common;

#[test]
fn test_every_preset_has_a_fixture() {
    for preset in presets() {
        let path = format!("presets/{}.json", preset.id);
        assert!(
            common::fixture_path(&path).exists(),
            "missing fixture for {}",
            preset.id
        );
    }
}

#[test]
fn test_preset_documents_match_fixtures_byte_for_byte() {
    for preset in presets() {
        let expected = common::read_fixture(&format!("presets/{}.json", preset.id)).unwrap();
        let rendered = format_policy_json(&build_policy(&preset.config), true);
        assert_eq!(rendered, expected.trim_end(), "preset {}", preset.id);
    }
}

#[test]
fn test_fixtures_parse_as_documents() {
    for preset in presets() {
        let value = common::load_fixture(&format!("presets/{}.json", preset.id)).unwrap();
        let document: PolicyDocument = serde_json::from_value(value).unwrap();
        assert_eq!(document, build_policy(&preset.config));
    }
}

#[test]
fn test_loading_preset_into_editor_matches_fixture() {
    for preset in presets() {
        let editor = PolicyEditor::new().apply(EditAction::LoadPreset(preset.id.to_string()));
        let expected = common::load_fixture(&format!("presets/{}.json", preset.id)).unwrap();
        let rendered = serde_json::to_value(editor.document()).unwrap();
        assert_eq!(rendered, expected, "preset {}", preset.id);
    }
}
