//! Fuzz target for configuration parsing and document assembly.
//!
//! # Running
//!
//! ```bash
//! cargo +nightly fuzz run policy_document
//! ```
//!
//! Arbitrary bytes are read as a JSON policy configuration. Whatever
//! parses must build a document whose JSON reads back unchanged and never
//! carries an empty consensus or condition.

#![no_main]

use libfuzzer_sys::fuzz_target;
use policyforge_core::{PolicyConfig, PolicyDocument};
use policyforge_policy::{build_policy, format_policy_json};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(config) = PolicyConfig::from_json_str(text) else {
        return;
    };

    let document = build_policy(&config);
    assert!(!document.policy_name.is_empty());
    assert_ne!(document.consensus.as_deref(), Some(""));
    assert_ne!(document.condition.as_deref(), Some(""));

    for pretty in [true, false] {
        let json = format_policy_json(&document, pretty);
        let parsed: PolicyDocument = serde_json::from_str(&json).expect("document JSON reads back");
        assert_eq!(parsed, document);
    }
});
