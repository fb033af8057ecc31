//! Policy assembly: configuration in, API document out.
//!
//! [`build_policy`] is total and pure. It renders the consensus and condition,
//! then drops any part that rendered empty so the document never carries
//! empty strings or nulls.
//!
//! # Example
//!
//! ```
//! use policyforge_core::{PolicyConfig, PolicyEffect};
//! use policyforge_policy::{build_policy, export_file_name, format_policy_json};
//!
//! let document = build_policy(&PolicyConfig::default());
//! assert_eq!(document.policy_name, "Unnamed Policy");
//! assert_eq!(document.effect, PolicyEffect::Allow);
//! assert!(document.consensus.is_none());
//! assert!(document.condition.is_none());
//! assert!(document.notes.is_none());
//!
//! assert_eq!(
//!     format_policy_json(&document, true),
//!     "{\n  \"policyName\": \"Unnamed Policy\",\n  \"effect\": \"EFFECT_ALLOW\"\n}"
//! );
//! assert_eq!(export_file_name(&document), "Unnamed_Policy.json");
//! ```

use policyforge_core::{PolicyConfig, PolicyDocument, UNNAMED_POLICY};
use policyforge_dialect::render_condition;

use crate::consensus::render_consensus;

/// Assemble the policy document for `config`.
#[must_use]
pub fn build_policy(config: &PolicyConfig) -> PolicyDocument {
    let policy_name = if config.policy_name.is_empty() {
        UNNAMED_POLICY.to_string()
    } else {
        config.policy_name.clone()
    };

    let consensus = config
        .consensus
        .as_ref()
        .filter(|consensus| !consensus.users.is_empty())
        .map(render_consensus);

    let condition = config
        .condition
        .as_ref()
        .map(render_condition)
        .filter(|condition| !condition.is_empty());

    let notes = config.notes.clone().filter(|notes| !notes.is_empty());

    tracing::debug!(
        policy = %policy_name,
        effect = %config.effect,
        has_consensus = consensus.is_some(),
        has_condition = condition.is_some(),
        "built policy document"
    );

    PolicyDocument {
        policy_name,
        effect: config.effect,
        consensus,
        condition,
        notes,
    }
}

/// Serialize a document to JSON, 2-space indented when `pretty`.
///
/// Keys appear in the order `policyName`, `effect`, `consensus`, `condition`,
/// `notes`.
#[must_use]
pub fn format_policy_json(document: &PolicyDocument, pretty: bool) -> String {
    // A document holds only strings and unit enums, so serialization cannot fail.
    let rendered = if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    };
    rendered.unwrap_or_default()
}

/// File name used when downloading: every UTF-16 code unit outside
/// `[A-Za-z0-9]` becomes `_`, then `.json` is appended.
///
/// A character outside the Basic Multilingual Plane is two code units and so
/// becomes `__`.
#[must_use]
pub fn export_file_name(document: &PolicyDocument) -> String {
    let stem: String = document
        .policy_name
        .encode_utf16()
        .map(|unit| match u8::try_from(unit) {
            Ok(byte) if byte.is_ascii_alphanumeric() => char::from(byte),
            _ => '_',
        })
        .collect();
    format!("{stem}.json")
}
