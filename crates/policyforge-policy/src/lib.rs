//! # policyforge-policy
//!
//! Consensus rendering, policy assembly, the preset catalog, and the
//! immutable editor state for `policyforge`.
//!
//! ## Overview
//!
//! - [`render_consensus`] turns a [`ConsensusConfig`](policyforge_core::ConsensusConfig)
//!   into an `approvers.*` expression
//! - [`build_policy`] assembles the [`PolicyDocument`](policyforge_core::PolicyDocument)
//!   from a [`PolicyConfig`](policyforge_core::PolicyConfig)
//! - [`presets`] exposes the built-in templates
//! - [`PolicyEditor`] applies [`EditAction`]s one at a time
//!
//! ## Example
//!
//! ```
//! use policyforge_policy::{build_policy, format_policy_json, presets::require_preset};
//!
//! let preset = require_preset("eth-value-limit").expect("shipped preset");
//! let document = build_policy(&preset.config);
//!
//! assert_eq!(document.condition.as_deref(), Some("eth.tx.value <= 1000000000000000000"));
//! assert!(format_policy_json(&document, false).starts_with("{\"policyName\":"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builder;
pub mod consensus;
pub mod editor;
pub mod presets;

pub use builder::{build_policy, export_file_name, format_policy_json};
pub use consensus::render_consensus;
pub use editor::{EditAction, PolicyEditor};
pub use presets::{preset_by_id, presets_by_category, require_preset, Preset};
