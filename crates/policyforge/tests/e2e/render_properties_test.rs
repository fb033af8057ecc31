//! Properties of the renderers and the editor.

#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::panic,
    clippy::indexing_slicing
)]

use policyforge_core::{
    ConditionConfig, ConsensusOperator, DialectKind, PolicyConfig, PolicyDocument,
};
use policyforge_policy::{build_policy, format_policy_json, render_consensus, EditAction, PolicyEditor};
use proptest::prelude::*;

use crate::common::{consensus_config, ethereum_address, ethereum_row, user_id};

proptest! {
    #[test]
    fn prop_build_is_deterministic(consensus in consensus_config(), rows in prop::collection::vec(ethereum_row(), 0..5)) {
        let config = PolicyConfig {
            consensus: Some(consensus),
            condition: Some(ConditionConfig::Ethereum { conditions: rows }),
            ..PolicyConfig::default()
        };
        let first = build_policy(&config);
        prop_assert_eq!(&first, &build_policy(&config));

        let json = format_policy_json(&first, true);
        let parsed: PolicyDocument = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, first);
    }

    #[test]
    fn prop_count_threshold_suffix(consensus in consensus_config()) {
        prop_assume!(!consensus.users.is_empty());
        let mut consensus = consensus;
        consensus.operator = ConsensusOperator::Count;

        let rendered = render_consensus(&consensus);
        let expected = consensus.count_threshold.filter(|t| *t >= 1).unwrap_or(1);
        prop_assert!(rendered.starts_with("approvers.count(user, "));
        let suffix = format!(") >= {expected}");
        prop_assert!(rendered.ends_with(&suffix));
    }

    #[test]
    fn prop_consensus_lists_every_user_in_order(consensus in consensus_config()) {
        let rendered = render_consensus(&consensus);
        let mut cursor = 0;
        for user in &consensus.users {
            let needle = format!("user.id == '{}'", user.user_id);
            let found = rendered[cursor..].find(&needle);
            prop_assert!(found.is_some(), "{} missing from {}", needle, rendered);
            cursor += found.unwrap_or(0) + needle.len();
        }
    }

    #[test]
    fn prop_consensus_absent_without_users(operator in prop::sample::select(ConsensusOperator::ALL.to_vec()), threshold in prop::option::of(0u32..5)) {
        let mut config = PolicyConfig::default();
        let consensus = config.consensus.as_mut().unwrap();
        consensus.operator = operator;
        consensus.count_threshold = threshold;

        prop_assert_eq!(build_policy(&config).consensus, None);
    }

    #[test]
    fn prop_raw_expression_is_verbatim(expression in "[ -~]{1,60}", rows in prop::collection::vec(ethereum_row(), 1..3)) {
        let editor = rows
            .into_iter()
            .fold(PolicyEditor::new(), |editor, row| editor.apply(EditAction::AddEthereum(row)))
            .apply(EditAction::SetRaw(expression.clone()));

        prop_assert_eq!(editor.dialect(), Some(DialectKind::Raw));
        prop_assert_eq!(editor.document().condition, Some(expression));
    }

    #[test]
    fn prop_clearing_raw_restores_rows(expression in "[ -~]{1,60}", rows in prop::collection::vec(ethereum_row(), 1..4)) {
        let editor = rows
            .into_iter()
            .fold(PolicyEditor::new(), |editor, row| editor.apply(EditAction::AddEthereum(row)));
        let before = editor.document();

        let editor = editor
            .apply(EditAction::SetRaw(expression))
            .apply(EditAction::ClearRaw);

        prop_assert_eq!(editor.dialect(), Some(DialectKind::Ethereum));
        prop_assert_eq!(editor.document(), before);
    }

    #[test]
    fn prop_address_rows_are_quoted(address in ethereum_address()) {
        let editor = PolicyEditor::new()
            .apply(EditAction::AddEthereum(format!("to == {address}").parse().unwrap()));
        prop_assert_eq!(
            editor.document().condition,
            Some(format!("eth.tx.to == '{address}'"))
        );
    }

    #[test]
    fn prop_added_users_render(ids in prop::collection::vec(user_id(), 1..4)) {
        let editor = ids.iter().fold(PolicyEditor::new(), |editor, id| {
            editor.apply(EditAction::AddUser { user_id: id.clone() })
        });
        let consensus = editor.document().consensus.unwrap();
        prop_assert!(consensus.starts_with("approvers.any(user, "));
        prop_assert_eq!(consensus.matches("user.id == ").count(), ids.len());
    }
}
