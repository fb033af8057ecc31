//! Activity-based condition rendering.
//!
//! Activity rows test the platform activity itself rather than a
//! transaction; values are always quoted.

use policyforge_core::{ActivityCondition, ConditionConfig, DialectKind};

use crate::dialect::{join_clauses, Dialect, FieldInfo};

/// Commonly used activity types.
pub const ACTIVITY_TYPES: &[&str] = &[
    "ACTIVITY_TYPE_SIGN_RAW_PAYLOAD_V2",
    "ACTIVITY_TYPE_SIGN_TRANSACTION_V2",
    "ACTIVITY_TYPE_CREATE_WALLET",
    "ACTIVITY_TYPE_CREATE_USERS",
    "ACTIVITY_TYPE_CREATE_POLICY",
    "ACTIVITY_TYPE_DELETE_POLICY",
];

const FIELDS: &[FieldInfo] = &[
    FieldInfo::new("type", "Activity Type").with_hint("e.g. ACTIVITY_TYPE_SIGN_TRANSACTION_V2"),
    FieldInfo::new("resource", "Resource"),
];

/// `activity.<field> <op> '<value>'`
#[must_use]
pub fn render_row(row: &ActivityCondition) -> String {
    format!("activity.{} {} '{}'", row.field, row.operator, row.value)
}

/// Render all rows, AND-joined in order.
#[must_use]
pub fn render(rows: &[ActivityCondition]) -> String {
    join_clauses(rows.iter().map(render_row))
}

/// The activity dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityDialect;

impl Dialect for ActivityDialect {
    fn kind(&self) -> DialectKind {
        DialectKind::Activity
    }

    fn label(&self) -> &'static str {
        "Activity-based"
    }

    fn doc_url(&self) -> &'static str {
        "https://docs.turnkey.com/api/activity-types"
    }

    fn fields(&self) -> &'static [FieldInfo] {
        FIELDS
    }

    fn examples(&self) -> &'static [&'static str] {
        ACTIVITY_TYPES
    }

    fn render(&self, condition: &ConditionConfig) -> Option<String> {
        match condition {
            ConditionConfig::Activity { conditions } => Some(render(conditions)),
            _ => None,
        }
    }
}
