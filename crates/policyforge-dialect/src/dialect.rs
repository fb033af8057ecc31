//! The [`Dialect`] trait describing one condition language.
//!
//! Each dialect knows how to render its own [`ConditionConfig`] variant and
//! carries the descriptive metadata (labels, field hints, documentation link)
//! that front ends show next to the form.
//!
//! # Example Implementation
//!
//! ```
//! use policyforge_core::{ConditionConfig, DialectKind};
//! use policyforge_dialect::{Dialect, FieldInfo};
//!
//! struct Passthrough;
//!
//! impl Dialect for Passthrough {
//!     fn kind(&self) -> DialectKind {
//!         DialectKind::Raw
//!     }
//!
//!     fn label(&self) -> &'static str {
//!         "Passthrough"
//!     }
//!
//!     fn doc_url(&self) -> &'static str {
//!         "https://example.invalid"
//!     }
//!
//!     fn fields(&self) -> &'static [FieldInfo] {
//!         &[]
//!     }
//!
//!     fn render(&self, condition: &ConditionConfig) -> Option<String> {
//!         match condition {
//!             ConditionConfig::Raw { expression } => Some(expression.clone()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! assert_eq!(Passthrough.id(), "raw");
//! ```

use policyforge_core::{ConditionConfig, DialectKind};

/// Descriptive metadata for one selectable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    /// Field token as written in rows and expressions.
    pub name: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Optional help text.
    pub hint: Option<&'static str>,
    /// Whether the value renders unquoted.
    pub numeric: bool,
}

impl FieldInfo {
    /// A quoted field without a hint.
    #[must_use]
    pub const fn new(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            hint: None,
            numeric: false,
        }
    }

    /// Attach help text.
    #[must_use]
    pub const fn with_hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    /// Mark the field as rendering unquoted.
    #[must_use]
    pub const fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }
}

/// A condition language the builder can render.
///
/// Implementations must be `Send + Sync` so the registry can be shared.
pub trait Dialect: Send + Sync {
    /// The [`ConditionConfig`] variant this dialect renders.
    fn kind(&self) -> DialectKind;

    /// Stable identifier (`ethereum`, `solana`, ...).
    fn id(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Human-readable name.
    fn label(&self) -> &'static str;

    /// Link to reference documentation.
    fn doc_url(&self) -> &'static str;

    /// Selectable fields with labels and hints.
    fn fields(&self) -> &'static [FieldInfo];

    /// Example values worth suggesting (activity types, for instance).
    fn examples(&self) -> &'static [&'static str] {
        &[]
    }

    /// Render `condition` if it belongs to this dialect.
    ///
    /// Returns `None` for another dialect's variant, and `Some("")` when the
    /// rows produce no clauses.
    fn render(&self, condition: &ConditionConfig) -> Option<String>;
}

/// Join non-empty clauses with `" && "`.
pub(crate) fn join_clauses<I>(clauses: I) -> String
where
    I: IntoIterator<Item = String>,
{
    clauses
        .into_iter()
        .filter(|clause| !clause.is_empty())
        .collect::<Vec<_>>()
        .join(" && ")
}
