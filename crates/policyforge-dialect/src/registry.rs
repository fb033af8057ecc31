//! Dialect registry for runtime lookup.
//!
//! The [`DialectRegistry`] lists every dialect in a fixed presentation order
//! (ethereum, solana, tron, activity, raw) and looks them up by id.
//!
//! # Example
//!
//! ```
//! use policyforge_dialect::DialectRegistry;
//!
//! let registry = DialectRegistry::new();
//! assert_eq!(
//!     registry.ids(),
//!     vec!["ethereum", "solana", "tron", "activity", "raw"]
//! );
//!
//! let solana = registry.get("solana").expect("solana is registered");
//! assert_eq!(solana.label(), "Solana");
//! ```
//!
//! Cloning is cheap; the dialect list is shared behind an `Arc`.

use std::sync::Arc;

use crate::{ActivityDialect, Dialect, EthereumDialect, RawDialect, SolanaDialect, TronDialect};

/// Ordered collection of dialects.
#[derive(Clone)]
pub struct DialectRegistry {
    dialects: Arc<Vec<Arc<dyn Dialect>>>,
}

impl DialectRegistry {
    /// Registry with every built-in dialect.
    #[must_use]
    pub fn new() -> Self {
        let dialects: Vec<Arc<dyn Dialect>> = vec![
            Arc::new(EthereumDialect),
            Arc::new(SolanaDialect),
            Arc::new(TronDialect),
            Arc::new(ActivityDialect),
            Arc::new(RawDialect),
        ];
        Self {
            dialects: Arc::new(dialects),
        }
    }

    /// Look up a dialect by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&dyn Dialect> {
        self.dialects
            .iter()
            .find(|d| d.id() == id)
            .map(AsRef::as_ref)
    }

    /// Dialects in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Dialect> {
        self.dialects.iter().map(AsRef::as_ref)
    }

    /// Ids in presentation order.
    #[must_use]
    pub fn ids(&self) -> Vec<&'static str> {
        self.iter().map(|d| d.id()).collect()
    }
}

impl Default for DialectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DialectRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialectRegistry")
            .field("dialects", &self.ids())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
