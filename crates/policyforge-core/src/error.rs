//! Error types for `policyforge`.
//!
//! Rendering a policy never fails: every reachable configuration renders to
//! some (possibly degenerate) expression string. Errors only arise at the
//! edges of the system, organized by domain:
//!
//! - [`ParseError`] - Textual row or document input could not be understood
//! - [`PresetError`] - Preset catalog lookups
//! - [`ConfigError`] - Application configuration loading
//!
//! Each CLI command wraps the ones it can hit in its own error enum.
//!
//! # Example
//!
//! ```rust
//! use policyforge_core::error::{ParseError, ParseResult};
//!
//! fn parse_effect(token: &str) -> ParseResult<()> {
//!     if token != "allow" && token != "deny" {
//!         return Err(ParseError::unknown_token("effect", token));
//!     }
//!     Ok(())
//! }
//!
//! assert!(parse_effect("allow").is_ok());
//! assert_eq!(
//!     parse_effect("maybe").unwrap_err().to_string(),
//!     "unknown effect: 'maybe'"
//! );
//! ```

// ============================================================================
// ParseError
// ============================================================================

/// Errors that can occur while parsing textual input.
///
/// Values inside rows are never validated; these errors only cover the
/// structural tokens (field names, operators, quantifiers) and whole
/// configuration documents.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A token is not one of the accepted values for its position.
    #[error("unknown {kind}: '{token}'")]
    UnknownToken {
        /// What the token was supposed to be (e.g. "ethereum field").
        kind: String,
        /// The token as written.
        token: String,
    },

    /// A required token was not present.
    #[error("missing {expected} in {kind}")]
    MissingToken {
        /// The kind of input being parsed.
        kind: String,
        /// Which token was expected.
        expected: String,
    },

    /// A token that must be a non-negative integer was not.
    #[error("invalid number for {kind}: '{value}'")]
    InvalidNumber {
        /// What the number was for.
        kind: String,
        /// The text that failed to parse.
        value: String,
    },

    /// A whole policy configuration document is malformed.
    #[error("invalid policy document: {context}")]
    InvalidDocument {
        /// Context about what is malformed.
        context: String,
    },
}

impl ParseError {
    /// Create an `UnknownToken` error.
    #[must_use]
    pub fn unknown_token(kind: impl Into<String>, token: impl Into<String>) -> Self {
        Self::UnknownToken {
            kind: kind.into(),
            token: token.into(),
        }
    }

    /// Create a `MissingToken` error.
    #[must_use]
    pub fn missing_token(kind: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::MissingToken {
            kind: kind.into(),
            expected: expected.into(),
        }
    }

    /// Create an `InvalidNumber` error.
    #[must_use]
    pub fn invalid_number(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// Create an `InvalidDocument` error.
    #[must_use]
    pub fn invalid_document(context: impl Into<String>) -> Self {
        Self::InvalidDocument {
            context: context.into(),
        }
    }
}

// ============================================================================
// PresetError
// ============================================================================

/// Errors from the preset catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PresetError {
    /// No preset has the requested id.
    #[error("preset not found: {id}")]
    NotFound {
        /// The id that was requested.
        id: String,
    },

    /// The category filter is neither `all` nor a known category.
    #[error("unknown preset category: {category}")]
    UnknownCategory {
        /// The category that was requested.
        category: String,
    },
}

impl PresetError {
    /// Create a `NotFound` error.
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create an `UnknownCategory` error.
    #[must_use]
    pub fn unknown_category(category: impl Into<String>) -> Self {
        Self::UnknownCategory {
            category: category.into(),
        }
    }
}

// ============================================================================
// ConfigError
// ============================================================================

/// Errors that can occur during configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file was not found.
    #[error("configuration file not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Failed to parse the configuration file.
    #[error("failed to parse configuration: {context}")]
    ParseFailed {
        /// Context about the parsing failure.
        context: String,
    },

    /// A configuration value is invalid.
    #[error("invalid value for {field}: {value}")]
    InvalidValue {
        /// The field name with the invalid value.
        field: String,
        /// The invalid value.
        value: String,
    },

    /// The home directory could not be determined.
    #[error("could not determine home directory")]
    NoHomeDirectory,

    /// File system I/O error.
    #[error("{context}: {source}")]
    Io {
        /// What was being read or written.
        context: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Create a `FileNotFound` error.
    #[must_use]
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a `ParseFailed` error.
    #[must_use]
    pub fn parse_failed(context: impl Into<String>) -> Self {
        Self::ParseFailed {
            context: context.into(),
        }
    }

    /// Create an `InvalidValue` error.
    #[must_use]
    pub fn invalid_value(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a `NoHomeDirectory` error.
    #[must_use]
    pub const fn no_home_directory() -> Self {
        Self::NoHomeDirectory
    }

    /// Create an `Io` error with context.
    #[must_use]
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

// ============================================================================
// Result type aliases
// ============================================================================

/// A `Result` type alias for parsing operations.
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// A `Result` type alias for preset lookups.
pub type PresetResult<T> = std::result::Result<T, PresetError>;

// ============================================================================
// Unit Tests
// ============================================================================
