//! Error and warning types for gridstat.
//!
//! Provides [`ExtractError`] for conditions that abort extraction of the
//! current document, [`ExtractWarning`] for data-quality issues that allow
//! extraction to finish, [`ExtractResult`] for pairing a value with collected
//! warnings, and [`ExtractOptions`] for configuring line reconstruction and
//! warning behavior.

use std::convert::Infallible;
use std::fmt;

use thiserror::Error;

use crate::layout::LineOptions;

/// Fatal error types for report extraction.
///
/// Every variant is terminal for the document being processed. Nothing is
/// retried or replaced by a default value internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The document did not yield exactly two roster teams.
    #[error("expected exactly 2 teams, found {}: [{}]", .found.len(), .found.join(", "))]
    TeamCountMismatch {
        /// Team names that were resolved, in document order.
        found: Vec<String>,
    },

    /// A required label or section marker is absent.
    #[error("anchor not found: '{anchor}'")]
    AnchorNotFound {
        /// The literal label that was searched for.
        anchor: String,
    },

    /// A token expected to hold a number or a delimited value did not parse.
    #[error("malformed token '{token}' near '{context}'")]
    MalformedToken {
        /// Anchor or marker whose layout was being read.
        context: String,
        /// The offending token (empty when the token was missing).
        token: String,
    },

    /// A rate was requested with a zero denominator.
    #[error("division by zero computing {metric}")]
    DivisionByZero {
        /// Name of the derived metric.
        metric: &'static str,
    },

    /// A rate does not fit the integer range of a record.
    #[error("value out of range computing {metric}")]
    Overflow {
        /// Name of the derived metric.
        metric: &'static str,
    },

    /// A catalog entry could not be turned into a matcher.
    #[error("invalid anchor catalog: {0}")]
    InvalidCatalog(String),

    /// The word source failed to provide a page.
    #[error("word source error: {0}")]
    Source(String),

    /// A warning escalated to an error by strict mode.
    #[error("strict mode: {0}")]
    Strict(String),
}

impl ExtractError {
    /// Shorthand for [`ExtractError::AnchorNotFound`].
    pub fn anchor_not_found(anchor: impl Into<String>) -> Self {
        ExtractError::AnchorNotFound {
            anchor: anchor.into(),
        }
    }

    /// Shorthand for [`ExtractError::MalformedToken`].
    pub fn malformed(context: impl Into<String>, token: impl Into<String>) -> Self {
        ExtractError::MalformedToken {
            context: context.into(),
            token: token.into(),
        }
    }
}

impl From<Infallible> for ExtractError {
    fn from(err: Infallible) -> Self {
        match err {}
    }
}

/// Machine-readable warning code for categorizing data-quality issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WarningCode {
    /// Explicit home/visitor labels disagree with the order in which the
    /// teams first appear in the text.
    RoleDisagreement,
    /// The play-by-play section produced no plays for a team.
    EmptyPlayByPlay,
}

impl WarningCode {
    /// Returns the string tag for this warning code.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningCode::RoleDisagreement => "ROLE_DISAGREEMENT",
            WarningCode::EmptyPlayByPlay => "EMPTY_PLAY_BY_PLAY",
        }
    }
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal issue noticed during extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractWarning {
    /// Machine-readable warning code.
    pub code: WarningCode,
    /// Human-readable description of the warning.
    pub description: String,
}

impl ExtractWarning {
    /// Create a warning with a code and description.
    pub fn new(code: WarningCode, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
        }
    }

    /// Convert this warning into an [`ExtractError`].
    ///
    /// Used by strict mode to escalate warnings to errors.
    pub fn to_error(&self) -> ExtractError {
        ExtractError::Strict(self.to_string())
    }
}

impl fmt::Display for ExtractWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.description)
    }
}

/// Result wrapper that pairs a value with collected warnings.
#[derive(Debug, Clone)]
pub struct ExtractResult<T> {
    /// The extracted value.
    pub value: T,
    /// Warnings collected during extraction.
    pub warnings: Vec<ExtractWarning>,
}

impl<T> ExtractResult<T> {
    /// Create a result with no warnings.
    pub fn ok(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// Create a result with warnings.
    pub fn with_warnings(value: T, warnings: Vec<ExtractWarning>) -> Self {
        Self { value, warnings }
    }

    /// Returns true if there are no warnings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Transform the value while preserving warnings.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ExtractResult<U> {
        ExtractResult {
            value: f(self.value),
            warnings: self.warnings,
        }
    }
}

/// Options controlling extraction of one document.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Line reconstruction settings.
    pub lines: LineOptions,
    /// When true, any warning is escalated to an error (default: false).
    pub strict_mode: bool,
}
