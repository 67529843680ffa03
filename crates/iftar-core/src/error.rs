//! # Error Types
//!
//! Domain-specific error types for iftar-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  iftar-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Contact details / start date failures          │
//! │                                                                         │
//! │  iftar-cli errors (app)                                                │
//! │  └── ConfigError      - Invalid IFTAR_* environment values             │
//! │                                                                         │
//! │  NOT errors: malformed query strings. The decoder degrades every bad   │
//! │  value to its default instead of failing.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the failing field in every message
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A wire value that has no counterpart in a closed enum.
    ///
    /// Only raised by the strict `FromStr`/`TryFrom` conversions; the query
    /// decoder never surfaces it.
    #[error("Unknown {kind}: '{value}'")]
    UnknownValue { kind: &'static str, value: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the checkout-side checks in [`crate::validation`] before an
/// order is handed to payment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., malformed email or date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A date outside the allowed range.
    #[error("{field} must be between {start} and {end}")]
    OutsideWindow {
        field: String,
        start: String,
        end: String,
    },

    /// Several fields failed at once.
    #[error("{} validation errors: {}", .0.len(), join(.0))]
    Invalid(Vec<ValidationError>),
}

impl ValidationError {
    /// The field this error refers to. `None` for [`ValidationError::Invalid`].
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::Required { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::OutsideWindow { field, .. } => Some(field),
            ValidationError::Invalid(_) => None,
        }
    }
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
