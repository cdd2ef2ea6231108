//! # Error Types
//!
//! Domain-specific error types for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core errors (this file)                                       │
//! │  ├── ParseError       - Malformed body, date, time, amount or id       │
//! │  ├── ValidationError  - Well-formed receipt breaking a business rule   │
//! │  ├── StartupError     - Validator patterns failed to compile           │
//! │  └── CoreError        - Parse or validation failure of a submission    │
//! │                                                                         │
//! │  receipt-store errors (separate crate)                                 │
//! │  └── StoreError       - Receipt lookup failures                        │
//! │                                                                         │
//! │  API errors (in app)                                                   │
//! │  └── ApiError         - What HTTP clients see                          │
//! │                                                                         │
//! │  Flow: ParseError / ValidationError → CoreError → ApiError (400)       │
//! │        StoreError ────────────────────────────→ ApiError (404)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Parse Error
// =============================================================================

/// Malformed textual input.
///
/// Raised while decoding a submission, before any business rule runs.
/// Callers treat it exactly like a [`ValidationError`]: the submission is
/// rejected as a client error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The body is empty, not JSON, or not shaped like a receipt.
    #[error("malformed receipt: {0}")]
    Malformed(String),

    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid time '{0}': expected HH:MM")]
    InvalidTime(String),

    #[error("invalid amount '{0}': expected digits, a '.', and exactly two digits")]
    InvalidAmount(String),

    #[error("amount '{0}' is too large")]
    AmountTooLarge(String),

    #[error("invalid receipt id '{0}'")]
    InvalidId(String),

    /// A field-level failure, tagged with the field path
    /// (e.g. `items[2].price`).
    #[error("{field}: {source}")]
    Field {
        field: String,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Tags this error with the field it came from.
    pub fn in_field(self, field: impl Into<String>) -> Self {
        ParseError::Field {
            field: field.into(),
            source: Box::new(self),
        }
    }

    /// Strips any field tags and returns the underlying failure.
    pub fn root(&self) -> &ParseError {
        match self {
            ParseError::Field { source, .. } => source.root(),
            other => other,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Business rule violations on a fully parsed receipt.
///
/// Only the first failing rule is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value does not match its allowed pattern.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Purchase date and time lie after the moment of validation.
    #[error("purchase time {purchased_at} is in the future (now {now})")]
    FuturePurchase {
        purchased_at: NaiveDateTime,
        now: NaiveDateTime,
    },

    /// Item prices do not add up to the stated total.
    #[error("total {total} does not match item sum {item_sum}")]
    TotalMismatch { item_sum: Money, total: Money },

    /// Item prices overflow when summed.
    #[error("item prices overflow when summed")]
    TotalOverflow,
}

// =============================================================================
// Startup Error
// =============================================================================

/// Failure to build the validation machinery.
///
/// The only fatal condition in the core: the server refuses to start.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to compile {rule} pattern: {source}")]
    Pattern {
        rule: &'static str,
        #[source]
        source: regex::Error,
    },
}

// =============================================================================
// Core Error
// =============================================================================

/// Everything that can go wrong accepting a submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_tag_message() {
        let err = ParseError::InvalidAmount("6.4".to_string()).in_field("items[0].price");
        assert_eq!(
            err.to_string(),
            "items[0].price: invalid amount '6.4': expected digits, a '.', and exactly two digits"
        );
        assert_eq!(err.root(), &ParseError::InvalidAmount("6.4".to_string()));
    }

    #[test]
    fn test_nested_field_tags_unwrap_to_root() {
        let err = ParseError::InvalidTime("25:00".to_string())
            .in_field("purchaseTime")
            .in_field("receipt");
        assert_eq!(err.root(), &ParseError::InvalidTime("25:00".to_string()));
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "retailer".to_string(),
        };
        assert_eq!(err.to_string(), "retailer is required");

        let err = ValidationError::TotalMismatch {
            item_sum: Money::from_cents(1000),
            total: Money::from_cents(999),
        };
        assert_eq!(err.to_string(), "total 9.99 does not match item sum 10.00");
    }

    #[test]
    fn test_errors_convert_to_core_error() {
        let core_err: CoreError = ParseError::Malformed("empty body".to_string()).into();
        assert!(matches!(core_err, CoreError::Parse(_)));

        let core_err: CoreError = ValidationError::TotalOverflow.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
