//! # Validation Module
//!
//! Business rule validation for parsed receipts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Decoding (types.rs)                                          │
//! │  ├── JSON shape, required fields                                       │
//! │  └── Field Parsers: date, time, amount          → ParseError           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── 1. retailer: non-empty, no whitespace                             │
//! │  ├── 2. descriptions: ASCII letters, digits, whitespace, '-', '_'      │
//! │  ├── 3. purchase date+time not after "now"                             │
//! │  └── 4. item prices sum to the total            → ValidationError      │
//! │                                                                         │
//! │  First failing rule wins; nothing is accumulated.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use chrono::NaiveDate;
//! use receipt_core::validation::ReceiptValidator;
//!
//! let validator = ReceiptValidator::new().unwrap();
//! let now = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//!
//! let body = br#"{"retailer":"Target","purchaseDate":"2022-01-01","purchaseTime":"13:01",
//!                 "items":[{"shortDescription":"Pepsi - 12-oz","price":"1.25"}],
//!                 "total":"1.25"}"#;
//! assert!(validator.accept(body, now).is_ok());
//! ```

use chrono::NaiveDateTime;
use regex::Regex;

use crate::error::{CoreResult, StartupError, ValidationError};
use crate::money::Money;
use crate::types::Receipt;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const RETAILER_PATTERN: &str = r"^\S+$";
// ASCII classes only
const DESCRIPTION_PATTERN: &str = r"^(?-u:[\w\s\-])+$";

// =============================================================================
// Receipt Validator
// =============================================================================

/// Applies every receipt rule, with its patterns compiled once.
///
/// Build it at startup and share it; it holds no mutable state.
#[derive(Debug, Clone)]
pub struct ReceiptValidator {
    retailer: Regex,
    description: Regex,
}

impl ReceiptValidator {
    /// Compiles the field patterns.
    ///
    /// ## Errors
    /// [`StartupError::Pattern`] if a pattern fails to compile. Callers
    /// should refuse to start rather than serve without validation.
    pub fn new() -> Result<Self, StartupError> {
        Ok(ReceiptValidator {
            retailer: compile("retailer", RETAILER_PATTERN)?,
            description: compile("item description", DESCRIPTION_PATTERN)?,
        })
    }

    /// Checks a parsed receipt against all rules, evaluated at `now`.
    ///
    /// `now` should be the current UTC wall-clock time; purchase date and
    /// time are read as UTC.
    pub fn validate(&self, receipt: &Receipt, now: NaiveDateTime) -> ValidationResult<()> {
        self.validate_retailer(&receipt.retailer)?;
        for (index, item) in receipt.items.iter().enumerate() {
            self.validate_description(index, &item.short_description)?;
        }
        validate_purchase_time(receipt, now)?;
        validate_total(receipt)?;
        Ok(())
    }

    /// Decodes a JSON body and validates it: the whole submission path.
    pub fn accept(&self, body: &[u8], now: NaiveDateTime) -> CoreResult<Receipt> {
        let receipt = Receipt::from_json(body)?;
        self.validate(&receipt, now)?;
        Ok(receipt)
    }

    /// Retailer must be present and contain no whitespace.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::validation::ReceiptValidator;
    ///
    /// let v = ReceiptValidator::new().unwrap();
    /// assert!(v.validate_retailer("M&M-Corner-Market").is_ok());
    /// assert!(v.validate_retailer("Corner Market").is_err());
    /// assert!(v.validate_retailer("").is_err());
    /// ```
    pub fn validate_retailer(&self, retailer: &str) -> ValidationResult<()> {
        if retailer.is_empty() {
            return Err(ValidationError::Required {
                field: "retailer".to_string(),
            });
        }

        if !self.retailer.is_match(retailer) {
            return Err(ValidationError::InvalidFormat {
                field: "retailer".to_string(),
                reason: "must not contain whitespace".to_string(),
            });
        }

        Ok(())
    }

    /// Item description may only hold ASCII letters, digits, whitespace, '-'
    /// and '_'.
    pub fn validate_description(&self, index: usize, description: &str) -> ValidationResult<()> {
        let field = format!("items[{index}].shortDescription");

        if description.is_empty() {
            return Err(ValidationError::Required { field });
        }

        if !self.description.is_match(description) {
            return Err(ValidationError::InvalidFormat {
                field,
                reason: "must contain only letters, digits, whitespace, hyphens, and underscores"
                    .to_string(),
            });
        }

        Ok(())
    }
}

fn compile(rule: &'static str, pattern: &str) -> Result<Regex, StartupError> {
    Regex::new(pattern).map_err(|source| StartupError::Pattern { rule, source })
}

// =============================================================================
// Cross-Field Rules
// =============================================================================

/// Purchase must not be strictly after `now`.
///
/// The purchase instant uses the last second of its minute, so a receipt
/// stamped with the current minute is only accepted once that minute ends.
pub fn validate_purchase_time(receipt: &Receipt, now: NaiveDateTime) -> ValidationResult<()> {
    let purchased_at = receipt.purchased_at();
    if purchased_at > now {
        return Err(ValidationError::FuturePurchase { purchased_at, now });
    }
    Ok(())
}

/// Item prices must add up to the total exactly.
///
/// Amounts are whole cents, so an absolute tolerance of 0.001 is plain
/// equality. Both a short and an inflated total are rejected.
pub fn validate_total(receipt: &Receipt) -> ValidationResult<()> {
    let item_sum = Money::checked_sum(receipt.items.iter().map(|item| item.price))
        .ok_or(ValidationError::TotalOverflow)?;

    if item_sum != receipt.total {
        return Err(ValidationError::TotalMismatch {
            item_sum,
            total: receipt.total,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
