//! # Money Module
//!
//! Provides the `Money` type for receipt prices and totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing item prices as floats:                                         │
//! │    6.49 + 12.25 + 1.26 + 3.35 + 12.00 = 35.35000000000001   ❌          │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    649 + 1225 + 126 + 335 + 1200 = 3535                    ✅          │
//! │                                                                         │
//! │  Every amount on a receipt has exactly two decimal digits, so cents    │
//! │  represent it exactly and "within 0.001" becomes plain equality.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::money::Money;
//!
//! let price = Money::parse("12.25").unwrap();
//! assert_eq!(price.cents(), 1225);
//! assert_eq!(price.to_string(), "12.25");
//!
//! assert!(Money::parse("6.4").is_err()); // exactly two decimals
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ParseError;

// =============================================================================
// Money Type
// =============================================================================

/// A non-negative monetary value in cents.
///
/// ## Design Decisions
/// - **i64 cents**: exact arithmetic, no float drift
/// - **Only built from cents or parsed text**: there is no `from_float`
/// - **Non-negative**: the textual form admits no sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        debug_assert!(cents >= 0, "money is never negative");
        Money(cents)
    }

    /// Parses the receipt form `D+.DD`.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert_eq!(Money::parse("35.35").unwrap().cents(), 3535);
    /// assert_eq!(Money::parse("007.50").unwrap().cents(), 750);
    /// assert!(Money::parse("-1.00").is_err());
    /// assert!(Money::parse("1.005").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        // Digits, a literal '.', then exactly two digits. No sign, no exponent.
        let (whole, fraction) = s
            .split_once('.')
            .filter(|(whole, fraction)| {
                is_ascii_digits(whole) && fraction.len() == 2 && is_ascii_digits(fraction)
            })
            .ok_or_else(|| ParseError::InvalidAmount(s.to_string()))?;

        // Both parts are plain ASCII digits, so the only possible failure is
        // overflow.
        let too_large = || ParseError::AmountTooLarge(s.to_string());
        let whole: i64 = whole.parse().map_err(|_| too_large())?;
        let fraction: i64 = fraction.parse().map_err(|_| too_large())?;

        whole
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(fraction))
            .map(Money)
            .ok_or_else(too_large)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        self.0 % 100
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// True when the amount has no cents (e.g. `9.00`).
    #[inline]
    pub const fn is_whole(&self) -> bool {
        self.0 % 100 == 0
    }

    /// True when the amount is an exact multiple of `step`.
    ///
    /// A zero step never divides anything.
    #[inline]
    pub const fn is_multiple_of(&self, step: Money) -> bool {
        step.0 != 0 && self.0 % step.0 == 0
    }

    #[inline]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Sums amounts, returning `None` on overflow.
    pub fn checked_sum<I>(amounts: I) -> Option<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |acc, amount| acc.checked_add(amount))
    }

    /// Percentage of this amount as whole points, rounded up.
    ///
    /// `pct` is a whole percentage; `ceil(cents * pct / 10000)`.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// // 20% of 12.25 = 2.45 → 3
    /// assert_eq!(Money::from_cents(1225).percent_ceil(20), 3);
    /// // 20% of 5.00 = 1.00 → 1
    /// assert_eq!(Money::from_cents(500).percent_ceil(20), 1);
    /// ```
    pub fn percent_ceil(&self, pct: u32) -> u64 {
        let scaled = self.0 as u128 * pct as u128;
        scaled.div_ceil(10_000) as u64
    }
}

fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders the canonical receipt form, e.g. `35.35`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.dollars(), self.cents_part())
    }
}

/// Serializes as the display string, e.g. `"35.35"`, the same form receipts
/// are submitted in.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for Money {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

impl TryFrom<&str> for Money {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Money::parse(s)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
