//! # Points Module
//!
//! Deterministic points score for a validated receipt.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule                      Points                                      │
//! │  ────────────────────────  ─────────────────────────────────────────── │
//! │  retailer name             +1 per letter or digit                      │
//! │  round total               +50 if total has no cents                   │
//! │  quarter multiple          +25 if total is a multiple of 0.25          │
//! │  item pairs                +5 per two items                            │
//! │  item descriptions         ceil(price × 0.2) per item whose trimmed    │
//! │                            description length is a multiple of 3       │
//! │  odd day                   +6 if the purchase day is odd               │
//! │  afternoon                 +10 if purchased 14:00–15:59                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every rule reads the receipt independently; the score is their sum.
//!
//! ## Example
//! ```rust
//! use receipt_core::{points, Receipt};
//!
//! let body = br#"{"retailer":"M&M-Corner-Market","purchaseDate":"2022-03-20",
//!   "purchaseTime":"14:33","total":"9.00","items":[
//!     {"shortDescription":"Gatorade","price":"2.25"},
//!     {"shortDescription":"Gatorade","price":"2.25"},
//!     {"shortDescription":"Gatorade","price":"2.25"},
//!     {"shortDescription":"Gatorade","price":"2.25"}]}"#;
//! let receipt = Receipt::from_json(body).unwrap();
//! assert_eq!(points::score(&receipt), 109);
//! ```

use chrono::{Datelike, Timelike};
use serde::Serialize;

use crate::money::Money;
use crate::types::Receipt;

const ROUND_TOTAL_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const DESCRIPTION_PRICE_PCT: u32 = 20;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// Per-rule contributions to a receipt's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsBreakdown {
    pub retailer_name: u64,
    pub round_total: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    pub fn for_receipt(receipt: &Receipt) -> Self {
        PointsBreakdown {
            retailer_name: retailer_name_points(receipt),
            round_total: round_total_points(receipt),
            quarter_multiple: quarter_multiple_points(receipt),
            item_pairs: item_pair_points(receipt),
            item_descriptions: item_description_points(receipt),
            odd_day: odd_day_points(receipt),
            afternoon: afternoon_points(receipt),
        }
    }

    pub fn total(&self) -> u64 {
        self.retailer_name
            + self.round_total
            + self.quarter_multiple
            + self.item_pairs
            + self.item_descriptions
            + self.odd_day
            + self.afternoon
    }
}

/// Total points for a receipt.
pub fn score(receipt: &Receipt) -> u64 {
    PointsBreakdown::for_receipt(receipt).total()
}

// =============================================================================
// Rules
// =============================================================================

fn retailer_name_points(receipt: &Receipt) -> u64 {
    receipt
        .retailer
        .chars()
        .filter(|c| c.is_alphanumeric())
        .count() as u64
}

fn round_total_points(receipt: &Receipt) -> u64 {
    if receipt.total.is_whole() {
        ROUND_TOTAL_POINTS
    } else {
        0
    }
}

fn quarter_multiple_points(receipt: &Receipt) -> u64 {
    if receipt.total.is_multiple_of(Money::from_cents(25)) {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

fn item_pair_points(receipt: &Receipt) -> u64 {
    POINTS_PER_ITEM_PAIR * (receipt.item_count() / 2) as u64
}

fn item_description_points(receipt: &Receipt) -> u64 {
    receipt
        .items
        .iter()
        .filter(|item| item.short_description.trim().chars().count() % 3 == 0)
        .map(|item| item.price.percent_ceil(DESCRIPTION_PRICE_PCT))
        .sum()
}

fn odd_day_points(receipt: &Receipt) -> u64 {
    if receipt.purchase_date.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

// 16:00 itself does not count
fn afternoon_points(receipt: &Receipt) -> u64 {
    match receipt.purchase_time.hour() {
        14 | 15 => AFTERNOON_POINTS,
        _ => 0,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
