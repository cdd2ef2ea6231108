//! # Domain Types
//!
//! Core domain types used throughout the receipt processor.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Wire shape (all strings)            Parsed model                       │
//! │  ┌─────────────────────┐             ┌─────────────────────┐            │
//! │  │ ReceiptSubmission   │  TryFrom    │ Receipt             │            │
//! │  │  retailer           │ ──────────► │  retailer: String   │            │
//! │  │  purchaseDate  "…"  │  (Field     │  purchase_date      │            │
//! │  │  purchaseTime  "…"  │   Parsers)  │  purchase_time      │            │
//! │  │  items [ItemSub…]   │             │  items: Vec<Item>   │            │
//! │  │  total         "…"  │             │  total: Money       │            │
//! │  └─────────────────────┘             └─────────────────────┘            │
//! │                                                                         │
//! │  ┌─────────────────────┐                                                │
//! │  │ ReceiptId           │  UUID v4, minted by the store on insert       │
//! │  └─────────────────────┘                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Decoding never relies on per-type deserialize hooks: serde only reads
//! strings, and the Field Parsers run explicitly in `TryFrom`.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ParseError;
use crate::money::Money;
use crate::parse::{parse_amount, parse_date, parse_time};

// =============================================================================
// Receipt ID
// =============================================================================

/// Opaque identifier of a stored receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    /// Mints a fresh random (v4) identifier.
    pub fn new() -> Self {
        ReceiptId(Uuid::new_v4())
    }
}

impl Default for ReceiptId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for ReceiptId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(ReceiptId)
            .map_err(|_| ParseError::InvalidId(s.to_string()))
    }
}

// =============================================================================
// Parsed Model
// =============================================================================

/// A purchased line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub short_description: String,
    pub price: Money,
}

/// A parsed (but not yet validated) receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub items: Vec<Item>,
    pub total: Money,
}

impl Receipt {
    /// Decodes a JSON request body into a receipt.
    ///
    /// An empty body, invalid JSON, a missing field, or a field of the wrong
    /// JSON type is [`ParseError::Malformed`]; a badly formatted date, time
    /// or amount is reported against its field.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::Receipt;
    ///
    /// let body = br#"{
    ///     "retailer": "Target",
    ///     "purchaseDate": "2022-01-01",
    ///     "purchaseTime": "13:01",
    ///     "items": [{ "shortDescription": "Pepsi - 12-oz", "price": "1.25" }],
    ///     "total": "1.25"
    /// }"#;
    /// let receipt = Receipt::from_json(body).unwrap();
    /// assert_eq!(receipt.items.len(), 1);
    ///
    /// assert!(Receipt::from_json(b"").is_err());
    /// ```
    pub fn from_json(body: &[u8]) -> Result<Receipt, ParseError> {
        let submission: ReceiptSubmission =
            serde_json::from_slice(body).map_err(|e| ParseError::Malformed(e.to_string()))?;
        Receipt::try_from(submission)
    }

    /// Purchase date and time combined, with seconds at the end of the minute.
    pub fn purchased_at(&self) -> NaiveDateTime {
        let time = self
            .purchase_time
            .with_second(59)
            .unwrap_or(self.purchase_time);
        self.purchase_date.and_time(time)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

// =============================================================================
// Wire Shape
// =============================================================================

/// A line item exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSubmission {
    pub short_description: String,
    pub price: String,
}

/// A receipt exactly as submitted: every value is still text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptSubmission {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<ItemSubmission>,
    pub total: String,
}

impl TryFrom<ItemSubmission> for Item {
    type Error = ParseError;

    fn try_from(item: ItemSubmission) -> Result<Self, Self::Error> {
        Ok(Item {
            price: parse_amount(&item.price).map_err(|e| e.in_field("price"))?,
            short_description: item.short_description,
        })
    }
}

impl TryFrom<ReceiptSubmission> for Receipt {
    type Error = ParseError;

    fn try_from(submission: ReceiptSubmission) -> Result<Self, Self::Error> {
        let purchase_date =
            parse_date(&submission.purchase_date).map_err(|e| e.in_field("purchaseDate"))?;
        let purchase_time =
            parse_time(&submission.purchase_time).map_err(|e| e.in_field("purchaseTime"))?;

        let items = submission
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                Item::try_from(item).map_err(|e| match e {
                    // Re-tag "price" as "items[i].price"
                    ParseError::Field { field, source } => ParseError::Field {
                        field: format!("items[{index}].{field}"),
                        source,
                    },
                    other => other.in_field(format!("items[{index}]")),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let total = parse_amount(&submission.total).map_err(|e| e.in_field("total"))?;

        Ok(Receipt {
            retailer: submission.retailer,
            purchase_date,
            purchase_time,
            items,
            total,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ReceiptSubmission {
        ReceiptSubmission {
            retailer: "M&M-Corner-Market".to_string(),
            purchase_date: "2022-03-20".to_string(),
            purchase_time: "14:33".to_string(),
            items: vec![
                ItemSubmission {
                    short_description: "Gatorade".to_string(),
                    price: "2.25".to_string(),
                };
                4
            ],
            total: "9.00".to_string(),
        }
    }

    #[test]
    fn test_try_from_submission() {
        let receipt = Receipt::try_from(submission()).unwrap();
        assert_eq!(receipt.retailer, "M&M-Corner-Market");
        assert_eq!(receipt.purchase_date, NaiveDate::from_ymd_opt(2022, 3, 20).unwrap());
        assert_eq!(receipt.purchase_time, NaiveTime::from_hms_opt(14, 33, 0).unwrap());
        assert_eq!(receipt.item_count(), 4);
        assert!(receipt.items.iter().all(|i| i.price == Money::from_cents(225)));
        assert_eq!(receipt.total, Money::from_cents(900));
    }

    #[test]
    fn test_bad_item_price_names_its_position() {
        let mut sub = submission();
        sub.items[2].price = "6.4".to_string();

        let err = Receipt::try_from(sub).unwrap_err();
        assert_eq!(
            err,
            ParseError::Field {
                field: "items[2].price".to_string(),
                source: Box::new(ParseError::InvalidAmount("6.4".to_string())),
            }
        );
    }

    #[test]
    fn test_bad_fields_are_tagged() {
        let mut sub = submission();
        sub.purchase_date = "03/20/2022".to_string();
        let err = Receipt::try_from(sub).unwrap_err();
        assert!(matches!(&err, ParseError::Field { field, .. } if field == "purchaseDate"));

        let mut sub = submission();
        sub.total = "9".to_string();
        let err = Receipt::try_from(sub).unwrap_err();
        assert!(matches!(&err, ParseError::Field { field, .. } if field == "total"));
    }

    #[test]
    fn test_from_json_rejects_malformed_bodies() {
        assert!(matches!(Receipt::from_json(b""), Err(ParseError::Malformed(_))));
        assert!(matches!(Receipt::from_json(b"{}"), Err(ParseError::Malformed(_))));
        assert!(matches!(Receipt::from_json(b"[1, 2]"), Err(ParseError::Malformed(_))));

        // Numbers are not accepted where strings are expected
        let body = br#"{"retailer":"T","purchaseDate":"2022-01-01","purchaseTime":"13:01",
                        "items":[],"total":1.25}"#;
        assert!(matches!(Receipt::from_json(body), Err(ParseError::Malformed(_))));
    }

    #[test]
    fn test_from_json_allows_empty_items_and_extra_fields() {
        let body = br#"{"retailer":"T","purchaseDate":"2022-01-01","purchaseTime":"13:01",
                        "items":[],"total":"0.00","note":"ignored"}"#;
        let receipt = Receipt::from_json(body).unwrap();
        assert!(receipt.items.is_empty());
    }

    #[test]
    fn test_purchased_at_is_end_of_minute() {
        let receipt = Receipt::try_from(submission()).unwrap();
        let expected = NaiveDate::from_ymd_opt(2022, 3, 20)
            .unwrap()
            .and_hms_opt(14, 33, 59)
            .unwrap();
        assert_eq!(receipt.purchased_at(), expected);
    }

    #[test]
    fn test_receipt_id_round_trips_through_text() {
        let id = ReceiptId::new();
        let parsed: ReceiptId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);

        assert_eq!(
            "not-a-uuid".parse::<ReceiptId>(),
            Err(ParseError::InvalidId("not-a-uuid".to_string()))
        );
        assert!("".parse::<ReceiptId>().is_err());
    }

    #[test]
    fn test_receipt_id_serializes_as_string() {
        let id = ReceiptId::new();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::Value::String(id.to_string()));
    }
}
