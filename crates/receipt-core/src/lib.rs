//! # receipt-core: Pure Business Logic for the Receipt Processor
//!
//! This crate is the **heart** of the receipt processor. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Processor Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    receipt-api (axum)                           │   │
//! │  │    POST /receipts/process        GET /receipts/{id}/points      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ receipt-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌──────────┐  │   │
//! │  │   │   parse   │  │   types   │  │ validation │  │  points  │  │   │
//! │  │   │ date/time │  │  Receipt  │  │   rules    │  │  score   │  │   │
//! │  │   │  amount   │  │ ReceiptId │  │            │  │          │  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO SHARED STATE • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                receipt-store (in-memory map)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer cents (no floating point!)
//! - [`parse`] - Field Parsers for dates, times and amounts
//! - [`types`] - Receipt, Item, ReceiptId and the raw submission shape
//! - [`validation`] - Receipt Validator
//! - [`points`] - Scoring Engine
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use receipt_core::{points, ReceiptValidator};
//!
//! let validator = ReceiptValidator::new().expect("patterns compile");
//! let body = br#"{
//!   "retailer": "Target",
//!   "purchaseDate": "2022-01-01",
//!   "purchaseTime": "13:01",
//!   "items": [
//!     {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
//!     {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
//!     {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
//!     {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
//!     {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
//!   ],
//!   "total": "35.35"
//! }"#;
//!
//! let receipt = validator.accept(body, Utc::now().naive_utc()).unwrap();
//! assert_eq!(points::score(&receipt), 28);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod parse;
pub mod points;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ParseError, StartupError, ValidationError};
pub use money::Money;
pub use points::{score, PointsBreakdown};
pub use types::{Item, ItemSubmission, Receipt, ReceiptId, ReceiptSubmission};
pub use validation::ReceiptValidator;
