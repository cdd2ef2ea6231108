//! # Store Error Types
//!
//! Error types for receipt store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  "/receipts/{id}/points"                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ReceiptId::from_str ── malformed ──┐                                  │
//! │       │                              │                                  │
//! │       ▼                              ▼                                  │
//! │  map lookup ─────── miss ───► StoreError::NotFound (this module)       │
//! │                                      │                                  │
//! │                                      ▼                                  │
//! │                              ApiError (404) in receipt-api             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Receipt store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No receipt is stored under this ID.
    ///
    /// ## When This Occurs
    /// - The ID was never returned by `insert`
    /// - The ID string is not a valid receipt ID at all
    #[error("Receipt not found: {id}")]
    NotFound { id: String },
}

impl StoreError {
    /// Creates a NotFound error for the given ID text.
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
