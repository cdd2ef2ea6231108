//! # receipt-store: Receipt Storage for the Receipt Processor
//!
//! This crate keeps accepted receipts for the lifetime of the process.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Processor Data Flow                         │
//! │                                                                         │
//! │  POST /receipts/process ──► ReceiptValidator::accept (receipt-core)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  receipt-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   RwLock<HashMap<ReceiptId, Arc<Receipt>>>                      │   │
//! │  │     insert(receipt) → ReceiptId                                 │   │
//! │  │     get(id) / get_by_str(raw) → Arc<Receipt> | NotFound         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GET /receipts/{id}/points ──► points::score (receipt-core)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use receipt_store::ReceiptStore;
//!
//! let store = ReceiptStore::new();
//! let id = store.insert(receipt);
//! let stored = store.get_by_str(&id.to_string())?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use store::ReceiptStore;
