//! # Receipt Store
//!
//! Process-lifetime map from [`ReceiptId`] to accepted [`Receipt`].
//!
//! ## Thread Safety
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Receipt Store Operations                             │
//! │                                                                         │
//! │  Request                  Store Method             Lock                 │
//! │  ───────                  ────────────             ────                 │
//! │                                                                         │
//! │  POST /receipts/process ─► insert(receipt) ──────► write (one insert)  │
//! │                                                                         │
//! │  GET  /receipts/{id}/.. ─► get_by_str(id) ───────► read  (one lookup)  │
//! │                                                                         │
//! │  The lock never spans parsing, validation or scoring: receipts are     │
//! │  handed out as Arc<Receipt>, so the read guard is dropped before the   │
//! │  caller starts scoring.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why RwLock?
//! Lookups outnumber inserts and never conflict with each other.
//!
//! ## Poisoning
//! Entries are only ever added whole, with no multi-step updates, so a
//! panic while the lock was held cannot leave the map half-written. A
//! poisoned lock is therefore recovered rather than propagated.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use receipt_core::{Receipt, ReceiptId};
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Thread-safe in-memory receipt store.
///
/// Cheap to share: wrap it in an `Arc` (or hold it inside shared app state).
/// There is no update or delete; once inserted a receipt never changes.
#[derive(Debug, Default)]
pub struct ReceiptStore {
    receipts: RwLock<HashMap<ReceiptId, Arc<Receipt>>>,
}

impl ReceiptStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        ReceiptStore {
            receipts: RwLock::new(HashMap::new()),
        }
    }

    /// Stores a receipt under a freshly minted ID and returns the ID.
    ///
    /// IDs are random v4 UUIDs; should one ever collide with a stored
    /// receipt, another is drawn, so an ID is never reused.
    pub fn insert(&self, receipt: Receipt) -> ReceiptId {
        let receipt = Arc::new(receipt);
        let mut receipts = self
            .receipts
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        loop {
            let id = ReceiptId::new();
            if let Entry::Vacant(slot) = receipts.entry(id) {
                slot.insert(receipt);
                debug!(receipt_id = %id, stored = receipts.len(), "Receipt stored");
                return id;
            }
        }
    }

    /// Looks up a receipt by ID.
    pub fn get(&self, id: &ReceiptId) -> StoreResult<Arc<Receipt>> {
        let receipts = self
            .receipts
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        receipts.get(id).cloned().ok_or_else(|| {
            debug!(receipt_id = %id, "Receipt not found");
            StoreError::not_found(id.to_string())
        })
    }

    /// Looks up a receipt by its external string form.
    ///
    /// A string that is not a valid receipt ID is reported exactly like an
    /// unknown ID.
    pub fn get_by_str(&self, raw: &str) -> StoreResult<Arc<Receipt>> {
        let id: ReceiptId = raw.parse().map_err(|_| {
            debug!(receipt_id = raw, "Malformed receipt id");
            StoreError::not_found(raw)
        })?;
        self.get(&id)
    }

    /// Number of stored receipts.
    pub fn len(&self) -> usize {
        self.receipts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
