//! # Application State
//!
//! Shared state for HTTP handlers.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Arc<AppState>                                               │
//! │  ├── validator: ReceiptValidator   read-only after startup   │
//! │  └── store:     ReceiptStore       internally synchronized   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Neither field needs an outer lock: the validator is immutable and the
//! store guards its own map.

use receipt_core::{ReceiptValidator, StartupError};
use receipt_store::ReceiptStore;

/// Shared application state.
#[derive(Debug)]
pub struct AppState {
    pub validator: ReceiptValidator,
    pub store: ReceiptStore,
}

impl AppState {
    /// Builds the validator and an empty store.
    ///
    /// Fails only if the validator's patterns do not compile, in which case
    /// the server must not start.
    pub fn new() -> Result<Self, StartupError> {
        Ok(AppState {
            validator: ReceiptValidator::new()?,
            store: ReceiptStore::new(),
        })
    }
}
