//! In-memory ledgers for inventory, suppliers, and branches
//!
//! Each ledger is a plain owned struct with `&mut self` operations:
//! append-only transaction logs plus derived aggregate state, with
//! hash-map id indices for O(1) lookup and referential checks at
//! write time. The backend wraps all three in a single lock so that
//! cross-ledger operations happen in one critical section.

pub mod branch;
pub mod inventory;
pub mod supplier;

pub use branch::BranchRegistry;
pub use inventory::InventoryLedger;
pub use supplier::{PaymentEntry, PurchaseEntry, SupplierLedger};

use thiserror::Error;

/// Constraint and lookup failures raised by the ledgers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("duplicate {0} id")]
    DuplicateId(&'static str),

    #[error("category is referenced by existing items")]
    CategoryInUse,

    #[error("item is referenced by existing transactions")]
    ItemInUse,

    #[error("invalid {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
