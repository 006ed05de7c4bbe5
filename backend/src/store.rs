//! The in-memory store shared across handlers
//!
//! All three ledgers live behind one lock, constructed once at
//! startup and passed by reference through `AppState`. Holding the
//! single write guard is what makes cross-ledger operations (the
//! incoming-shipment dual write) a single critical section: either
//! both ledgers change or neither does.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use shared::ledger::{BranchRegistry, InventoryLedger, SupplierLedger};
use shared::models::UserProfile;

/// The ledgers plus the warehouse-manager profile
#[derive(Debug, Default)]
pub struct StoreInner {
    pub inventory: InventoryLedger,
    pub suppliers: SupplierLedger,
    pub branches: BranchRegistry,
    pub profile: UserProfile,
}

/// Cheaply clonable handle to the shared store
#[derive(Clone, Debug)]
pub struct Store {
    inner: Arc<RwLock<StoreInner>>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner::default())),
        }
    }

    /// Acquire the shared read guard.
    ///
    /// A poisoned lock only means a writer panicked mid-operation; the
    /// data itself is still the last consistent snapshot, so recover it.
    pub fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Acquire the exclusive write guard.
    pub fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
