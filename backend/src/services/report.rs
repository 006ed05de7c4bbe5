//! Dashboard summary aggregation

use rust_decimal::Decimal;
use serde::Serialize;

use shared::models::{InventoryItem, InventoryTransaction};

use crate::store::Store;

const RECENT_TRANSACTIONS_LIMIT: usize = 10;

/// Report service wrapping the shared store
#[derive(Clone)]
pub struct ReportService {
    store: Store,
}

/// Aggregates shown on the dashboard
#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub item_count: usize,
    pub category_count: usize,
    pub supplier_count: usize,
    pub branch_count: usize,
    pub low_stock_count: usize,
    pub low_stock_items: Vec<InventoryItem>,
    pub total_inventory_value: Decimal,
    pub total_supplier_balance: Decimal,
    pub recent_transactions: Vec<InventoryTransaction>,
}

impl ReportService {
    /// Create a new ReportService instance
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// One consistent snapshot of all dashboard aggregates, taken
    /// under a single read guard.
    pub fn summary(&self) -> SummaryReport {
        let store = self.store.read();
        let low_stock_items = store.inventory.low_stock_items();
        SummaryReport {
            item_count: store.inventory.items().len(),
            category_count: store.inventory.categories().len(),
            supplier_count: store.suppliers.suppliers().len(),
            branch_count: store.branches.branches().len(),
            low_stock_count: low_stock_items.len(),
            low_stock_items,
            total_inventory_value: store.inventory.total_inventory_value(),
            total_supplier_balance: store.suppliers.total_balance(),
            recent_transactions: store
                .inventory
                .recent_transactions(RECENT_TRANSACTIONS_LIMIT),
        }
    }
}
