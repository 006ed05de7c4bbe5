//! Inventory ledger: item/category registry plus the movement log

use std::collections::{HashMap, HashSet};

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{InventoryItem, InventoryTransaction, ItemCategory, MovementKind};

use super::{LedgerError, LedgerResult};

/// Items, categories, and the append-only movement log
///
/// Movements are the only routine way item quantities change; an item
/// update is an explicit administrative edit. The log itself is never
/// mutated or truncated.
#[derive(Debug, Default)]
pub struct InventoryLedger {
    categories: HashMap<Uuid, ItemCategory>,
    items: HashMap<Uuid, InventoryItem>,
    transactions: Vec<InventoryTransaction>,
    transaction_ids: HashSet<Uuid>,
    /// Movement count per item id, for the delete-item constraint.
    movement_counts: HashMap<Uuid, u64>,
}

impl InventoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Categories
    // ------------------------------------------------------------------

    pub fn add_category(&mut self, category: ItemCategory) -> LedgerResult<()> {
        if self.categories.contains_key(&category.id) {
            return Err(LedgerError::DuplicateId("category"));
        }
        self.categories.insert(category.id, category);
        Ok(())
    }

    pub fn update_category(&mut self, category: ItemCategory) -> LedgerResult<()> {
        if !self.categories.contains_key(&category.id) {
            return Err(LedgerError::NotFound("category"));
        }
        self.categories.insert(category.id, category);
        Ok(())
    }

    /// Delete a category. Fails if any item still references it, in
    /// which case state is unchanged.
    pub fn delete_category(&mut self, category_id: Uuid) -> LedgerResult<()> {
        if !self.categories.contains_key(&category_id) {
            return Err(LedgerError::NotFound("category"));
        }
        if self.items.values().any(|item| item.category.id == category_id) {
            return Err(LedgerError::CategoryInUse);
        }
        self.categories.remove(&category_id);
        Ok(())
    }

    pub fn category(&self, category_id: Uuid) -> Option<&ItemCategory> {
        self.categories.get(&category_id)
    }

    /// All categories, sorted by name.
    pub fn categories(&self) -> Vec<ItemCategory> {
        let mut categories: Vec<_> = self.categories.values().cloned().collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        categories
    }

    // ------------------------------------------------------------------
    // Items
    // ------------------------------------------------------------------

    pub fn add_item(&mut self, item: InventoryItem) -> LedgerResult<()> {
        if self.items.contains_key(&item.id) {
            return Err(LedgerError::DuplicateId("item"));
        }
        self.check_item(&item)?;
        self.items.insert(item.id, item);
        Ok(())
    }

    /// Replace an item by id. This is the explicit administrative edit
    /// path; it may change `current_quantity` directly.
    pub fn update_item(&mut self, item: InventoryItem) -> LedgerResult<()> {
        if !self.items.contains_key(&item.id) {
            return Err(LedgerError::NotFound("item"));
        }
        self.check_item(&item)?;
        self.items.insert(item.id, item);
        Ok(())
    }

    /// Delete an item. Fails if the movement log references it.
    pub fn delete_item(&mut self, item_id: Uuid) -> LedgerResult<()> {
        if !self.items.contains_key(&item_id) {
            return Err(LedgerError::NotFound("item"));
        }
        if self.movement_counts.get(&item_id).copied().unwrap_or(0) > 0 {
            return Err(LedgerError::ItemInUse);
        }
        self.items.remove(&item_id);
        Ok(())
    }

    pub fn item(&self, item_id: Uuid) -> Option<&InventoryItem> {
        self.items.get(&item_id)
    }

    /// All items, sorted by name.
    pub fn items(&self) -> Vec<InventoryItem> {
        let mut items: Vec<_> = self.items.values().cloned().collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    // ------------------------------------------------------------------
    // Movements
    // ------------------------------------------------------------------

    /// Append a movement and fold it into the referenced item.
    ///
    /// Incoming movements add `quantity` to the item; outgoing
    /// movements subtract it, floored at zero so the quantity
    /// invariant can never be violated by the log. `last_updated` is
    /// set to the movement date. Nothing is appended on failure.
    pub fn apply_transaction(&mut self, tx: InventoryTransaction) -> LedgerResult<()> {
        if self.transaction_ids.contains(&tx.id) {
            return Err(LedgerError::DuplicateId("transaction"));
        }
        if tx.quantity <= Decimal::ZERO {
            return Err(LedgerError::Invalid {
                field: "quantity",
                reason: "must be positive",
            });
        }
        let item = self
            .items
            .get_mut(&tx.item_id)
            .ok_or(LedgerError::NotFound("item"))?;

        match tx.kind {
            MovementKind::Incoming { .. } => {
                item.current_quantity += tx.quantity;
            }
            MovementKind::Outgoing { .. } => {
                item.current_quantity =
                    Decimal::ZERO.max(item.current_quantity - tx.quantity);
            }
        }
        item.last_updated = tx.date;

        *self.movement_counts.entry(tx.item_id).or_insert(0) += 1;
        self.transaction_ids.insert(tx.id);
        self.transactions.push(tx);
        Ok(())
    }

    /// The full movement log in append order.
    pub fn transactions(&self) -> &[InventoryTransaction] {
        &self.transactions
    }

    /// Latest movements, date-descending, truncated to `limit`.
    pub fn recent_transactions(&self, limit: usize) -> Vec<InventoryTransaction> {
        let mut txs = self.transactions.clone();
        txs.sort_by(|a, b| b.date.cmp(&a.date));
        txs.truncate(limit);
        txs
    }

    // ------------------------------------------------------------------
    // Derived queries
    // ------------------------------------------------------------------

    /// Items at or below their minimum quantity, sorted by name.
    pub fn low_stock_items(&self) -> Vec<InventoryItem> {
        let mut items: Vec<_> = self
            .items
            .values()
            .filter(|item| item.is_low_stock())
            .cloned()
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    /// Total value of stock on hand: Σ current_quantity × price.
    pub fn total_inventory_value(&self) -> Decimal {
        self.items.values().map(|item| item.stock_value()).sum()
    }

    /// Items whose expiry date falls on or before
    /// `today + within_days`, soonest first. Already-expired items are
    /// included.
    pub fn expiring_items(&self, today: NaiveDate, within_days: i64) -> Vec<InventoryItem> {
        let cutoff = today + Duration::days(within_days);
        let mut items: Vec<_> = self
            .items
            .values()
            .filter(|item| matches!(item.expiry_date, Some(expiry) if expiry <= cutoff))
            .cloned()
            .collect();
        items.sort_by_key(|item| item.expiry_date);
        items
    }

    fn check_item(&self, item: &InventoryItem) -> LedgerResult<()> {
        if !self.categories.contains_key(&item.category.id) {
            return Err(LedgerError::NotFound("category"));
        }
        if item.current_quantity < Decimal::ZERO {
            return Err(LedgerError::Invalid {
                field: "current_quantity",
                reason: "cannot be negative",
            });
        }
        if item.min_quantity < Decimal::ZERO {
            return Err(LedgerError::Invalid {
                field: "min_quantity",
                reason: "cannot be negative",
            });
        }
        if item.price < Decimal::ZERO {
            return Err(LedgerError::Invalid {
                field: "price",
                reason: "cannot be negative",
            });
        }
        Ok(())
    }
}
