//! Inventory service: item/category registry and stock movements

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use shared::ledger::PurchaseEntry;
use shared::models::{InventoryItem, InventoryTransaction, ItemCategory, MovementKind};
use shared::validation;

use crate::error::{invalid, AppError, AppResult};
use crate::store::Store;

/// Inventory service wrapping the shared store
#[derive(Clone)]
pub struct InventoryService {
    store: Store,
}

/// Input for creating or replacing a category
#[derive(Debug, Deserialize)]
pub struct CategoryInput {
    pub name: String,
}

/// Input for creating or replacing an item
#[derive(Debug, Deserialize)]
pub struct ItemInput {
    pub name: String,
    pub category_id: Uuid,
    pub unit: String,
    pub current_quantity: Decimal,
    pub min_quantity: Decimal,
    pub price: Decimal,
    pub expiry_date: Option<NaiveDate>,
}

/// Input for recording an incoming shipment from a supplier
#[derive(Debug, Deserialize)]
pub struct IncomingShipmentInput {
    pub item_id: Uuid,
    pub supplier_id: Uuid,
    pub quantity: Decimal,
    pub total_price: Decimal,
    pub paid_amount: Decimal,
    pub date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

/// Input for recording an outgoing issue to a branch representative
#[derive(Debug, Deserialize)]
pub struct OutgoingIssueInput {
    pub item_id: Uuid,
    pub branch_id: Uuid,
    pub representative_id: Uuid,
    pub quantity: Decimal,
    pub date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

impl InventoryService {
    /// Create a new InventoryService instance
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    // ------------------------------------------------------------------
    // Categories
    // ------------------------------------------------------------------

    pub fn list_categories(&self) -> Vec<ItemCategory> {
        self.store.read().inventory.categories()
    }

    pub fn create_category(&self, input: CategoryInput) -> AppResult<ItemCategory> {
        invalid(
            "name",
            validation::validate_name(&input.name),
            "اسم التصنيف مطلوب",
        )?;
        let category = ItemCategory {
            id: Uuid::new_v4(),
            name: input.name,
        };
        self.store.write().inventory.add_category(category.clone())?;
        tracing::debug!(category = %category.name, "category created");
        Ok(category)
    }

    pub fn update_category(&self, category_id: Uuid, input: CategoryInput) -> AppResult<ItemCategory> {
        invalid(
            "name",
            validation::validate_name(&input.name),
            "اسم التصنيف مطلوب",
        )?;
        let category = ItemCategory {
            id: category_id,
            name: input.name,
        };
        self.store.write().inventory.update_category(category.clone())?;
        Ok(category)
    }

    pub fn delete_category(&self, category_id: Uuid) -> AppResult<()> {
        self.store.write().inventory.delete_category(category_id)?;
        tracing::debug!(%category_id, "category deleted");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Items
    // ------------------------------------------------------------------

    pub fn list_items(&self) -> Vec<InventoryItem> {
        self.store.read().inventory.items()
    }

    pub fn get_item(&self, item_id: Uuid) -> AppResult<InventoryItem> {
        self.store
            .read()
            .inventory
            .item(item_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("item".to_string()))
    }

    pub fn create_item(&self, input: ItemInput) -> AppResult<InventoryItem> {
        let item = self.build_item(Uuid::new_v4(), input)?;
        self.store.write().inventory.add_item(item.clone())?;
        tracing::debug!(item = %item.name, "item created");
        Ok(item)
    }

    /// Replace an item by id. The explicit administrative edit path:
    /// may set `current_quantity` directly.
    pub fn update_item(&self, item_id: Uuid, input: ItemInput) -> AppResult<InventoryItem> {
        let item = self.build_item(item_id, input)?;
        self.store.write().inventory.update_item(item.clone())?;
        Ok(item)
    }

    pub fn delete_item(&self, item_id: Uuid) -> AppResult<()> {
        self.store.write().inventory.delete_item(item_id)?;
        tracing::debug!(%item_id, "item deleted");
        Ok(())
    }

    fn build_item(&self, id: Uuid, input: ItemInput) -> AppResult<InventoryItem> {
        invalid(
            "name",
            validation::validate_name(&input.name),
            "اسم المادة مطلوب",
        )?;
        invalid(
            "current_quantity",
            validation::validate_non_negative(input.current_quantity),
            "الكمية لا يمكن أن تكون سالبة",
        )?;
        invalid(
            "min_quantity",
            validation::validate_non_negative(input.min_quantity),
            "الحد الأدنى لا يمكن أن يكون سالباً",
        )?;
        invalid(
            "price",
            validation::validate_non_negative(input.price),
            "السعر لا يمكن أن يكون سالباً",
        )?;
        let category = self
            .store
            .read()
            .inventory
            .category(input.category_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("category".to_string()))?;
        Ok(InventoryItem {
            id,
            name: input.name,
            category,
            unit: input.unit,
            current_quantity: input.current_quantity,
            min_quantity: input.min_quantity,
            price: input.price,
            last_updated: Utc::now(),
            expiry_date: input.expiry_date,
        })
    }

    // ------------------------------------------------------------------
    // Movements
    // ------------------------------------------------------------------

    /// Record an incoming shipment: one domain operation that appends
    /// the inventory movement AND the derived supplier purchase under
    /// a single write guard. Everything is validated before either
    /// ledger is touched, so the dual write is all-or-nothing.
    pub fn record_incoming_shipment(
        &self,
        input: IncomingShipmentInput,
    ) -> AppResult<InventoryTransaction> {
        invalid(
            "quantity",
            validation::validate_positive(input.quantity),
            "الكمية يجب أن تكون أكبر من صفر",
        )?;
        invalid(
            "total_price",
            validation::validate_positive(input.total_price),
            "السعر الإجمالي يجب أن يكون أكبر من صفر",
        )?;
        invalid(
            "paid_amount",
            validation::validate_paid_within_total(input.paid_amount, input.total_price),
            "المبلغ المدفوع يتجاوز السعر الإجمالي",
        )?;

        let mut store = self.store.write();
        let item = store
            .inventory
            .item(input.item_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("item".to_string()))?;
        let supplier_name = store
            .suppliers
            .supplier(input.supplier_id)
            .map(|s| s.name.clone())
            .ok_or_else(|| AppError::NotFound("supplier".to_string()))?;

        let date = input.date.unwrap_or_else(Utc::now);
        let tx = InventoryTransaction {
            id: Uuid::new_v4(),
            item_id: item.id,
            item_name: item.name,
            quantity: input.quantity,
            unit: item.unit,
            date,
            notes: input.notes,
            kind: MovementKind::Incoming {
                supplier_id: input.supplier_id,
                supplier_name,
                total_price: input.total_price,
                paid_amount: input.paid_amount,
            },
        };

        store.inventory.apply_transaction(tx.clone())?;
        store.suppliers.record_purchase(
            input.supplier_id,
            PurchaseEntry {
                id: Uuid::new_v4(),
                date,
                amount: input.total_price,
                paid: input.paid_amount,
                notes: tx.notes.clone(),
                related_transaction_id: Some(tx.id),
            },
        )?;

        tracing::debug!(
            item_id = %input.item_id,
            supplier_id = %input.supplier_id,
            quantity = %input.quantity,
            "incoming shipment recorded"
        );
        Ok(tx)
    }

    /// Record an outgoing issue to a branch representative.
    ///
    /// Over-withdrawal is rejected here with `InsufficientStock`; the
    /// ledger-level floor at zero remains only as the last-resort
    /// invariant for direct ledger use.
    pub fn record_outgoing_issue(
        &self,
        input: OutgoingIssueInput,
    ) -> AppResult<InventoryTransaction> {
        invalid(
            "quantity",
            validation::validate_positive(input.quantity),
            "الكمية يجب أن تكون أكبر من صفر",
        )?;

        let mut store = self.store.write();
        let item = store
            .inventory
            .item(input.item_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("item".to_string()))?;
        if input.quantity > item.current_quantity {
            return Err(AppError::InsufficientStock {
                available: item.current_quantity,
                requested: input.quantity,
            });
        }
        let branch_name = store
            .branches
            .branch(input.branch_id)
            .map(|b| b.name.clone())
            .ok_or_else(|| AppError::NotFound("branch".to_string()))?;
        let representative_name = store
            .branches
            .representative(input.branch_id, input.representative_id)
            .map(|rep| rep.name.clone())
            .ok_or_else(|| AppError::NotFound("representative".to_string()))?;

        let tx = InventoryTransaction {
            id: Uuid::new_v4(),
            item_id: item.id,
            item_name: item.name,
            quantity: input.quantity,
            unit: item.unit,
            date: input.date.unwrap_or_else(Utc::now),
            notes: input.notes,
            kind: MovementKind::Outgoing {
                branch_id: input.branch_id,
                branch_name,
                representative_id: input.representative_id,
                representative_name,
            },
        };
        store.inventory.apply_transaction(tx.clone())?;

        tracing::debug!(
            item_id = %input.item_id,
            branch_id = %input.branch_id,
            quantity = %input.quantity,
            "outgoing issue recorded"
        );
        Ok(tx)
    }

    pub fn list_transactions(&self) -> Vec<InventoryTransaction> {
        self.store.read().inventory.transactions().to_vec()
    }

    pub fn recent_transactions(&self, limit: usize) -> Vec<InventoryTransaction> {
        self.store.read().inventory.recent_transactions(limit)
    }

    // ------------------------------------------------------------------
    // Derived queries
    // ------------------------------------------------------------------

    pub fn low_stock_items(&self) -> Vec<InventoryItem> {
        self.store.read().inventory.low_stock_items()
    }

    pub fn total_inventory_value(&self) -> Decimal {
        self.store.read().inventory.total_inventory_value()
    }

    pub fn expiring_items(&self, within_days: i64) -> Vec<InventoryItem> {
        self.store
            .read()
            .inventory
            .expiring_items(Utc::now().date_naive(), within_days)
    }
}
