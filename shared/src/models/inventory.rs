//! Inventory models: categories, stock items, and the movement log

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stock item category (e.g. foodstuffs, packaging, raw materials)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCategory {
    pub id: Uuid,
    pub name: String,
}

/// A stock item tracked by the warehouse
///
/// `current_quantity` is a running total maintained by the inventory
/// ledger; it only changes through transaction application or an
/// explicit item update. Invariant: `current_quantity >= 0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: Uuid,
    pub name: String,
    /// Owned copy of the category at the time of the last item write.
    pub category: ItemCategory,
    pub unit: String,
    pub current_quantity: Decimal,
    pub min_quantity: Decimal,
    pub price: Decimal,
    pub last_updated: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
}

impl InventoryItem {
    /// Low stock means at or below the configured minimum threshold.
    pub fn is_low_stock(&self) -> bool {
        self.current_quantity <= self.min_quantity
    }

    /// Value of the stock currently on hand.
    pub fn stock_value(&self) -> Decimal {
        self.current_quantity * self.price
    }
}

/// An immutable stock movement record
///
/// Counterparty names (`item_name`, and the supplier/branch names in
/// [`MovementKind`]) are denormalized at write time: the log is an
/// audit record and keeps the names as they were when the movement
/// happened. Renaming an entity never rewrites history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryTransaction {
    pub id: Uuid,
    pub item_id: Uuid,
    pub item_name: String,
    pub quantity: Decimal,
    pub unit: String,
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub kind: MovementKind,
}

/// Direction and counterparty of a stock movement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MovementKind {
    /// Stock received from a supplier
    Incoming {
        supplier_id: Uuid,
        supplier_name: String,
        total_price: Decimal,
        paid_amount: Decimal,
    },
    /// Stock issued to a branch representative
    Outgoing {
        branch_id: Uuid,
        branch_name: String,
        representative_id: Uuid,
        representative_name: String,
    },
}

impl MovementKind {
    pub fn is_incoming(&self) -> bool {
        matches!(self, MovementKind::Incoming { .. })
    }

    pub fn is_outgoing(&self) -> bool {
        matches!(self, MovementKind::Outgoing { .. })
    }
}
