//! Supplier models and the supplier transaction log

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A supplier account
///
/// The three aggregate fields are maintained incrementally by the
/// supplier ledger. Invariant after every mutation:
/// `balance == total_purchases - total_paid`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub contact_person: String,
    /// Free-text payment terms, e.g. "net 30 days".
    pub payment_terms: String,
    pub total_purchases: Decimal,
    pub total_paid: Decimal,
    /// Outstanding amount owed to the supplier. Negative means credit
    /// from a prepayment.
    pub balance: Decimal,
    pub transactions: Vec<SupplierTransaction>,
}

/// An immutable supplier ledger entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierTransaction {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Inventory transaction that produced this entry, for purchases
    /// derived from incoming shipments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_transaction_id: Option<Uuid>,
    #[serde(flatten)]
    pub kind: SupplierMovement,
}

/// Kind of supplier ledger entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SupplierMovement {
    /// Goods bought from the supplier. `balance` is the outstanding
    /// part of this purchase; the ledger computes it as
    /// `amount - paid`, it is never accepted from a caller.
    Purchase {
        amount: Decimal,
        paid: Decimal,
        balance: Decimal,
    },
    /// A payment against the outstanding balance.
    Payment { amount: Decimal },
}
