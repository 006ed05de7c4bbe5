//! Supplier ledger: accounts with incrementally maintained financials

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{Supplier, SupplierMovement, SupplierTransaction};

use super::{LedgerError, LedgerResult};

/// A purchase to record against a supplier
///
/// The outstanding part of the purchase is computed by the ledger as
/// `amount - paid`; callers cannot supply it.
#[derive(Debug, Clone)]
pub struct PurchaseEntry {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub amount: Decimal,
    pub paid: Decimal,
    pub notes: Option<String>,
    pub related_transaction_id: Option<Uuid>,
}

/// A payment to record against a supplier's outstanding balance
#[derive(Debug, Clone)]
pub struct PaymentEntry {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub amount: Decimal,
    pub notes: Option<String>,
}

/// Supplier accounts keyed by id
///
/// Aggregates are folded in per transaction and satisfy
/// `balance == total_purchases - total_paid` after every mutation.
#[derive(Debug, Default)]
pub struct SupplierLedger {
    suppliers: HashMap<Uuid, Supplier>,
    entry_ids: HashSet<Uuid>,
}

impl SupplierLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_supplier(&mut self, supplier: Supplier) -> LedgerResult<()> {
        if self.suppliers.contains_key(&supplier.id) {
            return Err(LedgerError::DuplicateId("supplier"));
        }
        self.suppliers.insert(supplier.id, supplier);
        Ok(())
    }

    /// Replace a supplier's descriptive fields by id.
    ///
    /// The financial aggregates and the transaction log are owned by
    /// the ledger and survive the update untouched; only contact and
    /// terms data come from the caller.
    pub fn update_supplier(&mut self, supplier: Supplier) -> LedgerResult<()> {
        let existing = self
            .suppliers
            .get_mut(&supplier.id)
            .ok_or(LedgerError::NotFound("supplier"))?;
        existing.name = supplier.name;
        existing.phone = supplier.phone;
        existing.email = supplier.email;
        existing.address = supplier.address;
        existing.contact_person = supplier.contact_person;
        existing.payment_terms = supplier.payment_terms;
        Ok(())
    }

    /// Record a purchase: `total_purchases += amount`,
    /// `total_paid += paid`, `balance += amount - paid`.
    pub fn record_purchase(
        &mut self,
        supplier_id: Uuid,
        entry: PurchaseEntry,
    ) -> LedgerResult<SupplierTransaction> {
        if self.entry_ids.contains(&entry.id) {
            return Err(LedgerError::DuplicateId("supplier transaction"));
        }
        if entry.amount <= Decimal::ZERO {
            return Err(LedgerError::Invalid {
                field: "amount",
                reason: "must be positive",
            });
        }
        if entry.paid < Decimal::ZERO {
            return Err(LedgerError::Invalid {
                field: "paid",
                reason: "cannot be negative",
            });
        }
        if entry.paid > entry.amount {
            return Err(LedgerError::Invalid {
                field: "paid",
                reason: "cannot exceed the purchase amount",
            });
        }
        let supplier = self
            .suppliers
            .get_mut(&supplier_id)
            .ok_or(LedgerError::NotFound("supplier"))?;

        let outstanding = entry.amount - entry.paid;
        let tx = SupplierTransaction {
            id: entry.id,
            date: entry.date,
            notes: entry.notes,
            related_transaction_id: entry.related_transaction_id,
            kind: SupplierMovement::Purchase {
                amount: entry.amount,
                paid: entry.paid,
                balance: outstanding,
            },
        };

        supplier.total_purchases += entry.amount;
        supplier.total_paid += entry.paid;
        supplier.balance += outstanding;
        supplier.transactions.push(tx.clone());
        self.entry_ids.insert(entry.id);
        Ok(tx)
    }

    /// Record a payment: `total_paid += amount`, `balance -= amount`.
    ///
    /// Over-payment is accepted; a negative balance is credit with the
    /// supplier.
    pub fn record_payment(
        &mut self,
        supplier_id: Uuid,
        entry: PaymentEntry,
    ) -> LedgerResult<SupplierTransaction> {
        if self.entry_ids.contains(&entry.id) {
            return Err(LedgerError::DuplicateId("supplier transaction"));
        }
        if entry.amount <= Decimal::ZERO {
            return Err(LedgerError::Invalid {
                field: "amount",
                reason: "must be positive",
            });
        }
        let supplier = self
            .suppliers
            .get_mut(&supplier_id)
            .ok_or(LedgerError::NotFound("supplier"))?;

        let tx = SupplierTransaction {
            id: entry.id,
            date: entry.date,
            notes: entry.notes,
            related_transaction_id: None,
            kind: SupplierMovement::Payment {
                amount: entry.amount,
            },
        };

        supplier.total_paid += entry.amount;
        supplier.balance -= entry.amount;
        supplier.transactions.push(tx.clone());
        self.entry_ids.insert(entry.id);
        Ok(tx)
    }

    pub fn supplier(&self, supplier_id: Uuid) -> Option<&Supplier> {
        self.suppliers.get(&supplier_id)
    }

    /// All suppliers, sorted by name.
    pub fn suppliers(&self) -> Vec<Supplier> {
        let mut suppliers: Vec<_> = self.suppliers.values().cloned().collect();
        suppliers.sort_by(|a, b| a.name.cmp(&b.name));
        suppliers
    }

    /// Sum of all suppliers' outstanding balances.
    pub fn total_balance(&self) -> Decimal {
        self.suppliers.values().map(|s| s.balance).sum()
    }
}
