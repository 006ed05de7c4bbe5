//! Supplier service: accounts, purchases derived from shipments, payments

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use shared::ledger::PaymentEntry;
use shared::models::{Supplier, SupplierTransaction};
use shared::validation;

use crate::error::{invalid, AppError, AppResult};
use crate::store::Store;

/// Supplier service wrapping the shared store
#[derive(Clone)]
pub struct SupplierService {
    store: Store,
}

/// Input for creating or updating a supplier account
#[derive(Debug, Deserialize)]
pub struct SupplierInput {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub contact_person: String,
    pub payment_terms: String,
}

/// Input for recording a payment against the outstanding balance
#[derive(Debug, Deserialize)]
pub struct PaymentInput {
    pub amount: Decimal,
    pub date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

impl SupplierService {
    /// Create a new SupplierService instance
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn list_suppliers(&self) -> Vec<Supplier> {
        self.store.read().suppliers.suppliers()
    }

    pub fn get_supplier(&self, supplier_id: Uuid) -> AppResult<Supplier> {
        self.store
            .read()
            .suppliers
            .supplier(supplier_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("supplier".to_string()))
    }

    pub fn create_supplier(&self, input: SupplierInput) -> AppResult<Supplier> {
        self.check_input(&input)?;
        let supplier = Supplier {
            id: Uuid::new_v4(),
            name: input.name,
            phone: input.phone,
            email: input.email,
            address: input.address,
            contact_person: input.contact_person,
            payment_terms: input.payment_terms,
            total_purchases: Decimal::ZERO,
            total_paid: Decimal::ZERO,
            balance: Decimal::ZERO,
            transactions: Vec::new(),
        };
        self.store.write().suppliers.add_supplier(supplier.clone())?;
        tracing::debug!(supplier = %supplier.name, "supplier created");
        Ok(supplier)
    }

    /// Update a supplier's descriptive fields. Financials and the
    /// transaction log are owned by the ledger and never replaced.
    pub fn update_supplier(&self, supplier_id: Uuid, input: SupplierInput) -> AppResult<Supplier> {
        self.check_input(&input)?;
        let mut store = self.store.write();
        store.suppliers.update_supplier(Supplier {
            id: supplier_id,
            name: input.name,
            phone: input.phone,
            email: input.email,
            address: input.address,
            contact_person: input.contact_person,
            payment_terms: input.payment_terms,
            total_purchases: Decimal::ZERO,
            total_paid: Decimal::ZERO,
            balance: Decimal::ZERO,
            transactions: Vec::new(),
        })?;
        store
            .suppliers
            .supplier(supplier_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("supplier".to_string()))
    }

    pub fn list_transactions(&self, supplier_id: Uuid) -> AppResult<Vec<SupplierTransaction>> {
        Ok(self.get_supplier(supplier_id)?.transactions)
    }

    /// Record a payment. Over-payment is accepted: the balance may go
    /// negative and stands for credit with the supplier.
    pub fn record_payment(
        &self,
        supplier_id: Uuid,
        input: PaymentInput,
    ) -> AppResult<SupplierTransaction> {
        invalid(
            "amount",
            validation::validate_positive(input.amount),
            "مبلغ الدفعة يجب أن يكون أكبر من صفر",
        )?;
        let tx = self.store.write().suppliers.record_payment(
            supplier_id,
            PaymentEntry {
                id: Uuid::new_v4(),
                date: input.date.unwrap_or_else(Utc::now),
                amount: input.amount,
                notes: input.notes,
            },
        )?;
        tracing::debug!(%supplier_id, amount = %input.amount, "payment recorded");
        Ok(tx)
    }

    /// Total outstanding balance across all suppliers.
    pub fn total_balance(&self) -> Decimal {
        self.store.read().suppliers.total_balance()
    }

    fn check_input(&self, input: &SupplierInput) -> AppResult<()> {
        invalid(
            "name",
            validation::validate_name(&input.name),
            "اسم المورد مطلوب",
        )?;
        invalid(
            "email",
            validation::validate_email(&input.email),
            "البريد الإلكتروني غير صالح",
        )?;
        invalid(
            "phone",
            validation::validate_jordanian_phone(&input.phone),
            "رقم الهاتف غير صالح",
        )?;
        Ok(())
    }
}
