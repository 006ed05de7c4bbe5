//! Supplier account tests
//!
//! Tests for supplier management:
//! - contact data validation
//! - payments against the outstanding balance
//! - financials surviving descriptive updates

use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use sanabel_inventory_backend::services::supplier::{PaymentInput, SupplierInput, SupplierService};
use sanabel_inventory_backend::Store;
use shared::ledger::PurchaseEntry;
use shared::models::SupplierMovement;

fn dec(n: i64) -> Decimal {
    Decimal::from(n)
}

fn input(name: &str, phone: &str, email: &str) -> SupplierInput {
    SupplierInput {
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        address: "عمان".to_string(),
        contact_person: "جهة الاتصال".to_string(),
        payment_terms: "دفع فوري".to_string(),
    }
}

/// Seed a supplier with an outstanding balance directly through the
/// ledger, bypassing the shipment flow.
fn with_purchase(store: &Store, supplier_id: Uuid, amount: i64, paid: i64) {
    store
        .write()
        .suppliers
        .record_purchase(
            supplier_id,
            PurchaseEntry {
                id: Uuid::new_v4(),
                date: chrono::Utc::now(),
                amount: dec(amount),
                paid: dec(paid),
                notes: None,
                related_transaction_id: None,
            },
        )
        .unwrap();
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn new_supplier_starts_with_zero_financials() {
        let service = SupplierService::new(Store::new());
        let supplier = service
            .create_supplier(input("مخازن الشمال", "0791234567", "north@example.com"))
            .unwrap();
        assert_eq!(supplier.total_purchases, Decimal::ZERO);
        assert_eq!(supplier.total_paid, Decimal::ZERO);
        assert_eq!(supplier.balance, Decimal::ZERO);
        assert!(supplier.transactions.is_empty());
    }

    #[test]
    fn invalid_email_rejected() {
        let service = SupplierService::new(Store::new());
        let result = service.create_supplier(input("مخازن الشمال", "0791234567", "not-an-email"));
        assert!(result.is_err());
        assert!(service.list_suppliers().is_empty());
    }

    #[test]
    fn invalid_phone_rejected() {
        let service = SupplierService::new(Store::new());
        // Mobile numbers must start with 07 and have ten digits
        let result = service.create_supplier(input("مخازن الشمال", "12345", "north@example.com"));
        assert!(result.is_err());
    }

    #[test]
    fn landline_and_international_formats_accepted() {
        let service = SupplierService::new(Store::new());
        service
            .create_supplier(input("مورد أ", "064001122", "a@example.com"))
            .unwrap();
        service
            .create_supplier(input("مورد ب", "962791234567", "b@example.com"))
            .unwrap();
        assert_eq!(service.list_suppliers().len(), 2);
    }

    #[test]
    fn payment_reduces_balance() {
        let store = Store::new();
        let service = SupplierService::new(store.clone());
        let supplier = service
            .create_supplier(input("مخازن الشمال", "0791234567", "north@example.com"))
            .unwrap();
        with_purchase(&store, supplier.id, 400, 100);

        let tx = service
            .record_payment(
                supplier.id,
                PaymentInput {
                    amount: dec(200),
                    date: None,
                    notes: Some("دفعة نقدية".to_string()),
                },
            )
            .unwrap();
        assert!(matches!(tx.kind, SupplierMovement::Payment { amount } if amount == dec(200)));

        let supplier = service.get_supplier(supplier.id).unwrap();
        assert_eq!(supplier.balance, dec(100));
        assert_eq!(supplier.total_paid, dec(300));
        assert_eq!(supplier.transactions.len(), 2);
    }

    #[test]
    fn zero_payment_rejected() {
        let store = Store::new();
        let service = SupplierService::new(store.clone());
        let supplier = service
            .create_supplier(input("مخازن الشمال", "0791234567", "north@example.com"))
            .unwrap();
        let result = service.record_payment(
            supplier.id,
            PaymentInput {
                amount: Decimal::ZERO,
                date: None,
                notes: None,
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn payment_to_unknown_supplier_rejected() {
        let service = SupplierService::new(Store::new());
        let result = service.record_payment(
            Uuid::new_v4(),
            PaymentInput {
                amount: dec(100),
                date: None,
                notes: None,
            },
        );
        assert!(result.is_err());
    }

    /// Changing contact details must never reset what the supplier is
    /// owed.
    #[test]
    fn update_keeps_financials_and_history() {
        let store = Store::new();
        let service = SupplierService::new(store.clone());
        let supplier = service
            .create_supplier(input("مخازن الشمال", "0791234567", "north@example.com"))
            .unwrap();
        with_purchase(&store, supplier.id, 400, 100);

        let updated = service
            .update_supplier(
                supplier.id,
                input("مخازن الشمال الجديدة", "0797654321", "new@example.com"),
            )
            .unwrap();
        assert_eq!(updated.name, "مخازن الشمال الجديدة");
        assert_eq!(updated.balance, dec(300));
        assert_eq!(updated.transactions.len(), 1);
    }

    #[test]
    fn total_balance_spans_suppliers() {
        let store = Store::new();
        let service = SupplierService::new(store.clone());
        let first = service
            .create_supplier(input("مورد أ", "0791234567", "a@example.com"))
            .unwrap();
        let second = service
            .create_supplier(input("مورد ب", "0797654321", "b@example.com"))
            .unwrap();
        with_purchase(&store, first.id, 300, 100);
        with_purchase(&store, second.id, 50, 0);
        assert_eq!(service.total_balance(), dec(250));
    }

    #[test]
    fn transactions_listed_in_recording_order() {
        let store = Store::new();
        let service = SupplierService::new(store.clone());
        let supplier = service
            .create_supplier(input("مخازن الشمال", "0791234567", "north@example.com"))
            .unwrap();
        with_purchase(&store, supplier.id, 400, 100);
        service
            .record_payment(
                supplier.id,
                PaymentInput {
                    amount: dec(50),
                    date: None,
                    notes: None,
                },
            )
            .unwrap();

        let transactions = service.list_transactions(supplier.id).unwrap();
        assert_eq!(transactions.len(), 2);
        assert!(matches!(transactions[0].kind, SupplierMovement::Purchase { .. }));
        assert!(matches!(transactions[1].kind, SupplierMovement::Payment { .. }));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Any sequence of purchases and payments keeps
    /// `balance == total_purchases - total_paid`.
    #[test]
    fn aggregates_stay_consistent(entries in prop::collection::vec((any::<bool>(), 1i64..1000), 1..40)) {
        let store = Store::new();
        let service = SupplierService::new(store.clone());
        let supplier = service
            .create_supplier(input("مورد", "0791234567", "s@example.com"))
            .unwrap();

        for (is_purchase, amount) in entries {
            if is_purchase {
                with_purchase(&store, supplier.id, amount, amount / 2);
            } else {
                service
                    .record_payment(
                        supplier.id,
                        PaymentInput {
                            amount: dec(amount),
                            date: None,
                            notes: None,
                        },
                    )
                    .unwrap();
            }
            let s = service.get_supplier(supplier.id).unwrap();
            prop_assert_eq!(s.balance, s.total_purchases - s.total_paid);
        }
    }
}
