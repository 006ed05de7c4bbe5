//! Stock movement tests
//!
//! Tests for the shipment and issue operations:
//! - incoming shipments update stock and the supplier account together
//! - outgoing issues are capped by the available quantity
//! - failed movements leave every ledger untouched

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use sanabel_inventory_backend::services::branch::{BranchInput, BranchService, RepresentativeInput};
use sanabel_inventory_backend::services::inventory::{
    CategoryInput, IncomingShipmentInput, InventoryService, ItemInput, OutgoingIssueInput,
};
use sanabel_inventory_backend::services::supplier::{SupplierInput, SupplierService};
use sanabel_inventory_backend::Store;
use shared::models::MovementKind;

fn dec(n: i64) -> Decimal {
    Decimal::from(n)
}

struct Fixture {
    store: Store,
    item_id: Uuid,
    supplier_id: Uuid,
    branch_id: Uuid,
    representative_id: Uuid,
}

/// One category, one item with 100 units in stock, one supplier, one
/// branch with a single receiving representative.
fn fixture() -> Fixture {
    let store = Store::new();
    let inventory = InventoryService::new(store.clone());
    let category = inventory
        .create_category(CategoryInput {
            name: "مواد غذائية".to_string(),
        })
        .unwrap();
    let item = inventory
        .create_item(ItemInput {
            name: "طحين".to_string(),
            category_id: category.id,
            unit: "كيلو".to_string(),
            current_quantity: dec(100),
            min_quantity: dec(20),
            price: Decimal::new(25, 1),
            expiry_date: None,
        })
        .unwrap();
    let supplier = SupplierService::new(store.clone())
        .create_supplier(SupplierInput {
            name: "شركة الوادي للمواد الغذائية".to_string(),
            phone: "0791234567".to_string(),
            email: "alwadi@example.com".to_string(),
            address: "عمان".to_string(),
            contact_person: "سليم الوادي".to_string(),
            payment_terms: "دفع آجل 30 يوم".to_string(),
        })
        .unwrap();
    let branch = BranchService::new(store.clone())
        .create_branch(BranchInput {
            name: "فرع الجبيهة".to_string(),
            location: "الجبيهة".to_string(),
            phone: "064001122".to_string(),
            manager: "محمد أحمد".to_string(),
            representatives: Some(vec![RepresentativeInput {
                id: None,
                name: "أحمد خالد".to_string(),
                phone: "0781234567".to_string(),
                role: "مندوب استلام".to_string(),
            }]),
        })
        .unwrap();
    let representative_id = branch.representatives[0].id;
    Fixture {
        store,
        item_id: item.id,
        supplier_id: supplier.id,
        branch_id: branch.id,
        representative_id,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// An incoming shipment of 100 units for 250 with 100 paid must
    /// add 100 to stock and leave 150 outstanding with the supplier.
    #[test]
    fn incoming_shipment_updates_stock_and_supplier_together() {
        let fx = fixture();
        let inventory = InventoryService::new(fx.store.clone());
        let tx = inventory
            .record_incoming_shipment(IncomingShipmentInput {
                item_id: fx.item_id,
                supplier_id: fx.supplier_id,
                quantity: dec(100),
                total_price: dec(250),
                paid_amount: dec(100),
                date: None,
                notes: None,
            })
            .unwrap();

        let store = fx.store.read();
        let item = store.inventory.item(fx.item_id).unwrap();
        assert_eq!(item.current_quantity, dec(200));

        let supplier = store.suppliers.supplier(fx.supplier_id).unwrap();
        assert_eq!(supplier.total_purchases, dec(250));
        assert_eq!(supplier.total_paid, dec(100));
        assert_eq!(supplier.balance, dec(150));

        // The supplier entry points back at the inventory movement
        assert_eq!(supplier.transactions.len(), 1);
        assert_eq!(
            supplier.transactions[0].related_transaction_id,
            Some(tx.id)
        );
    }

    /// The movement carries the item and supplier names as they were
    /// at recording time.
    #[test]
    fn incoming_shipment_snapshots_names() {
        let fx = fixture();
        let tx = InventoryService::new(fx.store.clone())
            .record_incoming_shipment(IncomingShipmentInput {
                item_id: fx.item_id,
                supplier_id: fx.supplier_id,
                quantity: dec(10),
                total_price: dec(25),
                paid_amount: dec(25),
                date: None,
                notes: None,
            })
            .unwrap();
        assert_eq!(tx.item_name, "طحين");
        match tx.kind {
            MovementKind::Incoming { supplier_name, .. } => {
                assert_eq!(supplier_name, "شركة الوادي للمواد الغذائية")
            }
            _ => panic!("expected an incoming movement"),
        }
    }

    /// A shipment for an unknown supplier must not touch the stock.
    #[test]
    fn unknown_supplier_leaves_stock_unchanged() {
        let fx = fixture();
        let inventory = InventoryService::new(fx.store.clone());
        let result = inventory.record_incoming_shipment(IncomingShipmentInput {
            item_id: fx.item_id,
            supplier_id: Uuid::new_v4(),
            quantity: dec(50),
            total_price: dec(125),
            paid_amount: dec(0),
            date: None,
            notes: None,
        });
        assert!(result.is_err());

        let store = fx.store.read();
        assert_eq!(
            store.inventory.item(fx.item_id).unwrap().current_quantity,
            dec(100)
        );
        assert!(store.inventory.transactions().is_empty());
    }

    /// Paying more than the purchase price is a validation error and
    /// must leave both ledgers untouched.
    #[test]
    fn paid_above_total_rejected_atomically() {
        let fx = fixture();
        let result = InventoryService::new(fx.store.clone()).record_incoming_shipment(
            IncomingShipmentInput {
                item_id: fx.item_id,
                supplier_id: fx.supplier_id,
                quantity: dec(10),
                total_price: dec(100),
                paid_amount: dec(150),
                date: None,
                notes: None,
            },
        );
        assert!(result.is_err());

        let store = fx.store.read();
        assert_eq!(
            store.inventory.item(fx.item_id).unwrap().current_quantity,
            dec(100)
        );
        let supplier = store.suppliers.supplier(fx.supplier_id).unwrap();
        assert_eq!(supplier.total_purchases, Decimal::ZERO);
        assert!(supplier.transactions.is_empty());
    }

    #[test]
    fn outgoing_issue_subtracts_stock() {
        let fx = fixture();
        let tx = InventoryService::new(fx.store.clone())
            .record_outgoing_issue(OutgoingIssueInput {
                item_id: fx.item_id,
                branch_id: fx.branch_id,
                representative_id: fx.representative_id,
                quantity: dec(30),
                date: None,
                notes: Some("توزيع صباحي".to_string()),
            })
            .unwrap();
        match tx.kind {
            MovementKind::Outgoing {
                branch_name,
                representative_name,
                ..
            } => {
                assert_eq!(branch_name, "فرع الجبيهة");
                assert_eq!(representative_name, "أحمد خالد");
            }
            _ => panic!("expected an outgoing movement"),
        }
        assert_eq!(
            fx.store
                .read()
                .inventory
                .item(fx.item_id)
                .unwrap()
                .current_quantity,
            dec(70)
        );
    }

    /// Requesting more than the available quantity is rejected and
    /// nothing is recorded.
    #[test]
    fn over_withdrawal_rejected() {
        let fx = fixture();
        let result = InventoryService::new(fx.store.clone()).record_outgoing_issue(
            OutgoingIssueInput {
                item_id: fx.item_id,
                branch_id: fx.branch_id,
                representative_id: fx.representative_id,
                quantity: dec(150),
                date: None,
                notes: None,
            },
        );
        assert!(result.is_err());

        let store = fx.store.read();
        assert_eq!(
            store.inventory.item(fx.item_id).unwrap().current_quantity,
            dec(100)
        );
        assert!(store.inventory.transactions().is_empty());
    }

    /// Issuing exactly the available quantity drains the stock to zero.
    #[test]
    fn full_withdrawal_allowed() {
        let fx = fixture();
        InventoryService::new(fx.store.clone())
            .record_outgoing_issue(OutgoingIssueInput {
                item_id: fx.item_id,
                branch_id: fx.branch_id,
                representative_id: fx.representative_id,
                quantity: dec(100),
                date: None,
                notes: None,
            })
            .unwrap();
        assert_eq!(
            fx.store
                .read()
                .inventory
                .item(fx.item_id)
                .unwrap()
                .current_quantity,
            Decimal::ZERO
        );
    }

    /// A representative from another branch cannot sign for an issue.
    #[test]
    fn representative_must_belong_to_branch() {
        let fx = fixture();
        let other_branch = BranchService::new(fx.store.clone())
            .create_branch(BranchInput {
                name: "فرع عبدون".to_string(),
                location: "عبدون".to_string(),
                phone: "064003344".to_string(),
                manager: "علاء حسن".to_string(),
                representatives: Some(Vec::new()),
            })
            .unwrap();
        let result = InventoryService::new(fx.store.clone()).record_outgoing_issue(
            OutgoingIssueInput {
                item_id: fx.item_id,
                branch_id: other_branch.id,
                representative_id: fx.representative_id,
                quantity: dec(10),
                date: None,
                notes: None,
            },
        );
        assert!(result.is_err());
    }

    /// The item's `last_updated` reflects the movement date, not the
    /// wall clock at recording time.
    #[test]
    fn movement_date_becomes_last_updated() {
        let fx = fixture();
        let date = Utc.with_ymd_and_hms(2026, 3, 15, 9, 30, 0).unwrap();
        InventoryService::new(fx.store.clone())
            .record_incoming_shipment(IncomingShipmentInput {
                item_id: fx.item_id,
                supplier_id: fx.supplier_id,
                quantity: dec(10),
                total_price: dec(25),
                paid_amount: dec(0),
                date: Some(date),
                notes: None,
            })
            .unwrap();
        assert_eq!(
            fx.store
                .read()
                .inventory
                .item(fx.item_id)
                .unwrap()
                .last_updated,
            date
        );
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Stock after any mix of shipments and issues equals the opening
    /// quantity plus everything received minus everything issued; an
    /// issue that would overdraw is rejected without effect.
    #[test]
    fn stock_follows_movement_history(movements in prop::collection::vec((any::<bool>(), 1i64..200), 1..30)) {
        let fx = fixture();
        let inventory = InventoryService::new(fx.store.clone());
        let mut expected = dec(100);

        for (incoming, quantity) in movements {
            let quantity = dec(quantity);
            if incoming {
                inventory
                    .record_incoming_shipment(IncomingShipmentInput {
                        item_id: fx.item_id,
                        supplier_id: fx.supplier_id,
                        quantity,
                        total_price: quantity * dec(2),
                        paid_amount: quantity,
                        date: None,
                        notes: None,
                    })
                    .unwrap();
                expected += quantity;
            } else if inventory
                .record_outgoing_issue(OutgoingIssueInput {
                    item_id: fx.item_id,
                    branch_id: fx.branch_id,
                    representative_id: fx.representative_id,
                    quantity,
                    date: None,
                    notes: None,
                })
                .is_ok()
            {
                expected -= quantity;
            }

            let current = fx
                .store
                .read()
                .inventory
                .item(fx.item_id)
                .unwrap()
                .current_quantity;
            prop_assert_eq!(current, expected);
            prop_assert!(current >= Decimal::ZERO);
        }
    }

    /// The supplier aggregates always satisfy
    /// `balance == total_purchases - total_paid`.
    #[test]
    fn supplier_balance_invariant_holds(shipments in prop::collection::vec((1i64..100, 0i64..100), 1..20)) {
        let fx = fixture();
        let inventory = InventoryService::new(fx.store.clone());

        for (quantity, paid_fraction) in shipments {
            let total_price = dec(quantity) * dec(3);
            let paid_amount = (total_price * dec(paid_fraction) / dec(100)).round_dp(2);
            inventory
                .record_incoming_shipment(IncomingShipmentInput {
                    item_id: fx.item_id,
                    supplier_id: fx.supplier_id,
                    quantity: dec(quantity),
                    total_price,
                    paid_amount,
                    date: None,
                    notes: None,
                })
                .unwrap();
        }

        let store = fx.store.read();
        let supplier = store.suppliers.supplier(fx.supplier_id).unwrap();
        prop_assert_eq!(supplier.balance, supplier.total_purchases - supplier.total_paid);
    }
}
