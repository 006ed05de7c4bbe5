//! Deterministic startup data for the in-memory store
//!
//! Nothing is persisted between runs; every start regenerates the
//! catalog and a batch of synthetic movements from a fixed RNG seed.
//! Movements are replayed through the service operations, so item
//! quantities, supplier totals, and balances are consistent by
//! construction.

use chrono::{Duration, NaiveDate, Utc};
use rand::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use uuid::Uuid;

use shared::models::{
    Branch, BranchRepresentative, InventoryItem, ItemCategory, Supplier, UserProfile,
};

use crate::config::SeedConfig;
use crate::error::{AppError, AppResult};
use crate::services::inventory::{IncomingShipmentInput, InventoryService, OutgoingIssueInput};
use crate::services::supplier::{PaymentInput, SupplierService};
use crate::store::Store;

// Fixed-id namespaces, so reseeding with the same seed yields the
// same entity ids.
const CATEGORY_NS: u128 = 0xC000;
const ITEM_NS: u128 = 0x1000;
const SUPPLIER_NS: u128 = 0x2000;
const BRANCH_NS: u128 = 0x3000;
const REP_NS: u128 = 0x4000;

fn fixed_id(namespace: u128, n: u128) -> Uuid {
    Uuid::from_u128(namespace + n)
}

/// Populate the store with the base catalog and synthetic movements.
pub fn seed_store(store: &Store, config: &SeedConfig) -> AppResult<()> {
    let mut rng = StdRng::seed_from_u64(config.rng_seed);

    seed_profile(store);
    seed_catalog(store)?;
    seed_suppliers(store)?;
    seed_branches(store)?;
    seed_movements(store, config, &mut rng)?;
    seed_payments(store, &mut rng)?;

    let snapshot = store.read();
    tracing::info!(
        items = snapshot.inventory.items().len(),
        transactions = snapshot.inventory.transactions().len(),
        suppliers = snapshot.suppliers.suppliers().len(),
        branches = snapshot.branches.branches().len(),
        "seed data generated"
    );
    Ok(())
}

fn seed_profile(store: &Store) {
    store.write().profile = UserProfile {
        first_name: "أحمد".into(),
        last_name: "محمد".into(),
        email: "ahmed@example.com".into(),
        phone: "0777777777".into(),
        role: "مدير المخزن".into(),
    };
}

fn seed_catalog(store: &Store) -> AppResult<()> {
    let category_names = ["مواد غذائية", "مواد تغليف", "مواد خام", "أخرى"];
    let mut store = store.write();
    for (i, name) in category_names.iter().enumerate() {
        store.inventory.add_category(ItemCategory {
            id: fixed_id(CATEGORY_NS, i as u128 + 1),
            name: (*name).to_string(),
        })?;
    }

    // (name, category index, unit, quantity, minimum, price, expiry days from now)
    let items: [(&str, u128, &str, i64, i64, Decimal, Option<i64>); 10] = [
        ("طحين", 1, "كيلو", 1200, 500, Decimal::new(75, 2), Some(120)),
        ("سكر", 1, "كيلو", 800, 300, Decimal::new(12, 1), None),
        ("زيت", 1, "لتر", 350, 100, Decimal::new(25, 1), Some(180)),
        ("صناديق ورقية صغيرة", 2, "قطعة", 2000, 500, Decimal::new(15, 2), None),
        ("أكياس بلاستيكية", 2, "كرتون", 150, 50, Decimal::from(12), None),
        ("بيض", 3, "كرتون", 80, 40, Decimal::from(5), Some(21)),
        ("خميرة", 3, "كيلو", 30, 20, Decimal::from(8), Some(45)),
        ("شوكولاتة", 3, "كيلو", 100, 50, Decimal::from(12), Some(270)),
        ("فانيليا", 3, "لتر", 25, 15, Decimal::from(6), Some(365)),
        ("مناديل", 4, "علبة", 200, 100, Decimal::new(18, 1), None),
    ];
    let today = Utc::now().date_naive();
    for (i, (name, category, unit, quantity, minimum, price, expiry)) in
        items.into_iter().enumerate()
    {
        let category = store
            .inventory
            .category(fixed_id(CATEGORY_NS, category))
            .cloned()
            .ok_or_else(|| AppError::NotFound("التصنيف".to_string()))?;
        store.inventory.add_item(InventoryItem {
            id: fixed_id(ITEM_NS, i as u128 + 1),
            name: name.to_string(),
            category,
            unit: unit.to_string(),
            current_quantity: Decimal::from(quantity),
            min_quantity: Decimal::from(minimum),
            price,
            last_updated: Utc::now(),
            expiry_date: expiry.map(|days| expiry_date(today, days)),
        })?;
    }
    Ok(())
}

fn expiry_date(today: NaiveDate, days: i64) -> NaiveDate {
    today + Duration::days(days)
}

fn seed_suppliers(store: &Store) -> AppResult<()> {
    let suppliers = [
        (
            "شركة الوادي للمواد الغذائية",
            "alwadi@example.com",
            "سليم الوادي",
            "دفع آجل 30 يوم",
        ),
        (
            "مؤسسة الريف للمنتجات الزراعية",
            "alreef@example.com",
            "خالد الريفي",
            "دفع فوري",
        ),
        (
            "شركة الأمل للتغليف",
            "alamal@example.com",
            "ماجد العلي",
            "دفع آجل 15 يوم",
        ),
        (
            "مخازن الشمال",
            "alshamal@example.com",
            "عمر الشمالي",
            "دفع بالتقسيط",
        ),
        (
            "مصنع النجمة للمواد الأولية",
            "alnajma@example.com",
            "يوسف النجار",
            "دفع آجل 45 يوم",
        ),
    ];
    let mut store = store.write();
    for (i, (name, email, contact_person, payment_terms)) in suppliers.into_iter().enumerate() {
        store.suppliers.add_supplier(Supplier {
            id: fixed_id(SUPPLIER_NS, i as u128 + 1),
            name: name.to_string(),
            phone: format!("079000000{}", i + 1),
            email: email.to_string(),
            address: "عمان - الأردن".to_string(),
            contact_person: contact_person.to_string(),
            payment_terms: payment_terms.to_string(),
            total_purchases: Decimal::ZERO,
            total_paid: Decimal::ZERO,
            balance: Decimal::ZERO,
            transactions: Vec::new(),
        })?;
    }
    Ok(())
}

fn seed_branches(store: &Store) -> AppResult<()> {
    // (name, location, manager, representatives)
    let branches: [(&str, &str, &str, &[&str]); 4] = [
        (
            "فرع الجبيهة",
            "الجبيهة - شارع الملكة رانيا",
            "محمد أحمد",
            &["أحمد خالد", "عمر علي"],
        ),
        (
            "فرع الصويفية",
            "الصويفية - شارع الوكالات",
            "سمير راشد",
            &["رامي فادي"],
        ),
        (
            "فرع تلاع العلي",
            "تلاع العلي - شارع المدينة المنورة",
            "فراس محمود",
            &["سامي وليد", "ناصر محمد"],
        ),
        (
            "فرع عبدون",
            "عبدون - الدوار الخامس",
            "علاء حسن",
            &["مهند علي"],
        ),
    ];
    let mut store = store.write();
    let mut rep_counter: u128 = 0;
    for (i, (name, location, manager, reps)) in branches.into_iter().enumerate() {
        let representatives = reps
            .iter()
            .map(|rep_name| {
                rep_counter += 1;
                BranchRepresentative {
                    id: fixed_id(REP_NS, rep_counter),
                    name: (*rep_name).to_string(),
                    phone: format!("07800000{:02}", rep_counter),
                    role: "مندوب استلام".to_string(),
                }
            })
            .collect();
        store.branches.add_branch(Branch {
            id: fixed_id(BRANCH_NS, i as u128 + 1),
            name: name.to_string(),
            location: location.to_string(),
            phone: format!("06400000{}", i + 1),
            manager: manager.to_string(),
            representatives,
        })?;
    }
    Ok(())
}

fn seed_movements(store: &Store, config: &SeedConfig, rng: &mut StdRng) -> AppResult<()> {
    let inventory = InventoryService::new(store.clone());
    let item_ids: Vec<Uuid> = {
        let snapshot = store.read();
        (1..=10).map(|n| fixed_id(ITEM_NS, n)).filter(|id| snapshot.inventory.item(*id).is_some()).collect()
    };
    let supplier_ids: Vec<Uuid> = (1..=5).map(|n| fixed_id(SUPPLIER_NS, n)).collect();
    let branches: Vec<Branch> = store.read().branches.branches();

    for _ in 0..config.incoming_movements {
        let item_id = item_ids[rng.gen_range(0..item_ids.len())];
        let supplier_id = supplier_ids[rng.gen_range(0..supplier_ids.len())];
        let (price, quantity) = {
            let snapshot = store.read();
            let item = snapshot
                .inventory
                .item(item_id)
                .ok_or_else(|| AppError::NotFound("المادة".to_string()))?;
            (item.price, Decimal::from(rng.gen_range(50i64..=500)))
        };
        let total_price = price * quantity;
        let paid_cap = total_price.trunc().to_i64().unwrap_or(0).max(0);
        let paid_amount = Decimal::from(rng.gen_range(0..=paid_cap));
        inventory.record_incoming_shipment(IncomingShipmentInput {
            item_id,
            supplier_id,
            quantity,
            total_price,
            paid_amount,
            date: Some(recent_date(rng)),
            notes: None,
        })?;
    }

    for _ in 0..config.outgoing_movements {
        let item_id = item_ids[rng.gen_range(0..item_ids.len())];
        let branch = &branches[rng.gen_range(0..branches.len())];
        let representative = &branch.representatives[rng.gen_range(0..branch.representatives.len())];
        let available = store
            .read()
            .inventory
            .item(item_id)
            .map(|item| item.current_quantity.trunc().to_i64().unwrap_or(0))
            .unwrap_or(0);
        let wanted = rng.gen_range(10i64..=100).min(available);
        if wanted < 1 {
            continue;
        }
        inventory.record_outgoing_issue(OutgoingIssueInput {
            item_id,
            branch_id: branch.id,
            representative_id: representative.id,
            quantity: Decimal::from(wanted),
            date: Some(recent_date(rng)),
            notes: None,
        })?;
    }
    Ok(())
}

fn seed_payments(store: &Store, rng: &mut StdRng) -> AppResult<()> {
    let suppliers = SupplierService::new(store.clone());
    for n in 1..=5u128 {
        let supplier_id = fixed_id(SUPPLIER_NS, n);
        let payment_count = rng.gen_range(1..=3);
        for _ in 0..payment_count {
            let outstanding = suppliers
                .get_supplier(supplier_id)?
                .balance
                .trunc()
                .to_i64()
                .unwrap_or(0);
            if outstanding < 1 {
                break;
            }
            let amount = rng.gen_range(1..=outstanding.min(2000));
            suppliers.record_payment(
                supplier_id,
                PaymentInput {
                    amount: Decimal::from(amount),
                    date: Some(recent_date(rng)),
                    notes: Some("دفعة من المستحقات".to_string()),
                },
            )?;
        }
    }
    Ok(())
}

/// A random timestamp within the last 90 days.
fn recent_date(rng: &mut StdRng) -> chrono::DateTime<Utc> {
    Utc::now() - Duration::minutes(rng.gen_range(0..90 * 24 * 60))
}
