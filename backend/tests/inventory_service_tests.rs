//! Inventory catalog tests
//!
//! Tests for the item and category registry:
//! - referential constraints on delete
//! - low-stock and expiry queries
//! - stock valuation

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use sanabel_inventory_backend::services::inventory::{CategoryInput, InventoryService, ItemInput};
use sanabel_inventory_backend::Store;
use shared::models::ItemCategory;

fn dec(n: i64) -> Decimal {
    Decimal::from(n)
}

fn service() -> InventoryService {
    InventoryService::new(Store::new())
}

fn item_input(name: &str, category_id: Uuid, quantity: i64, minimum: i64, price: i64) -> ItemInput {
    ItemInput {
        name: name.to_string(),
        category_id,
        unit: "كيلو".to_string(),
        current_quantity: dec(quantity),
        min_quantity: dec(minimum),
        price: dec(price),
        expiry_date: None,
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn item_carries_its_category() {
        let inventory = service();
        let category = inventory
            .create_category(CategoryInput {
                name: "مواد خام".to_string(),
            })
            .unwrap();
        let item = inventory
            .create_item(item_input("خميرة", category.id, 30, 20, 8))
            .unwrap();
        assert_eq!(item.category.name, "مواد خام");
    }

    #[test]
    fn item_requires_existing_category() {
        let inventory = service();
        let result = inventory.create_item(item_input("خميرة", Uuid::new_v4(), 30, 20, 8));
        assert!(result.is_err());
        assert!(inventory.list_items().is_empty());
    }

    #[test]
    fn negative_quantity_rejected() {
        let inventory = service();
        let category = inventory
            .create_category(CategoryInput {
                name: "مواد خام".to_string(),
            })
            .unwrap();
        let result = inventory.create_item(item_input("خميرة", category.id, -5, 20, 8));
        assert!(result.is_err());
    }

    #[test]
    fn blank_category_name_rejected() {
        let inventory = service();
        let result = inventory.create_category(CategoryInput {
            name: "   ".to_string(),
        });
        assert!(result.is_err());
    }

    /// A category with items cannot be deleted; an empty one can.
    #[test]
    fn delete_category_respects_items() {
        let inventory = service();
        let used = inventory
            .create_category(CategoryInput {
                name: "مواد غذائية".to_string(),
            })
            .unwrap();
        let empty = inventory
            .create_category(CategoryInput {
                name: "أخرى".to_string(),
            })
            .unwrap();
        inventory
            .create_item(item_input("سكر", used.id, 800, 300, 1))
            .unwrap();

        assert!(inventory.delete_category(used.id).is_err());
        assert!(inventory.delete_category(empty.id).is_ok());
        assert_eq!(inventory.list_categories().len(), 1);
    }

    /// Renaming a category does not rewrite the copies items carry;
    /// those copies are a snapshot from creation time.
    #[test]
    fn category_rename_keeps_item_snapshot() {
        let inventory = service();
        let category = inventory
            .create_category(CategoryInput {
                name: "مواد غذائية".to_string(),
            })
            .unwrap();
        let item = inventory
            .create_item(item_input("سكر", category.id, 800, 300, 1))
            .unwrap();
        inventory
            .update_category(
                category.id,
                CategoryInput {
                    name: "مواد أساسية".to_string(),
                },
            )
            .unwrap();
        assert_eq!(inventory.get_item(item.id).unwrap().category.name, "مواد غذائية");
        let renamed: Vec<ItemCategory> = inventory.list_categories();
        assert_eq!(renamed[0].name, "مواد أساسية");
    }

    #[test]
    fn low_stock_boundary_is_inclusive() {
        let inventory = service();
        let category = inventory
            .create_category(CategoryInput {
                name: "مواد خام".to_string(),
            })
            .unwrap();
        inventory
            .create_item(item_input("على الحد", category.id, 20, 20, 1))
            .unwrap();
        inventory
            .create_item(item_input("فوق الحد", category.id, 21, 20, 1))
            .unwrap();

        let low = inventory.low_stock_items();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].name, "على الحد");
    }

    #[test]
    fn total_value_sums_quantity_times_price() {
        let inventory = service();
        let category = inventory
            .create_category(CategoryInput {
                name: "مواد غذائية".to_string(),
            })
            .unwrap();
        inventory
            .create_item(item_input("سكر", category.id, 100, 10, 2))
            .unwrap();
        inventory
            .create_item(item_input("بيض", category.id, 50, 10, 5))
            .unwrap();
        // 100 * 2 + 50 * 5 = 450
        assert_eq!(inventory.total_inventory_value(), dec(450));
    }

    /// Only items expiring inside the window are reported; items with
    /// no expiry date never are.
    #[test]
    fn expiring_items_respect_window() {
        let inventory = service();
        let category = inventory
            .create_category(CategoryInput {
                name: "مواد غذائية".to_string(),
            })
            .unwrap();
        let today = Utc::now().date_naive();

        let mut soon = item_input("بيض", category.id, 80, 40, 5);
        soon.expiry_date = Some(today + Duration::days(10));
        inventory.create_item(soon).unwrap();

        let mut later = item_input("شوكولاتة", category.id, 100, 50, 12);
        later.expiry_date = Some(today + Duration::days(90));
        inventory.create_item(later).unwrap();

        inventory
            .create_item(item_input("سكر", category.id, 800, 300, 1))
            .unwrap();

        let expiring = inventory.expiring_items(30);
        assert_eq!(expiring.len(), 1);
        assert_eq!(expiring[0].name, "بيض");
    }

    #[test]
    fn update_item_replaces_fields() {
        let inventory = service();
        let category = inventory
            .create_category(CategoryInput {
                name: "مواد غذائية".to_string(),
            })
            .unwrap();
        let item = inventory
            .create_item(item_input("سكر", category.id, 800, 300, 1))
            .unwrap();
        let updated = inventory
            .update_item(item.id, item_input("سكر بني", category.id, 600, 200, 2))
            .unwrap();
        assert_eq!(updated.name, "سكر بني");
        assert_eq!(inventory.get_item(item.id).unwrap().current_quantity, dec(600));
    }

    #[test]
    fn delete_item_without_movements_succeeds() {
        let inventory = service();
        let category = inventory
            .create_category(CategoryInput {
                name: "مواد غذائية".to_string(),
            })
            .unwrap();
        let item = inventory
            .create_item(item_input("سكر", category.id, 800, 300, 1))
            .unwrap();
        inventory.delete_item(item.id).unwrap();
        assert!(inventory.get_item(item.id).is_err());
    }
}
