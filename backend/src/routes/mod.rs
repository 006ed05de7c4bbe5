//! Route definitions for the Sanabel Bakery inventory backend

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Inventory: items, categories, movements, stock queries
        .nest("/inventory", inventory_routes())
        // Supplier accounts and financials
        .nest("/suppliers", supplier_routes())
        // Branches and representatives
        .nest("/branches", branch_routes())
        // Dashboard aggregates
        .nest("/reports", report_routes())
        // Warehouse-manager profile
        .nest("/settings", settings_routes())
}

/// Inventory management routes
fn inventory_routes() -> Router<AppState> {
    Router::new()
        // Items
        .route("/items", get(handlers::list_items).post(handlers::create_item))
        .route(
            "/items/:item_id",
            get(handlers::get_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item),
        )
        // Categories
        .route(
            "/categories",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route(
            "/categories/:category_id",
            put(handlers::update_category).delete(handlers::delete_category),
        )
        // Movements
        .route("/transactions", get(handlers::list_transactions))
        .route("/transactions/recent", get(handlers::recent_transactions))
        .route(
            "/transactions/incoming",
            post(handlers::record_incoming_shipment),
        )
        .route(
            "/transactions/outgoing",
            post(handlers::record_outgoing_issue),
        )
        // Stock queries
        .route("/low-stock", get(handlers::low_stock_items))
        .route("/value", get(handlers::total_inventory_value))
        .route("/expiring", get(handlers::expiring_items))
}

/// Supplier management routes
fn supplier_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_suppliers).post(handlers::create_supplier),
        )
        .route("/balance", get(handlers::total_balance))
        .route(
            "/:supplier_id",
            get(handlers::get_supplier).put(handlers::update_supplier),
        )
        .route(
            "/:supplier_id/transactions",
            get(handlers::list_supplier_transactions),
        )
        .route("/:supplier_id/payments", post(handlers::record_payment))
}

/// Branch management routes
fn branch_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_branches).post(handlers::create_branch),
        )
        .route(
            "/:branch_id",
            get(handlers::get_branch).put(handlers::update_branch),
        )
        .route(
            "/:branch_id/representatives",
            post(handlers::add_representative),
        )
}

/// Reporting routes
fn report_routes() -> Router<AppState> {
    Router::new().route("/summary", get(handlers::summary))
}

/// Settings routes
fn settings_routes() -> Router<AppState> {
    Router::new().route(
        "/profile",
        get(handlers::get_profile).put(handlers::update_profile),
    )
}
