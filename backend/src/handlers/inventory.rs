//! HTTP handlers for inventory management endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use shared::models::{InventoryItem, InventoryTransaction, ItemCategory};

use crate::error::AppResult;
use crate::services::inventory::{
    CategoryInput, IncomingShipmentInput, InventoryService, ItemInput, OutgoingIssueInput,
};
use crate::AppState;

const DEFAULT_RECENT_LIMIT: usize = 10;
const DEFAULT_EXPIRY_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct ExpiringQuery {
    pub within_days: Option<i64>,
}

/// Total inventory value response
#[derive(Debug, serde::Serialize)]
pub struct InventoryValueResponse {
    pub total_value: Decimal,
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

pub async fn list_items(State(state): State<AppState>) -> Json<Vec<InventoryItem>> {
    Json(InventoryService::new(state.store).list_items())
}

pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
) -> AppResult<Json<InventoryItem>> {
    Ok(Json(InventoryService::new(state.store).get_item(item_id)?))
}

pub async fn create_item(
    State(state): State<AppState>,
    Json(input): Json<ItemInput>,
) -> AppResult<Json<InventoryItem>> {
    Ok(Json(InventoryService::new(state.store).create_item(input)?))
}

pub async fn update_item(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
    Json(input): Json<ItemInput>,
) -> AppResult<Json<InventoryItem>> {
    Ok(Json(
        InventoryService::new(state.store).update_item(item_id, input)?,
    ))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    InventoryService::new(state.store).delete_item(item_id)?;
    Ok(Json(()))
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<ItemCategory>> {
    Json(InventoryService::new(state.store).list_categories())
}

pub async fn create_category(
    State(state): State<AppState>,
    Json(input): Json<CategoryInput>,
) -> AppResult<Json<ItemCategory>> {
    Ok(Json(
        InventoryService::new(state.store).create_category(input)?,
    ))
}

pub async fn update_category(
    State(state): State<AppState>,
    Path(category_id): Path<Uuid>,
    Json(input): Json<CategoryInput>,
) -> AppResult<Json<ItemCategory>> {
    Ok(Json(
        InventoryService::new(state.store).update_category(category_id, input)?,
    ))
}

pub async fn delete_category(
    State(state): State<AppState>,
    Path(category_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    InventoryService::new(state.store).delete_category(category_id)?;
    Ok(Json(()))
}

// ---------------------------------------------------------------------------
// Movements
// ---------------------------------------------------------------------------

pub async fn list_transactions(State(state): State<AppState>) -> Json<Vec<InventoryTransaction>> {
    Json(InventoryService::new(state.store).list_transactions())
}

pub async fn recent_transactions(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> Json<Vec<InventoryTransaction>> {
    let limit = query.limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    Json(InventoryService::new(state.store).recent_transactions(limit))
}

pub async fn record_incoming_shipment(
    State(state): State<AppState>,
    Json(input): Json<IncomingShipmentInput>,
) -> AppResult<Json<InventoryTransaction>> {
    Ok(Json(
        InventoryService::new(state.store).record_incoming_shipment(input)?,
    ))
}

pub async fn record_outgoing_issue(
    State(state): State<AppState>,
    Json(input): Json<OutgoingIssueInput>,
) -> AppResult<Json<InventoryTransaction>> {
    Ok(Json(
        InventoryService::new(state.store).record_outgoing_issue(input)?,
    ))
}

// ---------------------------------------------------------------------------
// Derived queries
// ---------------------------------------------------------------------------

pub async fn low_stock_items(State(state): State<AppState>) -> Json<Vec<InventoryItem>> {
    Json(InventoryService::new(state.store).low_stock_items())
}

pub async fn total_inventory_value(State(state): State<AppState>) -> Json<InventoryValueResponse> {
    Json(InventoryValueResponse {
        total_value: InventoryService::new(state.store).total_inventory_value(),
    })
}

pub async fn expiring_items(
    State(state): State<AppState>,
    Query(query): Query<ExpiringQuery>,
) -> Json<Vec<InventoryItem>> {
    let within_days = query.within_days.unwrap_or(DEFAULT_EXPIRY_WINDOW_DAYS);
    Json(InventoryService::new(state.store).expiring_items(within_days))
}
