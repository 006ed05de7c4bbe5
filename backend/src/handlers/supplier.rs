//! HTTP handlers for supplier management endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use rust_decimal::Decimal;
use uuid::Uuid;

use shared::models::{Supplier, SupplierTransaction};

use crate::error::AppResult;
use crate::services::supplier::{PaymentInput, SupplierInput, SupplierService};
use crate::AppState;

/// Total outstanding balance response
#[derive(Debug, serde::Serialize)]
pub struct TotalBalanceResponse {
    pub total_balance: Decimal,
}

pub async fn list_suppliers(State(state): State<AppState>) -> Json<Vec<Supplier>> {
    Json(SupplierService::new(state.store).list_suppliers())
}

pub async fn get_supplier(
    State(state): State<AppState>,
    Path(supplier_id): Path<Uuid>,
) -> AppResult<Json<Supplier>> {
    Ok(Json(
        SupplierService::new(state.store).get_supplier(supplier_id)?,
    ))
}

pub async fn create_supplier(
    State(state): State<AppState>,
    Json(input): Json<SupplierInput>,
) -> AppResult<Json<Supplier>> {
    Ok(Json(
        SupplierService::new(state.store).create_supplier(input)?,
    ))
}

pub async fn update_supplier(
    State(state): State<AppState>,
    Path(supplier_id): Path<Uuid>,
    Json(input): Json<SupplierInput>,
) -> AppResult<Json<Supplier>> {
    Ok(Json(
        SupplierService::new(state.store).update_supplier(supplier_id, input)?,
    ))
}

pub async fn list_supplier_transactions(
    State(state): State<AppState>,
    Path(supplier_id): Path<Uuid>,
) -> AppResult<Json<Vec<SupplierTransaction>>> {
    Ok(Json(
        SupplierService::new(state.store).list_transactions(supplier_id)?,
    ))
}

pub async fn record_payment(
    State(state): State<AppState>,
    Path(supplier_id): Path<Uuid>,
    Json(input): Json<PaymentInput>,
) -> AppResult<Json<SupplierTransaction>> {
    Ok(Json(
        SupplierService::new(state.store).record_payment(supplier_id, input)?,
    ))
}

pub async fn total_balance(State(state): State<AppState>) -> Json<TotalBalanceResponse> {
    Json(TotalBalanceResponse {
        total_balance: SupplierService::new(state.store).total_balance(),
    })
}
