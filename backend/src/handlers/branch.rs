//! HTTP handlers for branch management endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use shared::models::{Branch, BranchRepresentative};

use crate::error::AppResult;
use crate::services::branch::{BranchInput, BranchService, RepresentativeInput};
use crate::AppState;

pub async fn list_branches(State(state): State<AppState>) -> Json<Vec<Branch>> {
    Json(BranchService::new(state.store).list_branches())
}

pub async fn get_branch(
    State(state): State<AppState>,
    Path(branch_id): Path<Uuid>,
) -> AppResult<Json<Branch>> {
    Ok(Json(BranchService::new(state.store).get_branch(branch_id)?))
}

pub async fn create_branch(
    State(state): State<AppState>,
    Json(input): Json<BranchInput>,
) -> AppResult<Json<Branch>> {
    Ok(Json(BranchService::new(state.store).create_branch(input)?))
}

pub async fn update_branch(
    State(state): State<AppState>,
    Path(branch_id): Path<Uuid>,
    Json(input): Json<BranchInput>,
) -> AppResult<Json<Branch>> {
    Ok(Json(
        BranchService::new(state.store).update_branch(branch_id, input)?,
    ))
}

pub async fn add_representative(
    State(state): State<AppState>,
    Path(branch_id): Path<Uuid>,
    Json(input): Json<RepresentativeInput>,
) -> AppResult<Json<BranchRepresentative>> {
    Ok(Json(
        BranchService::new(state.store).add_representative(branch_id, input)?,
    ))
}
