//! HTTP handlers for dashboard reporting endpoints

use axum::{extract::State, Json};

use crate::services::report::{ReportService, SummaryReport};
use crate::AppState;

pub async fn summary(State(state): State<AppState>) -> Json<SummaryReport> {
    Json(ReportService::new(state.store).summary())
}
