//! HTTP handlers for settings endpoints

use axum::{extract::State, Json};

use shared::models::UserProfile;

use crate::error::AppResult;
use crate::services::settings::{ProfileInput, SettingsService};
use crate::AppState;

pub async fn get_profile(State(state): State<AppState>) -> Json<UserProfile> {
    Json(SettingsService::new(state.store).profile())
}

pub async fn update_profile(
    State(state): State<AppState>,
    Json(input): Json<ProfileInput>,
) -> AppResult<Json<UserProfile>> {
    Ok(Json(
        SettingsService::new(state.store).update_profile(input)?,
    ))
}
