//! Warehouse-manager profile settings

use serde::Deserialize;

use shared::models::UserProfile;
use shared::validation;

use crate::error::{AppError, AppResult};
use crate::store::Store;

/// Settings service wrapping the shared store
#[derive(Clone)]
pub struct SettingsService {
    store: Store,
}

/// Partial profile update; absent fields keep their current value
#[derive(Debug, Deserialize)]
pub struct ProfileInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
}

impl SettingsService {
    /// Create a new SettingsService instance
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn profile(&self) -> UserProfile {
        self.store.read().profile.clone()
    }

    pub fn update_profile(&self, input: ProfileInput) -> AppResult<UserProfile> {
        if let Some(email) = &input.email {
            validation::validate_email(email).map_err(|message| AppError::Validation {
                field: "email".to_string(),
                message: message.to_string(),
                message_ar: "البريد الإلكتروني غير صالح".to_string(),
            })?;
        }
        let mut store = self.store.write();
        let profile = &mut store.profile;
        if let Some(first_name) = input.first_name {
            profile.first_name = first_name;
        }
        if let Some(last_name) = input.last_name {
            profile.last_name = last_name;
        }
        if let Some(email) = input.email {
            profile.email = email;
        }
        if let Some(phone) = input.phone {
            profile.phone = phone;
        }
        if let Some(role) = input.role {
            profile.role = role;
        }
        Ok(profile.clone())
    }
}
