//! Warehouse manager profile

use serde::{Deserialize, Serialize};

/// The single user profile edited from the settings screen
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
}
