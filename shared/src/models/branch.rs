//! Branch and representative models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bakery branch receiving stock from the central warehouse
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub phone: String,
    pub manager: String,
    pub representatives: Vec<BranchRepresentative>,
}

/// A person authorized to receive goods on behalf of a branch
///
/// Owned by exactly one branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchRepresentative {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub role: String,
}
