//! Entity models for the Sanabel Bakery inventory system

pub mod branch;
pub mod inventory;
pub mod supplier;
pub mod user;

pub use branch::*;
pub use inventory::*;
pub use supplier::*;
pub use user::*;
