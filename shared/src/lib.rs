//! Shared types and domain logic for the Sanabel Bakery inventory system
//!
//! This crate contains the entity models, the in-memory ledgers, and the
//! domain validation helpers used by the backend service.

pub mod ledger;
pub mod models;
pub mod validation;

pub use ledger::*;
pub use models::*;
pub use validation::*;
