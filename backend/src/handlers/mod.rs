//! HTTP handlers for the Sanabel Bakery inventory backend

pub mod branch;
pub mod health;
pub mod inventory;
pub mod report;
pub mod settings;
pub mod supplier;

pub use branch::*;
pub use health::*;
pub use inventory::*;
pub use report::*;
pub use settings::*;
pub use supplier::*;
