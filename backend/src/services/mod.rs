//! Business logic services for the Sanabel Bakery inventory backend

pub mod branch;
pub mod inventory;
pub mod report;
pub mod settings;
pub mod supplier;

pub use branch::BranchService;
pub use inventory::InventoryService;
pub use report::ReportService;
pub use settings::SettingsService;
pub use supplier::SupplierService;
