//! Business logic services for the Pharma Stock Management Platform

pub mod inventory;
pub mod reporting;

pub use inventory::InventoryService;
pub use reporting::ReportingService;
