pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod formatters;
pub mod models;
pub mod session;
pub mod ui;

// Re-export commonly used items
pub use catalog::{read_catalog, Catalog};
pub use config::Config;
pub use error::{InventoryError, InventoryResult, WarehouseAction};
pub use formatters::{format_export_filename, format_scan_line};
pub use models::{CatalogEntry, ExportRow, ScanRecord, UNKNOWN_PRODUCT};
pub use session::{ExportCommand, ExportSummary, InventorySession, ScanCommand, ScanOutcome};
