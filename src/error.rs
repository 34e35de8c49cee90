use std::path::PathBuf;
use thiserror::Error;

/// Which operation was refused because no warehouse was entered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarehouseAction {
    Scan,
    Export,
}

impl WarehouseAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarehouseAction::Scan => "scanning",
            WarehouseAction::Export => "exporting",
        }
    }
}

/// Unified error type for catalog, session and export operations
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The product catalog file does not exist
    #[error("File {} not found. The application will exit.", .0.display())]
    CatalogMissing(PathBuf),
    /// Failed to read or write CSV data
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A scan or export was attempted with an empty warehouse field
    #[error("Please enter the warehouse before {}.", .0.as_str())]
    WarehouseMissing(WarehouseAction),
}

impl InventoryError {
    /// Title used for the user-facing warning
    pub fn title(&self) -> &'static str {
        match self {
            InventoryError::WarehouseMissing(_) => "Warehouse Missing",
            InventoryError::CatalogMissing(_) | InventoryError::Csv(_) | InventoryError::Io(_) => {
                "Error"
            }
        }
    }
}

/// Result type alias for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;
