use serde::{Deserialize, Serialize};

/// Display name used when a barcode is in neither the loaded catalog nor the catalog file
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// Header of every export file, in column order
pub const EXPORT_HEADER: [&str; 4] = ["Warehouse", "Barcode", "Product Name", "Quantity"];

/// Normalizes a barcode into the key used by the catalog and the scan counts
pub fn normalize_barcode(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// One row of the product catalog (`products.csv`)
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogEntry {
    #[serde(rename = "Barcode", default)]
    pub barcode: String,
    #[serde(rename = "Product Name", default)]
    pub product_name: String,
    #[serde(rename = "Cost", default)]
    pub cost: Option<String>,
}

impl CatalogEntry {
    /// Normalized barcode key for this row
    pub fn key(&self) -> String {
        normalize_barcode(&self.barcode)
    }

    /// Trimmed product name
    pub fn name(&self) -> &str {
        self.product_name.trim()
    }

    /// Rows without a barcode or a product name are not part of the catalog
    pub fn is_complete(&self) -> bool {
        !self.key().is_empty() && !self.name().is_empty()
    }
}

/// One row of an inventory export file
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ExportRow {
    #[serde(rename = "Warehouse")]
    pub warehouse: String,
    #[serde(rename = "Barcode")]
    pub barcode: String,
    #[serde(rename = "Product Name")]
    pub product_name: String,
    #[serde(rename = "Quantity")]
    pub quantity: u32,
}

/// Snapshot of a single recorded scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRecord {
    pub barcode: String,
    pub product_name: String,
    pub quantity: u32,
    pub warehouse: String,
}

impl ScanRecord {
    /// Whether the scanned barcode could not be resolved to a product
    pub fn is_unknown(&self) -> bool {
        self.product_name == UNKNOWN_PRODUCT
    }
}
