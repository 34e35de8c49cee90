use std::path::PathBuf;

/// Default catalog file, resolved against the working directory
pub const DEFAULT_CATALOG_FILE: &str = "products.csv";

/// Runtime settings for an inventory session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the product catalog CSV
    pub catalog_path: PathBuf,
    /// Directory export files are written to
    pub output_dir: PathBuf,
    /// Re-scan the catalog file for barcodes missing from the loaded catalog
    pub disk_fallback: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_FILE),
            output_dir: PathBuf::from("."),
            disk_fallback: true,
        }
    }
}

impl Config {
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = path.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_disk_fallback(mut self, enabled: bool) -> Self {
        self.disk_fallback = enabled;
        self
    }
}
