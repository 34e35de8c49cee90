//! Product catalog loaded from `products.csv`.
//!
//! The catalog maps normalized barcodes to product names. It is read once at
//! startup; barcodes missing from it can be looked up again in the file on
//! demand (see [`Catalog::lookup_on_disk`]).

use crate::error::{InventoryError, InventoryResult};
use crate::models::{normalize_barcode, CatalogEntry};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

fn open_reader(path: &Path) -> InventoryResult<csv::Reader<std::fs::File>> {
    let rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    Ok(rdr)
}

/// Reads every complete row of a catalog file
pub fn read_catalog(path: &Path) -> InventoryResult<Vec<CatalogEntry>> {
    if !path.exists() {
        return Err(InventoryError::CatalogMissing(path.to_path_buf()));
    }

    let mut rdr = open_reader(path)?;
    let mut entries = Vec::new();

    for result in rdr.deserialize() {
        let entry: CatalogEntry = result?;
        if entry.is_complete() {
            entries.push(entry);
        }
    }

    Ok(entries)
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    names: HashMap<String, String>,
    source: Option<PathBuf>,
}

impl Catalog {
    /// Loads the catalog from a CSV file. A missing file is reported as
    /// [`InventoryError::CatalogMissing`].
    pub fn load<P: AsRef<Path>>(path: P) -> InventoryResult<Self> {
        let path = path.as_ref();
        let entries = read_catalog(path)?;
        let mut catalog = Self::from_entries(entries);
        catalog.source = Some(path.to_path_buf());
        log::info!("Loaded {} products from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Builds an in-memory catalog with no backing file
    pub fn from_entries<I: IntoIterator<Item = CatalogEntry>>(entries: I) -> Self {
        let mut names = HashMap::new();
        for entry in entries {
            if entry.is_complete() {
                names.insert(entry.key(), entry.name().to_string());
            }
        }
        Self {
            names,
            source: None,
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// File the catalog was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Looks up a product name in memory. The barcode is normalized first.
    pub fn get(&self, barcode: &str) -> Option<&str> {
        self.names.get(&normalize_barcode(barcode)).map(String::as_str)
    }

    /// Re-reads the catalog file looking for a single barcode.
    ///
    /// Returns the trimmed name of the first matching row. Rows with an empty
    /// name count as a match with no name. Read failures are logged and
    /// treated as "not found".
    pub fn lookup_on_disk(&self, barcode: &str) -> Option<String> {
        let path = self.source.as_deref()?;
        let key = normalize_barcode(barcode);

        match scan_file_for(path, &key) {
            Ok(found) => found.filter(|name| !name.is_empty()),
            Err(e) => {
                log::warn!(
                    "Fallback lookup of '{}' in {} failed: {}",
                    key,
                    path.display(),
                    e
                );
                None
            }
        }
    }
}

fn scan_file_for(path: &Path, key: &str) -> InventoryResult<Option<String>> {
    let mut rdr = open_reader(path)?;
    for result in rdr.deserialize() {
        let entry: CatalogEntry = result?;
        if entry.key() == key {
            return Ok(Some(entry.name().to_string()));
        }
    }
    Ok(None)
}
