//! In-memory scanning session.
//!
//! Holds the catalog, the per-barcode counts and the scan log for one run.
//! Front ends drive it through [`ScanCommand`] and [`ExportCommand`] and only
//! render what it returns.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{InventoryError, InventoryResult, WarehouseAction};
use crate::export::write_export;
use crate::formatters::format_scan_line;
use crate::models::{normalize_barcode, ExportRow, ScanRecord, UNKNOWN_PRODUCT};
use chrono::NaiveDateTime;
use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;

/// A barcode submitted for a warehouse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanCommand {
    pub warehouse: String,
    pub barcode: String,
}

impl ScanCommand {
    pub fn new(warehouse: impl Into<String>, barcode: impl Into<String>) -> Self {
        Self {
            warehouse: warehouse.into(),
            barcode: barcode.into(),
        }
    }
}

/// A request to write the current counts to a new CSV file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportCommand {
    pub warehouse: String,
}

impl ExportCommand {
    pub fn new(warehouse: impl Into<String>) -> Self {
        Self {
            warehouse: warehouse.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The scan was counted and logged
    Recorded(ScanRecord),
    /// Empty barcode, nothing happened
    Ignored,
}

/// Result of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub rows: usize,
}

impl ExportSummary {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

pub struct InventorySession {
    catalog: Catalog,
    config: Config,
    counts: HashMap<String, u32>,
    /// Names resolved outside the loaded catalog (file fallback or unknown)
    resolved: HashMap<String, String>,
    /// Barcodes in the order they were first scanned
    scan_order: Vec<String>,
    /// Newest first
    log: VecDeque<String>,
}

impl InventorySession {
    pub fn new(catalog: Catalog, config: Config) -> Self {
        Self {
            catalog,
            config,
            counts: HashMap::new(),
            resolved: HashMap::new(),
            scan_order: Vec::new(),
            log: VecDeque::new(),
        }
    }

    /// Loads the catalog named in `config` and starts an empty session
    pub fn open(config: Config) -> InventoryResult<Self> {
        let catalog = Catalog::load(&config.catalog_path)?;
        Ok(Self::new(catalog, config))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Scan log lines, newest first
    pub fn log(&self) -> &VecDeque<String> {
        &self.log
    }

    /// Current count for a barcode (0 if never scanned)
    pub fn count(&self, barcode: &str) -> u32 {
        self.counts
            .get(&normalize_barcode(barcode))
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct barcodes scanned
    pub fn distinct_barcodes(&self) -> usize {
        self.scan_order.len()
    }

    /// Total number of recorded scans
    pub fn total_scans(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Records one scan.
    ///
    /// An empty warehouse is refused without touching the counts. An empty
    /// barcode is ignored.
    pub fn scan(&mut self, cmd: &ScanCommand) -> InventoryResult<ScanOutcome> {
        let warehouse = cmd.warehouse.trim();
        if warehouse.is_empty() {
            log::warn!("Scan refused: no warehouse entered");
            return Err(InventoryError::WarehouseMissing(WarehouseAction::Scan));
        }

        let barcode = normalize_barcode(&cmd.barcode);
        if barcode.is_empty() {
            return Ok(ScanOutcome::Ignored);
        }

        let quantity = self.increment(&barcode);
        let product_name = self.resolve_name(&barcode);

        let record = ScanRecord {
            barcode,
            product_name,
            quantity,
            warehouse: warehouse.to_string(),
        };
        log::debug!(
            "Scanned {} ({}) x{} in warehouse {}",
            record.barcode,
            record.product_name,
            record.quantity,
            record.warehouse
        );
        self.log.push_front(format_scan_line(&record));

        Ok(ScanOutcome::Recorded(record))
    }

    fn increment(&mut self, barcode: &str) -> u32 {
        if !self.counts.contains_key(barcode) {
            self.scan_order.push(barcode.to_string());
        }
        let count = self.counts.entry(barcode.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    /// Name for a barcode that was already resolved, if any
    fn known_name(&self, barcode: &str) -> Option<&str> {
        self.catalog
            .get(barcode)
            .or_else(|| self.resolved.get(barcode).map(String::as_str))
    }

    /// Resolves a display name: loaded catalog, then the catalog file, then
    /// [`UNKNOWN_PRODUCT`]. Whatever the fallback finds is kept for the rest
    /// of the session, outside the catalog.
    fn resolve_name(&mut self, barcode: &str) -> String {
        if let Some(name) = self.known_name(barcode) {
            return name.to_string();
        }

        let name = if self.config.disk_fallback {
            self.catalog.lookup_on_disk(barcode)
        } else {
            None
        };

        let name = match name {
            Some(name) => {
                log::info!("Found '{}' for {} in catalog file", name, barcode);
                name
            }
            None => {
                log::warn!("Barcode {} not in catalog", barcode);
                UNKNOWN_PRODUCT.to_string()
            }
        };
        self.resolved.insert(barcode.to_string(), name.clone());
        name
    }

    /// One export row per scanned barcode, in first-scan order
    pub fn export_rows(&self, warehouse: &str) -> Vec<ExportRow> {
        self.scan_order
            .iter()
            .map(|barcode| ExportRow {
                warehouse: warehouse.to_string(),
                barcode: barcode.clone(),
                product_name: self.known_name(barcode).unwrap_or(UNKNOWN_PRODUCT).to_string(),
                quantity: self.counts.get(barcode).copied().unwrap_or(0),
            })
            .collect()
    }

    /// Writes all counts to a new file in the configured output directory,
    /// named after the current local time. Counts are kept.
    pub fn export(&self, cmd: &ExportCommand) -> InventoryResult<ExportSummary> {
        self.export_at(cmd, &chrono::Local::now().naive_local())
    }

    /// Like [`export`](Self::export) with an explicit timestamp
    pub fn export_at(
        &self,
        cmd: &ExportCommand,
        now: &NaiveDateTime,
    ) -> InventoryResult<ExportSummary> {
        let warehouse = cmd.warehouse.trim();
        if warehouse.is_empty() {
            log::warn!("Export refused: no warehouse entered");
            return Err(InventoryError::WarehouseMissing(WarehouseAction::Export));
        }

        let rows = self.export_rows(warehouse);
        let path = write_export(&self.config.output_dir, now, &rows)?;
        log::info!("CSV exported successfully as {}!", path.display());

        Ok(ExportSummary {
            path,
            rows: rows.len(),
        })
    }
}
