use crate::error::InventoryError;
use crate::formatters::format_export_status;
use crate::session::{ExportCommand, InventorySession, ScanCommand, ScanOutcome};

/// A warning waiting to be acknowledged by the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub title: String,
    pub message: String,
}

impl From<&InventoryError> for Warning {
    fn from(err: &InventoryError) -> Self {
        Self {
            title: err.title().to_string(),
            message: err.to_string(),
        }
    }
}

/// Form state of the scanner screen
#[derive(Debug, Default)]
pub struct ScannerState {
    pub warehouse: String,
    pub barcode: String,
    pub status: String,
    pub warning: Option<Warning>,
    /// Move keyboard focus back to the barcode field on the next frame
    pub focus_barcode: bool,
}

impl ScannerState {
    /// Handles Enter in the barcode field
    pub fn submit_scan(&mut self, session: &mut InventorySession) {
        let cmd = ScanCommand::new(self.warehouse.as_str(), self.barcode.as_str());
        match session.scan(&cmd) {
            Ok(ScanOutcome::Recorded(record)) => {
                self.barcode.clear();
                self.status = format!(
                    "{} scans, {} products",
                    session.total_scans(),
                    session.distinct_barcodes()
                );
                if record.is_unknown() {
                    self.status.push_str(&format!(" - {} is not in the catalog", record.barcode));
                }
            }
            Ok(ScanOutcome::Ignored) => {}
            Err(e) => {
                self.barcode.clear();
                self.warn(&e);
            }
        }
        self.focus_barcode = true;
    }

    /// Handles the export button
    pub fn submit_export(&mut self, session: &InventorySession) {
        match session.export(&ExportCommand::new(self.warehouse.as_str())) {
            Ok(summary) => {
                self.status = format_export_status(&summary.file_name(), summary.rows);
            }
            Err(e) => {
                if !matches!(e, InventoryError::WarehouseMissing(_)) {
                    log::error!("Export failed: {e}");
                }
                self.warn(&e);
            }
        }
    }

    fn warn(&mut self, err: &InventoryError) {
        self.warning = Some(Warning::from(err));
    }

    pub fn dismiss_warning(&mut self) {
        self.warning = None;
        self.focus_barcode = true;
    }
}
