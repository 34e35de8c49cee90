use crate::models::ScanRecord;
use chrono::NaiveDateTime;

/// Formats one line of the scan log
pub fn format_scan_line(record: &ScanRecord) -> String {
    format!(
        "{} - Barcode: {} - Quantity: {} - Warehouse: {}",
        record.product_name, record.barcode, record.quantity, record.warehouse
    )
}

/// Export file name for a given local time, e.g. `inventory_05032025_14h07m.csv`.
///
/// `attempt` 1 is the plain name; higher attempts get a `_N` suffix so that two
/// exports within the same minute do not overwrite each other.
pub fn format_export_filename(now: &NaiveDateTime, attempt: u32) -> String {
    let stamp = now.format("%d%m%Y_%Hh%Mm");
    if attempt <= 1 {
        format!("inventory_{stamp}.csv")
    } else {
        format!("inventory_{stamp}_{attempt}.csv")
    }
}

/// Status message shown after a successful export
pub fn format_export_status(file_name: &str, rows: usize) -> String {
    match rows {
        1 => format!("CSV exported successfully as {file_name}! (1 product)"),
        n => format!("CSV exported successfully as {file_name}! ({n} products)"),
    }
}
