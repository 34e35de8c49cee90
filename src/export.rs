//! Writing inventory snapshots to CSV.

use crate::error::{InventoryError, InventoryResult};
use crate::formatters::format_export_filename;
use crate::models::{ExportRow, EXPORT_HEADER};
use chrono::NaiveDateTime;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Gives up looking for a free file name after this many attempts in one minute
const MAX_ATTEMPTS: u32 = 1000;

/// Writes the header and the rows to any writer.
///
/// The header is always written, even when there are no rows.
pub fn write_rows<W: Write>(writer: W, rows: &[ExportRow]) -> InventoryResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(EXPORT_HEADER)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Picks the export path for `now` inside `dir`, skipping names already taken
pub fn next_export_path(dir: &Path, now: &NaiveDateTime) -> InventoryResult<PathBuf> {
    free_export_path(dir, now, MAX_ATTEMPTS)
}

fn free_export_path(
    dir: &Path,
    now: &NaiveDateTime,
    max_attempts: u32,
) -> InventoryResult<PathBuf> {
    for attempt in 1..=max_attempts {
        let candidate = dir.join(format_export_filename(now, attempt));
        if candidate.exists() {
            continue;
        }
        if attempt > 1 {
            log::warn!(
                "Export file for this minute already exists, writing {} instead",
                candidate.display()
            );
        }
        return Ok(candidate);
    }

    Err(InventoryError::Io(std::io::Error::new(
        std::io::ErrorKind::AlreadyExists,
        format!(
            "{} export files already exist for {}",
            max_attempts,
            format_export_filename(now, 1)
        ),
    )))
}

/// Writes an export file into `dir` named after `now` and returns its path
pub fn write_export(
    dir: &Path,
    now: &NaiveDateTime,
    rows: &[ExportRow],
) -> InventoryResult<PathBuf> {
    let path = next_export_path(dir, now)?;
    let file = std::fs::File::create(&path)?;
    write_rows(file, rows)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 12, 31)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap()
    }

    fn row(barcode: &str, name: &str, quantity: u32) -> ExportRow {
        ExportRow {
            warehouse: "A".to_string(),
            barcode: barcode.to_string(),
            product_name: name.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_write_rows_header_only() {
        let mut buf = Vec::new();
        write_rows(&mut buf, &[]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Warehouse,Barcode,Product Name,Quantity\n"
        );
    }

    #[test]
    fn test_write_rows_quotes_commas() {
        let mut buf = Vec::new();
        write_rows(&mut buf, &[row("42", "Nuts, Bolts", 3)]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Warehouse,Barcode,Product Name,Quantity\nA,42,\"Nuts, Bolts\",3\n"
        );
    }

    #[test]
    fn test_write_export_does_not_overwrite() {
        let dir = TempDir::new().unwrap();

        let first = write_export(dir.path(), &noon(), &[row("1", "One", 1)]).unwrap();
        let second = write_export(dir.path(), &noon(), &[row("1", "One", 2)]).unwrap();

        assert_eq!(first.file_name().unwrap(), "inventory_31122024_12h30m.csv");
        assert_eq!(second.file_name().unwrap(), "inventory_31122024_12h30m_2.csv");
        assert!(std::fs::read_to_string(&first).unwrap().ends_with("A,1,One,1\n"));
        assert!(std::fs::read_to_string(&second).unwrap().ends_with("A,1,One,2\n"));
    }

    #[test]
    fn test_free_export_path_gives_up_without_overwriting() {
        let dir = TempDir::new().unwrap();
        for attempt in 1..=2 {
            let taken = dir.path().join(format_export_filename(&noon(), attempt));
            std::fs::write(taken, "old").unwrap();
        }

        let err = free_export_path(dir.path(), &noon(), 2).unwrap_err();

        match err {
            InventoryError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::AlreadyExists),
            other => panic!("unexpected error: {other}"),
        }
        let first = dir.path().join("inventory_31122024_12h30m.csv");
        assert_eq!(std::fs::read_to_string(first).unwrap(), "old");
        assert_eq!(
            free_export_path(dir.path(), &noon(), 3).unwrap().file_name().unwrap(),
            "inventory_31122024_12h30m_3.csv"
        );
    }
}
