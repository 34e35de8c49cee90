use chrono::{NaiveDate, NaiveDateTime};
use inventory_scanner::{
    Catalog, Config, ExportCommand, InventoryError, InventorySession, ScanCommand, ScanOutcome,
    WarehouseAction, UNKNOWN_PRODUCT,
};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

// Test fixtures

fn create_catalog_file() -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(
        temp_file,
        "Barcode,Product Name,Cost\n123,Widget,1.00\n,Blank,0.00\n456,Gizmo,2.00\n"
    )
    .unwrap();
    temp_file
}

fn open_session(catalog: &NamedTempFile, output_dir: &TempDir) -> InventorySession {
    let config = Config::default()
        .with_catalog_path(catalog.path())
        .with_output_dir(output_dir.path());
    InventorySession::open(config).unwrap()
}

fn export_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(8, 5, 0)
        .unwrap()
}

fn files_in(dir: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

// Scanning

#[test]
fn test_open_missing_catalog_is_fatal() {
    let config = Config::default().with_catalog_path("/this/file/does/not/exist.csv");
    let result = InventorySession::open(config);
    assert!(matches!(result, Err(InventoryError::CatalogMissing(_))));
}

#[test]
fn test_scan_same_barcode_twice() {
    let catalog = create_catalog_file();
    let out = TempDir::new().unwrap();
    let mut session = open_session(&catalog, &out);

    session.scan(&ScanCommand::new("A", "123")).unwrap();
    session.scan(&ScanCommand::new("A", "123")).unwrap();

    assert_eq!(session.count("123"), 2);
    assert_eq!(session.log().len(), 2);
    assert_eq!(
        session.log()[0],
        "Widget - Barcode: 123 - Quantity: 2 - Warehouse: A"
    );
    assert_eq!(
        session.log()[1],
        "Widget - Barcode: 123 - Quantity: 1 - Warehouse: A"
    );
}

#[test]
fn test_scan_without_warehouse_never_counts() {
    let catalog = create_catalog_file();
    let out = TempDir::new().unwrap();
    let mut session = open_session(&catalog, &out);

    for _ in 0..3 {
        let err = session.scan(&ScanCommand::new("", "123")).unwrap_err();
        assert!(matches!(
            err,
            InventoryError::WarehouseMissing(WarehouseAction::Scan)
        ));
    }

    assert_eq!(session.count("123"), 0);
    assert_eq!(session.total_scans(), 0);
    assert!(session.log().is_empty());
}

#[test]
fn test_scan_unknown_barcode() {
    let catalog = create_catalog_file();
    let out = TempDir::new().unwrap();
    let mut session = open_session(&catalog, &out);

    let outcome = session.scan(&ScanCommand::new("A", "999")).unwrap();

    let ScanOutcome::Recorded(record) = outcome else {
        panic!("expected a recorded scan");
    };
    assert_eq!(record.product_name, UNKNOWN_PRODUCT);
    assert_eq!(record.quantity, 1);
    assert_eq!(session.count("999"), 1);
}

#[test]
fn test_scan_empty_barcode_is_noop() {
    let catalog = create_catalog_file();
    let out = TempDir::new().unwrap();
    let mut session = open_session(&catalog, &out);

    assert_eq!(
        session.scan(&ScanCommand::new("A", "")).unwrap(),
        ScanOutcome::Ignored
    );
    assert!(session.log().is_empty());
}

#[test]
fn test_scan_falls_back_to_catalog_file() {
    let mut catalog = create_catalog_file();
    let out = TempDir::new().unwrap();
    let mut session = open_session(&catalog, &out);

    writeln!(catalog, "777,Added Later,9.99").unwrap();
    catalog.flush().unwrap();

    session.scan(&ScanCommand::new("A", "777")).unwrap();

    assert_eq!(
        session.log()[0],
        "Added Later - Barcode: 777 - Quantity: 1 - Warehouse: A"
    );

    let summary = session
        .export_at(&ExportCommand::new("A"), &export_time())
        .unwrap();
    let content = std::fs::read_to_string(&summary.path).unwrap();
    assert_eq!(
        content,
        "Warehouse,Barcode,Product Name,Quantity\nA,777,Added Later,1\n"
    );
    // The fallback hit is not added to the loaded catalog
    assert_eq!(session.catalog().len(), 2);
}

#[test]
fn test_scan_without_disk_fallback() {
    let mut catalog = create_catalog_file();
    let out = TempDir::new().unwrap();
    let config = Config::default()
        .with_catalog_path(catalog.path())
        .with_output_dir(out.path())
        .with_disk_fallback(false);
    let mut session = InventorySession::open(config).unwrap();

    writeln!(catalog, "777,Added Later,9.99").unwrap();
    catalog.flush().unwrap();

    session.scan(&ScanCommand::new("A", "777")).unwrap();

    assert!(session.log()[0].starts_with("Unknown Product - Barcode: 777"));
}

#[test]
fn test_scan_fallback_result_is_remembered() {
    let catalog = create_catalog_file();
    let out = TempDir::new().unwrap();
    let mut session = open_session(&catalog, &out);

    session.scan(&ScanCommand::new("A", "999")).unwrap();
    // The file is rewritten with a name for 999, the earlier miss stays cached
    std::fs::write(catalog.path(), "Barcode,Product Name\n999,Now Known\n").unwrap();
    session.scan(&ScanCommand::new("A", "999")).unwrap();

    assert!(session.log()[0].starts_with("Unknown Product - Barcode: 999 - Quantity: 2"));
}

// Exporting

#[test]
fn test_export_single_row() {
    let catalog = create_catalog_file();
    let out = TempDir::new().unwrap();
    let mut session = open_session(&catalog, &out);
    session.scan(&ScanCommand::new("A", "123")).unwrap();
    session.scan(&ScanCommand::new("A", "123")).unwrap();

    let summary = session
        .export_at(&ExportCommand::new("A"), &export_time())
        .unwrap();

    assert_eq!(summary.rows, 1);
    assert_eq!(summary.file_name(), "inventory_01062025_08h05m.csv");
    let content = std::fs::read_to_string(&summary.path).unwrap();
    assert_eq!(content, "Warehouse,Barcode,Product Name,Quantity\nA,123,Widget,2\n");
}

#[test]
fn test_export_without_warehouse_writes_nothing() {
    let catalog = create_catalog_file();
    let out = TempDir::new().unwrap();
    let mut session = open_session(&catalog, &out);
    session.scan(&ScanCommand::new("A", "123")).unwrap();

    let err = session
        .export_at(&ExportCommand::new("  "), &export_time())
        .unwrap_err();

    assert!(matches!(
        err,
        InventoryError::WarehouseMissing(WarehouseAction::Export)
    ));
    assert!(files_in(&out).is_empty());
}

#[test]
fn test_export_keeps_counts_and_uses_current_warehouse() {
    let catalog = create_catalog_file();
    let out = TempDir::new().unwrap();
    let mut session = open_session(&catalog, &out);
    session.scan(&ScanCommand::new("A", "123")).unwrap();
    session.scan(&ScanCommand::new("A", "456")).unwrap();

    session
        .export_at(&ExportCommand::new("A"), &export_time())
        .unwrap();
    session.scan(&ScanCommand::new("A", "456")).unwrap();
    let second = session
        .export_at(&ExportCommand::new("B"), &export_time())
        .unwrap();

    assert_eq!(
        files_in(&out),
        vec![
            "inventory_01062025_08h05m.csv".to_string(),
            "inventory_01062025_08h05m_2.csv".to_string(),
        ]
    );
    let content = std::fs::read_to_string(&second.path).unwrap();
    assert_eq!(
        content,
        "Warehouse,Barcode,Product Name,Quantity\nB,123,Widget,1\nB,456,Gizmo,2\n"
    );
}

#[test]
fn test_export_empty_session_writes_header() {
    let catalog = create_catalog_file();
    let out = TempDir::new().unwrap();
    let session = open_session(&catalog, &out);

    let summary = session
        .export_at(&ExportCommand::new("A"), &export_time())
        .unwrap();

    assert_eq!(summary.rows, 0);
    assert_eq!(
        std::fs::read_to_string(&summary.path).unwrap(),
        "Warehouse,Barcode,Product Name,Quantity\n"
    );
}

#[test]
fn test_export_uses_wall_clock_name() {
    let catalog = create_catalog_file();
    let out = TempDir::new().unwrap();
    let session = open_session(&catalog, &out);

    let summary = session.export(&ExportCommand::new("A")).unwrap();
    let name = summary.file_name();

    assert!(name.starts_with("inventory_"));
    assert!(name.ends_with("m.csv"));
    // inventory_DDMMYYYY_HHhMMm.csv
    assert_eq!(name.len(), "inventory_01062025_08h05m.csv".len());
}
