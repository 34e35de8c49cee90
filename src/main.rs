use clap::Parser;
use inventory_scanner::{Config, InventorySession};
use std::path::PathBuf;

/// Barcode inventory scanner - counts scans per barcode and exports CSV snapshots
#[derive(Parser, Debug)]
#[command(name = "inventory_scanner")]
#[command(version, about, long_about = None)]
struct Args {
    /// Product catalog CSV (columns: Barcode, Product Name, Cost)
    #[arg(short, long, default_value = inventory_scanner::config::DEFAULT_CATALOG_FILE)]
    catalog: PathBuf,

    /// Directory export files are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Only use the catalog loaded at startup, never re-read the file for unknown barcodes
    #[arg(long, default_value_t = false)]
    no_disk_fallback: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config::default()
            .with_catalog_path(args.catalog)
            .with_output_dir(args.output_dir)
            .with_disk_fallback(!args.no_disk_fallback)
    }
}

fn fatal_dialog(title: &str, message: &str) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Warning)
        .set_title(title)
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=inventory_scanner=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from(Args::parse());
    log::info!("Starting Inventory Scanner");
    log::info!("Catalog: {}", config.catalog_path.display());
    log::info!("Export directory: {}", config.output_dir.display());

    let session = match InventorySession::open(config) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Failed to load catalog: {e}");
            fatal_dialog(e.title(), &e.to_string());
            std::process::exit(1);
        }
    };

    if let Err(e) = inventory_scanner::ui::launch_gui(session) {
        log::error!("Application error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
