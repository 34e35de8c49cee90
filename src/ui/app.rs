use eframe::{self, egui};
use egui::ViewportBuilder;

use super::{screens::ScannerScreen, state::ScannerState};
use crate::session::InventorySession;

pub struct InventoryApp {
    session: InventorySession,
    scanner_state: ScannerState,
}

impl InventoryApp {
    pub fn new(session: InventorySession) -> Self {
        Self {
            session,
            scanner_state: ScannerState {
                focus_barcode: true,
                ..Default::default()
            },
        }
    }
}

impl eframe::App for InventoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ScannerScreen::show(ctx, &mut self.session, &mut self.scanner_state);
    }
}

pub fn launch_gui(session: InventorySession) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Inventory Management")
            .with_inner_size([560.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Inventory Management",
        options,
        Box::new(|_cc| Ok(Box::new(InventoryApp::new(session)))),
    )
}
