use crate::{
    session::InventorySession,
    ui::{
        components::{ScanLog, WarningWindow},
        state::ScannerState,
    },
};
use eframe::egui;

const LABEL_WIDTH: f32 = 90.0;

pub struct ScannerScreen;

impl ScannerScreen {
    pub fn show(ctx: &egui::Context, session: &mut InventorySession, state: &mut ScannerState) {
        let modal_open = state.warning.is_some();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(state.status.as_str());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(format!("Catalog: {} products", session.catalog().len()));
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!modal_open, |ui| {
                ui.heading("Inventory Management");
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    ui.add_sized([LABEL_WIDTH, 20.0], egui::Label::new("Warehouse:"));
                    ui.add(egui::TextEdit::singleline(&mut state.warehouse).desired_width(40.0));
                });

                ui.horizontal(|ui| {
                    ui.add_sized([LABEL_WIDTH, 20.0], egui::Label::new("Barcode:"));
                    let response =
                        ui.add(egui::TextEdit::singleline(&mut state.barcode).desired_width(160.0));

                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        state.submit_scan(session);
                    }
                    if state.focus_barcode && state.warning.is_none() {
                        response.request_focus();
                        state.focus_barcode = false;
                    }
                });

                ui.add_space(10.0);
                ScanLog::new(session.log())
                    .with_max_height((ui.available_height() - 50.0).max(60.0))
                    .show(ui);
                ui.add_space(10.0);

                if ui.button("Export Inventory (CSV)").clicked() {
                    state.submit_export(session);
                }
            });
        });

        if let Some(warning) = &state.warning {
            if WarningWindow::new(warning).show(ctx) {
                state.dismiss_warning();
            }
        }
    }
}
