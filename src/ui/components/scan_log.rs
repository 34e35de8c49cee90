use eframe::egui;
use std::collections::VecDeque;

/// Scrollable list of scan log lines, drawn in the order given (newest first)
pub struct ScanLog<'a> {
    pub lines: &'a VecDeque<String>,
    pub max_height: f32,
}

impl<'a> ScanLog<'a> {
    pub fn new(lines: &'a VecDeque<String>) -> Self {
        Self {
            lines,
            max_height: f32::INFINITY,
        }
    }

    pub fn with_max_height(mut self, max_height: f32) -> Self {
        self.max_height = max_height;
        self
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            if self.lines.is_empty() {
                ui.weak("No products scanned yet.");
                return;
            }

            let row_height = ui.text_style_height(&egui::TextStyle::Monospace);
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .max_height(self.max_height)
                .show_rows(ui, row_height, self.lines.len(), |ui, range| {
                    for line in self.lines.range(range) {
                        ui.add(egui::Label::new(egui::RichText::new(line).monospace()).truncate());
                    }
                });
        });
    }
}
