use crate::ui::state::Warning;
use eframe::egui;

/// Modal-style warning shown in the middle of the window until acknowledged
pub struct WarningWindow<'a> {
    pub warning: &'a Warning,
}

impl<'a> WarningWindow<'a> {
    pub fn new(warning: &'a Warning) -> Self {
        Self { warning }
    }

    /// Shows the window. Returns `true` once the operator acknowledged it.
    pub fn show(&self, ctx: &egui::Context) -> bool {
        let mut acknowledged = false;
        egui::Window::new(self.warning.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(self.warning.message.as_str());
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        acknowledged = true;
                    }
                });
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            acknowledged = true;
        }
        acknowledged
    }
}
