//! Modal dialogs (request failure notice)

use super::App;
use crate::theme;
use eframe::egui;

impl App {
    /// Blocking notice for a failed prediction request. Stays up until dismissed.
    pub(crate) fn render_fault_modal(&mut self, ctx: &egui::Context, fault: Option<&str>) {
        let Some(message) = fault else {
            return;
        };

        let modal = egui::Modal::new(egui::Id::new("fault_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame());
        let mut dismissed = false;
        let modal_response = modal.show(ctx, |ui| {
            ui.set_min_width(340.0);
            ui.set_max_width(340.0);
            ui.vertical_centered(|ui| {
                ui.add_space(theme::SPACING_MD);
                ui.label(
                    egui::RichText::new(egui_phosphor::regular::WARNING_OCTAGON)
                        .size(36.0)
                        .color(theme::STATUS_ERROR),
                );
                ui.add_space(theme::SPACING_MD);
                ui.label(egui::RichText::new(message).size(theme::FONT_HEADING).strong());
                ui.add_space(theme::SPACING_XL);
                let ok = ui.add(theme::button_accent(format!("{}  OK", egui_phosphor::regular::CHECK), true));
                if ok.clicked() {
                    dismissed = true;
                }
            });
        });

        if dismissed || modal_response.should_close() {
            self.submission.dismiss_fault();
        }
    }
}
