//! Questionnaire view: header, error panel, category sections, submit button, result

use super::App;
use crate::fields::{Category, Field};
use crate::presenter::present;
use crate::submission::SubmissionState;
use crate::theme;
use crate::types::HealthStatus;
use crate::ui::components::{error_panel, field_input, result_card, section_header};
use eframe::egui;

impl App {
    pub(crate) fn render_main(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, snapshot: &SubmissionState) {
        let mut scroll = egui::ScrollArea::vertical()
            .id_salt("main_scroll")
            .auto_shrink([false, false]);
        if self.submission.take_scroll_request() {
            scroll = scroll.vertical_scroll_offset(0.0);
        }

        scroll.show(ui, |ui| {
            // Center a fixed-width column
            let width = ui.available_width().min(theme::CONTENT_MAX_WIDTH);
            let margin = ((ui.available_width() - width) / 2.0).max(0.0);
            ui.horizontal(|ui| {
                ui.add_space(margin);
                ui.vertical(|ui| {
                    ui.set_width(width);
                    ui.add_space(theme::SPACING_XL);
                    self.render_header(ui, ctx);
                    ui.add_space(theme::SPACING_XL);

                    if !snapshot.violations.is_empty() {
                        error_panel(ui, &snapshot.violations);
                        ui.add_space(theme::SPACING_XL);
                    }

                    self.render_sections(ui);
                    ui.add_space(theme::SPACING_XL);
                    self.render_submit(ui, ctx, snapshot);

                    if let Some(style) = present(snapshot.prediction) {
                        ui.add_space(theme::SPACING_XL);
                        result_card(ui, &style, snapshot.completed_at);
                    }
                    ui.add_space(theme::SPACING_XL);
                });
            });
        });
    }

    fn render_header(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        if self.logo_texture.is_none() {
            if let Some((pixels, w, h)) = crate::utils::rasterize_icon(128) {
                self.logo_texture = Some(ctx.load_texture(
                    "logo",
                    egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels),
                    egui::TextureOptions::LINEAR,
                ));
            }
        }

        ui.vertical_centered(|ui| {
            if let Some(texture) = &self.logo_texture {
                ui.image(egui::load::SizedTexture::new(texture.id(), egui::vec2(56.0, 56.0)));
                ui.add_space(theme::SPACING_SM);
            }
            ui.label(
                egui::RichText::new("BURNOUT CALCULATOR")
                    .size(theme::FONT_HERO)
                    .strong()
                    .color(theme::ACCENT_TITLE),
            );
        });
    }

    fn render_sections(&mut self, ui: &mut egui::Ui) {
        ui.columns(Category::GRID.len(), |columns| {
            for (column, category) in columns.iter_mut().zip(Category::GRID) {
                theme::section_frame().show(column, |ui| {
                    ui.set_width(ui.available_width());
                    section_header(ui, category);
                    for &field in category.fields() {
                        self.render_field(ui, field);
                    }
                });
            }
        });

        ui.add_space(theme::SPACING_XL);

        let environmental = Category::Environmental;
        theme::section_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            section_header(ui, environmental);
            let fields = environmental.fields();
            ui.columns(fields.len(), |columns| {
                for (column, &field) in columns.iter_mut().zip(fields) {
                    self.render_field(column, field);
                }
            });
        });
    }

    fn render_field(&mut self, ui: &mut egui::Ui, field: Field) {
        let invalid = self.form.is_out_of_range(field);
        if field_input(ui, field, &mut self.inputs[field.index()], invalid) {
            self.update_field(field);
        }
    }

    fn render_submit(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, snapshot: &SubmissionState) {
        let busy = snapshot.is_busy();
        let label = if busy {
            format!("{}  ANALYZING...", egui_phosphor::regular::HOURGLASS_MEDIUM)
        } else {
            format!("{}  START SCAN", egui_phosphor::regular::ROCKET_LAUNCH)
        };

        let mut clicked = false;
        ui.vertical_centered(|ui| {
            let button = theme::button_accent(label, !busy)
                .min_size(egui::vec2(260.0, theme::BUTTON_HEIGHT_LARGE));
            clicked = ui.add_enabled(!busy, button).clicked();
            if busy {
                ui.add_space(theme::SPACING_SM);
                ui.spinner();
            }
        });

        // Enter submits, like a browser form; not while a modal is up
        let enter = snapshot.fault.is_none() && ctx.input(|i| i.key_pressed(egui::Key::Enter));
        if !busy && (clicked || enter) {
            self.submit(ctx);
        }
    }

    pub(crate) fn render_footer(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_centered(|ui| {
            let (dot_color, status) = match &self.health {
                HealthStatus::Unknown => (theme::TEXT_DIM, "Backend not checked".to_string()),
                HealthStatus::Checking => (theme::STATUS_WARNING, "Checking backend...".to_string()),
                HealthStatus::Online(msg) if msg.is_empty() => (theme::STATUS_SUCCESS, "Online".to_string()),
                HealthStatus::Online(msg) => (theme::STATUS_SUCCESS, format!("Online: {}", msg)),
                HealthStatus::Offline(_) => (theme::STATUS_ERROR, "Offline".to_string()),
            };
            ui.label(egui::RichText::new(egui_phosphor::regular::CIRCLE).color(dot_color));
            let status_label = ui.label(
                egui::RichText::new(status)
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_MUTED),
            );
            if let HealthStatus::Offline(reason) = &self.health {
                status_label.on_hover_text(reason);
            }
            ui.label(
                egui::RichText::new(self.submission.client().endpoint())
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_DIM),
            )
            .on_hover_text(format!(
                "Set {} or \"endpoint\" in settings.json to change, e.g. {}",
                crate::constants::ENDPOINT_ENV,
                crate::constants::LOCAL_ENDPOINT
            ));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!("v{}", crate::constants::APP_VERSION))
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                );
                let logs = ui.add(
                    egui::Label::new(
                        egui::RichText::new(format!("{}  Logs", egui_phosphor::regular::FOLDER_OPEN))
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_MUTED),
                    )
                    .sense(egui::Sense::click()),
                );
                if logs.clicked() {
                    self.open_logs_dir();
                }
            });
        });
    }
}
