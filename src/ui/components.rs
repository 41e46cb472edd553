//! Reusable UI components
//!
//! Standalone widgets for the questionnaire: numeric inputs, section headers,
//! the validation error panel, and the result card.

use crate::fields::{Category, Field};
use crate::form::sanitize_numeric;
use crate::presenter::ResultStyle;
use crate::theme;
use crate::validation::Violation;
use eframe::egui;

/// Labelled numeric input. Returns true when the text changed.
pub fn field_input(ui: &mut egui::Ui, field: Field, text: &mut String, invalid: bool) -> bool {
    let label_color = if invalid { theme::STATUS_ERROR } else { theme::TEXT_MUTED };
    ui.add(
        egui::Label::new(
            egui::RichText::new(field.label().to_uppercase())
                .size(theme::FONT_LABEL)
                .strong()
                .color(label_color),
        )
        .selectable(false),
    );

    let mut changed = false;
    theme::input_frame(invalid).show(ui, |ui| {
        let response = ui.add(
            egui::TextEdit::singleline(text)
                .id(ui.make_persistent_id(field.name()))
                .frame(false)
                .font(egui::FontId::proportional(theme::FONT_HEADING))
                .text_color(theme::TEXT_PRIMARY)
                .desired_width(ui.available_width()),
        );
        if response.changed() {
            sanitize_numeric(text);
            changed = true;
        }
    });
    ui.add_space(theme::SPACING_SM);
    changed
}

/// Centered icon + title at the top of a section
pub fn section_header(ui: &mut egui::Ui, category: Category) {
    let color = theme::category_color(category);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(category.icon()).size(32.0).color(color));
        ui.label(
            egui::RichText::new(category.title())
                .size(theme::FONT_TITLE)
                .strong()
                .color(color),
        );
    });
    ui.add_space(theme::SPACING_MD);
}

pub fn error_panel(ui: &mut egui::Ui, violations: &[Violation]) {
    theme::error_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(egui_phosphor::regular::WARNING_CIRCLE)
                    .size(28.0)
                    .color(theme::ERROR_BORDER),
            );
            ui.label(
                egui::RichText::new("FIX THESE ERRORS!")
                    .size(theme::FONT_TITLE)
                    .strong()
                    .color(theme::STATUS_ERROR),
            );
        });
        ui.add_space(theme::SPACING_MD);
        for violation in violations {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(egui_phosphor::regular::CARET_RIGHT).color(theme::STATUS_ERROR),
                );
                ui.label(
                    egui::RichText::new(violation.to_string())
                        .strong()
                        .color(theme::ERROR_TEXT),
                );
            });
        }
    });
}

pub fn result_card(
    ui: &mut egui::Ui,
    style: &ResultStyle,
    completed_at: Option<chrono::DateTime<chrono::Local>>,
) {
    egui::Frame::new()
        .fill(style.fill)
        .stroke(egui::Stroke::new(theme::STROKE_THICK, style.border))
        .corner_radius(theme::RADIUS_LARGE)
        .inner_margin(egui::Margin::same(24))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(style.icon).size(56.0).color(style.text));
                ui.add_space(theme::SPACING_SM);
                ui.label(
                    egui::RichText::new(style.headline)
                        .size(32.0)
                        .strong()
                        .color(style.text),
                );
                ui.add_space(theme::SPACING_SM);
                ui.label(
                    egui::RichText::new(style.message)
                        .size(theme::FONT_BODY)
                        .strong()
                        .color(style.text),
                );
                ui.add_space(theme::SPACING_LG);
                ui.label(
                    egui::RichText::new(format!("STATUS LEVEL: {}", style.level.code()))
                        .size(theme::FONT_LABEL)
                        .strong()
                        .color(style.text),
                );
                if let Some(at) = completed_at {
                    ui.label(
                        egui::RichText::new(format!("Scanned at {}", at.format("%H:%M:%S")))
                            .size(theme::FONT_SMALL)
                            .color(style.text),
                    );
                }
            });
        });
}
