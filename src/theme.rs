//! Centralized theme constants for Burnout Calculator
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x03, 0x07, 0x12); // slate-950
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x0f, 0x17, 0x2a); // slate-900
pub const BG_INPUT: Color32 = Color32::from_rgb(0x0a, 0x0a, 0x0c);
pub const BG_INPUT_INVALID: Color32 = Color32::from_rgb(0x2a, 0x0a, 0x0a); // red-950 @ 30%

// =============================================================================
// COLORS - Accent (Cyan)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x22, 0xd3, 0xee); // cyan-400
pub const ACCENT_DIM: Color32 = Color32::from_rgb(0x0e, 0x74, 0x90); // cyan-700
pub const ACCENT_TITLE: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf); // teal-400

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x9c, 0xa3, 0xaf); // gray-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x16, 0x3e, 0x4a); // cyan-500 @ 20%
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x1b, 0x52, 0x60); // cyan-500 @ 30%

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x34, 0xd3, 0x99); // emerald-400
pub const STATUS_WARNING: Color32 = Color32::from_rgb(0xfb, 0xbf, 0x24); // amber-400
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400
pub const ERROR_BORDER: Color32 = Color32::from_rgb(0xdc, 0x26, 0x26); // red-600
pub const ERROR_FILL: Color32 = Color32::from_rgb(0x2b, 0x0c, 0x0c); // red-950 @ 80%
pub const ERROR_TEXT: Color32 = Color32::from_rgb(0xfe, 0xca, 0xca); // red-200

// =============================================================================
// COLORS - Result cards
// =============================================================================
pub const RESULT_LOW_TEXT: Color32 = Color32::from_rgb(0x16, 0x65, 0x34); // green-800
pub const RESULT_LOW_FILL: Color32 = Color32::from_rgb(0xdc, 0xfc, 0xe7); // green-100
pub const RESULT_LOW_BORDER: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e); // green-500
pub const RESULT_MODERATE_TEXT: Color32 = Color32::from_rgb(0x85, 0x4d, 0x0e); // yellow-800
pub const RESULT_MODERATE_FILL: Color32 = Color32::from_rgb(0xfe, 0xf9, 0xc3); // yellow-100
pub const RESULT_MODERATE_BORDER: Color32 = Color32::from_rgb(0xea, 0xb3, 0x08); // yellow-500
pub const RESULT_HIGH_TEXT: Color32 = Color32::from_rgb(0x99, 0x1b, 0x1b); // red-800
pub const RESULT_HIGH_FILL: Color32 = Color32::from_rgb(0xfe, 0xe2, 0xe2); // red-100
pub const RESULT_HIGH_BORDER: Color32 = Color32::from_rgb(0xef, 0x44, 0x44); // red-500

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_ACCENT: Color32 = Color32::from_rgb(0x08, 0x91, 0xb2); // cyan-600
pub const BTN_DISABLED: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800

// =============================================================================
// COLORS - Section headings
// =============================================================================
pub fn category_color(category: crate::fields::Category) -> Color32 {
    use crate::fields::Category;
    match category {
        Category::Psychological => Color32::from_rgb(0x06, 0xb6, 0xd4), // cyan-500
        Category::Physical => Color32::from_rgb(0x3b, 0x82, 0xf6),      // blue-500
        Category::Academic => Color32::from_rgb(0x63, 0x66, 0xf1),      // indigo-500
        Category::SocialEnv => Color32::from_rgb(0xa8, 0x55, 0xf7),     // purple-500
        Category::Environmental => ACCENT,
    }
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_HERO: f32 = 40.0;
pub const FONT_TITLE: f32 = 22.0;
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 12.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const BUTTON_HEIGHT_LARGE: f32 = 48.0;
pub const CONTENT_MAX_WIDTH: f32 = 1100.0;
pub const FOOTER_HEIGHT: f32 = 28.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_MEDIUM: f32 = 8.0;
pub const RADIUS_LARGE: f32 = 16.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;
pub const STROKE_THICK: f32 = 2.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_ELEVATED,
        extreme_bg_color: BG_INPUT,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: ACCENT_DIM,
            stroke: egui::Stroke::new(STROKE_DEFAULT, ACCENT),
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
        window_corner_radius: egui::CornerRadius::same(8),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(16.0, 8.0);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================

/// Panel holding one questionnaire category
pub fn section_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ELEVATED)
        .stroke(egui::Stroke::new(STROKE_MEDIUM, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
}

/// Border around a numeric input, red when the value is out of range
pub fn input_frame(invalid: bool) -> egui::Frame {
    let (fill, stroke) = if invalid {
        (BG_INPUT_INVALID, egui::Stroke::new(STROKE_THICK, ERROR_BORDER))
    } else {
        (BG_INPUT, egui::Stroke::new(STROKE_THICK, BORDER_DEFAULT))
    };
    egui::Frame::new()
        .fill(fill)
        .stroke(stroke)
        .corner_radius(RADIUS_MEDIUM)
        .inner_margin(egui::Margin::symmetric(10, 8))
}

/// Validation error panel
pub fn error_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(ERROR_FILL)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, ERROR_BORDER))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
}

pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(Color32::from_rgb(0x12, 0x12, 0x14))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_MEDIUM)
        .inner_margin(SPACING_XL)
}

// =============================================================================
// HELPER - Buttons
// =============================================================================

/// Primary action button; greyed out while `enabled` is false
pub fn button_accent(text: impl Into<String>, enabled: bool) -> egui::Button<'static> {
    let (fill, color) = if enabled {
        (BTN_ACCENT, TEXT_PRIMARY)
    } else {
        (BTN_DISABLED, TEXT_DIM)
    };
    egui::Button::new(egui::RichText::new(text.into()).size(FONT_HEADING).strong().color(color))
        .fill(fill)
        .stroke(egui::Stroke::new(STROKE_THICK, ACCENT_DIM))
        .corner_radius(RADIUS_LARGE)
}
