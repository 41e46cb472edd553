//! Maps a stress level to what the result card shows

use crate::theme;
use crate::types::StressLevel;
use egui::Color32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultStyle {
    pub level: StressLevel,
    pub text: Color32,
    pub fill: Color32,
    pub border: Color32,
    pub icon: &'static str,
    pub headline: &'static str,
    pub message: &'static str,
}

pub fn present(prediction: Option<StressLevel>) -> Option<ResultStyle> {
    let level = prediction?;
    let style = match level {
        StressLevel::Low => ResultStyle {
            level,
            text: theme::RESULT_LOW_TEXT,
            fill: theme::RESULT_LOW_FILL,
            border: theme::RESULT_LOW_BORDER,
            icon: egui_phosphor::regular::CHECK_CIRCLE,
            headline: "LOW STRESS",
            message: "Your results indicate a healthy stress-to-lifestyle balance. Keep it up!",
        },
        StressLevel::Moderate => ResultStyle {
            level,
            text: theme::RESULT_MODERATE_TEXT,
            fill: theme::RESULT_MODERATE_FILL,
            border: theme::RESULT_MODERATE_BORDER,
            icon: egui_phosphor::regular::WARNING,
            headline: "MODERATE STRESS",
            message: "You are showing signs of moderate stress. Consider taking a break.",
        },
        StressLevel::High => ResultStyle {
            level,
            text: theme::RESULT_HIGH_TEXT,
            fill: theme::RESULT_HIGH_FILL,
            border: theme::RESULT_HIGH_BORDER,
            icon: egui_phosphor::regular::SIREN,
            headline: "HIGH STRESS",
            message: "Warning: High burnout levels detected. Please prioritize rest.",
        },
    };
    Some(style)
}
