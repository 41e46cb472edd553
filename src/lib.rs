//! Burnout Calculator
//!
//! Desktop questionnaire that validates twenty wellbeing answers against fixed
//! ranges and asks a remote classifier for a stress level.

pub mod app;
pub mod constants;
pub mod fields;
pub mod form;
pub mod predict;
pub mod presenter;
pub mod settings;
pub mod submission;
pub mod theme;
pub mod types;
pub mod ui;
pub mod utils;
pub mod validation;
