//! App module - contains the main application state and logic

mod form_view;
mod health;
mod modals;

use crate::fields::{Field, FIELD_COUNT};
use crate::form::{format_input, FormState};
use crate::predict::{PredictClient, PredictError};
use crate::settings::Settings;
use crate::submission::{SubmitOutcome, Submission};
use crate::theme;
use crate::types::HealthStatus;
use eframe::egui;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error(transparent)]
    Client(#[from] PredictError),
}

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) form: FormState,
    // Raw text per input, indexed by `Field`; parsed into `form` on every edit
    pub(crate) inputs: [String; FIELD_COUNT],
    pub(crate) submission: Submission,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) settings: Settings,
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    // Backend health
    pub(crate) health: HealthStatus,
    pub(crate) health_check_started: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Result<Self, AppError> {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let client = PredictClient::new(&settings.endpoint, settings.request_timeout())?;
        info!(
            endpoint = %client.endpoint(),
            timeout_secs = ?settings.request_timeout_secs,
            "Prediction client ready"
        );

        let form = FormState::default();
        let inputs = Field::ALL.map(|f| format_input(form.get(f)));

        Ok(Self {
            form,
            inputs,
            submission: Submission::new(client),
            runtime: tokio::runtime::Runtime::new()?,
            settings,
            logo_texture: None,
            health: HealthStatus::Unknown,
            health_check_started: false,
            data_dir,
        })
    }

    /// Apply the text typed into one input to the form state
    pub fn update_field(&mut self, field: Field) {
        self.form.set_from_text(field, &self.inputs[field.index()]);
    }

    pub fn submit(&mut self, ctx: &egui::Context) {
        let outcome = self.submission.submit(&self.form, ctx, &self.runtime);
        debug!(outcome = ?outcome, "Submit requested");
        if outcome == SubmitOutcome::Dispatched {
            ctx.request_repaint();
        }
    }

    pub fn open_logs_dir(&self) {
        let logs = self.data_dir.join("logs");
        if let Err(e) = open::that(&logs) {
            tracing::warn!(error = %e, path = %logs.display(), "Failed to open logs folder");
        }
    }
}

// ============================================================================
// MAIN UPDATE LOOP
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Health check runs once, on the first frame
        self.start_health_check(ctx);
        self.poll_health_result(ctx);

        let snapshot = self.submission.snapshot();

        self.render_fault_modal(ctx, snapshot.fault.as_deref());

        egui::TopBottomPanel::bottom("footer")
            .exact_height(theme::FOOTER_HEIGHT)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_ELEVATED)
                    .inner_margin(egui::Margin::symmetric(12, 0)),
            )
            .show(ctx, |ui| self.render_footer(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::BG_BASE))
            .show(ctx, |ui| self.render_main(ui, ctx, &snapshot));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
    }
}
