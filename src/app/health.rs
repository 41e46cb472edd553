//! Backend health check

use super::App;
use crate::types::HealthStatus;
use eframe::egui;
use tracing::{debug, info, warn};

const HEALTH_KEY: &str = "backend_health";

impl App {
    pub fn start_health_check(&mut self, ctx: &egui::Context) {
        if self.health_check_started {
            return;
        }
        self.health_check_started = true;

        if !self.settings.check_health_on_start {
            debug!("Health check disabled");
            return;
        }

        self.health = HealthStatus::Checking;
        let client = self.submission.client().clone();
        let ctx = ctx.clone();

        info!(endpoint = %client.endpoint(), "Starting health check");
        self.runtime.spawn(async move {
            let status = match client.health().await {
                Ok(report) if report.status == "ok" => {
                    info!(message = %report.message, "Backend is online");
                    HealthStatus::Online(report.message)
                }
                Ok(report) => {
                    warn!(status = %report.status, "Backend reported unexpected status");
                    HealthStatus::Offline(report.status)
                }
                Err(e) => {
                    warn!(error = %e, "Backend health check failed");
                    HealthStatus::Offline(e.to_string())
                }
            };
            ctx.memory_mut(|mem| mem.data.insert_temp(HEALTH_KEY.into(), status));
            ctx.request_repaint();
        });
    }

    pub fn poll_health_result(&mut self, ctx: &egui::Context) {
        if let Some(status) = ctx.memory(|mem| mem.data.get_temp::<HealthStatus>(HEALTH_KEY.into())) {
            ctx.memory_mut(|mem| mem.data.remove::<HealthStatus>(HEALTH_KEY.into()));
            self.health = status;
        }
    }
}
