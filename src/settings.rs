//! User settings read from settings.json in the app data directory

use crate::constants::{ENDPOINT_ENV, HOSTED_ENDPOINT};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the prediction service
    pub endpoint: String,
    /// Unset means wait for the service indefinitely
    pub request_timeout_secs: Option<u64>,
    pub check_health_on_start: bool,

    // Window geometry
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: HOSTED_ENDPOINT.to_string(),
            request_timeout_secs: None,
            check_health_on_start: true,
            window_w: None,
            window_h: None,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    /// Load from disk, then let the environment override the endpoint.
    pub fn resolve(data_dir: &Path) -> Self {
        let mut settings = Self::load(data_dir);
        settings.apply_endpoint_override(std::env::var(ENDPOINT_ENV).ok());
        settings
    }

    fn apply_endpoint_override(&mut self, value: Option<String>) {
        if let Some(endpoint) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            info!(endpoint = %endpoint, "Endpoint overridden from environment");
            self.endpoint = endpoint;
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
