//! Application constants and configuration

pub const APP_NAME: &str = "Burnout Calculator";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hosted prediction service
pub const HOSTED_ENDPOINT: &str = "https://student-burnout-decide-1.onrender.com";
/// Flask development server
pub const LOCAL_ENDPOINT: &str = "http://localhost:5000";

/// Overrides the configured endpoint when set
pub const ENDPOINT_ENV: &str = "BURNOUT_ENDPOINT";

pub const PREDICT_PATH: &str = "/predict";

/// Shown for every transport, status, or decode failure
pub const FAULT_MESSAGE: &str = "Error: Is the prediction backend running?";
