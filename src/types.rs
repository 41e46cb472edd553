//! Common types and data structures

use crate::validation::FeatureVector;
use serde::{Deserialize, Serialize};

/// Classification returned by the prediction service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StressLevel {
    Low,
    Moderate,
    High,
}

impl StressLevel {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(StressLevel::Low),
            1 => Some(StressLevel::Moderate),
            2 => Some(StressLevel::High),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            StressLevel::Low => 0,
            StressLevel::Moderate => 1,
            StressLevel::High => 2,
        }
    }
}

/// Body of `POST /predict`
#[derive(Serialize)]
pub struct PredictRequest<'a> {
    pub features: &'a FeatureVector,
}

/// Body returned by `POST /predict`. Only `stress_level` is read.
#[derive(Deserialize, Default)]
pub struct PredictResponse {
    #[serde(default)]
    pub stress_level: Option<serde_json::Value>,
}

impl PredictResponse {
    /// The level, if the service answered with one of the known codes
    pub fn level(&self) -> Option<StressLevel> {
        self.stress_level
            .as_ref()
            .and_then(serde_json::Value::as_i64)
            .and_then(StressLevel::from_code)
    }
}

/// Error body the backend sends with a 4xx/5xx
#[derive(Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body returned by `GET /`
#[derive(Deserialize, Debug, Clone)]
pub struct HealthReport {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

/// Backend reachability, as shown in the footer
#[derive(Debug, Clone, PartialEq)]
pub enum HealthStatus {
    Unknown,
    Checking,
    Online(String),
    Offline(String),
}
