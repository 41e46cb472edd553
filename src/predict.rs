//! HTTP client for the prediction service

use crate::constants::PREDICT_PATH;
use crate::types::*;
use crate::validation::FeatureVector;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Prediction service returned {status}: {message}")]
    Rejected {
        status: reqwest::StatusCode,
        message: String,
    },
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct PredictClient {
    http: reqwest::Client,
    endpoint: String,
}

impl PredictClient {
    /// `timeout` of `None` waits for the service indefinitely.
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self, PredictError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(PredictError::Client)?;
        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn predict_url(&self) -> String {
        format!("{}{}", self.endpoint, PREDICT_PATH)
    }

    /// Send one feature vector. `Ok(None)` means the service answered with
    /// something other than a known stress level.
    pub async fn predict(&self, features: &FeatureVector) -> Result<Option<StressLevel>, PredictError> {
        let url = self.predict_url();
        debug!(url = %url, count = features.len(), "Sending prediction request");

        let response = self
            .http
            .post(&url)
            .json(&PredictRequest { features })
            .send()
            .await
            .map_err(|source| PredictError::Transport { url: url.clone(), source })?;

        let body = read_body(response, &url).await?;
        let parsed: PredictResponse = serde_json::from_slice(&body)?;
        let level = parsed.level();
        if level.is_none() {
            debug!(raw = ?parsed.stress_level, "Response carried no recognizable stress level");
        }
        Ok(level)
    }

    /// `GET /` on the backend
    pub async fn health(&self) -> Result<HealthReport, PredictError> {
        let url = format!("{}/", self.endpoint);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| PredictError::Transport { url: url.clone(), source })?;
        let body = read_body(response, &url).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Read a response body, turning non-2xx statuses into `Rejected`.
async fn read_body(response: reqwest::Response, url: &str) -> Result<Vec<u8>, PredictError> {
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|source| PredictError::Transport { url: url.to_string(), source })?;

    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorResponse>(&body)
            .map(|e| e.error)
            .unwrap_or_else(|_| String::from_utf8_lossy(&body).trim().to_string());
        return Err(PredictError::Rejected { status, message });
    }
    Ok(body.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Field;
    use crate::form::{FieldInput, FormState};
    use crate::validation::check;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn default_features() -> FeatureVector {
        check(&FormState::default()).unwrap()
    }

    #[tokio::test]
    async fn posts_features_in_fixed_order() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/predict")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "features": [10, 15, 0, 10, 2, 2, 3, 2, 2, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 2]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"stress_level": 1}).to_string())
            .create_async()
            .await;

        let client = PredictClient::new(&server.url(), None).unwrap();
        let level = client.predict(&default_features()).await.unwrap();

        assert_eq!(level, Some(StressLevel::Moderate));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn trailing_slash_in_endpoint_is_ignored() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/predict")
            .with_status(200)
            .with_body(r#"{"stress_level": 0}"#)
            .create_async()
            .await;

        let client = PredictClient::new(&format!("{}/", server.url()), None).unwrap();
        assert_eq!(client.predict_url(), format!("{}/predict", server.url()));
        assert_eq!(client.predict(&default_features()).await.unwrap(), Some(StressLevel::Low));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn edited_values_are_sent() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/predict")
            .match_body(Matcher::PartialJson(json!({
                "features": [21, 30, 1, 27, 5, 3, 0, 5, 5, 0, 0, 0, 0, 5, 0, 5, 0, 5, 0, 5]
            })))
            .with_status(200)
            .with_body(r#"{"stress_level": 2}"#)
            .create_async()
            .await;

        let mut form = FormState::default();
        let highs = [
            (Field::AnxietyLevel, 21.0),
            (Field::SelfEsteem, 30.0),
            (Field::MentalHealthHistory, 1.0),
            (Field::Depression, 27.0),
            (Field::Headache, 5.0),
            (Field::BloodPressure, 3.0),
            (Field::SleepQuality, 0.0),
            (Field::BreathingProblem, 5.0),
            (Field::NoiseLevel, 5.0),
            (Field::LivingConditions, 0.0),
            (Field::Safety, 0.0),
            (Field::BasicNeeds, 0.0),
            (Field::AcademicPerformance, 0.0),
            (Field::StudyLoad, 5.0),
            (Field::TeacherStudentRelationship, 0.0),
            (Field::FutureCareerConcerns, 5.0),
            (Field::SocialSupport, 0.0),
            (Field::PeerPressure, 5.0),
            (Field::ExtracurricularActivities, 0.0),
            (Field::Bullying, 5.0),
        ];
        for (field, value) in highs.iter().rev() {
            form.set(*field, FieldInput::Value(*value));
        }

        let client = PredictClient::new(&server.url(), None).unwrap();
        let level = client.predict(&check(&form).unwrap()).await.unwrap();
        assert_eq!(level, Some(StressLevel::High));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn unknown_level_is_not_an_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/predict")
            .with_status(200)
            .with_body(r#"{"stress_level": 7}"#)
            .create_async()
            .await;

        let client = PredictClient::new(&server.url(), None).unwrap();
        assert_eq!(client.predict(&default_features()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn backend_error_body_is_kept() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/predict")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "X has 19 features"}"#)
            .create_async()
            .await;

        let client = PredictClient::new(&server.url(), None).unwrap();
        let err = client.predict(&default_features()).await.unwrap_err();
        match err {
            PredictError::Rejected { status, message } => {
                assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
                assert_eq!(message, "X has 19 features");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_json_is_a_decode_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/predict")
            .with_status(200)
            .with_body("<html>502 Bad Gateway</html>")
            .create_async()
            .await;

        let client = PredictClient::new(&server.url(), None).unwrap();
        let err = client.predict(&default_features()).await.unwrap_err();
        assert!(matches!(err, PredictError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_service_is_a_transport_error() {
        // Bind then drop to get a port nothing listens on
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let client = PredictClient::new(&format!("http://127.0.0.1:{port}"), None).unwrap();
        let err = client.predict(&default_features()).await.unwrap_err();
        assert!(matches!(err, PredictError::Transport { .. }));
    }

    #[tokio::test]
    async fn health_check_reads_status() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_body(r#"{"status": "ok", "message": "Backend is running"}"#)
            .create_async()
            .await;

        let client = PredictClient::new(&server.url(), None).unwrap();
        let report = client.health().await.unwrap();
        assert_eq!(report.status, "ok");
        assert_eq!(report.message, "Backend is running");
    }
}
