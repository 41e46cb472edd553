//! Submission workflow
//!
//! Validates the form, sends at most one prediction request at a time, and
//! records the outcome for the UI. The request runs on the app's tokio runtime
//! and reports back through shared state plus a repaint request.

use crate::constants::FAULT_MESSAGE;
use crate::form::FormState;
use crate::predict::PredictClient;
use crate::types::StressLevel;
use crate::validation::{check, Violation};
use eframe::egui;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Validating,
    Invalid,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmitPhase {
    pub fn can_transition_to(self, next: SubmitPhase) -> bool {
        use SubmitPhase::*;
        matches!(
            (self, next),
            (Idle, Validating)
                | (Validating, Invalid)
                | (Validating, Submitting)
                | (Invalid, Idle)
                | (Submitting, Succeeded)
                | (Submitting, Failed)
                | (Succeeded, Idle)
                | (Failed, Idle)
        )
    }
}

/// What a call to `submit` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A request is already in flight; nothing was sent
    Busy,
    /// Validation failed with this many violations; nothing was sent
    Invalid(usize),
    /// One request was dispatched
    Dispatched,
}

#[derive(Debug, Clone)]
pub struct SubmissionState {
    pub phase: SubmitPhase,
    pub violations: Vec<Violation>,
    pub prediction: Option<StressLevel>,
    pub completed_at: Option<chrono::DateTime<chrono::Local>>,
    /// Generic message for the blocking notification, until dismissed
    pub fault: Option<String>,
    pub scroll_to_top: bool,
    pub requests_sent: u64,
}

impl Default for SubmissionState {
    fn default() -> Self {
        Self {
            phase: SubmitPhase::Idle,
            violations: Vec::new(),
            prediction: None,
            completed_at: None,
            fault: None,
            scroll_to_top: false,
            requests_sent: 0,
        }
    }
}

impl SubmissionState {
    fn transition(&mut self, next: SubmitPhase) {
        if !self.phase.can_transition_to(next) {
            warn!(from = ?self.phase, to = ?next, "Unexpected submission transition");
        }
        debug!(from = ?self.phase, to = ?next, "Submission transition");
        self.phase = next;
    }

    pub fn is_busy(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }
}

fn lock(state: &Mutex<SubmissionState>) -> MutexGuard<'_, SubmissionState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct Submission {
    state: Arc<Mutex<SubmissionState>>,
    client: PredictClient,
}

impl Submission {
    pub fn new(client: PredictClient) -> Self {
        Self {
            state: Arc::new(Mutex::new(SubmissionState::default())),
            client,
        }
    }

    pub fn client(&self) -> &PredictClient {
        &self.client
    }

    pub fn snapshot(&self) -> SubmissionState {
        lock(&self.state).clone()
    }

    pub fn is_busy(&self) -> bool {
        lock(&self.state).is_busy()
    }

    /// Returns true once after a failed validation so the view can scroll up.
    pub fn take_scroll_request(&self) -> bool {
        std::mem::take(&mut lock(&self.state).scroll_to_top)
    }

    pub fn dismiss_fault(&self) {
        lock(&self.state).fault = None;
    }

    pub fn submit(
        &self,
        form: &FormState,
        ctx: &egui::Context,
        runtime: &tokio::runtime::Runtime,
    ) -> SubmitOutcome {
        let mut s = lock(&self.state);
        if s.is_busy() {
            debug!("Submit ignored, request already in flight");
            return SubmitOutcome::Busy;
        }

        s.transition(SubmitPhase::Validating);
        let features = match check(form) {
            Ok(features) => features,
            Err(violations) => {
                let count = violations.len();
                info!(count, "Validation failed");
                s.transition(SubmitPhase::Invalid);
                s.violations = violations;
                s.prediction = None;
                s.completed_at = None;
                s.scroll_to_top = true;
                s.transition(SubmitPhase::Idle);
                return SubmitOutcome::Invalid(count);
            }
        };

        s.violations.clear();
        s.transition(SubmitPhase::Submitting);
        s.requests_sent += 1;
        drop(s);

        info!(count = features.len(), url = %self.client.predict_url(), "Dispatching prediction request");

        let state = self.state.clone();
        let client = self.client.clone();
        let ctx = ctx.clone();
        runtime.spawn(async move {
            let result = client.predict(&features).await;
            let mut s = lock(&state);
            match result {
                Ok(level) => {
                    info!(level = ?level, "Prediction received");
                    s.transition(SubmitPhase::Succeeded);
                    s.prediction = level;
                    s.completed_at = Some(chrono::Local::now());
                }
                Err(e) => {
                    error!(error = %e, "Prediction request failed");
                    s.transition(SubmitPhase::Failed);
                    s.prediction = None;
                    s.completed_at = None;
                    s.fault = Some(FAULT_MESSAGE.to_string());
                }
            }
            s.transition(SubmitPhase::Idle);
            drop(s);
            ctx.request_repaint();
        });

        SubmitOutcome::Dispatched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Field;
    use crate::form::FieldInput;
    use std::time::{Duration, Instant};

    fn wait_until_idle(submission: &Submission) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while submission.is_busy() {
            assert!(Instant::now() < deadline, "request never finished");
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    fn setup(url: &str) -> (Submission, egui::Context, tokio::runtime::Runtime) {
        let client = PredictClient::new(url, None).unwrap();
        let runtime = tokio::runtime::Runtime::new().unwrap();
        (Submission::new(client), egui::Context::default(), runtime)
    }

    #[test]
    fn legal_transitions() {
        use SubmitPhase::*;
        assert!(Idle.can_transition_to(Validating));
        assert!(Validating.can_transition_to(Invalid));
        assert!(Validating.can_transition_to(Submitting));
        assert!(Submitting.can_transition_to(Succeeded));
        assert!(Submitting.can_transition_to(Failed));
        assert!(Succeeded.can_transition_to(Idle));
        assert!(Failed.can_transition_to(Idle));
        assert!(Invalid.can_transition_to(Idle));
        assert!(!Idle.can_transition_to(Submitting));
        assert!(!Invalid.can_transition_to(Submitting));
        assert!(!Submitting.can_transition_to(Idle));
    }

    #[test]
    fn invalid_form_sends_nothing_and_clears_prediction() {
        let mut server = mockito::Server::new();
        let ok = server
            .mock("POST", "/predict")
            .with_status(200)
            .with_body(r#"{"stress_level": 0}"#)
            .expect(1)
            .create();
        let (submission, ctx, runtime) = setup(&server.url());

        let form = FormState::default();
        assert_eq!(submission.submit(&form, &ctx, &runtime), SubmitOutcome::Dispatched);
        wait_until_idle(&submission);
        assert_eq!(submission.snapshot().prediction, Some(StressLevel::Low));

        let mut bad = FormState::default();
        bad.set(Field::SocialSupport, FieldInput::Value(4.0));
        bad.set(Field::Safety, FieldInput::Empty);
        assert_eq!(submission.submit(&bad, &ctx, &runtime), SubmitOutcome::Invalid(2));

        let snap = submission.snapshot();
        assert_eq!(snap.phase, SubmitPhase::Idle);
        assert_eq!(snap.prediction, None);
        assert_eq!(snap.requests_sent, 1);
        assert_eq!(
            snap.violations.iter().map(Violation::field).collect::<Vec<_>>(),
            vec![Field::Safety, Field::SocialSupport]
        );
        assert!(submission.take_scroll_request());
        assert!(!submission.take_scroll_request());
        ok.assert();
    }

    #[test]
    fn success_stores_level_and_clears_old_violations() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/predict")
            .with_status(200)
            .with_body(r#"{"stress_level": 2}"#)
            .expect(1)
            .create();
        let (submission, ctx, runtime) = setup(&server.url());

        let mut form = FormState::default();
        form.set(Field::Depression, FieldInput::Empty);
        assert_eq!(submission.submit(&form, &ctx, &runtime), SubmitOutcome::Invalid(1));
        assert_eq!(submission.snapshot().violations.len(), 1);

        form.set(Field::Depression, FieldInput::Value(20.0));
        assert_eq!(submission.submit(&form, &ctx, &runtime), SubmitOutcome::Dispatched);
        wait_until_idle(&submission);

        let snap = submission.snapshot();
        assert!(snap.violations.is_empty());
        assert_eq!(snap.prediction, Some(StressLevel::High));
        assert!(snap.completed_at.is_some());
        assert!(snap.fault.is_none());
        mock.assert();
    }

    #[test]
    fn failure_raises_generic_fault() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/predict")
            .with_status(500)
            .with_body("Internal Server Error")
            .create();
        let (submission, ctx, runtime) = setup(&server.url());

        assert_eq!(
            submission.submit(&FormState::default(), &ctx, &runtime),
            SubmitOutcome::Dispatched
        );
        wait_until_idle(&submission);

        let snap = submission.snapshot();
        assert_eq!(snap.phase, SubmitPhase::Idle);
        assert_eq!(snap.prediction, None);
        assert_eq!(snap.fault.as_deref(), Some(FAULT_MESSAGE));

        submission.dismiss_fault();
        assert!(submission.snapshot().fault.is_none());
    }

    #[test]
    fn unrecognized_level_leaves_result_unset() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/predict")
            .with_status(200)
            .with_body(r#"{"stress_level": 5}"#)
            .create();
        let (submission, ctx, runtime) = setup(&server.url());

        submission.submit(&FormState::default(), &ctx, &runtime);
        wait_until_idle(&submission);

        let snap = submission.snapshot();
        assert_eq!(snap.prediction, None);
        assert!(snap.fault.is_none());
    }

    #[test]
    fn second_submit_while_in_flight_is_rejected() {
        // Accepts connections into the backlog but never answers
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let (submission, ctx, runtime) = setup(&url);
        let form = FormState::default();

        assert_eq!(submission.submit(&form, &ctx, &runtime), SubmitOutcome::Dispatched);
        assert!(submission.is_busy());
        assert_eq!(submission.submit(&form, &ctx, &runtime), SubmitOutcome::Busy);
        assert_eq!(submission.submit(&form, &ctx, &runtime), SubmitOutcome::Busy);

        let snap = submission.snapshot();
        assert_eq!(snap.phase, SubmitPhase::Submitting);
        assert_eq!(snap.requests_sent, 1);

        // Exactly one connection reaches the server
        listener.set_nonblocking(true).unwrap();
        let deadline = Instant::now() + Duration::from_secs(10);
        let _first = loop {
            match listener.accept() {
                Ok((stream, _)) => break stream,
                Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                    assert!(Instant::now() < deadline, "no connection arrived");
                    std::thread::sleep(Duration::from_millis(10));
                }
                Err(e) => panic!("accept failed: {e}"),
            }
        };
        std::thread::sleep(Duration::from_millis(200));
        assert!(matches!(
            listener.accept(),
            Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock
        ));
        assert!(submission.is_busy());
    }
}
