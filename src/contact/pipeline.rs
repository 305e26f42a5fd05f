//! Contact form state controller
//!
//! Owns the form snapshot, the field errors, the top-level banner and the
//! lifecycle state. Submissions run on a spawned task and report back over a
//! channel tagged with a ticket; only the outcome whose ticket matches the
//! submission in flight is applied, so an abandoned exchange can never
//! mutate the form.

use super::{ContactClientTrait, SubmissionOutcome, SubmitError};
use crate::state::{sanitize, validate, ContactField, ErrorMap, FormSnapshot};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Lifecycle of the contact form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PipelineState {
    #[default]
    Editing,
    /// An exchange is outstanding; further submits are rejected
    Submitting,
    /// The endpoint accepted the message
    Submitted(String),
    /// Same as `Editing` plus a banner describing the last failure
    EditingWithError(String),
}

impl PipelineState {
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }
}

/// What happened when the user asked to submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation passed and an exchange was started
    Started(Uuid),
    /// Validation failed; focus should move to `focus`
    Invalid { focus: ContactField },
    /// A submission is already in flight; nothing was sent
    AlreadySubmitting,
}

struct InFlight {
    ticket: Uuid,
    task: JoinHandle<()>,
}

type TaggedOutcome = (Uuid, SubmissionOutcome);

/// State controller for one contact form instance
pub struct ContactPipeline {
    client: Arc<dyn ContactClientTrait>,
    snapshot: FormSnapshot,
    errors: ErrorMap,
    banner: Option<String>,
    state: PipelineState,
    in_flight: Option<InFlight>,
    outcome_tx: UnboundedSender<TaggedOutcome>,
    outcome_rx: UnboundedReceiver<TaggedOutcome>,
}

impl ContactPipeline {
    pub fn new(client: Arc<dyn ContactClientTrait>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            client,
            snapshot: FormSnapshot::default(),
            errors: ErrorMap::new(),
            banner: None,
            state: PipelineState::Editing,
            in_flight: None,
            outcome_tx,
            outcome_rx,
        }
    }

    pub fn snapshot(&self) -> &FormSnapshot {
        &self.snapshot
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error_for(&self, field: ContactField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Top-level failure message, if any
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Store a sanitized field value and clear that field's error only
    pub fn on_field_change(&mut self, field: ContactField, raw: &str) {
        self.snapshot.set(field, sanitize(raw));
        self.errors.remove(field);
    }

    /// Validate and, if valid, start one exchange with the endpoint.
    ///
    /// Must be called from within a tokio runtime.
    pub fn on_submit(&mut self) -> SubmitAttempt {
        if self.in_flight.is_some() {
            tracing::debug!("Ignoring submit while a submission is in flight");
            return SubmitAttempt::AlreadySubmitting;
        }

        let errors = validate(&self.snapshot);
        if let Some(focus) = errors.first_invalid() {
            tracing::debug!("Contact form has {} invalid field(s)", errors.len());
            self.errors = errors;
            return SubmitAttempt::Invalid { focus };
        }

        self.errors.clear();
        self.banner = None;
        self.state = PipelineState::Submitting;

        let ticket = Uuid::new_v4();
        let client = Arc::clone(&self.client);
        let snapshot = self.snapshot.clone();
        let tx = self.outcome_tx.clone();
        let task = tokio::spawn(async move {
            let outcome = client.submit(snapshot).await;
            // The receiver is gone only if the pipeline was dropped
            let _ = tx.send((ticket, outcome));
        });

        tracing::info!("Contact submission {ticket} started");
        self.in_flight = Some(InFlight { ticket, task });
        SubmitAttempt::Started(ticket)
    }

    /// Apply the outcome of submission `ticket`.
    ///
    /// Returns false (and changes nothing) when `ticket` is not the
    /// submission currently in flight.
    pub fn apply_outcome(&mut self, ticket: Uuid, outcome: SubmissionOutcome) -> bool {
        match &self.in_flight {
            Some(in_flight) if in_flight.ticket == ticket => {}
            _ => {
                tracing::debug!("Discarding outcome of abandoned submission {ticket}");
                return false;
            }
        }
        self.in_flight = None;

        match outcome {
            Ok(message) => {
                tracing::info!("Contact submission {ticket} accepted");
                self.snapshot = FormSnapshot::default();
                self.errors.clear();
                self.banner = None;
                self.state = PipelineState::Submitted(message);
            }
            Err(SubmitError::Validation(errors)) => {
                if errors.is_empty() {
                    tracing::warn!("Contact submission {ticket} rejected without field details");
                } else {
                    tracing::warn!(
                        "Contact submission {ticket} rejected {} field(s)",
                        errors.len()
                    );
                }
                self.errors = errors;
                self.state = PipelineState::Editing;
            }
            Err(err) => {
                let detail = err.to_string();
                tracing::warn!(
                    "Contact submission {ticket} failed ({}, status {:?}, retryable: {}): {}",
                    err.kind().label(),
                    err.status(),
                    err.is_retryable(),
                    err.cause().unwrap_or(detail.as_str())
                );
                self.banner = Some(detail.clone());
                self.state = PipelineState::EditingWithError(detail);
            }
        }
        true
    }

    /// Apply any outcomes that have arrived without waiting.
    /// Returns true if the state changed.
    pub fn poll_outcomes(&mut self) -> bool {
        let mut applied = false;
        while let Ok((ticket, outcome)) = self.outcome_rx.try_recv() {
            applied |= self.apply_outcome(ticket, outcome);
        }
        applied
    }

    /// Wait for the submission in flight to finish and apply its outcome.
    /// Returns false immediately when nothing is in flight.
    #[cfg(test)]
    pub async fn wait_for_outcome(&mut self) -> bool {
        while self.in_flight.is_some() {
            match self.outcome_rx.recv().await {
                Some((ticket, outcome)) => {
                    if self.apply_outcome(ticket, outcome) {
                        return true;
                    }
                }
                None => return false,
            }
        }
        false
    }

    /// Back to an empty form. Any exchange still in flight is aborted and
    /// its outcome will be discarded.
    pub fn reset(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            tracing::info!("Abandoning contact submission {}", in_flight.ticket);
            in_flight.task.abort();
        }
        self.snapshot = FormSnapshot::default();
        self.errors.clear();
        self.banner = None;
        self.state = PipelineState::Editing;
    }
}

impl Drop for ContactPipeline {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{ContactClient, MockContactClientTrait};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::Notify;

    /// Client that blocks until released, counting calls
    #[derive(Default)]
    struct GatedClient {
        calls: AtomicUsize,
        gate: Notify,
    }

    #[async_trait]
    impl ContactClientTrait for GatedClient {
        async fn submit(&self, _snapshot: FormSnapshot) -> SubmissionOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            Ok("ok".to_string())
        }
    }

    fn fill_valid(pipeline: &mut ContactPipeline) {
        pipeline.on_field_change(ContactField::Name, "Ada Lovelace");
        pipeline.on_field_change(ContactField::Email, "ada@example.com");
        pipeline.on_field_change(ContactField::Subject, "Analytical engine site");
        pipeline.on_field_change(ContactField::Message, "Please build us a website.");
    }

    fn pipeline_returning(outcome: SubmissionOutcome) -> ContactPipeline {
        let mut mock = MockContactClientTrait::new();
        mock.expect_submit()
            .times(1)
            .returning(move |_| outcome.clone());
        ContactPipeline::new(Arc::new(mock))
    }

    fn untouched_mock() -> ContactPipeline {
        let mut mock = MockContactClientTrait::new();
        mock.expect_submit().never();
        ContactPipeline::new(Arc::new(mock))
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_empty_and_editing() {
            let pipeline = untouched_mock();
            assert!(pipeline.snapshot().is_empty());
            assert!(pipeline.errors().is_empty());
            assert_eq!(pipeline.banner(), None);
            assert_eq!(pipeline.state(), &PipelineState::Editing);
        }

        #[test]
        fn test_field_change_sanitizes_without_trimming() {
            let mut pipeline = untouched_mock();
            pipeline.on_field_change(ContactField::Name, " <b>Ada</b> ");
            assert_eq!(pipeline.snapshot().name, " bAda/b ");
        }

        #[tokio::test]
        async fn test_field_change_clears_only_its_own_error() {
            let mut pipeline = untouched_mock();
            assert!(matches!(
                pipeline.on_submit(),
                SubmitAttempt::Invalid { .. }
            ));
            assert_eq!(pipeline.errors().len(), 4);

            pipeline.on_field_change(ContactField::Email, "a");
            assert_eq!(pipeline.error_for(ContactField::Email), None);
            assert_eq!(pipeline.errors().len(), 3);
            assert_eq!(
                pipeline.error_for(ContactField::Name),
                Some("Name is required")
            );
        }
    }

    mod submitting {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_invalid_form_never_touches_network() {
            let mut pipeline = untouched_mock();
            pipeline.on_field_change(ContactField::Name, "Ada");
            pipeline.on_field_change(ContactField::Email, "not-an-email");

            let attempt = pipeline.on_submit();
            assert_eq!(
                attempt,
                SubmitAttempt::Invalid {
                    focus: ContactField::Email
                }
            );
            assert_eq!(pipeline.state(), &PipelineState::Editing);
            assert!(!pipeline.is_submitting());
        }

        #[tokio::test]
        async fn test_success_clears_form_and_reports_message() {
            let mut mock = MockContactClientTrait::new();
            mock.expect_submit()
                .withf(|s| s.email == "ada@example.com" && s.name == "Ada Lovelace")
                .times(1)
                .returning(|_| Ok("ok".to_string()));
            let mut pipeline = ContactPipeline::new(Arc::new(mock));
            fill_valid(&mut pipeline);

            assert!(matches!(pipeline.on_submit(), SubmitAttempt::Started(_)));
            assert_eq!(pipeline.state(), &PipelineState::Submitting);

            assert!(pipeline.wait_for_outcome().await);
            assert_eq!(
                pipeline.state(),
                &PipelineState::Submitted("ok".to_string())
            );
            assert!(pipeline.snapshot().is_empty());
            assert!(pipeline.errors().is_empty());
        }

        #[tokio::test]
        async fn test_server_validation_returns_to_editing() {
            let errors: ErrorMap = [("email", "taken")].into_iter().collect();
            let mut pipeline = pipeline_returning(Err(SubmitError::Validation(errors.clone())));
            fill_valid(&mut pipeline);

            pipeline.on_submit();
            pipeline.wait_for_outcome().await;

            assert_eq!(pipeline.errors(), &errors);
            assert_eq!(pipeline.state(), &PipelineState::Editing);
            assert_eq!(pipeline.banner(), None);
            assert_eq!(pipeline.snapshot().email, "ada@example.com");
        }

        #[tokio::test]
        async fn test_server_validation_without_details_keeps_input() {
            let mut pipeline = pipeline_returning(Err(SubmitError::Validation(ErrorMap::new())));
            fill_valid(&mut pipeline);

            pipeline.on_submit();
            assert!(pipeline.wait_for_outcome().await);

            assert!(pipeline.errors().is_empty());
            assert_eq!(pipeline.state(), &PipelineState::Editing);
            assert_eq!(pipeline.banner(), None);
            assert_eq!(pipeline.snapshot().name, "Ada Lovelace");
        }

        #[tokio::test]
        async fn test_transport_failures_become_banner() {
            let cases = [
                SubmitError::Timeout,
                SubmitError::Server { status: 500 },
                SubmitError::Client {
                    status: 403,
                    message: "Forbidden".to_string(),
                },
                SubmitError::Network {
                    cause: "dns".to_string(),
                },
            ];

            for err in cases {
                let detail = err.to_string();
                let mut pipeline = pipeline_returning(Err(err));
                fill_valid(&mut pipeline);

                pipeline.on_submit();
                pipeline.wait_for_outcome().await;

                assert_eq!(
                    pipeline.state(),
                    &PipelineState::EditingWithError(detail.clone())
                );
                assert_eq!(pipeline.banner(), Some(detail.as_str()));
                assert!(pipeline.errors().is_empty());
                assert!(!pipeline.snapshot().is_empty());
            }
        }

        #[tokio::test]
        async fn test_resubmit_after_failure_clears_banner() {
            let mut mock = MockContactClientTrait::new();
            let mut seq = mockall::Sequence::new();
            mock.expect_submit()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Err(SubmitError::Timeout));
            mock.expect_submit()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok("second time lucky".to_string()));
            let mut pipeline = ContactPipeline::new(Arc::new(mock));
            fill_valid(&mut pipeline);

            pipeline.on_submit();
            pipeline.wait_for_outcome().await;
            assert!(pipeline.banner().is_some());

            pipeline.on_submit();
            assert_eq!(pipeline.banner(), None);
            pipeline.wait_for_outcome().await;
            assert_eq!(
                pipeline.state(),
                &PipelineState::Submitted("second time lucky".to_string())
            );
        }

        #[tokio::test]
        async fn test_second_submit_while_in_flight_is_rejected() {
            let client = Arc::new(GatedClient::default());
            let mut pipeline = ContactPipeline::new(client.clone());
            fill_valid(&mut pipeline);

            assert!(matches!(pipeline.on_submit(), SubmitAttempt::Started(_)));
            assert_eq!(pipeline.on_submit(), SubmitAttempt::AlreadySubmitting);
            assert_eq!(pipeline.on_submit(), SubmitAttempt::AlreadySubmitting);

            client.gate.notify_one();
            assert!(pipeline.wait_for_outcome().await);
            assert_eq!(client.calls.load(Ordering::SeqCst), 1);
        }

        #[tokio::test]
        async fn test_edits_are_accepted_while_submitting() {
            let client = Arc::new(GatedClient::default());
            let mut pipeline = ContactPipeline::new(client.clone());
            fill_valid(&mut pipeline);

            pipeline.on_submit();
            pipeline.on_field_change(ContactField::Subject, "Changed my mind");
            assert_eq!(pipeline.snapshot().subject, "Changed my mind");
            assert_eq!(pipeline.state(), &PipelineState::Submitting);

            client.gate.notify_one();
            pipeline.wait_for_outcome().await;
            assert!(pipeline.snapshot().is_empty());
        }

        #[tokio::test]
        async fn test_poll_outcomes_applies_finished_submission() {
            let mut pipeline = pipeline_returning(Ok("done".to_string()));
            fill_valid(&mut pipeline);
            pipeline.on_submit();

            let mut applied = false;
            for _ in 0..50 {
                tokio::task::yield_now().await;
                if pipeline.poll_outcomes() {
                    applied = true;
                    break;
                }
            }
            assert!(applied);
            assert!(pipeline.state().is_submitted());
        }

        #[tokio::test]
        async fn test_wait_without_submission_returns_false() {
            let mut pipeline = untouched_mock();
            assert!(!pipeline.wait_for_outcome().await);
        }
    }

    mod reset_and_cancellation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_reset_from_submitted_clears_everything() {
            let mut pipeline = pipeline_returning(Ok("ok".to_string()));
            fill_valid(&mut pipeline);
            pipeline.on_submit();
            pipeline.wait_for_outcome().await;
            assert!(pipeline.state().is_submitted());

            pipeline.reset();
            assert!(pipeline.snapshot().is_empty());
            assert!(pipeline.errors().is_empty());
            assert_eq!(pipeline.banner(), None);
            assert_eq!(pipeline.state(), &PipelineState::Editing);
        }

        #[tokio::test]
        async fn test_outcome_after_reset_is_discarded() {
            let client = Arc::new(GatedClient::default());
            let mut pipeline = ContactPipeline::new(client.clone());
            fill_valid(&mut pipeline);

            let SubmitAttempt::Started(ticket) = pipeline.on_submit() else {
                panic!("submission did not start");
            };
            pipeline.reset();
            pipeline.on_field_change(ContactField::Name, "Someone else");

            assert!(!pipeline.apply_outcome(ticket, Ok("late".to_string())));
            assert_eq!(pipeline.state(), &PipelineState::Editing);
            assert_eq!(pipeline.snapshot().name, "Someone else");

            client.gate.notify_one();
            tokio::task::yield_now().await;
            assert!(!pipeline.poll_outcomes());
        }

        #[tokio::test]
        async fn test_unknown_ticket_is_discarded() {
            let mut pipeline = untouched_mock();
            assert!(!pipeline.apply_outcome(Uuid::new_v4(), Ok("stray".to_string())));
            assert_eq!(pipeline.state(), &PipelineState::Editing);
        }

        #[tokio::test]
        async fn test_timeout_against_slow_endpoint() {
            use wiremock::matchers::method;
            use wiremock::{Mock, MockServer, ResponseTemplate};

            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(serde_json::json!({"message": "too late"}))
                        .set_delay(Duration::from_millis(400)),
                )
                .mount(&server)
                .await;

            let client = ContactClient::new(server.uri(), Duration::from_millis(50)).unwrap();
            let mut pipeline = ContactPipeline::new(Arc::new(client));
            fill_valid(&mut pipeline);

            pipeline.on_submit();
            assert!(pipeline.wait_for_outcome().await);
            let detail = SubmitError::Timeout.to_string();
            assert_eq!(pipeline.state(), &PipelineState::EditingWithError(detail));

            // The delayed response would have landed by now; nothing follows.
            tokio::time::sleep(Duration::from_millis(500)).await;
            assert!(!pipeline.poll_outcomes());
            assert!(!pipeline.state().is_submitted());
        }
    }
}
