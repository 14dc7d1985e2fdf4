//! Form controller: state, validation and submission
//!
//! Requests run on the tokio runtime so the UI keeps drawing while the
//! scoring service thinks. Completions come back over a channel and are
//! applied on the UI thread by [`FormController::poll_outcome`].

use super::change::{ChangeEvent, ChangeOutcome};
use super::form_state::{LoanForm, ValidationError};
use crate::scoring::{PredictionResponse, ScoringClientTrait, ScoringError};
use crate::state::submission::{Decision, SubmissionResult};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// What `submit` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    /// A request was sent
    Submitted(Uuid),
    /// A request is already in flight; this submit was ignored
    AlreadyInFlight,
}

/// Summary of a completed request, for the caller's bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Success,
    Failure { transport: bool },
}

#[derive(Debug)]
struct SubmissionOutcome {
    id: Uuid,
    outcome: Result<PredictionResponse, ScoringError>,
}

/// Sends exactly one outcome for a request.
///
/// If the request task panics or is aborted before it reports, dropping the
/// reporter sends [`ScoringError::Interrupted`] instead, so the form never
/// stays in `Loading`.
struct OutcomeReporter {
    id: Uuid,
    tx: Option<mpsc::UnboundedSender<SubmissionOutcome>>,
}

impl OutcomeReporter {
    fn new(id: Uuid, tx: mpsc::UnboundedSender<SubmissionOutcome>) -> Self {
        Self { id, tx: Some(tx) }
    }

    /// Returns whether anyone was still listening
    fn report(mut self, outcome: Result<PredictionResponse, ScoringError>) -> bool {
        let id = self.id;
        self.tx
            .take()
            .is_some_and(|tx| tx.send(SubmissionOutcome { id, outcome }).is_ok())
    }
}

impl Drop for OutcomeReporter {
    fn drop(&mut self) {
        if let Some(tx) = self.tx.take() {
            tracing::warn!(id = %self.id, "Scoring request ended without a response");
            let _ = tx.send(SubmissionOutcome {
                id: self.id,
                outcome: Err(ScoringError::Interrupted),
            });
        }
    }
}

struct InFlight {
    id: Uuid,
    task: JoinHandle<bool>,
}

pub struct FormController {
    form: LoanForm,
    result: SubmissionResult,
    client: Arc<dyn ScoringClientTrait>,
    in_flight: Option<InFlight>,
    outcome_tx: mpsc::UnboundedSender<SubmissionOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmissionOutcome>,
}

impl FormController {
    pub fn new(client: Arc<dyn ScoringClientTrait>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            form: LoanForm::new(),
            result: SubmissionResult::Idle,
            client,
            in_flight: None,
            outcome_tx,
            outcome_rx,
        }
    }

    pub fn form(&self) -> &LoanForm {
        &self.form
    }

    pub fn result(&self) -> &SubmissionResult {
        &self.result
    }

    pub fn is_loading(&self) -> bool {
        self.result.is_loading()
    }

    pub fn client(&self) -> Arc<dyn ScoringClientTrait> {
        Arc::clone(&self.client)
    }

    /// Merge an input change into the form
    pub fn handle_change(&mut self, event: ChangeEvent) -> ChangeOutcome {
        let outcome = self.form.apply_change(&event);
        if let ChangeOutcome::Rejected(reason) = &outcome {
            tracing::debug!(field = %event.name, value = %event.value, "Ignored input: {reason}");
        }
        outcome
    }

    /// Validate and send the form.
    ///
    /// Validation failures never reach the network and leave the previous
    /// result in place. Must be called from within a tokio runtime.
    pub fn submit(&mut self) -> Result<SubmitStatus, ValidationError> {
        if self.is_loading() {
            tracing::info!("Submit ignored: a request is already in flight");
            return Ok(SubmitStatus::AlreadyInFlight);
        }

        let application = self.form.validate().inspect_err(|err| {
            tracing::warn!(missing = err.missing.len(), "Submit blocked by validation");
        })?;

        let id = Uuid::new_v4();
        tracing::info!(%id, "Submitting application");

        let client = Arc::clone(&self.client);
        let reporter = OutcomeReporter::new(id, self.outcome_tx.clone());
        let task = tokio::spawn(async move {
            let outcome = client.predict(&application).await;
            let delivered = reporter.report(outcome);
            if !delivered {
                tracing::debug!(%id, "Form closed before the response arrived; discarding");
            }
            delivered
        });

        self.result = SubmissionResult::Loading;
        self.in_flight = Some(InFlight { id, task });
        Ok(SubmitStatus::Submitted(id))
    }

    /// Apply a finished request, if one is waiting. Never blocks.
    pub fn poll_outcome(&mut self) -> Option<Completion> {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            if let Some(completion) = self.apply_outcome(outcome) {
                return Some(completion);
            }
        }
        None
    }

    /// Wait for the in-flight request to finish and apply it
    pub async fn next_outcome(&mut self) -> Option<Completion> {
        while self.in_flight.is_some() {
            let outcome = self.outcome_rx.recv().await?;
            if let Some(completion) = self.apply_outcome(outcome) {
                return Some(completion);
            }
        }
        None
    }

    fn apply_outcome(&mut self, submission: SubmissionOutcome) -> Option<Completion> {
        let SubmissionOutcome { id, outcome } = submission;
        if self.in_flight.as_ref().map(|f| f.id) != Some(id) {
            tracing::debug!(%id, "Dropping response for a stale submission");
            return None;
        }
        self.in_flight = None;

        let completion = match outcome {
            Ok(response) => {
                tracing::info!(
                    %id,
                    decision = response.loan_approval.as_deref().unwrap_or("unknown"),
                    "Decision received"
                );
                self.result = SubmissionResult::Success(Decision::new(response));
                Completion::Success
            }
            Err(err) => {
                tracing::warn!(%id, "Submission failed: {err}");
                let transport = err.is_transport();
                self.result = SubmissionResult::Failure(err.to_string());
                Completion::Failure { transport }
            }
        };
        Some(completion)
    }
}

impl std::fmt::Debug for FormController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormController")
            .field("form", &self.form)
            .field("result", &self.result)
            .field("in_flight", &self.in_flight.as_ref().map(|f| f.id))
            .finish()
    }
}

impl Drop for FormController {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            tracing::debug!(id = %in_flight.id, "Form closed; cancelling request");
            in_flight.task.abort();
        }
    }
}
