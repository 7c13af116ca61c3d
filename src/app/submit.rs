//! Submission handler.
//!
//! A submission is split in two so the network call can run off the event
//! loop: [`UiState::begin_submission`] validates and marks the state as
//! loading, [`UiState::complete_submission`] applies whatever came back.
//! [`submit`] runs both halves inline around the request.

use crate::client::PredictionClient;
use crate::domain::{FormState, PredictRequest, PredictionResult, ValidationError};
use crate::error::PredictionError;
use crate::state::UiState;

/// A request that passed validation and is ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission {
    pub generation: u64,
    pub request: PredictRequest,
}

/// What happened when the user asked to submit.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The form failed validation; `error` holds the message
    Rejected(ValidationError),
    /// A request is already in flight; nothing changed
    Busy,
    Started(PendingSubmission),
}

impl UiState {
    /// Validate `form` and, if it passes, enter the loading state.
    pub fn begin_submission(&mut self, form: &FormState) -> SubmitOutcome {
        if self.loading {
            tracing::debug!("submit ignored while a request is in flight");
            return SubmitOutcome::Busy;
        }

        let request = match PredictRequest::from_form(form) {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!(?err, "submission rejected by validation");
                self.set_error(err.to_string());
                return SubmitOutcome::Rejected(err);
            }
        };

        self.loading = true;
        self.dismiss_error();
        self.result = None;
        self.details_visible = false;
        self.reveal_result = true;
        self.generation += 1;
        tracing::info!(generation = self.generation, "submission started");

        SubmitOutcome::Started(PendingSubmission {
            generation: self.generation,
            request,
        })
    }

    /// Apply the outcome of the request started with `generation`.
    ///
    /// Outcomes for anything but the latest submission are dropped. Returns
    /// whether the outcome was applied.
    pub fn complete_submission(
        &mut self,
        generation: u64,
        outcome: Result<PredictionResult, PredictionError>,
    ) -> bool {
        if generation != self.generation {
            tracing::debug!(
                generation,
                current = self.generation,
                "dropping stale prediction outcome"
            );
            return false;
        }

        match outcome {
            Ok(result) => {
                tracing::info!(generation, prediction = result.prediction, "prediction stored");
                self.result = Some(result);
                self.reveal_result = true;
            }
            Err(err) => {
                tracing::warn!(generation, code = err.error_code(), error = %err, "prediction failed");
                self.set_error(err.user_message());
            }
        }
        self.loading = false;
        true
    }
}

/// Validate, send, and store the outcome without leaving the current task.
pub async fn submit(form: &FormState, ui: &mut UiState, client: &PredictionClient) -> SubmitOutcome {
    let outcome = ui.begin_submission(form);
    if let SubmitOutcome::Started(pending) = &outcome {
        let result = client.predict(&pending.request).await;
        ui.complete_submission(pending.generation, result);
    }
    outcome
}
