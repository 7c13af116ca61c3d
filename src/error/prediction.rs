//! Failures of a prediction request.

use thiserror::Error;

use crate::traits::HttpError;

/// The one message users see for any failed prediction request.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to get prediction. Please try again.";

/// Why a prediction request did not produce a result.
///
/// Every variant collapses to [`GENERIC_FAILURE_MESSAGE`] for the user; the
/// distinction only matters for logs.
#[derive(Debug, Error)]
pub enum PredictionError {
    /// The request never got a response
    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    /// The service answered with a non-2xx status. Error bodies can echo
    /// the submitted values, so only their size is kept.
    #[error("service returned HTTP {status} ({body_len} byte body)")]
    Status { status: u16, body_len: usize },

    /// A 2xx body that is not a valid prediction
    #[error("malformed prediction body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request body could not be serialized
    #[error("could not encode request: {0}")]
    Encode(#[source] serde_json::Error),
}

impl PredictionError {
    pub fn user_message(&self) -> &'static str {
        GENERIC_FAILURE_MESSAGE
    }

    /// Short code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            PredictionError::Transport(HttpError::Timeout(_)) => "E_PRED_TIMEOUT",
            PredictionError::Transport(HttpError::ConnectionFailed(_)) => "E_PRED_CONN",
            PredictionError::Transport(_) => "E_PRED_TRANSPORT",
            PredictionError::Status { .. } => "E_PRED_STATUS",
            PredictionError::Decode(_) => "E_PRED_DECODE",
            PredictionError::Encode(_) => "E_PRED_ENCODE",
        }
    }
}
