//! AppMessage enum for async communication within the application.

use crate::client::ServiceStatus;
use crate::domain::PredictionResult;
use crate::error::PredictionError;

/// Messages received from background tasks
#[derive(Debug)]
pub enum AppMessage {
    /// A prediction request finished, successfully or not
    PredictionFinished {
        generation: u64,
        outcome: Result<PredictionResult, PredictionError>,
    },
    /// The startup health probe finished
    HealthChecked(ServiceStatus),
}
