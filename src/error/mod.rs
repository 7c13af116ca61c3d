//! Error types for the prediction client.
//!
//! | Kind | Type | Surfaced as |
//! |------|------|-------------|
//! | Validation | [`ValidationError`] | its own message, before any request |
//! | Transport / service | [`PredictionError`] | [`GENERIC_FAILURE_MESSAGE`] |
//! | Missing result fields | not an error | "Cannot Calculate" |
//!
//! Entry points (`main`, CLI commands) return `color_eyre::Result`.

mod prediction;

pub use crate::domain::validation::ValidationError;
pub use prediction::{PredictionError, GENERIC_FAILURE_MESSAGE};
