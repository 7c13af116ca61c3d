//! Domain objects for the prediction screen.
//!
//! Nothing in here touches the terminal or the network, which keeps the
//! form rules testable on their own.
//!
//! ## Domain Objects
//!
//! - [`FormState`] - User-entered values and the reducer that updates them
//! - [`validate`] - Ordered validation rules with user-facing messages
//! - [`SelectOption`] - Option tables for choice-backed fields
//! - [`PredictRequest`] / [`PredictionResult`] - Service wire types and display rules

pub mod form;
pub mod options;
pub mod prediction;
pub mod selection;
pub mod validation;

pub use form::{FormAction, FormState, TextField};
pub use options::{
    Gender, OptionField, OptionLayout, ResidenceType, SelectOption, SmokingStatus, WorkType,
};
pub use prediction::{
    display_probability, ModelBreakdown, PredictRequest, PredictionResult, ProbabilityDisplay,
};
pub use validation::{validate, validation_message, ValidationError};
