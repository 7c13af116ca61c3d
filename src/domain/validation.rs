//! Input validation for the prediction form.
//!
//! Rules are checked in a fixed order and the first failure wins. The
//! `Display` text of each [`ValidationError`] is the exact message shown
//! to the user.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::form::{FormState, TextField};

/// Empty, or ASCII digits with at most one decimal point. No sign, no exponent.
static NUMERIC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+\.?[0-9]*)?$").expect("Invalid numeric regex pattern"));

pub const AGE_RANGE: (f64, f64) = (1.0, 120.0);
pub const BMI_RANGE: (f64, f64) = (10.0, 80.0);
pub const GLUCOSE_RANGE: (f64, f64) = (30.0, 300.0);

/// The first rule a form fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter a valid age (1-120).")]
    InvalidAge,

    #[error("Enter a valid BMI (10-80).")]
    InvalidBmi,

    #[error("Glucose must be between 30-300 (optional)")]
    InvalidGlucose,

    #[error("Please select your smoking status.")]
    MissingSmokingStatus,

    #[error("You must agree to the disclaimer.")]
    ConsentRequired,
}

/// Whether `value` matches the accepted numeric pattern.
pub fn is_numeric(value: &str) -> bool {
    NUMERIC_REGEX.is_match(value)
}

/// Parse a non-empty numeric buffer and check it against an inclusive range.
fn parse_in_range(value: &str, (min, max): (f64, f64)) -> Option<f64> {
    if value.is_empty() || !is_numeric(value) {
        return None;
    }
    value
        .parse::<f64>()
        .ok()
        .filter(|n| (min..=max).contains(n))
}

/// Parsed age, if the buffer holds a valid one.
pub fn parse_age(value: &str) -> Option<f64> {
    parse_in_range(value, AGE_RANGE)
}

/// Parsed BMI, if the buffer holds a valid one.
pub fn parse_bmi(value: &str) -> Option<f64> {
    parse_in_range(value, BMI_RANGE)
}

/// Parsed glucose level. `Ok(None)` means the optional field was left blank.
pub fn parse_glucose(value: &str) -> Result<Option<f64>, ValidationError> {
    if value.is_empty() {
        return Ok(None);
    }
    parse_in_range(value, GLUCOSE_RANGE)
        .map(Some)
        .ok_or(ValidationError::InvalidGlucose)
}

/// Check the whole form.
pub fn validate(form: &FormState) -> Result<(), ValidationError> {
    parse_age(&form.age).ok_or(ValidationError::InvalidAge)?;
    parse_bmi(&form.bmi).ok_or(ValidationError::InvalidBmi)?;
    parse_glucose(&form.avg_glucose_level)?;
    if form.smoking_status.is_none() {
        return Err(ValidationError::MissingSmokingStatus);
    }
    if !form.consent {
        return Err(ValidationError::ConsentRequired);
    }
    Ok(())
}

/// The validation message for `form`, or an empty string when it is valid.
pub fn validation_message(form: &FormState) -> String {
    match validate(form) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Inline helper shown under a text field while its contents are invalid.
///
/// Empty fields never show a helper; the submit-time message covers them.
pub fn field_helper(form: &FormState, field: TextField) -> Option<&'static str> {
    let value = form.text(field);
    if value.is_empty() {
        return None;
    }
    match field {
        TextField::Age if parse_age(value).is_none() => Some("Age must be 1-120"),
        TextField::Bmi if parse_bmi(value).is_none() => Some("BMI must be 10-80"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::FormAction;

    fn valid_form() -> FormState {
        FormState::default()
            .reduce(FormAction::SetText(TextField::Age, "45".into()))
            .reduce(FormAction::SetText(TextField::Bmi, "24.5".into()))
            .reduce(FormAction::SetConsent(true))
    }

    #[test]
    fn test_numeric_pattern() {
        assert!(is_numeric(""));
        assert!(is_numeric("12"));
        assert!(is_numeric("12."));
        assert!(is_numeric("12.5"));
        assert!(!is_numeric(".5"));
        assert!(!is_numeric("-3"));
        assert!(!is_numeric("1e3"));
        assert!(!is_numeric("1.2.3"));
        assert!(!is_numeric(" 12"));
        assert!(!is_numeric("١٢"));
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(validate(&valid_form()), Ok(()));
        assert_eq!(validation_message(&valid_form()), "");
    }

    #[test]
    fn test_empty_age_fails_first() {
        let form = FormState::default();
        assert_eq!(validate(&form), Err(ValidationError::InvalidAge));
        assert_eq!(validation_message(&form), "Enter a valid age (1-120).");
    }

    #[test]
    fn test_bmi_checked_after_age() {
        let form = valid_form().reduce(FormAction::SetText(TextField::Bmi, "9.9".into()));
        assert_eq!(validate(&form), Err(ValidationError::InvalidBmi));
    }

    #[test]
    fn test_glucose_is_optional() {
        let form = valid_form();
        assert!(form.avg_glucose_level.is_empty());
        assert_eq!(validate(&form), Ok(()));
    }

    #[test]
    fn test_glucose_non_numeric() {
        let form = valid_form().reduce(FormAction::SetText(TextField::Glucose, "abc".into()));
        assert_eq!(
            validation_message(&form),
            "Glucose must be between 30-300 (optional)"
        );
    }

    #[test]
    fn test_missing_smoking_status() {
        let form = valid_form().reduce(FormAction::SetSmoking(None));
        assert_eq!(validate(&form), Err(ValidationError::MissingSmokingStatus));
    }

    #[test]
    fn test_consent_checked_last() {
        let form = valid_form().reduce(FormAction::SetConsent(false));
        assert_eq!(validation_message(&form), "You must agree to the disclaimer.");
    }

    #[test]
    fn test_field_helper() {
        let form = FormState::default();
        assert_eq!(field_helper(&form, TextField::Age), None);

        let form = form.reduce(FormAction::SetText(TextField::Age, "130".into()));
        assert_eq!(field_helper(&form, TextField::Age), Some("Age must be 1-120"));

        let form = form.reduce(FormAction::SetText(TextField::Bmi, "5".into()));
        assert_eq!(field_helper(&form, TextField::Bmi), Some("BMI must be 10-80"));

        let form = form.reduce(FormAction::SetText(TextField::Glucose, "5".into()));
        assert_eq!(field_helper(&form, TextField::Glucose), None);
    }
}
