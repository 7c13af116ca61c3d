//! Form validation through the public API.
//!
//! Rules are checked in a fixed order: age, BMI, glucose, smoking status,
//! consent. Only the first failure is reported.

mod common;

use common::valid_form;
use stroke_risk::domain::validation::{field_helper, AGE_RANGE, BMI_RANGE, GLUCOSE_RANGE};
use stroke_risk::domain::{
    validate, validation_message, FormAction, FormState, PredictRequest, TextField,
    ValidationError,
};

fn with_text(form: FormState, field: TextField, value: &str) -> FormState {
    form.reduce(FormAction::SetText(field, value.to_string()))
}

#[test]
fn test_valid_form_passes() {
    assert_eq!(validate(&valid_form()), Ok(()));
    assert_eq!(validation_message(&valid_form()), "");
}

#[test]
fn test_rules_report_first_failure_in_order() {
    // Everything wrong: age wins
    let form = FormState::default().reduce(FormAction::SetSmoking(None));
    assert_eq!(validate(&form), Err(ValidationError::InvalidAge));

    let form = with_text(form, TextField::Age, "50");
    assert_eq!(validate(&form), Err(ValidationError::InvalidBmi));

    let form = with_text(form, TextField::Bmi, "22");
    assert_eq!(validate(&form), Err(ValidationError::MissingSmokingStatus));

    let form = with_text(form, TextField::Glucose, "20");
    assert_eq!(validate(&form), Err(ValidationError::InvalidGlucose));

    let form = with_text(form, TextField::Glucose, "")
        .reduce(FormAction::SetSmoking(Some(Default::default())));
    assert_eq!(validate(&form), Err(ValidationError::ConsentRequired));

    let form = form.reduce(FormAction::SetConsent(true));
    assert_eq!(validate(&form), Ok(()));
}

#[test]
fn test_messages_match_rules() {
    let cases = [
        (ValidationError::InvalidAge, "Enter a valid age (1-120)."),
        (ValidationError::InvalidBmi, "Enter a valid BMI (10-80)."),
        (
            ValidationError::InvalidGlucose,
            "Glucose must be between 30-300 (optional)",
        ),
        (
            ValidationError::MissingSmokingStatus,
            "Please select your smoking status.",
        ),
        (
            ValidationError::ConsentRequired,
            "You must agree to the disclaimer.",
        ),
    ];
    for (err, message) in cases {
        assert_eq!(err.to_string(), message);
    }
}

#[test]
fn test_range_bounds_are_inclusive() {
    let form = valid_form();
    for (field, (min, max)) in [
        (TextField::Age, AGE_RANGE),
        (TextField::Bmi, BMI_RANGE),
        (TextField::Glucose, GLUCOSE_RANGE),
    ] {
        let low = with_text(form.clone(), field, &format!("{}", min));
        let high = with_text(form.clone(), field, &format!("{}", max));
        assert_eq!(validate(&low), Ok(()), "{:?} at {}", field, min);
        assert_eq!(validate(&high), Ok(()), "{:?} at {}", field, max);
    }
}

#[test]
fn test_out_of_range_values_rejected() {
    let form = valid_form();
    assert_eq!(
        validate(&with_text(form.clone(), TextField::Age, "0")),
        Err(ValidationError::InvalidAge)
    );
    assert_eq!(
        validate(&with_text(form.clone(), TextField::Bmi, "80.1")),
        Err(ValidationError::InvalidBmi)
    );
    assert_eq!(
        validate(&with_text(form.clone(), TextField::Bmi, "9.99")),
        Err(ValidationError::InvalidBmi)
    );
    assert_eq!(
        validate(&with_text(form, TextField::Glucose, "300.5")),
        Err(ValidationError::InvalidGlucose)
    );
}

#[test]
fn test_non_numeric_text_rejected() {
    let form = valid_form();
    for bad in ["abc", "1.2.3", "-5", "."] {
        assert_eq!(
            validate(&with_text(form.clone(), TextField::Bmi, bad)),
            Err(ValidationError::InvalidBmi),
            "bmi {:?}",
            bad
        );
    }
}

#[test]
fn test_request_only_built_from_valid_form() {
    assert_eq!(
        PredictRequest::from_form(&FormState::default()),
        Err(ValidationError::InvalidAge)
    );

    let request = PredictRequest::from_form(&valid_form()).unwrap();
    assert_eq!(request.age, 67.0);
    assert_eq!(request.bmi, 36.6);
    assert_eq!(request.avg_glucose_level, None);
}

#[test]
fn test_inline_helpers_follow_field_contents() {
    let form = valid_form();
    assert_eq!(field_helper(&form, TextField::Age), None);
    assert_eq!(field_helper(&FormState::default(), TextField::Age), None);

    // Glucose only carries the static hint; the range is enforced on submit
    let bad = with_text(form, TextField::Glucose, "999");
    assert_eq!(field_helper(&bad, TextField::Glucose), None);
    assert_eq!(validate(&bad), Err(ValidationError::InvalidGlucose));
}
