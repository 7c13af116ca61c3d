//! Form state and the reducer that updates it.
//!
//! `FormState` is an immutable record: every edit goes through
//! [`FormState::reduce`], which takes an action and returns the next state.
//! Validation and payload construction read from this single record.

use super::options::{Gender, ResidenceType, SmokingStatus, WorkType};

/// Maximum number of characters accepted for the age field.
pub const AGE_MAX_LEN: usize = 3;

/// Free-text numeric fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Age,
    Bmi,
    Glucose,
}

impl TextField {
    pub fn label(&self) -> &'static str {
        match self {
            TextField::Age => "Age",
            TextField::Bmi => "BMI",
            TextField::Glucose => "Avg. Glucose Level (optional)",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            TextField::Age => "Years (1-120)",
            TextField::Bmi => "e.g. 23.4",
            TextField::Glucose => "80 - 200",
        }
    }

    /// Character cap, if the field has one. Only age is capped.
    pub fn max_len(&self) -> Option<usize> {
        match self {
            TextField::Age => Some(AGE_MAX_LEN),
            TextField::Bmi | TextField::Glucose => None,
        }
    }
}

/// Everything the user has entered on the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub gender: Gender,
    pub age: String,
    pub bmi: String,
    pub hypertension: bool,
    pub heart_disease: bool,
    pub ever_married: bool,
    pub work_type: WorkType,
    pub residence_type: ResidenceType,
    pub avg_glucose_level: String,
    pub smoking_status: Option<SmokingStatus>,
    pub consent: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            gender: Gender::Male,
            age: String::new(),
            bmi: String::new(),
            hypertension: false,
            heart_disease: false,
            ever_married: false,
            work_type: WorkType::Private,
            residence_type: ResidenceType::Urban,
            avg_glucose_level: String::new(),
            smoking_status: Some(SmokingStatus::NeverSmoked),
            consent: false,
        }
    }
}

/// A single edit to the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    SetGender(Gender),
    /// Replace the whole contents of a text field
    SetText(TextField, String),
    /// Append one typed character to a text field
    InsertChar(TextField, char),
    /// Remove the last character of a text field
    DeleteChar(TextField),
    SetHypertension(bool),
    SetHeartDisease(bool),
    SetEverMarried(bool),
    SetWorkType(WorkType),
    SetResidence(ResidenceType),
    SetSmoking(Option<SmokingStatus>),
    SetConsent(bool),
    ToggleConsent,
}

impl FormState {
    /// Apply `action` and return the resulting state.
    pub fn reduce(self, action: FormAction) -> FormState {
        match action {
            FormAction::SetGender(gender) => FormState { gender, ..self },
            FormAction::SetText(field, value) => self.with_text(field, value),
            FormAction::InsertChar(field, ch) => {
                if ch.is_control() {
                    return self;
                }
                let mut value = self.text(field).to_string();
                if field
                    .max_len()
                    .is_some_and(|max| value.chars().count() >= max)
                {
                    return self;
                }
                value.push(ch);
                self.with_text(field, value)
            }
            FormAction::DeleteChar(field) => {
                let mut value = self.text(field).to_string();
                value.pop();
                self.with_text(field, value)
            }
            FormAction::SetHypertension(hypertension) => FormState {
                hypertension,
                ..self
            },
            FormAction::SetHeartDisease(heart_disease) => FormState {
                heart_disease,
                ..self
            },
            FormAction::SetEverMarried(ever_married) => FormState {
                ever_married,
                ..self
            },
            FormAction::SetWorkType(work_type) => FormState { work_type, ..self },
            FormAction::SetResidence(residence_type) => FormState {
                residence_type,
                ..self
            },
            FormAction::SetSmoking(smoking_status) => FormState {
                smoking_status,
                ..self
            },
            FormAction::SetConsent(consent) => FormState { consent, ..self },
            FormAction::ToggleConsent => FormState {
                consent: !self.consent,
                ..self
            },
        }
    }

    /// Current contents of a text field.
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Age => &self.age,
            TextField::Bmi => &self.bmi,
            TextField::Glucose => &self.avg_glucose_level,
        }
    }

    fn with_text(self, field: TextField, value: String) -> FormState {
        match field {
            TextField::Age => FormState { age: value, ..self },
            TextField::Bmi => FormState { bmi: value, ..self },
            TextField::Glucose => FormState {
                avg_glucose_level: value,
                ..self
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_screen() {
        let form = FormState::default();
        assert_eq!(form.gender, Gender::Male);
        assert_eq!(form.work_type, WorkType::Private);
        assert_eq!(form.residence_type, ResidenceType::Urban);
        assert_eq!(form.smoking_status, Some(SmokingStatus::NeverSmoked));
        assert!(!form.consent);
        assert!(form.age.is_empty());
    }

    #[test]
    fn test_set_gender_leaves_other_fields() {
        let before = FormState::default().reduce(FormAction::SetText(TextField::Age, "45".into()));
        let after = before.clone().reduce(FormAction::SetGender(Gender::Female));
        assert_eq!(after.gender, Gender::Female);
        assert_eq!(after.age, "45");
        assert_eq!(FormState { gender: Gender::Male, ..after }, before);
    }

    #[test]
    fn test_insert_and_delete_chars() {
        let form = FormState::default()
            .reduce(FormAction::InsertChar(TextField::Bmi, '2'))
            .reduce(FormAction::InsertChar(TextField::Bmi, '4'))
            .reduce(FormAction::InsertChar(TextField::Bmi, '.'))
            .reduce(FormAction::InsertChar(TextField::Bmi, '5'));
        assert_eq!(form.bmi, "24.5");

        let form = form.reduce(FormAction::DeleteChar(TextField::Bmi));
        assert_eq!(form.bmi, "24.");
    }

    #[test]
    fn test_age_is_capped_at_three_chars() {
        let mut form = FormState::default();
        for ch in "1234".chars() {
            form = form.reduce(FormAction::InsertChar(TextField::Age, ch));
        }
        assert_eq!(form.age, "123");
    }

    #[test]
    fn test_control_chars_are_ignored() {
        let form = FormState::default().reduce(FormAction::InsertChar(TextField::Age, '\n'));
        assert!(form.age.is_empty());
    }

    #[test]
    fn test_delete_on_empty_is_noop() {
        let form = FormState::default().reduce(FormAction::DeleteChar(TextField::Glucose));
        assert_eq!(form, FormState::default());
    }

    #[test]
    fn test_toggle_consent() {
        let form = FormState::default().reduce(FormAction::ToggleConsent);
        assert!(form.consent);
        let form = form.reduce(FormAction::ToggleConsent);
        assert!(!form.consent);
    }

    #[test]
    fn test_bmi_and_glucose_are_uncapped() {
        let mut form = FormState::default();
        for ch in "24.56789".chars() {
            form = form.reduce(FormAction::InsertChar(TextField::Bmi, ch));
            form = form.reduce(FormAction::InsertChar(TextField::Glucose, ch));
        }
        assert_eq!(form.bmi, "24.56789");
        assert_eq!(form.avg_glucose_level, "24.56789");
    }
}
