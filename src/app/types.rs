//! Type definitions for the application state.
//!
//! Contains [`Focus`], the element of the screen that receives key input.

use crate::domain::{OptionField, TextField};

/// Represents which screen element has focus, in on-screen order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Gender,
    Age,
    Bmi,
    Hypertension,
    HeartDisease,
    EverMarried,
    WorkType,
    Residence,
    Smoking,
    Glucose,
    Consent,
    Submit,
    /// The result card; only reachable once a result exists
    Result,
}

const ORDER: [Focus; 13] = [
    Focus::Gender,
    Focus::Age,
    Focus::Bmi,
    Focus::Hypertension,
    Focus::HeartDisease,
    Focus::EverMarried,
    Focus::WorkType,
    Focus::Residence,
    Focus::Smoking,
    Focus::Glucose,
    Focus::Consent,
    Focus::Submit,
    Focus::Result,
];

impl Focus {
    fn position(&self) -> usize {
        ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    fn stops(has_result: bool) -> usize {
        if has_result {
            ORDER.len()
        } else {
            ORDER.len() - 1
        }
    }

    /// Next element, wrapping at the end.
    pub fn next(self, has_result: bool) -> Focus {
        let len = Self::stops(has_result);
        ORDER[(self.position() + 1) % len]
    }

    /// Previous element, wrapping at the start.
    pub fn prev(self, has_result: bool) -> Focus {
        let len = Self::stops(has_result);
        let pos = self.position().min(len - 1);
        ORDER[(pos + len - 1) % len]
    }

    pub fn option_field(&self) -> Option<OptionField> {
        match self {
            Focus::Gender => Some(OptionField::Gender),
            Focus::Hypertension => Some(OptionField::Hypertension),
            Focus::HeartDisease => Some(OptionField::HeartDisease),
            Focus::EverMarried => Some(OptionField::EverMarried),
            Focus::WorkType => Some(OptionField::WorkType),
            Focus::Residence => Some(OptionField::Residence),
            Focus::Smoking => Some(OptionField::Smoking),
            _ => None,
        }
    }

    pub fn text_field(&self) -> Option<TextField> {
        match self {
            Focus::Age => Some(TextField::Age),
            Focus::Bmi => Some(TextField::Bmi),
            Focus::Glucose => Some(TextField::Glucose),
            _ => None,
        }
    }
}
