//! Wire types for the prediction service and the rules for presenting a result.

use serde::{Deserialize, Serialize};

use super::form::FormState;
use super::options::{Gender, ResidenceType, SmokingStatus, WorkType};
use super::validation::{self, ValidationError};

/// Fallback shown whenever no usable probability is available.
pub const CANNOT_CALCULATE: &str = "Cannot Calculate";

pub const HIGH_RISK_ADVICE: &str = "Please discuss with your doctor and focus on improving modifiable risk factors such as blood pressure, cholesterol, glucose control, exercise, and quitting smoking if applicable.";

pub const LOW_RISK_ADVICE: &str = "Continue healthy lifestyle habits and regular checkups. This estimate is not a substitute for a doctor's assessment.";

/// `ever_married` is the one boolean the service expects as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum YesNo {
    Yes,
    No,
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }
}

/// JSON body posted to the prediction endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictRequest {
    pub gender: Gender,
    pub age: f64,
    pub hypertension: u8,
    pub heart_disease: u8,
    pub ever_married: YesNo,
    pub work_type: WorkType,
    #[serde(rename = "Residence_type")]
    pub residence_type: ResidenceType,
    pub avg_glucose_level: Option<f64>,
    pub bmi: f64,
    pub smoking_status: SmokingStatus,
}

impl PredictRequest {
    /// Build the request body from a form, validating it on the way.
    ///
    /// Returns the same error [`validation::validate`] would, so a request is
    /// only ever built from a form that passes every rule.
    pub fn from_form(form: &FormState) -> Result<Self, ValidationError> {
        validation::validate(form)?;

        let age = validation::parse_age(&form.age).ok_or(ValidationError::InvalidAge)?;
        let bmi = validation::parse_bmi(&form.bmi).ok_or(ValidationError::InvalidBmi)?;
        let avg_glucose_level = validation::parse_glucose(&form.avg_glucose_level)?;
        let smoking_status = form
            .smoking_status
            .ok_or(ValidationError::MissingSmokingStatus)?;

        Ok(Self {
            gender: form.gender,
            age,
            hypertension: u8::from(form.hypertension),
            heart_disease: u8::from(form.heart_disease),
            ever_married: form.ever_married.into(),
            work_type: form.work_type,
            residence_type: form.residence_type,
            avg_glucose_level,
            bmi,
            smoking_status,
        })
    }
}

/// Per-model numbers reported by the ensemble.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelBreakdown {
    pub knn: f64,
    pub rf: f64,
    pub lr: f64,
}

/// Response body of the prediction endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Risk as a percentage in [0, 100]
    #[serde(default)]
    pub probability: Option<f64>,
    /// Preformatted probability, preferred over `probability` when present
    #[serde(default)]
    pub probability_str: Option<String>,
    /// 1 for high risk, 0 for low risk
    pub prediction: i64,
    #[serde(default)]
    pub model_votes: Option<ModelBreakdown>,
    #[serde(default)]
    pub model_probs: Option<ModelBreakdown>,
}

impl PredictionResult {
    pub fn is_high_risk(&self) -> bool {
        self.prediction == 1
    }

    pub fn risk_label(&self) -> &'static str {
        if self.is_high_risk() {
            "High Risk"
        } else {
            "Low Risk"
        }
    }

    pub fn advice(&self) -> &'static str {
        if self.is_high_risk() {
            HIGH_RISK_ADVICE
        } else {
            LOW_RISK_ADVICE
        }
    }

    /// "Model Avg: KNN x.x%, RF x.x%, LR x.x%" when the breakdown is present.
    pub fn model_summary(&self) -> Option<String> {
        self.model_probs.map(|probs| {
            format!(
                "Model Avg: KNN {:.1}%, RF {:.1}%, LR {:.1}%",
                probs.knn, probs.rf, probs.lr
            )
        })
    }
}

/// What the probability slot of the result card shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbabilityDisplay {
    /// No result yet; render a loading indicator
    Loading,
    Text(String),
}

impl ProbabilityDisplay {
    /// The text to show, or `None` while loading.
    pub fn text(&self) -> Option<&str> {
        match self {
            ProbabilityDisplay::Loading => None,
            ProbabilityDisplay::Text(text) => Some(text),
        }
    }
}

/// Pick the probability text for a result.
pub fn display_probability(result: Option<&PredictionResult>) -> ProbabilityDisplay {
    let Some(result) = result else {
        return ProbabilityDisplay::Loading;
    };

    if let Some(text) = &result.probability_str {
        if !text.trim().is_empty() {
            return ProbabilityDisplay::Text(text.clone());
        }
    }

    match result.probability {
        Some(p) if p.is_finite() && (0.0..=100.0).contains(&p) => {
            ProbabilityDisplay::Text(format!("{:.2}%", p))
        }
        _ => ProbabilityDisplay::Text(CANNOT_CALCULATE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::{FormAction, TextField};

    fn result(probability: Option<f64>, probability_str: Option<&str>) -> PredictionResult {
        PredictionResult {
            probability,
            probability_str: probability_str.map(String::from),
            prediction: 0,
            model_votes: None,
            model_probs: None,
        }
    }

    #[test]
    fn test_display_prefers_preformatted_string() {
        let r = result(Some(50.0), Some("12.34%"));
        assert_eq!(
            display_probability(Some(&r)),
            ProbabilityDisplay::Text("12.34%".to_string())
        );
    }

    #[test]
    fn test_display_formats_two_decimals() {
        let r = result(Some(7.5), None);
        assert_eq!(display_probability(Some(&r)).text(), Some("7.50%"));
    }

    #[test]
    fn test_display_blank_string_falls_through() {
        let r = result(Some(82.3), Some("   "));
        assert_eq!(display_probability(Some(&r)).text(), Some("82.30%"));
    }

    #[test]
    fn test_display_fallbacks() {
        for r in [
            result(Some(f64::NAN), None),
            result(None, None),
            result(Some(100.5), None),
            result(Some(-1.0), None),
            result(Some(f64::INFINITY), None),
        ] {
            assert_eq!(display_probability(Some(&r)).text(), Some(CANNOT_CALCULATE));
        }
    }

    #[test]
    fn test_display_bounds_inclusive() {
        assert_eq!(display_probability(Some(&result(Some(0.0), None))).text(), Some("0.00%"));
        assert_eq!(
            display_probability(Some(&result(Some(100.0), None))).text(),
            Some("100.00%")
        );
    }

    #[test]
    fn test_display_loading_without_result() {
        assert_eq!(display_probability(None), ProbabilityDisplay::Loading);
        assert_eq!(ProbabilityDisplay::Loading.text(), None);
    }

    #[test]
    fn test_risk_label_and_advice() {
        let mut r = result(Some(10.0), None);
        assert_eq!(r.risk_label(), "Low Risk");
        assert_eq!(r.advice(), LOW_RISK_ADVICE);
        r.prediction = 1;
        assert_eq!(r.risk_label(), "High Risk");
        assert_eq!(r.advice(), HIGH_RISK_ADVICE);
    }

    #[test]
    fn test_model_summary_rounds_to_one_decimal() {
        let mut r = result(Some(10.0), None);
        assert_eq!(r.model_summary(), None);
        r.model_probs = Some(ModelBreakdown {
            knn: 12.34,
            rf: 4.0,
            lr: 8.96,
        });
        assert_eq!(
            r.model_summary().as_deref(),
            Some("Model Avg: KNN 12.3%, RF 4.0%, LR 9.0%")
        );
    }

    #[test]
    fn test_deserialize_full_response() {
        let body = r#"{
            "prediction": 1,
            "probability": 64.21,
            "probability_str": "64.21%",
            "model_votes": {"knn": 1, "rf": 1, "lr": 0},
            "model_probs": {"knn": 80.0, "rf": 61.5, "lr": 51.13}
        }"#;
        let r: PredictionResult = serde_json::from_str(body).unwrap();
        assert!(r.is_high_risk());
        assert_eq!(r.probability_str.as_deref(), Some("64.21%"));
        assert_eq!(r.model_votes.unwrap().lr, 0.0);
    }

    #[test]
    fn test_deserialize_minimal_response() {
        let r: PredictionResult = serde_json::from_str(r#"{"prediction":0}"#).unwrap();
        assert_eq!(r.probability, None);
        assert!(!r.is_high_risk());
    }

    #[test]
    fn test_request_wire_shape() {
        let form = FormState::default()
            .reduce(FormAction::SetText(TextField::Age, "45".into()))
            .reduce(FormAction::SetText(TextField::Bmi, "24.5".into()))
            .reduce(FormAction::SetHypertension(true))
            .reduce(FormAction::SetConsent(true));
        let request = PredictRequest::from_form(&form).unwrap();
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "gender": "Male",
                "age": 45.0,
                "hypertension": 1,
                "heart_disease": 0,
                "ever_married": "No",
                "work_type": "Private",
                "Residence_type": "Urban",
                "avg_glucose_level": null,
                "bmi": 24.5,
                "smoking_status": "never smoked"
            })
        );
    }

    #[test]
    fn test_request_rejects_invalid_form() {
        let form = FormState::default();
        assert_eq!(
            PredictRequest::from_form(&form),
            Err(ValidationError::InvalidAge)
        );
    }
}
