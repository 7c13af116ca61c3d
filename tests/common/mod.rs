//! Common test utilities for integration tests.
//!
//! Form fixtures, canned service responses, and helpers that wire a
//! [`PredictionClient`] to either a mock HTTP client or a wiremock server.
//!
//! # Example
//!
//! ```ignore
//! use common::{valid_form, TestAppBuilder};
//!
//! let app = TestAppBuilder::new().with_form(valid_form()).build();
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

use stroke_risk::app::App;
use stroke_risk::client::PredictionClient;
use stroke_risk::config::AppConfig;
use stroke_risk::domain::{FormAction, FormState, PredictionResult, TextField};

/// A form that passes every validation rule.
pub fn valid_form() -> FormState {
    FormState::default()
        .reduce(FormAction::SetText(TextField::Age, "67".into()))
        .reduce(FormAction::SetText(TextField::Bmi, "36.6".into()))
        .reduce(FormAction::SetConsent(true))
}

/// Service body for a high-risk prediction with a model breakdown.
pub fn high_risk_body() -> serde_json::Value {
    serde_json::json!({
        "prediction": 1,
        "probability": 82.3,
        "model_votes": {"knn": 1.0, "rf": 1.0, "lr": 0.0},
        "model_probs": {"knn": 80.0, "rf": 85.26, "lr": 45.1}
    })
}

/// Service body for a low-risk prediction without a breakdown.
pub fn low_risk_body() -> serde_json::Value {
    serde_json::json!({"prediction": 0, "probability": 4.5})
}

pub fn low_risk_result() -> PredictionResult {
    PredictionResult {
        probability: Some(4.5),
        probability_str: None,
        prediction: 0,
        model_votes: None,
        model_probs: None,
    }
}

/// Client talking to a real HTTP server at `base_url` (a wiremock URI).
pub fn client_for(base_url: &str) -> PredictionClient {
    let config = AppConfig::default().with_base_url(base_url);
    PredictionClient::from_config(&config).expect("reqwest client")
}

/// Client backed by `mock`.
pub fn mock_client(mock: MockHttpClient) -> PredictionClient {
    PredictionClient::with_http(&AppConfig::default(), Arc::new(mock))
}

/// In-memory log sink for asserting on what would reach the log file.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Builder for creating test App instances with various configurations.
#[derive(Default)]
pub struct TestAppBuilder {
    form: Option<FormState>,
    http: Option<MockHttpClient>,
    size: Option<(u16, u16)>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from `form` instead of the defaults.
    pub fn with_form(mut self, form: FormState) -> Self {
        self.form = Some(form);
        self
    }

    /// Answer requests with `mock`.
    pub fn with_http(mut self, mock: MockHttpClient) -> Self {
        self.http = Some(mock);
        self
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.size = Some((width, height));
        self
    }

    pub fn build(self) -> App {
        let mock = self.http.unwrap_or_default();
        let mut app = App::new(mock_client(mock));
        if let Some(form) = self.form {
            app.form = form;
        }
        if let Some((width, height)) = self.size {
            app.update_terminal_dimensions(width, height);
        }
        app
    }
}

/// Helper function to create a default test app.
pub fn test_app() -> App {
    TestAppBuilder::new().build()
}
