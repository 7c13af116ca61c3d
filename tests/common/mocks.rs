//! Mock implementations for test fixtures.
//!
//! Re-exports the mock HTTP client from `stroke_risk::adapters::mock` and
//! adds canned configurations for the prediction service.

pub use stroke_risk::adapters::mock::http::MockResponse;
pub use stroke_risk::adapters::mock::{MockHttpClient, RecordedRequest};
pub use stroke_risk::traits::{HttpClient, HttpError, Response};

use stroke_risk::config::AppConfig;

/// Configuration for setting up mock HTTP responses.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Answer the prediction endpoint with `status` and `body`.
    pub fn with_prediction(self, status: u16, body: serde_json::Value) -> Self {
        self.client.set_response(
            &AppConfig::default().predict_url(),
            MockResponse::json(status, body),
        );
        self
    }

    /// Fail the prediction endpoint at the transport level.
    pub fn with_prediction_error(self, error: HttpError) -> Self {
        self.client.set_response(
            &AppConfig::default().predict_url(),
            MockResponse::Error(error),
        );
        self
    }

    /// Answer the health endpoint with `{"status":"ok"}`.
    pub fn with_healthy_service(self) -> Self {
        self.client.set_response(
            &AppConfig::default().health_url(),
            MockResponse::json(200, serde_json::json!({"status": "ok"})),
        );
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}
