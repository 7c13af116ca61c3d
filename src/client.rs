//! Client for the stroke-risk prediction service.
//!
//! Two endpoints are used: `POST /api/predict` for a prediction and
//! `GET /` as a liveness probe.

use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;

use crate::adapters::ReqwestHttpClient;
use crate::config::AppConfig;
use crate::domain::{PredictRequest, PredictionResult};
use crate::error::PredictionError;
use crate::traits::{json_headers, Headers, HttpClient, HttpError};

/// Outcome of a health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    /// Probe not run yet, or still in flight
    Unknown,
    Online { response_time_ms: u64 },
    Offline,
}

#[derive(Debug, Deserialize)]
struct HealthBody {
    status: String,
}

/// Client for the prediction service. Cheap to clone.
#[derive(Clone)]
pub struct PredictionClient {
    predict_url: String,
    health_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for PredictionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictionClient")
            .field("predict_url", &self.predict_url)
            .field("health_url", &self.health_url)
            .finish_non_exhaustive()
    }
}

impl PredictionClient {
    /// Client using reqwest, configured from `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self, HttpError> {
        let http = ReqwestHttpClient::with_timeout(config.request_timeout)?;
        Ok(Self::with_http(config, Arc::new(http)))
    }

    /// Client using any [`HttpClient`] implementation.
    pub fn with_http(config: &AppConfig, http: Arc<dyn HttpClient>) -> Self {
        Self {
            predict_url: config.predict_url(),
            health_url: config.health_url(),
            http,
        }
    }

    pub fn predict_url(&self) -> &str {
        &self.predict_url
    }

    /// Post `request` and parse the prediction.
    ///
    /// Any non-2xx status is an error, as is a 2xx body that does not parse.
    pub async fn predict(
        &self,
        request: &PredictRequest,
    ) -> Result<PredictionResult, PredictionError> {
        let body = serde_json::to_string(request).map_err(PredictionError::Encode)?;

        let started = Instant::now();
        let response = self
            .http
            .post(&self.predict_url, &body, &json_headers())
            .await?;
        tracing::debug!(
            status = response.status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "prediction response received"
        );

        if !response.is_success() {
            return Err(PredictionError::Status {
                status: response.status,
                body_len: response.body.len(),
            });
        }

        response.json().map_err(PredictionError::Decode)
    }

    /// Probe `GET /` and report whether the service answered `{"status":"ok"}`.
    pub async fn health_check(&self) -> ServiceStatus {
        let started = Instant::now();
        let status = match self.http.get(&self.health_url, &Headers::new()).await {
            Ok(response) if response.is_success() => match response.json::<HealthBody>() {
                Ok(body) if body.status == "ok" => ServiceStatus::Online {
                    response_time_ms: started.elapsed().as_millis() as u64,
                },
                _ => ServiceStatus::Offline,
            },
            Ok(response) => {
                tracing::warn!(status = response.status, "health probe returned non-2xx");
                ServiceStatus::Offline
            }
            Err(err) => {
                tracing::warn!(error = %err, "health probe failed");
                ServiceStatus::Offline
            }
        };
        tracing::info!(?status, url = %self.health_url, "health probe finished");
        status
    }
}
