//! HTTP client for communicating with the scoring service
//!
//! The service exposes `GET /` as a health check and `POST /predict`, which
//! takes a JSON loan application and answers with a decision.

use super::models::ErrorBody;
use super::traits::ScoringClientTrait;
use super::{
    LoanApplication, PredictionResponse, ScoringError, DEFAULT_SCORING_URL,
    GENERIC_FAILURE_MESSAGE,
};
use crate::config::TuiConfig;
use async_trait::async_trait;
use std::time::Duration;

const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for communicating with the scoring service
#[derive(Clone)]
pub struct ScoringClient {
    client: reqwest::Client,
    base_url: String,
}

impl ScoringClient {
    /// Create a client for the given base URL with default timeouts
    pub fn new(base_url: impl Into<String>) -> Result<Self, ScoringError> {
        Self::with_timeouts(
            base_url,
            Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    /// Create a client from user configuration.
    ///
    /// `APPROVE_SCORING_URL` wins over the config file, which wins over the
    /// built-in default.
    pub fn from_config(config: &TuiConfig) -> Result<Self, ScoringError> {
        let base_url = std::env::var("APPROVE_SCORING_URL")
            .ok()
            .or_else(|| config.scoring_url.clone())
            .unwrap_or_else(|| DEFAULT_SCORING_URL.to_string());

        Self::with_timeouts(
            base_url,
            Duration::from_secs(
                config
                    .connect_timeout_secs
                    .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS),
            ),
            Duration::from_secs(
                config
                    .request_timeout_secs
                    .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            ),
        )
    }

    fn with_timeouts(
        base_url: impl Into<String>,
        connect: Duration,
        request: Duration,
    ) -> Result<Self, ScoringError> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect)
            .timeout(request)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl ScoringClientTrait for ScoringClient {
    async fn check_health(&self) -> bool {
        match self.client.get(self.url("/")).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(err) => {
                tracing::debug!("Scoring service health check failed: {err}");
                false
            }
        }
    }

    async fn predict(
        &self,
        application: &LoanApplication,
    ) -> Result<PredictionResponse, ScoringError> {
        let response = self
            .client
            .post(self.url("/predict"))
            .header("Content-Type", "application/json")
            .json(application)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            // A body cut short only loses the detail
            let body = response.text().await.unwrap_or_else(|err| {
                tracing::debug!("Could not read error body: {err}");
                String::new()
            });
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message())
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
            return Err(ScoringError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ScoringError::Protocol(format!("could not read response body: {e}")))?;
        parse_success_body(&body)
    }
}

/// Parse a 2xx body. Missing fields are fine; a body that only reports an
/// error (the service does this when its model failed to load) is not.
fn parse_success_body(body: &str) -> Result<PredictionResponse, ScoringError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| ScoringError::Protocol(format!("response is not JSON: {e}")))?;

    if !value.is_object() {
        return Err(ScoringError::Protocol(
            "response is not a JSON object".to_string(),
        ));
    }

    let reported_error = value
        .get("error")
        .and_then(|e| e.as_str())
        .map(str::to_string);

    let parsed: PredictionResponse = serde_json::from_value(value)
        .map_err(|e| ScoringError::Protocol(format!("malformed decision: {e}")))?;

    match reported_error {
        Some(message) if parsed.loan_approval.is_none() => Err(ScoringError::Protocol(message)),
        _ => Ok(parsed),
    }
}
