//! HTTP client for the remote loan decision service
//!
//! The service accepts a single JSON create-request call and answers with a
//! plain-text decision message on both the success and the rejection path.

use super::traits::LoanServiceTrait;
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Default loan service endpoint
const DEFAULT_ENDPOINT: &str = "https://localhost:5001/api/loan";

/// Message surfaced when the service fails without a usable explanation
pub const FALLBACK_FAILURE_MESSAGE: &str = "Unknown error";

/// Loan application payload.
///
/// Amounts travel as the raw strings the user typed; the service owns all
/// numeric interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoanApplication {
    #[serde(rename = "type")]
    pub person_type: String,
    pub document: String,
    pub name: String,
    #[serde(rename = "currentDebt")]
    pub current_debt: String,
    #[serde(rename = "requestedLoan")]
    pub requested_loan: String,
}

/// Failure of a loan service call
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service answered with an error body
    #[error("loan request rejected: {0}")]
    Rejected(String),
    /// The service could not be reached or returned no usable body
    #[error("loan service unavailable: {0}")]
    Unavailable(String),
}

impl ServiceError {
    /// Message to surface on the form.
    ///
    /// Rejections carry the server's own wording; an empty rejection body
    /// or an unreachable service falls back to a fixed message.
    pub fn display_message(&self) -> String {
        match self {
            ServiceError::Rejected(message) if !message.trim().is_empty() => message.clone(),
            _ => FALLBACK_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Client for the remote loan decision service
pub struct LoanClient {
    http: reqwest::Client,
    endpoint: String,
}

impl LoanClient {
    /// Create a client against the configured endpoint.
    ///
    /// `LOAN_SERVICE_URL` overrides the user config, which overrides the
    /// compiled default.
    pub fn new(configured: Option<String>) -> Self {
        let endpoint = std::env::var("LOAN_SERVICE_URL")
            .ok()
            .or(configured)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl LoanServiceTrait for LoanClient {
    async fn request_loan(&self, application: LoanApplication) -> Result<String, ServiceError> {
        tracing::debug!(endpoint = %self.endpoint, "submitting loan application");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&application)
            .send()
            .await
            .map_err(|e| ServiceError::Unavailable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::Unavailable(e.to_string()))?;

        if status.is_success() {
            tracing::info!("loan application accepted");
            Ok(body)
        } else if body.trim().is_empty() {
            tracing::warn!(%status, "loan service answered with an empty error body");
            Err(ServiceError::Unavailable(format!("status {status}")))
        } else {
            tracing::warn!(%status, "loan application rejected");
            Err(ServiceError::Rejected(body))
        }
    }
}
