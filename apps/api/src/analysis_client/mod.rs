//! Analysis Client: the single point of entry for calls to the external
//! résumé analysis service.
//!
//! One-shot requests with no retry and no caching. The response body is
//! checked to be JSON and relayed verbatim as a `RawValue`, so number precision
//! and key order survive untouched.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Analysis service error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Payload accepted by the analysis service.
#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    #[serde(rename = "texto")]
    text: &'a str,
}

/// Error envelope some upstream failures carry (FastAPI-style `detail`).
#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    detail: Value,
}

/// Sends résumé text for analysis. Carried in `AppState` as `Arc<dyn Analyzer>`.
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, resume_text: &str) -> Result<Box<RawValue>, AnalysisError>;
}

#[derive(Clone)]
pub struct AnalysisClient {
    client: Client,
    endpoint: String,
}

impl AnalysisClient {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, AnalysisError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Analyzer for AnalysisClient {
    async fn analyze(&self, resume_text: &str) -> Result<Box<RawValue>, AnalysisError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&AnalyzeRequest { text: resume_text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Analysis service returned {}: {}", status, body);
            let message = serde_json::from_str::<UpstreamErrorBody>(&body)
                .map(|e| match e.detail {
                    Value::String(detail) => detail,
                    other => other.to_string(),
                })
                .unwrap_or(body);
            return Err(AnalysisError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let analysis = RawValue::from_string(body)?;

        debug!(
            "Analysis call succeeded: sent {} chars, received {} bytes",
            resume_text.chars().count(),
            analysis.get().len()
        );

        Ok(analysis)
    }
}
