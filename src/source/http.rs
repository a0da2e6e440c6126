//! Analysis Service Client
//!
//! Thin reqwest client for `POST {base_url}/api/analyze`.
//!
//! Error mapping:
//! - non-2xx with a JSON `detail` string: the detail is surfaced as is
//! - non-2xx with a JSON body but no usable `detail`: [`GENERIC_FAILURE`]
//! - transport failure or an undecodable body: [`AnalysisError::Connection`]

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{AnalysisResult, AnalyzeRequest};

pub const GENERIC_FAILURE: &str = "Failed to analyze startup idea";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The service answered with an error; the string is user-readable
    #[error("{0}")]
    Service(String),

    #[error("Failed to connect to analysis service")]
    Connection,
}

pub struct AnalysisClient {
    http: reqwest::Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AnalysisError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                warn!(error = %e, "Failed to build HTTP client");
                AnalysisError::Connection
            })?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/api/analyze", self.base_url)
    }

    /// Request an analysis of `idea`
    pub async fn analyze_startup(&self, idea: &str) -> Result<AnalysisResult, AnalysisError> {
        let url = self.endpoint();
        debug!(%url, idea_len = idea.len(), "Sending analysis request");

        let response = self
            .http
            .post(&url)
            .json(&AnalyzeRequest { idea: idea.to_string() })
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, %url, "Analysis request failed");
                AnalysisError::Connection
            })?;

        let status = response.status();
        if !status.is_success() {
            let body: serde_json::Value = response.json().await.map_err(|e| {
                warn!(error = %e, %status, "Unreadable error body from analysis service");
                AnalysisError::Connection
            })?;
            let detail = body
                .get("detail")
                .and_then(|d| d.as_str())
                .filter(|d| !d.is_empty())
                .unwrap_or(GENERIC_FAILURE)
                .to_string();
            warn!(%status, %detail, "Analysis service returned an error");
            return Err(AnalysisError::Service(detail));
        }

        let result = response.json::<AnalysisResult>().await.map_err(|e| {
            warn!(error = %e, "Failed to decode analysis result");
            AnalysisError::Connection
        })?;

        info!(
            competitors = result.market_research.competitors.len(),
            roles = result.team_resources.len(),
            "Analysis received"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture;
    use mockito::Matcher;

    fn client(url: &str) -> AnalysisClient {
        AnalysisClient::new(url, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_success_decodes_result() {
        let mut server = mockito::Server::new_async().await;
        let body = serde_json::to_string(&fixture::demo_analysis()).unwrap();
        let mock = server
            .mock("POST", "/api/analyze")
            .match_body(Matcher::Json(serde_json::json!({ "idea": "cat food delivery" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let result = client(&server.url())
            .analyze_startup("cat food delivery")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result, fixture::demo_analysis());
    }

    #[tokio::test]
    async fn test_error_detail_is_surfaced() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/analyze")
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail": "Gemini API key not found"}"#)
            .create_async()
            .await;

        let err = client(&server.url()).analyze_startup("x").await.unwrap_err();
        assert_eq!(err, AnalysisError::Service("Gemini API key not found".to_string()));
    }

    #[tokio::test]
    async fn test_error_without_detail_uses_generic_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/analyze")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "nope"}"#)
            .create_async()
            .await;

        let err = client(&server.url()).analyze_startup("x").await.unwrap_err();
        assert_eq!(err.to_string(), GENERIC_FAILURE);
    }

    #[tokio::test]
    async fn test_unreachable_service_is_connection_error() {
        let err = client("http://127.0.0.1:1").analyze_startup("x").await.unwrap_err();
        assert_eq!(err, AnalysisError::Connection);
        assert_eq!(err.to_string(), "Failed to connect to analysis service");
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        assert_eq!(
            client("http://localhost:8000/").endpoint(),
            "http://localhost:8000/api/analyze"
        );
    }
}
