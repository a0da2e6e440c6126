//! Analysis Sources
//!
//! An analysis source turns a startup idea into an [`AnalysisResult`]. The
//! workflow controller only sees the trait, so the demo fixture and the HTTP
//! client are interchangeable:
//!
//! - [`FixtureSource`]: the canned demo report, no network
//! - [`AnalysisClient`]: `POST /api/analyze` against an analysis service

pub mod http;

pub use http::{AnalysisClient, AnalysisError};

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::config::{AnalysisConfig, SourceKind};
use crate::fixture;
use crate::models::AnalysisResult;
use crate::types::AppResult;

#[async_trait]
pub trait AnalysisSource: Send + Sync {
    async fn analyze(&self, idea: &str) -> AppResult<AnalysisResult>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// Returns the demo report for every idea
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureSource;

#[async_trait]
impl AnalysisSource for FixtureSource {
    async fn analyze(&self, _idea: &str) -> AppResult<AnalysisResult> {
        Ok(fixture::demo_analysis())
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}

#[async_trait]
impl AnalysisSource for AnalysisClient {
    async fn analyze(&self, idea: &str) -> AppResult<AnalysisResult> {
        Ok(self.analyze_startup(idea).await?)
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

/// Build the source selected by configuration
pub fn from_config(config: &AnalysisConfig) -> AppResult<Arc<dyn AnalysisSource>> {
    let source: Arc<dyn AnalysisSource> = match config.source {
        SourceKind::Fixture => Arc::new(FixtureSource),
        SourceKind::Remote => Arc::new(AnalysisClient::new(
            config.api_base_url.clone(),
            config.request_timeout(),
        )?),
    };
    info!(source = source.name(), "Analysis source ready");
    Ok(source)
}
