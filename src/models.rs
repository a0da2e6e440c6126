use std::sync::Arc;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::config::Config;
use crate::source::AnalysisSource;
use crate::types::{AppError, AppResult};

/// Shared state for the demo HTTP service
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub source: Arc<dyn AnalysisSource>,
}

// Analysis result, wire shape of POST /api/analyze.
// Sections default when absent so that the `{"error": "..."}` fallbacks the
// analysis backend emits for unparseable agent output still decode and can be
// reported instead of failing as a transport error.

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default)]
    pub market_research: MarketResearch,
    #[serde(default)]
    pub team_resources: Vec<TeamResource>,
    #[serde(default)]
    pub swot_analysis: SwotAnalysis,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketResearch {
    pub market_size: MarketSize,
    pub competitors: Vec<Competitor>,
    pub trends: Vec<String>,
    pub sources: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketSize {
    pub value: String,
    pub year: i32,
    pub cagr: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Competitor {
    pub name: String,
    pub description: String,
    pub strengths: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamResource {
    pub role: String,
    pub description: String,
    pub key_skills: Vec<String>,
    pub estimated_salary: String,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Hiring priority of a team role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SwotAnalysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResult {
    /// Reject results where any section carries an error marker instead of data,
    /// or where no section came back at all
    pub fn validate(&self) -> AppResult<()> {
        if let Some(error) = &self.market_research.error {
            return Err(AppError::InvalidResult(error.clone()));
        }
        if let Some(error) = self.team_resources.iter().find_map(|r| r.error.as_ref()) {
            return Err(AppError::InvalidResult(error.clone()));
        }
        if let Some(error) = &self.swot_analysis.error {
            return Err(AppError::InvalidResult(error.clone()));
        }
        if self.is_empty() {
            return Err(AppError::InvalidResult("no analysis sections returned".into()));
        }
        Ok(())
    }

    /// True when every section is absent or blank
    pub fn is_empty(&self) -> bool {
        self.market_research == MarketResearch::default()
            && self.team_resources.is_empty()
            && self.swot_analysis == SwotAnalysis::default()
    }
}

// API Request/Response types

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzeRequest {
    #[validate(custom(function = "not_blank"))]
    pub idea: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("Please enter a startup idea to analyze".into());
        return Err(error);
    }
    Ok(())
}

/// Error body returned by the analysis service on non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub service: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_camel_case_wire_shape() {
        let json = r#"{
            "marketResearch": {
                "marketSize": {"value": "$1B", "year": 2024, "cagr": "5%"},
                "competitors": [{"name": "A", "description": "d", "strengths": ["s"]}],
                "trends": ["t"],
                "sources": ["src"]
            },
            "teamResources": [{
                "role": "CTO",
                "description": "Builds things",
                "keySkills": ["Rust"],
                "estimatedSalary": "$100,000",
                "priority": "Low"
            }],
            "swotAnalysis": {"strengths": ["a"], "weaknesses": [], "opportunities": [], "threats": []}
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.market_research.market_size.year, 2024);
        assert_eq!(result.team_resources[0].key_skills, vec!["Rust".to_string()]);
        assert_eq!(result.team_resources[0].priority, Priority::Low);
        assert!(result.validate().is_ok());
    }

    #[test]
    fn test_section_error_fails_validation() {
        let json = r#"{
            "marketResearch": {"error": "Could not parse market research: bad json"},
            "teamResources": [{"error": "Could not parse team resources: bad json"}],
            "swotAnalysis": {"error": "Could not parse SWOT analysis: bad json"}
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        let err = result.validate().unwrap_err();
        assert!(err.to_string().contains("Could not parse market research"));
    }

    #[test]
    fn test_body_without_sections_fails_validation() {
        for json in ["{}", r#"{"foo": 1}"#] {
            let result: AnalysisResult = serde_json::from_str(json).unwrap();
            assert!(result.is_empty());
            let err = result.validate().unwrap_err();
            assert_eq!(err.to_string(), "Invalid analysis result: no analysis sections returned");
        }

        let partial: AnalysisResult =
            serde_json::from_str(r#"{"swotAnalysis": {"strengths": ["Loyal customers"]}}"#).unwrap();
        assert!(partial.validate().is_ok());
    }

    #[test]
    fn test_blank_idea_rejected() {
        let request = AnalyzeRequest { idea: "   ".to_string() };
        assert!(request.validate().is_err());

        let request = AnalyzeRequest { idea: "cat food delivery".to_string() };
        assert!(request.validate().is_ok());
    }
}
