use anyhow::{bail, Result};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub analysis: AnalysisConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".to_string(),
            cors_allowed_origins: vec![
                "http://localhost:5173".to_string(),
                "http://localhost:8080".to_string(),
            ],
        }
    }
}

/// Where analysis results come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Static demo report, no network
    Fixture,
    /// POST /api/analyze on `api_base_url`
    Remote,
}

impl std::str::FromStr for SourceKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixture" => Ok(SourceKind::Fixture),
            "remote" => Ok(SourceKind::Remote),
            other => bail!("Unknown analysis source: {}", other),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    pub api_base_url: String,
    pub source: SourceKind,
    /// Total simulated run length; one progress tick is 1/100th of it
    pub duration_ms: u64,
    pub request_timeout_secs: u64,
}

impl AnalysisConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            source: SourceKind::Fixture,
            duration_ms: 10_000,
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { dir: PathBuf::from("logs") }
    }
}

impl Config {
    /// True when a remote analysis source would call this server's own
    /// `/api/analyze`
    pub fn remote_loops_back(&self) -> bool {
        if self.analysis.source != SourceKind::Remote {
            return false;
        }
        let Ok(url) = reqwest::Url::parse(&self.analysis.api_base_url) else {
            return false;
        };
        if url.port_or_known_default() != Some(self.server.port) {
            return false;
        }
        let Some(host) = url.host_str() else {
            return false;
        };
        let host = host.trim_matches(|c| c == '[' || c == ']');
        matches!(host, "localhost" | "127.0.0.1" | "::1" | "0.0.0.0" | "::")
            || host.eq_ignore_ascii_case(&self.server.host)
    }

    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let duration_ms: u64 = env::var("ANALYSIS_DURATION_MS")
            .unwrap_or_else(|_| "10000".to_string())
            .parse()?;
        if duration_ms < 100 {
            bail!("ANALYSIS_DURATION_MS must be at least 100, got {}", duration_ms);
        }

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()?,
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                cors_allowed_origins: env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "http://localhost:5173,http://localhost:8080".to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            },
            analysis: AnalysisConfig {
                api_base_url: env::var("ANALYSIS_API_URL")
                    .unwrap_or_else(|_| "http://localhost:8000".to_string())
                    .trim_end_matches('/')
                    .to_string(),
                source: env::var("ANALYSIS_SOURCE")
                    .unwrap_or_else(|_| "fixture".to_string())
                    .parse()?,
                duration_ms,
                request_timeout_secs: env::var("ANALYSIS_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()?,
            },
            logging: LoggingConfig {
                dir: env::var("LOG_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("logs")),
            },
        })
    }
}
