use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PlanError;

/// Environment variable holding the generative-service credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

const CONFIG_ENV: &str = "SMARTSTUDY_CONFIG";
const CONFIG_FILENAME: &str = "planner.toml";

/// Planner settings, loaded once at startup from `planner.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Days-to-exam at or below which the plan is flagged urgent.
    pub urgency_threshold_days: u32,
    /// Heading used on the breakdown report.
    pub report_title: String,
    /// Path to the trained allocation model artifact.
    pub model_path: PathBuf,
    pub gemini: GeminiConfig,
}

/// Connection settings for the generative-language API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            urgency_threshold_days: 5,
            report_title: "SmartStudy Plan".to_string(),
            model_path: PathBuf::from("data/study_plan_model.json"),
            gemini: GeminiConfig::default(),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            model: "gemini-1.5-pro".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout_secs: 60,
        }
    }
}

fn default_config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    PathBuf::from(CONFIG_FILENAME)
}

impl PlannerConfig {
    /// Load configuration from `path`, or from the default location when
    /// none is given. A missing file yields the defaults; a present but
    /// unparsable file is a hard error rather than a silent fallback.
    pub fn load(path: Option<&Path>) -> Result<PlannerConfig, PlanError> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(default_config_path);

        match fs::read_to_string(&path) {
            Ok(content) => {
                let config = toml::from_str(&content).map_err(|e| {
                    PlanError::configuration(format!(
                        "failed to parse {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                tracing::info!(path = %path.display(), "Planner config loaded");
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No planner config found, using defaults");
                Ok(PlannerConfig::default())
            }
            Err(e) => Err(PlanError::configuration(format!(
                "failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

/// Generative-service credential, read from the environment at startup.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    /// Read the credential from the process environment.
    /// Absence is a fatal configuration error, surfaced before any request.
    pub fn from_env() -> Result<ApiKey, PlanError> {
        Self::from_value(std::env::var(API_KEY_ENV).ok())
    }

    /// Validate a raw credential value.
    pub fn from_value(value: Option<String>) -> Result<ApiKey, PlanError> {
        match value {
            Some(key) if !key.trim().is_empty() => Ok(ApiKey(key.trim().to_string())),
            _ => Err(PlanError::configuration(format!(
                "{API_KEY_ENV} is not set; export your API key before starting"
            ))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keep the credential out of debug output and logs.
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}
