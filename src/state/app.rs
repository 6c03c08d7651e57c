//! Process-wide dependencies, built once at startup.

use std::path::Path;

use crate::config::settings::{ApiKey, PlannerConfig};
use crate::error::PlanError;
use crate::pipelines::gemini::GeminiClient;
use crate::predictor::{store, RegressionModel};

/// Everything the command handlers need: configuration, the loaded
/// allocation model, and the generative-service client.
///
/// Immutable after construction and passed by reference, never reached
/// through globals, so tests can substitute any of the parts.
pub struct AppState {
    pub config: PlannerConfig,
    pub model: RegressionModel,
    pub gemini: GeminiClient,
}

impl AppState {
    /// Build the full application state.
    ///
    /// Any failure here is a configuration error and the process should
    /// exit instead of serving requests.
    pub fn init(config_path: Option<&Path>) -> Result<AppState, PlanError> {
        let config = PlannerConfig::load(config_path)?;
        let api_key = ApiKey::from_env()?;
        let gemini = GeminiClient::new(api_key, &config.gemini)?;
        let model = store::load_model(&config.model_path)?;

        tracing::info!(
            model = %gemini.model(),
            urgency_threshold_days = config.urgency_threshold_days,
            "Application state initialized"
        );
        Ok(AppState {
            config,
            model,
            gemini,
        })
    }
}
