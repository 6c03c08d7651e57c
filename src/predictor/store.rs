//! Loading the allocation model artifact from disk.

use std::fs;
use std::path::Path;

use super::RegressionModel;
use crate::error::PlanError;

/// Load and validate a model artifact.
///
/// A missing or incompatible artifact is a startup configuration error;
/// there is nothing to retry.
pub fn load_model(path: &Path) -> Result<RegressionModel, PlanError> {
    let content = fs::read_to_string(path).map_err(|e| {
        PlanError::configuration(format!(
            "cannot read model artifact {}: {}",
            path.display(),
            e
        ))
    })?;

    let model: RegressionModel = serde_json::from_str(&content).map_err(|e| {
        PlanError::configuration(format!(
            "cannot parse model artifact {}: {}",
            path.display(),
            e
        ))
    })?;

    model.validate()?;

    tracing::info!(
        path = %path.display(),
        features = model.coefficients.len(),
        "Allocation model loaded"
    );
    Ok(model)
}
