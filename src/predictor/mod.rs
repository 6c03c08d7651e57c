//! The allocation model: a pre-trained linear regression over the study
//! features, loaded once at startup and read-only afterwards.

pub mod store;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::inputs::{FeatureVector, FEATURE_ARITY, FEATURE_NAMES, FEATURE_SCHEMA_VERSION};

/// A trained linear regression artifact.
///
/// Predicts the fraction of daily study time to spend on the hardest
/// subject: the dot product of the encoded features with the trained
/// coefficients, plus the intercept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionModel {
    pub schema_version: u32,
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f32>,
    pub intercept: f32,
}

impl RegressionModel {
    /// Check the artifact against the compiled-in feature schema.
    ///
    /// An artifact trained against a different encoding would score garbage
    /// without any visible failure, so every mismatch is fatal here.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.schema_version != FEATURE_SCHEMA_VERSION {
            return Err(PlanError::configuration(format!(
                "model artifact uses feature schema v{}, this build expects v{}",
                self.schema_version, FEATURE_SCHEMA_VERSION
            )));
        }
        if self.coefficients.len() != FEATURE_ARITY {
            return Err(PlanError::configuration(format!(
                "model artifact has {} coefficients, expected {}",
                self.coefficients.len(),
                FEATURE_ARITY
            )));
        }
        if self.feature_names != FEATURE_NAMES {
            return Err(PlanError::configuration(format!(
                "model artifact feature order {:?} does not match expected {:?}",
                self.feature_names, FEATURE_NAMES
            )));
        }
        if self.coefficients.iter().any(|c| !c.is_finite()) || !self.intercept.is_finite() {
            return Err(PlanError::configuration(
                "model artifact contains non-finite weights",
            ));
        }
        Ok(())
    }

    /// Score one feature vector. Deterministic, no side effects.
    ///
    /// Non-finite features are rejected loudly instead of propagating NaN
    /// into the allocation.
    pub fn predict(&self, features: &FeatureVector) -> Result<f32, PlanError> {
        if features.as_slice().iter().any(|v| !v.is_finite()) {
            return Err(PlanError::prediction(format!(
                "feature vector contains a non-finite value: {features:?}"
            )));
        }
        let dot: f32 = self
            .coefficients
            .iter()
            .zip(features.as_slice())
            .map(|(coefficient, value)| coefficient * value)
            .sum();
        Ok(dot + self.intercept)
    }
}
