//! The generative path: prompt construction and the remote API call.

pub mod gemini;
pub mod prompt;

use crate::error::PlanError;
use crate::inputs::StudyInputs;
use crate::state::app::AppState;

/// Ask the generative service for a free-form plan for these inputs.
pub async fn generate_full_plan(
    state: &AppState,
    inputs: &StudyInputs,
) -> Result<String, PlanError> {
    let prompt = prompt::build_plan_prompt(inputs);
    state.gemini.generate(&prompt).await
}
