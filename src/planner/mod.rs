//! The breakdown pipeline: model prediction, hour allocation, and advice.

pub mod advice;
pub mod allocation;

use serde::Serialize;

use crate::error::PlanError;
use crate::inputs::StudyInputs;
use crate::state::app::AppState;

pub use allocation::{allocate, AllocationResult};

/// Everything the breakdown report needs, computed in one pass.
#[derive(Debug, Clone, Serialize)]
pub struct StudyBreakdown {
    pub inputs: StudyInputs,
    pub allocation: AllocationResult,
    pub style_tip: &'static str,
    pub technique_tip: &'static str,
}

/// Run the full breakdown: encode, predict, allocate, look up advice.
pub fn build_breakdown(state: &AppState, inputs: &StudyInputs) -> Result<StudyBreakdown, PlanError> {
    let features = inputs.to_features();
    let prediction = state.model.predict(&features)?;
    let allocation = allocate(inputs, prediction, state.config.urgency_threshold_days);

    tracing::info!(
        prediction = prediction,
        focus_hours = allocation.focus_hours,
        review_hours = allocation.review_hours,
        urgency = allocation.urgency,
        "Breakdown computed"
    );

    Ok(StudyBreakdown {
        inputs: *inputs,
        allocation,
        style_tip: advice::style_tip(inputs.learning_style),
        technique_tip: advice::technique_tip(inputs.difficulty),
    })
}
