//! Splitting the day's study hours between focus work and review.

use serde::Serialize;

use crate::inputs::StudyInputs;

/// How the day's hours are divided, plus the exam-proximity flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AllocationResult {
    pub focus_hours: f32,
    pub review_hours: f32,
    pub urgency: bool,
}

/// Round to one decimal place, the granularity shown to the user.
fn round1(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// Split the day's hours according to the model's predicted focus fraction.
///
/// The fraction is clamped to [0, 1] before use so a miscalibrated model can
/// never produce negative review time; a clamp is logged with the raw value.
pub fn allocate(
    inputs: &StudyInputs,
    prediction: f32,
    urgency_threshold_days: u32,
) -> AllocationResult {
    let fraction = prediction.clamp(0.0, 1.0);
    if fraction != prediction {
        tracing::warn!(
            prediction = prediction,
            clamped = fraction,
            "Model predicted a focus fraction outside [0, 1]"
        );
    }

    let focus_hours = round1(inputs.daily_hours * fraction);
    let review_hours = round1(inputs.daily_hours - focus_hours);

    AllocationResult {
        focus_hours,
        review_hours,
        urgency: inputs.days_to_exam <= urgency_threshold_days,
    }
}
