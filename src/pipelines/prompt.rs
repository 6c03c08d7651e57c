//! Prompt construction for the generative study-plan service.

use crate::inputs::StudyInputs;

/// Render the study parameters into the instruction sent to the service.
/// Deterministic: the same inputs always produce the same prompt.
pub fn build_plan_prompt(inputs: &StudyInputs) -> String {
    format!(
        r#"You are an expert AI study planner.
Generate a personalized 1-day study plan for a student with:

- Study time: {hours} hours/day
- Subject difficulty: {difficulty}
- Exam in: {days} days
- Learning style: {style}

Structure your answer clearly:
1. Focus Time
2. Review Time
3. Strategy
4. Tips
5. Motivation

Use warm, motivating language. No unnecessary repetition. Max 6 bullet points."#,
        hours = inputs.daily_hours,
        difficulty = inputs.difficulty,
        days = inputs.days_to_exam,
        style = inputs.learning_style,
    )
}
