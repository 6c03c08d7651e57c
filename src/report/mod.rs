//! Plain-text rendering of the two downloadable reports.

pub mod store;

use chrono::NaiveDate;

use crate::planner::StudyBreakdown;

/// Render the structured breakdown report.
/// The date is injected by the caller so rendering stays pure.
pub fn render_breakdown(breakdown: &StudyBreakdown, date: NaiveDate, title: &str) -> String {
    let mut report = format!(
        "{title} - {date}\n\n\
         Daily Study Hours: {hours}\n\
         Subject Difficulty: {difficulty}\n\
         Days Until Exam: {days}\n\
         Learning Style: {style}\n\n\
         Focus Hours: {focus}\n\
         Review Hours: {review}\n",
        title = title,
        date = date,
        hours = breakdown.inputs.daily_hours,
        difficulty = breakdown.inputs.difficulty,
        days = breakdown.inputs.days_to_exam,
        style = breakdown.inputs.learning_style,
        focus = breakdown.allocation.focus_hours,
        review = breakdown.allocation.review_hours,
    );

    if breakdown.allocation.urgency {
        report.push_str("\nYour exam is very close! Focus mode ON.\n");
    }

    report.push_str(&format!(
        "\nStyle Tip: {}\nTechnique Tip: {}\n",
        breakdown.style_tip, breakdown.technique_tip
    ));

    report
}

/// The generated plan is delivered exactly as the service produced it.
pub fn render_ai_report(ai_text: &str) -> String {
    ai_text.to_string()
}
