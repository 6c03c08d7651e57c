//! Fixed study advice keyed on the closed input categories.
//!
//! Both lookups are exhaustive matches, so extending either enum forces the
//! compiler to demand a tip for the new variant.

use crate::inputs::{Difficulty, LearningStyle};

/// Tip for making the most of a learning style.
pub fn style_tip(style: LearningStyle) -> &'static str {
    match style {
        LearningStyle::Visual => "Use diagrams, mind maps, and color coding.",
        LearningStyle::Auditory => "Read notes aloud or use voice recordings.",
        LearningStyle::Kinesthetic => "Use flashcards, drawing, or movement-based tasks.",
    }
}

/// Working technique suited to the subject difficulty.
pub fn technique_tip(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "Light review and summarizing should work fine.",
        Difficulty::Medium => "Try spaced repetition + summary notes.",
        Difficulty::Hard => "Use Pomodoro + active recall daily.",
    }
}
