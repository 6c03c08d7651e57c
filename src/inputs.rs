//! User-facing study parameters and their numeric encoding.
//!
//! The encoding is a compiled-in, versioned schema shared with the training
//! pipeline that produced the allocation model. If the order, the count, or
//! the enum codes ever change, `FEATURE_SCHEMA_VERSION` must be bumped so
//! stale artifacts are rejected at load instead of scoring garbage.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Accepted range for daily study hours.
pub const DAILY_HOURS_RANGE: RangeInclusive<f32> = 1.0..=6.0;
/// Accepted range for days remaining until the exam.
pub const DAYS_TO_EXAM_RANGE: RangeInclusive<u32> = 3..=30;

/// Version of the feature encoding shared with the training pipeline.
pub const FEATURE_SCHEMA_VERSION: u32 = 1;
/// Feature order the allocation model was trained on.
pub const FEATURE_NAMES: [&str; 4] = [
    "daily_hours",
    "difficulty",
    "days_to_exam",
    "learning_style",
];
/// Number of features the allocation model consumes.
pub const FEATURE_ARITY: usize = FEATURE_NAMES.len();

/// Subject difficulty as reported by the student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Training-time integer code for this level.
    pub fn encode(self) -> f32 {
        match self {
            Difficulty::Easy => 0.0,
            Difficulty::Medium => 1.0,
            Difficulty::Hard => 2.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(PlanError::validation(format!(
                "unknown difficulty category '{other}' (expected easy, medium, or hard)"
            ))),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The student's preferred learning style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LearningStyle {
    Visual,
    Auditory,
    Kinesthetic,
}

impl LearningStyle {
    /// Training-time integer code for this style.
    pub fn encode(self) -> f32 {
        match self {
            LearningStyle::Visual => 0.0,
            LearningStyle::Auditory => 1.0,
            LearningStyle::Kinesthetic => 2.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LearningStyle::Visual => "Visual",
            LearningStyle::Auditory => "Auditory",
            LearningStyle::Kinesthetic => "Kinesthetic",
        }
    }
}

impl FromStr for LearningStyle {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visual" => Ok(LearningStyle::Visual),
            "auditory" => Ok(LearningStyle::Auditory),
            "kinesthetic" => Ok(LearningStyle::Kinesthetic),
            other => Err(PlanError::validation(format!(
                "unknown learning style '{other}' (expected visual, auditory, or kinesthetic)"
            ))),
        }
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One set of study parameters, validated on construction and immutable
/// afterwards. Nothing is persisted between invocations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StudyInputs {
    pub daily_hours: f32,
    pub difficulty: Difficulty,
    pub days_to_exam: u32,
    pub learning_style: LearningStyle,
}

impl StudyInputs {
    pub fn new(
        daily_hours: f32,
        difficulty: Difficulty,
        days_to_exam: u32,
        learning_style: LearningStyle,
    ) -> Result<StudyInputs, PlanError> {
        if !daily_hours.is_finite() || !DAILY_HOURS_RANGE.contains(&daily_hours) {
            return Err(PlanError::validation(format!(
                "daily hours must be between {} and {}, got {daily_hours}",
                DAILY_HOURS_RANGE.start(),
                DAILY_HOURS_RANGE.end(),
            )));
        }
        if !DAYS_TO_EXAM_RANGE.contains(&days_to_exam) {
            return Err(PlanError::validation(format!(
                "days to exam must be between {} and {}, got {days_to_exam}",
                DAYS_TO_EXAM_RANGE.start(),
                DAYS_TO_EXAM_RANGE.end(),
            )));
        }
        Ok(StudyInputs {
            daily_hours,
            difficulty,
            days_to_exam,
            learning_style,
        })
    }

    /// Encode into the fixed feature order the model was trained on.
    pub fn to_features(&self) -> FeatureVector {
        FeatureVector([
            self.daily_hours,
            self.difficulty.encode(),
            self.days_to_exam as f32,
            self.learning_style.encode(),
        ])
    }
}

/// Ordered numeric features for the allocation model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector(pub [f32; FEATURE_ARITY]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}
