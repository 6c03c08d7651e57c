//! SmartStudy: regression-backed study-time allocation with an optional
//! AI-generated full plan.
//!
//! Four validated inputs (daily hours, subject difficulty, days until the
//! exam, learning style) are encoded into the feature order a pre-trained
//! linear regression expects; the predicted focus fraction is turned into a
//! focus/review hour split with fixed advice attached. A second, independent
//! path renders the same inputs into a prompt for a hosted generative
//! service and returns its plan verbatim.

pub mod config;
pub mod error;
pub mod inputs;
pub mod logging;
pub mod pipelines;
pub mod planner;
pub mod predictor;
pub mod report;
pub mod state;
