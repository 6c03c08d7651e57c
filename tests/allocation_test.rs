use smartstudy::inputs::{Difficulty, LearningStyle, StudyInputs};
use smartstudy::planner::allocation::allocate;

const THRESHOLD: u32 = 5;

fn inputs(hours: f32, days: u32) -> StudyInputs {
    StudyInputs::new(hours, Difficulty::Medium, days, LearningStyle::Visual)
        .expect("valid test inputs")
}

#[test]
fn focus_and_review_sum_to_daily_hours() {
    for hours in [1.0_f32, 2.0, 3.0, 4.5, 6.0] {
        for prediction in [0.0_f32, 0.1, 0.25, 0.33, 0.5, 0.7, 0.9, 1.0] {
            let result = allocate(&inputs(hours, 10), prediction, THRESHOLD);
            let sum = result.focus_hours + result.review_hours;
            assert!(
                (sum - hours).abs() < 0.1,
                "sum {sum} != {hours} for prediction {prediction}"
            );
            assert!(result.focus_hours >= 0.0);
            assert!(result.review_hours >= 0.0);
        }
    }
}

#[test]
fn zero_prediction_is_all_review() {
    let result = allocate(&inputs(4.0, 10), 0.0, THRESHOLD);
    assert_eq!(result.focus_hours, 0.0);
    assert_eq!(result.review_hours, 4.0);
}

#[test]
fn full_prediction_is_all_focus() {
    let result = allocate(&inputs(4.0, 10), 1.0, THRESHOLD);
    assert_eq!(result.focus_hours, 4.0);
    assert_eq!(result.review_hours, 0.0);
}

#[test]
fn urgency_boundary_at_threshold() {
    assert!(allocate(&inputs(3.0, 5), 0.5, THRESHOLD).urgency);
    assert!(!allocate(&inputs(3.0, 6), 0.5, THRESHOLD).urgency);
    assert!(allocate(&inputs(3.0, 3), 0.5, THRESHOLD).urgency);
}

#[test]
fn urgency_threshold_is_not_hardwired() {
    assert!(allocate(&inputs(3.0, 9), 0.5, 10).urgency);
    assert!(!allocate(&inputs(3.0, 11), 0.5, 10).urgency);
}

#[test]
fn out_of_range_predictions_are_clamped() {
    let high = allocate(&inputs(4.0, 10), 1.4, THRESHOLD);
    assert_eq!(high.focus_hours, 4.0);
    assert_eq!(high.review_hours, 0.0);

    let low = allocate(&inputs(4.0, 10), -0.2, THRESHOLD);
    assert_eq!(low.focus_hours, 0.0);
    assert_eq!(low.review_hours, 4.0);
}

#[test]
fn example_split_rounds_to_one_decimal() {
    let result = allocate(&inputs(3.0, 10), 0.7, THRESHOLD);
    assert!((result.focus_hours - 2.1).abs() < 1e-4);
    assert!((result.review_hours - 0.9).abs() < 1e-4);
    assert!(!result.urgency);
}
