use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use smartstudy::error::PlanError;
use smartstudy::inputs::{Difficulty, FeatureVector, LearningStyle, StudyInputs};
use smartstudy::predictor::store::load_model;

fn artifact(version: u32, names: &[&str], coefficients: &[f32]) -> String {
    serde_json::json!({
        "schema_version": version,
        "feature_names": names,
        "coefficients": coefficients,
        "intercept": 0.35,
    })
    .to_string()
}

fn write_artifact(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp artifact");
    file.write_all(content.as_bytes()).expect("write artifact");
    file
}

const TRAINED_NAMES: [&str; 4] = ["daily_hours", "difficulty", "days_to_exam", "learning_style"];

#[test]
fn loads_and_predicts() {
    let file = write_artifact(&artifact(1, &TRAINED_NAMES, &[0.1, 0.2, 0.03, 0.4]));
    let model = load_model(file.path()).expect("artifact should load");

    let features = StudyInputs::new(3.0, Difficulty::Medium, 10, LearningStyle::Visual)
        .unwrap()
        .to_features();
    let prediction = model.predict(&features).expect("prediction should succeed");

    // 0.1*3 + 0.2*1 + 0.03*10 + 0.4*0 + 0.35
    assert!((prediction - 1.15).abs() < 1e-5);
}

#[test]
fn prediction_is_deterministic() {
    let file = write_artifact(&artifact(1, &TRAINED_NAMES, &[0.1, 0.2, 0.03, 0.4]));
    let model = load_model(file.path()).unwrap();
    let features = FeatureVector([2.0, 1.0, 5.0, 2.0]);

    let first = model.predict(&features).unwrap();
    let second = model.predict(&features).unwrap();
    assert_eq!(first, second);
}

#[test]
fn rejects_wrong_coefficient_arity() {
    let file = write_artifact(&artifact(1, &TRAINED_NAMES, &[0.1, 0.2, 0.03]));
    let err = load_model(file.path()).unwrap_err();
    assert!(matches!(err, PlanError::Configuration(_)), "{err}");
}

#[test]
fn rejects_mismatched_feature_order() {
    let reordered = ["difficulty", "daily_hours", "days_to_exam", "learning_style"];
    let file = write_artifact(&artifact(1, &reordered, &[0.1, 0.2, 0.03, 0.4]));
    let err = load_model(file.path()).unwrap_err();
    assert!(matches!(err, PlanError::Configuration(_)), "{err}");
}

#[test]
fn rejects_unknown_schema_version() {
    let file = write_artifact(&artifact(2, &TRAINED_NAMES, &[0.1, 0.2, 0.03, 0.4]));
    let err = load_model(file.path()).unwrap_err();
    assert!(matches!(err, PlanError::Configuration(_)), "{err}");
}

#[test]
fn rejects_unparsable_artifact() {
    let file = write_artifact("not a model");
    let err = load_model(file.path()).unwrap_err();
    assert!(matches!(err, PlanError::Configuration(_)), "{err}");
}

#[test]
fn missing_artifact_is_a_configuration_error() {
    let err = load_model(Path::new("no/such/model.json")).unwrap_err();
    assert!(matches!(err, PlanError::Configuration(_)), "{err}");
}

#[test]
fn non_finite_features_fail_loudly() {
    let file = write_artifact(&artifact(1, &TRAINED_NAMES, &[0.1, 0.2, 0.03, 0.4]));
    let model = load_model(file.path()).unwrap();

    let err = model
        .predict(&FeatureVector([f32::NAN, 1.0, 10.0, 0.0]))
        .unwrap_err();
    assert!(matches!(err, PlanError::Prediction(_)), "{err}");
}

#[test]
fn shipped_artifact_is_compatible() {
    let model = load_model(Path::new("data/study_plan_model.json"))
        .expect("the shipped artifact must match the compiled-in schema");

    let features = StudyInputs::new(3.0, Difficulty::Medium, 10, LearningStyle::Visual)
        .unwrap()
        .to_features();
    let prediction = model.predict(&features).unwrap();
    assert!((0.0..=1.0).contains(&prediction));
}
