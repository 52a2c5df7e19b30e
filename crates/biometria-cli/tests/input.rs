use biometria_cli::input::{load_calibration, load_measurements, resolve_fat_alias, subject_age};
use biometria_cli::render::render_text;
use biometria_core::models::measurement::{Measurement, MeasurementInput, Reading};
use biometria_core::models::score::MetricAge;
use biometria_core::models::subject::Sex;
use biometria_scoring::ScoringConfig;
use jiff::civil::date;

const CALIBRATION: &str = r#"{
    "boards": [
        { "metric_name": "male_fat", "value_min": 10, "value_max": 14,
          "range": { "id": "6f1c5a52-4f2d-4d8e-9b7a-0e4f3f0c2a11", "min_age": 21, "max_age": 28 } },
        { "metric_name": "systolic", "value_min": 100, "value_max": 120,
          "range": { "id": "0b9d7c3e-1a2b-4c5d-8e9f-112233445566", "min_age": 41, "max_age": 41 } }
    ]
}"#;

#[test]
fn fat_alias_resolves_by_sex() {
    let mut input = MeasurementInput::new().scalar("fat", 12.0);
    resolve_fat_alias(&mut input, Some(Sex::Female), true);
    assert!(input.get("fat").is_none());
    assert_eq!(
        input.get("sporty_female_fat"),
        Some(&Measurement::Scalar(Reading::Number(12.0)))
    );
}

#[test]
fn fat_alias_without_sex_is_left_alone() {
    let mut input = MeasurementInput::new().scalar("fat", 12.0);
    resolve_fat_alias(&mut input, None, false);
    assert!(input.get("fat").is_some());
}

#[test]
fn subject_age_prefers_exactly_one_source() {
    assert_eq!(subject_age(Some(40), None, None).unwrap(), 40);
    assert_eq!(
        subject_age(None, Some(date(1980, 3, 10)), Some(date(2020, 3, 9))).unwrap(),
        39
    );
    assert!(subject_age(Some(40), Some(date(1980, 3, 10)), None).is_err());
    assert!(subject_age(None, None, None).is_err());
}

#[test]
fn files_load_and_score_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let calibration = dir.path().join("boards.json");
    let measurements = dir.path().join("subject.json");
    std::fs::write(&calibration, CALIBRATION).unwrap();
    std::fs::write(&measurements, r#"{ "fat": "12", "systolic": 110, "body_mass": null }"#).unwrap();

    let table = load_calibration(&calibration).unwrap();
    let mut inputs = load_measurements(&measurements).unwrap();
    resolve_fat_alias(&mut inputs, Some(Sex::Male), false);

    let result = table.score_subject(&inputs, 40, &ScoringConfig::default());
    assert_eq!(result.metric("male_fat").unwrap().outcome, MetricAge::Scored(25));
    assert_eq!(result.metric("systolic").unwrap().outcome, MetricAge::Scored(41));
    assert!(!result.metric("body_mass").unwrap().scored());

    let overall = result.overall.as_ref().unwrap();
    assert_eq!(overall.biological_age, 33.0);
    assert_eq!(overall.differential, -7);

    let text = render_text(&result);
    assert!(text.contains("- Body fat (male): 25"));
    assert!(text.contains("- Body mass index: not scored (not measured)"));
    assert!(text.contains("Differential: -7"));
    assert!(text.contains("Category: REJUVENECIDO"));
    assert!(text.contains("7 years younger than chronological age"));
}

#[test]
fn invalid_calibration_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let calibration = dir.path().join("boards.json");
    std::fs::write(
        &calibration,
        r#"{ "boards": [
            { "metric_name": "male_fat", "value_min": 10, "value_max": 14,
              "range": { "id": "6f1c5a52-4f2d-4d8e-9b7a-0e4f3f0c2a11", "min_age": 21, "max_age": 28 } },
            { "metric_name": "male_fat", "value_min": 12, "value_max": 16,
              "range": { "id": "6f1c5a52-4f2d-4d8e-9b7a-0e4f3f0c2a11", "min_age": 21, "max_age": 28 } }
        ] }"#,
    )
    .unwrap();

    let err = load_calibration(&calibration).unwrap_err();
    assert!(err.to_string().contains("1 issue(s)"));
}

#[test]
fn missing_measurements_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_measurements(&dir.path().join("absent.json")).is_err());
}

#[test]
fn render_without_overall_says_so() {
    let table = biometria_scoring::CalibrationTable::default();
    let inputs = MeasurementInput::new().scalar("systolic", 110.0);
    let result = table.score_subject(&inputs, 40, &ScoringConfig::default());
    let text = render_text(&result);
    assert!(text.contains("- Systolic pressure: not scored (no calibration for metric)"));
    assert!(text.contains("Biological age: not available"));
}
