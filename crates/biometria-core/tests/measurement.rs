use biometria_core::models::measurement::{Dimensions, Measurement, MeasurementInput, Reading};
use biometria_core::models::score::UnscorableReason;

#[test]
fn numeric_reading_parses() {
    assert_eq!(Reading::Number(12.5).to_finite(), Ok(12.5));
}

#[test]
fn text_reading_parses_with_whitespace() {
    assert_eq!(Reading::from(" 14 ").to_finite(), Ok(14.0));
}

#[test]
fn text_reading_accepts_decimal_comma() {
    assert_eq!(Reading::from("12,5").to_finite(), Ok(12.5));
}

#[test]
fn blank_and_missing_readings_are_not_measured() {
    assert_eq!(Reading::from("   ").to_finite(), Err(UnscorableReason::NotMeasured));
    assert_eq!(Reading::Missing.to_finite(), Err(UnscorableReason::NotMeasured));
    assert!(Reading::from(None).is_missing());
}

#[test]
fn garbage_and_non_finite_readings_are_not_numeric() {
    assert_eq!(Reading::from("abc").to_finite(), Err(UnscorableReason::NotNumeric));
    assert_eq!(Reading::from("1,2,3").to_finite(), Err(UnscorableReason::NotNumeric));
    assert_eq!(Reading::Number(f64::NAN).to_finite(), Err(UnscorableReason::NotNumeric));
    assert_eq!(Reading::Number(f64::INFINITY).to_finite(), Err(UnscorableReason::NotNumeric));
    assert_eq!(Reading::from("inf").to_finite(), Err(UnscorableReason::NotNumeric));
}

#[test]
fn dimensions_mean_averages_all_three() {
    let dims = Dimensions::new(10.0, "20", 30.0);
    assert_eq!(dims.mean(), Ok(20.0));
}

#[test]
fn dimensions_with_one_bad_value_do_not_partially_average() {
    let dims = Dimensions::new(10.0, "n/a", 30.0);
    assert_eq!(dims.mean(), Err(UnscorableReason::IncompleteComposite));

    let dims = Dimensions::new(10.0, Reading::Missing, 30.0);
    assert_eq!(dims.mean(), Err(UnscorableReason::IncompleteComposite));
}

#[test]
fn dimensions_all_blank_are_not_measured() {
    assert_eq!(Dimensions::default().mean(), Err(UnscorableReason::NotMeasured));
}

#[test]
fn measurement_input_deserializes_both_shapes() {
    let input = MeasurementInput::from_json(
        r#"{
            "male_fat": 12,
            "visual_accommodation": "25,5",
            "systolic": null,
            "digital_reflexes": { "high": 10, "long": "12", "width": 14 }
        }"#,
    )
    .unwrap();

    assert_eq!(input.len(), 4);
    assert_eq!(input.get("male_fat"), Some(&Measurement::Scalar(Reading::Number(12.0))));
    assert_eq!(
        input.get("visual_accommodation"),
        Some(&Measurement::Scalar(Reading::Text("25,5".to_string())))
    );
    assert_eq!(input.get("systolic"), Some(&Measurement::Scalar(Reading::Missing)));
    match input.get("digital_reflexes") {
        Some(Measurement::Composite(dims)) => assert_eq!(dims.mean(), Ok(12.0)),
        other => panic!("expected composite, got {other:?}"),
    }
}

#[test]
fn composite_with_absent_dimension_defaults_to_missing() {
    let input = MeasurementInput::from_json(r#"{ "static_balance": { "high": 3, "long": 4 } }"#).unwrap();
    match input.get("static_balance") {
        Some(Measurement::Composite(dims)) => {
            assert_eq!(dims.width, Reading::Missing);
            assert_eq!(dims.mean(), Err(UnscorableReason::IncompleteComposite));
        }
        other => panic!("expected composite, got {other:?}"),
    }
}

#[test]
fn measurement_input_iterates_in_name_order() {
    let input = MeasurementInput::new()
        .scalar("systolic", 120.0)
        .scalar("body_mass", 22.0)
        .composite("digital_reflexes", Dimensions::new(1.0, 2.0, 3.0));

    let names: Vec<_> = input.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["body_mass", "digital_reflexes", "systolic"]);
}

#[test]
fn misspelled_dimension_key_is_rejected() {
    let err = MeasurementInput::from_json(r#"{ "diastolic": { "hihg": 1 } }"#);
    assert!(err.is_err());
}

#[test]
fn dimensions_reject_unknown_fields() {
    let err = serde_json::from_str::<Dimensions>(r#"{ "high": 1, "long": 2, "width": 3, "depth": 4 }"#)
        .unwrap_err();
    assert!(err.to_string().contains("depth"));
}
