use super::*;
use crate::encoder::Dump;
use crate::error::CzmlError;
use anyhow::Result;
use assert_json_diff::assert_json_eq;
use chrono::{FixedOffset, TimeZone, Utc};
use proptest::prelude::*;
use serde_json::json;

#[test]
fn cartesian3_constant_and_sampled() -> Result<()> {
    let constant = Cartesian3Value::from([0.0, 0.0, 0.0]);
    assert_eq!(constant.dumps()?, "[0.0,0.0,0.0]");
    assert!(!constant.is_sampled());

    let sampled = Cartesian3Value::new(vec![
        0.0,
        -6668447.2211117,
        1201886.45913705,
        146789.427467256,
        60.0,
        -6711432.84684144,
        919677.673492462,
        -214047.552431458,
    ])?;
    assert!(sampled.is_sampled());
    assert_eq!(sampled.values().len(), 8);
    Ok(())
}

#[test]
fn cartesian3_rejects_bad_lengths() {
    for values in [vec![2, 2], vec![5, 5, 5, 5, 5]] {
        let err = Cartesian3Value::new(values).unwrap_err();
        assert!(
            err.to_string()
                .contains("Input values for Cartesian3Value must have either 3 or N * 4 values")
        );
    }
}

#[test]
fn cartesian2_is_wrapped() -> Result<()> {
    let offset = Cartesian2Value::from([5, -4]);
    assert_json_eq!(serde_json::to_value(&offset)?, json!({"cartesian2": [5, -4]}));
    Ok(())
}

#[test]
fn velocity_needs_six_components() -> Result<()> {
    assert!(Cartesian3VelocityValue::new([1, 2, 3, 4, 5, 6]).is_ok());
    assert!(Cartesian3VelocityValue::new([0, 1, 2, 3, 4, 5, 6]).is_ok());
    assert!(Cartesian3VelocityValue::new([1, 2, 3]).is_err());
    Ok(())
}

#[test]
fn near_far_scalar_shapes() {
    let err = NearFarScalarValue::new(vec![0.0, 3.2, 1.0, 4.0, 2.0, 1.0]).unwrap_err();
    assert!(err.to_string().contains("either 4 or N * 5 values"));
    assert!(NearFarScalarValue::new([150.0, 2.0, 15000000.0, 0.5]).is_ok());
}

#[test]
fn distance_display_condition_samples() -> Result<()> {
    let dist = DistanceDisplayConditionValue::new([
        0, 150, 15000000, 300, 10000, 15000000, 600, 150, 15000000,
    ])?;
    assert_eq!(
        dist.to_json()?,
        "[\n    0,\n    150,\n    15000000,\n    300,\n    10000,\n    15000000,\n    600,\n    150,\n    15000000\n]"
    );
    Ok(())
}

#[test]
fn cartographic_lists() -> Result<()> {
    let radians = CartographicRadiansListValue::new([0, 1, 0])?;
    assert_eq!(radians.dumps()?, "[0,1,0]");
    assert_eq!(radians.len(), 1);

    let degrees = CartographicDegreesListValue::new([15, 25, 50])?;
    assert_eq!(degrees.dumps()?, "[15,25,50]");

    let err = CartographicDegreesListValue::new([15, 25, 50, 30]).unwrap_err();
    assert!(err.to_string().contains("a size of 3 * N"));
    assert!(CartographicRadiansListValue::new([1]).is_err());
    assert!(Cartesian3ListValue::new(Vec::<f64>::new()).is_err());
    Ok(())
}

#[test]
fn quaternion_constant() -> Result<()> {
    assert_eq!(UnitQuaternionValue::from([0, 0, 0, 1]).dumps()?, "[0,0,0,1]");
    Ok(())
}

#[test]
fn rgba_appends_alpha() -> Result<()> {
    assert_eq!(RgbaValue::new([0, 0, 255])?.dumps()?, "[0,0,255,255]");
    assert_eq!(RgbaValue::from([10u8, 20, 30]).dumps()?, "[10,20,30,255]");
    assert_eq!(RgbafValue::new([0.0, 0.0, 0.1])?.dumps()?, "[0.0,0.0,0.1,1.0]");
    Ok(())
}

#[test]
fn rgba_rejects_out_of_range_and_fractional_channels() {
    assert!(matches!(
        RgbaValue::new([256, 0, 0, 255]),
        Err(CzmlError::Range { .. })
    ));
    let fractional: Vec<Scalar> = vec![0.into(), 0.1.into(), 0.3.into(), 0.3.into(), 255.into()];
    let err = RgbaValue::new(fractional).unwrap_err();
    assert!(err.to_string().contains("color values must be integers in the range 0-255"));
}

#[test]
fn rgbaf_rejects_out_of_range() {
    assert!(RgbafValue::new([0.3, 0.0, 0.0, 1.4]).is_err());
    let sampled: Vec<Scalar> = vec![0.into(), 0.1.into(), 0.3.into(), 0.3.into(), 255.into()];
    assert!(RgbafValue::new(sampled).is_err());
}

#[test]
fn sampled_colors_keep_time_tags() -> Result<()> {
    let values: Vec<Scalar> = vec![
        "2012-03-15T10:00:00Z".into(),
        255.into(),
        204.into(),
        0.into(),
        255.into(),
        "2012-03-16T10:00:00Z".into(),
        0.into(),
        0.into(),
        0.into(),
        255.into(),
    ];
    let color = RgbaValue::new(values)?;
    assert_json_eq!(
        serde_json::to_value(&color)?,
        json!(["2012-03-15T10:00:00Z", 255, 204, 0, 255, "2012-03-16T10:00:00Z", 0, 0, 0, 255])
    );
    Ok(())
}

#[test]
fn reference_value() -> Result<()> {
    let reference = ReferenceValue::new("id#property")?;
    assert_eq!(reference.to_json()?, "\"id#property\"");
    assert_eq!(reference.id(), "id");
    assert_eq!(reference.property(), "property");

    let err = ReferenceValue::new("id").unwrap_err();
    assert!(err.to_string().contains("input must be of the form id#property"));
    Ok(())
}

#[test]
fn font_and_string_values() -> Result<()> {
    let font = FontValue::from("20px sans-serif");
    assert_eq!(font.to_json()?, "\"20px sans-serif\"");
    assert_eq!(font.as_str(), "20px sans-serif");
    assert_eq!(StringValue::new("<h2>No accesses</h2>").dumps()?, "\"<h2>No accesses</h2>\"");
    Ok(())
}

#[test]
fn default_time_interval_is_unbounded() -> Result<()> {
    assert_eq!(
        TimeInterval::default().to_json()?,
        "\"0001-01-01T00:00:00Z/9999-12-31T23:59:59Z\""
    );
    Ok(())
}

#[test]
fn custom_time_interval_is_in_utc() -> Result<()> {
    let tz = FixedOffset::east_opt(2 * 3600).unwrap();
    let start = Utc.with_ymd_and_hms(2019, 1, 1, 12, 0, 0).unwrap();
    let end = tz.with_ymd_and_hms(2019, 9, 2, 23, 59, 59).unwrap();
    assert_eq!(
        TimeInterval::new(start, end).to_string(),
        "2019-01-01T12:00:00.000000Z/2019-09-02T21:59:59.000000Z"
    );
    Ok(())
}

#[test]
fn half_open_intervals() -> Result<()> {
    let start = Utc.with_ymd_and_hms(2012, 3, 15, 10, 0, 0).unwrap();
    let interval = TimeInterval::unbounded().with_start(start);
    assert_eq!(interval.to_string(), "2012-03-15T10:00:00.000000Z/9999-12-31T23:59:59Z");
    assert!(TimeInterval::parse("2012-03-15T10:00:00Z", "2012/03/16").is_err());
    Ok(())
}

#[test]
fn interval_value_flattens_primitives() -> Result<()> {
    let interval = TimeInterval::parse("2012-03-15T10:00:00Z", "2012-03-16T10:00:00Z")?;
    let value = IntervalValue::new(interval.clone(), true);
    assert_json_eq!(
        serde_json::to_value(&value)?,
        json!({"interval": "2012-03-15T10:00:00Z/2012-03-16T10:00:00Z", "boolean": true})
    );

    let number = IntervalValue::new(interval.clone(), Number::from(2.5));
    assert_eq!(
        number.dumps()?,
        r#"{"interval":"2012-03-15T10:00:00Z/2012-03-16T10:00:00Z","number":2.5}"#
    );

    let text = IntervalValue::new(interval, StringValue::from("visible"));
    assert_eq!(
        text.dumps()?,
        r#"{"interval":"2012-03-15T10:00:00Z/2012-03-16T10:00:00Z","string":"visible"}"#
    );
    Ok(())
}

#[test]
fn time_varying_sequence() -> Result<()> {
    let first = TimeInterval::parse("2012-03-15T10:00:00Z", "2012-03-15T11:00:00Z")?;
    let second = TimeInterval::parse("2012-03-15T11:00:00Z", "2012-03-15T12:00:00Z")?;
    let show = TimeVarying::intervals([
        IntervalValue::new(first, true),
        IntervalValue::new(second, false),
    ]);
    assert_json_eq!(
        serde_json::to_value(&show)?,
        json!([
            {"interval": "2012-03-15T10:00:00Z/2012-03-15T11:00:00Z", "boolean": true},
            {"interval": "2012-03-15T11:00:00Z/2012-03-15T12:00:00Z", "boolean": false}
        ])
    );
    assert_eq!(TimeVarying::from(true).dumps()?, "true");
    Ok(())
}

#[test]
fn epoch_and_number_values() -> Result<()> {
    let epoch = EpochValue::new(Utc.with_ymd_and_hms(2012, 3, 15, 10, 0, 0).unwrap());
    assert_eq!(epoch.dumps()?, r#"{"epoch":"2012-03-15T10:00:00.000000Z"}"#);

    assert_eq!(NumberValue::from(5).dumps()?, r#"{"number":5}"#);
    assert_eq!(
        NumberValue::sampled([0.0, 1.5, 60.0, 2.5])?.dumps()?,
        r#"{"number":[0.0,1.5,60.0,2.5]}"#
    );
    assert!(NumberValue::sampled([0.0, 1.5, 60.0]).is_err());
    Ok(())
}

#[test]
fn strings_are_only_accepted_as_time_tags() -> Result<()> {
    assert!(matches!(
        Cartesian3Value::new(["x", "y", "z"]),
        Err(CzmlError::Format { field: "Cartesian3Value", .. })
    ));
    let mixed: Vec<Scalar> = vec!["2012-03-15T10:00:00Z".into(), 1.into(), "2".into(), 3.into()];
    assert!(matches!(
        Cartesian3Value::new(mixed),
        Err(CzmlError::Format { field: "Cartesian3Value", .. })
    ));
    assert!(CartographicDegreesListValue::new(["2012-03-15T10:00:00Z", "1", "2"]).is_err());
    assert!(RgbaValue::new(["255", "0", "0"]).is_err());

    let tagged: Vec<Scalar> = vec!["2012-03-15T10:00:00Z".into(), 1.into(), 2.into(), 3.into()];
    assert_eq!(
        Cartesian3Value::new(tagged)?.dumps()?,
        r#"["2012-03-15T10:00:00Z",1,2,3]"#
    );
    Ok(())
}

#[test]
fn malformed_time_tags_are_rejected() {
    let untimely: Vec<Scalar> = vec!["not-a-date".into(), 1.into(), 2.into(), 3.into()];
    assert!(matches!(
        Cartesian3Value::new(untimely),
        Err(CzmlError::Format { field: "datetime", .. })
    ));
    assert!(matches!(
        NumberValue::sampled(["0000-00-00T99:99:99Z", "oops"]),
        Err(CzmlError::Format { field: "datetime", .. })
    ));
    let color: Vec<Scalar> = vec!["2012-13-45T10:00:00Z".into(), 255.into(), 0.into(), 0.into(), 255.into()];
    assert!(matches!(
        RgbaValue::new(color),
        Err(CzmlError::Format { field: "datetime", .. })
    ));
}

#[test]
fn non_finite_numbers_never_reach_the_output() {
    assert!(matches!(
        Cartesian3Value::new([f64::NAN, 0.0, 0.0]),
        Err(CzmlError::Range { .. })
    ));
    assert!(NumberValue::sampled([0.0, f64::INFINITY]).is_err());
    assert!(RgbafValue::new([f64::NAN, 0.0, 0.0]).is_err());

    assert!(matches!(
        Cartesian3Value::from([f64::NAN, 0.0, 0.0]).dumps(),
        Err(CzmlError::Serialization(_))
    ));
    assert!(NumberValue::from(f64::NEG_INFINITY).dumps().is_err());
}

#[test]
fn equal_payloads_are_interchangeable() -> Result<()> {
    assert_eq!(Cartesian3Value::new([1, 2, 3])?, Cartesian3Value::new([1, 2, 3])?);
    assert_ne!(Cartesian3Value::new([1, 2, 3])?, Cartesian3Value::new([1.0, 2.0, 3.0])?);
    Ok(())
}

proptest! {
    #[test]
    fn rgba_accepts_every_in_range_constant(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255, a in 0u8..=255) {
        let color = RgbaValue::new([r, g, b, a]).unwrap();
        prop_assert_eq!(color.values().len(), 4);
    }

    #[test]
    fn rgbaf_three_channels_gain_alpha(r in 0.0f64..=1.0, g in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let color = RgbafValue::new([r, g, b]).unwrap();
        prop_assert_eq!(color.values().last(), Some(&Scalar::from(1.0)));
    }

    #[test]
    fn serialization_is_idempotent(values in proptest::collection::vec(-1.0e7f64..1.0e7, 3)) {
        let value = Cartesian3Value::new(values).unwrap();
        prop_assert_eq!(value.dumps().unwrap(), value.dumps().unwrap());
    }
}
