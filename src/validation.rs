//! Validation primitives for CZML value encodings.
//!
//! These are pure functions: they inspect a payload and either accept it or
//! describe why it is invalid. Value types call them from their constructors.

use crate::error::{CzmlError, CzmlResult};
use crate::time::Timestamp;
use crate::values::Scalar;

/// Stride of a time-tagged color sample: `[time, r, g, b, a]`.
const COLOR_SAMPLE_STRIDE: usize = 5;

/// Validate a color payload against the channel range `[0, max_channel]`.
///
/// Accepts three channels (the caller appends a full-opacity alpha), four
/// channels, or time-tagged samples `[time, r, g, b, a, ...]`.
pub fn check_color(encoding: &'static str, values: &[Scalar], max_channel: f64) -> CzmlResult<()> {
    let len = values.len();
    let sampled = match len {
        3 | 4 => false,
        n if n > 0 && n % COLOR_SAMPLE_STRIDE == 0 => true,
        _ => {
            return Err(CzmlError::Shape {
                encoding,
                expected: "either 3, 4 or N * 5 values, where N is the number of time-tagged samples"
                    .to_string(),
                actual: len,
            });
        }
    };
    let stride = sampled.then_some(COLOR_SAMPLE_STRIDE);
    check_elements(encoding, values, stride)?;

    let channels = values
        .iter()
        .enumerate()
        .filter(|(index, _)| !is_time_tag(*index, stride))
        .filter_map(|(_, value)| value.as_number());
    for number in channels {
        let value = number.as_f64();
        if !(0.0..=max_channel).contains(&value) {
            return Err(CzmlError::Range {
                encoding,
                reason: format!(
                    "color values must be in the range 0-{}, got {}",
                    max_channel, number
                ),
            });
        }
    }
    Ok(())
}

/// Validate a payload holding either one constant value of `component_count`
/// components or time-tagged samples of `component_count + 1` elements.
pub fn check_values(
    encoding: &'static str,
    component_count: usize,
    values: &[Scalar],
) -> CzmlResult<()> {
    let len = values.len();
    let stride = component_count + 1;
    if len == component_count {
        return check_elements(encoding, values, None);
    }
    if len > 0 && len % stride == 0 {
        return check_elements(encoding, values, Some(stride));
    }
    Err(CzmlError::Shape {
        encoding,
        expected: format!(
            "either {} or N * {} values, where N is the number of time-tagged samples",
            component_count, stride
        ),
        actual: len,
    })
}

/// Validate a flat list of `component_count`-sized tuples without time tags.
pub fn check_list_of_values(
    encoding: &'static str,
    component_count: usize,
    values: &[Scalar],
) -> CzmlResult<()> {
    let len = values.len();
    if len > 0 && len % component_count == 0 {
        return check_elements(encoding, values, None);
    }
    Err(CzmlError::Shape {
        encoding,
        expected: format!("a size of {} * N", component_count),
        actual: len,
    })
}

/// Every element must be a finite number, except the leading time tag of each
/// sample, which may also be an ISO-8601 string.
fn check_elements(
    encoding: &'static str,
    values: &[Scalar],
    sample_stride: Option<usize>,
) -> CzmlResult<()> {
    for (index, value) in values.iter().enumerate() {
        match value {
            Scalar::Time(time) if is_time_tag(index, sample_stride) => {
                Timestamp::parse(time)?;
            }
            Scalar::Time(time) => {
                return Err(CzmlError::Format {
                    field: encoding,
                    reason: format!("element {} must be a number, got '{}'", index, time),
                });
            }
            Scalar::Number(number) if !number.is_finite() => {
                return Err(CzmlError::Range {
                    encoding,
                    reason: format!("element {} must be a finite number, got {}", index, number),
                });
            }
            Scalar::Number(_) => {}
        }
    }
    Ok(())
}

fn is_time_tag(index: usize, sample_stride: Option<usize>) -> bool {
    sample_stride.is_some_and(|stride| index % stride == 0)
}

/// Validate a reference string of the form `id#property`.
pub fn check_reference(value: &str) -> CzmlResult<()> {
    let valid = match value.split_once('#') {
        Some((id, path)) => !id.is_empty() && !path.is_empty() && !path.contains('#'),
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(CzmlError::Format {
            field: "reference",
            reason: format!(
                "'{}' is not a valid reference string, input must be of the form id#property",
                value
            ),
        })
    }
}

/// Require at least one of several substitutable fields.
///
/// `given` holds one flag per entry of `alternatives`, in the same order.
pub fn check_alternatives(
    type_name: &'static str,
    alternatives: &'static [&'static str],
    given: &[bool],
) -> CzmlResult<()> {
    if given.iter().any(|present| *present) {
        Ok(())
    } else {
        Err(CzmlError::MissingAlternative {
            type_name,
            alternatives,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::scalar::collect;
    use proptest::prelude::*;

    #[test]
    fn color_accepts_constant_and_sampled_payloads() {
        assert!(check_color("RgbaValue", &collect([255, 0, 0]), 255.0).is_ok());
        assert!(check_color("RgbaValue", &collect([255, 0, 0, 128]), 255.0).is_ok());
        let sampled: Vec<Scalar> = vec![
            "2012-03-15T10:00:00Z".into(),
            255.into(),
            0.into(),
            0.into(),
            255.into(),
            60.into(),
            0.into(),
            255.into(),
            0.into(),
            255.into(),
        ];
        assert!(check_color("RgbaValue", &sampled, 255.0).is_ok());
    }

    #[test]
    fn color_rejects_bad_shapes_and_ranges() {
        assert!(matches!(
            check_color("RgbaValue", &[], 255.0),
            Err(CzmlError::Shape { actual: 0, .. })
        ));
        assert!(matches!(
            check_color("RgbaValue", &collect([1, 2, 3, 4, 5, 6]), 255.0),
            Err(CzmlError::Shape { actual: 6, .. })
        ));
        assert!(matches!(
            check_color("RgbaValue", &collect([256, 0, 0, 255]), 255.0),
            Err(CzmlError::Range { .. })
        ));
        assert!(matches!(
            check_color("RgbafValue", &collect([0.3, 0.0, 0.0, 1.4]), 1.0),
            Err(CzmlError::Range { .. })
        ));
        // The time tag of a sample is not a channel, but everything after it is.
        assert!(matches!(
            check_color("RgbafValue", &collect([0.0, 0.1, 0.3, 0.3, 255.0]), 1.0),
            Err(CzmlError::Range { .. })
        ));
    }

    #[test]
    fn values_shapes() {
        assert!(check_values("Cartesian3Value", 3, &collect([1, 2, 3])).is_ok());
        assert!(check_values("Cartesian3Value", 3, &collect([0, 1, 2, 3, 60, 1, 2, 3])).is_ok());
        assert!(check_values("Cartesian3Value", 3, &collect([2, 2])).is_err());
        assert!(check_values("Cartesian3Value", 3, &collect([5, 5, 5, 5, 5])).is_err());
        assert!(check_values("Cartesian3Value", 3, &[]).is_err());
    }

    #[test]
    fn list_of_values_shapes() {
        assert!(check_list_of_values("CartographicDegreesListValue", 3, &collect([15, 25, 50])).is_ok());
        let err = check_list_of_values("CartographicDegreesListValue", 3, &collect([15, 25, 50, 30]))
            .unwrap_err();
        assert!(err.to_string().contains("a size of 3 * N"));
        assert!(check_list_of_values("CartographicRadiansListValue", 3, &[]).is_err());
    }

    #[test]
    fn references() {
        assert!(check_reference("sat1#position").is_ok());
        assert!(check_reference("Satellite/ISS#orientation.unitQuaternion").is_ok());
        assert!(check_reference("sat1position").is_err());
        assert!(check_reference("#position").is_err());
        assert!(check_reference("sat1#").is_err());
        assert!(check_reference("a#b#c").is_err());
    }

    #[test]
    fn alternatives() {
        const ALTERNATIVES: &[&str] = &["cartesian", "reference"];
        assert!(check_alternatives("ViewFrom", ALTERNATIVES, &[false, true]).is_ok());
        assert_eq!(
            check_alternatives("ViewFrom", ALTERNATIVES, &[false, false]),
            Err(CzmlError::MissingAlternative {
                type_name: "ViewFrom",
                alternatives: ALTERNATIVES,
            })
        );
    }

    proptest! {
        #[test]
        fn check_values_accepts_exactly_the_documented_lengths(
            component_count in 1usize..6,
            len in 0usize..40,
        ) {
            let values = vec![Scalar::from(0.0); len];
            let accepted = len == component_count || (len > 0 && len % (component_count + 1) == 0);
            prop_assert_eq!(check_values("test", component_count, &values).is_ok(), accepted);
        }

        #[test]
        fn rgbaf_channels_outside_unit_range_are_rejected(channel in prop_oneof![-10.0f64..-0.001, 1.001f64..10.0]) {
            let values = collect([0.5, 0.5, channel, 1.0]);
            prop_assert!(check_color("RgbafValue", &values, 1.0).is_err());
        }
    }
}
