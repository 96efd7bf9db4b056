//! Color convenience helpers.
//!
//! [`get_color`] accepts whatever a caller has at hand (a channel list, a
//! packed hex integer or a hex string) and [`get_color_list`] turns a list of
//! such colors into one time-tagged [`Color`].

use crate::error::{CzmlError, CzmlResult};
use crate::properties::Color;
use crate::values::{Number, RgbaValue, RgbafValue, Scalar};
use tracing::debug;

/// Hex strings are between `RRGGBB` and `#RRGGBBAA` plus slack.
const HEX_TEXT_LENGTHS: std::ops::RangeInclusive<usize> = 6..=10;

/// Any of the accepted color notations.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSpec {
    /// `[r, g, b]` or `[r, g, b, a]`, all integers (`0-255`) or all floats
    /// (`0.0-1.0`).
    Channels(Vec<Number>),
    /// `0xRRGGBB` or `0xRRGGBBAA`.
    Hex(i64),
    /// `#RRGGBB` or `#RRGGBBAA`.
    Text(String),
}

impl From<&str> for ColorSpec {
    fn from(value: &str) -> Self {
        ColorSpec::Text(value.to_string())
    }
}

impl From<String> for ColorSpec {
    fn from(value: String) -> Self {
        ColorSpec::Text(value)
    }
}

impl From<i32> for ColorSpec {
    fn from(value: i32) -> Self {
        ColorSpec::Hex(value.into())
    }
}

impl From<u32> for ColorSpec {
    fn from(value: u32) -> Self {
        ColorSpec::Hex(value.into())
    }
}

impl From<i64> for ColorSpec {
    fn from(value: i64) -> Self {
        ColorSpec::Hex(value)
    }
}

impl<T: Into<Number>> From<Vec<T>> for ColorSpec {
    fn from(values: Vec<T>) -> Self {
        ColorSpec::Channels(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Number>, const N: usize> From<[T; N]> for ColorSpec {
    fn from(values: [T; N]) -> Self {
        ColorSpec::Channels(values.into_iter().map(Into::into).collect())
    }
}

fn invalid_input(spec: &ColorSpec) -> CzmlError {
    CzmlError::Format {
        field: "color",
        reason: format!("{:?} is not a valid color", spec),
    }
}

/// Build a constant [`Color`] from any accepted notation.
pub fn get_color(spec: &ColorSpec) -> CzmlResult<Color> {
    match spec {
        ColorSpec::Text(text) if HEX_TEXT_LENGTHS.contains(&text.len()) => text.parse(),
        ColorSpec::Hex(hex) => u32::try_from(*hex)
            .map(Color::from_hex)
            .map_err(|_| invalid_input(spec)),
        ColorSpec::Channels(channels) if Color::is_valid(spec) => {
            Color::from_list(channels.iter().copied())
        }
        _ => Err(invalid_input(spec)),
    }
}

/// Build one time-tagged [`Color`] from a color per timestamp.
///
/// Every color is converted to the requested encoding: `rgbaf` channels are
/// `x / 255` of `rgba` ones, and `rgba` channels are `round(x * 255)` of
/// `rgbaf` ones.
pub fn get_color_list<I, T>(timestamps: I, colors: &[ColorSpec], rgbaf: bool) -> CzmlResult<Color>
where
    I: IntoIterator<Item = T>,
    T: Into<Scalar>,
{
    if let Some(spec) = colors.iter().find(|spec| !Color::is_valid(spec)) {
        return Err(invalid_input(spec));
    }
    let timestamps: Vec<Scalar> = timestamps.into_iter().map(Into::into).collect();
    if timestamps.len() != colors.len() {
        return Err(CzmlError::Shape {
            encoding: "get_color_list",
            expected: format!("one timestamp per color ({} colors)", colors.len()),
            actual: timestamps.len(),
        });
    }

    let mut samples = Vec::with_capacity(colors.len() * 5);
    for (time, spec) in timestamps.into_iter().zip(colors) {
        let color = get_color(spec)?;
        samples.push(time);
        samples.extend(channels(&color, rgbaf).into_iter().map(Scalar::from));
    }
    debug!(samples = colors.len(), rgbaf, "built time-tagged color");

    let builder = Color::builder();
    let builder = if rgbaf {
        builder.rgbaf(RgbafValue::new(samples)?)
    } else {
        builder.rgba(RgbaValue::new(samples)?)
    };
    builder.build()
}

/// The four channels of a constant color in the requested encoding.
fn channels(color: &Color, rgbaf: bool) -> Vec<Number> {
    let rgba = color.rgba().map(RgbaValue::values);
    let floats = color.rgbaf().map(RgbafValue::values);
    let numbers = |values: &[Scalar]| -> Vec<Number> {
        values.iter().filter_map(Scalar::as_number).collect()
    };
    match (rgbaf, rgba, floats) {
        (true, _, Some(values)) | (false, Some(values), _) => numbers(values),
        (true, Some(values), None) => numbers(values)
            .into_iter()
            .map(|channel| Number::Float(channel.as_f64() / 255.0))
            .collect(),
        (false, None, Some(values)) => numbers(values)
            .into_iter()
            .map(|channel| Number::Integer((channel.as_f64() * 255.0).round() as i64))
            .collect(),
        (_, None, None) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    const START: &str = "2012-03-15T10:00:00.000000Z";
    const END: &str = "2012-03-16T10:00:00.000000Z";

    fn rgba(values: Vec<Scalar>) -> Result<Color> {
        Ok(Color::builder().rgba(RgbaValue::new(values)?).build()?)
    }

    fn rgbaf(values: Vec<Scalar>) -> Result<Color> {
        Ok(Color::builder().rgbaf(RgbafValue::new(values)?).build()?)
    }

    #[test]
    fn color_list_as_rgba() -> Result<()> {
        let expected = rgba(vec![
            START.into(),
            255.into(),
            204.into(),
            0.into(),
            255.into(),
            END.into(),
            255.into(),
            204.into(),
            0.into(),
            255.into(),
        ])?;
        let mixed = [ColorSpec::from([1.0, 0.8, 0.0, 1.0]), ColorSpec::from(0xFFCC00FFu32)];
        assert_eq!(get_color_list([START, END], &mixed, false)?, expected);

        let text = [ColorSpec::from("#ffcc00ff"), ColorSpec::from(0xFFCC00u32)];
        assert_eq!(get_color_list([START, END], &text, false)?, expected);
        Ok(())
    }

    #[test]
    fn color_list_as_rgbaf() -> Result<()> {
        let expected = rgbaf(vec![
            START.into(),
            1.0.into(),
            0.8.into(),
            0.0.into(),
            1.0.into(),
            END.into(),
            1.0.into(),
            0.8.into(),
            0.0.into(),
            1.0.into(),
        ])?;
        let floats = [ColorSpec::from([1.0, 0.8, 0.0, 1.0]), ColorSpec::from(0xFFCC00u32)];
        assert_eq!(get_color_list([START, END], &floats, true)?, expected);

        let integers = [ColorSpec::from([255, 204, 0]), ColorSpec::from(0xFFCC00FFu32)];
        assert_eq!(get_color_list([START, END], &integers, true)?, expected);
        Ok(())
    }

    #[test]
    fn color_list_rejects_invalid_colors() {
        let colors = [ColorSpec::from([300, 204, 0]), ColorSpec::from(-0xFFCC00FFi64)];
        assert!(get_color_list([START, END], &colors, true).is_err());
    }

    #[test]
    fn color_list_rejects_malformed_timestamps() {
        let colors = [ColorSpec::from(0xFFCC00u32), ColorSpec::from(0xFFCC00u32)];
        assert!(matches!(
            get_color_list(["0000-00-00T00:00:00.000000Z", END], &colors, false),
            Err(CzmlError::Format { field: "datetime", .. })
        ));
    }

    #[test]
    fn color_list_needs_one_timestamp_per_color() {
        let colors = [ColorSpec::from(0xFFCC00u32)];
        assert!(matches!(
            get_color_list([START, END], &colors, false),
            Err(CzmlError::Shape { actual: 2, .. })
        ));
    }

    #[test]
    fn get_color_as_rgba() -> Result<()> {
        let expected = rgba(vec![255.into(), 204.into(), 0.into(), 255.into()])?;
        for spec in [
            ColorSpec::from("#ffcc00"),
            ColorSpec::from(0xFFCC00u32),
            ColorSpec::from("#ffcc00ff"),
            ColorSpec::from(0xFFCC00FFu32),
            ColorSpec::from([255, 204, 0]),
            ColorSpec::from([255, 204, 0, 255]),
        ] {
            assert_eq!(get_color(&spec)?, expected, "{:?}", spec);
        }
        Ok(())
    }

    #[test]
    fn get_color_as_rgbaf() -> Result<()> {
        let expected = rgbaf(vec![1.0.into(), 0.8.into(), 0.0.into(), 1.0.into()])?;
        assert_eq!(get_color(&ColorSpec::from([1.0, 0.8, 0.0]))?, expected);
        assert_eq!(get_color(&ColorSpec::from([1.0, 0.8, 0.0, 1.0]))?, expected);
        Ok(())
    }

    #[test]
    fn get_color_rejects_invalid_input() {
        for spec in [
            ColorSpec::from("a"),
            ColorSpec::from([0, 0, 0, 0, -300]),
            ColorSpec::from([0.3, 0.3, 0.1, 1.0, 1.0]),
        ] {
            assert!(get_color(&spec).is_err(), "{:?}", spec);
        }
    }
}
