//! The color property and its constructors.

use crate::colors::ColorSpec;
use crate::encoder::CzmlObject;
use crate::error::{CzmlError, CzmlResult};
use crate::validation::check_alternatives;
use crate::values::{Number, ReferenceValue, RgbaValue, RgbafValue};
use std::str::FromStr;

const COLOR_ALTERNATIVES: &[&str] = &["rgba", "rgbaf", "reference"];

/// Hex values above this carry an alpha channel (`RRGGBBAA`).
const MAX_RGB_HEX: u32 = 0xFF_FFFF;

czml_property! {
    /// A color, optionally varying over time.
    pub struct Color / ColorBuilder [deletable: Deletable, interpolatable: Interpolatable] {
        /// Integer channels in `0-255`.
        "rgba" => rgba: RgbaValue,
        /// Float channels in `0.0-1.0`.
        "rgbaf" => rgbaf: RgbafValue,
        "reference" => reference: ReferenceValue,
    }
    validate = validate_color;
}

fn validate_color(color: &Color) -> CzmlResult<()> {
    if color.is_deleted() {
        return Ok(());
    }
    check_alternatives(
        "Color",
        COLOR_ALTERNATIVES,
        &[
            color.rgba.is_some(),
            color.rgbaf.is_some(),
            color.reference.is_some(),
        ],
    )
}

impl Color {
    /// Build a color from three or four channels.
    ///
    /// All-integer input is encoded as `rgba`, anything else as `rgbaf`.
    /// Three channels get a fully opaque alpha.
    pub fn from_list<I, N>(channels: I) -> CzmlResult<Self>
    where
        I: IntoIterator<Item = N>,
        N: Into<Number>,
    {
        let channels: Vec<Number> = channels.into_iter().map(Into::into).collect();
        if !matches!(channels.len(), 3 | 4) {
            return Err(CzmlError::Shape {
                encoding: "Color",
                expected: "either 3 or 4 channels".to_string(),
                actual: channels.len(),
            });
        }

        let builder = Color::builder();
        let builder = if channels.iter().all(Number::is_integer) {
            builder.rgba(RgbaValue::new(channels)?)
        } else {
            builder.rgbaf(RgbafValue::new(channels.iter().map(Number::as_f64))?)
        };
        builder.build()
    }

    /// Build a color from a packed hex integer.
    ///
    /// Values up to `0xFFFFFF` are read as `RRGGBB` with full opacity, larger
    /// values as `RRGGBBAA`.
    pub fn from_hex(hex: u32) -> Self {
        if hex > MAX_RGB_HEX {
            Self::from_rgba_hex(hex)
        } else {
            Self::from_rgb_hex(hex)
        }
    }

    /// Whether `spec` describes a valid color.
    pub fn is_valid(spec: &ColorSpec) -> bool {
        match spec {
            ColorSpec::Hex(hex) => u32::try_from(*hex).is_ok(),
            ColorSpec::Text(text) => text.parse::<Color>().is_ok(),
            ColorSpec::Channels(channels) => {
                if !matches!(channels.len(), 3 | 4) {
                    return false;
                }
                let integers = channels.iter().all(Number::is_integer);
                let floats = channels.iter().all(|channel| !channel.is_integer());
                let max = if integers {
                    255.0
                } else if floats {
                    1.0
                } else {
                    return false;
                };
                channels
                    .iter()
                    .all(|channel| (0.0..=max).contains(&channel.as_f64()))
            }
        }
    }

    fn from_rgb_hex(hex: u32) -> Self {
        let [_, red, green, blue] = hex.to_be_bytes();
        Self::from_rgba_value(RgbaValue::from([red, green, blue]))
    }

    fn from_rgba_hex(hex: u32) -> Self {
        Self::from_rgba_value(RgbaValue::from(hex.to_be_bytes()))
    }

    fn from_rgba_value(rgba: RgbaValue) -> Self {
        Color {
            deletable: Default::default(),
            interpolatable: Default::default(),
            rgba: Some(rgba),
            rgbaf: None,
            reference: None,
        }
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA`; the leading `#` is optional.
impl FromStr for Color {
    type Err = CzmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        let invalid = || CzmlError::Format {
            field: "Color",
            reason: format!("'{}' is not a #RRGGBB or #RRGGBBAA hex color", s),
        };
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let hex = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        match digits.len() {
            6 => Ok(Self::from_rgb_hex(hex)),
            8 => Ok(Self::from_rgba_hex(hex)),
            _ => Err(invalid()),
        }
    }
}
