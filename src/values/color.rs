//! Color value encodings.

use super::scalar::{Number, Scalar, collect};
use crate::error::{CzmlError, CzmlResult};
use crate::validation::check_color;
use serde::{Serialize, Serializer};

/// Channel count of a constant color without alpha.
const RGB_CHANNELS: usize = 3;

/// A color as `[Red, Green, Blue, Alpha]` with integer channels in `0-255`,
/// or time-tagged samples `[Time, Red, Green, Blue, Alpha, ...]`.
///
/// Three channels get a fully opaque alpha appended.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbaValue {
    values: Vec<Scalar>,
}

impl RgbaValue {
    /// Largest channel value.
    pub const MAX_CHANNEL: u8 = 255;

    /// Validate a constant color or a list of samples.
    pub fn new<I, S>(values: I) -> CzmlResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Scalar>,
    {
        let mut values = collect(values);
        check_color("RgbaValue", &values, f64::from(Self::MAX_CHANNEL))?;
        if let Some(channel) = channels(&values).find(|channel| !is_integer(channel)) {
            return Err(CzmlError::Range {
                encoding: "RgbaValue",
                reason: format!(
                    "color values must be integers in the range 0-255, got {:?}",
                    channel
                ),
            });
        }
        if values.len() == RGB_CHANNELS {
            values.push(Number::Integer(i64::from(Self::MAX_CHANNEL)).into());
        }
        Ok(Self { values })
    }

    /// The payload, alpha included.
    pub fn values(&self) -> &[Scalar] {
        &self.values
    }
}

impl From<[u8; 4]> for RgbaValue {
    fn from(values: [u8; 4]) -> Self {
        Self {
            values: collect(values),
        }
    }
}

impl From<[u8; 3]> for RgbaValue {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::from([red, green, blue, Self::MAX_CHANNEL])
    }
}

impl Serialize for RgbaValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}

/// A color as `[Red, Green, Blue, Alpha]` with channels in `0.0-1.0`,
/// or time-tagged samples `[Time, Red, Green, Blue, Alpha, ...]`.
///
/// Three channels get a fully opaque alpha appended.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbafValue {
    values: Vec<Scalar>,
}

impl RgbafValue {
    /// Largest channel value.
    pub const MAX_CHANNEL: f64 = 1.0;

    /// Validate a constant color or a list of samples.
    pub fn new<I, S>(values: I) -> CzmlResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Scalar>,
    {
        let mut values = collect(values);
        check_color("RgbafValue", &values, Self::MAX_CHANNEL)?;
        if values.len() == RGB_CHANNELS {
            values.push(Number::Float(Self::MAX_CHANNEL).into());
        }
        Ok(Self { values })
    }

    /// The payload, alpha included.
    pub fn values(&self) -> &[Scalar] {
        &self.values
    }
}

impl Serialize for RgbafValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}

/// Channels of a validated color payload, skipping sample time tags.
fn channels(values: &[Scalar]) -> impl Iterator<Item = &Scalar> {
    let sampled = values.len() > 4;
    values
        .iter()
        .enumerate()
        .filter(move |(index, _)| !sampled || index % 5 != 0)
        .map(|(_, value)| value)
}

fn is_integer(value: &Scalar) -> bool {
    value.as_number().is_some_and(|number| number.is_integer())
}
