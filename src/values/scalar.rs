//! Numeric and sample elements shared by every value encoding.

use crate::time::Timestamp;
use chrono::{DateTime, TimeZone};
use serde::{Serialize, Serializer, ser};
use std::fmt;

/// A JSON number that remembers whether it was written as an integer.
///
/// `Number::from(2)` serializes as `2` and `Number::from(2.0)` as `2.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// An integral value.
    Integer(i64),
    /// A floating point value.
    Float(f64),
}

impl Number {
    /// The value as a float, whatever its original representation.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Integer(value) => value as f64,
            Number::Float(value) => value,
        }
    }

    /// Whether the value was given as an integer.
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// False for NaN and infinities, which JSON cannot represent.
    pub fn is_finite(&self) -> bool {
        match *self {
            Number::Integer(_) => true,
            Number::Float(value) => value.is_finite(),
        }
    }
}

macro_rules! number_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Number {
                fn from(value: $source) -> Self {
                    Number::$variant(value as $target)
                }
            }
        )+
    };
}

number_from!(Integer as i64: i8, i16, i32, i64, u8, u16, u32);
number_from!(Float as f64: f32, f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(value) => write!(f, "{}", value),
            Number::Float(value) => write!(f, "{:?}", value),
        }
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Number::Integer(value) => serializer.serialize_i64(value),
            Number::Float(value) if value.is_finite() => serializer.serialize_f64(value),
            Number::Float(value) => Err(ser::Error::custom(format!(
                "{} has no JSON representation",
                value
            ))),
        }
    }
}

/// One element of a value payload.
///
/// Time-tagged sample arrays interleave a time (seconds since an epoch, or
/// an ISO-8601 string) with the data channels of each sample. Value
/// constructors reject strings anywhere but in a time tag position, and
/// validate the ones they keep.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// A numeric channel or a time in seconds since the epoch.
    Number(Number),
    /// An ISO-8601 time tag.
    Time(String),
}

impl Scalar {
    /// The numeric value, if this is not a time string.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Scalar::Number(number) => Some(*number),
            Scalar::Time(_) => None,
        }
    }
}

impl From<Number> for Scalar {
    fn from(value: Number) -> Self {
        Scalar::Number(value)
    }
}

macro_rules! scalar_from_number {
    ($($source:ty),+) => {
        $(
            impl From<$source> for Scalar {
                fn from(value: $source) -> Self {
                    Scalar::Number(value.into())
                }
            }
        )+
    };
}

scalar_from_number!(i8, i16, i32, i64, u8, u16, u32, f32, f64);

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Time(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Time(value)
    }
}

impl From<Timestamp> for Scalar {
    fn from(value: Timestamp) -> Self {
        Scalar::Time(value.as_str().to_string())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Scalar {
    fn from(value: DateTime<Tz>) -> Self {
        Timestamp::from(value).into()
    }
}

impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Scalar::Number(number) => number.serialize(serializer),
            Scalar::Time(time) => serializer.serialize_str(time),
        }
    }
}

/// Collect anything convertible into a payload.
pub(crate) fn collect<I, S>(values: I) -> Vec<Scalar>
where
    I: IntoIterator<Item = S>,
    S: Into<Scalar>,
{
    values.into_iter().map(Into::into).collect()
}
