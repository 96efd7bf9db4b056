//! The `number` value encoding.

use super::scalar::{Number, Scalar, collect};
use crate::error::CzmlResult;
use crate::validation::check_values;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A number, constant or sampled as `[Time, Value, Time, Value, ...]`.
///
/// Serialized as `{"number": ...}`.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberValue {
    values: Vec<Scalar>,
}

impl NumberValue {
    /// A constant number.
    pub fn constant(value: impl Into<Number>) -> Self {
        Self {
            values: vec![Scalar::Number(value.into())],
        }
    }

    /// Time-tagged samples.
    pub fn sampled<I, S>(values: I) -> CzmlResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Scalar>,
    {
        let values = collect(values);
        check_values("NumberValue", 1, &values)?;
        Ok(Self { values })
    }

    /// The payload.
    pub fn values(&self) -> &[Scalar] {
        &self.values
    }
}

impl From<Number> for NumberValue {
    fn from(value: Number) -> Self {
        Self::constant(value)
    }
}

macro_rules! number_value_from {
    ($($source:ty),+) => {
        $(
            impl From<$source> for NumberValue {
                fn from(value: $source) -> Self {
                    Self::constant(value)
                }
            }
        )+
    };
}

number_value_from!(i8, i16, i32, i64, u8, u16, u32, f32, f64);

impl Serialize for NumberValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self.values.as_slice() {
            [constant] => map.serialize_entry("number", constant)?,
            samples => map.serialize_entry("number", samples)?,
        }
        map.end()
    }
}
