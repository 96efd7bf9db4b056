//! Value types, one per CZML value encoding.
//!
//! Every value type validates its payload on construction and serializes to
//! the exact JSON shape CZML expects. Values are immutable; equality is by
//! payload.

pub(crate) mod scalar;

mod color;
mod coords;
mod interval;
mod number;
mod text;

#[cfg(test)]
mod tests;

pub use color::{RgbaValue, RgbafValue};
pub use coords::{
    Cartesian2Value, Cartesian3ListValue, Cartesian3Value, Cartesian3VelocityValue,
    CartographicDegreesListValue, CartographicDegreesValue, CartographicRadiansListValue,
    CartographicRadiansValue, CartographicRectangleValue, DistanceDisplayConditionValue,
    NearFarScalarValue, UnitQuaternionValue,
};
pub use interval::{EpochValue, IntervalValue, Sequence, TimeInterval, TimeVarying};
pub use number::NumberValue;
pub use scalar::{Number, Scalar};
pub use text::{FontValue, ReferenceValue, StringValue};
