//! Coordinate-like value encodings.

use super::scalar::{Number, Scalar, collect};
use crate::error::CzmlResult;
use crate::validation::{check_list_of_values, check_values};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Declares a value holding either one constant tuple or time-tagged samples.
///
/// With `key = "..."` the payload is wrapped in a single-entry object.
macro_rules! time_tagged_value {
    (
        $(#[$meta:meta])*
        $name:ident, components = $count:literal $(, key = $key:literal)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            values: Vec<Scalar>,
        }

        impl $name {
            /// Number of components in one sample.
            pub const COMPONENTS: usize = $count;

            /// Validate `values` as a constant tuple or as time-tagged samples.
            pub fn new<I, S>(values: I) -> CzmlResult<Self>
            where
                I: IntoIterator<Item = S>,
                S: Into<Scalar>,
            {
                let values = collect(values);
                check_values(stringify!($name), $count, &values)?;
                Ok(Self { values })
            }

            /// The payload.
            pub fn values(&self) -> &[Scalar] {
                &self.values
            }

            /// Whether the payload holds time-tagged samples.
            pub fn is_sampled(&self) -> bool {
                self.values.len() != $count
            }
        }

        impl<T: Into<Number>> From<[T; $count]> for $name {
            fn from(values: [T; $count]) -> Self {
                Self {
                    values: values.into_iter().map(|value| Scalar::Number(value.into())).collect(),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let key: Option<&'static str> = None $(.or(Some($key)))?;
                serialize_payload(&self.values, key, serializer)
            }
        }
    };
}

fn serialize_payload<S: Serializer>(
    values: &[Scalar],
    key: Option<&'static str>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match key {
        None => values.serialize(serializer),
        Some(key) => {
            let mut map = serializer.serialize_map(Some(1))?;
            map.serialize_entry(key, values)?;
            map.end()
        }
    }
}

/// Declares a flat list of untagged tuples.
macro_rules! list_value {
    ($(#[$meta:meta])* $name:ident, components = $count:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            values: Vec<Scalar>,
        }

        impl $name {
            /// Validate `values` as a flat list of tuples.
            pub fn new<I, S>(values: I) -> CzmlResult<Self>
            where
                I: IntoIterator<Item = S>,
                S: Into<Scalar>,
            {
                let values = collect(values);
                check_list_of_values(stringify!($name), $count, &values)?;
                Ok(Self { values })
            }

            /// The payload.
            pub fn values(&self) -> &[Scalar] {
                &self.values
            }

            /// Number of tuples in the list.
            pub fn len(&self) -> usize {
                self.values.len() / $count
            }

            /// Always false: an empty list is rejected on construction.
            pub fn is_empty(&self) -> bool {
                self.values.is_empty()
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                self.values.serialize(serializer)
            }
        }
    };
}

time_tagged_value!(
    /// A three-dimensional Cartesian value `[X, Y, Z]`, or samples
    /// `[Time, X, Y, Z, ...]`.
    Cartesian3Value,
    components = 3
);

time_tagged_value!(
    /// A two-dimensional Cartesian value `[X, Y]`, or samples `[Time, X, Y, ...]`.
    ///
    /// Serialized as `{"cartesian2": [...]}`.
    Cartesian2Value,
    components = 2,
    key = "cartesian2"
);

time_tagged_value!(
    /// A position and velocity `[X, Y, Z, dX, dY, dZ]`, or samples.
    Cartesian3VelocityValue,
    components = 6
);

time_tagged_value!(
    /// A WGS84 position `[Longitude, Latitude, Height]` with angles in degrees.
    CartographicDegreesValue,
    components = 3
);

time_tagged_value!(
    /// A WGS84 position `[Longitude, Latitude, Height]` with angles in radians.
    CartographicRadiansValue,
    components = 3
);

time_tagged_value!(
    /// A cartographic rectangle `[West, South, East, North]`.
    CartographicRectangleValue,
    components = 4
);

time_tagged_value!(
    /// A rotation `[X, Y, Z, W]`.
    UnitQuaternionValue,
    components = 4
);

time_tagged_value!(
    /// `[NearDistance, NearValue, FarDistance, FarValue]`.
    NearFarScalarValue,
    components = 4
);

time_tagged_value!(
    /// Visibility range `[NearDistance, FarDistance]` measured from the camera.
    DistanceDisplayConditionValue,
    components = 2
);

list_value!(
    /// A list of Cartesian positions `[X, Y, Z, X, Y, Z, ...]`.
    Cartesian3ListValue,
    components = 3
);

list_value!(
    /// A list of WGS84 positions in degrees.
    CartographicDegreesListValue,
    components = 3
);

list_value!(
    /// A list of WGS84 positions in radians.
    CartographicRadiansListValue,
    components = 3
);
