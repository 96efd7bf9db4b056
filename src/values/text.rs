//! String-valued encodings.

use crate::encoder::{FieldWriter, IntervalContent};
use crate::error::{CzmlError, CzmlResult};
use crate::validation::check_reference;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A reference to a property of another object, `id#property`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferenceValue(String);

impl ReferenceValue {
    /// Validate and wrap a reference string.
    pub fn new(reference: impl Into<String>) -> CzmlResult<Self> {
        let reference = reference.into();
        check_reference(&reference)?;
        Ok(Self(reference))
    }

    /// The referenced object id.
    pub fn id(&self) -> &str {
        self.0.split_once('#').map_or("", |(id, _)| id)
    }

    /// The referenced property path.
    pub fn property(&self) -> &str {
        self.0.split_once('#').map_or("", |(_, property)| property)
    }

    /// The full reference string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ReferenceValue {
    type Err = CzmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for ReferenceValue {
    type Error = CzmlError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ReferenceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ReferenceValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

macro_rules! plain_string {
    ($(#[$meta:meta])* $name:ident, key = $key:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
        pub struct $name(String);

        impl $name {
            /// Wrap a string.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// The wrapped string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.0)
            }
        }

        impl IntervalContent for $name {
            fn write_content<W: FieldWriter>(&self, writer: &mut W) -> Result<(), W::Error> {
                writer.field($key, Some(self))
            }
        }
    };
}

plain_string!(
    /// A free-form string.
    StringValue,
    key = "string"
);

plain_string!(
    /// A font, using the syntax of the CSS `font` property.
    FontValue,
    key = "font"
);
