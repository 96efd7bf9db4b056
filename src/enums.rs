//! Closed CZML vocabularies.
//!
//! Every enum serializes to its literal CZML name and parses back from it.

use crate::error::CzmlError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

macro_rules! czml_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $text:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The CZML name.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CzmlError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(CzmlError::Format {
                        field: stringify!($name),
                        reason: format!("unknown value '{}'", other),
                    }),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

czml_enum! {
    /// The interpolation algorithm used between samples.
    pub enum InterpolationAlgorithm {
        Linear => "LINEAR",
        Lagrange => "LAGRANGE",
        Hermite => "HERMITE",
    }
}

czml_enum! {
    /// What a client does when asked for a value outside the sampled range.
    pub enum ExtrapolationType {
        None => "NONE",
        Hold => "HOLD",
        Extrapolate => "EXTRAPOLATE",
    }
}

czml_enum! {
    /// The reference frame of Cartesian positions.
    pub enum ReferenceFrame {
        Fixed => "FIXED",
        Inertial => "INERTIAL",
    }
}

czml_enum! {
    /// How a label is drawn.
    pub enum LabelStyle {
        Fill => "FILL",
        Outline => "OUTLINE",
        FillAndOutline => "FILL_AND_OUTLINE",
    }
}

czml_enum! {
    /// Clock behavior at its start and stop times.
    pub enum ClockRange {
        Unbounded => "UNBOUNDED",
        Clamped => "CLAMPED",
        LoopStop => "LOOP_STOP",
    }
}

czml_enum! {
    /// How a clock advances each tick.
    pub enum ClockStep {
        TickDependent => "TICK_DEPENDENT",
        SystemClockMultiplier => "SYSTEM_CLOCK_MULTIPLIER",
        SystemClock => "SYSTEM_CLOCK",
    }
}

czml_enum! {
    pub enum VerticalOrigin {
        Baseline => "BASELINE",
        Bottom => "BOTTOM",
        Center => "CENTER",
        Top => "TOP",
    }
}

czml_enum! {
    pub enum HorizontalOrigin {
        Left => "LEFT",
        Center => "CENTER",
        Right => "RIGHT",
    }
}

czml_enum! {
    /// Height of an object relative to the terrain.
    pub enum HeightReference {
        None => "NONE",
        ClampToGround => "CLAMP_TO_GROUND",
        RelativeToGround => "RELATIVE_TO_GROUND",
    }
}

czml_enum! {
    /// How a model color blends with the model's own colors.
    pub enum ColorBlendMode {
        Highlight => "HIGHLIGHT",
        Replace => "REPLACE",
        Mix => "MIX",
    }
}

czml_enum! {
    pub enum ShadowMode {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
        CastOnly => "CAST_ONLY",
        ReceiveOnly => "RECEIVE_ONLY",
    }
}

czml_enum! {
    /// What a ground geometry is draped over.
    pub enum ClassificationType {
        Terrain => "TERRAIN",
        Cesium3dTile => "CESIUM_3D_TILE",
        Both => "BOTH",
    }
}

czml_enum! {
    /// The kind of line drawn between two positions.
    pub enum ArcType {
        None => "NONE",
        Geodesic => "GEODESIC",
        Rhumb => "RHUMB",
    }
}

czml_enum! {
    pub enum StripeOrientation {
        Horizontal => "HORIZONTAL",
        Vertical => "VERTICAL",
    }
}

czml_enum! {
    /// The style of a corridor corner.
    pub enum CornerType {
        Rounded => "ROUNDED",
        Mitered => "MITERED",
        Beveled => "BEVELED",
    }
}
