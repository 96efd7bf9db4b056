//! Positional properties.

use crate::encoder::CzmlObject;
use crate::enums::ReferenceFrame;
use crate::error::CzmlResult;
use crate::validation::check_alternatives;
use crate::values::{
    Cartesian3ListValue, Cartesian3Value, Cartesian3VelocityValue, CartographicDegreesListValue,
    CartographicDegreesValue, CartographicRadiansListValue, CartographicRadiansValue,
    CartographicRectangleValue, ReferenceValue, UnitQuaternionValue,
};

const POSITION_ALTERNATIVES: &[&str] = &[
    "cartesian",
    "cartographicRadians",
    "cartographicDegrees",
    "cartesianVelocity",
    "reference",
];

const POSITION_LIST_ALTERNATIVES: &[&str] = &[
    "cartesian",
    "cartographicRadians",
    "cartographicDegrees",
    "references",
];

const RECTANGLE_ALTERNATIVES: &[&str] = &["wsen", "wsenDegrees", "reference"];

const CARTESIAN_ALTERNATIVES: &[&str] = &["cartesian", "reference"];

czml_property! {
    /// A position, optionally varying over time.
    pub struct Position / PositionBuilder [deletable: Deletable, interpolatable: Interpolatable] {
        /// The frame in which Cartesian positions are given.
        "referenceFrame" => reference_frame: ReferenceFrame,
        /// `[X, Y, Z]` in meters relative to the reference frame.
        "cartesian" => cartesian: Cartesian3Value,
        "cartographicRadians" => cartographic_radians: CartographicRadiansValue,
        "cartographicDegrees" => cartographic_degrees: CartographicDegreesValue,
        /// Position and velocity in meters and meters per second.
        "cartesianVelocity" => cartesian_velocity: Cartesian3VelocityValue,
        "reference" => reference: ReferenceValue,
    }
    validate = validate_position;
}

fn validate_position(position: &Position) -> CzmlResult<()> {
    if position.is_deleted() {
        return Ok(());
    }
    check_alternatives(
        "Position",
        POSITION_ALTERNATIVES,
        &[
            position.cartesian.is_some(),
            position.cartographic_radians.is_some(),
            position.cartographic_degrees.is_some(),
            position.cartesian_velocity.is_some(),
            position.reference.is_some(),
        ],
    )
}

czml_property! {
    /// A list of positions.
    pub struct PositionList / PositionListBuilder [deletable: Deletable] {
        "referenceFrame" => reference_frame: ReferenceFrame,
        "cartesian" => cartesian: Cartesian3ListValue,
        "cartographicRadians" => cartographic_radians: CartographicRadiansListValue,
        "cartographicDegrees" => cartographic_degrees: CartographicDegreesListValue,
        /// Positions taken from other objects.
        "references" => references: Vec<ReferenceValue>,
    }
    validate = validate_position_list;
}

fn validate_position_list(list: &PositionList) -> CzmlResult<()> {
    if list.is_deleted() {
        return Ok(());
    }
    check_alternatives(
        "PositionList",
        POSITION_LIST_ALTERNATIVES,
        &[
            list.cartesian.is_some(),
            list.cartographic_radians.is_some(),
            list.cartographic_degrees.is_some(),
            list.references.is_some(),
        ],
    )
}

czml_property! {
    /// A list of position lists, such as the holes of a polygon.
    pub struct PositionListOfLists / PositionListOfListsBuilder [deletable: Deletable] {
        "referenceFrame" => reference_frame: ReferenceFrame,
        "cartesian" => cartesian: Vec<Cartesian3ListValue>,
        "cartographicRadians" => cartographic_radians: Vec<CartographicRadiansListValue>,
        "cartographicDegrees" => cartographic_degrees: Vec<CartographicDegreesListValue>,
        "references" => references: Vec<Vec<ReferenceValue>>,
    }
    validate = validate_position_list_of_lists;
}

fn validate_position_list_of_lists(lists: &PositionListOfLists) -> CzmlResult<()> {
    if lists.is_deleted() {
        return Ok(());
    }
    check_alternatives(
        "PositionListOfLists",
        POSITION_LIST_ALTERNATIVES,
        &[
            lists.cartesian.is_some(),
            lists.cartographic_radians.is_some(),
            lists.cartographic_degrees.is_some(),
            lists.references.is_some(),
        ],
    )
}

czml_property! {
    /// The corners of a cartographic rectangle.
    pub struct RectangleCoordinates / RectangleCoordinatesBuilder [deletable: Deletable, interpolatable: Interpolatable] {
        /// `[West, South, East, North]` in radians.
        "wsen" => wsen: CartographicRectangleValue,
        /// `[West, South, East, North]` in degrees.
        "wsenDegrees" => wsen_degrees: CartographicRectangleValue,
        "reference" => reference: ReferenceValue,
    }
    validate = validate_rectangle_coordinates;
}

fn validate_rectangle_coordinates(coordinates: &RectangleCoordinates) -> CzmlResult<()> {
    if coordinates.is_deleted() {
        return Ok(());
    }
    check_alternatives(
        "RectangleCoordinates",
        RECTANGLE_ALTERNATIVES,
        &[
            coordinates.wsen.is_some(),
            coordinates.wsen_degrees.is_some(),
            coordinates.reference.is_some(),
        ],
    )
}

czml_property! {
    /// Suggested initial camera offset when tracking an object.
    pub struct ViewFrom / ViewFromBuilder [deletable: Deletable, interpolatable: Interpolatable] {
        "cartesian" => cartesian: Cartesian3Value,
        "reference" => reference: ReferenceValue,
    }
    validate = validate_view_from;
}

fn validate_view_from(view_from: &ViewFrom) -> CzmlResult<()> {
    validate_cartesian(
        "ViewFrom",
        view_from.is_deleted(),
        view_from.cartesian.is_some(),
        view_from.reference.is_some(),
    )
}

czml_property! {
    /// The radii of an ellipsoid.
    pub struct EllipsoidRadii / EllipsoidRadiiBuilder [deletable: Deletable, interpolatable: Interpolatable] {
        "cartesian" => cartesian: Cartesian3Value,
        "reference" => reference: ReferenceValue,
    }
    validate = validate_ellipsoid_radii;
}

fn validate_ellipsoid_radii(radii: &EllipsoidRadii) -> CzmlResult<()> {
    validate_cartesian(
        "EllipsoidRadii",
        radii.is_deleted(),
        radii.cartesian.is_some(),
        radii.reference.is_some(),
    )
}

czml_property! {
    /// The width, depth and height of a box.
    pub struct BoxDimensions / BoxDimensionsBuilder [deletable: Deletable, interpolatable: Interpolatable] {
        "cartesian" => cartesian: Cartesian3Value,
        "reference" => reference: ReferenceValue,
    }
    validate = validate_box_dimensions;
}

fn validate_box_dimensions(dimensions: &BoxDimensions) -> CzmlResult<()> {
    validate_cartesian(
        "BoxDimensions",
        dimensions.is_deleted(),
        dimensions.cartesian.is_some(),
        dimensions.reference.is_some(),
    )
}

fn validate_cartesian(
    type_name: &'static str,
    deleted: bool,
    cartesian: bool,
    reference: bool,
) -> CzmlResult<()> {
    if deleted {
        return Ok(());
    }
    check_alternatives(type_name, CARTESIAN_ALTERNATIVES, &[cartesian, reference])
}

czml_property! {
    /// An offset in eye coordinates, `[X, Y, Z]` in meters.
    pub struct EyeOffset / EyeOffsetBuilder [deletable: Deletable, interpolatable: Interpolatable] {
        "cartesian" => cartesian: Cartesian3Value,
        "reference" => reference: ReferenceValue,
    }
}

czml_property! {
    /// An orientation, optionally varying over time.
    pub struct Orientation / OrientationBuilder [deletable: Deletable, interpolatable: Interpolatable] {
        /// The rotation from the local frame to the Earth fixed frame.
        "unitQuaternion" => unit_quaternion: UnitQuaternionValue,
        "reference" => reference: ReferenceValue,
        /// Orient along the velocity of the referenced position.
        "velocityReference" => velocity_reference: ReferenceValue,
    }
}
