//! Graphics attached to a packet.

use super::color::Color;
use super::material::{Material, PolylineMaterial};
use super::position::{
    BoxDimensions, EllipsoidRadii, EyeOffset, PositionList, PositionListOfLists,
    RectangleCoordinates,
};
use super::uri::Uri;
use crate::enums::{
    ArcType, ClassificationType, ColorBlendMode, CornerType, HeightReference, HorizontalOrigin,
    LabelStyle, ShadowMode, VerticalOrigin,
};
use crate::values::{
    Cartesian2Value, DistanceDisplayConditionValue, FontValue, NearFarScalarValue, Number,
    ReferenceValue, StringValue, TimeVarying,
};

czml_property! {
    /// Hides an object when it is outside a range of camera distances.
    pub struct DistanceDisplayCondition / DistanceDisplayConditionBuilder [deletable: Deletable, interpolatable: Interpolatable] {
        "distanceDisplayCondition" => distance_display_condition: DistanceDisplayConditionValue,
        "reference" => reference: ReferenceValue,
    }
}

czml_property! {
    /// A value interpolated by camera distance.
    pub struct NearFarScalar / NearFarScalarBuilder [deletable: Deletable, interpolatable: Interpolatable] {
        "nearFarScalar" => near_far_scalar: NearFarScalarValue,
        "reference" => reference: ReferenceValue,
    }
}

czml_property! {
    /// A screen-aligned image.
    pub struct Billboard / BillboardBuilder {
        "show" => show: bool,
        "image" => image: Uri,
        "scale" => scale: Number,
        "pixelOffset" => pixel_offset: Cartesian2Value,
        "eyeOffset" => eye_offset: EyeOffset,
        "horizontalOrigin" => horizontal_origin: HorizontalOrigin,
        "verticalOrigin" => vertical_origin: VerticalOrigin,
        "heightReference" => height_reference: HeightReference,
        /// Multiplied with the image's own colors.
        "color" => color: Color,
        /// Rotation in radians, counter-clockwise.
        "rotation" => rotation: Number,
        /// Whether width and height are in meters rather than pixels.
        "sizeInMeters" => size_in_meters: bool,
        "width" => width: Number,
        "height" => height: Number,
        "scaleByDistance" => scale_by_distance: NearFarScalar,
        "translucencyByDistance" => translucency_by_distance: NearFarScalar,
        "pixelOffsetScaleByDistance" => pixel_offset_scale_by_distance: NearFarScalar,
        "distanceDisplayCondition" => distance_display_condition: DistanceDisplayCondition,
        "disableDepthTestDistance" => disable_depth_test_distance: Number,
    }
}

czml_property! {
    /// A box centered on the packet position.
    pub struct Box / BoxBuilder {
        "show" => show: bool,
        "dimensions" => dimensions: BoxDimensions,
        "heightReference" => height_reference: HeightReference,
        "fill" => fill: bool,
        "material" => material: Material,
        "outline" => outline: bool,
        "outlineColor" => outline_color: Color,
        "outlineWidth" => outline_width: Number,
        "shadows" => shadows: ShadowMode,
        "distanceDisplayCondition" => distance_display_condition: DistanceDisplayCondition,
    }
}

czml_property! {
    /// A shape extruded along a list of positions.
    pub struct Corridor / CorridorBuilder {
        "show" => show: bool,
        "positions" => positions: PositionList,
        "width" => width: Number,
        "height" => height: Number,
        "heightReference" => height_reference: HeightReference,
        "extrudedHeight" => extruded_height: Number,
        "extrudedHeightReference" => extruded_height_reference: HeightReference,
        "cornerType" => corner_type: CornerType,
        "granularity" => granularity: Number,
        "fill" => fill: bool,
        "material" => material: Material,
        "outline" => outline: bool,
        "outlineColor" => outline_color: Color,
        "outlineWidth" => outline_width: Number,
        "shadows" => shadows: ShadowMode,
        "distanceDisplayCondition" => distance_display_condition: DistanceDisplayCondition,
        "classificationType" => classification_type: ClassificationType,
        "zIndex" => z_index: Number,
    }
}

czml_property! {
    /// A cylinder, cone or truncated cone.
    pub struct Cylinder / CylinderBuilder {
        "show" => show: bool,
        "length" => length: Number,
        "topRadius" => top_radius: Number,
        "bottomRadius" => bottom_radius: Number,
        "heightReference" => height_reference: HeightReference,
        "fill" => fill: bool,
        "material" => material: Material,
        "outline" => outline: bool,
        "outlineColor" => outline_color: Color,
        "outlineWidth" => outline_width: Number,
        "numberOfVerticalLines" => number_of_vertical_lines: Number,
        "slices" => slices: Number,
        "shadows" => shadows: ShadowMode,
        "distanceDisplayCondition" => distance_display_condition: DistanceDisplayCondition,
    }
}

czml_property! {
    /// An ellipse on or above the surface.
    pub struct Ellipse / EllipseBuilder {
        "show" => show: bool,
        "semiMajorAxis" => semi_major_axis: Number,
        "semiMinorAxis" => semi_minor_axis: Number,
        "height" => height: Number,
        "heightReference" => height_reference: HeightReference,
        "extrudedHeight" => extruded_height: Number,
        "extrudedHeightReference" => extruded_height_reference: HeightReference,
        "rotation" => rotation: Number,
        "stRotation" => st_rotation: Number,
        "granularity" => granularity: Number,
        "fill" => fill: bool,
        "material" => material: Material,
        "outline" => outline: bool,
        "outlineColor" => outline_color: Color,
        "outlineWidth" => outline_width: Number,
        "numberOfVerticalLines" => number_of_vertical_lines: Number,
        "shadows" => shadows: ShadowMode,
        "distanceDisplayCondition" => distance_display_condition: DistanceDisplayCondition,
        "classificationType" => classification_type: ClassificationType,
        "zIndex" => z_index: Number,
    }
}

czml_property! {
    /// An ellipsoid, or a partial ellipsoid bounded by clock and cone angles.
    pub struct Ellipsoid / EllipsoidBuilder {
        "show" => show: bool,
        "radii" => radii: EllipsoidRadii,
        "innerRadii" => inner_radii: EllipsoidRadii,
        "minimumClock" => minimum_clock: Number,
        "maximumClock" => maximum_clock: Number,
        "minimumCone" => minimum_cone: Number,
        "maximumCone" => maximum_cone: Number,
        "heightReference" => height_reference: HeightReference,
        "fill" => fill: bool,
        "material" => material: Material,
        "outline" => outline: bool,
        "outlineColor" => outline_color: Color,
        "outlineWidth" => outline_width: Number,
        "stackPartitions" => stack_partitions: Number,
        "slicePartitions" => slice_partitions: Number,
        "subdivisions" => subdivisions: Number,
        "shadows" => shadows: ShadowMode,
        "distanceDisplayCondition" => distance_display_condition: DistanceDisplayCondition,
    }
}

czml_property! {
    /// A text label. Shown with the `FILL` style unless told otherwise.
    pub struct Label / LabelBuilder {
        "horizontalOrigin" => horizontal_origin: HorizontalOrigin,
        "verticalOrigin" => vertical_origin: VerticalOrigin,
        "show" => show: bool,
        "text" => text: StringValue,
        "font" => font: FontValue,
        "style" => style: LabelStyle,
        "scale" => scale: Number,
        "showBackground" => show_background: bool,
        "backgroundColor" => background_color: Color,
        "fillColor" => fill_color: Color,
        "outlineColor" => outline_color: Color,
        "outlineWidth" => outline_width: Number,
        "pixelOffset" => pixel_offset: Cartesian2Value,
        "eyeOffset" => eye_offset: EyeOffset,
        "heightReference" => height_reference: HeightReference,
        "distanceDisplayCondition" => distance_display_condition: DistanceDisplayCondition,
    }
    defaults = label_defaults;
}

fn label_defaults(builder: LabelBuilder) -> LabelBuilder {
    builder.show(true).style(LabelStyle::Fill)
}

czml_property! {
    /// A glTF model.
    pub struct Model / ModelBuilder {
        "show" => show: bool,
        "gltf" => gltf: Uri,
        "scale" => scale: Number,
        "minimumPixelSize" => minimum_pixel_size: Number,
        "maximumScale" => maximum_scale: Number,
        "incrementallyLoadTextures" => incrementally_load_textures: bool,
        "runAnimations" => run_animations: bool,
        "shadows" => shadows: ShadowMode,
        "heightReference" => height_reference: HeightReference,
        "silhouetteColor" => silhouette_color: Color,
        "silhouetteSize" => silhouette_size: Number,
        "color" => color: Color,
        "colorBlendMode" => color_blend_mode: ColorBlendMode,
        "colorBlendAmount" => color_blend_amount: Number,
        "distanceDisplayCondition" => distance_display_condition: DistanceDisplayCondition,
    }
}

czml_property! {
    /// The trail of an object as it moves.
    pub struct Path / PathBuilder {
        "show" => show: TimeVarying<bool>,
        /// Seconds of path ahead of the object.
        "leadTime" => lead_time: Number,
        /// Seconds of path behind the object.
        "trailTime" => trail_time: Number,
        "width" => width: Number,
        /// Maximum seconds between samples of the drawn path.
        "resolution" => resolution: Number,
        "material" => material: PolylineMaterial,
        "distanceDisplayCondition" => distance_display_condition: DistanceDisplayCondition,
    }
}

czml_property! {
    /// A point drawn at the packet position.
    pub struct Point / PointBuilder {
        "show" => show: TimeVarying<bool>,
        "pixelSize" => pixel_size: Number,
        "heightReference" => height_reference: HeightReference,
        "color" => color: Color,
        "outlineColor" => outline_color: Color,
        "outlineWidth" => outline_width: Number,
        "scaleByDistance" => scale_by_distance: NearFarScalar,
        "translucencyByDistance" => translucency_by_distance: NearFarScalar,
        "distanceDisplayCondition" => distance_display_condition: DistanceDisplayCondition,
        "disableDepthTestDistance" => disable_depth_test_distance: Number,
    }
}

czml_property! {
    /// A polygon, optionally with holes and extruded.
    pub struct Polygon / PolygonBuilder {
        "show" => show: bool,
        "positions" => positions: PositionList,
        "holes" => holes: PositionListOfLists,
        "arcType" => arc_type: ArcType,
        "height" => height: Number,
        "heightReference" => height_reference: HeightReference,
        "extrudedHeight" => extruded_height: Number,
        "extrudedHeightReference" => extruded_height_reference: HeightReference,
        "stRotation" => st_rotation: Number,
        "granularity" => granularity: Number,
        "fill" => fill: bool,
        "material" => material: Material,
        "outline" => outline: bool,
        "outlineColor" => outline_color: Color,
        "outlineWidth" => outline_width: Number,
        "perPositionHeight" => per_position_height: bool,
        "closeTop" => close_top: bool,
        "closeBottom" => close_bottom: bool,
        "shadows" => shadows: ShadowMode,
        "distanceDisplayCondition" => distance_display_condition: DistanceDisplayCondition,
        "classificationType" => classification_type: ClassificationType,
        "zIndex" => z_index: Number,
    }
}

czml_property! {
    /// A line through a list of positions.
    pub struct Polyline / PolylineBuilder {
        "show" => show: bool,
        "positions" => positions: PositionList,
        "arcType" => arc_type: ArcType,
        "width" => width: Number,
        "granularity" => granularity: Number,
        "material" => material: PolylineMaterial,
        "shadows" => shadows: ShadowMode,
        /// Material used where the line is hidden by terrain.
        "depthFailMaterial" => depth_fail_material: PolylineMaterial,
        "distanceDisplayCondition" => distance_display_condition: DistanceDisplayCondition,
        "clampToGround" => clamp_to_ground: bool,
        "classificationType" => classification_type: ClassificationType,
        "zIndex" => z_index: Number,
    }
}

czml_property! {
    /// A cartographic rectangle on or above the surface.
    pub struct Rectangle / RectangleBuilder {
        "show" => show: bool,
        "coordinates" => coordinates: RectangleCoordinates,
        "height" => height: Number,
        "heightReference" => height_reference: HeightReference,
        "extrudedHeight" => extruded_height: Number,
        "extrudedHeightReference" => extruded_height_reference: HeightReference,
        "rotation" => rotation: Number,
        "stRotation" => st_rotation: Number,
        "granularity" => granularity: Number,
        "fill" => fill: bool,
        "material" => material: Material,
        "outline" => outline: bool,
        "outlineColor" => outline_color: Color,
        "outlineWidth" => outline_width: Number,
        "shadows" => shadows: ShadowMode,
        "distanceDisplayCondition" => distance_display_condition: DistanceDisplayCondition,
        "classificationType" => classification_type: ClassificationType,
        "zIndex" => z_index: Number,
    }
}

czml_property! {
    /// A 3D Tiles tileset.
    pub struct Tileset / TilesetBuilder {
        "show" => show: bool,
        "uri" => uri: Uri,
        "maximumScreenSpaceError" => maximum_screen_space_error: Number,
    }
}

czml_property! {
    /// A wall hanging from a list of positions.
    pub struct Wall / WallBuilder {
        "show" => show: bool,
        "positions" => positions: PositionList,
        /// Bottom height of the wall at each position.
        "minimumHeights" => minimum_heights: Vec<Number>,
        /// Top height of the wall at each position.
        "maximumHeights" => maximum_heights: Vec<Number>,
        "granularity" => granularity: Number,
        "fill" => fill: bool,
        "material" => material: Material,
        "outline" => outline: bool,
        "outlineColor" => outline_color: Color,
        "outlineWidth" => outline_width: Number,
        "shadows" => shadows: ShadowMode,
        "distanceDisplayCondition" => distance_display_condition: DistanceDisplayCondition,
    }
}
