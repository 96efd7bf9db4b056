//! Property types.
//!
//! A property is a fixed, ordered set of optional CZML fields, built through a
//! builder whose `build` checks the whole object. Absent fields are never
//! serialized, and a property marked deleted serializes as
//! `{"delete": true}`.

#[macro_use]
mod macros;

mod clock;
mod color;
mod graphics;
mod material;
mod position;
mod uri;


pub use clock::{Clock, ClockBuilder};
pub use color::{Color, ColorBuilder};
pub use graphics::{
    Billboard, BillboardBuilder, Box, BoxBuilder, Corridor, CorridorBuilder, Cylinder,
    CylinderBuilder, DistanceDisplayCondition, DistanceDisplayConditionBuilder, Ellipse,
    EllipseBuilder, Ellipsoid, EllipsoidBuilder, Label, LabelBuilder, Model, ModelBuilder,
    NearFarScalar, NearFarScalarBuilder, Path, PathBuilder, Point, PointBuilder, Polygon,
    PolygonBuilder, Polyline, PolylineBuilder, Rectangle, RectangleBuilder, Tileset,
    TilesetBuilder, Wall, WallBuilder,
};
pub use material::{
    CheckerboardMaterial, CheckerboardMaterialBuilder, GridMaterial, GridMaterialBuilder,
    ImageMaterial, ImageMaterialBuilder, Material, MaterialBuilder, PolylineArrow,
    PolylineArrowBuilder, PolylineArrowMaterial, PolylineArrowMaterialBuilder, PolylineDash,
    PolylineDashBuilder, PolylineDashMaterial, PolylineDashMaterialBuilder, PolylineGlow,
    PolylineGlowBuilder, PolylineGlowMaterial, PolylineGlowMaterialBuilder, PolylineMaterial,
    PolylineMaterialBuilder, PolylineOutline, PolylineOutlineBuilder, PolylineOutlineMaterial,
    PolylineOutlineMaterialBuilder, SolidColorMaterial, SolidColorMaterialBuilder, StripeMaterial,
    StripeMaterialBuilder,
};
pub use position::{
    BoxDimensions, BoxDimensionsBuilder, EllipsoidRadii, EllipsoidRadiiBuilder, EyeOffset,
    EyeOffsetBuilder, Orientation, OrientationBuilder, Position, PositionBuilder, PositionList,
    PositionListBuilder, PositionListOfLists, PositionListOfListsBuilder, RectangleCoordinates,
    RectangleCoordinatesBuilder, ViewFrom, ViewFromBuilder,
};
pub use uri::Uri;
