//! Packets: one update of one object in the scene.

use crate::encoder::{CzmlObject, Dump, FieldWriter, IntervalContent, serialize_object};
use crate::error::CzmlResult;
use crate::properties::{
    Billboard, Box, Clock, Corridor, Cylinder, Ellipse, Ellipsoid, Label, Model, Orientation, Path,
    Point, Polygon, Polyline, Position, PositionList, PositionListOfLists, Rectangle, Tileset,
    ViewFrom, Wall,
};
use crate::values::{Sequence, StringValue, TimeInterval, TimeVarying};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

/// The CZML version written in the document preamble.
pub const CZML_VERSION: &str = "1.0";

/// Id of the preamble packet.
pub const PREAMBLE_ID: &str = "document";

/// When an object is available, as one interval or several.
#[derive(Debug, Clone, PartialEq)]
pub enum Availability {
    Single(TimeInterval),
    Multiple(Sequence<TimeInterval>),
}

impl From<TimeInterval> for Availability {
    fn from(interval: TimeInterval) -> Self {
        Availability::Single(interval)
    }
}

impl From<Sequence<TimeInterval>> for Availability {
    fn from(intervals: Sequence<TimeInterval>) -> Self {
        Availability::Multiple(intervals)
    }
}

impl From<Vec<TimeInterval>> for Availability {
    fn from(intervals: Vec<TimeInterval>) -> Self {
        Availability::Multiple(intervals.into())
    }
}

impl Serialize for Availability {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Availability::Single(interval) => interval.serialize(serializer),
            Availability::Multiple(intervals) => intervals.serialize(serializer),
        }
    }
}

/// What a packet's `position` holds: one point, or a list of vertices for
/// objects drawn from several points.
#[derive(Debug, Clone, PartialEq)]
pub enum PacketPosition {
    Single(Position),
    List(PositionList),
    Lists(PositionListOfLists),
}

macro_rules! packet_position_from {
    ($($variant:ident($ty:ty)),+) => {
        $(
            impl From<$ty> for PacketPosition {
                fn from(value: $ty) -> Self {
                    PacketPosition::$variant(value)
                }
            }

            impl From<$ty> for TimeVarying<PacketPosition> {
                fn from(value: $ty) -> Self {
                    TimeVarying::Constant(value.into())
                }
            }
        )+
    };
}

packet_position_from!(Single(Position), List(PositionList), Lists(PositionListOfLists));

impl Serialize for PacketPosition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PacketPosition::Single(position) => position.serialize(serializer),
            PacketPosition::List(positions) => positions.serialize(serializer),
            PacketPosition::Lists(positions) => positions.serialize(serializer),
        }
    }
}

impl IntervalContent for PacketPosition {
    fn write_content<W: FieldWriter>(&self, writer: &mut W) -> Result<(), W::Error> {
        match self {
            PacketPosition::Single(position) => position.write_content(writer),
            PacketPosition::List(positions) => positions.write_content(writer),
            PacketPosition::Lists(positions) => positions.write_content(writer),
        }
    }
}

/// Arbitrary named values attached to a packet, in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomProperties(Map<String, Value>);

impl CustomProperties {
    /// An empty set of properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace `key`. Any serializable value is accepted, property
    /// objects included.
    pub fn insert<T>(mut self, key: impl Into<String>, value: &T) -> CzmlResult<Self>
    where
        T: Serialize + ?Sized,
    {
        self.0.insert(key.into(), serde_json::to_value(value)?);
        Ok(self)
    }

    /// The serialized value of `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for CustomProperties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

macro_rules! packet_fields {
    ($($(#[$meta:meta])* $field:ident: $ty:ty),* $(,)?) => {
        impl Packet {
            $(
                $(#[$meta])*
                pub fn $field(&self) -> Option<&$ty> {
                    self.$field.as_ref()
                }
            )*
        }

        impl PacketBuilder {
            $(
                $(#[$meta])*
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }
    };
}

/// One CZML packet.
///
/// A packet marked `delete` serializes as `{"id": ..., "delete": true}`,
/// whatever else it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Packet {
    id: String,
    delete: Option<bool>,
    version: Option<String>,
    name: Option<StringValue>,
    parent: Option<String>,
    description: Option<StringValue>,
    clock: Option<TimeVarying<Clock>>,
    availability: Option<Availability>,
    properties: Option<CustomProperties>,
    position: Option<TimeVarying<PacketPosition>>,
    orientation: Option<TimeVarying<Orientation>>,
    view_from: Option<TimeVarying<ViewFrom>>,
    billboard: Option<TimeVarying<Billboard>>,
    r#box: Option<TimeVarying<Box>>,
    corridor: Option<TimeVarying<Corridor>>,
    cylinder: Option<TimeVarying<Cylinder>>,
    ellipse: Option<TimeVarying<Ellipse>>,
    ellipsoid: Option<TimeVarying<Ellipsoid>>,
    label: Option<TimeVarying<Label>>,
    model: Option<TimeVarying<Model>>,
    path: Option<TimeVarying<Path>>,
    point: Option<TimeVarying<Point>>,
    polygon: Option<TimeVarying<Polygon>>,
    polyline: Option<TimeVarying<Polyline>>,
    rectangle: Option<TimeVarying<Rectangle>>,
    tileset: Option<TimeVarying<Tileset>>,
    wall: Option<TimeVarying<Wall>>,
}

/// Builder for [`Packet`].
#[derive(Debug, Clone, Default)]
pub struct PacketBuilder {
    id: Option<String>,
    delete: Option<bool>,
    version: Option<String>,
    name: Option<StringValue>,
    parent: Option<String>,
    description: Option<StringValue>,
    clock: Option<TimeVarying<Clock>>,
    availability: Option<Availability>,
    properties: Option<CustomProperties>,
    position: Option<TimeVarying<PacketPosition>>,
    orientation: Option<TimeVarying<Orientation>>,
    view_from: Option<TimeVarying<ViewFrom>>,
    billboard: Option<TimeVarying<Billboard>>,
    r#box: Option<TimeVarying<Box>>,
    corridor: Option<TimeVarying<Corridor>>,
    cylinder: Option<TimeVarying<Cylinder>>,
    ellipse: Option<TimeVarying<Ellipse>>,
    ellipsoid: Option<TimeVarying<Ellipsoid>>,
    label: Option<TimeVarying<Label>>,
    model: Option<TimeVarying<Model>>,
    path: Option<TimeVarying<Path>>,
    point: Option<TimeVarying<Point>>,
    polygon: Option<TimeVarying<Polygon>>,
    polyline: Option<TimeVarying<Polyline>>,
    rectangle: Option<TimeVarying<Rectangle>>,
    tileset: Option<TimeVarying<Tileset>>,
    wall: Option<TimeVarying<Wall>>,
}

packet_fields! {
    /// The CZML version, only meaningful in the preamble.
    version: String,
    name: StringValue,
    /// Id of the parent object or folder.
    parent: String,
    /// HTML shown when the object is selected.
    description: StringValue,
    /// The clock settings, only meaningful in the preamble.
    clock: TimeVarying<Clock>,
    availability: Availability,
    properties: CustomProperties,
    position: TimeVarying<PacketPosition>,
    orientation: TimeVarying<Orientation>,
    view_from: TimeVarying<ViewFrom>,
    billboard: TimeVarying<Billboard>,
    r#box: TimeVarying<Box>,
    corridor: TimeVarying<Corridor>,
    cylinder: TimeVarying<Cylinder>,
    ellipse: TimeVarying<Ellipse>,
    ellipsoid: TimeVarying<Ellipsoid>,
    label: TimeVarying<Label>,
    model: TimeVarying<Model>,
    path: TimeVarying<Path>,
    point: TimeVarying<Point>,
    polygon: TimeVarying<Polygon>,
    polyline: TimeVarying<Polyline>,
    rectangle: TimeVarying<Rectangle>,
    tileset: TimeVarying<Tileset>,
    wall: TimeVarying<Wall>,
}

impl Packet {
    /// Start building a packet.
    pub fn builder() -> PacketBuilder {
        PacketBuilder::default()
    }

    /// Start building the document preamble: id `document` and the current
    /// CZML version.
    pub fn preamble() -> PacketBuilder {
        PacketBuilder::default()
            .id(PREAMBLE_ID)
            .version(CZML_VERSION)
    }

    /// The packet id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The `delete` flag, if set.
    pub fn delete(&self) -> Option<bool> {
        self.delete
    }

    /// Whether this is the document preamble.
    pub fn is_preamble(&self) -> bool {
        self.id == PREAMBLE_ID
    }
}

impl PacketBuilder {
    /// Set the id. A random UUID v4 is assigned when none is given.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Mark the object for deletion on the client.
    pub fn delete(mut self, delete: bool) -> Self {
        self.delete = Some(delete);
        self
    }

    /// Build the packet, generating an id if needed.
    pub fn build(self) -> Packet {
        let id = self.id.unwrap_or_else(|| {
            let id = Uuid::new_v4().to_string();
            debug!(%id, "generated packet id");
            id
        });
        Packet {
            id,
            delete: self.delete,
            version: self.version,
            name: self.name,
            parent: self.parent,
            description: self.description,
            clock: self.clock,
            availability: self.availability,
            properties: self.properties,
            position: self.position,
            orientation: self.orientation,
            view_from: self.view_from,
            billboard: self.billboard,
            r#box: self.r#box,
            corridor: self.corridor,
            cylinder: self.cylinder,
            ellipse: self.ellipse,
            ellipsoid: self.ellipsoid,
            label: self.label,
            model: self.model,
            path: self.path,
            point: self.point,
            polygon: self.polygon,
            polyline: self.polyline,
            rectangle: self.rectangle,
            tileset: self.tileset,
            wall: self.wall,
        }
    }
}

impl CzmlObject for Packet {
    fn write_fields<W: FieldWriter>(&self, writer: &mut W) -> Result<(), W::Error> {
        writer.field("id", Some(self.id.as_str()))?;
        writer.field("delete", self.delete.as_ref())?;
        writer.field("version", self.version.as_ref())?;
        writer.field("name", self.name.as_ref())?;
        writer.field("parent", self.parent.as_ref())?;
        writer.field("description", self.description.as_ref())?;
        writer.field("clock", self.clock.as_ref())?;
        writer.field("availability", self.availability.as_ref())?;
        writer.field("properties", self.properties.as_ref())?;
        writer.field("position", self.position.as_ref())?;
        writer.field("orientation", self.orientation.as_ref())?;
        writer.field("viewFrom", self.view_from.as_ref())?;
        writer.field("billboard", self.billboard.as_ref())?;
        writer.field("box", self.r#box.as_ref())?;
        writer.field("corridor", self.corridor.as_ref())?;
        writer.field("cylinder", self.cylinder.as_ref())?;
        writer.field("ellipse", self.ellipse.as_ref())?;
        writer.field("ellipsoid", self.ellipsoid.as_ref())?;
        writer.field("label", self.label.as_ref())?;
        writer.field("model", self.model.as_ref())?;
        writer.field("path", self.path.as_ref())?;
        writer.field("point", self.point.as_ref())?;
        writer.field("polygon", self.polygon.as_ref())?;
        writer.field("polyline", self.polyline.as_ref())?;
        writer.field("rectangle", self.rectangle.as_ref())?;
        writer.field("tileset", self.tileset.as_ref())?;
        writer.field("wall", self.wall.as_ref())
    }

    fn is_deleted(&self) -> bool {
        self.delete == Some(true)
    }

    fn identity(&self) -> Option<&str> {
        Some(&self.id)
    }
}

impl Serialize for Packet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_object(self, serializer)
    }
}

/// Pretty JSON with a four space indent.
impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = self.to_json().map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
