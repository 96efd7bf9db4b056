//! Generic CZML encoder.
//!
//! Every packet and property type describes itself through [`CzmlObject`]: an
//! ordered walk over its declared fields plus a delete capability. The
//! encoder turns that walk into a JSON object, applying the same rules to
//! every node:
//!
//! 1. A node reporting [`CzmlObject::is_deleted`] emits only its identity and
//!    `"delete": true`, whatever else it holds.
//! 2. Otherwise every present field is emitted in declared order; absent
//!    fields are omitted, never written as `null`.
//!
//! Value types carry their own `Serialize` rules and never go through the
//! field walk.

use crate::error::{CzmlError, CzmlResult};
use crate::values::Number;
use serde::ser::{self, SerializeMap};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::ser::PrettyFormatter;
use std::io;
use tracing::{debug, warn};

/// Receives the declared fields of a [`CzmlObject`], in order.
pub trait FieldWriter {
    /// Error raised by the underlying serializer.
    type Error: ser::Error;

    /// Emit `name` if `value` is present; absent values are skipped.
    fn field<T>(&mut self, name: &'static str, value: Option<&T>) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized;
}

/// The capability contract of every packet and property type.
pub trait CzmlObject {
    /// Walk the declared fields in CZML order.
    fn write_fields<W: FieldWriter>(&self, writer: &mut W) -> Result<(), W::Error>;

    /// Whether the node is currently marked for deletion.
    fn is_deleted(&self) -> bool {
        false
    }

    /// Identity preserved on deletion (the packet id).
    fn identity(&self) -> Option<&str> {
        None
    }
}

/// A value that can sit inside an [`IntervalValue`](crate::values::IntervalValue).
///
/// Property objects contribute their own fields; primitives are written under
/// their CZML type key.
pub trait IntervalContent {
    /// Write the content next to the `interval` entry.
    fn write_content<W: FieldWriter>(&self, writer: &mut W) -> Result<(), W::Error>;
}

/// Field writer backed by a serde map.
pub(crate) struct MapFieldWriter<M> {
    map: M,
}

impl<M: SerializeMap> MapFieldWriter<M> {
    pub(crate) fn new(map: M) -> Self {
        Self { map }
    }

    pub(crate) fn end(self) -> Result<M::Ok, M::Error> {
        self.map.end()
    }
}

impl<M: SerializeMap> FieldWriter for MapFieldWriter<M> {
    type Error = M::Error;

    fn field<T>(&mut self, name: &'static str, value: Option<&T>) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        match value {
            Some(value) => self.map.serialize_entry(name, value),
            None => Ok(()),
        }
    }
}

/// Write the fields of `object`, honoring delete precedence.
pub fn write_object<T, W>(object: &T, writer: &mut W) -> Result<(), W::Error>
where
    T: CzmlObject + ?Sized,
    W: FieldWriter,
{
    if object.is_deleted() {
        writer.field("id", object.identity())?;
        return writer.field("delete", Some(&true));
    }
    object.write_fields(writer)
}

/// Serialize `object` as a JSON object.
pub fn serialize_object<T, S>(object: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: CzmlObject + ?Sized,
    S: Serializer,
{
    let mut writer = MapFieldWriter::new(serializer.serialize_map(None)?);
    write_object(object, &mut writer)?;
    writer.end()
}

impl IntervalContent for bool {
    fn write_content<W: FieldWriter>(&self, writer: &mut W) -> Result<(), W::Error> {
        writer.field("boolean", Some(self))
    }
}

impl IntervalContent for Number {
    fn write_content<W: FieldWriter>(&self, writer: &mut W) -> Result<(), W::Error> {
        writer.field("number", Some(self))
    }
}

impl IntervalContent for String {
    fn write_content<W: FieldWriter>(&self, writer: &mut W) -> Result<(), W::Error> {
        writer.field("string", Some(self))
    }
}

/// Lists merge the output of their elements, in order. A key written by
/// several elements appears once, at its first position, with the last value.
impl<T: IntervalContent> IntervalContent for Vec<T> {
    fn write_content<W: FieldWriter>(&self, writer: &mut W) -> Result<(), W::Error> {
        let mut merged = MergedFields::default();
        for item in self {
            item.write_content(&mut merged)
                .map_err(<W::Error as ser::Error>::custom)?;
        }
        for (name, value) in &merged.fields {
            writer.field(*name, Some(value))?;
        }
        Ok(())
    }
}

/// Buffers fields by name; writing a name again replaces its value in place.
#[derive(Default)]
struct MergedFields {
    fields: Vec<(&'static str, serde_json::Value)>,
}

impl FieldWriter for MergedFields {
    type Error = serde_json::Error;

    fn field<T>(&mut self, name: &'static str, value: Option<&T>) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        let Some(value) = value else {
            return Ok(());
        };
        let value = serde_json::to_value(value)?;
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
        Ok(())
    }
}

/// Output settings for the [`Encoder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderOptions {
    /// Pretty print with this many spaces per level; compact when `None`.
    pub indent: Option<usize>,
    /// Omit absent fields. CZML requires it, so `false` is ignored.
    pub omit_absent: bool,
}

impl EncoderOptions {
    /// Single-line output.
    pub fn compact() -> Self {
        Self::default()
    }

    /// Indented output.
    pub fn pretty(indent: usize) -> Self {
        Self {
            indent: Some(indent),
            ..Self::default()
        }
    }

    /// Request (or refuse) omission of absent fields.
    pub fn omit_absent(mut self, omit_absent: bool) -> Self {
        self.omit_absent = omit_absent;
        self
    }
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            indent: None,
            omit_absent: true,
        }
    }
}

/// Serializes CZML object graphs to text or to a byte sink.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    indent: Option<usize>,
}

impl Encoder {
    /// Create an encoder from `options`.
    ///
    /// A request to emit absent fields is discarded with a warning.
    pub fn new(options: EncoderOptions) -> Self {
        if !options.omit_absent {
            warn!("ignoring request to emit absent fields, CZML output always omits them");
        }
        Self {
            indent: options.indent,
        }
    }

    /// Serialize `value` into a string.
    pub fn to_string<T>(&self, value: &T) -> CzmlResult<String>
    where
        T: Serialize + ?Sized,
    {
        let mut buffer = Vec::new();
        self.to_writer(&mut buffer, value)?;
        debug!(bytes = buffer.len(), "serialized CZML");
        String::from_utf8(buffer).map_err(|err| CzmlError::Serialization(err.to_string()))
    }

    /// Stream `value` into `writer`.
    pub fn to_writer<W, T>(&self, writer: W, value: &T) -> CzmlResult<()>
    where
        W: io::Write,
        T: Serialize + ?Sized,
    {
        match self.indent {
            None => serde_json::to_writer(writer, value)?,
            Some(width) => {
                let indent = vec![b' '; width];
                let formatter = PrettyFormatter::with_indent(&indent);
                let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
                value.serialize(&mut serializer)?;
            }
        }
        Ok(())
    }
}

/// `dumps`/`dump`/`to_json` for every serializable CZML node.
pub trait Dump: Serialize {
    /// Compact JSON text.
    fn dumps(&self) -> CzmlResult<String> {
        Encoder::default().to_string(self)
    }

    /// Stream compact JSON into `writer`.
    fn dump<W: io::Write>(&self, writer: W) -> CzmlResult<()> {
        Encoder::default().to_writer(writer, self)
    }

    /// JSON text indented by four spaces.
    fn to_json(&self) -> CzmlResult<String> {
        Encoder::new(EncoderOptions::pretty(4)).to_string(self)
    }
}

impl<T: Serialize + ?Sized> Dump for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    struct Node {
        id: &'static str,
        delete: bool,
        name: Option<String>,
        size: Option<Number>,
    }

    impl CzmlObject for Node {
        fn write_fields<W: FieldWriter>(&self, writer: &mut W) -> Result<(), W::Error> {
            writer.field("id", Some(self.id))?;
            writer.field("name", self.name.as_ref())?;
            writer.field("size", self.size.as_ref())
        }

        fn is_deleted(&self) -> bool {
            self.delete
        }

        fn identity(&self) -> Option<&str> {
            Some(self.id)
        }
    }

    impl Serialize for Node {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serialize_object(self, serializer)
        }
    }

    fn node(delete: bool) -> Node {
        Node {
            id: "node",
            delete,
            name: Some("named".to_string()),
            size: None,
        }
    }

    #[test]
    fn absent_fields_are_omitted() -> anyhow::Result<()> {
        assert_eq!(node(false).dumps()?, r#"{"id":"node","name":"named"}"#);
        Ok(())
    }

    #[test]
    fn deletion_keeps_only_identity() -> anyhow::Result<()> {
        assert_json_eq!(
            serde_json::to_value(node(true))?,
            json!({"id": "node", "delete": true})
        );
        Ok(())
    }

    #[test]
    fn pretty_output_uses_requested_indent() -> anyhow::Result<()> {
        let text = Encoder::new(EncoderOptions::pretty(2)).to_string(&node(false))?;
        assert_eq!(text, "{\n  \"id\": \"node\",\n  \"name\": \"named\"\n}");
        assert_eq!(
            node(false).to_json()?,
            "{\n    \"id\": \"node\",\n    \"name\": \"named\"\n}"
        );
        Ok(())
    }

    #[test]
    fn streamed_and_string_output_match() -> anyhow::Result<()> {
        let mut sink = Vec::new();
        node(false).dump(&mut sink)?;
        assert_eq!(String::from_utf8(sink)?, node(false).dumps()?);
        Ok(())
    }

    #[test]
    fn conflicting_directive_is_ignored() -> anyhow::Result<()> {
        let encoder = Encoder::new(EncoderOptions::compact().omit_absent(false));
        assert_eq!(encoder.to_string(&node(false))?, r#"{"id":"node","name":"named"}"#);
        Ok(())
    }

    #[test]
    fn options_deserialize_with_defaults() -> anyhow::Result<()> {
        let options: EncoderOptions = serde_json::from_str(r#"{"indent": 4}"#)?;
        assert_eq!(options, EncoderOptions::pretty(4));
        Ok(())
    }

    #[test]
    fn lists_merge_interval_content() -> anyhow::Result<()> {
        let mut map = serde_json::Map::new();
        let mut writer = MapCollector(&mut map);
        vec![true, false].write_content(&mut writer)?;
        assert_eq!(map.get("boolean"), Some(&json!(false)));
        Ok(())
    }

    struct MapCollector<'a>(&'a mut serde_json::Map<String, serde_json::Value>);

    impl FieldWriter for MapCollector<'_> {
        type Error = serde_json::Error;

        fn field<T>(&mut self, name: &'static str, value: Option<&T>) -> Result<(), Self::Error>
        where
            T: Serialize + ?Sized,
        {
            if let Some(value) = value {
                self.0.insert(name.to_string(), serde_json::to_value(value)?);
            }
            Ok(())
        }
    }
}
