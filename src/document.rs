//! A CZML document: the ordered list of packets a client loads.

use crate::encoder::Dump;
use crate::packet::Packet;
use serde::{Serialize, Serializer};
use std::fmt;

/// An ordered list of packets, serialized as a JSON list.
///
/// The first packet should be the preamble built with
/// [`Packet::preamble`]; this is not enforced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    packets: Vec<Packet>,
}

impl Document {
    pub fn new(packets: Vec<Packet>) -> Self {
        Self { packets }
    }

    /// The packets, in document order.
    pub fn packets(&self) -> &[Packet] {
        &self.packets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Packet> {
        self.packets.iter()
    }

    /// Append a packet.
    pub fn push(&mut self, packet: Packet) {
        self.packets.push(packet);
    }

    pub fn len(&self) -> usize {
        self.packets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packets.is_empty()
    }

    /// The packet with the given id, if any.
    pub fn get(&self, id: &str) -> Option<&Packet> {
        self.packets.iter().find(|packet| packet.id() == id)
    }
}

impl From<Vec<Packet>> for Document {
    fn from(packets: Vec<Packet>) -> Self {
        Self::new(packets)
    }
}

impl FromIterator<Packet> for Document {
    fn from_iter<I: IntoIterator<Item = Packet>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Document {
    type Item = Packet;
    type IntoIter = std::vec::IntoIter<Packet>;

    fn into_iter(self) -> Self::IntoIter {
        self.packets.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Packet;
    type IntoIter = std::slice::Iter<'a, Packet>;

    fn into_iter(self) -> Self::IntoIter {
        self.packets.iter()
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.packets)
    }
}

/// Pretty JSON with a four space indent.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = self.to_json().map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn empty_document() -> Result<()> {
        let document = Document::default();
        assert!(document.is_empty());
        assert_eq!(document.dumps()?, "[]");
        Ok(())
    }

    #[test]
    fn preamble_only_document() -> Result<()> {
        let document = Document::new(vec![Packet::preamble().build()]);
        assert_eq!(
            document.to_string(),
            r#"[
    {
        "id": "document",
        "version": "1.0"
    }
]"#
        );
        Ok(())
    }

    #[test]
    fn packets_keep_their_order() -> Result<()> {
        let mut document: Document = ["a", "b"]
            .into_iter()
            .map(|id| Packet::builder().id(id).build())
            .collect();
        document.push(Packet::builder().id("c").delete(true).build());
        let ids: Vec<&str> = document.iter().map(Packet::id).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(
            document.dumps()?,
            r#"[{"id":"a"},{"id":"b"},{"id":"c","delete":true}]"#
        );
        assert!(document.get("b").is_some());
        assert!(document.get("z").is_none());
        Ok(())
    }
}
