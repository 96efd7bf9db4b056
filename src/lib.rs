//! Write and validate CZML, the JSON format describing time-dynamic scenes
//! for 3D globe clients such as CesiumJS.
//!
//! Documents are built bottom up: value objects ([`values`]) go into
//! property objects ([`properties`]), properties into [`Packet`]s and packets
//! into a [`Document`]. Every constructor and builder validates its input, so
//! a document that was built can always be serialized.
//!
//! ```
//! use czml::prelude::*;
//! use czml::properties::{Label, Position};
//! use czml::values::Cartesian3Value;
//!
//! # fn main() -> czml::CzmlResult<()> {
//! let document = Document::new(vec![
//!     Packet::preamble().name("example").build(),
//!     Packet::builder()
//!         .id("origin")
//!         .label(Label::builder().text("Origin").build()?)
//!         .position(
//!             Position::builder()
//!                 .cartesian(Cartesian3Value::from([0.0, 0.0, 0.0]))
//!                 .build()?,
//!         )
//!         .build(),
//! ]);
//! assert!(document.dumps()?.starts_with(r#"[{"id":"document","version":"1.0","name":"example"}"#));
//! # Ok(())
//! # }
//! ```

pub mod colors;
pub mod common;
pub mod document;
pub mod encoder;
pub mod enums;
pub mod error;
pub mod packet;
pub mod properties;
pub mod scenarios;
pub mod time;
pub mod validation;
pub mod values;
pub mod widget;

pub use document::Document;
pub use encoder::{Dump, Encoder, EncoderOptions};
pub use error::{CzmlError, CzmlResult};
pub use packet::{
    Availability, CZML_VERSION, CustomProperties, Packet, PacketBuilder, PacketPosition,
};
pub use time::{DateTimeLike, Timestamp, format_datetime_like};
pub use widget::{CzmlWidget, WidgetConfig};

/// The types and builder extension traits needed to assemble a document.
pub mod prelude {
    pub use crate::common::{DeletableExt, InterpolatableExt};
    pub use crate::document::Document;
    pub use crate::encoder::Dump;
    pub use crate::packet::Packet;
}
