//! URI values for images, models and tilesets.

use crate::error::{CzmlError, CzmlResult};
use data_encoding::BASE64;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use url::Url;

const DATA_SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64";

/// A URI: either a `data:` URI with an embedded payload or an absolute URL.
///
/// Nothing is fetched; only the syntax is checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uri(String);

impl Uri {
    /// Validate and wrap a URI.
    pub fn new(uri: impl Into<String>) -> CzmlResult<Self> {
        let uri = uri.into();
        match uri.strip_prefix(DATA_SCHEME) {
            Some(data) => check_data_uri(data)?,
            None => {
                Url::parse(&uri).map_err(|err| CzmlError::Format {
                    field: "Uri",
                    reason: format!("'{}' must be a URL or a data URI: {}", uri, err),
                })?;
            }
        }
        Ok(Self(uri))
    }

    /// Embed `bytes` as a base64 `data:` URI.
    pub fn from_data(mime_type: &str, bytes: &[u8]) -> Self {
        Self(format!(
            "{}{}{},{}",
            DATA_SCHEME,
            mime_type,
            BASE64_MARKER,
            BASE64.encode(bytes)
        ))
    }

    /// Whether the payload is embedded in the URI.
    pub fn is_data(&self) -> bool {
        self.0.starts_with(DATA_SCHEME)
    }

    /// The URI text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn check_data_uri(data: &str) -> CzmlResult<()> {
    let invalid = |reason: String| CzmlError::Format {
        field: "Uri",
        reason,
    };
    let (header, payload) = data
        .split_once(',')
        .ok_or_else(|| invalid("data URI is missing the ',' separator".to_string()))?;
    if header.ends_with(BASE64_MARKER) {
        BASE64
            .decode(payload.as_bytes())
            .map_err(|err| invalid(format!("invalid base64 payload: {}", err)))?;
    }
    Ok(())
}

impl FromStr for Uri {
    type Err = CzmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Uri {
    type Error = CzmlError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Uri {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
