//! Time normalization for every timestamp-bearing CZML field.
//!
//! All times go through [`format_datetime_like`], which validates ISO-8601
//! strings and renders structured date/times as
//! `YYYY-MM-DDTHH:MM:SS.ffffffZ` in UTC.

use crate::error::{CzmlError, CzmlResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use std::time::SystemTime;

/// `strftime` pattern of the CZML wire format.
pub const ISO8601_FORMAT_Z: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// Lower bound used by unbounded time intervals.
pub const MIN_DATETIME: &str = "0001-01-01T00:00:00Z";

/// Upper bound used by unbounded time intervals.
pub const MAX_DATETIME: &str = "9999-12-31T23:59:59Z";

/// Anything that can be rendered as a CZML timestamp.
///
/// Implemented for ISO-8601 strings and the `chrono`/`std` time types. Other
/// time libraries plug in by implementing it for their own types.
pub trait DateTimeLike {
    /// Render the value as an ISO-8601 string, validating it if necessary.
    fn to_iso8601(&self) -> CzmlResult<String>;
}

impl DateTimeLike for str {
    fn to_iso8601(&self) -> CzmlResult<String> {
        match parse_iso8601(self) {
            Some(_) => Ok(self.to_string()),
            None => Err(CzmlError::Format {
                field: "datetime",
                reason: format!("'{}' is not a valid ISO 8601 date and time", self),
            }),
        }
    }
}

impl DateTimeLike for String {
    fn to_iso8601(&self) -> CzmlResult<String> {
        self.as_str().to_iso8601()
    }
}

impl<Tz: TimeZone> DateTimeLike for DateTime<Tz> {
    fn to_iso8601(&self) -> CzmlResult<String> {
        Ok(format_utc(&self.with_timezone(&Utc)))
    }
}

/// Naive date/times are taken to be in UTC.
impl DateTimeLike for NaiveDateTime {
    fn to_iso8601(&self) -> CzmlResult<String> {
        Ok(format_utc(&self.and_utc()))
    }
}

impl DateTimeLike for SystemTime {
    fn to_iso8601(&self) -> CzmlResult<String> {
        Ok(format_utc(&DateTime::<Utc>::from(*self)))
    }
}

/// Normalize an optional date/time into its CZML string form.
///
/// `None` stays `None`. Strings are validated by parsing them and kept
/// verbatim, so callers keep whatever precision they wrote.
pub fn format_datetime_like<T>(value: Option<&T>) -> CzmlResult<Option<String>>
where
    T: DateTimeLike + ?Sized,
{
    value.map(DateTimeLike::to_iso8601).transpose()
}

fn format_utc(value: &DateTime<Utc>) -> String {
    value.format(ISO8601_FORMAT_Z).to_string()
}

fn parse_iso8601(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// A validated CZML timestamp.
///
/// Built from anything [`DateTimeLike`]; infallible for `chrono` date/times.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Timestamp(String);

impl Timestamp {
    /// Normalize `value` into a timestamp.
    pub fn new<T: DateTimeLike + ?Sized>(value: &T) -> CzmlResult<Self> {
        value.to_iso8601().map(Timestamp)
    }

    /// Parse and validate an ISO-8601 string.
    pub fn parse(value: &str) -> CzmlResult<Self> {
        Self::new(value)
    }

    /// The wire representation.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(value: DateTime<Tz>) -> Self {
        Timestamp(format_utc(&value.with_timezone(&Utc)))
    }
}

impl From<SystemTime> for Timestamp {
    fn from(value: SystemTime) -> Self {
        Timestamp(format_utc(&DateTime::<Utc>::from(value)))
    }
}

impl TryFrom<&str> for Timestamp {
    type Error = CzmlError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}
