//! Time intervals, interval-wrapped values and sequences.

use crate::encoder::{FieldWriter, IntervalContent, MapFieldWriter};
use crate::error::CzmlResult;
use crate::time::{MAX_DATETIME, MIN_DATETIME, Timestamp};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// A time interval in ISO-8601 interval format, `start/end`.
///
/// A missing bound is open: it serializes as the earliest or latest
/// representable time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimeInterval {
    start: Option<Timestamp>,
    end: Option<Timestamp>,
}

impl TimeInterval {
    /// An interval between two instants.
    pub fn new(start: impl Into<Timestamp>, end: impl Into<Timestamp>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }

    /// An interval between two ISO-8601 strings.
    pub fn parse(start: &str, end: &str) -> CzmlResult<Self> {
        Ok(Self {
            start: Some(Timestamp::parse(start)?),
            end: Some(Timestamp::parse(end)?),
        })
    }

    /// The interval covering all time.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Replace the start bound.
    pub fn with_start(mut self, start: impl Into<Timestamp>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Replace the end bound.
    pub fn with_end(mut self, end: impl Into<Timestamp>) -> Self {
        self.end = Some(end.into());
        self
    }

    /// The start bound, if closed.
    pub fn start(&self) -> Option<&Timestamp> {
        self.start.as_ref()
    }

    /// The end bound, if closed.
    pub fn end(&self) -> Option<&Timestamp> {
        self.end.as_ref()
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.start.as_ref().map_or(MIN_DATETIME, Timestamp::as_str);
        let end = self.end.as_ref().map_or(MAX_DATETIME, Timestamp::as_str);
        write!(f, "{}/{}", start, end)
    }
}

impl Serialize for TimeInterval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A value that holds over a time interval.
///
/// Serialized as `{"interval": "start/end", ...}` with the content of the
/// value flattened next to the interval.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalValue<T> {
    interval: TimeInterval,
    value: T,
}

impl<T> IntervalValue<T> {
    /// Wrap `value` over `interval`.
    pub fn new(interval: TimeInterval, value: T) -> Self {
        Self { interval, value }
    }

    /// Wrap `value` between `start` and `end`.
    pub fn between(start: impl Into<Timestamp>, end: impl Into<Timestamp>, value: T) -> Self {
        Self::new(TimeInterval::new(start, end), value)
    }

    /// The interval.
    pub fn interval(&self) -> &TimeInterval {
        &self.interval
    }

    /// The wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: IntervalContent> Serialize for IntervalValue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut writer = MapFieldWriter::new(serializer.serialize_map(None)?);
        writer.field("interval", Some(&self.interval))?;
        self.value.write_content(&mut writer)?;
        writer.end()
    }
}

/// An ordered list of values, serialized as a JSON list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sequence<T>(Vec<T>);

impl<T> Sequence<T> {
    /// Wrap `values`, keeping their order.
    pub fn new(values: Vec<T>) -> Self {
        Self(values)
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(values: Vec<T>) -> Self {
        Self(values)
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Serialize> Serialize for Sequence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// An epoch for sample times given in seconds, `{"epoch": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpochValue(Timestamp);

impl EpochValue {
    /// Wrap an epoch.
    pub fn new(epoch: impl Into<Timestamp>) -> Self {
        Self(epoch.into())
    }

    /// The epoch.
    pub fn epoch(&self) -> &Timestamp {
        &self.0
    }
}

impl Serialize for EpochValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("epoch", &self.0)?;
        map.end()
    }
}

/// A field that is either constant or varies over time intervals.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeVarying<T> {
    /// The same value at all times.
    Constant(T),
    /// One value over one interval.
    Interval(IntervalValue<T>),
    /// Different values over consecutive intervals.
    Sequence(Sequence<IntervalValue<T>>),
}

impl<T> TimeVarying<T> {
    /// A value holding over `interval` only.
    pub fn interval(interval: TimeInterval, value: T) -> Self {
        TimeVarying::Interval(IntervalValue::new(interval, value))
    }

    /// Values holding over their own intervals.
    pub fn intervals(values: impl IntoIterator<Item = IntervalValue<T>>) -> Self {
        TimeVarying::Sequence(values.into_iter().collect())
    }

    /// The constant value, if the field does not vary.
    pub fn as_constant(&self) -> Option<&T> {
        match self {
            TimeVarying::Constant(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<T> for TimeVarying<T> {
    fn from(value: T) -> Self {
        TimeVarying::Constant(value)
    }
}

impl<T> Serialize for TimeVarying<T>
where
    T: Serialize + IntervalContent,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TimeVarying::Constant(value) => value.serialize(serializer),
            TimeVarying::Interval(value) => value.serialize(serializer),
            TimeVarying::Sequence(values) => values.serialize(serializer),
        }
    }
}
