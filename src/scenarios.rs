//! Ready-made scenes, used by the command line front end and as a reference
//! for building documents.

use crate::common::InterpolatableExt;
use crate::document::Document;
use crate::enums::{
    HorizontalOrigin, InterpolationAlgorithm, LabelStyle, ReferenceFrame, VerticalOrigin,
};
use crate::error::{CzmlError, CzmlResult};
use crate::packet::{Availability, Packet};
use crate::properties::{Billboard, Clock, Label, Path, Position, Uri};
use crate::values::{Cartesian3Value, IntervalValue, TimeInterval, TimeVarying};
use chrono::{DateTime, Utc};

const ACCESSES_ID: &str = "9927edc4-e87a-4e1f-9b8b-0bfb3b05b227";

const FACILITY_ICON: &str = concat!(
    "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAABAAAAAQCAYAAAAf8/",
    "9hAAAAAXNSR0IArs4c6QAAAARnQU1BAACxjwv8YQUAAAAJcEhZcwAADsMAAA7DAc",
    "dvqGQAAACvSURBVDhPrZDRDcMgDAU9GqN0lIzijw6SUbJJygUeNQgSqepJTyHG91",
    "LVVpwDdfxM3T9TSl1EXZvDwii471fivK73cBFFQNTT/d2KoGpfGOpSIkhUpgUMxq",
    "9DFEsWv4IXhlyCnhBFnZcFEEuYqbiUlNwWgMTdrZ3JbQFoEVG53rd8ztG9aPJMnB",
    "UQf/VFraBJeWnLS0RfjbKyLJA8FkT5seDYS1Qwyv8t0B/5C2ZmH2/eTGNNBgMmAA",
    "AAAElFTkSuQmCC",
);

const SATELLITE_ICON: &str = concat!(
    "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAABAAAAAQCAYAAAAf8/9",
    "hAAAAAXNSR0IArs4c6QAAAARnQU1BAACxjwv8YQUAAAAJcEhZcwAADsMAAA7DAcdv",
    "qGQAAADJSURBVDhPnZHRDcMgEEMZjVEYpaNklIzSEfLfD4qNnXAJSFWfhO7w2Zc0T",
    "f9QG2rXrEzSUeZLOGm47WoH95x3Hl3jEgilvDgsOQUTqsNl68ezEwn1vae6lceSEE",
    "YvvWNT/Rxc4CXQNGadho1NXoJ+9iaqc2xi2xbt23PJCDIB6TQjOC6Bho/sDy3fBQT",
    "8PrVhibU7yBFcEPaRxOoeTwbwByCOYf9VGp1BYI1BA+EeHhmfzKbBoJEQwn1yzUZt",
    "yspIQUha85MpkNIXB7GizqDEECsAAAAASUVORK5CYII=",
);

/// Access windows between Geoeye 1 and the ISS.
const GEOEYE_ISS_ACCESSES: [(&str, &str); 10] = [
    ("2012-03-15T10:16:06.97400000000198Z", "2012-03-15T10:33:59.3549999999959Z"),
    ("2012-03-15T11:04:09.73799999999756Z", "2012-03-15T11:21:04.51900000000023Z"),
    ("2012-03-15T11:52:06.94400000000314Z", "2012-03-15T12:08:18.8840000000055Z"),
    ("2012-03-15T12:40:57.2069999999949Z", "2012-03-15T12:54:39.301999999996Z"),
    ("2012-03-15T13:29:44.5040000000008Z", "2012-03-15T13:41:05.96899999999732Z"),
    ("2012-03-15T14:20:16.8450000000012Z", "2012-03-15T14:25:48.0559999999969Z"),
    ("2012-03-16T07:01:44.4309999999823Z", "2012-03-16T07:06:19.6309999999939Z"),
    ("2012-03-16T07:46:00.457999999984168Z", "2012-03-16T07:57:20.8470000000088Z"),
    ("2012-03-16T08:32:14.5289999999804Z", "2012-03-16T08:46:17.0109999999986Z"),
    ("2012-03-16T09:18:28.4590000000026Z", "2012-03-16T09:35:16.6410000000033Z"),
];

/// Inertial samples of Geoeye 1, `[seconds since epoch, X, Y, Z]`.
const GEOEYE_SAMPLES: [f64; 12] = [
    0.0, -6668447.2211117, 1201886.45913705, 146789.427467256,
    60.0, -6711432.84684144, 919677.673492462, -214047.552431458,
    120.0, -6721319.51474212, 633002.416025286, -574118.536396034,
];

/// A day of accesses between ground facilities and two satellites.
pub fn simple() -> CzmlResult<Document> {
    let start = utc("2012-03-15T10:00:00Z")?;
    let end = utc("2012-03-16T10:00:00Z")?;
    let day = TimeInterval::new(start, end);

    let accesses = GEOEYE_ISS_ACCESSES
        .iter()
        .map(|(from, to)| TimeInterval::parse(from, to))
        .collect::<CzmlResult<Vec<_>>>()?;

    Ok(Document::new(vec![
        Packet::preamble()
            .name("simple")
            .clock(TimeVarying::interval(
                day.clone(),
                Clock::builder()
                    .current_time(start)
                    .multiplier(60)
                    .build()?,
            ))
            .build(),
        Packet::builder()
            .id(ACCESSES_ID)
            .name("Accesses")
            .description("List of Accesses")
            .build(),
        Packet::builder()
            .id("Satellite/Geoeye1-to-Satellite/ISS")
            .name("Geoeye1 to ISS")
            .parent(ACCESSES_ID)
            .availability(Availability::from(accesses))
            .build(),
        Packet::builder()
            .id("Facility/AGI-to-Satellite/ISS")
            .name("AGI to ISS")
            .parent(ACCESSES_ID)
            .build(),
        Packet::builder()
            .id("Facility/AGI-to-Satellite/Geoeye1/Sensor/Sensor")
            .name("AGI to Sensor")
            .parent(ACCESSES_ID)
            .description("<h2>No accesses</h2>")
            .build(),
        Packet::builder()
            .id("AreaTarget/Pennsylvania")
            .name("Pennsylvania")
            .label(facility_label("Pennsylvania")?)
            .position(fixed_position([
                1152255.80150063,
                -4694317.951340558,
                4147335.9067563135,
            ])?)
            .build(),
        Packet::builder()
            .id("Facility/AGI")
            .name("AGI")
            .availability(day.clone())
            .billboard(icon(FACILITY_ICON)?)
            .label(facility_label("AGI")?)
            .position(fixed_position([
                1216469.9357990976,
                -4736121.71856379,
                4081386.8856866374,
            ])?)
            .build(),
        Packet::builder()
            .id("Satellite/Geoeye1")
            .name("Geoeye1")
            .availability(day.clone())
            .billboard(icon(SATELLITE_ICON)?)
            .label(facility_label("Geoeye 1")?)
            .path(
                Path::builder()
                    .show(TimeVarying::intervals([IntervalValue::new(day, true)]))
                    .width(1)
                    .resolution(120)
                    .build()?,
            )
            .position(
                Position::builder()
                    .interpolation_algorithm(InterpolationAlgorithm::Lagrange)
                    .interpolation_degree(5)
                    .reference_frame(ReferenceFrame::Inertial)
                    .epoch(start)
                    .cartesian(Cartesian3Value::new(GEOEYE_SAMPLES)?)
                    .build()?,
            )
            .build(),
    ]))
}

fn utc(text: &str) -> CzmlResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .map(|time| time.with_timezone(&Utc))
        .map_err(|err| CzmlError::Format {
            field: "datetime",
            reason: err.to_string(),
        })
}

fn facility_label(text: &str) -> CzmlResult<Label> {
    Label::builder()
        .horizontal_origin(HorizontalOrigin::Left)
        .vertical_origin(VerticalOrigin::Center)
        .style(LabelStyle::FillAndOutline)
        .outline_width(2)
        .text(text)
        .build()
}

fn icon(image: &str) -> CzmlResult<Billboard> {
    Billboard::builder()
        .horizontal_origin(HorizontalOrigin::Center)
        .vertical_origin(VerticalOrigin::Center)
        .image(Uri::new(image)?)
        .scale(1.5)
        .show(true)
        .build()
}

fn fixed_position(cartesian: [f64; 3]) -> CzmlResult<Position> {
    Position::builder()
        .cartesian(Cartesian3Value::from(cartesian))
        .build()
}
