//! End-to-end tests building whole documents through the public API.

use anyhow::Result;
use assert_json_diff::assert_json_eq;
use chrono::{TimeZone, Utc};
use czml::packet::PREAMBLE_ID;
use czml::prelude::*;
use czml::properties::{
    Color, Ellipsoid, EllipsoidRadii, Label, Point, Polyline, PolylineMaterial, Position,
    PositionList, SolidColorMaterial,
};
use czml::values::{
    Cartesian3Value, CartographicDegreesListValue, IntervalValue, Scalar, TimeInterval,
};
use czml::{Availability, CustomProperties, Encoder, EncoderOptions, PacketPosition, Timestamp};
use serde_json::json;
use uuid::Uuid;

#[test]
fn preamble_and_position() -> Result<()> {
    let document = Document::new(vec![
        Packet::preamble().build(),
        Packet::builder()
            .id("id_00")
            .position(
                Position::builder()
                    .cartesian(Cartesian3Value::from([0.0, 0.0, 0.0]))
                    .build()?,
            )
            .build(),
    ]);

    let json: serde_json::Value = serde_json::from_str(&document.dumps()?)?;
    assert_json_eq!(
        json,
        json!([
            {"id": "document", "version": "1.0"},
            {"id": "id_00", "position": {"cartesian": [0.0, 0.0, 0.0]}}
        ])
    );
    assert_eq!(json[1]["position"]["cartesian"], json!([0.0, 0.0, 0.0]));
    Ok(())
}

#[test]
fn preamble_with_name_and_description() -> Result<()> {
    let preamble = Packet::preamble()
        .name("Test Document")
        .description("Test description")
        .build();
    assert_eq!(preamble.id(), PREAMBLE_ID);
    assert!(preamble.is_preamble());
    assert_eq!(
        preamble.dumps()?,
        r#"{"id":"document","version":"1.0","name":"Test Document","description":"Test description"}"#
    );
    Ok(())
}

#[test]
fn delete_wins_over_every_other_field() -> Result<()> {
    let packet = Packet::builder()
        .id("id_00")
        .delete(true)
        .name("No Name In Packet")
        .point(Point::builder().pixel_size(10).build()?)
        .build();
    assert_eq!(
        packet.to_string(),
        r#"{
    "id": "id_00",
    "delete": true
}"#
    );
    Ok(())
}

#[test]
fn default_ids_are_unique_uuids() -> Result<()> {
    let first = Packet::builder().build();
    let second = Packet::builder().build();
    assert_ne!(first.id(), second.id());
    for packet in [&first, &second] {
        assert!(Uuid::parse_str(packet.id()).is_ok(), "{}", packet.id());
    }
    Ok(())
}

#[test]
fn id_and_name_are_pretty_printed() {
    let packet = Packet::builder().id("id_00").name("Test Packet").build();
    assert_eq!(
        packet.to_string(),
        r#"{
    "id": "id_00",
    "name": "Test Packet"
}"#
    );
}

#[test]
fn calendar_time_formatting() -> Result<()> {
    let time = Utc.with_ymd_and_hms(2019, 6, 11, 12, 26, 58).unwrap();
    let availability = TimeInterval::unbounded().with_start(time);
    let packet = Packet::builder()
        .id("id_00")
        .availability(availability)
        .build();
    assert_eq!(
        packet.dumps()?,
        r#"{"id":"id_00","availability":"2019-06-11T12:26:58.000000Z/9999-12-31T23:59:59Z"}"#
    );
    assert_eq!(Timestamp::from(time).as_str(), "2019-06-11T12:26:58.000000Z");
    Ok(())
}

#[test]
fn label_packet_matches_expected_layout() -> Result<()> {
    let packet = Packet::builder()
        .id("0")
        .label(
            Label::builder()
                .font("20px sans-serif")
                .fill_color(Color::from_list([0.2, 0.3, 0.4])?)
                .outline_color(Color::from_list([0, 233, 255, 2])?)
                .outline_width(2.0)
                .build()?,
        )
        .build();
    assert_eq!(
        packet.to_string(),
        r#"{
    "id": "0",
    "label": {
        "show": true,
        "font": "20px sans-serif",
        "style": "FILL",
        "fillColor": {
            "rgbaf": [
                0.2,
                0.3,
                0.4,
                1.0
            ]
        },
        "outlineColor": {
            "rgba": [
                0,
                233,
                255,
                2
            ]
        },
        "outlineWidth": 2.0
    }
}"#
    );
    Ok(())
}

#[test]
fn custom_properties_hold_any_value() -> Result<()> {
    let radii: Vec<Scalar> = vec![6378137.into(), 6378137.into(), 6356752.31414.into()];
    let ellipsoid = Ellipsoid::builder()
        .radii(
            EllipsoidRadii::builder()
                .cartesian(Cartesian3Value::new(radii)?)
                .build()?,
        )
        .build()?;
    let properties = CustomProperties::new()
        .insert("a", &false)?
        .insert("b", &1)?
        .insert("c", "C")?
        .insert("ellipsoid", &ellipsoid)?;
    let packet = Packet::builder().id("id_00").properties(properties).build();
    assert_eq!(
        packet.dumps()?,
        r#"{"id":"id_00","properties":{"a":false,"b":1,"c":"C","ellipsoid":{"radii":{"cartesian":[6378137,6378137,6356752.31414]}}}}"#
    );
    Ok(())
}

#[test]
fn polyline_packet() -> Result<()> {
    let packet = Packet::builder()
        .id("id_00")
        .polyline(
            Polyline::builder()
                .positions(
                    PositionList::builder()
                        .cartographic_degrees(CartographicDegreesListValue::new([
                            -75, 43, 500000, -125, 43, 500000,
                        ])?)
                        .build()?,
                )
                .material(
                    PolylineMaterial::builder()
                        .solid_color(SolidColorMaterial::from_list([255, 0, 0, 255])?)
                        .build()?,
                )
                .build()?,
        )
        .build();
    assert_json_eq!(
        serde_json::to_value(&packet)?,
        json!({
            "id": "id_00",
            "polyline": {
                "positions": {"cartographicDegrees": [-75, 43, 500000, -125, 43, 500000]},
                "material": {"solidColor": {"color": {"rgba": [255, 0, 0, 255]}}}
            }
        })
    );
    Ok(())
}

#[test]
fn packet_position_takes_vertex_lists() -> Result<()> {
    let vertices = PositionList::builder()
        .cartographic_degrees(CartographicDegreesListValue::new([
            -75, 43, 0, -125, 43, 0,
        ])?)
        .build()?;
    let packet = Packet::builder().id("outline").position(vertices.clone()).build();
    assert_json_eq!(
        serde_json::to_value(&packet)?,
        json!({
            "id": "outline",
            "position": {"cartographicDegrees": [-75, 43, 0, -125, 43, 0]}
        })
    );
    assert_eq!(
        packet.position().and_then(|position| position.as_constant()),
        Some(&PacketPosition::List(vertices.clone()))
    );

    let moving = Packet::builder()
        .id("outline")
        .position(czml::values::TimeVarying::interval(
            TimeInterval::parse("2012-03-15T10:00:00Z", "2012-03-15T11:00:00Z")?,
            PacketPosition::from(vertices),
        ))
        .build();
    assert_eq!(
        moving.dumps()?,
        r#"{"id":"outline","position":{"interval":"2012-03-15T10:00:00Z/2012-03-15T11:00:00Z","cartographicDegrees":[-75,43,0,-125,43,0]}}"#
    );
    Ok(())
}

#[test]
fn time_varying_fields_and_availability() -> Result<()> {
    let first = TimeInterval::parse("2012-03-15T10:00:00Z", "2012-03-15T11:00:00Z")?;
    let second = TimeInterval::parse("2012-03-15T11:00:00Z", "2012-03-15T12:00:00Z")?;
    let packet = Packet::builder()
        .id("blinker")
        .availability(Availability::from(vec![first.clone(), second.clone()]))
        .point(czml::values::TimeVarying::intervals([
            IntervalValue::new(first, Point::builder().pixel_size(5).build()?),
            IntervalValue::new(second, Point::builder().pixel_size(10).build()?),
        ]))
        .build();
    assert_json_eq!(
        serde_json::to_value(&packet)?,
        json!({
            "id": "blinker",
            "availability": [
                "2012-03-15T10:00:00Z/2012-03-15T11:00:00Z",
                "2012-03-15T11:00:00Z/2012-03-15T12:00:00Z"
            ],
            "point": [
                {"interval": "2012-03-15T10:00:00Z/2012-03-15T11:00:00Z", "pixelSize": 5},
                {"interval": "2012-03-15T11:00:00Z/2012-03-15T12:00:00Z", "pixelSize": 10}
            ]
        })
    );
    Ok(())
}

#[test]
fn document_dump_streams_the_same_text() -> Result<()> {
    let document = czml::scenarios::simple()?;
    let mut buffer = Vec::new();
    document.dump(&mut buffer)?;
    assert_eq!(String::from_utf8(buffer)?, document.dumps()?);

    let pretty = Encoder::new(EncoderOptions::pretty(4)).to_string(&document)?;
    assert_eq!(pretty, document.to_string());
    Ok(())
}

#[test]
fn serialization_is_idempotent() -> Result<()> {
    let document = czml::scenarios::simple()?;
    assert_eq!(document.dumps()?, document.clone().dumps()?);
    let reparsed: serde_json::Value = serde_json::from_str(&document.dumps()?)?;
    assert_eq!(serde_json::to_string(&reparsed)?, document.dumps()?);
    Ok(())
}
