//! Unit tests for the inbound decoder.

use crate::event::codec::decode;
use crate::event::domain::{EventId, Payload, WireMode};
use crate::transport::{Headers, Request};
use chrono::{TimeZone, Utc};
use rstest::rstest;
use serde_json::json;

fn structured_body() -> Vec<u8> {
    serde_json::to_vec(&json!({
        "type": "com.demo.word.found",
        "specVersion": "0.1",
        "source": "urn:producer",
        "id": "evt-1",
        "time": "2026-08-30T12:00:00Z",
        "relatedId": "evt-0",
        "contentType": "application/json",
        "extensions": {"trace": "abc"},
        "data": {"word": "alpha"},
    }))
    .expect("serialisable fixture")
}

#[rstest]
fn structured_body_decodes_every_field() {
    let request = Request::new(Headers::new(), structured_body());
    let event = decode(&request, WireMode::Structured).expect("valid structured body");

    assert_eq!(event.event_type().as_str(), "com.demo.word.found");
    assert_eq!(event.spec_version(), "0.1");
    assert_eq!(event.source(), "urn:producer");
    assert_eq!(event.id().as_str(), "evt-1");
    assert_eq!(
        event.time(),
        Some(Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).single().expect("valid instant"))
    );
    assert_eq!(event.related_id().map(EventId::as_str), Some("evt-0"));
    assert_eq!(event.content_type(), Some("application/json"));
    assert_eq!(
        event.extensions().and_then(|ext| ext.get("trace").cloned()),
        Some("abc".to_owned())
    );
    assert_eq!(
        event.data().map(Payload::as_bytes),
        Some(br#"{"word":"alpha"}"#.as_slice())
    );
}

#[rstest]
#[case(b"not json".as_slice())]
#[case(br#"{"type": "a.b.c""#.as_slice())]
#[case(br#"{"type": "a.b.c"}"#.as_slice())] // missing required fields
#[case(br#"{"type": "a.b.c", "specVersion": "0.1", "source": "s", "id": "i", "time": "yesterday"}"#.as_slice())]
fn malformed_structured_body_is_a_decode_error(#[case] body: &[u8]) {
    let request = Request::new(Headers::new(), body.to_vec());
    assert!(decode(&request, WireMode::Structured).is_err());
}

#[rstest]
fn structured_decode_is_pure() {
    let request = Request::new(Headers::new(), structured_body());
    let first = decode(&request, WireMode::Structured).expect("valid structured body");
    let second = decode(&request, WireMode::Structured).expect("valid structured body");
    assert_eq!(first, second);
}

#[rstest]
fn binary_headers_populate_core_fields() {
    let headers: Headers = [
        ("ce-type", "com.demo.word.found"),
        ("CE-SpecVersion", "0.1"),
        ("ce-source", "urn:producer"),
        ("ce-id", "evt-1"),
        ("ce-time", "2026-08-30T12:00:00+00:00"),
        ("ce-related-id", "evt-0"),
        ("ce-content-type", "text/plain"),
    ]
    .into_iter()
    .collect();
    let request = Request::new(headers, Vec::new());
    let event = decode(&request, WireMode::Binary).expect("binary never hard-fails");

    assert_eq!(event.event_type().as_str(), "com.demo.word.found");
    assert_eq!(event.spec_version(), "0.1");
    assert_eq!(event.source(), "urn:producer");
    assert_eq!(event.id().as_str(), "evt-1");
    assert_eq!(
        event.time(),
        Some(Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).single().expect("valid instant"))
    );
    assert_eq!(event.related_id().map(EventId::as_str), Some("evt-0"));
    assert_eq!(event.content_type(), Some("text/plain"));
}

#[rstest]
fn binary_body_overwrites_data_verbatim() {
    let headers: Headers = [("ce-type", "com.demo.word.found")].into_iter().collect();
    let request = Request::new(headers, b"anything, even non-JSON".to_vec());
    let event = decode(&request, WireMode::Binary).expect("binary never hard-fails");

    assert_eq!(
        event.data().map(Payload::as_bytes),
        Some(b"anything, even non-JSON".as_slice())
    );
}

#[rstest]
fn binary_unmatched_metadata_headers_are_ignored() {
    let headers: Headers = [
        ("ce-type", "com.demo.word.found"),
        ("ce-unknown-field", "value"),
        ("x-request-id", "req-1"),
    ]
    .into_iter()
    .collect();
    let request = Request::new(headers, Vec::new());
    let event = decode(&request, WireMode::Binary).expect("binary never hard-fails");

    assert_eq!(event.event_type().as_str(), "com.demo.word.found");
    assert_eq!(event.source(), "");
}

#[rstest]
fn binary_unparseable_time_leaves_field_empty() {
    let headers: Headers = [("ce-type", "a.b.c"), ("ce-time", "yesterday")]
        .into_iter()
        .collect();
    let request = Request::new(headers, Vec::new());
    let event = decode(&request, WireMode::Binary).expect("binary never hard-fails");
    assert!(event.time().is_none());
}

#[rstest]
fn binary_without_headers_or_body_yields_empty_envelope() {
    let request = Request::new(Headers::new(), Vec::new());
    let event = decode(&request, WireMode::Binary).expect("binary never hard-fails");
    assert_eq!(event.id().as_str(), "");
    assert!(event.data().is_none());
}

#[rstest]
fn binary_first_header_value_wins() {
    let mut headers = Headers::new();
    headers.append("ce-id", "first");
    headers.append("ce-id", "second");
    let request = Request::new(headers, Vec::new());
    let event = decode(&request, WireMode::Binary).expect("binary never hard-fails");
    assert_eq!(event.id().as_str(), "first");
}
