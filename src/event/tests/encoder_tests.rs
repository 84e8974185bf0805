//! Unit tests for the outbound encoder.

use crate::event::codec::{encode, encode_binary, encode_structured};
use crate::event::domain::{
    BINARY_CONTENT_TYPE, CloudEvent, EventId, EventType, Payload, STRUCTURED_CONTENT_TYPE,
    WireMode,
};
use crate::transport::CONTENT_TYPE;
use chrono::{TimeZone, Utc};
use rstest::rstest;
use serde_json::json;

fn full_event() -> CloudEvent {
    CloudEvent::builder()
        .with_event_type(EventType::new("com.demo.word.picked"))
        .with_spec_version("0.1")
        .with_source("urn:producer")
        .with_id(EventId::new("evt-2"))
        .with_time(
            Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0)
                .single()
                .expect("valid instant"),
        )
        .with_related_id(EventId::new("evt-1"))
        .with_content_type("application/json")
        .with_data(Payload::new(br#"{"word":"alpha"}"#.to_vec()))
        .build()
}

#[rstest]
fn structured_encoding_sets_exactly_one_header() {
    let encoded = encode_structured(&full_event()).expect("encodable event");
    assert_eq!(encoded.headers().len(), 1);
    assert_eq!(
        encoded.headers().get(CONTENT_TYPE),
        Some(STRUCTURED_CONTENT_TYPE)
    );
}

#[rstest]
fn structured_body_is_the_full_envelope_document() {
    let encoded = encode_structured(&full_event()).expect("encodable event");
    let document: serde_json::Value =
        serde_json::from_slice(encoded.body()).expect("valid JSON body");

    assert_eq!(document.get("type"), Some(&json!("com.demo.word.picked")));
    assert_eq!(document.get("specVersion"), Some(&json!("0.1")));
    assert_eq!(document.get("id"), Some(&json!("evt-2")));
    assert_eq!(document.get("relatedId"), Some(&json!("evt-1")));
    assert_eq!(document.get("data"), Some(&json!({"word": "alpha"})));
}

#[rstest]
fn binary_body_is_the_payload_alone() {
    let encoded = encode_binary(&full_event()).expect("encodable event");
    assert_eq!(encoded.body(), br#"{"word":"alpha"}"#);
}

#[rstest]
fn binary_encoding_emits_the_seven_metadata_headers() {
    let encoded = encode_binary(&full_event()).expect("encodable event");
    let headers = encoded.headers();

    assert_eq!(headers.get(CONTENT_TYPE), Some(BINARY_CONTENT_TYPE));
    assert_eq!(headers.get("ce-type"), Some("com.demo.word.picked"));
    assert_eq!(headers.get("ce-specversion"), Some("0.1"));
    assert_eq!(headers.get("ce-id"), Some("evt-2"));
    assert_eq!(headers.get("ce-source"), Some("urn:producer"));
    assert_eq!(headers.get("ce-time"), Some("2026-08-30T12:00:00+00:00"));
    assert_eq!(headers.get("ce-relatedid"), Some("evt-1"));
    assert_eq!(headers.get("ce-contenttype"), Some("application/json"));
    // content-type plus seven metadata fields
    assert_eq!(headers.len(), 8);
}

#[rstest]
fn binary_encoding_omits_empty_optional_fields() {
    let event = CloudEvent::builder()
        .with_event_type(EventType::new("com.demo.word.found"))
        .with_spec_version("0.1")
        .with_source("urn:producer")
        .with_id(EventId::new("evt-3"))
        .build();
    let encoded = encode_binary(&event).expect("encodable event");
    let headers = encoded.headers();

    assert!(!headers.contains("ce-time"));
    assert!(!headers.contains("ce-relatedid"));
    assert!(!headers.contains("ce-contenttype"));
    assert!(encoded.body().is_empty());
}

#[rstest]
fn binary_encoding_never_emits_extensions() {
    let extensions = [("trace".to_owned(), "abc".to_owned())].into_iter().collect();
    let event = CloudEvent::builder()
        .with_event_type(EventType::new("com.demo.word.found"))
        .with_id(EventId::new("evt-4"))
        .with_extensions(extensions)
        .build();
    let encoded = encode_binary(&event).expect("encodable event");

    let metadata_names: Vec<&str> = encoded
        .headers()
        .iter()
        .map(|(name, _)| name)
        .filter(|name| name.starts_with("ce-"))
        .collect();
    assert!(!metadata_names.iter().any(|name| name.contains("extension")));
    assert!(!metadata_names.iter().any(|name| name.contains("trace")));
}

#[rstest]
fn invalid_payload_bytes_are_an_encode_error() {
    let event = CloudEvent::builder()
        .with_event_type(EventType::new("a.b.c"))
        .with_data(Payload::new(b"not json".to_vec()))
        .build();
    assert!(encode(&event, WireMode::Binary).is_err());
    assert!(encode(&event, WireMode::Structured).is_err());
}

#[rstest]
fn encode_respects_the_threaded_mode() {
    let event = full_event();
    let structured = encode(&event, WireMode::Structured).expect("encodable event");
    let binary = encode(&event, WireMode::Binary).expect("encodable event");

    assert_eq!(
        structured.headers().get(CONTENT_TYPE),
        Some(STRUCTURED_CONTENT_TYPE)
    );
    assert_eq!(binary.headers().get(CONTENT_TYPE), Some(BINARY_CONTENT_TYPE));
}
