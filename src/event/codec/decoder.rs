//! Reconstructs an envelope from an inbound request.

use super::{
    FIELD_CONTENT_TYPE, FIELD_ID, FIELD_RELATED_ID, FIELD_SOURCE, FIELD_SPEC_VERSION, FIELD_TIME,
    FIELD_TYPE, METADATA_PREFIX,
};
use crate::event::domain::{CloudEvent, CloudEventBuilder, EventId, EventType, Payload, WireMode};
use crate::event::error::DecodeError;
use crate::transport::Request;
use chrono::{DateTime, Utc};

/// Reconstructs an envelope from an inbound request.
///
/// The wire mode is detected once by the caller and threaded in; it is
/// never re-derived here, so the response mode can always match the
/// request mode.
///
/// # Errors
///
/// Returns [`DecodeError`] when the structured body is not a valid
/// envelope document. The binary path has no hard-failure case: missing
/// or unparseable headers simply leave fields at their empty value.
pub fn decode(request: &Request, mode: WireMode) -> Result<CloudEvent, DecodeError> {
    match mode {
        WireMode::Structured => decode_structured(request.body()),
        WireMode::Binary => Ok(decode_binary(request)),
    }
}

/// Parses the body as the JSON serialisation of the full envelope schema.
fn decode_structured(body: &[u8]) -> Result<CloudEvent, DecodeError> {
    Ok(serde_json::from_slice(body)?)
}

/// Populates an envelope from `ce-` prefixed metadata headers, then
/// overwrites `data` with the raw request body verbatim.
///
/// The body in binary mode is pure payload; it is never itself decoded
/// against the structured schema.
fn decode_binary(request: &Request) -> CloudEvent {
    let mut builder = CloudEvent::builder();

    for (name, values) in request.headers().iter() {
        let Some(suffix) = name.strip_prefix(METADATA_PREFIX) else {
            continue;
        };
        let Some(value) = values.first() else {
            continue;
        };
        let canonical: String = suffix.chars().filter(|c| *c != '-').collect();
        builder = apply_metadata_field(builder, &canonical, value);
    }

    if !request.body().is_empty() {
        builder = builder.with_data(Payload::new(request.body().to_vec()));
    }

    builder.build()
}

/// The enumerated field table: canonical header name to envelope field.
///
/// Unmatched names are ignored, not an error. An unparseable timestamp is
/// likewise ignored, leaving the field empty.
fn apply_metadata_field(
    builder: CloudEventBuilder,
    canonical: &str,
    value: &str,
) -> CloudEventBuilder {
    match canonical {
        FIELD_TYPE => builder.with_event_type(EventType::new(value)),
        FIELD_SPEC_VERSION => builder.with_spec_version(value),
        FIELD_SOURCE => builder.with_source(value),
        FIELD_ID => builder.with_id(EventId::new(value)),
        FIELD_TIME => match DateTime::parse_from_rfc3339(value) {
            Ok(time) => builder.with_time(time.with_timezone(&Utc)),
            Err(_) => builder,
        },
        FIELD_RELATED_ID => builder.with_related_id(EventId::new(value)),
        FIELD_CONTENT_TYPE => builder.with_content_type(value),
        _ => builder,
    }
}
