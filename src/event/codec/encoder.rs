//! Produces the wire representation of an envelope.

use super::{
    FIELD_CONTENT_TYPE, FIELD_ID, FIELD_RELATED_ID, FIELD_SOURCE, FIELD_SPEC_VERSION, FIELD_TIME,
    FIELD_TYPE, METADATA_PREFIX,
};
use crate::event::domain::{
    BINARY_CONTENT_TYPE, CloudEvent, STRUCTURED_CONTENT_TYPE, WireMode,
};
use crate::event::error::EncodeError;
use crate::transport::{CONTENT_TYPE, Headers};

/// An envelope rendered to its wire form: body bytes plus response headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedEvent {
    body: Vec<u8>,
    headers: Headers,
}

impl EncodedEvent {
    const fn new(body: Vec<u8>, headers: Headers) -> Self {
        Self { body, headers }
    }

    /// Returns the body bytes.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns the response headers.
    #[must_use]
    pub const fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Splits the encoded event into its body and headers.
    #[must_use]
    pub fn into_parts(self) -> (Vec<u8>, Headers) {
        (self.body, self.headers)
    }
}

/// Encodes an envelope for the given wire mode.
///
/// # Errors
///
/// Returns [`EncodeError`] when JSON serialisation fails; no headers are
/// produced in that case.
pub fn encode(event: &CloudEvent, mode: WireMode) -> Result<EncodedEvent, EncodeError> {
    match mode {
        WireMode::Structured => encode_structured(event),
        WireMode::Binary => encode_binary(event),
    }
}

/// Serialises the full envelope as one JSON document.
///
/// Exactly one response header is set: the structured media type with a
/// UTF-8 charset parameter.
///
/// # Errors
///
/// Returns [`EncodeError`] when the envelope cannot be serialised.
pub fn encode_structured(event: &CloudEvent) -> Result<EncodedEvent, EncodeError> {
    let body = serde_json::to_vec(event)?;
    let mut headers = Headers::new();
    headers.insert(CONTENT_TYPE, STRUCTURED_CONTENT_TYPE);
    Ok(EncodedEvent::new(body, headers))
}

/// Serialises only the payload as the body and emits one `ce-` header per
/// core metadata field.
///
/// Serialising the payload is required because `data` is stored as a raw
/// opaque blob; the serialisation validates that the blob is a
/// self-contained JSON value. Optional fields whose value is empty are
/// omitted so the header round-trip stays lossless for present fields.
/// `extensions` is intentionally not carried.
///
/// # Errors
///
/// Returns [`EncodeError`] when the payload bytes are not valid JSON.
pub fn encode_binary(event: &CloudEvent) -> Result<EncodedEvent, EncodeError> {
    let body = match event.data() {
        Some(payload) => serde_json::to_vec(payload)?,
        None => Vec::new(),
    };

    let mut headers = Headers::new();
    headers.insert(CONTENT_TYPE, BINARY_CONTENT_TYPE);
    insert_metadata(&mut headers, FIELD_TYPE, event.event_type().as_str());
    insert_metadata(&mut headers, FIELD_SPEC_VERSION, event.spec_version());
    insert_metadata(&mut headers, FIELD_ID, event.id().as_str());
    insert_metadata(&mut headers, FIELD_SOURCE, event.source());
    if let Some(time) = event.time() {
        insert_metadata(&mut headers, FIELD_TIME, &time.to_rfc3339());
    }
    if let Some(related_id) = event.related_id() {
        insert_metadata(&mut headers, FIELD_RELATED_ID, related_id.as_str());
    }
    if let Some(content_type) = event.content_type() {
        insert_metadata(&mut headers, FIELD_CONTENT_TYPE, content_type);
    }

    Ok(EncodedEvent::new(body, headers))
}

fn insert_metadata(headers: &mut Headers, field: &str, value: &str) {
    headers.insert(&format!("{METADATA_PREFIX}{field}"), value);
}
