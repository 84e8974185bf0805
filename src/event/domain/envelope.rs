//! The CloudEvent envelope: the central entity of the system.
//!
//! One canonical schema is modelled: the v0.1-style field set with the
//! JSON names `type`, `specVersion`, `source`, `id`, `time`, `relatedId`,
//! `contentType`, `extensions` and `data`. Optional fields are
//! omitted from the serialised form when empty.

use super::{EventId, EventType, JSON_MEDIA_TYPE, Payload};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Envelope schema version stamped on every produced event.
pub const SPEC_VERSION: &str = "0.1";

/// Producing-system identifier stamped on every produced event.
pub const EVENT_SOURCE: &str = "https://functions.example.com/wordpick";

/// A single event instance.
///
/// Envelopes are immutable after construction. They are created either by
/// the decoder from an inbound wire representation, or by
/// [`CloudEvent::produce`], which stamps the fixed and generated fields.
///
/// # Invariants
///
/// - `id` is set exactly once, at construction, and never mutated.
/// - `spec_version` and `source` are constants of the producing system on
///   the production path, never user input.
/// - An envelope reconstructed from the binary wire form holds the raw
///   request body verbatim in `data`; the body is never itself decoded
///   against the structured schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudEvent {
    /// Dot-delimited hierarchical type name.
    #[serde(rename = "type")]
    event_type: EventType,

    /// Envelope schema version.
    #[serde(rename = "specVersion")]
    spec_version: String,

    /// Identifier of the producing system.
    source: String,

    /// Globally unique event identifier.
    id: EventId,

    /// Creation instant.
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<DateTime<Utc>>,

    /// Identifier of the event that caused this one; empty for root events.
    #[serde(rename = "relatedId", skip_serializing_if = "Option::is_none")]
    related_id: Option<EventId>,

    /// Media type of `data`.
    #[serde(rename = "contentType", skip_serializing_if = "Option::is_none")]
    content_type: Option<String>,

    /// Free-form key/value metadata. Not carried by binary-mode headers.
    #[serde(skip_serializing_if = "Option::is_none")]
    extensions: Option<BTreeMap<String, String>>,

    /// The application payload, already encoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Payload>,
}

impl CloudEvent {
    /// Produces a new envelope, stamping the fixed and generated fields.
    ///
    /// `id` is freshly generated, `time` is the clock's current instant,
    /// `spec_version` and `source` are the system constants and the
    /// content type defaults to JSON. The payload value is serialised into
    /// `data`; if that serialisation fails the envelope is still returned
    /// with `data` left empty, since the payload is best-effort enrichment
    /// rather than required for transport correctness.
    #[must_use]
    pub fn produce<T: Serialize>(
        event_type: EventType,
        payload: &T,
        related_id: Option<EventId>,
        clock: &impl Clock,
    ) -> Self {
        let data = match Payload::from_value(payload) {
            Ok(encoded) => Some(encoded),
            Err(err) => {
                log::warn!("event payload could not be serialised, producing without data: {err}");
                None
            }
        };

        Self {
            event_type,
            spec_version: SPEC_VERSION.to_owned(),
            source: EVENT_SOURCE.to_owned(),
            id: EventId::generate(),
            time: Some(clock.utc()),
            related_id,
            content_type: Some(JSON_MEDIA_TYPE.to_owned()),
            extensions: None,
            data,
        }
    }

    /// Returns a builder for assembling an envelope field by field.
    ///
    /// Used by the binary-mode decoder and by tests; unset fields stay at
    /// their empty value, mirroring the tolerance of the binary wire path.
    #[must_use]
    pub fn builder() -> CloudEventBuilder {
        CloudEventBuilder::new()
    }

    /// Returns the event type.
    #[must_use]
    pub const fn event_type(&self) -> &EventType {
        &self.event_type
    }

    /// Returns the envelope schema version.
    #[must_use]
    pub fn spec_version(&self) -> &str {
        &self.spec_version
    }

    /// Returns the producing-system identifier.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the event identifier.
    #[must_use]
    pub const fn id(&self) -> &EventId {
        &self.id
    }

    /// Returns the creation instant, if known.
    #[must_use]
    pub const fn time(&self) -> Option<DateTime<Utc>> {
        self.time
    }

    /// Returns the causing event's identifier, if any.
    #[must_use]
    pub const fn related_id(&self) -> Option<&EventId> {
        self.related_id.as_ref()
    }

    /// Returns the payload media type, if set.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Returns the free-form extension metadata, if any.
    #[must_use]
    pub const fn extensions(&self) -> Option<&BTreeMap<String, String>> {
        self.extensions.as_ref()
    }

    /// Returns the payload, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&Payload> {
        self.data.as_ref()
    }
}

/// Builder for assembling envelopes with full control over every field.
///
/// Unset required fields default to their empty value rather than failing:
/// the binary wire path populates fields best-effort from headers and must
/// never hard-fail on a missing one.
#[derive(Debug, Default)]
pub struct CloudEventBuilder {
    event_type: EventType,
    spec_version: String,
    source: String,
    id: Option<EventId>,
    time: Option<DateTime<Utc>>,
    related_id: Option<EventId>,
    content_type: Option<String>,
    extensions: Option<BTreeMap<String, String>>,
    data: Option<Payload>,
}

impl CloudEventBuilder {
    /// Creates a builder with every field empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the event type.
    #[must_use]
    pub fn with_event_type(mut self, event_type: EventType) -> Self {
        self.event_type = event_type;
        self
    }

    /// Sets the envelope schema version.
    #[must_use]
    pub fn with_spec_version(mut self, spec_version: impl Into<String>) -> Self {
        self.spec_version = spec_version.into();
        self
    }

    /// Sets the producing-system identifier.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Sets the event identifier.
    #[must_use]
    pub fn with_id(mut self, id: EventId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the creation instant.
    #[must_use]
    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }

    /// Sets the causing event's identifier.
    #[must_use]
    pub fn with_related_id(mut self, related_id: EventId) -> Self {
        self.related_id = Some(related_id);
        self
    }

    /// Sets the payload media type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Sets the free-form extension metadata.
    #[must_use]
    pub fn with_extensions(mut self, extensions: BTreeMap<String, String>) -> Self {
        self.extensions = Some(extensions);
        self
    }

    /// Sets the payload.
    #[must_use]
    pub fn with_data(mut self, data: Payload) -> Self {
        self.data = Some(data);
        self
    }

    /// Builds the envelope.
    ///
    /// An unset identifier becomes the empty string, matching the
    /// zero-value tolerance of the binary wire path.
    #[must_use]
    pub fn build(self) -> CloudEvent {
        CloudEvent {
            event_type: self.event_type,
            spec_version: self.spec_version,
            source: self.source,
            id: self.id.unwrap_or_else(|| EventId::new("")),
            time: self.time,
            related_id: self.related_id,
            content_type: self.content_type,
            extensions: self.extensions,
            data: self.data,
        }
    }
}
