//! Domain types for the event envelope.
//!
//! These types are pure values with no transport dependencies. An envelope
//! is exclusively owned by the single invocation that created or decoded
//! it and is discarded when the invocation completes.

mod envelope;
mod event_type;
mod ids;
mod mode;
mod payload;

pub use envelope::{CloudEvent, CloudEventBuilder, EVENT_SOURCE, SPEC_VERSION};
pub use event_type::{EventType, EventTypeError};
pub use ids::EventId;
pub use mode::{
    BINARY_CONTENT_TYPE, JSON_MEDIA_TYPE, STRUCTURED_CONTENT_TYPE, STRUCTURED_MEDIA_TYPE, WireMode,
};
pub use payload::Payload;
