//! Dual-mode wire codec for the event envelope.
//!
//! The decoder and encoder share one enumerated table of the seven core
//! metadata fields carried by binary-mode `ce-` headers, so the mapping is
//! total and auditable: a field the encoder emits is exactly a field the
//! decoder recognises, and the round-trip through headers is lossless for
//! these fields. `extensions` is deliberately not part of the table.

mod decoder;
mod encoder;

pub use decoder::decode;
pub use encoder::{EncodedEvent, encode, encode_binary, encode_structured};

/// Prefix marking a binary-mode metadata header.
pub const METADATA_PREFIX: &str = "ce-";

/// Canonical (collapsed, lowercase) name of the type field.
pub const FIELD_TYPE: &str = "type";

/// Canonical name of the schema version field.
pub const FIELD_SPEC_VERSION: &str = "specversion";

/// Canonical name of the source field.
pub const FIELD_SOURCE: &str = "source";

/// Canonical name of the identifier field.
pub const FIELD_ID: &str = "id";

/// Canonical name of the timestamp field.
pub const FIELD_TIME: &str = "time";

/// Canonical name of the correlation identifier field.
pub const FIELD_RELATED_ID: &str = "relatedid";

/// Canonical name of the payload media type field.
pub const FIELD_CONTENT_TYPE: &str = "contenttype";
