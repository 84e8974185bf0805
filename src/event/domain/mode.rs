//! Wire mode selection.
//!
//! The receiver distinguishes the two modes by inspecting the inbound
//! `Content-Type` values: a value carrying the CloudEvents media type
//! marker selects structured mode, anything else (including an absent
//! header) defaults to binary mode. The match is a substring test rather
//! than an exact media-type parse so parameterised content types such as
//! `application/cloudevents+json; charset=utf-8` are recognised.

use std::fmt;

/// Media type of a structured-mode envelope document.
pub const STRUCTURED_MEDIA_TYPE: &str = "application/cloudevents+json";

/// `Content-Type` value emitted on structured-mode responses.
pub const STRUCTURED_CONTENT_TYPE: &str = "application/cloudevents+json; charset=utf-8";

/// `Content-Type` value emitted on binary-mode responses.
pub const BINARY_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Plain JSON media type, the default payload content type.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Substring marking the structured media type.
const STRUCTURED_MARKER: &str = "cloudevents";

/// The wire encoding of an envelope crossing the HTTP boundary.
///
/// Detected once per invocation and threaded through as request-scoped
/// state so the response mode always matches the request mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireMode {
    /// The entire envelope, metadata and payload, is one JSON document.
    Structured,
    /// Metadata travels in headers; the body is the payload alone.
    Binary,
}

impl WireMode {
    /// Detects the wire mode from the inbound `Content-Type` values.
    #[must_use]
    pub fn detect<'a>(content_types: impl IntoIterator<Item = &'a str>) -> Self {
        let structured = content_types
            .into_iter()
            .any(|value| value.contains(STRUCTURED_MARKER));
        if structured { Self::Structured } else { Self::Binary }
    }

    /// Returns `true` for structured mode.
    #[must_use]
    pub const fn is_structured(self) -> bool {
        matches!(self, Self::Structured)
    }
}

impl fmt::Display for WireMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structured => write!(f, "structured"),
            Self::Binary => write!(f, "binary"),
        }
    }
}
