//! Dot-delimited hierarchical event type name.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Zero-based position of the category segment within the type name.
const CATEGORY_SEGMENT: usize = 2;

/// A dot-delimited hierarchical event type, e.g. `com.example.word.found`.
///
/// Any string is accepted at construction because the binary wire path must
/// never hard-fail; the three-segment shape is enforced at the point the
/// category is extracted.
///
/// # Examples
///
/// ```
/// use wordpick::event::domain::EventType;
///
/// let event_type = EventType::new("com.demo.word.found");
/// assert_eq!(event_type.category().expect("category"), "word");
/// assert_eq!(
///     event_type.with_action("picked").as_str(),
///     "com.demo.word.picked",
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventType(String);

impl EventType {
    /// Creates an event type from an arbitrary string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the type name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the category lookup key: the third dot-segment.
    ///
    /// # Errors
    ///
    /// Returns [`EventTypeError::MissingCategory`] when the type has fewer
    /// than three dot-segments, so a malformed type is rejected before any
    /// category lookup happens.
    pub fn category(&self) -> Result<&str, EventTypeError> {
        self.0
            .split('.')
            .nth(CATEGORY_SEGMENT)
            .filter(|segment| !segment.is_empty())
            .ok_or_else(|| EventTypeError::MissingCategory {
                event_type: self.0.clone(),
            })
    }

    /// Returns a copy of this type with its final segment replaced.
    ///
    /// Used to derive the response type from the request type, e.g.
    /// `com.demo.word.found` → `com.demo.word.picked`. A type without any
    /// dots is replaced wholesale.
    #[must_use]
    pub fn with_action(&self, action: &str) -> Self {
        self.0.rsplit_once('.').map_or_else(
            || Self::new(action),
            |(head, _)| Self(format!("{head}.{action}")),
        )
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors raised when interpreting an event type name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventTypeError {
    /// The type has no usable category segment.
    #[error("event type '{event_type}' has no category segment (expected at least three dot-delimited segments)")]
    MissingCategory {
        /// The offending type name.
        event_type: String,
    },
}
