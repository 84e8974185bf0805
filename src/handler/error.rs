//! Invocation-level errors and their transport status mapping.

use crate::event::domain::EventTypeError;
use crate::event::error::{DecodeError, EncodeError};
use crate::transport::{Response, StatusCode};
use crate::words::error::WordSourceError;
use thiserror::Error;

/// Errors that abort an invocation.
///
/// All variants produce an empty-bodied error response; none of them ever
/// carry a partially encoded event.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The inbound event could not be decoded.
    #[error("failed to decode inbound event: {0}")]
    Decode(#[from] DecodeError),

    /// The inbound event type has no usable category segment.
    #[error(transparent)]
    EventType(#[from] EventTypeError),

    /// The word lookup collaborator failed.
    #[error("word lookup failed: {0}")]
    WordSource(#[from] WordSourceError),

    /// The outbound event could not be encoded.
    #[error("failed to encode outbound event: {0}")]
    Encode(#[from] EncodeError),
}

impl HandlerError {
    /// Returns the transport status this error maps to.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Decode(_) | Self::EventType(_) => StatusCode::BAD_REQUEST,
            Self::WordSource(_) => StatusCode::BAD_GATEWAY,
            Self::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Logs the failure and maps it to its empty-bodied error response.
    #[must_use]
    pub fn to_response(&self) -> Response {
        log::error!("invocation failed: {self}");
        Response::empty(self.status())
    }
}
