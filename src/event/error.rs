//! Decode and encode failure types.
//!
//! Decode errors are fatal to an invocation: no envelope is produced and
//! the error propagates as the invocation's own result. Encode errors
//! abort before any response header is emitted.

use thiserror::Error;

/// Errors raised while reconstructing an envelope from the wire.
///
/// Only the structured path can hard-fail; the binary path tolerates any
/// header shape and simply leaves unmatched fields empty.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The structured body is not a valid envelope document.
    #[error("malformed structured event body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

/// Errors raised while producing a wire representation of an envelope.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The envelope (or its payload) could not be serialised as JSON.
    ///
    /// Only possible when `data` holds bytes that are not a self-contained
    /// JSON value, which cannot happen for payloads produced locally.
    #[error("event could not be serialised: {0}")]
    Serialisation(#[from] serde_json::Error),
}
