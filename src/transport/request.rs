//! Inbound invocation request.

use super::Headers;

/// A single inbound invocation: headers plus a raw body.
///
/// The body is kept as opaque bytes; in binary wire mode it is the event
/// payload verbatim and must never be re-interpreted by the transport layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    headers: Headers,
    body: Vec<u8>,
}

impl Request {
    /// Creates a request from its headers and raw body.
    #[must_use]
    pub const fn new(headers: Headers, body: Vec<u8>) -> Self {
        Self { headers, body }
    }

    /// Returns the request headers.
    #[must_use]
    pub const fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Returns the raw request body.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
