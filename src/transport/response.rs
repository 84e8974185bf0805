//! Outbound invocation response.

use super::{Headers, StatusCode};

/// The response produced for a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: StatusCode,
    headers: Headers,
    body: Vec<u8>,
}

impl Response {
    /// Creates a response from its parts.
    #[must_use]
    pub const fn new(status: StatusCode, headers: Headers, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Creates an empty-bodied response with no headers.
    #[must_use]
    pub const fn empty(status: StatusCode) -> Self {
        Self::new(status, Headers::new(), Vec::new())
    }

    /// Returns the response status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the response headers.
    #[must_use]
    pub const fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Returns the response body.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
