//! HTTP status codes used by the function.

use std::fmt;

/// An HTTP status code.
///
/// Only the handful of codes the function actually emits are named; any
/// other value can still be carried via [`StatusCode::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(u16);

impl StatusCode {
    /// Synchronous success: the produced event is returned inline.
    pub const OK: Self = Self(200);

    /// Accepted for asynchronous delivery; the body is empty.
    pub const ACCEPTED: Self = Self(202);

    /// The inbound event could not be decoded or was malformed.
    pub const BAD_REQUEST: Self = Self(400);

    /// The outbound event could not be encoded.
    pub const INTERNAL_SERVER_ERROR: Self = Self(500);

    /// An upstream collaborator (the word list) failed.
    pub const BAD_GATEWAY: Self = Self(502);

    /// Creates a status code from its numeric value.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the numeric value of the status code.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Returns `true` for 2xx codes.
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
