//! Callback delivery failures.

use thiserror::Error;

/// Errors raised delivering an encoded event to a callback address.
///
/// These are recorded for out-of-band diagnostics only; they never reach
/// the synchronous response path.
#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    /// The callback endpoint answered with a non-success status.
    #[error("callback POST to {url} returned status {status}")]
    Status {
        /// The callback address.
        url: String,
        /// The HTTP status received.
        status: u16,
    },

    /// The callback endpoint could not be reached.
    #[error("callback POST to {url} failed: {reason}")]
    Transport {
        /// The callback address.
        url: String,
        /// Description of the transport failure.
        reason: String,
    },

    /// The delivery task could not run to completion.
    #[error("callback delivery task aborted: {0}")]
    Background(String),
}

impl DispatchError {
    /// Creates a transport error.
    #[must_use]
    pub fn transport(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Transport {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Creates a background-task error.
    #[must_use]
    pub fn background(reason: impl Into<String>) -> Self {
        Self::Background(reason.into())
    }
}
