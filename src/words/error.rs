//! Failures of the word-list collaborator.

use thiserror::Error;

/// Errors raised looking up candidate words.
///
/// These propagate as the invocation's error result (the original system
/// aborted the whole process instead); they never corrupt the envelope
/// transcoding path.
#[derive(Debug, Clone, Error)]
pub enum WordSourceError {
    /// The word-list URL environment variable is not set or empty.
    #[error("word list URL is not configured (set the WORDS_URL environment variable)")]
    MissingConfiguration,

    /// The collaborator answered with a non-success status.
    #[error("word list fetch from {url} returned status {status}")]
    Status {
        /// The document URL.
        url: String,
        /// The HTTP status received.
        status: u16,
    },

    /// The collaborator could not be reached.
    #[error("word list fetch from {url} failed: {reason}")]
    Transport {
        /// The document URL.
        url: String,
        /// Description of the transport failure.
        reason: String,
    },

    /// The fetched document is not a `string → [string]` JSON object.
    #[error("word list document is malformed: {0}")]
    Malformed(String),
}

impl WordSourceError {
    /// Creates a transport error.
    #[must_use]
    pub fn transport(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Transport {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Creates a malformed-document error.
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed(reason.into())
    }
}
