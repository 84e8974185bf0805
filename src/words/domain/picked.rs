//! The payload carried by a `word.picked` event.

use serde::{Deserialize, Serialize};

/// The selected word, serialised as `{"word": "<w>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickedWord {
    word: String,
}

impl PickedWord {
    /// Wraps a selected word.
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into() }
    }

    /// Returns the selected word.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }
}
