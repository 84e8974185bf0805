//! In-memory test doubles for the word-picking ports.
//!
//! Suitable for unit tests and offline use; not a production source.

use crate::words::domain::WordList;
use crate::words::ports::{Randomness, WordSource, WordSourceResult};
use async_trait::async_trait;

/// In-memory implementation of [`WordSource`] backed by a fixed mapping.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWordSource {
    list: WordList,
}

impl InMemoryWordSource {
    /// Creates a source over a fixed word list.
    #[must_use]
    pub const fn new(list: WordList) -> Self {
        Self { list }
    }

    /// Creates a source from `(category, words)` entries.
    #[must_use]
    pub fn with_entries<I, C, W>(entries: I) -> Self
    where
        I: IntoIterator<Item = (C, W)>,
        C: Into<String>,
        W: IntoIterator<Item = String>,
    {
        let list = entries
            .into_iter()
            .map(|(category, words)| (category.into(), words.into_iter().collect()))
            .collect();
        Self::new(list)
    }
}

#[async_trait]
impl WordSource for InMemoryWordSource {
    async fn words_for(&self, category: &str) -> WordSourceResult<Vec<String>> {
        Ok(self.list.words_for(category).to_vec())
    }
}

/// Deterministic [`Randomness`] always yielding the same index.
///
/// The index is clamped to the bound so a fixture can simply ask for the
/// "third" element regardless of list size.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandomness {
    index: usize,
}

impl FixedRandomness {
    /// Creates a randomness source pinned to an index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self { index }
    }
}

impl Randomness for FixedRandomness {
    fn pick_index(&self, bound: usize) -> Option<usize> {
        let last = bound.checked_sub(1)?;
        Some(self.index.min(last))
    }
}
