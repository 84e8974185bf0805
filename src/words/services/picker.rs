//! Word selection service.

use crate::words::ports::{Randomness, WordSource, WordSourceResult};
use std::sync::Arc;

/// Minimum number of candidates required before a pick is made.
const MIN_CANDIDATES: usize = 2;

/// Selects a random word from a category.
///
/// Selection policy: a category with fewer than two candidate words yields
/// no pick (the caller responds with an empty body), otherwise the pick is
/// uniform over every candidate.
#[derive(Clone)]
pub struct WordPicker<S, R> {
    source: Arc<S>,
    randomness: Arc<R>,
}

impl<S, R> WordPicker<S, R>
where
    S: WordSource,
    R: Randomness,
{
    /// Creates a picker over a word source and a randomness source.
    #[must_use]
    pub const fn new(source: Arc<S>, randomness: Arc<R>) -> Self {
        Self { source, randomness }
    }

    /// Picks a word from the category, if enough candidates exist.
    ///
    /// # Errors
    ///
    /// Returns the word source's error when the candidate lookup fails.
    pub async fn pick(&self, category: &str) -> WordSourceResult<Option<String>> {
        let candidates = self.source.words_for(category).await?;
        if candidates.len() < MIN_CANDIDATES {
            return Ok(None);
        }

        let selected = self
            .randomness
            .pick_index(candidates.len())
            .and_then(|index| candidates.get(index).cloned());
        Ok(selected)
    }
}
