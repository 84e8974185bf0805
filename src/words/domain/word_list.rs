//! The category-to-words mapping fetched from the collaborator.

use serde::Deserialize;
use std::collections::BTreeMap;

const NO_WORDS: &[String] = &[];

/// A mapping from category name to candidate words.
///
/// Deserialised directly from the collaborator's JSON document, which is a
/// single object of `string → [string]` entries. The core tolerates an
/// empty or partial mapping: an unknown category simply yields no words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct WordList(BTreeMap<String, Vec<String>>);

impl WordList {
    /// Creates an empty word list.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns the candidate words for a category.
    ///
    /// Returns an empty slice for an unknown category.
    #[must_use]
    pub fn words_for(&self, category: &str) -> &[String] {
        self.0.get(category).map_or(NO_WORDS, Vec::as_slice)
    }

    /// Returns the number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no categories are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Vec<String>)> for WordList {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(entries: I) -> Self {
        Self(entries.into_iter().collect())
    }
}
