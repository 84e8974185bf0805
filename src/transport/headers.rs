//! Case-insensitive, multi-valued header collection.
//!
//! Names are canonicalised to ASCII lowercase on insertion, so lookups and
//! iteration always observe a single spelling per field regardless of how
//! the transport delivered it.

use std::collections::BTreeMap;

/// Canonical name of the content-type header.
pub const CONTENT_TYPE: &str = "content-type";

/// Canonical name of the optional asynchronous delivery address header.
pub const CALLBACK_URL: &str = "x-callback-url";

const NO_VALUES: &[String] = &[];

/// An ordered, case-insensitive header collection.
///
/// # Examples
///
/// ```
/// use wordpick::transport::Headers;
///
/// let mut headers = Headers::new();
/// headers.insert("Content-Type", "application/json");
/// assert_eq!(headers.get("content-type"), Some("application/json"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: BTreeMap<String, Vec<String>>,
}

impl Headers {
    /// Creates an empty header collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Sets a header, replacing any values previously stored under the name.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.entries
            .insert(canonical(name), vec![value.into()]);
    }

    /// Adds a value under a header name, preserving existing values.
    pub fn append(&mut self, name: &str, value: impl Into<String>) {
        self.entries
            .entry(canonical(name))
            .or_default()
            .push(value.into());
    }

    /// Returns the first value stored under a name, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&canonical(name))
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns every value stored under a name.
    ///
    /// Returns an empty slice when the header is absent.
    #[must_use]
    pub fn get_all(&self, name: &str) -> &[String] {
        self.entries
            .get(&canonical(name))
            .map_or(NO_VALUES, Vec::as_slice)
    }

    /// Returns `true` if at least one value is stored under the name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&canonical(name))
    }

    /// Returns the number of distinct header names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no headers are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, values)` pairs in canonical name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }
}

impl<N, V> FromIterator<(N, V)> for Headers
where
    N: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(pairs: I) -> Self {
        let mut headers = Self::new();
        for (name, value) in pairs {
            headers.append(name.as_ref(), value);
        }
        headers
    }
}

fn canonical(name: &str) -> String {
    name.to_ascii_lowercase()
}
