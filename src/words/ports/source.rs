//! Word lookup port.

use crate::words::error::WordSourceError;
use async_trait::async_trait;

/// Result type for word source operations.
pub type WordSourceResult<T> = Result<T, WordSourceError>;

/// Port for looking up the candidate words of a category.
///
/// Implementations own their own caching and refresh policy; the core
/// treats the lookup as a plain request-scoped call and tolerates empty
/// results.
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Returns the candidate words for a category.
    ///
    /// An unknown category yields an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`WordSourceError`] when the backing document cannot be
    /// obtained or parsed.
    async fn words_for(&self, category: &str) -> WordSourceResult<Vec<String>>;
}
