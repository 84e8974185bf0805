//! Randomness port for word selection.

/// Port supplying random indices for selection.
///
/// Abstracted so tests can drive the selection deterministically.
pub trait Randomness: Send + Sync {
    /// Returns a uniformly distributed index in `0..bound`.
    ///
    /// Returns `None` when `bound` is zero or no entropy is available.
    fn pick_index(&self, bound: usize) -> Option<usize>;
}
