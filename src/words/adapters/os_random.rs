//! OS-backed randomness.

use crate::words::ports::Randomness;

/// [`Randomness`] drawing from the operating system's entropy source.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandomness;

impl OsRandomness {
    /// Creates an OS randomness source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Randomness for OsRandomness {
    fn pick_index(&self, bound: usize) -> Option<usize> {
        if bound == 0 {
            return None;
        }
        let mut buf = [0_u8; 8];
        getrandom::getrandom(&mut buf).ok()?;
        let raw = buf
            .iter()
            .fold(0_u64, |acc, byte| (acc << 8) | u64::from(*byte));

        // Scale into the bound without modulo bias: take the high half of
        // the 128-bit product of the draw and the bound.
        let bound_wide = u128::try_from(bound).ok()?;
        let index = (u128::from(raw) * bound_wide) >> 64;
        usize::try_from(index).ok()
    }
}
