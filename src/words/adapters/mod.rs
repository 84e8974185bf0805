//! Concrete implementations of the word-picking ports.

mod http;
mod memory;
mod os_random;

pub use http::{HttpWordSource, WORDS_URL_ENV};
pub use memory::{FixedRandomness, InMemoryWordSource};
pub use os_random::OsRandomness;
