//! Abstract interfaces of the word-picking collaborators.

mod randomness;
mod source;

pub use randomness::Randomness;
pub use source::{WordSource, WordSourceResult};
