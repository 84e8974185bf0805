//! Domain types for the word-list collaborator.

mod picked;
mod word_list;

pub use picked::PickedWord;
pub use word_list::WordList;
