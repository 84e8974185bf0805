//! Word-list collaborator: category lookup and random selection.
//!
//! The original system held the word list in process-wide lazily
//! initialised state; here it is an explicit capability injected into the
//! core at construction time. The [`ports::WordSource`] port abstracts the
//! lookup, [`adapters::HttpWordSource`] fetches and caches the remote
//! document with its own refresh policy, and
//! [`services::WordPicker`] applies the selection policy over an injected
//! randomness port.

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
