//! Unit tests for the envelope model and wire codec.
//!
//! Tests are organised by concern: domain types, each codec direction, and
//! the round-trip properties the wire contract guarantees.

mod decoder_tests;
mod encoder_tests;
