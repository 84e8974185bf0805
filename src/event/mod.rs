//! CloudEvents v0.1 envelope model and dual-mode wire codec.
//!
//! The envelope travels across the HTTP boundary in one of two modes:
//!
//! - **Structured**: the whole envelope, metadata and payload, is a single
//!   JSON document and the content type carries the `cloudevents` media
//!   type marker.
//! - **Binary**: the body is the payload alone and the metadata travels in
//!   `ce-` prefixed headers.
//!
//! [`domain`] holds the envelope types, [`codec`] the decoder and encoder,
//! and [`error`] the decode/encode failure types.

pub mod codec;
pub mod domain;
pub mod error;

#[cfg(test)]
mod tests;
