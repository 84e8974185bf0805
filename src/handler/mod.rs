//! The word-picking function: one invocation end to end.
//!
//! Per invocation the state machine is
//! `Received → ModeDetected → Decoded → [Enriched] → Encoded →
//! {Responded | Dispatched-Async}`. Failures at the decode stage are
//! terminal and short-circuit to an error response; there are no retries
//! anywhere in this core.

mod error;
mod service;

pub use error::HandlerError;
pub use service::WordPickHandler;

#[cfg(test)]
mod tests;
