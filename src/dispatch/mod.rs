//! Delivery dispatch: synchronous response or fire-and-forget callback.
//!
//! The dispatcher chooses between returning the encoded event inline
//! (status 200) and handing it to a detached callback delivery task
//! (status 202, empty body). Callback failures are logged and absorbed;
//! asynchronous delivery is advisory, not guaranteed, so the caller's 202
//! is unconditional once delivery was attempted.

pub mod adapters;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
