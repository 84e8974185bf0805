//! Concrete callback sink implementations.

mod http;
mod memory;

pub use http::HttpCallbackSink;
pub use memory::{Delivery, RecordingCallbackSink};
