//! Transport boundary types for the function invocation cycle.
//!
//! The hosting runtime is out of scope; the boundary is modelled as plain
//! request/response values so the core can be driven from any HTTP-like
//! front end. Header names are canonicalised to lowercase, matching the
//! case-insensitive semantics of HTTP field names.

mod headers;
mod request;
mod response;
mod status;

pub use headers::{CALLBACK_URL, CONTENT_TYPE, Headers};
pub use request::Request;
pub use response::Response;
pub use status::StatusCode;

#[cfg(test)]
mod tests;
