//! Wordpick: a CloudEvents v0.1 word-picking function.
//!
//! This crate implements dual-mode (structured and binary) transcoding of
//! a lightweight event envelope across an HTTP boundary, and the demo
//! function built on it: receive a `...word.found` event, look up the word
//! category named by the event type, pick a random word, and answer (or
//! asynchronously deliver) a `...word.picked` event correlated to the
//! input.
//!
//! # Architecture
//!
//! Wordpick follows hexagonal architecture principles:
//!
//! - **Domain**: Pure envelope and word-list types with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for the external collaborators
//!   (word lookup, randomness, callback delivery)
//! - **Adapters**: Concrete implementations of ports (HTTP, in-memory)
//!
//! # Modules
//!
//! - [`event`]: Envelope model and dual-mode wire codec
//! - [`transport`]: Request/response boundary types
//! - [`words`]: Word-list lookup and random selection
//! - [`dispatch`]: Synchronous response vs fire-and-forget callback
//! - [`handler`]: The composed per-invocation service

pub mod dispatch;
pub mod event;
pub mod handler;
pub mod transport;
pub mod words;
