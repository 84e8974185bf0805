//! Unit tests for the composed invocation service.
