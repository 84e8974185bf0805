//! Unit tests for delivery dispatch.
