//! Unit tests for the word-list collaborator.
