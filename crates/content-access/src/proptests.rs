//! Property-based tests for the access decision.
