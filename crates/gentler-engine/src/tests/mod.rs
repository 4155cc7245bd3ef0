//! Unit tests for `gentler_engine`.
