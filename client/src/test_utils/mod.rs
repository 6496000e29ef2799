//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! The mocks record every call so tests can assert on exactly what the
//! feed client sent, and can be switched into failure modes per operation.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
