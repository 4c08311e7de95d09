//! Test utilities
//!
//! In-memory repository doubles and test fixtures for unit testing.
//!
//! Two kinds of doubles are available:
//! - `InMemory*Repository` (this module): seeded data, preserved ordering,
//!   optional forced failure and lookup recording
//! - `Mock*Repository` (generated by mockall on the port traits): exact call
//!   expectations and per-call fault injection

pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
