//! Testing utilities
//!
//! Enabled with the `test-utils` feature so downstream crates can pin time in
//! their own test suites.

pub mod time;

pub use time::MockClock;
