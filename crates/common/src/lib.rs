//! Common utilities shared across the Canto integration crates.
//!
//! # Modules
//!
//! - [`auth`]: OAuth `state` derivation and validation (CSRF protection)
//! - [`time`]: wall-clock abstraction used for token expiry arithmetic
//! - [`testing`]: deterministic clocks for tests (`test-utils` feature)

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod auth;
pub mod time;

// Testing utilities
// ---------------------------------------------------------------
#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::{validate_state, OAuthStateIssuer};
pub use time::{Clock, SharedClock, SystemClock};
