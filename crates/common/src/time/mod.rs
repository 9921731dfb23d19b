//! Time abstractions
//!
//! Token expiry is computed as "request start + `expiresIn`", so every
//! component that stamps a time takes a [`Clock`] instead of calling
//! `Utc::now()` directly.

pub mod clock;

pub use clock::{Clock, SharedClock, SystemClock};
