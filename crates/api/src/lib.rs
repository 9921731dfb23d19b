//! # Canto API
//!
//! Application layer - commands and the `canto` entry point.
//!
//! This crate contains:
//! - Presentation commands for the Canto screens (settings, browsing,
//!   binaries)
//! - Application context (dependency injection)
//! - Named routes used as redirect targets
//!
//! ## Architecture
//! - Depends on `common`, `domain`, `core`, and `infra`
//! - Wires the connection service to SQLite and the HTTP client

pub mod commands;
pub mod context;
pub mod routes;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
