//! # Canto Domain
//!
//! Domain types for the Canto asset-service integration.
//!
//! This crate contains:
//! - The persisted credential record and token grants
//! - The error taxonomy and `Result` alias shared by every layer
//! - Deployment configuration structures
//! - Remote endpoint paths and presentation defaults
//!
//! ## Architecture
//! - No dependencies on other Canto crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
