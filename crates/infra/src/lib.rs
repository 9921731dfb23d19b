//! # Canto Infrastructure
//!
//! Infrastructure implementations of the core ports.
//!
//! This crate contains:
//! - The blocking HTTP transport and the Canto API client
//! - Listing and pagination wrappers over API responses
//! - SQLite and in-memory credential repositories
//! - Configuration loading from environment and files
//!
//! ## Architecture
//! - Implements traits defined in `canto-core`
//! - Contains all "impure" code (network and disk I/O)

pub mod api;
pub mod config;
pub mod database;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::{
    CantoClient, CantoClientFactory, ImageDetail, ListResult, PaginatedResult, SortOptions,
};
pub use database::{DbManager, InMemoryCredentialRepository, SqliteCredentialRepository};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
