//! Database implementations

pub mod credential_repository;
pub mod manager;
pub mod memory;

pub use credential_repository::SqliteCredentialRepository;
pub use manager::{DbManager, SqliteConnection, SqlitePool};
pub use memory::InMemoryCredentialRepository;
