//! # Canto Core
//!
//! Connection lifecycle for the Canto integration - no infrastructure
//! dependencies.
//!
//! This crate contains:
//! - Port interfaces for credential storage and the remote OAuth API
//! - `CantoService`, which owns the connect/refresh/disconnect state machine
//!
//! ## Architecture Principles
//! - Only depends on `canto-common` and `canto-domain`
//! - No database or HTTP code
//! - All external dependencies via traits

pub mod canto;

pub use canto::ports::{CantoOAuthApi, ClientFactory, CredentialRepository};
pub use canto::CantoService;
