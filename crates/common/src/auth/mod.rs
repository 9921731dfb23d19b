//! OAuth helpers shared by the service and presentation layers.
//!
//! The asset service implements the plain authorization-code grant (no PKCE),
//! so the only client-side protection against forged callbacks is the
//! `state` round trip handled here.

pub mod state;

pub use state::{validate_state, OAuthStateIssuer};
