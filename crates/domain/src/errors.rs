//! Error types used throughout the integration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the Canto integration
///
/// The first five variants are the integration's own failure modes; the
/// remaining ones wrap infrastructure failures (transport, storage,
/// configuration) so every layer can share one `Result` alias.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail")]
pub enum CantoError {
    /// No access token is stored; the deployment must be connected first.
    #[error("Authentication required: no access token available")]
    AuthenticationRequired,

    /// The OAuth token endpoint rejected an exchange or refresh.
    #[error("OAuth token exchange failed: {code} {description}")]
    OAuthExchange { code: String, description: String },

    /// The `state` returned by the OAuth callback did not match.
    #[error("OAuth state mismatch")]
    OAuthStateMismatch,

    /// Non-2xx status, unexpected redirect behaviour, or a body that does not
    /// match the endpoint schema.
    #[error("Unexpected response (status {status}): {body}")]
    UnexpectedResponse { status: u16, body: String },

    /// The caller passed an argument outside the allowed domain (e.g. a
    /// binary URL outside the configured API base).
    #[error("Precondition failed: {0}")]
    Precondition(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CantoError {
    /// Shorthand for [`CantoError::UnexpectedResponse`].
    pub fn unexpected(status: u16, body: impl Into<String>) -> Self {
        Self::UnexpectedResponse { status, body: body.into() }
    }

    /// Stable label suitable for structured logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AuthenticationRequired => "authentication_required",
            Self::OAuthExchange { .. } => "oauth_exchange",
            Self::OAuthStateMismatch => "oauth_state_mismatch",
            Self::UnexpectedResponse { .. } => "unexpected_response",
            Self::Precondition(_) => "precondition",
            Self::Network(_) => "network",
            Self::Database(_) => "database",
            Self::Config(_) => "config",
        }
    }
}

/// Result type alias for Canto operations
pub type Result<T> = std::result::Result<T, CantoError>;
