//! Port interfaces for the Canto connection
//!
//! These traits define the boundaries between the connection state machine
//! and the HTTP/storage implementations.

use canto_domain::{Result, StoredCredential, TokenGrant};
use chrono::{DateTime, Utc};

/// Trait for persisting the deployment's single credential
pub trait CredentialRepository: Send + Sync {
    /// Load the stored credential, if a row exists
    fn load(&self) -> Result<Option<StoredCredential>>;

    /// Persist `grant`, creating the row on first use
    fn save(&self, grant: &TokenGrant, now: DateTime<Utc>) -> Result<StoredCredential>;

    /// Blank the tokens and expiry, keeping the row
    fn clear(&self, now: DateTime<Utc>) -> Result<()>;
}

/// OAuth operations of the remote API client
pub trait CantoOAuthApi {
    /// Exchange an authorization code for a token grant
    fn create_access_token(&self, code: &str) -> Result<TokenGrant>;

    /// Obtain a new grant from a refresh token
    fn refresh_access_token(&self, refresh_token: &str) -> Result<TokenGrant>;

    /// URL the user is sent to in order to grant access
    fn get_oauth_authorize_url(&self, state: &str, redirect_uri: &str) -> String;
}

/// Builds configured API clients
pub trait ClientFactory: Send + Sync {
    type Client: CantoOAuthApi;

    /// Build a client, authenticated when `access_token` is given
    fn build(&self, access_token: Option<String>) -> Result<Self::Client>;
}
