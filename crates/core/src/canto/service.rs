//! Canto connection service
//!
//! Owns the stored credential's lifecycle:
//! - Disconnected → connected on a successful code exchange
//! - Connected → connected (new token triple) on refresh
//! - Connected → disconnected on disconnect
//!
//! A failed exchange or refresh leaves the stored credential untouched.
//! Concurrent refreshes are not coordinated; the last save wins.

use std::sync::Arc;

use canto_common::{validate_state, Clock, OAuthStateIssuer, SharedClock};
use canto_domain::{CantoError, ConnectionStatus, Result, StoredCredential};
use tracing::{debug, info, warn};

use super::ports::{CantoOAuthApi, ClientFactory, CredentialRepository};

/// Connection service for one Canto deployment
pub struct CantoService<F: ClientFactory> {
    factory: F,
    repository: Arc<dyn CredentialRepository>,
    state_issuer: OAuthStateIssuer,
    clock: SharedClock,
}

impl<F: ClientFactory> CantoService<F> {
    pub fn new(
        factory: F,
        repository: Arc<dyn CredentialRepository>,
        state_issuer: OAuthStateIssuer,
        clock: SharedClock,
    ) -> Self {
        Self { factory, repository, state_issuer, clock }
    }

    /// Client carrying the stored access token, if any.
    ///
    /// A client without a token can still build authorize URLs and exchange
    /// codes; authenticated calls on it fail with
    /// `CantoError::AuthenticationRequired`.
    pub fn get_canto_client(&self) -> Result<F::Client> {
        let token = self
            .repository
            .load()?
            .and_then(|credential| credential.access_token().map(str::to_owned));

        debug!(authenticated = token.is_some(), "Building Canto client");
        self.factory.build(token)
    }

    /// Opaque per-user value to pass as OAuth `state`.
    pub fn get_oauth_state(&self, user_id: &str) -> String {
        self.state_issuer.state_for(user_id)
    }

    /// Authorize URL for `user_id`, carrying that user's state.
    pub fn oauth_authorize_url(&self, user_id: &str, redirect_uri: &str) -> Result<String> {
        let state = self.get_oauth_state(user_id);
        Ok(self.factory.build(None)?.get_oauth_authorize_url(&state, redirect_uri))
    }

    /// Verify the callback `state`, exchange `code` and persist the grant.
    ///
    /// # Errors
    /// - `CantoError::OAuthStateMismatch` if `state` differs from
    ///   `expected_state`; the code is not exchanged
    /// - `CantoError::OAuthExchange` if the token endpoint rejects the code
    pub fn get_and_save_access_token(
        &self,
        code: &str,
        state: &str,
        expected_state: &str,
    ) -> Result<StoredCredential> {
        if !validate_state(expected_state, state) {
            warn!("OAuth callback state did not match; refusing to exchange code");
            return Err(CantoError::OAuthStateMismatch);
        }

        let client = self.get_canto_client()?;
        let grant = client.create_access_token(code)?;
        let credential = self.repository.save(&grant, self.clock.now())?;

        info!(valid_until = %grant.valid_until, "Canto connected");
        Ok(credential)
    }

    /// Refresh the stored token triple.
    ///
    /// # Errors
    /// `CantoError::AuthenticationRequired` when nothing is stored; the remote
    /// is not contacted in that case.
    pub fn refresh_and_save_access_token(&self) -> Result<StoredCredential> {
        let credential = self
            .repository
            .load()?
            .filter(|credential| credential.is_connected() && !credential.refresh_token.is_empty())
            .ok_or(CantoError::AuthenticationRequired)?;

        let client = self.factory.build(Some(credential.access_token.clone()))?;
        let grant = client.refresh_access_token(&credential.refresh_token)?;
        let refreshed = self.repository.save(&grant, self.clock.now())?;

        info!(valid_until = %grant.valid_until, "Canto token refreshed");
        Ok(refreshed)
    }

    /// Forget the stored tokens.
    pub fn disconnect_canto(&self) -> Result<()> {
        self.repository.clear(self.clock.now())?;
        info!("Canto disconnected");
        Ok(())
    }

    pub fn connection_status(&self) -> Result<ConnectionStatus> {
        Ok(self
            .repository
            .load()?
            .map_or(ConnectionStatus::Disconnected, |credential| credential.status()))
    }
}
