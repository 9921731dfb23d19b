//! Settings screen: connection status, authorize link and OAuth callback.

use canto_domain::constants::FLASH_CONNECTED;
use canto_domain::{ConnectionStatus, Result};
use serde::{Deserialize, Serialize};
use tracing::error;

use super::execute_logged;
use crate::AppContext;

const TITLE: &str = "Canto settings";

/// Inputs of the settings screen.
///
/// `redirect_uri` is the absolute URL of the settings screen itself; the
/// other fields are the OAuth callback query and are empty on a plain visit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SettingsRequest {
    pub redirect_uri: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub error_description: String,
}

impl SettingsRequest {
    pub fn new(redirect_uri: impl Into<String>) -> Self {
        Self { redirect_uri: redirect_uri.into(), ..Self::default() }
    }

    fn is_callback(&self) -> bool {
        !self.code.is_empty() && !self.state.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsView {
    pub title: &'static str,
    pub status: ConnectionStatus,
    pub oauth_url: String,
    pub oauth_error_code: String,
    pub oauth_error_message: String,
    pub messages: Vec<String>,
}

/// Render the settings screen for `user_id`, completing the OAuth flow when
/// the request is a callback carrying `code` and `state`.
///
/// # Errors
/// - `CantoError::OAuthStateMismatch` if the callback state was not issued
///   for `user_id`
/// - `CantoError::OAuthExchange` if the code is rejected
pub fn settings(
    ctx: &AppContext,
    user_id: &str,
    request: &SettingsRequest,
) -> Result<SettingsView> {
    execute_logged("canto::settings", || {
        if !request.error.is_empty() {
            error!(
                error_code = %request.error,
                error_description = %request.error_description,
                "An OAuth error has occurred"
            );
        }

        let mut messages = Vec::new();
        if request.is_callback() {
            let expected_state = ctx.canto.get_oauth_state(user_id);
            ctx.canto.get_and_save_access_token(&request.code, &request.state, &expected_state)?;
            messages.push(FLASH_CONNECTED.to_string());
        }

        Ok(SettingsView {
            title: TITLE,
            status: ctx.canto.connection_status()?,
            oauth_url: ctx.canto.oauth_authorize_url(user_id, &request.redirect_uri)?,
            oauth_error_code: request.error.clone(),
            oauth_error_message: request.error_description.clone(),
            messages,
        })
    })
}
