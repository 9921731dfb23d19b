//! Per-user OAuth `state` values for CSRF protection
//!
//! The state is derived rather than stored: the settings page recomputes it
//! for the signed-in user both when it renders the authorize link and when
//! the provider redirects back, so nothing has to survive between the two
//! requests.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const STATE_CONTEXT: &[u8] = b"canto.oauth_state";

/// Issues opaque, per-user OAuth state values.
///
/// Values are `BASE64URL(HMAC-SHA256(secret, context || 0x00 || user))` and
/// therefore stable for a given user and secret. Rotating the secret invalidates every
/// authorize link that is still in flight.
#[derive(Clone)]
pub struct OAuthStateIssuer {
    secret: String,
}

impl OAuthStateIssuer {
    /// Create an issuer keyed by a deployment secret.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self { secret: secret.into() }
    }

    /// Return the state value for `user_id`.
    #[must_use]
    pub fn state_for(&self, user_id: &str) -> String {
        // HMAC takes keys of any length.
        let Ok(mut mac) = HmacSha256::new_from_slice(self.secret.as_bytes()) else {
            unreachable!("HMAC-SHA256 rejected its key")
        };
        mac.update(STATE_CONTEXT);
        mac.update(&[0u8]);
        mac.update(user_id.as_bytes());
        URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
    }
}

impl std::fmt::Debug for OAuthStateIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthStateIssuer").field("secret", &"<redacted>").finish()
    }
}

/// Validate that the state returned by the provider matches the expected one
///
/// Comparison runs in time independent of where the first differing byte
/// sits. Empty values never validate.
///
/// # Arguments
/// * `expected` - The state that was sent in the authorization request
/// * `actual` - The state received in the callback
#[must_use]
pub fn validate_state(expected: &str, actual: &str) -> bool {
    if expected.is_empty() || expected.len() != actual.len() {
        return false;
    }

    expected.bytes().zip(actual.bytes()).fold(0u8, |acc, (a, b)| acc | (a ^ b)) == 0
}
