use canto_domain::constants::BINARY_CACHE_MAX_AGE_SECS;
use canto_domain::Result;
use serde::Serialize;

use super::execute_logged;
use crate::AppContext;

/// Redirect to a binary's public location, cacheable by the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinaryRedirect {
    pub location: String,
    pub cache_control: String,
}

/// Resolve a tenant binary URL to its public location.
///
/// # Errors
/// `CantoError::Precondition` if `url` is not a binary URL of the configured
/// tenant.
pub fn binary(ctx: &AppContext, url: &str) -> Result<BinaryRedirect> {
    execute_logged("canto::binary", || {
        let location = ctx.canto.get_canto_client()?.get_public_url_for_binary(url)?;
        Ok(BinaryRedirect {
            location,
            cache_control: format!("max-age={BINARY_CACHE_MAX_AGE_SECS}"),
        })
    })
}
