use canto_domain::constants::{FLASH_DISCONNECTED, FLASH_REFRESHED};
use canto_domain::Result;

use super::{execute_logged, Redirect};
use crate::{routes, AppContext};

/// Refresh the stored token, then return to the settings screen.
pub fn refresh_token(ctx: &AppContext) -> Result<Redirect> {
    execute_logged("canto::refresh_token", || {
        ctx.canto.refresh_and_save_access_token()?;
        Ok(to_settings(FLASH_REFRESHED))
    })
}

/// Forget the stored tokens, then return to the settings screen.
pub fn disconnect(ctx: &AppContext) -> Result<Redirect> {
    execute_logged("canto::disconnect", || {
        ctx.canto.disconnect_canto()?;
        Ok(to_settings(FLASH_DISCONNECTED))
    })
}

fn to_settings(message: &str) -> Redirect {
    Redirect {
        route: routes::SETTINGS.name,
        location: routes::SETTINGS.path.to_string(),
        messages: vec![message.to_string()],
    }
}
