//! Builds [`CantoClient`]s for the connection service

use canto_common::SharedClock;
use canto_core::ClientFactory;
use canto_domain::{CantoConfig, Result};

use super::client::CantoClient;

/// Hands out clients that share one HTTP transport.
#[derive(Clone, Debug)]
pub struct CantoClientFactory {
    base: CantoClient,
}

impl CantoClientFactory {
    pub fn new(config: CantoConfig, clock: SharedClock) -> Result<Self> {
        Ok(Self { base: CantoClient::new(config, None, clock)? })
    }

    pub fn config(&self) -> &CantoConfig {
        self.base.config()
    }
}

impl ClientFactory for CantoClientFactory {
    type Client = CantoClient;

    fn build(&self, access_token: Option<String>) -> Result<CantoClient> {
        Ok(self.base.with_access_token(access_token))
    }
}
