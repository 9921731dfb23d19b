//! Shared helpers for command integration tests.

use std::sync::Arc;

use canto_api::AppContext;
use canto_common::testing::MockClock;
use canto_domain::{CantoConfig, StoredCredential};
use canto_infra::InMemoryCredentialRepository;
use chrono::{Duration, TimeZone, Utc};

pub const USER: &str = "editor@example.com";
pub const REDIRECT_URI: &str = "https://cms.example/canto/settings/";
pub const TOKEN: &str = "access-token";

pub fn config_for(uri: &str) -> CantoConfig {
    CantoConfig::new(
        uri,
        "canto-test-app",
        "app-secret",
        format!("{uri}/oauth/api/oauth2/authorize"),
        format!("{uri}/oauth/api/oauth2/token"),
    )
    .validate()
    .expect("test config should be valid")
}

pub fn fixed_clock() -> MockClock {
    MockClock::at(Utc.with_ymd_and_hms(2024, 4, 2, 10, 0, 0).unwrap())
}

pub fn connected_credential() -> StoredCredential {
    let now = Utc.with_ymd_and_hms(2024, 4, 2, 10, 0, 0).unwrap();
    StoredCredential {
        access_token: TOKEN.into(),
        refresh_token: "refresh-token".into(),
        token_valid_until: Some(now + Duration::days(30)),
        last_modified_at: now,
    }
}

/// Context over an in-memory store, optionally already connected.
pub fn context(uri: &str, connected: bool) -> AppContext {
    let repository = if connected {
        InMemoryCredentialRepository::with_credential(connected_credential())
    } else {
        InMemoryCredentialRepository::new()
    };
    AppContext::with_repository(config_for(uri), Arc::new(repository), fixed_clock().shared())
        .expect("context builds")
}

pub async fn blocking<F, T>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.expect("blocking task should not panic")
}
