//! Shared helpers for infra integration tests.

use canto_common::testing::MockClock;
use canto_domain::CantoConfig;
use chrono::{TimeZone, Utc};

pub const APP_ID: &str = "canto-test-app";
pub const APP_SECRET: &str = "app-secret";
pub const TOKEN: &str = "access-token";

/// Config pointing every endpoint at the mock server at `uri`.
pub fn config_for(uri: &str) -> CantoConfig {
    CantoConfig::new(
        uri,
        APP_ID,
        APP_SECRET,
        format!("{uri}/oauth/api/oauth2/authorize"),
        format!("{uri}/oauth/api/oauth2/token"),
    )
    .validate()
    .expect("test config should be valid")
}

/// Clock frozen at a fixed instant.
pub fn fixed_clock() -> MockClock {
    MockClock::at(Utc.with_ymd_and_hms(2024, 4, 2, 10, 0, 0).unwrap())
}

/// Run blocking client code off the async runtime.
///
/// Blocking reqwest clients must be created and dropped outside the runtime's
/// worker threads, so tests build them inside `f`.
pub async fn blocking<F, T>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.expect("blocking task should not panic")
}
