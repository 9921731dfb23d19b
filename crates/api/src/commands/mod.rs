//! Presentation commands for the Canto screens
//!
//! Each command takes the [`AppContext`](crate::AppContext), performs one
//! screen's worth of work through the connection service, logs its outcome
//! and returns a serializable view model.

mod binary;
mod browse;
mod connection;
mod settings;

use std::time::Instant;

use canto_domain::Result;
use canto_infra::PaginatedResult;
use serde::Serialize;
use serde_json::Value;

use crate::utils::logging::log_command_execution;

pub use binary::{binary, BinaryRedirect};
pub use browse::{album, library, search, tree, AlbumView, LibraryView, SearchView, TreeView};
pub use connection::{disconnect, refresh_token};
pub use settings::{settings, SettingsRequest, SettingsView};

/// Redirect to another route with flash messages for the next screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    /// `canto:*` name of the target route.
    pub route: &'static str,
    pub location: String,
    pub messages: Vec<String>,
}

/// One page of listing results, with navigation already worked out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsPage {
    pub results: Vec<Value>,
    pub found: u64,
    pub page: u64,
    pub num_pages: u64,
    pub next_page: Option<u64>,
    pub previous_page: Option<u64>,
}

impl From<PaginatedResult> for ResultsPage {
    fn from(page: PaginatedResult) -> Self {
        Self {
            found: page.found(),
            page: page.page(),
            num_pages: page.num_pages(),
            next_page: page.next_page(),
            previous_page: page.previous_page(),
            results: page.into_results(),
        }
    }
}

/// Parse a `page` query parameter.
///
/// Missing or unparsable values become 0; negative values are clamped to 0.
pub fn parse_page_param(raw: Option<&str>) -> u64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .map_or(0, |page| u64::try_from(page).unwrap_or(0))
}

/// Time `command_fn` and log its outcome under `command`.
pub(crate) fn execute_logged<T>(
    command: &str,
    command_fn: impl FnOnce() -> Result<T>,
) -> Result<T> {
    let start = Instant::now();
    let result = command_fn();
    log_command_execution(command, start.elapsed(), result.as_ref().err());
    result
}
