//! Offset-based pagination context for templates
//!
//! Unlike [`canto_infra::PaginatedResult`], which derives pages from the
//! response's own `start`/`limit`, this builds links from a caller-supplied
//! offset: `?start=N`.

use canto_domain::{CantoError, Result};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageContext {
    pub results: Vec<Value>,
    pub num_results: u64,
    pub page: u64,
    pub num_pages: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_link: Option<String>,
}

/// Page context for `results` shown from offset `start`.
///
/// # Errors
/// `CantoError::Precondition` if `page_size` is zero.
pub fn paginate_by_start(
    results: Vec<Value>,
    found: u64,
    start: u64,
    page_size: u64,
) -> Result<PageContext> {
    if page_size == 0 {
        return Err(CantoError::Precondition("page size must be greater than 0".into()));
    }

    let shown = start.saturating_add(results.len() as u64);
    let previous_page_link =
        (start > 0).then(|| format!("?start={}", start.saturating_sub(page_size)));
    let next_page_link =
        (found > shown).then(|| format!("?start={}", start.saturating_add(page_size)));

    Ok(PageContext {
        results,
        num_results: found,
        page: (start / page_size).saturating_add(1),
        num_pages: found.div_ceil(page_size),
        previous_page_link,
        next_page_link,
    })
}
