//! Listing and pagination wrappers over Canto JSON responses

use std::ops::Index;

use canto_domain::{CantoError, Result};
use serde::Serialize;
use serde_json::Value;

use super::schema::{RawList, RawPage};

/// Ordered listing with the total number of matches across all pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListResult {
    results: Vec<Value>,
    found: u64,
}

impl ListResult {
    pub fn new(results: Vec<Value>, found: u64) -> Self {
        Self { results, found }
    }

    /// Build from a decoded body; a missing `found` counts as zero.
    pub fn from_raw(raw: RawList) -> Self {
        Self::new(raw.results.unwrap_or_default(), raw.found.unwrap_or(0))
    }

    /// Total number of available results, across all pages.
    pub fn found(&self) -> u64 {
        self.found
    }

    pub fn results(&self) -> &[Value] {
        &self.results
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.results.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.results.iter()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn into_results(self) -> Vec<Value> {
        self.results
    }
}

impl Index<usize> for ListResult {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.results[index]
    }
}

impl<'a> IntoIterator for &'a ListResult {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

impl IntoIterator for ListResult {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

/// One page of an album or search listing.
///
/// `page_size` is always positive; construction rejects a missing or zero
/// `limit`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginatedResult {
    #[serde(flatten)]
    list: ListResult,
    page_size: u64,
    start: u64,
}

impl PaginatedResult {
    pub fn new(results: Vec<Value>, found: u64, page_size: u64, start: u64) -> Result<Self> {
        if page_size == 0 {
            return Err(CantoError::unexpected(200, "page limit must be greater than 0"));
        }
        Ok(Self { list: ListResult::new(results, found), page_size, start })
    }

    /// Build from a decoded body; a missing `start` counts as zero.
    pub fn from_raw(raw: RawPage) -> Result<Self> {
        let page_size = raw
            .limit
            .ok_or_else(|| CantoError::unexpected(200, "paginated response is missing `limit`"))?;
        Self::new(
            raw.results.unwrap_or_default(),
            raw.found.unwrap_or(0),
            page_size,
            raw.start.unwrap_or(0),
        )
    }

    /// Build from an already parsed JSON body.
    pub fn from_json(value: Value) -> Result<Self> {
        let raw: RawPage = serde_json::from_value(value)
            .map_err(|err| CantoError::unexpected(200, format!("invalid page body: {err}")))?;
        Self::from_raw(raw)
    }

    pub fn found(&self) -> u64 {
        self.list.found()
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn num_pages(&self) -> u64 {
        self.found().div_ceil(self.page_size)
    }

    /// 1-based page number derived from the start offset.
    pub fn page(&self) -> u64 {
        (self.start / self.page_size).saturating_add(1)
    }

    pub fn next_page(&self) -> Option<u64> {
        let page = self.page();
        let shown = page.saturating_mul(self.page_size).saturating_add(self.list.len() as u64);
        (self.found() > shown).then(|| page.saturating_add(1))
    }

    pub fn previous_page(&self) -> Option<u64> {
        let page = self.page();
        (page > 1).then(|| page - 1)
    }

    pub fn results(&self) -> &[Value] {
        self.list.results()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.list.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.list.iter()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn into_results(self) -> Vec<Value> {
        self.list.into_results()
    }
}

impl Index<usize> for PaginatedResult {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.list[index]
    }
}

impl<'a> IntoIterator for &'a PaginatedResult {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn items(n: usize) -> Vec<Value> {
        (0..n).map(|i| json!({ "id": i.to_string() })).collect()
    }

    fn page(found: u64, limit: u64, start: u64, len: usize) -> PaginatedResult {
        PaginatedResult::new(items(len), found, limit, start).unwrap()
    }

    #[test]
    fn num_pages_rounds_up() {
        assert_eq!(page(0, 10, 0, 0).num_pages(), 0);
        assert_eq!(page(10, 10, 0, 10).num_pages(), 1);
        assert_eq!(page(11, 10, 0, 10).num_pages(), 2);
        assert_eq!(page(35, 10, 0, 10).num_pages(), 4);
    }

    #[test]
    fn page_is_derived_from_start_offset() {
        assert_eq!(page(100, 10, 0, 10).page(), 1);
        assert_eq!(page(100, 10, 25, 10).page(), 3);
    }

    #[test]
    fn last_page_has_previous_but_no_next() {
        let last = page(35, 10, 20, 10);

        assert_eq!(last.page(), 3);
        assert_eq!(last.next_page(), None);
        assert_eq!(last.previous_page(), Some(2));
    }

    #[test]
    fn single_short_page_has_no_neighbours() {
        let only = page(5, 10, 0, 5);

        assert_eq!(only.next_page(), None);
        assert_eq!(only.previous_page(), None);
    }

    #[test]
    fn first_of_many_pages_has_next() {
        let first = page(100, 10, 0, 10);
        assert_eq!(first.next_page(), Some(2));
    }

    #[test]
    fn empty_results_never_panic() {
        let empty = page(0, 10, 0, 0);

        assert!(empty.is_empty());
        assert_eq!(empty.get(0), None);
        assert_eq!(empty.next_page(), None);
        assert_eq!(empty.iter().count(), 0);
    }

    #[test]
    fn offsets_near_the_numeric_limit_saturate() {
        let tail = PaginatedResult::new(vec![], 0, 1, u64::MAX).unwrap();
        assert_eq!(tail.page(), u64::MAX);
        assert_eq!(tail.next_page(), None);
        assert_eq!(tail.previous_page(), Some(u64::MAX - 1));

        let huge = PaginatedResult::new(vec![], u64::MAX, 10, u64::MAX - 5).unwrap();
        assert_eq!(huge.next_page(), None);
    }

    #[test]
    fn from_json_defaults_found_and_start() {
        let parsed = PaginatedResult::from_json(json!({
            "results": [{ "id": "a" }, { "id": "b" }],
            "limit": 10
        }))
        .unwrap();

        assert_eq!(parsed.found(), 0);
        assert_eq!(parsed.page(), 1);
        assert_eq!(parsed[1]["id"], "b");
        let ids: Vec<_> = parsed.iter().map(|v| v["id"].as_str().unwrap()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn missing_or_zero_limit_is_rejected() {
        let missing = PaginatedResult::from_json(json!({ "results": [], "found": 3 }));
        let zero = PaginatedResult::from_json(json!({ "results": [], "found": 3, "limit": 0 }));

        assert!(matches!(missing, Err(CantoError::UnexpectedResponse { .. })));
        assert!(matches!(zero, Err(CantoError::UnexpectedResponse { .. })));
    }

    #[test]
    fn list_result_defaults_and_indexing() {
        let list = ListResult::from_raw(RawList { results: Some(items(2)), found: None });

        assert_eq!(list.found(), 0);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["id"], "0");
        assert_eq!((&list).into_iter().count(), 2);
    }
}
