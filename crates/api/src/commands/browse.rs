//! Read-only browsing screens: tree, album, search and library.

use canto_domain::constants::DEFAULT_PAGE_SIZE;
use canto_domain::Result;
use canto_infra::{CantoClient, ListResult, SortOptions};
use serde::Serialize;

use super::{execute_logged, parse_page_param, ResultsPage};
use crate::AppContext;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeView {
    pub title: &'static str,
    pub results: ListResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlbumView {
    pub title: &'static str,
    pub album_id: String,
    pub results: ResultsPage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchView {
    pub title: &'static str,
    pub query: String,
    /// `None` when no query was given.
    pub results: Option<ResultsPage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibraryView {
    pub title: &'static str,
    pub tree_items: ListResult,
    pub album_id: Option<String>,
    pub album: Option<ResultsPage>,
}

pub fn tree(ctx: &AppContext) -> Result<TreeView> {
    execute_logged("canto::tree", || {
        let results = ctx.canto.get_canto_client()?.get_tree()?;
        Ok(TreeView { title: "Canto tree", results })
    })
}

/// One page of an album; `page` is the raw query parameter.
pub fn album(ctx: &AppContext, album_id: &str, page: Option<&str>) -> Result<AlbumView> {
    execute_logged("canto::album", || {
        let client = ctx.canto.get_canto_client()?;
        Ok(AlbumView {
            title: "Canto album",
            album_id: album_id.to_string(),
            results: album_page(ctx, &client, album_id, page)?,
        })
    })
}

/// Keyword search; nothing is requested for an empty query.
pub fn search(ctx: &AppContext, query: &str, page: Option<&str>) -> Result<SearchView> {
    execute_logged("canto::search", || {
        let results = if query.is_empty() {
            None
        } else {
            let page = ctx.canto.get_canto_client()?.get_search_results(
                query,
                parse_page_param(page),
                DEFAULT_PAGE_SIZE,
                &ctx.config.filter_schemes,
                &SortOptions::default(),
            )?;
            Some(page.into())
        };

        Ok(SearchView { title: "Canto search", query: query.to_string(), results })
    })
}

/// The folder tree, plus one album page when `album_id` is given.
pub fn library(
    ctx: &AppContext,
    album_id: Option<&str>,
    page: Option<&str>,
) -> Result<LibraryView> {
    execute_logged("canto::library", || {
        let client = ctx.canto.get_canto_client()?;
        let tree_items = client.get_tree()?;
        let album_id = album_id.filter(|id| !id.is_empty());
        let album = album_id.map(|id| album_page(ctx, &client, id, page)).transpose()?;

        Ok(LibraryView {
            title: "Canto library",
            tree_items,
            album_id: album_id.map(str::to_owned),
            album,
        })
    })
}

fn album_page(
    ctx: &AppContext,
    client: &CantoClient,
    album_id: &str,
    page: Option<&str>,
) -> Result<ResultsPage> {
    let page = client.get_album(
        album_id,
        parse_page_param(page),
        DEFAULT_PAGE_SIZE,
        &ctx.config.filter_schemes,
        &SortOptions::default(),
    )?;
    Ok(page.into())
}
