//! Canto REST API client
//!
//! Blocking client for the OAuth token endpoint and the authenticated listing,
//! image and binary endpoints. Every call is a single attempt; failures are
//! returned to the caller.

use canto_common::{Clock, SharedClock};
use canto_core::CantoOAuthApi;
use canto_domain::constants::{
    ALBUM_PATH, DEFAULT_SORT_BY, DEFAULT_SORT_DIRECTION, IMAGE_PATH, SEARCH_PATH,
    TREE_PATH, TREE_SORT_BY, TREE_SORT_DIRECTION,
};
use canto_domain::{CantoConfig, CantoError, Result, TokenGrant};
use chrono::TimeDelta;
use reqwest::blocking::Response;
use reqwest::header::{AUTHORIZATION, LOCATION};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};

use super::results::{ListResult, PaginatedResult};
use super::schema::{decode, ImageDetail, OAuthErrorBody, RawList, RawPage, TokenResponse};
use crate::http::HttpClient;

/// Sort order for album and search listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOptions {
    pub sort_by: String,
    pub sort_direction: String,
}

impl SortOptions {
    pub fn new(sort_by: impl Into<String>, sort_direction: impl Into<String>) -> Self {
        Self { sort_by: sort_by.into(), sort_direction: sort_direction.into() }
    }
}

impl Default for SortOptions {
    /// Newest first.
    fn default() -> Self {
        Self::new(DEFAULT_SORT_BY, DEFAULT_SORT_DIRECTION)
    }
}

/// Client for one Canto tenant
///
/// Cheap to clone; clones share the underlying connection pools.
#[derive(Clone)]
pub struct CantoClient {
    config: CantoConfig,
    access_token: Option<String>,
    http: HttpClient,
    no_redirect: HttpClient,
    clock: SharedClock,
}

impl CantoClient {
    /// Create a client for `config`, authenticated when `access_token` is
    /// given.
    ///
    /// # Errors
    /// Returns `CantoError::Config` if the HTTP transport cannot be built.
    pub fn new(
        config: CantoConfig,
        access_token: Option<String>,
        clock: SharedClock,
    ) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(config.http_timeout())
            .user_agent(config.app_id.clone())
            .build()?;
        let no_redirect = HttpClient::builder()
            .timeout(config.http_timeout())
            .user_agent(config.app_id.clone())
            .follow_redirects(false)
            .build()?;

        Ok(Self { config, access_token, http, no_redirect, clock })
    }

    /// Same client with a different access token.
    pub fn with_access_token(&self, access_token: Option<String>) -> Self {
        Self { access_token, ..self.clone() }
    }

    pub fn config(&self) -> &CantoConfig {
        &self.config
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.as_deref().is_some_and(|token| !token.is_empty())
    }

    /// Exchange an authorization code for a token grant.
    ///
    /// # Errors
    /// `CantoError::OAuthExchange` when the token endpoint answers non-2xx.
    #[instrument(skip(self, code))]
    pub fn create_access_token(&self, code: &str) -> Result<TokenGrant> {
        self.request_token(&[
            ("code", code),
            ("app_secret", self.config.app_secret.as_str()),
            ("grant_type", "authorization_code"),
            ("app_id", self.config.app_id.as_str()),
        ])
    }

    /// Obtain a new token grant from a refresh token.
    #[instrument(skip(self, refresh_token))]
    pub fn refresh_access_token(&self, refresh_token: &str) -> Result<TokenGrant> {
        self.request_token(&[
            ("app_secret", self.config.app_secret.as_str()),
            ("refresh_token", refresh_token),
            ("grant_type", "refresh_token"),
            ("app_id", self.config.app_id.as_str()),
        ])
    }

    /// Authorize endpoint URL with `response_type`, `app_id`, `redirect_uri`
    /// and `state` appended.
    pub fn get_oauth_authorize_url(&self, state: &str, redirect_uri: &str) -> String {
        let separator = if self.config.oauth_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}response_type=code&app_id={}&redirect_uri={}&state={}",
            self.config.oauth_url,
            separator,
            urlencoding::encode(&self.config.app_id),
            urlencoding::encode(redirect_uri),
            urlencoding::encode(state),
        )
    }

    /// One page of an album.
    #[instrument(skip(self, sort))]
    pub fn get_album(
        &self,
        album_id: &str,
        page: u64,
        page_size: u64,
        scheme: &str,
        sort: &SortOptions,
    ) -> Result<PaginatedResult> {
        let start = page_offset(page, page_size)?;
        let (page_size, start) = (page_size.to_string(), start.to_string());
        let path = format!("{ALBUM_PATH}{album_id}");

        let raw: RawPage = self.get_json(
            &path,
            &[
                ("page_size", page_size.as_str()),
                ("start", start.as_str()),
                ("scheme", scheme),
                ("sortBy", sort.sort_by.as_str()),
                ("sortDirection", sort.sort_direction.as_str()),
            ],
        )?;
        PaginatedResult::from_raw(raw)
    }

    /// One page of keyword search results.
    #[instrument(skip(self, sort))]
    pub fn get_search_results(
        &self,
        query: &str,
        page: u64,
        page_size: u64,
        scheme: &str,
        sort: &SortOptions,
    ) -> Result<PaginatedResult> {
        let start = page_offset(page, page_size)?;
        let (page_size, start) = (page_size.to_string(), start.to_string());

        let raw: RawPage = self.get_json(
            SEARCH_PATH,
            &[
                ("page_size", page_size.as_str()),
                ("start", start.as_str()),
                ("keyword", query),
                ("scheme", scheme),
                ("sortBy", sort.sort_by.as_str()),
                ("sortDirection", sort.sort_direction.as_str()),
            ],
        )?;
        PaginatedResult::from_raw(raw)
    }

    #[instrument(skip(self))]
    pub fn get_image(&self, image_id: &str) -> Result<ImageDetail> {
        self.get_json(&format!("{IMAGE_PATH}{image_id}"), &[])
    }

    /// Download a binary, following redirects.
    ///
    /// # Errors
    /// `CantoError::Precondition` if `url` is not under the tenant's binary
    /// path; no request is made in that case.
    #[instrument(skip(self))]
    pub fn get_binary(&self, url: &str) -> Result<Vec<u8>> {
        self.ensure_binary_url(url)?;
        let response = self.send_authenticated(&self.http, url, &[])?;
        let response = Self::require_success(response)?;
        let bytes = response.bytes().map_err(|err| {
            CantoError::Network(format!("failed to read binary body: {}", err.without_url()))
        })?;
        debug!(size = bytes.len(), "Downloaded binary");
        Ok(bytes.to_vec())
    }

    /// Resolve a binary URL to the public location it redirects to.
    ///
    /// # Errors
    /// - `CantoError::Precondition` if `url` is not under the binary path
    /// - `CantoError::UnexpectedResponse` unless the answer is a 302 with a
    ///   `Location` header
    #[instrument(skip(self))]
    pub fn get_public_url_for_binary(&self, url: &str) -> Result<String> {
        self.ensure_binary_url(url)?;
        let response = self.send_authenticated(&self.no_redirect, url, &[])?;

        let status = response.status();
        if status != StatusCode::FOUND {
            let body = response.text().unwrap_or_default();
            return Err(CantoError::unexpected(status.as_u16(), body));
        }

        response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .ok_or_else(|| CantoError::unexpected(status.as_u16(), "redirect without Location"))
    }

    /// Album and folder hierarchy, sorted by name.
    #[instrument(skip(self))]
    pub fn get_tree(&self) -> Result<ListResult> {
        let raw: RawList = self.get_json(
            TREE_PATH,
            &[("sortBy", TREE_SORT_BY), ("sortDirection", TREE_SORT_DIRECTION)],
        )?;
        Ok(ListResult::from_raw(raw))
    }

    fn request_token(&self, params: &[(&str, &str)]) -> Result<TokenGrant> {
        let request_time = self.clock.now();
        let request =
            self.http.request(Method::POST, self.config.oauth_token_url.as_str()).query(params);
        let response = self.http.send(request)?;

        let status = response.status();
        let body = response.text().map_err(|err| {
            CantoError::Network(format!("failed to read token response: {}", err.without_url()))
        })?;

        if !status.is_success() {
            let failure = OAuthErrorBody::from_body(&body);
            error!(
                status = status.as_u16(),
                error_code = %failure.error,
                error_description = %failure.error_description,
                "An error occurred getting an access token"
            );
            return Err(CantoError::OAuthExchange {
                code: failure.error,
                description: failure.error_description,
            });
        }

        let token: TokenResponse = decode(status.as_u16(), &body)?;
        let valid_until = TimeDelta::try_seconds(token.expires_in.seconds()?)
            .and_then(|lifetime| request_time.checked_add_signed(lifetime))
            .ok_or_else(|| CantoError::unexpected(status.as_u16(), "expiresIn out of range"))?;

        Ok(TokenGrant {
            access_token: token.access_token,
            valid_until,
            refresh_token: token.refresh_token,
        })
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let response = self.send_authenticated(&self.http, path, query)?;
        let response = Self::require_success(response)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(|err| {
            CantoError::Network(format!("failed to read response body: {}", err.without_url()))
        })?;
        decode(status, &body)
    }

    fn send_authenticated(
        &self,
        http: &HttpClient,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Response> {
        let token = self
            .access_token
            .as_deref()
            .filter(|token| !token.is_empty())
            .ok_or(CantoError::AuthenticationRequired)?;

        let url = if path.starts_with(&self.config.api_url) {
            path.to_string()
        } else {
            self.config.endpoint(path)
        };

        let mut request = http
            .request(Method::GET, url.as_str())
            .header(AUTHORIZATION, format!("Bearer {token}"));
        if !query.is_empty() {
            request = request.query(query);
        }
        http.send(request)
    }

    fn require_success(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        Err(CantoError::unexpected(status.as_u16(), body))
    }

    fn ensure_binary_url(&self, url: &str) -> Result<()> {
        let prefix = self.config.binary_prefix();
        if url.starts_with(&prefix) {
            Ok(())
        } else {
            Err(CantoError::Precondition(format!("binary URL must start with {prefix}")))
        }
    }
}

/// Offset of the first item on 1-based `page`; pages 0 and 1 both start at 0.
fn page_offset(page: u64, page_size: u64) -> Result<u64> {
    page.saturating_sub(1).checked_mul(page_size).ok_or_else(|| {
        CantoError::Precondition(format!("page {page} is out of range for page size {page_size}"))
    })
}

impl CantoOAuthApi for CantoClient {
    fn create_access_token(&self, code: &str) -> Result<TokenGrant> {
        CantoClient::create_access_token(self, code)
    }

    fn refresh_access_token(&self, refresh_token: &str) -> Result<TokenGrant> {
        CantoClient::refresh_access_token(self, refresh_token)
    }

    fn get_oauth_authorize_url(&self, state: &str, redirect_uri: &str) -> String {
        CantoClient::get_oauth_authorize_url(self, state, redirect_uri)
    }
}

impl std::fmt::Debug for CantoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CantoClient")
            .field("api_url", &self.config.api_url)
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use canto_common::SystemClock;

    use super::*;

    fn client(token: Option<&str>) -> CantoClient {
        let config = CantoConfig::new(
            "https://tenant.canto.com",
            "my app",
            "secret",
            "https://oauth.canto.com/oauth/api/oauth2/authorize",
            "https://oauth.canto.com/oauth/api/oauth2/token",
        );
        CantoClient::new(config, token.map(str::to_owned), SystemClock::shared()).unwrap()
    }

    #[test]
    fn authorize_url_encodes_parameters() {
        let url =
            client(None).get_oauth_authorize_url("st/ate", "https://app.example/settings?x=1");

        assert_eq!(
            url,
            "https://oauth.canto.com/oauth/api/oauth2/authorize?response_type=code&app_id=my%20app\
             &redirect_uri=https%3A%2F%2Fapp.example%2Fsettings%3Fx%3D1&state=st%2Fate"
        );
    }

    #[test]
    fn page_offset_is_checked() {
        assert_eq!(page_offset(0, 10).unwrap(), 0);
        assert_eq!(page_offset(1, 10).unwrap(), 0);
        assert_eq!(page_offset(3, 25).unwrap(), 50);
        assert!(matches!(page_offset(u64::MAX, 10), Err(CantoError::Precondition(_))));
    }

    #[test]
    fn default_sort_is_newest_first() {
        assert_eq!(SortOptions::default(), SortOptions::new("time", "descending"));
    }

    #[test]
    fn empty_token_is_not_authenticated() {
        assert!(!client(None).is_authenticated());
        assert!(!client(Some("")).is_authenticated());
        assert!(client(Some("token")).is_authenticated());
        assert!(!format!("{:?}", client(Some("token"))).contains("token\""));
    }
}
