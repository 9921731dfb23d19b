use std::time::Duration;

use canto_domain::constants::DEFAULT_HTTP_TIMEOUT_SECS;
use canto_domain::CantoError;
use reqwest::blocking::{Client as ReqwestClient, RequestBuilder, Response};
use reqwest::redirect::Policy;
use reqwest::Method;
use tracing::debug;

use crate::errors::InfraError;

/// Blocking HTTP client with a fixed timeout.
///
/// Requests are sent exactly once; callers decide what a failed status means.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder.
    ///
    /// Only the host and path are logged; query strings may carry secrets.
    pub fn send(&self, builder: RequestBuilder) -> Result<Response, CantoError> {
        let request = builder.build().map_err(|err| CantoError::from(InfraError::from(err)))?;

        let method = request.method().clone();
        let host = request.url().host_str().unwrap_or_default().to_string();
        let path = request.url().path().to_string();
        debug!(%method, %host, %path, "sending HTTP request");

        match self.client.execute(request) {
            Ok(response) => {
                let status = response.status();
                debug!(%method, %host, %path, %status, "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %host, %path, error = %err, "HTTP request failed");
                Err(InfraError::from(err).into())
            }
        }
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
    follow_redirects: bool,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            user_agent: None,
            follow_redirects: true,
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// When disabled, 3xx responses are returned to the caller as-is.
    pub fn follow_redirects(mut self, enabled: bool) -> Self {
        self.follow_redirects = enabled;
        self
    }

    pub fn build(self) -> Result<HttpClient, CantoError> {
        let policy = if self.follow_redirects { Policy::default() } else { Policy::none() };
        let mut builder =
            ReqwestClient::builder().timeout(self.timeout).redirect(policy).no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder.build().map_err(|err| CantoError::from(InfraError::from(err)))?;

        Ok(HttpClient { client })
    }
}
