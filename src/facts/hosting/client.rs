//! GitHub API client
//!
//! Minimal GitHub API client for fetching repository metadata, authenticated as an OAuth app.

use crate::Result;
use crate::facts::RepoFetchError;
use core::fmt::{Debug, Formatter};
use core::time::Duration;
use ohno::IntoAppError;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Deserialize;
use url::Url;

const LOG_TARGET: &str = "    github";

/// Environment variable holding the OAuth app client id
pub const CLIENT_ID_ENV: &str = "GITHUB_CLIENT_ID";

/// Environment variable holding the OAuth app client secret
pub const CLIENT_SECRET_ENV: &str = "GITHUB_CLIENT_SECRET";

/// Minimal GitHub repository info with only the fields we need
#[derive(Debug, Clone, Default, Deserialize)]
#[expect(clippy::struct_field_names, reason = "field names match GitHub API exactly")]
pub struct Repository {
    pub stargazers_count: Option<u32>,
    pub forks_count: Option<u32>,
    pub open_issues_count: Option<u32>,
}

/// Something that can look up repository metadata.
///
/// The production implementation is [`GitHubClient`]; tests substitute their own.
pub trait RepoClient: Send + Sync {
    /// Read repository metadata for `owner/repo`.
    ///
    /// Failures are classified into a [`RepoFetchError`]; a response is only a success when
    /// the provider answers with `200 OK`.
    fn get_repository(&self, owner: &str, repo: &str) -> impl Future<Output = Result<Repository, RepoFetchError>> + Send;
}

/// OAuth app credentials used to authenticate against the GitHub API.
#[derive(Clone, PartialEq, Eq)]
pub struct GitHubCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl GitHubCredentials {
    #[must_use]
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Build credentials from an optional id/secret pair; both must be present and non-empty.
    #[must_use]
    pub fn from_parts(client_id: Option<&str>, client_secret: Option<&str>) -> Option<Self> {
        match (client_id, client_secret) {
            (Some(id), Some(secret)) if !id.is_empty() && !secret.is_empty() => Some(Self::new(id, secret)),
            _ => None,
        }
    }

    /// Read credentials from `GITHUB_CLIENT_ID` and `GITHUB_CLIENT_SECRET`.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let client_id = std::env::var(CLIENT_ID_ENV).ok();
        let client_secret = std::env::var(CLIENT_SECRET_ENV).ok();
        Self::from_parts(client_id.as_deref(), client_secret.as_deref())
    }
}

impl Debug for GitHubCredentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GitHubCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// GitHub REST API client
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    base_url: Url,
    credentials: Option<GitHubCredentials>,
}

impl GitHubClient {
    /// Create a new GitHub API client with optional OAuth app credentials and base URL
    pub fn new(credentials: Option<GitHubCredentials>, base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = Url::parse(base_url).into_app_err_with(|| format!("invalid GitHub API URL '{base_url}'"))?;

        let mut headers = HeaderMap::new();
        let _ = headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let mut client_builder = reqwest::Client::builder().user_agent("hub-facts").default_headers(headers);
        if let Some(timeout) = timeout {
            client_builder = client_builder.timeout(timeout);
        }

        if credentials.is_none() {
            log::debug!(target: LOG_TARGET, "No GitHub credentials configured, using unauthenticated requests");
        }

        Ok(Self {
            client: client_builder.build()?,
            base_url,
            credentials,
        })
    }

    /// Get the base URL for this client
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    fn repo_url(&self, owner: &str, repo: &str) -> Result<Url, RepoFetchError> {
        let mut url = self.base_url.clone();
        let _ = url
            .path_segments_mut()
            .map_err(|()| RepoFetchError::request())?
            .pop_if_empty()
            .extend(["repos", owner, repo]);
        Ok(url)
    }
}

impl RepoClient for GitHubClient {
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<Repository, RepoFetchError> {
        let url = self.repo_url(owner, repo)?;

        let mut request = self.client.get(url.as_str());
        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(&credentials.client_id, Some(&credentials.client_secret));
        }

        let resp = request.send().await.map_err(|e| {
            log::debug!(target: LOG_TARGET, "Request to '{url}' failed: {e:#}");
            e.status().map_or_else(RepoFetchError::request, |status| RepoFetchError::http(status.as_u16()))
        })?;

        let status = resp.status();
        if status != StatusCode::OK {
            log::debug!(target: LOG_TARGET, "Request to '{url}' returned status {status}");
            return Err(RepoFetchError::http(status.as_u16()));
        }

        resp.json::<Repository>().await.map_err(|e| {
            log::debug!(target: LOG_TARGET, "Malformed repository response from '{url}': {e:#}");
            RepoFetchError::request()
        })
    }
}
