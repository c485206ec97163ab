use super::client::{GitHubClient, GitHubCredentials, RepoClient};
use super::RepoStats;
use crate::Result;
use crate::facts::{HostKind, ProviderResult, RepoFetchError, RepoSpec};
use core::fmt::{Debug, Formatter};
use core::time::Duration;
use tokio::sync::OnceCell;

const LOG_TARGET: &str = "   hosting";

type ClientFactory<C> = Box<dyn Fn() -> Result<C> + Send + Sync>;

/// Fetches repository statistics for plugin source URLs.
///
/// The API client is built lazily by the injected factory the first time a supported
/// repository is looked up, and then reused for the lifetime of the provider. Concurrent
/// first lookups wait on a single construction.
pub struct Provider<C> {
    client: OnceCell<C>,
    factory: ClientFactory<C>,
}

impl<C: RepoClient> Provider<C> {
    /// Create a provider that builds its client with `factory` on first use.
    pub fn new(factory: impl Fn() -> Result<C> + Send + Sync + 'static) -> Self {
        Self {
            client: OnceCell::new(),
            factory: Box::new(factory),
        }
    }

    /// Whether the API client has been constructed yet.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.client.initialized()
    }

    /// Get repository statistics for a plugin's source-code URL.
    ///
    /// An empty or unrecognized URL, or a hosting service we don't support, yields
    /// [`ProviderResult::NoData`]. Provider and network failures yield
    /// [`ProviderResult::Error`]; nothing else escapes.
    pub async fn get_repo_stats(&self, url: &str) -> ProviderResult<RepoStats> {
        let Some(repo_spec) = RepoSpec::parse(url) else {
            if !url.is_empty() {
                log::debug!(target: LOG_TARGET, "'{url}' is not a recognized repository URL");
            }
            return ProviderResult::NoData;
        };

        match repo_spec.host_kind() {
            Some(HostKind::GitHub) => self.fetch_from_github(&repo_spec).await,

            // TODO: GitLab needs its own client (GET /projects/:id with star_count/forks_count)
            Some(HostKind::GitLab) => {
                log::debug!(target: LOG_TARGET, "Skipping repository '{repo_spec}': GitLab is not supported yet");
                ProviderResult::NoData
            }

            None => {
                log::debug!(target: LOG_TARGET, "Skipping repository '{repo_spec}': unsupported host '{}'", repo_spec.host());
                ProviderResult::NoData
            }
        }
    }

    async fn fetch_from_github(&self, repo_spec: &RepoSpec) -> ProviderResult<RepoStats> {
        let client = match self.client().await {
            Ok(client) => client,
            Err(e) => {
                log::warn!(target: LOG_TARGET, "Could not create the GitHub API client: {e:#}");
                return ProviderResult::Error(RepoFetchError::client_init());
            }
        };

        log::info!(target: LOG_TARGET, "Querying GitHub for repository '{repo_spec}'");

        match client.get_repository(repo_spec.owner(), repo_spec.repo()).await {
            Ok(repo) => {
                let stats = RepoStats::from(&repo);
                log::debug!(target: LOG_TARGET, "Completed GitHub API request for repository '{repo_spec}'");
                ProviderResult::Found(stats)
            }
            Err(e) => {
                log::warn!(target: LOG_TARGET, "Could not fetch repository '{repo_spec}': {} ({})", e.name, e.status);
                ProviderResult::Error(e)
            }
        }
    }

    async fn client(&self) -> Result<&C> {
        self.client
            .get_or_try_init(|| async {
                log::debug!(target: LOG_TARGET, "Creating repository API client");
                (self.factory)()
            })
            .await
    }
}

impl Provider<GitHubClient> {
    /// Create a provider backed by the GitHub REST API.
    #[must_use]
    pub fn github(credentials: Option<GitHubCredentials>, base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let base_url = base_url.into();
        Self::new(move || GitHubClient::new(credentials.clone(), &base_url, timeout))
    }

    /// Create a provider backed by the GitHub REST API, reading the OAuth app credentials
    /// from the environment when the client is first needed.
    #[must_use]
    pub fn github_from_env(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let base_url = base_url.into();
        Self::new(move || GitHubClient::new(GitHubCredentials::from_env(), &base_url, timeout))
    }
}

impl<C> Debug for Provider<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Provider")
            .field("initialized", &self.client.initialized())
            .finish_non_exhaustive()
    }
}
