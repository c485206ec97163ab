use crate::facts::hosting::RepoStats;
use crate::facts::{ProviderResult, RepoFetchError};
use crate::plugin::{PluginData, PluginMetadata};
use serde::Serialize;

/// Everything a plugin page renders from. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginState {
    plugin: Option<PluginData>,
    repo: RepoStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    repo_fetch_error: Option<RepoFetchError>,
}

impl PluginState {
    /// Combine a plugin record with the outcome of its repository lookup.
    ///
    /// Repository stats default to zero when there is no data or the lookup failed.
    #[must_use]
    pub fn new(plugin: Option<PluginData>, repo: ProviderResult<RepoStats>) -> Self {
        let (repo, repo_fetch_error) = repo.into_parts();

        Self {
            plugin,
            repo: repo.unwrap_or_default(),
            repo_fetch_error,
        }
    }

    #[must_use]
    pub const fn plugin(&self) -> Option<&PluginData> {
        self.plugin.as_ref()
    }

    #[must_use]
    pub const fn repo(&self) -> &RepoStats {
        &self.repo
    }

    #[must_use]
    pub const fn repo_fetch_error(&self) -> Option<&RepoFetchError> {
        self.repo_fetch_error.as_ref()
    }

    /// The display-ready metadata view of the plugin.
    #[must_use]
    pub fn metadata(&self) -> PluginMetadata {
        PluginMetadata::from_plugin(self.plugin.as_ref())
    }
}
