use super::PluginState;
use crate::facts::hosting::{self, RepoClient};
use crate::facts::plugins::{self, HubResponse};
use serde::Serialize;

const LOG_TARGET: &str = "      page";

/// Message shown when the hub has no usable record for a plugin
pub const EMPTY_PLUGIN_MESSAGE: &str = "Empty plugin data";

/// Outcome of loading a plugin page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PluginPage {
    /// The plugin record was found and its repository lookup completed
    Loaded(Box<PluginState>),

    /// The page cannot be shown; the message describes why
    Error(String),
}

impl PluginPage {
    #[must_use]
    pub fn state(&self) -> Option<&PluginState> {
        match self {
            Self::Loaded(state) => Some(state),
            Self::Error(_) => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Loaded(_) => None,
            Self::Error(message) => Some(message),
        }
    }
}

/// Builds the data for plugin pages from the hub API and repository hosting.
#[derive(Debug)]
pub struct PageLoader<C> {
    hub: plugins::Provider,
    hosting: hosting::Provider<C>,
}

impl<C: RepoClient> PageLoader<C> {
    #[must_use]
    pub const fn new(hub: plugins::Provider, hosting: hosting::Provider<C>) -> Self {
        Self { hub, hosting }
    }

    #[must_use]
    pub const fn hosting(&self) -> &hosting::Provider<C> {
        &self.hosting
    }

    /// Load everything the page for plugin `name` needs.
    ///
    /// The repository lookup only runs once the plugin record is known, since its URL comes
    /// from the record. A repository failure does not fail the page; it is kept in the state.
    pub async fn load(&self, name: &str) -> PluginPage {
        let plugin = match self.hub.get_plugin(name).await {
            Ok(HubResponse::Plugin(plugin)) => plugin,

            Ok(HubResponse::ServerError(e)) => {
                log::warn!(target: LOG_TARGET, "Hub API reported an error for plugin '{name}': {}", e.error_message().unwrap_or_default());
                return PluginPage::Error(e.to_pretty_json());
            }

            Ok(HubResponse::Empty) => {
                log::warn!(target: LOG_TARGET, "Hub API returned no data for plugin '{name}'");
                return PluginPage::Error(EMPTY_PLUGIN_MESSAGE.to_string());
            }

            Err(e) => {
                log::warn!(target: LOG_TARGET, "Could not load plugin '{name}': {e:#}");
                return PluginPage::Error(e.to_string());
            }
        };

        let repo = self
            .hosting
            .get_repo_stats(plugin.code_repository.as_deref().unwrap_or_default())
            .await;

        PluginPage::Loaded(Box::new(PluginState::new(Some(*plugin), repo)))
    }
}
