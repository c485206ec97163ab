//! Data collection for plugin pages
//!
//! This module gathers the two external inputs a plugin page needs: the raw plugin record
//! served by the hub API, and repository statistics from the plugin's source hosting service.
//!
//! # Implementation Model
//!
//! - [`plugins::Provider`] fetches plugin records from the hub API.
//! - [`hosting::Provider`] resolves a source-code URL to a [`RepoSpec`] and, for supported
//!   hosts, queries the hosting API for [`hosting::RepoStats`].
//!
//! Repository lookups are wrapped in a [`ProviderResult`], which distinguishes found data,
//! a silent lack of data (no URL, unrecognized URL, unsupported host), and a classified
//! [`RepoFetchError`] for provider or network failures.

pub mod hosting;
pub mod plugins;
mod provider_result;
mod repo_fetch_error;
mod repo_spec;

pub use provider_result::ProviderResult;
pub use repo_fetch_error::RepoFetchError;
pub use repo_spec::{HostKind, RepoSpec};
