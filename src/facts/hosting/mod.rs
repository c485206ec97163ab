mod client;
mod provider;
mod repo_stats;

pub use client::{CLIENT_ID_ENV, CLIENT_SECRET_ENV, GitHubClient, GitHubCredentials, RepoClient, Repository};
pub use provider::Provider;
pub use repo_stats::RepoStats;
