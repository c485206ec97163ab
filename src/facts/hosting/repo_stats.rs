use super::Repository;
use serde::{Deserialize, Serialize};

/// Repository statistics shown alongside plugin metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoStats {
    pub stars: u64,
    pub forks: u64,

    /// GitHub's open issue count, which includes open pull requests.
    #[serde(rename = "issuesAndPRs")]
    pub issues_and_prs: u64,
}

impl From<&Repository> for RepoStats {
    fn from(repo: &Repository) -> Self {
        Self {
            stars: u64::from(repo.stargazers_count.unwrap_or(0)),
            forks: u64::from(repo.forks_count.unwrap_or(0)),
            issues_and_prs: u64::from(repo.open_issues_count.unwrap_or(0)),
        }
    }
}
