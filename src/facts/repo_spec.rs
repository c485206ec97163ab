use core::fmt::{Display, Formatter};
use core::str::FromStr;
use regex::Regex;
use std::sync::{Arc, LazyLock};
use strum::{Display as StrumDisplay, EnumString};
use url::Url;

/// Recognizes `git@host:owner/repo(.git)` and `https://host/owner/repo(.git)` forms.
/// Anything after the repository name (e.g. `/tree/main`, `?tab=readme`, `#readme`) is ignored.
static REPO_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:git@|https://)(?P<domain>[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+)[/:](?P<owner>[^/:\s?#]+)/(?P<repo>[^/\s?#]+)")
        .expect("invalid regex")
});

/// Hosting services a repository URL can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum HostKind {
    GitHub,
    GitLab,
}

/// A source repository, as extracted from a plugin's `code_repository` URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSpec {
    url: Arc<Url>,
    host: Arc<str>,
    owner: Arc<str>,
    repo: Arc<str>,
}

impl RepoSpec {
    /// Parse a repository URL.
    ///
    /// Returns `None` when the string is not a recognizable repository URL. That is not an
    /// error: plugins without a usable repository link simply have no repository data.
    #[must_use]
    pub fn parse(url: &str) -> Option<Self> {
        let caps = REPO_REGEX.captures(url.trim())?;

        let domain = caps.name("domain")?.as_str().to_ascii_lowercase();
        let owner = caps.name("owner")?.as_str();
        let repo = caps.name("repo")?.as_str().trim_end_matches(".git");

        if repo.is_empty() {
            return None;
        }

        let host = domain.trim_start_matches("www.").split('.').next().unwrap_or_default();

        // Reconstruct a clean URL with only https://domain/owner/repo
        let clean_url = Url::parse(&format!("https://{domain}/{owner}/{repo}")).ok()?;

        Some(Self {
            url: Arc::new(clean_url),
            host: Arc::from(host),
            owner: Arc::from(owner),
            repo: Arc::from(repo),
        })
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The first label of the hosting domain, e.g. `github` for `github.com`.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// The hosting service, if it is one we know about.
    #[must_use]
    pub fn host_kind(&self) -> Option<HostKind> {
        HostKind::from_str(&self.host).ok()
    }
}

impl Display for RepoSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_github_url() {
        let spec = RepoSpec::parse("https://github.com/org/repo").unwrap();

        assert_eq!(spec.host(), "github");
        assert_eq!(spec.owner(), "org");
        assert_eq!(spec.repo(), "repo");
        assert_eq!(spec.host_kind(), Some(HostKind::GitHub));
        assert_eq!(spec.url().as_str(), "https://github.com/org/repo");
    }

    #[test]
    fn test_parse_ssh_url() {
        let spec = RepoSpec::parse("git@github.com:napari/napari-svg.git").unwrap();

        assert_eq!(spec.host(), "github");
        assert_eq!(spec.owner(), "napari");
        assert_eq!(spec.repo(), "napari-svg");
        assert_eq!(spec.url().as_str(), "https://github.com/napari/napari-svg");
    }

    #[test]
    fn test_parse_url_with_git_extension() {
        let spec = RepoSpec::parse("https://github.com/napari/napari.git").unwrap();

        assert_eq!(spec.repo(), "napari"); // .git should be stripped
    }

    #[test]
    fn test_parse_url_with_additional_path_segments() {
        let spec = RepoSpec::parse("https://github.com/napari/napari/tree/main/napari").unwrap();

        assert_eq!(spec.owner(), "napari");
        assert_eq!(spec.repo(), "napari");
        assert_eq!(spec.url().as_str(), "https://github.com/napari/napari");
    }

    #[test]
    fn test_parse_url_with_query_or_fragment() {
        for url in [
            "https://github.com/org/repo?tab=readme",
            "https://github.com/org/repo#readme",
            "https://github.com/org/repo.git?x=1",
        ] {
            let spec = RepoSpec::parse(url).unwrap();
            assert_eq!(spec.owner(), "org", "{url}");
            assert_eq!(spec.repo(), "repo", "{url}");
            assert_eq!(spec.url().as_str(), "https://github.com/org/repo");
        }
    }

    #[test]
    fn test_parse_gitlab_url() {
        let spec = RepoSpec::parse("https://gitlab.com/org/repo").unwrap();

        assert_eq!(spec.host(), "gitlab");
        assert_eq!(spec.host_kind(), Some(HostKind::GitLab));
    }

    #[test]
    fn test_parse_unknown_host() {
        let spec = RepoSpec::parse("https://codeberg.org/org/repo").unwrap();

        assert_eq!(spec.host(), "codeberg");
        assert_eq!(spec.host_kind(), None);
    }

    #[test]
    fn test_parse_www_prefix_is_ignored() {
        let spec = RepoSpec::parse("https://www.github.com/org/repo").unwrap();

        assert_eq!(spec.host(), "github");
    }

    #[test]
    fn test_parse_not_a_url() {
        assert!(RepoSpec::parse("not a url").is_none());
    }

    #[test]
    fn test_parse_empty_string() {
        assert!(RepoSpec::parse("").is_none());
    }

    #[test]
    fn test_parse_plain_http_is_rejected() {
        assert!(RepoSpec::parse("http://github.com/org/repo").is_none());
    }

    #[test]
    fn test_parse_invalid_url_only_owner() {
        assert!(RepoSpec::parse("https://github.com/org").is_none());
        assert!(RepoSpec::parse("https://github.com/org/").is_none());
    }

    #[test]
    fn test_parse_repo_that_is_only_git_extension() {
        assert!(RepoSpec::parse("https://github.com/org/.git").is_none());
    }

    #[test]
    fn test_same_repo_different_forms_are_equal() {
        let spec1 = RepoSpec::parse("git@github.com:org/repo.git").unwrap();
        let spec2 = RepoSpec::parse("https://github.com/org/repo/issues").unwrap();

        assert_eq!(spec1, spec2);
    }

    #[test]
    fn test_display_trait() {
        let spec = RepoSpec::parse("https://github.com/org/repo").unwrap();

        assert_eq!(spec.to_string(), "https://github.com/org/repo");
    }

    #[test]
    fn test_host_kind_display() {
        assert_eq!(HostKind::GitHub.to_string(), "github");
        assert_eq!(HostKind::GitLab.to_string(), "gitlab");
    }
}
