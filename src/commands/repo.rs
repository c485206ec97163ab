use super::Host;
use super::common::{Common, CommonArgs, write_json};
use crate::Result;
use crate::facts::RepoFetchError;
use crate::facts::hosting::RepoStats;
use clap::Parser;
use serde::Serialize;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct RepoArgs {
    /// Source-code repository URL, e.g. `https://github.com/napari/napari-svg`
    #[arg(value_name = "URL")]
    pub url: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RepoReport {
    repo: Option<RepoStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repo_fetch_error: Option<RepoFetchError>,
}

/// Fetch and print repository statistics for a source-code URL
///
/// A URL on an unsupported host prints `null` stats. A fetch failure is printed alongside
/// and sets exit code 1.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the output cannot be written
pub async fn show_repo<H: Host>(host: &mut H, args: &RepoArgs) -> Result<()> {
    let common = Common::new(&args.common)?;

    let (repo, repo_fetch_error) = common.hosting().get_repo_stats(&args.url).await.into_parts();
    let failed = repo_fetch_error.clone();

    write_json(host, &RepoReport { repo, repo_fetch_error })?;

    if let Some(e) = failed {
        let _ = writeln!(host.error(), "❌ {e}");
        host.exit(1);
    }

    Ok(())
}
