//! Command dispatch logic for hub-facts

use super::{Host, NormalizeArgs, PluginArgs, PreviewArgs, RepoArgs, normalize_record, show_plugin, show_preview, show_repo};
use crate::Result;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};
use std::io::Write;

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "hub-facts", version, author, long_about = None)]
#[command(about = "Collect the data behind napari hub plugin pages")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: HubSubcommand,
}

#[derive(Subcommand, Debug)]
enum HubSubcommand {
    /// Load the page data of a plugin from the hub API
    Plugin(PluginArgs),
    /// Load the page data of the plugin selected for preview
    Preview(PreviewArgs),
    /// Fetch repository statistics for a source-code URL
    Repo(RepoArgs),
    /// Normalize a raw plugin record from a file or standard input
    Normalize(NormalizeArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// Usage errors, `--help` and `--version` are written to the host rather than terminating
/// the process directly.
///
/// # Errors
///
/// Returns an error if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let rendered = e.render();
            if e.use_stderr() {
                let _ = write!(host.error(), "{rendered}");
            } else {
                let _ = write!(host.output(), "{rendered}");
            }

            let code = e.exit_code();
            if code != 0 {
                host.exit(code);
            }
            return Ok(());
        }
    };

    match &cli.command {
        HubSubcommand::Plugin(args) => show_plugin(host, args).await,
        HubSubcommand::Preview(args) => show_preview(host, args).await,
        HubSubcommand::Repo(args) => show_repo(host, args).await,
        HubSubcommand::Normalize(args) => normalize_record(host, args),
    }
}
