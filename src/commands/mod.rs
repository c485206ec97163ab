//! Command-line interface for hub-facts
//!
//! Each subcommand loads the configuration, builds the providers it needs and prints its
//! result as JSON to the host's output stream.
//!
//! ## Commands
//!
//! - **plugin**: Load everything a plugin page needs: the shared plugin state, the normalized
//!   metadata view and the page metadata
//! - **preview**: Same as `plugin`, for the plugin named by `PREVIEW_PLUGIN`
//! - **repo**: Fetch repository statistics for a source-code URL
//! - **normalize**: Normalize a raw plugin record read from a file or standard input
//!
//! Failures a page can display (a hub error, a repository fetch error) are reported in the
//! JSON output and set a non-zero exit code through the [`Host`]. Everything else propagates
//! as an error.

mod common;
mod host;
mod normalize;
mod plugin;
mod repo;
mod run;

pub use common::{CommonArgs, LogLevel};
pub use host::Host;
pub use normalize::{NormalizeArgs, normalize_record};
pub use plugin::{PluginArgs, PreviewArgs, show_plugin, show_preview};
pub use repo::{RepoArgs, show_repo};
pub use run::run;
