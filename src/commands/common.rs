//! Setup shared by all commands.

use super::Host;
use crate::Result;
use crate::config::Config;
use crate::facts::hosting::{self, GitHubClient, GitHubCredentials};
use crate::facts::plugins;
use crate::page::PageLoader;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::io::Write;

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Arguments shared by every command
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Path to configuration file (default is `hub-facts.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Root of the hub backend API, overriding the configuration file
    #[arg(long, value_name = "URL")]
    pub hub_api_url: Option<String>,

    /// Root of the GitHub REST API, overriding the configuration file
    #[arg(long, value_name = "URL")]
    pub github_api_url: Option<String>,

    /// GitHub OAuth app client id [default: read from `GITHUB_CLIENT_ID` on first use]
    #[arg(long, value_name = "ID", requires = "github_client_secret")]
    pub github_client_id: Option<String>,

    /// GitHub OAuth app client secret [default: read from `GITHUB_CLIENT_SECRET` on first use]
    #[arg(long, value_name = "SECRET", requires = "github_client_id")]
    pub github_client_secret: Option<String>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

/// Effective settings of a command invocation, with command-line overrides applied.
#[derive(Debug)]
pub struct Common {
    pub config: Config,
    credentials: Option<GitHubCredentials>,
}

impl Common {
    /// Initialize logging and load the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be loaded
    pub fn new(args: &CommonArgs) -> Result<Self> {
        init_logging(args.log_level);

        let mut config = Config::load(Utf8Path::new("."), args.config.as_deref())?;
        if let Some(url) = &args.hub_api_url {
            config.hub_api_url.clone_from(url);
        }
        if let Some(url) = &args.github_api_url {
            config.github_api_url.clone_from(url);
        }

        Ok(Self {
            config,
            credentials: GitHubCredentials::from_parts(args.github_client_id.as_deref(), args.github_client_secret.as_deref()),
        })
    }

    /// Repository stats provider; its GitHub client is only built once a GitHub URL is looked up.
    ///
    /// Without credentials on the command line, they are read from the environment when the
    /// client is built.
    #[must_use]
    pub fn hosting(&self) -> hosting::Provider<GitHubClient> {
        let base_url = self.config.github_api_url.clone();
        let timeout = Some(self.config.request_timeout());

        match &self.credentials {
            Some(credentials) => hosting::Provider::github(Some(credentials.clone()), base_url, timeout),
            None => hosting::Provider::github_from_env(base_url, timeout),
        }
    }

    /// Hub API client
    ///
    /// # Errors
    ///
    /// Returns an error if the configured hub API URL is invalid
    pub fn hub(&self) -> Result<plugins::Provider> {
        plugins::Provider::new(&self.config.hub_api_url, Some(self.config.request_timeout()))
    }

    /// Loader combining the hub API and repository hosting
    ///
    /// # Errors
    ///
    /// Returns an error if the configured hub API URL is invalid
    pub fn page_loader(&self) -> Result<PageLoader<GitHubClient>> {
        Ok(PageLoader::new(self.hub()?, self.hosting()))
    }
}

/// Print `value` as pretty JSON on the host's output.
///
/// # Errors
///
/// Returns an error if the value cannot be written
pub fn write_json<H: Host>(host: &mut H, value: &impl Serialize) -> Result<()> {
    let mut output = host.output();
    serde_json::to_writer_pretty(&mut output, value)?;
    writeln!(output)?;
    Ok(())
}

pub(super) fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    // a logger may already be installed when commands run more than once in a process
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}
