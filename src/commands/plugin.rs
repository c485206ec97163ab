use super::Host;
use super::common::{Common, CommonArgs, write_json};
use crate::Result;
use crate::page::{PageMetadata, PluginPage, PluginState};
use crate::plugin::PluginMetadata;
use clap::Parser;
use serde::Serialize;
use std::io::Write;

/// Environment variable naming the plugin shown in preview mode
pub const PREVIEW_PLUGIN_ENV: &str = "PREVIEW_PLUGIN";

#[derive(Parser, Debug)]
pub struct PluginArgs {
    /// Name of the plugin
    #[arg(value_name = "NAME")]
    pub name: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Parser, Debug)]
pub struct PreviewArgs {
    /// Name of the plugin to preview
    #[arg(long, value_name = "NAME", env = PREVIEW_PLUGIN_ENV)]
    pub plugin: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PageReport<'a> {
    page: PageMetadata,
    state: Option<&'a PluginState>,
    metadata: Option<PluginMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl<'a> PageReport<'a> {
    fn new(page: &'a PluginPage) -> Self {
        let state = page.state();
        let plugin = state.and_then(|s| s.plugin());

        Self {
            page: PageMetadata::for_plugin(plugin),
            state,
            metadata: state.map(PluginState::metadata),
            error: page.error(),
        }
    }
}

/// Load and print the data of a plugin page
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the output cannot be written
pub async fn show_plugin<H: Host>(host: &mut H, args: &PluginArgs) -> Result<()> {
    let common = Common::new(&args.common)?;
    report_page(host, &common, &args.name).await
}

/// Load and print the data of the plugin page selected for preview
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the output cannot be written
pub async fn show_preview<H: Host>(host: &mut H, args: &PreviewArgs) -> Result<()> {
    let common = Common::new(&args.common)?;

    let Some(name) = args.plugin.as_deref().filter(|name| !name.is_empty()) else {
        let _ = writeln!(host.error(), "❌ No plugin to preview, set {PREVIEW_PLUGIN_ENV} or pass --plugin");
        host.exit(1);
        return Ok(());
    };

    report_page(host, &common, name).await
}

async fn report_page<H: Host>(host: &mut H, common: &Common, name: &str) -> Result<()> {
    let page = common.page_loader()?.load(name).await;

    write_json(host, &PageReport::new(&page))?;

    if let Some(message) = page.error() {
        let _ = writeln!(host.error(), "❌ Could not load plugin '{name}': {message}");
        host.exit(1);
    } else if let Some(e) = page.state().and_then(|s| s.repo_fetch_error()) {
        let _ = writeln!(host.error(), "⚠️ {e}");
    }

    Ok(())
}
