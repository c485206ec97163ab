use super::Host;
use super::common::{CommonArgs, init_logging, write_json};
use crate::Result;
use crate::page::PageMetadata;
use crate::plugin::{PluginData, PluginMetadata};
use camino::Utf8PathBuf;
use clap::Parser;
use ohno::IntoAppError;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::Read;

const LOG_TARGET: &str = " normalize";

#[derive(Parser, Debug)]
pub struct NormalizeArgs {
    /// JSON file holding a raw plugin record, or `-` to read standard input
    #[arg(value_name = "FILE")]
    pub input: Utf8PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Serialize)]
struct NormalizeReport {
    page: PageMetadata,
    metadata: PluginMetadata,
}

/// Normalize a raw plugin record without contacting any service or reading configuration
///
/// Fields of the wrong shape are ignored; a document that is not a JSON object is treated as
/// an empty record.
///
/// # Errors
///
/// Returns an error if the input cannot be read or is not JSON
pub fn normalize_record<H: Host>(host: &mut H, args: &NormalizeArgs) -> Result<()> {
    init_logging(args.common.log_level);

    let text = if args.input.as_str() == "-" {
        let mut text = String::new();
        let _ = host.input().read_to_string(&mut text).into_app_err("reading plugin record from standard input")?;
        text
    } else {
        fs::read_to_string(&args.input).into_app_err_with(|| format!("reading plugin record '{}'", args.input))?
    };

    let value: Value = serde_json::from_str(&text).into_app_err_with(|| format!("parsing plugin record '{}'", args.input))?;

    let plugin = match serde_json::from_value::<PluginData>(value) {
        Ok(plugin) => Some(plugin),
        Err(e) => {
            log::debug!(target: LOG_TARGET, "'{}' is not a plugin record: {e}", args.input);
            None
        }
    };

    let report = NormalizeReport {
        page: PageMetadata::for_plugin(plugin.as_ref()),
        metadata: PluginMetadata::from_plugin(plugin.as_ref()),
    };

    write_json(host, &report)
}
