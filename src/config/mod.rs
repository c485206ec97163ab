//! Configuration file support

#[expect(clippy::module_inception, reason = "config module contains the Config type")]
mod config;

pub use config::{CONFIG_FILE_NAME, Config};
