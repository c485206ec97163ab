//! hub-facts crate
//!
//! Data layer behind the napari hub plugin pages. It normalizes raw plugin records into a
//! display-ready view and collects repository statistics from the plugin's source hosting.
//!
//! # Module Organization
//!
//! - [`config`]: Configuration file and defaults
//! - [`facts`]: Data collection from the hub API and repository hosting services
//! - [`plugin`]: Raw plugin records and their normalized metadata view
//! - [`page`]: Assembly of the shared per-page plugin state
//! - [`commands`]: Command-line interface

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod commands;
pub mod config;
pub mod facts;
pub mod page;
pub mod plugin;

pub use crate::commands::{Host, run};
