//! Per-page plugin state
//!
//! A plugin page is loaded by fetching the plugin record from the hub API, then fetching
//! repository statistics for the record's source-code URL. The results are combined into a
//! read-only [`PluginState`] that presentation code consumes, together with the derived
//! [`PageMetadata`] and [`crate::plugin::PluginMetadata`].

mod loader;
mod page_metadata;
mod plugin_state;

pub use loader::{EMPTY_PLUGIN_MESSAGE, PageLoader, PluginPage};
pub use page_metadata::{BASE_TITLE, PageMetadata};
pub use plugin_state::PluginState;
