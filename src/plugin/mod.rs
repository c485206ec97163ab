//! Plugin records and their normalized metadata view
//!
//! [`PluginData`] is the record served by the hub API. Every field is optional and
//! deserialization never fails because of a field with an unexpected shape, since records
//! may be previews of plugins whose authors are still filling them in.
//!
//! [`PluginMetadata`] is the display-ready view derived from a record: every field is always
//! present, with absence represented by an empty value.

pub mod format;
mod lenient;
mod metadata;
mod plugin_data;

pub use metadata::{EMPTY_DESCRIPTION_TEXT, LinkItem, ListItem, PluginMetadata, TextItem};
pub use plugin_data::{PluginAuthor, PluginData};
