use crate::plugin::PluginData;
use serde::Serialize;

/// Title of every plugin page before the plugin's own details are added
pub const BASE_TITLE: &str = "napari hub | plugins";

/// Document-level metadata for a plugin page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PageMetadata {
    /// The title is extended with the plugin name when the record has a name and an author
    /// list, and with the author names when there are any.
    #[must_use]
    pub fn for_plugin(plugin: Option<&PluginData>) -> Self {
        let mut title = BASE_TITLE.to_string();
        let mut keywords = Vec::new();

        if let Some(plugin) = plugin
            && let Some(name) = plugin.name.as_deref().filter(|name| !name.is_empty())
            && plugin.authors.is_some()
        {
            title = format!("{title} | {name}");

            let authors: Vec<&str> = plugin.author_names().collect();
            if !authors.is_empty() {
                title = format!("{title} by {}", authors.join(", "));
            }

            keywords.push(name.to_string());
            keywords.extend(authors.into_iter().map(str::to_string));
        }

        Self {
            title,
            keywords,
            description: plugin.and_then(|p| p.summary.clone()),
        }
    }
}
