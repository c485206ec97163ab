use super::PluginData;
use super::format::{classifier_leaf, format_date};
use serde::Serialize;

const LOG_TARGET: &str = "  metadata";

/// Shown in place of a plugin description that hasn't been written yet
pub const EMPTY_DESCRIPTION_TEXT: &str = "The developer has not yet provided a napari-hub specific description.";

/// Marks a requirement that only applies when an optional extra is installed
const EXTRA_REQUIREMENT_MARKER: &str = "; extra == ";

/// A single-valued metadata field. `value` is empty when the plugin doesn't provide it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextItem {
    pub name: &'static str,
    pub value: String,
}

/// A multi-valued metadata field. `values` is empty when the plugin doesn't provide any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub name: &'static str,
    pub values: Vec<String>,
}

/// A link metadata field. `href` is empty when the plugin doesn't provide it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkItem {
    pub name: &'static str,

    /// Label used while previewing a plugin, when it differs from `name`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_name: Option<&'static str>,

    pub href: String,
}

/// Display-ready metadata for a plugin page.
///
/// Every field is always present so consumers never have to check for missing data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginMetadata {
    pub name: TextItem,
    pub summary: TextItem,
    pub description: TextItem,
    pub release_date: TextItem,
    pub first_released: TextItem,
    pub authors: ListItem,
    pub project_site: LinkItem,
    pub report_issues: LinkItem,
    pub twitter: LinkItem,
    pub source_code: LinkItem,
    pub support_site: LinkItem,
    pub documentation_site: LinkItem,
    pub version: TextItem,
    pub development_status: ListItem,
    pub license: TextItem,
    pub python_version: TextItem,
    pub operating_systems: ListItem,
    pub requirements: ListItem,
}

impl PluginMetadata {
    /// Build the metadata view for a plugin record, which may be missing or entirely empty.
    #[must_use]
    pub fn from_plugin(plugin: Option<&PluginData>) -> Self {
        let empty = PluginData::default();
        let p = plugin.unwrap_or(&empty);

        Self {
            name: text("Plugin name", p.name.as_deref()),
            summary: text("Brief description", p.summary.as_deref()),
            description: TextItem {
                name: "Plugin description using hub-specific template",
                value: description(p.description.as_deref()),
            },
            release_date: date("Release date", p.release_date.as_deref()),
            first_released: date("First released", p.first_released.as_deref()),
            authors: ListItem {
                name: "Authors",
                values: p.author_names().map(str::to_string).collect(),
            },
            project_site: link("Project site", None, p.project_site.as_deref()),
            report_issues: link("Report issues", Some("Report issues site"), p.report_issues.as_deref()),
            twitter: link("Twitter", Some("Twitter handle"), p.twitter.as_deref()),
            source_code: link("Source code", None, p.code_repository.as_deref()),
            support_site: link("Support site", None, p.support.as_deref()),
            documentation_site: link("Documentation", Some("Documentation site"), p.documentation.as_deref()),
            version: text("Version", p.version.as_deref()),
            development_status: classifiers("Development status", p.development_status.as_deref()),
            license: text("License", p.license.as_deref()),
            python_version: text("Python versions supported", p.python_version.as_deref()),
            operating_systems: classifiers("Operating system", p.operating_system.as_deref()),
            requirements: ListItem {
                name: "Requirements",
                values: requirements(p.requirements.as_deref()),
            },
        }
    }
}

impl From<&PluginData> for PluginMetadata {
    fn from(plugin: &PluginData) -> Self {
        Self::from_plugin(Some(plugin))
    }
}

fn text(name: &'static str, value: Option<&str>) -> TextItem {
    TextItem {
        name,
        value: value.unwrap_or_default().to_string(),
    }
}

fn date(name: &'static str, value: Option<&str>) -> TextItem {
    let value = value.filter(|v| !v.is_empty()).map_or_else(String::new, |v| {
        format_date(v).unwrap_or_else(|| {
            log::debug!(target: LOG_TARGET, "Ignoring unparsable date '{v}' for '{name}'");
            String::new()
        })
    });

    TextItem { name, value }
}

fn link(name: &'static str, preview_name: Option<&'static str>, href: Option<&str>) -> LinkItem {
    LinkItem {
        name,
        preview_name,
        href: href.unwrap_or_default().to_string(),
    }
}

fn description(value: Option<&str>) -> String {
    match value {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => EMPTY_DESCRIPTION_TEXT.to_string(),
    }
}

fn classifiers(name: &'static str, values: Option<&[String]>) -> ListItem {
    ListItem {
        name,
        values: values
            .unwrap_or_default()
            .iter()
            .map(String::as_str)
            .map(classifier_leaf)
            .filter(|leaf| !leaf.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

fn requirements(values: Option<&[String]>) -> Vec<String> {
    values
        .unwrap_or_default()
        .iter()
        .filter(|req| !req.contains(EXTRA_REQUIREMENT_MARKER))
        .cloned()
        .collect()
}
