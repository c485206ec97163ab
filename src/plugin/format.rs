//! Formatting helpers for plugin metadata values.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

/// Separator between nesting levels of a trove classifier
pub const CLASSIFIER_SEPARATOR: &str = " :: ";

/// Display format for dates, e.g. `05 March 2021`
const DATE_FORMAT: &str = "%d %B %Y";

static TWITTER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://(?:www\.)?twitter\.com/(?:#!/)?(?P<name>[^/]+)(?:/\w+)*$").expect("invalid regex"));

/// Reformat a date string as `DD MMMM YYYY`.
///
/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS[.fff]` timestamps and plain
/// `YYYY-MM-DD` dates. Returns `None` for anything else.
#[must_use]
pub fn format_date(date: &str) -> Option<String> {
    parse_date(date.trim()).map(|d| d.format(DATE_FORMAT).to_string())
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Some(dt.date_naive());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date, format) {
            return Some(dt.date());
        }
    }

    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// The last segment of a trove classifier.
///
/// Classifier nesting is arbitrary: `Operating System :: Microsoft :: Windows :: Windows 10`
/// and `Operating System :: OS Independent` are both valid.
#[must_use]
pub fn classifier_leaf(classifier: &str) -> &str {
    classifier.rsplit(CLASSIFIER_SEPARATOR).next().unwrap_or_default().trim()
}

/// The name of an operating system classifier, with `OS Independent` shown as `All`.
#[must_use]
pub fn format_operating_system(operating_system: &str) -> String {
    classifier_leaf(operating_system).replace("OS Independent", "All")
}

/// The `@handle` of a Twitter profile URL, or an empty string if the URL isn't one.
#[must_use]
pub fn format_twitter(url: &str) -> String {
    TWITTER_REGEX
        .captures(url)
        .and_then(|caps| caps.name("name"))
        .map_or_else(String::new, |name| format!("@{}", name.as_str()))
}
