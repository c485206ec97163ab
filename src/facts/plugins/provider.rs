//! Client for the hub API's plugin endpoint.

use crate::Result;
use crate::plugin::PluginData;
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use serde_json::Value;
use url::Url;

const LOG_TARGET: &str = "       hub";

/// Error object returned by the hub API when it fails on the server side
///
/// The object is kept as sent, so fields of unexpected shape or unknown fields still reach
/// the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubServerError {
    body: Value,
}

impl HubServerError {
    #[must_use]
    pub const fn new(body: Value) -> Self {
        Self { body }
    }

    #[must_use]
    pub fn error_type(&self) -> Option<&str> {
        self.body.get("errorType").and_then(Value::as_str)
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.body.get("errorMessage").and_then(Value::as_str)
    }

    #[must_use]
    pub const fn body(&self) -> &Value {
        &self.body
    }

    /// The error object as indented JSON, for display on the page.
    #[must_use]
    pub fn to_pretty_json(&self) -> String {
        format!("{:#}", self.body)
    }
}

/// Classified body of a plugin request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HubResponse {
    /// A plugin record with a name.
    Plugin(Box<PluginData>),

    /// The server reported an error.
    ServerError(HubServerError),

    /// The body was neither a named plugin nor a server error.
    Empty,
}

impl HubResponse {
    /// Classify a response body.
    #[must_use]
    pub fn from_body(body: Value) -> Self {
        if body.get("errorType").is_some_and(is_set) {
            return Self::ServerError(HubServerError::new(body));
        }

        if !body.is_object() {
            return Self::Empty;
        }

        match serde_json::from_value::<PluginData>(body) {
            Ok(plugin) if plugin.has_name() => Self::Plugin(Box::new(plugin)),
            _ => Self::Empty,
        }
    }
}

/// Whether a JSON value counts as present: not null, false, zero or an empty string.
fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Hub API client
#[derive(Debug, Clone)]
pub struct Provider {
    client: reqwest::Client,
    base_url: Url,
}

impl Provider {
    /// Create a new hub API client for the API rooted at `base_url`
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = Url::parse(base_url).into_app_err_with(|| format!("invalid hub API URL '{base_url}'"))?;

        let mut client_builder = reqwest::Client::builder().user_agent("hub-facts");
        if let Some(timeout) = timeout {
            client_builder = client_builder.timeout(timeout);
        }

        Ok(Self {
            client: client_builder.build()?,
            base_url,
        })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch the record of the plugin called `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with an error status, or the
    /// body is not JSON.
    pub async fn get_plugin(&self, name: &str) -> Result<HubResponse> {
        let url = self.plugin_url(name)?;

        log::info!(target: LOG_TARGET, "Fetching plugin '{name}' from '{url}'");

        let resp = self
            .client
            .get(url.as_str())
            .send()
            .await
            .into_app_err_with(|| format!("could not fetch plugin '{name}'"))?
            .error_for_status()
            .into_app_err_with(|| format!("could not fetch plugin '{name}'"))?;

        let body: Value = resp
            .json()
            .await
            .into_app_err_with(|| format!("malformed response for plugin '{name}'"))?;

        let response = HubResponse::from_body(body);
        log::debug!(target: LOG_TARGET, "Fetched plugin '{name}': {}", match &response {
            HubResponse::Plugin(_) => "found",
            HubResponse::ServerError(_) => "server error",
            HubResponse::Empty => "empty",
        });

        Ok(response)
    }

    fn plugin_url(&self, name: &str) -> Result<Url> {
        let base = &self.base_url;
        let mut url = base.clone();
        let _ = url
            .path_segments_mut()
            .map_err(|()| app_err!("hub API URL '{base}' cannot have a path"))?
            .pop_if_empty()
            .extend(["plugins", name]);
        Ok(url)
    }
}
