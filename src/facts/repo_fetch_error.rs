use core::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

/// Status reported when a failure carries no HTTP status of its own (transport errors,
/// client construction failures).
pub const UNKNOWN_FAILURE_STATUS: u16 = 500;

/// A provider or network failure while fetching repository data.
///
/// Only real failures become a `RepoFetchError`. A missing URL, an unrecognized URL or an
/// unsupported hosting service are not failures; they just produce no data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoFetchError {
    /// Provider-supplied error name, e.g. `HttpError`.
    pub name: String,

    /// HTTP status of the failed request.
    pub status: u16,
}

impl RepoFetchError {
    #[must_use]
    pub fn new(name: impl Into<String>, status: u16) -> Self {
        Self { name: name.into(), status }
    }

    /// A failure that produced an HTTP response with a non-success status.
    #[must_use]
    pub fn http(status: u16) -> Self {
        Self::new("HttpError", status)
    }

    /// A failure that never produced an HTTP response.
    #[must_use]
    pub fn request() -> Self {
        Self::new("RequestError", UNKNOWN_FAILURE_STATUS)
    }

    /// The API client itself could not be built.
    #[must_use]
    pub fn client_init() -> Self {
        Self::new("ClientInitError", UNKNOWN_FAILURE_STATUS)
    }
}

impl Display for RepoFetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "We're having trouble loading the GitHub stats: {}", self.status)
    }
}

impl core::error::Error for RepoFetchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_status() {
        let error = RepoFetchError::http(404);
        assert_eq!(error.to_string(), "We're having trouble loading the GitHub stats: 404");
    }

    #[test]
    fn test_http_error_name() {
        let error = RepoFetchError::http(403);
        assert_eq!(error.name, "HttpError");
        assert_eq!(error.status, 403);
    }

    #[test]
    fn test_request_error_uses_unknown_status() {
        let error = RepoFetchError::request();
        assert_eq!(error.name, "RequestError");
        assert_eq!(error.status, UNKNOWN_FAILURE_STATUS);
    }

    #[test]
    fn test_serialize_shape() {
        let json = serde_json::to_value(RepoFetchError::http(502)).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "HttpError", "status": 502 }));
    }
}
