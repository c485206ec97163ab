use crate::facts::RepoFetchError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderResult<T> {
    /// The operation succeeded and data was found.
    Found(T),

    /// There is nothing to fetch: no URL, an unrecognized URL, or an unsupported host.
    NoData,

    /// The provider or the network failed.
    Error(RepoFetchError),
}

impl<T> ProviderResult<T> {
    /// Returns `true` if the result is `Found`.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns a reference to the contained data if `Found`, otherwise `None`.
    #[must_use]
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Found(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the failure if this is an `Error`, otherwise `None`.
    #[must_use]
    pub const fn error(&self) -> Option<&RepoFetchError> {
        match self {
            Self::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Split into the optional data and the optional failure.
    #[must_use]
    pub fn into_parts(self) -> (Option<T>, Option<RepoFetchError>) {
        match self {
            Self::Found(data) => (Some(data), None),
            Self::NoData => (None, None),
            Self::Error(e) => (None, Some(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_found_for_found_variant() {
        let result: ProviderResult<String> = ProviderResult::Found("data".to_string());
        assert!(result.is_found());
    }

    #[test]
    fn test_is_found_for_no_data() {
        let result: ProviderResult<String> = ProviderResult::NoData;
        assert!(!result.is_found());
    }

    #[test]
    fn test_is_found_for_error() {
        let result: ProviderResult<String> = ProviderResult::Error(RepoFetchError::http(500));
        assert!(!result.is_found());
    }

    #[test]
    fn test_as_ref_for_found() {
        let result: ProviderResult<u32> = ProviderResult::Found(42);
        assert_eq!(result.as_ref(), Some(&42));
        assert_eq!(result.error(), None);
    }

    #[test]
    fn test_as_ref_for_error() {
        let result: ProviderResult<u32> = ProviderResult::Error(RepoFetchError::http(404));
        assert_eq!(result.as_ref(), None);
        assert_eq!(result.error().map(|e| e.status), Some(404));
    }

    #[test]
    fn test_into_parts() {
        assert_eq!(ProviderResult::Found(1).into_parts(), (Some(1), None));
        assert_eq!(ProviderResult::<u32>::NoData.into_parts(), (None, None));
        assert_eq!(
            ProviderResult::<u32>::Error(RepoFetchError::http(403)).into_parts(),
            (None, Some(RepoFetchError::http(403)))
        );
    }
}
