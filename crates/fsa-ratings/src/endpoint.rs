use std::sync::LazyLock;

use thiserror::Error;

use crate::constants::{DEFAULT_SEARCH_URL_FORMAT, DEFAULT_SEARCH_URL_REPLACE_TOKEN};

pub(crate) static DEFAULT_ENDPOINT: LazyLock<Endpoint> = LazyLock::new(|| Endpoint {
    url_format: DEFAULT_SEARCH_URL_FORMAT.to_string(),
});

/// A search URL format with a `$postcode` placeholder.
#[derive(Clone, Debug, PartialEq)]
pub struct Endpoint {
    url_format: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum EndpointConfigError {
    #[error("the search URL format is empty")]
    EmptyUrlFormat,
    #[error("search URL format `{0}` has no `$postcode` placeholder")]
    MissingPostcodePlaceholder(String),
}

impl Endpoint {
    pub fn try_new(url_format: impl Into<String>) -> Result<Self, EndpointConfigError> {
        let url_format = url_format.into();
        if url_format.trim().is_empty() {
            return Err(EndpointConfigError::EmptyUrlFormat);
        }
        if !url_format.contains(DEFAULT_SEARCH_URL_REPLACE_TOKEN) {
            return Err(EndpointConfigError::MissingPostcodePlaceholder(url_format));
        }
        Ok(Self { url_format })
    }

    /// Build the search URL for a postcode.
    ///
    /// The postcode is percent-encoded as one path segment, so a stray space
    /// or slash can't change which resource is requested. No other checks are
    /// made on it: an empty or malformed postcode is sent as-is.
    pub fn to_url(&self, postcode: &str) -> String {
        let postcode = urlencoding::encode(postcode);
        self.url_format.replace(DEFAULT_SEARCH_URL_REPLACE_TOKEN, &postcode)
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        DEFAULT_ENDPOINT.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_accepts_postcode_placeholder() {
        let endpoint = Endpoint::try_new("http://localhost:8080/search/$postcode");
        assert!(endpoint.is_ok());
        assert_eq!(
            endpoint.unwrap().to_url("LS11BA"),
            "http://localhost:8080/search/LS11BA"
        );
    }

    #[test]
    fn try_new_rejects_blank_format() {
        assert_eq!(Endpoint::try_new(""), Err(EndpointConfigError::EmptyUrlFormat));
        assert_eq!(Endpoint::try_new("  "), Err(EndpointConfigError::EmptyUrlFormat));
    }

    #[test]
    fn try_new_rejects_format_without_placeholder() {
        let err = Endpoint::try_new("https://example.com/search/cafe/xml").unwrap_err();
        assert_eq!(
            err,
            EndpointConfigError::MissingPostcodePlaceholder(
                "https://example.com/search/cafe/xml".to_string()
            )
        );
        assert!(err.to_string().contains("$postcode"));
    }

    #[test]
    fn default_endpoint_builds_api_url() {
        let url = Endpoint::default().to_url("SW1A1AA");
        assert_eq!(url, "https://api1-ratings.food.gov.uk/search/cafe/SW1A1AA/xml");
    }

    #[test]
    fn to_url_keeps_postcode_unvalidated() {
        let endpoint = Endpoint::default();
        assert_eq!(
            endpoint.to_url(""),
            "https://api1-ratings.food.gov.uk/search/cafe//xml"
        );
        assert_eq!(
            endpoint.to_url("not-a-postcode"),
            "https://api1-ratings.food.gov.uk/search/cafe/not-a-postcode/xml"
        );
    }

    #[test]
    fn to_url_encodes_path_separators_and_spaces() {
        let endpoint = Endpoint::default();
        assert_eq!(
            endpoint.to_url("SW1A 1AA"),
            "https://api1-ratings.food.gov.uk/search/cafe/SW1A%201AA/xml"
        );
        assert_eq!(
            endpoint.to_url("../admin"),
            "https://api1-ratings.food.gov.uk/search/cafe/..%2Fadmin/xml"
        );
    }
}
