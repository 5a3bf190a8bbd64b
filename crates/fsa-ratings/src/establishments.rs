use crate::{api_interfaces::establishments, endpoint::DEFAULT_ENDPOINT, error::GetError, Endpoint};

use reqwest::Client;
use tracing::{debug, info, warn};

/// A single food premises as published by the ratings API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Establishment {
    pub name: String,
    /// Published as-is; may be a label such as "Pass" or "Exempt".
    pub rating_value: String,
    pub address: String,
    pub local_authority: String,
}

impl From<establishments::Detail> for Establishment {
    fn from(detail: establishments::Detail) -> Self {
        Self {
            name: detail.business_name,
            rating_value: detail.rating_value,
            address: detail.address_line1,
            local_authority: detail.local_authority_name,
        }
    }
}

/// How the HTTP status of a search response is treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Any status is accepted and its body handed to the decoder.
    Permissive,
    /// A non-2xx status fails the search with [`GetError::ResponseError`].
    Strict,
}

/// Establishments in the order the API returned them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Establishments(Vec<Establishment>);

impl Establishments {
    /// Search for cafes near a postcode.
    ///
    /// `None` for the endpoint searches the public ratings API.
    pub async fn search_custom(
        postcode: &str,
        client: &Client,
        endpoint: Option<&Endpoint>,
        status_policy: StatusPolicy,
    ) -> Result<Self, GetError> {
        let url = endpoint.unwrap_or(&*DEFAULT_ENDPOINT).to_url(postcode);
        debug!(%url, "searching establishments");
        let response = client.get(url).send().await?;
        let status = response.status();
        debug!(%status, "received search response");
        if !status.is_success() {
            match status_policy {
                StatusPolicy::Strict => return Err(GetError::ResponseError(status)),
                StatusPolicy::Permissive => {
                    warn!(%status, "decoding body of unsuccessful response")
                }
            }
        }
        let response_body = response.bytes().await.map_err(GetError::ResponseBodyError)?;
        let establishments = Self::from_xml_bytes(&response_body)?;
        info!(count = establishments.len(), "decoded establishments");
        Ok(establishments)
    }

    /// Decode a search response body.
    ///
    /// Missing fields decode as empty strings and unknown elements are skipped.
    /// A well-formed document with no details is an empty collection, not an error.
    pub fn from_xml(body: &str) -> Result<Self, GetError> {
        let response: establishments::Response = quick_xml::de::from_str(body)?;
        Ok(Self(
            response
                .into_details()
                .into_iter()
                .map(Establishment::from)
                .collect(),
        ))
    }

    /// Decode a raw search response body. Bytes that are not valid UTF-8 are
    /// rejected instead of being replaced.
    pub fn from_xml_bytes(body: &[u8]) -> Result<Self, GetError> {
        Self::from_xml(std::str::from_utf8(body)?)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Establishment> {
        self.0.iter()
    }
}

impl From<Vec<Establishment>> for Establishments {
    fn from(establishments: Vec<Establishment>) -> Self {
        Self(establishments)
    }
}

impl<'a> IntoIterator for &'a Establishments {
    type Item = &'a Establishment;
    type IntoIter = std::slice::Iter<'a, Establishment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
