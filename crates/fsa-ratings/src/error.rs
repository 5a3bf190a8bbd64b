use thiserror::Error;

#[derive(Debug, Error)]
pub enum GetError {
    #[error("Error fetching data: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Error fetching data: the request failed with status code {0}")]
    ResponseError(reqwest::StatusCode),
    #[error("Error reading response body: {0}")]
    ResponseBodyError(#[source] reqwest::Error),
    #[error("Error unmarshalling XML: {0}")]
    ParseError(#[from] quick_xml::DeError),
    #[error("Error unmarshalling XML: body is not valid UTF-8: {0}")]
    EncodingError(#[from] std::str::Utf8Error),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Error writing output: {0}")]
    WriteError(#[from] std::io::Error),
}
