use crate::error::GetError;

pub fn default_http_client() -> Result<reqwest::Client, GetError> {
    Ok(reqwest::Client::builder()
        .gzip(true)
        .brotli(true)
        .build()?)
}
