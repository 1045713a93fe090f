use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::error::FetchError;

/// Body and status of one raw-content GET. The body is kept even for
/// non-200 responses; the caller decides whether to discard it.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Narrow seam over the raw-content host so the row loop can be driven
/// by a fake in tests.
pub trait RawContentClient: Send + Sync {
    /// Performs exactly one GET. Transport-level faults (connection,
    /// timeout) are errors; HTTP-level failures are a `RawResponse`.
    fn fetch_raw(&self, url: &str) -> Result<RawResponse, FetchError>;
}

#[derive(Clone)]
pub struct GithubHttpClient {
    client: Client,
}

impl GithubHttpClient {
    pub fn new() -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("mlcq-fetch/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| FetchError::GithubHttp(err.to_string()))?,
        );
        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|err| FetchError::GithubHttp(err.to_string()))?;
        Ok(Self { client })
    }
}

impl RawContentClient for GithubHttpClient {
    fn fetch_raw(&self, url: &str) -> Result<RawResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| FetchError::GithubHttp(err.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|err| FetchError::GithubHttp(err.to_string()))?;
        Ok(RawResponse { status, body })
    }
}
