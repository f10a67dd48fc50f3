//! HTTP fetcher trait used for every call to the Artifactory API

#[cfg(test)]
use mockall::automock;

use serde::de::DeserializeOwned;

use crate::http::error::TransportError;

/// Successful (2xx) response from the Artifactory API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Raw response body
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Decode the response body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Issues GET requests against the Artifactory API
///
/// Implementations must be safe to share between tasks. Any credentials,
/// timeouts or retry behavior belong to the implementation.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait HttpFetcher: Send + Sync {
    /// Performs a GET request with the given query parameters
    ///
    /// # Returns
    /// * `Ok(HttpResponse)` - The server answered with a 2xx status
    /// * `Err(TransportError::Status)` - The server answered with any other status
    /// * `Err(TransportError::Network)` - The request could not be completed
    async fn get(
        &self,
        url: &str,
        params: &[(String, String)],
    ) -> Result<HttpResponse, TransportError>;
}
