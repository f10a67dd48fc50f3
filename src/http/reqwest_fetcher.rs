//! `HttpFetcher` implementation backed by `reqwest`

use std::time::Duration;

use reqwest::Url;
use tracing::{debug, warn};

use crate::http::error::TransportError;
use crate::http::fetcher::{HttpFetcher, HttpResponse};

/// Basic auth credentials applied to every request
#[derive(Clone)]
struct Credentials {
    username: String,
    password: String,
}

/// Fetcher using a shared `reqwest::Client`
///
/// Credentials are fixed when the fetcher is built, so every request made
/// through one instance is authenticated the same way.
pub struct ReqwestFetcher {
    client: reqwest::Client,
    credentials: Option<Credentials>,
}

impl ReqwestFetcher {
    /// Creates an anonymous fetcher with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("stac/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            credentials: None,
        })
    }

    /// Creates a fetcher that sends HTTP basic auth with every request
    pub fn with_credentials(
        timeout: Duration,
        username: &str,
        password: &str,
    ) -> Result<Self, TransportError> {
        let mut fetcher = Self::new(timeout)?;
        fetcher.credentials = Some(Credentials {
            username: username.to_string(),
            password: password.to_string(),
        });
        Ok(fetcher)
    }

    fn build_url(url: &str, params: &[(String, String)]) -> Result<Url, TransportError> {
        Url::parse_with_params(url, params.iter().map(|(k, v)| (k.as_str(), v.as_str()))).map_err(
            |e| TransportError::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            },
        )
    }
}

#[async_trait::async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn get(
        &self,
        url: &str,
        params: &[(String, String)],
    ) -> Result<HttpResponse, TransportError> {
        let full_url = Self::build_url(url, params)?;
        debug!("GET {}", full_url);

        let mut request = self.client.get(full_url);
        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(&credentials.username, Some(&credentials.password));
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("Artifactory returned status {}: {}", status, url);
            return Err(TransportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(HttpResponse::new(status.as_u16(), body))
    }
}
