//! Artifactory clients
//!
//! # Modules
//!
//! - [`generic`]: `GenericArtifactoryClient`, usable with any repository layout
//! - [`url`]: Download URL generators per repository layout
//! - [`identifier`]: Splitting full names into group and artifact

pub mod generic;
pub mod identifier;
pub mod url;

use std::sync::Arc;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::StacError;
use crate::http::fetcher::HttpFetcher;
use crate::http::reqwest_fetcher::ReqwestFetcher;
use crate::version::resolver::VersionResolver;

pub use generic::{GenericArtifactoryClient, GenericArtifactoryClientConfig};
pub use identifier::ArtifactIdentifier;
pub use url::{ArtifactUrlGenerator, MavenArtifactUrlGenerator};

/// Number of versions returned by `get_latest_versions` unless told otherwise
pub const DEFAULT_VERSION_LIMIT: usize = 5;

/// Gets URLs and versions of artifacts
///
/// How `full_name`, `packaging` and `descriptor` are interpreted depends on
/// the repository layout. A Maven layout client reads `full_name` as group
/// and artifact (`com.example.project.service`), a flat layout would read it
/// as a plain package name.
#[async_trait::async_trait]
pub trait ArtifactoryClient: Send + Sync {
    /// URL of a specific version of an artifact. Makes no network requests.
    ///
    /// # Errors
    /// * `StacError::InvalidArgument` - `full_name` has no artifact name
    fn get_version_url(
        &self,
        full_name: &str,
        packaging: &str,
        version: &str,
        descriptor: Option<&str>,
    ) -> Result<String, StacError>;

    /// URL of the most recent version of an artifact
    ///
    /// # Errors
    /// * `StacError::InvalidArgument` - `full_name` has no artifact name; no request is made
    /// * `StacError::NoMatchingVersions` - the API answered 404 or returned no
    ///   version of the repository's kind
    /// * `StacError::Transport` - any other API failure
    async fn get_latest_version(
        &self,
        full_name: &str,
        packaging: &str,
        descriptor: Option<&str>,
    ) -> Result<String, StacError>;

    /// URLs of the `limit` most recent versions, newest first
    ///
    /// # Errors
    /// * `StacError::InvalidArgument` - `limit` is zero or `full_name` has no
    ///   artifact name; no request is made
    /// * `StacError::NoMatchingVersions` - the API answered 404 or returned no
    ///   version of the repository's kind
    /// * `StacError::Transport` - any other API failure
    async fn get_latest_versions(
        &self,
        full_name: &str,
        packaging: &str,
        descriptor: Option<&str>,
        limit: usize,
    ) -> Result<Vec<String>, StacError>;

    /// Most recent version number of an artifact
    async fn get_latest_version_number(&self, full_name: &str) -> Result<String, StacError>;

    /// The `limit` most recent version numbers, newest first
    async fn get_latest_version_numbers(
        &self,
        full_name: &str,
        limit: usize,
    ) -> Result<Vec<String>, StacError>;
}

/// Creates a client for a Maven layout repository
///
/// Credentials in `config` are bound to the underlying HTTP client and sent
/// with every API request.
pub fn new_maven_client(config: &ClientConfig) -> Result<GenericArtifactoryClient, StacError> {
    let timeout = Duration::from_millis(config.timeout_ms);
    let fetcher = match config.credentials() {
        Some((username, password)) => {
            ReqwestFetcher::with_credentials(timeout, username, password)?
        }
        None => ReqwestFetcher::new(timeout)?,
    };

    Ok(new_maven_client_with_fetcher(config, Arc::new(fetcher)))
}

/// Creates a Maven layout client that uses the given HTTP fetcher
pub fn new_maven_client_with_fetcher(
    config: &ClientConfig,
    fetcher: Arc<dyn HttpFetcher>,
) -> GenericArtifactoryClient {
    GenericArtifactoryClient::new(GenericArtifactoryClientConfig {
        is_integration: config.is_integration,
        resolver: VersionResolver::new(fetcher, &config.base_url, &config.repo),
        url_generator: Arc::new(MavenArtifactUrlGenerator::new(
            &config.base_url,
            &config.repo,
        )),
    })
}
