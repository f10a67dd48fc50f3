//! Version lookups against the Artifactory search API
//!
//! - `GET {base}/api/search/latestVersion?g=&a=&repos=` returns the most
//!   recent release as plain text
//! - `GET {base}/api/search/versions?g=&a=&repos=` returns every version
//!   with its integration flag as JSON

use std::sync::Arc;

use tracing::debug;

use crate::error::StacError;
use crate::http::fetcher::HttpFetcher;
use crate::version::loose::sort_descending;
use crate::version::types::VersionsResponse;

const LATEST_VERSION_PATH: &str = "/api/search/latestVersion";
const VERSIONS_PATH: &str = "/api/search/versions";

/// Resolves versions of an artifact in a single repository
///
/// Errors from the HTTP fetcher are passed through untouched; deciding
/// which of them mean "no versions" is left to the caller.
pub struct VersionResolver {
    fetcher: Arc<dyn HttpFetcher>,
    base_url: String,
    repo: String,
}

impl VersionResolver {
    pub fn new(fetcher: Arc<dyn HttpFetcher>, base_url: &str, repo: &str) -> Self {
        Self {
            fetcher,
            base_url: base_url.trim_end_matches('/').to_string(),
            repo: repo.to_string(),
        }
    }

    fn search_params(&self, group: &str, artifact: &str) -> Vec<(String, String)> {
        vec![
            ("g".to_string(), group.to_string()),
            ("a".to_string(), artifact.to_string()),
            ("repos".to_string(), self.repo.clone()),
        ]
    }

    /// Most recent release (non-integration) version, trimmed of whitespace
    pub async fn get_most_recent_release(
        &self,
        group: &str,
        artifact: &str,
    ) -> Result<String, StacError> {
        let url = format!("{}{}", self.base_url, LATEST_VERSION_PATH);
        let params = self.search_params(group, artifact);
        debug!("Using latest version API at {} - params {:?}", url, params);

        let response = self.fetcher.get(&url, &params).await?;
        debug!("Latest version API answered {}", response.status);
        Ok(response.text().trim().to_string())
    }

    /// Up to `limit` versions with the given integration flag, newest first
    ///
    /// Returns an empty list when nothing matches the integration flag.
    ///
    /// # Errors
    /// * `StacError::InvalidArgument` - `limit` is zero; no request is made
    /// * `StacError::Transport` - the API call failed
    /// * `StacError::MalformedResponse` - the body is not the expected JSON
    pub async fn get_most_recent_versions(
        &self,
        group: &str,
        artifact: &str,
        limit: usize,
        integration: bool,
    ) -> Result<Vec<String>, StacError> {
        if limit < 1 {
            return Err(StacError::InvalidArgument(
                "Releases limit must be positive".to_string(),
            ));
        }

        let url = format!("{}{}", self.base_url, VERSIONS_PATH);
        let params = self.search_params(group, artifact);
        debug!("Using all version API at {} - params {:?}", url, params);

        let response = self.fetcher.get(&url, &params).await?;
        debug!("All version API answered {}", response.status);
        let parsed: VersionsResponse = response
            .json()
            .map_err(|source| StacError::MalformedResponse { url, source })?;

        let mut versions = parsed.versions_matching(integration);
        sort_descending(&mut versions);
        versions.truncate(limit);
        Ok(versions)
    }
}
