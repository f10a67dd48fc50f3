//! Layout agnostic Artifactory client

use std::sync::Arc;

use tracing::debug;

use crate::client::ArtifactoryClient;
use crate::client::identifier::ArtifactIdentifier;
use crate::client::url::ArtifactUrlGenerator;
use crate::error::StacError;
use crate::http::error::TransportError;
use crate::version::resolver::VersionResolver;

/// Components a [`GenericArtifactoryClient`] is built from
pub struct GenericArtifactoryClientConfig {
    /// Whether the repository holds integration (SNAPSHOT) versions, which
    /// need a different API call to find the latest version
    pub is_integration: bool,
    pub resolver: VersionResolver,
    pub url_generator: Arc<dyn ArtifactUrlGenerator>,
}

/// Artifactory client usable with any repository layout
///
/// The layout only matters to the [`ArtifactUrlGenerator`]. The client is
/// immutable after construction and can be shared between tasks.
pub struct GenericArtifactoryClient {
    is_integration: bool,
    resolver: VersionResolver,
    urls: Arc<dyn ArtifactUrlGenerator>,
}

impl GenericArtifactoryClient {
    pub fn new(config: GenericArtifactoryClientConfig) -> Self {
        Self {
            is_integration: config.is_integration,
            resolver: config.resolver,
            urls: config.url_generator,
        }
    }

    pub fn is_integration(&self) -> bool {
        self.is_integration
    }

    async fn latest_release(&self, id: &ArtifactIdentifier) -> Result<String, StacError> {
        let version = self
            .resolver
            .get_most_recent_release(&id.group, &id.name)
            .await?;
        if version.is_empty() {
            return Err(self.no_matching_versions(id, None));
        }
        Ok(version)
    }

    async fn latest_snapshot(&self, id: &ArtifactIdentifier) -> Result<String, StacError> {
        let versions = self
            .resolver
            .get_most_recent_versions(&id.group, &id.name, 1, true)
            .await?;
        versions
            .into_iter()
            .next()
            .ok_or_else(|| self.no_matching_versions(id, None))
    }

    /// Maps a 404 from the API to `NoMatchingVersions`, leaving other errors alone
    fn translate_not_found(&self, id: &ArtifactIdentifier, err: StacError) -> StacError {
        match err {
            StacError::Transport(e) if e.is_not_found() => self.no_matching_versions(id, Some(e)),
            other => other,
        }
    }

    fn no_matching_versions(
        &self,
        id: &ArtifactIdentifier,
        cause: Option<TransportError>,
    ) -> StacError {
        let version_type = if self.is_integration {
            "integration"
        } else {
            "non-integration"
        };
        StacError::NoMatchingVersions {
            message: format!(
                "No {version_type} versions of {}.{} could be found. It might be the case that \
                 there have not been any {version_type} deployments done yet.",
                id.group, id.name
            ),
            cause,
        }
    }
}

#[async_trait::async_trait]
impl ArtifactoryClient for GenericArtifactoryClient {
    fn get_version_url(
        &self,
        full_name: &str,
        packaging: &str,
        version: &str,
        descriptor: Option<&str>,
    ) -> Result<String, StacError> {
        let id = ArtifactIdentifier::parse(full_name)?;
        Ok(self
            .urls
            .get_url(&id.group, &id.name, packaging, version, descriptor))
    }

    async fn get_latest_version_number(&self, full_name: &str) -> Result<String, StacError> {
        let id = ArtifactIdentifier::parse(full_name)?;
        let result = if self.is_integration {
            self.latest_snapshot(&id).await
        } else {
            self.latest_release(&id).await
        };

        let version = result.map_err(|e| self.translate_not_found(&id, e))?;
        debug!("Latest version of {} is {}", full_name, version);
        Ok(version)
    }

    async fn get_latest_version_numbers(
        &self,
        full_name: &str,
        limit: usize,
    ) -> Result<Vec<String>, StacError> {
        if limit < 1 {
            return Err(StacError::InvalidArgument(
                "Releases limit must be positive".to_string(),
            ));
        }

        let id = ArtifactIdentifier::parse(full_name)?;
        let versions = self
            .resolver
            .get_most_recent_versions(&id.group, &id.name, limit, self.is_integration)
            .await
            .map_err(|e| self.translate_not_found(&id, e))?;

        if versions.is_empty() {
            return Err(self.no_matching_versions(&id, None));
        }
        debug!("Latest {} versions of {}: {:?}", limit, full_name, versions);
        Ok(versions)
    }

    async fn get_latest_version(
        &self,
        full_name: &str,
        packaging: &str,
        descriptor: Option<&str>,
    ) -> Result<String, StacError> {
        let version = self.get_latest_version_number(full_name).await?;
        self.get_version_url(full_name, packaging, &version, descriptor)
    }

    async fn get_latest_versions(
        &self,
        full_name: &str,
        packaging: &str,
        descriptor: Option<&str>,
        limit: usize,
    ) -> Result<Vec<String>, StacError> {
        let versions = self.get_latest_version_numbers(full_name, limit).await?;
        versions
            .iter()
            .map(|version| self.get_version_url(full_name, packaging, version, descriptor))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::url::MavenArtifactUrlGenerator;
    use crate::http::fetcher::{HttpResponse, MockHttpFetcher};
    use rstest::rstest;
    use std::error::Error as _;

    const BASE: &str = "https://www.example.com/artifactory";

    fn client_with(fetcher: MockHttpFetcher, is_integration: bool) -> GenericArtifactoryClient {
        let repo = if is_integration {
            "libs-snapshot"
        } else {
            "libs-release"
        };
        GenericArtifactoryClient::new(GenericArtifactoryClientConfig {
            is_integration,
            resolver: VersionResolver::new(Arc::new(fetcher), BASE, repo),
            url_generator: Arc::new(MavenArtifactUrlGenerator::new(BASE, repo)),
        })
    }

    fn versions_body(records: &[(&str, bool)]) -> String {
        let results: Vec<serde_json::Value> = records
            .iter()
            .map(|(v, i)| serde_json::json!({"version": v, "integration": i}))
            .collect();
        serde_json::json!({ "results": results }).to_string()
    }

    fn status_error(status: u16) -> TransportError {
        TransportError::Status {
            url: format!("{BASE}/api/search/versions"),
            status,
        }
    }

    #[test]
    fn get_version_url_makes_no_requests() {
        let mut fetcher = MockHttpFetcher::new();
        fetcher.expect_get().never();

        let url = client_with(fetcher, false).get_version_url(
            "com.example.services.login",
            "jar",
            "3.9.1",
            None,
        );

        assert_eq!(
            url.unwrap(),
            "https://www.example.com/artifactory/libs-release/com/example/services/login/3.9.1/login-3.9.1.jar"
        );
    }

    #[rstest]
    #[case("com.example.")]
    #[case("")]
    fn get_version_url_rejects_empty_artifact_name(#[case] full_name: &str) {
        let mut fetcher = MockHttpFetcher::new();
        fetcher.expect_get().never();

        let result = client_with(fetcher, false).get_version_url(full_name, "jar", "1.0", None);

        assert!(matches!(result, Err(StacError::InvalidArgument(_))));
    }

    #[rstest]
    #[case(false)]
    #[case(true)]
    #[tokio::test]
    async fn get_latest_version_rejects_empty_artifact_name_without_request(
        #[case] is_integration: bool,
    ) {
        let mut fetcher = MockHttpFetcher::new();
        fetcher.expect_get().never();
        let client = client_with(fetcher, is_integration);

        let latest = client.get_latest_version("com.example.", "jar", None).await;
        let versions = client
            .get_latest_versions("com.example.", "jar", None, 5)
            .await;

        assert!(matches!(latest, Err(StacError::InvalidArgument(_))));
        assert!(matches!(versions, Err(StacError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn get_latest_version_release_uses_latest_version_endpoint() {
        let mut fetcher = MockHttpFetcher::new();
        fetcher
            .expect_get()
            .withf(|url, _| url.ends_with("/api/search/latestVersion"))
            .times(1)
            .returning(|_, _| Ok(HttpResponse::new(200, "4.13.4")));

        let url = client_with(fetcher, false)
            .get_latest_version("com.example.users.service", "war", None)
            .await
            .unwrap();

        assert_eq!(
            url,
            "https://www.example.com/artifactory/libs-release/com/example/users/service/4.13.4/service-4.13.4.war"
        );
    }

    #[tokio::test]
    async fn get_latest_version_snapshot_uses_versions_endpoint() {
        let body = versions_body(&[
            ("1.2.1-SNAPSHOT", true),
            ("1.3.0-SNAPSHOT", true),
            ("1.2.0", false),
        ]);
        let mut fetcher = MockHttpFetcher::new();
        fetcher
            .expect_get()
            .withf(|url, _| url.ends_with("/api/search/versions"))
            .times(1)
            .returning(move |_, _| Ok(HttpResponse::new(200, body.clone())));

        let client = client_with(fetcher, true);
        let url = client
            .get_latest_version("com.example.users.service", "jar", Some("sources"))
            .await
            .unwrap();

        assert_eq!(
            url,
            "https://www.example.com/artifactory/libs-snapshot/com/example/users/service/1.3.0-SNAPSHOT/service-1.3.0-SNAPSHOT-sources.jar"
        );
    }

    #[tokio::test]
    async fn get_latest_version_snapshot_without_snapshots_is_no_matching_versions() {
        let body = versions_body(&[("1.2.0", false)]);
        let mut fetcher = MockHttpFetcher::new();
        fetcher
            .expect_get()
            .returning(move |_, _| Ok(HttpResponse::new(200, body.clone())));

        let result = client_with(fetcher, true)
            .get_latest_version("com.example.users.service", "jar", None)
            .await;

        match result {
            Err(StacError::NoMatchingVersions { message, cause }) => {
                assert!(cause.is_none());
                assert_eq!(
                    message,
                    "No integration versions of com.example.users.service could be found. It \
                     might be the case that there have not been any integration deployments \
                     done yet."
                );
            }
            other => panic!("expected NoMatchingVersions, got {:?}", other),
        }
    }

    #[rstest]
    #[case(false)]
    #[case(true)]
    #[tokio::test]
    async fn get_latest_version_maps_not_found(#[case] is_integration: bool) {
        let mut fetcher = MockHttpFetcher::new();
        fetcher
            .expect_get()
            .returning(|_, _| Err(status_error(404)));

        let result = client_with(fetcher, is_integration)
            .get_latest_version("com.example.users.service", "jar", None)
            .await;

        let err = result.unwrap_err();
        assert!(matches!(
            err,
            StacError::NoMatchingVersions { cause: Some(_), .. }
        ));
        assert!(err.source().is_some());
    }

    #[tokio::test]
    async fn get_latest_version_passes_other_statuses_through() {
        let mut fetcher = MockHttpFetcher::new();
        fetcher
            .expect_get()
            .returning(|_, _| Err(status_error(500)));

        let result = client_with(fetcher, false)
            .get_latest_version("com.example.users.service", "jar", None)
            .await;

        assert!(matches!(
            result,
            Err(StacError::Transport(TransportError::Status { status: 500, .. }))
        ));
    }

    #[tokio::test]
    async fn get_latest_version_release_with_empty_body_is_no_matching_versions() {
        let mut fetcher = MockHttpFetcher::new();
        fetcher
            .expect_get()
            .returning(|_, _| Ok(HttpResponse::new(200, "\n")));

        let result = client_with(fetcher, false)
            .get_latest_version_number("com.example.users.service")
            .await;

        assert!(matches!(
            result,
            Err(StacError::NoMatchingVersions { cause: None, .. })
        ));
    }

    #[rstest]
    #[case(false)]
    #[case(true)]
    #[tokio::test]
    async fn get_latest_versions_rejects_zero_limit_without_request(#[case] is_integration: bool) {
        let mut fetcher = MockHttpFetcher::new();
        fetcher.expect_get().never();

        let result = client_with(fetcher, is_integration)
            .get_latest_versions("com.example.users.service", "jar", None, 0)
            .await;

        assert!(matches!(result, Err(StacError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn get_latest_versions_release_returns_urls_newest_first() {
        let body = versions_body(&[
            ("1.1.1", false),
            ("1.2.1", false),
            ("1.3.0-SNAPSHOT", true),
            ("1.2.0", false),
        ]);
        let mut fetcher = MockHttpFetcher::new();
        fetcher
            .expect_get()
            .times(1)
            .returning(move |_, _| Ok(HttpResponse::new(200, body.clone())));

        let urls = client_with(fetcher, false)
            .get_latest_versions("com.example.users.service", "jar", None, 2)
            .await
            .unwrap();

        assert_eq!(
            urls,
            vec![
                "https://www.example.com/artifactory/libs-release/com/example/users/service/1.2.1/service-1.2.1.jar",
                "https://www.example.com/artifactory/libs-release/com/example/users/service/1.2.0/service-1.2.0.jar",
            ]
        );
    }

    #[tokio::test]
    async fn get_latest_version_numbers_snapshot_returns_versions() {
        let body = versions_body(&[
            ("1.1.0-SNAPSHOT", true),
            ("1.3.0-SNAPSHOT", true),
            ("1.2.1-SNAPSHOT", true),
        ]);
        let mut fetcher = MockHttpFetcher::new();
        fetcher
            .expect_get()
            .returning(move |_, _| Ok(HttpResponse::new(200, body.clone())));

        let versions = client_with(fetcher, true)
            .get_latest_version_numbers("com.example.users.service", 3)
            .await
            .unwrap();

        assert_eq!(
            versions,
            vec!["1.3.0-SNAPSHOT", "1.2.1-SNAPSHOT", "1.1.0-SNAPSHOT"]
        );
    }

    #[tokio::test]
    async fn get_latest_versions_with_no_matches_is_no_matching_versions() {
        let body = versions_body(&[("1.3.0-SNAPSHOT", true)]);
        let mut fetcher = MockHttpFetcher::new();
        fetcher
            .expect_get()
            .returning(move |_, _| Ok(HttpResponse::new(200, body.clone())));

        let result = client_with(fetcher, false)
            .get_latest_versions("com.example.users.service", "jar", None, 5)
            .await;

        assert!(matches!(
            result,
            Err(StacError::NoMatchingVersions { cause: None, .. })
        ));
    }

    #[rstest]
    #[case(404, true)]
    #[case(401, false)]
    #[case(503, false)]
    #[tokio::test]
    async fn get_latest_versions_only_maps_not_found(
        #[case] status: u16,
        #[case] expect_no_matching: bool,
    ) {
        let mut fetcher = MockHttpFetcher::new();
        fetcher
            .expect_get()
            .returning(move |_, _| Err(status_error(status)));

        let result = client_with(fetcher, false)
            .get_latest_versions("com.example.users.service", "jar", None, 5)
            .await;

        match result {
            Err(StacError::NoMatchingVersions { .. }) => assert!(expect_no_matching),
            Err(StacError::Transport(e)) => {
                assert!(!expect_no_matching);
                assert_eq!(e.status(), Some(status));
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[tokio::test]
    async fn get_latest_versions_with_malformed_response_fails() {
        let mut fetcher = MockHttpFetcher::new();
        fetcher
            .expect_get()
            .returning(|_, _| Ok(HttpResponse::new(200, r#"{"versions": []}"#)));

        let result = client_with(fetcher, false)
            .get_latest_versions("com.example.users.service", "jar", None, 5)
            .await;

        assert!(matches!(result, Err(StacError::MalformedResponse { .. })));
    }

    #[tokio::test]
    async fn concurrent_calls_share_one_client() {
        let mut fetcher = MockHttpFetcher::new();
        fetcher
            .expect_get()
            .times(8)
            .returning(|_, _| Ok(HttpResponse::new(200, "2.0.0")));

        let client = Arc::new(client_with(fetcher, false));
        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let client = Arc::clone(&client);
                tokio::spawn(async move {
                    client
                        .get_latest_version("org.app", "jar", None)
                        .await
                        .unwrap()
                })
            })
            .collect();

        for result in futures::future::join_all(tasks).await {
            assert_eq!(
                result.unwrap(),
                "https://www.example.com/artifactory/libs-release/org/app/2.0.0/app-2.0.0.jar"
            );
        }
    }
}
