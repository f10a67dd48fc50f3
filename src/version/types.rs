use serde::Deserialize;

/// One entry of the `/api/search/versions` response
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct VersionRecord {
    pub version: String,
    pub integration: bool,
}

/// Body of the `/api/search/versions` response
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct VersionsResponse {
    pub results: Vec<VersionRecord>,
}

impl VersionsResponse {
    /// Versions whose integration flag equals `integration`, in response order
    pub fn versions_matching(self, integration: bool) -> Vec<String> {
        self.results
            .into_iter()
            .filter(|record| record.integration == integration)
            .map(|record| record.version)
            .collect()
    }
}
