use serde::Deserialize;

/// Timeout for requests to the Artifactory API in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// Connection settings for one Artifactory repository
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    /// Root of the Artifactory installation, e.g. `https://artifactory.example.com/artifactory`
    pub base_url: String,
    /// Repository searched and downloaded from, e.g. `libs-release-local`
    pub repo: String,
    /// Whether the repository holds SNAPSHOT (integration) versions
    pub is_integration: bool,
    pub username: Option<String>,
    pub password: Option<String>,
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            repo: String::new(),
            is_integration: false,
            username: None,
            password: None,
            timeout_ms: FETCH_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str, repo: &str, is_integration: bool) -> Self {
        Self {
            base_url: base_url.to_string(),
            repo: repo.to_string(),
            is_integration,
            ..Self::default()
        }
    }

    /// Parses a JSON configuration object, using defaults for missing fields
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Username and password, only when both are set
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some((username.as_str(), password.as_str())),
            _ => None,
        }
    }
}
