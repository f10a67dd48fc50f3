use thiserror::Error;

/// Failure talking to the Artifactory HTTP API
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl TransportError {
    /// HTTP status of the failed response, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Network(e) => e.status().map(|s| s.as_u16()),
            TransportError::Status { status, .. } => Some(*status),
            TransportError::InvalidUrl { .. } => None,
        }
    }

    /// True when the server answered with 404 Not Found
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
