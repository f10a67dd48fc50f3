use thiserror::Error;

use crate::http::error::TransportError;

/// Errors returned by the version resolver and Artifactory clients
#[derive(Debug, Error)]
pub enum StacError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// No versions matched the query, either because the API answered 404
    /// or because the answer was empty after filtering
    #[error("{message}")]
    NoMatchingVersions {
        message: String,
        #[source]
        cause: Option<TransportError>,
    },

    #[error("Malformed response from {url}: {source}")]
    MalformedResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
