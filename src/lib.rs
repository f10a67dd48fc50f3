//! Artifactory client for resolving artifact versions and download URLs
//!
//! Given a Maven style full name (`com.example.services.auth`), the client
//! asks the Artifactory search API for available versions and builds
//! download URLs following the repository layout.
//!
//! ```no_run
//! use stac::{ArtifactoryClient, ClientConfig, new_maven_client};
//!
//! # async fn run() -> Result<(), stac::StacError> {
//! let config = ClientConfig::new(
//!     "https://artifactory.example.com/artifactory",
//!     "libs-release-local",
//!     false,
//! );
//! let client = new_maven_client(&config)?;
//! let url = client
//!     .get_latest_version("com.example.users.service", "war", None)
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`client`]: `ArtifactoryClient` trait and its generic implementation
//! - [`version`]: Version resolution and lenient version ordering
//! - [`http`]: Injected HTTP fetcher and its `reqwest` implementation
//! - [`config`]: Repository connection settings
//! - [`error`]: Error types

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod version;

pub use client::{
    ArtifactIdentifier, ArtifactUrlGenerator, ArtifactoryClient, DEFAULT_VERSION_LIMIT,
    GenericArtifactoryClient, GenericArtifactoryClientConfig, MavenArtifactUrlGenerator,
    new_maven_client, new_maven_client_with_fetcher,
};
pub use config::ClientConfig;
pub use error::StacError;
pub use http::{HttpFetcher, HttpResponse, ReqwestFetcher, TransportError};
pub use version::VersionResolver;
