//! Version resolution against the Artifactory search API
//!
//! # Modules
//!
//! - [`resolver`]: `VersionResolver` calling the latest-version and versions endpoints
//! - [`loose`]: Lenient version ordering used to sort search results
//! - [`types`]: Response types of the versions endpoint

pub mod loose;
pub mod resolver;
pub mod types;

pub use loose::LooseVersion;
pub use resolver::VersionResolver;
pub use types::{VersionRecord, VersionsResponse};
