//! Transport layer for the Artifactory REST API
//!
//! - [`fetcher`]: `HttpFetcher` trait injected into the version resolver
//! - [`reqwest_fetcher`]: Default fetcher backed by `reqwest`
//! - [`error`]: Transport error type

pub mod error;
pub mod fetcher;
pub mod reqwest_fetcher;

pub use error::TransportError;
pub use fetcher::{HttpFetcher, HttpResponse};
pub use reqwest_fetcher::ReqwestFetcher;
