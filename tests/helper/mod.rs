#![allow(dead_code)]

pub mod fetcher;

pub use fetcher::{StaticFetcher, versions_body};
