use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use stac::{HttpFetcher, HttpResponse, TransportError};

/// Fetcher answering from canned responses keyed by URL path suffix
#[derive(Default)]
pub struct StaticFetcher {
    responses: HashMap<String, Result<String, u16>>,
    calls: AtomicUsize,
    last_params: Mutex<Vec<(String, String)>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, path: &str, body: &str) -> Self {
        self.responses
            .insert(path.to_string(), Ok(body.to_string()));
        self
    }

    pub fn with_status(mut self, path: &str, status: u16) -> Self {
        self.responses.insert(path.to_string(), Err(status));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_params(&self) -> Vec<(String, String)> {
        self.last_params.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpFetcher for StaticFetcher {
    async fn get(
        &self,
        url: &str,
        params: &[(String, String)],
    ) -> Result<HttpResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_params.lock().unwrap() = params.to_vec();

        let response = self
            .responses
            .iter()
            .find(|(path, _)| url.ends_with(path.as_str()))
            .map(|(_, response)| response.clone());

        match response {
            Some(Ok(body)) => Ok(HttpResponse::new(200, body)),
            Some(Err(status)) => Err(TransportError::Status {
                url: url.to_string(),
                status,
            }),
            None => Err(TransportError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}

/// JSON body of the versions endpoint for the given (version, integration) pairs
pub fn versions_body(records: &[(&str, bool)]) -> String {
    let results: Vec<serde_json::Value> = records
        .iter()
        .map(|(version, integration)| {
            serde_json::json!({"version": version, "integration": integration})
        })
        .collect();
    serde_json::json!({ "results": results }).to_string()
}
