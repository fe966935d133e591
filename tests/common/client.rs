//! HTTP client for end-to-end tests
//!
//! When API routes or request formats change, update only this file.

use reqwest::Response;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// HTTP test client wrapping reqwest
pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// GET /api/files
    pub async fn list_files(&self) -> Response {
        self.client
            .get(format!("{}/api/files", self.base_url))
            .send()
            .await
            .expect("list_files request failed")
    }

    /// POST /api/retry/{filename}
    pub async fn retry(&self, filename: &str) -> Response {
        self.client
            .post(format!("{}/api/retry/{}", self.base_url, filename))
            .send()
            .await
            .expect("retry request failed")
    }

    /// GET /
    pub async fn home(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("home request failed")
    }
}
