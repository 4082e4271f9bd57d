//! Pure Eddie.surf REST API client.
//!
//! A minimal client for the Eddie.surf web-crawling and smart-search API.
//! Supports submitting crawl and smart-search jobs, checking job status,
//! and verifying credentials. Crawling and searching happen entirely
//! server-side; responses are forwarded as raw JSON.
//!
//! # Example
//!
//! ```rust,ignore
//! use eddie_client::{Credentials, EddieClient, SearchParams};
//!
//! let client = EddieClient::new(Credentials::new("your-api-key"));
//!
//! let job = client
//!     .smart_search(&SearchParams {
//!         query: "company pricing pages".into(),
//!         context: serde_json::json!({}),
//!         advanced_options: Default::default(),
//!     })
//!     .await?;
//! println!("{job}");
//! ```

pub mod credentials;
pub mod error;
pub mod request;
pub mod types;

pub use credentials::{Credentials, AUTH_HEADER, DEFAULT_BASE_URL};
pub use error::{EddieError, Result};
pub use request::{
    build_crawl, build_crawl_batch, build_smart_search, build_status, HttpRequest, Method,
};
pub use types::*;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

/// Authenticated Eddie.surf API client.
#[derive(Debug, Clone)]
pub struct EddieClient {
    http: Client,
    credentials: Credentials,
}

impl EddieClient {
    /// Create a client with the given credentials.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            http: Client::new(),
            credentials,
        }
    }

    /// Create from `EDDIE_API_KEY` and, if set, `EDDIE_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(Credentials::from_env()?))
    }

    /// The base URL outbound requests resolve against.
    pub fn base_url(&self) -> &str {
        &self.credentials.base_url
    }

    /// Send a prepared request with authentication and parse the JSON
    /// response. Non-2xx responses surface as [`EddieError::Api`].
    pub async fn send(&self, request: &HttpRequest) -> Result<Value> {
        let url = format!("{}{}", self.credentials.base_url, request.path);
        let mut builder = match request.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
        };
        builder = builder.header(AUTH_HEADER, self.credentials.api_key.as_str());
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        debug!(path = %request.path, "Sending Eddie.surf request");
        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EddieError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }

    /// Submit a crawl job for 1-199 URLs.
    pub async fn crawl(&self, params: &CrawlParams) -> Result<Value> {
        let request = build_crawl(params)?;
        info!(path = %request.path, "Starting crawl job");
        self.send(&request).await
    }

    /// Submit a batch crawl job for 200 or more URLs.
    pub async fn crawl_batch(&self, params: &CrawlParams) -> Result<Value> {
        let request = build_crawl_batch(params)?;
        info!(path = %request.path, "Starting batch crawl job");
        self.send(&request).await
    }

    /// Submit an AI-powered smart search.
    pub async fn smart_search(&self, params: &SearchParams) -> Result<Value> {
        let request = build_smart_search(params)?;
        info!(path = %request.path, "Starting smart search");
        self.send(&request).await
    }

    /// Fetch the status of a crawl or smart-search job.
    pub async fn job_status(&self, params: &StatusParams) -> Result<Value> {
        self.send(&build_status(params)?).await
    }

    /// Credential test: `GET /health`.
    pub async fn health(&self) -> Result<Value> {
        self.send(&Credentials::test_request()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_base_url() {
        let client = EddieClient::new(
            Credentials::new("ed-test").with_base_url("https://staging.eddie.surf"),
        );
        assert_eq!(client.base_url(), "https://staging.eddie.surf");
    }
}
