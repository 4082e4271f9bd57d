//! Transport seam between the execution loop and the HTTP client.

use async_trait::async_trait;
use eddie_client::{EddieClient, HttpRequest};
use serde_json::Value;

/// An authenticated sender for prepared requests.
///
/// The execution loop only talks to the API through this trait, so tests
/// can substitute a recording mock instead of a network client.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &HttpRequest) -> eddie_client::Result<Value>;
}

#[async_trait]
impl Transport for EddieClient {
    async fn send(&self, request: &HttpRequest) -> eddie_client::Result<Value> {
        EddieClient::send(self, request).await
    }
}
