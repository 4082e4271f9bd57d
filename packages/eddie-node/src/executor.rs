//! Host-style per-item execution loop.
//!
//! The node is invoked once with a list of input items; each item carries
//! its own resolved parameter object and is processed as an independent
//! unit of work. With continue-on-failure active, an item's error is
//! captured into its result slot as `{"error": message}` and the loop
//! moves on; otherwise the first error aborts the remaining items.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, warn};

use eddie_client::{
    build_crawl, build_crawl_batch, build_smart_search, build_status, CrawlParams, SearchParams,
    StatusParams,
};

use crate::error::NodeError;
use crate::transport::Transport;

/// One of the four user-selectable actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Crawl,
    CrawlBatch,
    SmartSearch,
    GetStatus,
}

impl Operation {
    /// Parse the host's operation identifier.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "crawl" => Some(Self::Crawl),
            "crawlBatch" => Some(Self::CrawlBatch),
            "smartSearch" => Some(Self::SmartSearch),
            "getStatus" => Some(Self::GetStatus),
            _ => None,
        }
    }
}

/// Result slot for a single input item.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionItem {
    /// Raw JSON returned by the API, or `{"error": message}` for a
    /// captured failure.
    pub json: Value,
    /// Index of the input item this result belongs to.
    pub paired_item: usize,
}

/// Execute `operation` for every item and collect per-item results.
///
/// Each element of `items` is that item's resolved parameter object.
pub async fn run<T: Transport>(
    transport: &T,
    operation: &str,
    items: &[Value],
    continue_on_fail: bool,
) -> Result<Vec<ExecutionItem>, NodeError> {
    let mut results = Vec::with_capacity(items.len());
    for (item_index, params) in items.iter().enumerate() {
        match run_item(transport, operation, params, item_index).await {
            Ok(json) => results.push(ExecutionItem {
                json,
                paired_item: item_index,
            }),
            Err(err) if continue_on_fail => {
                warn!(item_index, error = %err, "Item failed, continuing");
                results.push(ExecutionItem {
                    json: json!({ "error": err.to_string() }),
                    paired_item: item_index,
                });
            }
            Err(err) => return Err(err),
        }
    }
    Ok(results)
}

async fn run_item<T: Transport>(
    transport: &T,
    operation: &str,
    params: &Value,
    item_index: usize,
) -> Result<Value, NodeError> {
    let operation = Operation::parse(operation).ok_or_else(|| NodeError::UnknownOperation {
        operation: operation.to_string(),
        item_index,
    })?;

    // Validation fully precedes transport; a failed build never sends.
    let request = match operation {
        Operation::Crawl => build_crawl(&decode::<CrawlParams>(params, item_index)?),
        Operation::CrawlBatch => build_crawl_batch(&decode::<CrawlParams>(params, item_index)?),
        Operation::SmartSearch => build_smart_search(&decode::<SearchParams>(params, item_index)?),
        Operation::GetStatus => build_status(&decode::<StatusParams>(params, item_index)?),
    }
    .map_err(|source| NodeError::Item { item_index, source })?;

    debug!(item_index, path = %request.path, "Dispatching request");
    transport
        .send(&request)
        .await
        .map_err(|source| NodeError::Item { item_index, source })
}

fn decode<P: DeserializeOwned>(params: &Value, item_index: usize) -> Result<P, NodeError> {
    serde_json::from_value(params.clone())
        .map_err(|source| NodeError::InvalidParams { item_index, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use eddie_client::{EddieError, HttpRequest, Method};
    use std::sync::Mutex;

    /// Records every request; replies with a canned response, or an API
    /// error when `fail_on` matches the request path.
    struct MockTransport {
        sent: Mutex<Vec<HttpRequest>>,
        fail_on: Option<String>,
    }

    impl MockTransport {
        fn new() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail_on: None,
            }
        }

        fn failing_on(path: &str) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail_on: Some(path.to_string()),
            }
        }

        fn sent(&self) -> Vec<HttpRequest> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn send(&self, request: &HttpRequest) -> eddie_client::Result<Value> {
            self.sent.lock().unwrap().push(request.clone());
            if self.fail_on.as_deref() == Some(request.path.as_str()) {
                return Err(EddieError::Api {
                    status: 500,
                    message: "server exploded".into(),
                });
            }
            Ok(json!({ "job_id": "job-1", "status": "queued" }))
        }
    }

    fn crawl_item(urls: &str) -> Value {
        json!({ "urls": urls, "context": {}, "jsonSchema": {} })
    }

    #[tokio::test]
    async fn test_run_crawl_items() {
        let transport = MockTransport::new();
        let items = vec![
            crawl_item("https://a.example.com"),
            crawl_item("https://b.example.com"),
        ];

        let results = run(&transport, "crawl", &items, false).await.unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].paired_item, 0);
        assert_eq!(results[1].paired_item, 1);
        assert_eq!(results[0].json["job_id"], json!("job-1"));

        let sent = transport.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].path, "/crawl");
        assert_eq!(sent[1].body.as_ref().unwrap()["urls"], json!(["https://b.example.com"]));
    }

    #[tokio::test]
    async fn test_get_status_dispatch() {
        let transport = MockTransport::new();
        let items = vec![json!({ "jobType": "smart-search", "jobId": "abc" })];

        let results = run(&transport, "getStatus", &items, false).await.unwrap();

        assert_eq!(results.len(), 1);
        let sent = transport.sent();
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].path, "/smart-search/abc");
    }

    #[tokio::test]
    async fn test_unknown_operation() {
        let transport = MockTransport::new();
        let items = vec![crawl_item("https://a.example.com")];

        let err = run(&transport, "teleport", &items, false).await.unwrap_err();
        assert!(matches!(err, NodeError::UnknownOperation { .. }));
        assert_eq!(err.item_index(), 0);
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn test_validation_failure_never_sends() {
        let transport = MockTransport::new();
        let items = vec![crawl_item("not-a-url")];

        let err = run(&transport, "crawl", &items, false).await.unwrap_err();
        assert!(matches!(err, NodeError::Item { .. }));
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn test_continue_on_fail_captures_error() {
        let transport = MockTransport::new();
        let items = vec![
            crawl_item(""),
            crawl_item("https://b.example.com"),
        ];

        let results = run(&transport, "crawl", &items, true).await.unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(
            results[0].json,
            json!({ "error": "At least one URL is required" })
        );
        assert_eq!(results[0].paired_item, 0);
        assert_eq!(results[1].json["status"], json!("queued"));

        // Only the valid item reached the transport.
        assert_eq!(transport.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_continue_on_fail_captures_transport_error() {
        let transport = MockTransport::failing_on("/smart-search");
        let items = vec![json!({ "query": "find pricing" })];

        let results = run(&transport, "smartSearch", &items, true).await.unwrap();
        assert_eq!(
            results[0].json,
            json!({ "error": "API error (500): server exploded" })
        );
    }

    #[tokio::test]
    async fn test_first_error_aborts_without_continue() {
        let transport = MockTransport::new();
        let items = vec![
            crawl_item("https://a.example.com"),
            crawl_item(""),
            crawl_item("https://c.example.com"),
        ];

        let err = run(&transport, "crawl", &items, false).await.unwrap_err();
        assert_eq!(err.item_index(), 1);
        // Item 2 was never processed.
        assert_eq!(transport.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_params_captured_per_item() {
        let transport = MockTransport::new();
        // `urls` is required for the crawl operation.
        let items = vec![json!({ "context": {} })];

        let err = run(&transport, "crawl", &items, false).await.unwrap_err();
        assert!(matches!(err, NodeError::InvalidParams { .. }));
        assert!(transport.sent().is_empty());
    }
}
