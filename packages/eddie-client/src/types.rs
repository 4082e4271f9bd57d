//! Eddie.surf API parameter and wire types.
//!
//! Parameter types deserialize from the host-resolved, per-item parameter
//! JSON and keep the original camelCase field names. Wire body types
//! serialize to the snake_case fields the API expects, omitting any
//! option that was not provided.

use serde::{Deserialize, Serialize};
use serde_json::Value;

fn empty_object() -> Value {
    Value::Object(Default::default())
}

// =============================================================================
// Operation parameters
// =============================================================================

/// Parameters for the crawl and crawl-batch operations.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlParams {
    /// Comma-separated list of URLs to crawl.
    pub urls: String,

    /// Context object guiding AI processing and data extraction.
    #[serde(default = "empty_object")]
    pub context: Value,

    /// JSON schema defining the structure of data to extract.
    #[serde(default = "empty_object")]
    pub json_schema: Value,

    #[serde(default)]
    pub advanced_options: AdvancedOptions,
}

/// Parameters for the smart-search operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// The search query to find relevant content.
    pub query: String,

    /// Context object guiding AI processing.
    #[serde(default = "empty_object")]
    pub context: Value,

    #[serde(default)]
    pub advanced_options: AdvancedOptions,
}

/// Parameters for the get-status operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusParams {
    /// Type of job to check status for.
    #[serde(default)]
    pub job_type: JobType,

    /// The job ID to check status for.
    pub job_id: String,

    /// Optional: check status of an individual site within a crawl job.
    /// Ignored for smart-search jobs.
    #[serde(default)]
    pub site_id: Option<String>,
}

/// Type of job a status query addresses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[default]
    #[serde(rename = "crawl")]
    Crawl,
    #[serde(rename = "smart-search")]
    SmartSearch,
}

/// Callback mode for job completion notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallbackMode {
    Once,
    Multi,
}

/// Optional secondary parameter group modifying a primary operation's
/// request body.
///
/// Every field is an `Option` so that an explicit `0` or `false` is
/// distinguishable from "not provided": `None` is omitted from the
/// outgoing request, while a present value is validated and transmitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvancedOptions {
    /// Maximum link depth to follow (1-10).
    pub max_depth: Option<u32>,

    /// Maximum number of pages to crawl (at least 1).
    pub max_pages: Option<u32>,

    /// Maximum number of search results to return (1-5000, smart search only).
    pub max_results: Option<u32>,

    /// Whether to search only within the specified websites (smart search only).
    pub website_only: Option<bool>,

    /// Whether to skip results from duplicate domains (smart search only).
    pub skip_duplicate_domains: Option<bool>,

    /// Timeout per page in seconds (1-180).
    pub timeout_per_page: Option<u32>,

    /// Webhook URL for job completion notifications.
    pub callback_url: Option<String>,

    /// Callback mode for notifications.
    pub callback_mode: Option<CallbackMode>,

    /// Comma-separated list of custom processing instructions.
    pub rules: Option<String>,

    /// Whether to include technical data collection.
    pub include_technical: Option<bool>,

    /// Whether to enable test mode without using credits.
    pub mock: Option<bool>,
}

// =============================================================================
// Wire bodies
// =============================================================================

/// Wire body for `POST /crawl` and `POST /crawl-batch`.
#[derive(Debug, Clone, Serialize)]
pub struct CrawlBody {
    pub urls: Vec<String>,
    pub context: Value,
    pub json: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_mode: Option<CallbackMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_technical: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mock: Option<bool>,
}

/// Wire body for `POST /smart-search`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchBody {
    pub query: String,
    pub context: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_duplicate_domains: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mock: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_advanced_options_camel_case() {
        let options: AdvancedOptions = serde_json::from_value(json!({
            "maxDepth": 3,
            "timeoutPerPage": 30,
            "skipDuplicateDomains": true,
            "callbackMode": "multi"
        }))
        .unwrap();

        assert_eq!(options.max_depth, Some(3));
        assert_eq!(options.timeout_per_page, Some(30));
        assert_eq!(options.skip_duplicate_domains, Some(true));
        assert_eq!(options.callback_mode, Some(CallbackMode::Multi));
        assert_eq!(options.max_pages, None);
        assert_eq!(options.mock, None);
    }

    #[test]
    fn test_crawl_params_defaults() {
        let params: CrawlParams = serde_json::from_value(json!({
            "urls": "https://example.com"
        }))
        .unwrap();

        assert_eq!(params.context, json!({}));
        assert_eq!(params.json_schema, json!({}));
        assert_eq!(params.advanced_options.max_depth, None);
    }

    #[test]
    fn test_job_type_wire_names() {
        assert_eq!(
            serde_json::from_value::<JobType>(json!("crawl")).unwrap(),
            JobType::Crawl
        );
        assert_eq!(
            serde_json::from_value::<JobType>(json!("smart-search")).unwrap(),
            JobType::SmartSearch
        );
        // The original node defaults the job type selector to crawl.
        let params: StatusParams = serde_json::from_value(json!({ "jobId": "j1" })).unwrap();
        assert_eq!(params.job_type, JobType::Crawl);
    }

    #[test]
    fn test_crawl_body_omits_absent_options() {
        let body = CrawlBody {
            urls: vec!["https://example.com".into()],
            context: json!({}),
            json: json!({}),
            max_depth: None,
            max_pages: None,
            timeout_per_page: None,
            callback_url: None,
            callback_mode: None,
            include_technical: None,
            rules: None,
            mock: None,
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "urls": ["https://example.com"],
                "context": {},
                "json": {}
            })
        );
    }

    #[test]
    fn test_callback_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_value(CallbackMode::Once).unwrap(), json!("once"));
        assert_eq!(serde_json::to_value(CallbackMode::Multi).unwrap(), json!("multi"));
    }
}
