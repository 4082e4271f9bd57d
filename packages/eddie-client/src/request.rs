//! Request builders: validate user parameters and translate them into
//! HTTP request descriptors ready for an authenticated client to send.
//!
//! Each builder is a pure, single-pass transformation. Validation fully
//! precedes descriptor construction, so a request that fails validation
//! is never built, let alone sent.

use serde::Serialize;
use serde_json::Value;

use crate::error::{EddieError, Result};
use crate::types::{CrawlBody, CrawlParams, JobType, SearchBody, SearchParams, StatusParams};

/// Maximum URL count for the crawl operation; more requires crawl-batch.
const CRAWL_MAX_URLS: usize = 199;

/// Minimum URL count for the crawl-batch operation.
const BATCH_MIN_URLS: usize = 200;

/// HTTP method of a request descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fully validated request descriptor.
///
/// Paths are relative; the authenticated client resolves them against the
/// credential's base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl HttpRequest {
    pub(crate) fn get(path: String) -> Self {
        Self {
            method: Method::Get,
            path,
            body: None,
        }
    }

    fn post<B: Serialize>(path: &str, body: &B) -> Result<Self> {
        Ok(Self {
            method: Method::Post,
            path: path.to_string(),
            body: Some(serde_json::to_value(body)?),
        })
    }
}

/// Build a `POST /crawl` request for 1-199 URLs.
pub fn build_crawl(params: &CrawlParams) -> Result<HttpRequest> {
    let urls = split_csv(&params.urls);
    if urls.is_empty() {
        return Err(EddieError::Validation("At least one URL is required".into()));
    }
    if urls.len() > CRAWL_MAX_URLS {
        return Err(EddieError::Validation(
            "Crawl operation supports maximum 199 URLs. Use Crawl Batch for more.".into(),
        ));
    }
    check_url_schemes(&urls)?;

    let body = crawl_body(urls, params)?;
    HttpRequest::post("/crawl", &body)
}

/// Build a `POST /crawl-batch` request for 200 or more URLs.
pub fn build_crawl_batch(params: &CrawlParams) -> Result<HttpRequest> {
    let urls = split_csv(&params.urls);
    if urls.is_empty() {
        return Err(EddieError::Validation("At least one URL is required".into()));
    }
    if urls.len() < BATCH_MIN_URLS {
        return Err(EddieError::Validation(
            "Crawl Batch requires minimum 200 URLs. Use Crawl for fewer URLs.".into(),
        ));
    }
    check_url_schemes(&urls)?;

    let body = crawl_body(urls, params)?;
    HttpRequest::post("/crawl-batch", &body)
}

/// Build a `POST /smart-search` request.
pub fn build_smart_search(params: &SearchParams) -> Result<HttpRequest> {
    let query = params.query.trim();
    if query.is_empty() {
        return Err(EddieError::Validation("Search query is required".into()));
    }

    let options = &params.advanced_options;
    let body = SearchBody {
        query: query.to_string(),
        context: params.context.clone(),
        max_results: checked_range(
            options.max_results,
            1,
            5000,
            "Max Results must be between 1 and 5000",
        )?,
        website_only: options.website_only,
        skip_duplicate_domains: options.skip_duplicate_domains,
        rules: rules_list(options.rules.as_deref()),
        callback_url: non_empty(options.callback_url.as_deref()),
        mock: options.mock,
    };
    HttpRequest::post("/smart-search", &body)
}

/// Build a `GET` status request for a crawl or smart-search job.
///
/// For crawl jobs a non-empty site ID narrows the query to an individual
/// site within the job; smart-search jobs ignore the site ID.
pub fn build_status(params: &StatusParams) -> Result<HttpRequest> {
    let job_id = params.job_id.trim();
    if job_id.is_empty() {
        return Err(EddieError::Validation("Job ID is required".into()));
    }

    let path = match params.job_type {
        JobType::SmartSearch => format!("/smart-search/{job_id}"),
        JobType::Crawl => {
            let site_id = params
                .site_id
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty());
            match site_id {
                Some(site_id) => format!("/crawl/{job_id}/{site_id}"),
                None => format!("/crawl/{job_id}"),
            }
        }
    };
    Ok(HttpRequest::get(path))
}

fn crawl_body(urls: Vec<String>, params: &CrawlParams) -> Result<CrawlBody> {
    let options = &params.advanced_options;
    Ok(CrawlBody {
        urls,
        context: params.context.clone(),
        json: params.json_schema.clone(),
        max_depth: checked_range(options.max_depth, 1, 10, "Max Depth must be between 1 and 10")?,
        max_pages: checked_range(options.max_pages, 1, u32::MAX, "Max Pages must be at least 1")?,
        timeout_per_page: checked_range(
            options.timeout_per_page,
            1,
            180,
            "Timeout Per Page must be between 1 and 180 seconds",
        )?,
        callback_url: non_empty(options.callback_url.as_deref()),
        callback_mode: options.callback_mode,
        include_technical: options.include_technical,
        rules: rules_list(options.rules.as_deref()),
        mock: options.mock,
    })
}

/// Split a comma-separated list, trimming entries and dropping empties.
fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn check_url_schemes(urls: &[String]) -> Result<()> {
    for url in urls {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(EddieError::Validation(format!(
                "Invalid URL format: {url} (must start with http:// or https://)"
            )));
        }
    }
    Ok(())
}

/// Validate a present numeric option against its allowed range. An
/// explicitly provided out-of-range value (including 0) is rejected
/// rather than silently dropped.
fn checked_range(value: Option<u32>, min: u32, max: u32, message: &str) -> Result<Option<u32>> {
    match value {
        Some(v) if v < min || v > max => Err(EddieError::Validation(message.into())),
        other => Ok(other),
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Comma-split a rules string; the field is omitted entirely when no
/// non-empty rule remains.
fn rules_list(raw: Option<&str>) -> Option<Vec<String>> {
    let rules = split_csv(raw?);
    if rules.is_empty() {
        None
    } else {
        Some(rules)
    }
}
