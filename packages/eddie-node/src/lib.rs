//! Workflow-node execution layer for the Eddie.surf client.
//!
//! Renders the workflow host's node contract in Rust: a selected
//! operation, a list of input items each carrying its resolved parameter
//! JSON, and a per-item loop that records each item's success or captured
//! error independently.
//!
//! # Example
//!
//! ```rust,ignore
//! use eddie_client::{Credentials, EddieClient};
//! use eddie_node::run;
//! use serde_json::json;
//!
//! let client = EddieClient::new(Credentials::new("your-api-key"));
//! let items = vec![json!({
//!     "urls": "https://example.com",
//!     "context": {},
//!     "jsonSchema": {}
//! })];
//!
//! let results = run(&client, "crawl", &items, true).await?;
//! for result in &results {
//!     println!("item {}: {}", result.paired_item, result.json);
//! }
//! ```

pub mod error;
pub mod executor;
pub mod transport;

pub use error::NodeError;
pub use executor::{run, ExecutionItem, Operation};
pub use transport::Transport;
