//! Item-scoped errors raised by the execution loop.

use eddie_client::EddieError;
use thiserror::Error;

/// Errors produced while executing a batch of input items.
///
/// Every variant carries the index of the offending item, so a failure
/// can be captured into that item's result slot when continue-on-failure
/// is active.
#[derive(Debug, Error)]
pub enum NodeError {
    /// The selected operation does not match any known builder.
    #[error("Unknown operation: {operation}")]
    UnknownOperation {
        operation: String,
        item_index: usize,
    },

    /// The item's parameters did not decode for the selected operation.
    #[error("Invalid parameters: {source}")]
    InvalidParams {
        item_index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Validation or transport failure from the client.
    #[error("{source}")]
    Item {
        item_index: usize,
        #[source]
        source: EddieError,
    },
}

impl NodeError {
    /// Index of the input item this error belongs to.
    pub fn item_index(&self) -> usize {
        match self {
            Self::UnknownOperation { item_index, .. }
            | Self::InvalidParams { item_index, .. }
            | Self::Item { item_index, .. } => *item_index,
        }
    }
}
