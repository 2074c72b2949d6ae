//! Output enum for command execution results.
//!
//! Every command produces exactly one output variant; see the table on
//! [`Command`](crate::Command).

use docsearch_core::{DocId, Document};
use docsearch_engine::StoreStats;
use serde::{Deserialize, Serialize};

/// Successful command execution results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// No return value (upsert, delete, restore)
    Unit,

    /// Document IDs in ascending order (search, deleted listing)
    DocumentIds(Vec<DocId>),

    /// Optional document (get)
    MaybeDocument(Option<Document>),

    /// Store counters
    Stats(StoreStats),

    /// Ping response
    Pong {
        /// Crate version
        version: String,
    },
}
