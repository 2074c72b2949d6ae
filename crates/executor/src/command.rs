//! Command enum defining all docsearch operations.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON by a transport layer
//! - **Pure data**: No closures or executable code

use docsearch_core::{DocId, Document};
use serde::{Deserialize, Serialize};

/// A command is a self-contained, serializable operation.
///
/// | Command | Returns |
/// |---------|---------|
/// | `UpsertDocument` | `Output::Unit` |
/// | `DeleteDocument` | `Output::Unit` |
/// | `RestoreDocument` | `Output::Unit` |
/// | `Search` | `Output::DocumentIds` |
/// | `ListDeleted` | `Output::DocumentIds` |
/// | `GetDocument` | `Output::MaybeDocument` |
/// | `Stats` | `Output::Stats` |
/// | `Ping` | `Output::Pong` |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Documents ====================
    /// Insert a document or replace the active one with the same ID.
    UpsertDocument {
        /// Caller-supplied document ID
        id: DocId,
        /// Document to store
        document: Document,
    },

    /// Soft-delete an active document.
    DeleteDocument {
        /// Document ID
        id: DocId,
    },

    /// Restore a soft-deleted document.
    RestoreDocument {
        /// Document ID
        id: DocId,
    },

    /// Read an active document.
    GetDocument {
        /// Document ID
        id: DocId,
    },

    // ==================== Search ====================
    /// Whole-word, case-insensitive keyword search. The keyword must not be empty.
    Search {
        /// Keyword to look up
        keyword: String,
    },

    /// IDs of all soft-deleted documents.
    ListDeleted,

    // ==================== Store ====================
    /// Store counters.
    Stats,

    /// Liveness check.
    Ping,
}

impl Command {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Command::UpsertDocument { .. } => "UpsertDocument",
            Command::DeleteDocument { .. } => "DeleteDocument",
            Command::RestoreDocument { .. } => "RestoreDocument",
            Command::GetDocument { .. } => "GetDocument",
            Command::Search { .. } => "Search",
            Command::ListDeleted => "ListDeleted",
            Command::Stats => "Stats",
            Command::Ping => "Ping",
        }
    }
}
