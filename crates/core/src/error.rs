//! Error types for the document store
//!
//! The store has exactly one domain failure: an operation that requires a
//! document in a particular state (active for delete, retained for restore)
//! was given an ID that is not in that state. Failed operations never
//! mutate the store.
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::types::DocId;
use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Document does not exist in the state the operation requires
    #[error("Document does not exist: {0}")]
    NotFound(DocId),
}

impl Error {
    /// Build a NotFound error for the given ID
    pub fn not_found(id: impl Into<DocId>) -> Self {
        Error::NotFound(id.into())
    }

    /// The document ID this error refers to
    pub fn doc_id(&self) -> &DocId {
        match self {
            Error::NotFound(id) => id,
        }
    }

    /// Whether this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}
