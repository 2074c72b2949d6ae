//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON
//! - **Classified**: Each variant is either the caller's fault or ours

use serde::{Deserialize, Serialize};

/// Command execution errors.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use docsearch_executor::{Command, DocumentStore, Error, Executor};
///
/// let executor = Executor::new(Arc::new(DocumentStore::new()));
///
/// match executor.execute(Command::DeleteDocument { id: "missing".into() }) {
///     Err(Error::DocumentNotFound { id }) => assert_eq!(id, "missing"),
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Not Found ====================
    /// Document does not exist in the state the command requires
    #[error("document does not exist: {id}")]
    DocumentNotFound {
        /// Document ID from the command
        id: String,
    },

    // ==================== Validation Errors ====================
    /// Command rejected before reaching the store
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Why the command was rejected
        reason: String,
    },

    // ==================== System Errors ====================
    /// Internal error (bug or invariant violation)
    ///
    /// The store itself never fails this way. Transport adapters use it to
    /// report their own failures (payload decoding, I/O) through the same
    /// error type, so every failure classifies as client or server side.
    #[error("internal error: {reason}")]
    Internal {
        /// Description of the failure
        reason: String,
    },
}

impl Error {
    /// True when the caller can fix the request (not found, invalid input).
    ///
    /// A transport maps these to client-error statuses and everything else
    /// to server-error statuses.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::DocumentNotFound { .. } | Error::InvalidInput { .. } => true,
            Error::Internal { .. } => false,
        }
    }
}

impl Error {
    /// Wrap a failure from outside the store as an internal error
    pub fn internal(reason: impl std::fmt::Display) -> Self {
        Error::Internal {
            reason: reason.to_string(),
        }
    }
}

impl From<docsearch_core::Error> for Error {
    fn from(err: docsearch_core::Error) -> Self {
        match err {
            docsearch_core::Error::NotFound(id) => Error::DocumentNotFound {
                id: id.into_inner(),
            },
        }
    }
}
