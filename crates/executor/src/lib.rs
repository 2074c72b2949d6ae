//! # docsearch Executor
//!
//! The command surface of docsearch. A request-handling layer (HTTP, RPC,
//! CLI) translates its requests into [`Command`]s, runs them through an
//! [`Executor`], and maps the [`Output`] or [`Error`] back to its own
//! representation.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use docsearch_executor::{Command, Document, DocumentStore, Executor, Output};
//!
//! let executor = Executor::new(Arc::new(DocumentStore::new()));
//!
//! executor.execute(Command::UpsertDocument {
//!     id: "doc1".into(),
//!     document: Document::new("This is a test document"),
//! })?;
//!
//! let hits = executor.execute(Command::Search { keyword: "Test".into() })?;
//! assert_eq!(hits, Output::DocumentIds(vec!["doc1".into()]));
//! # Ok::<(), docsearch_executor::Error>(())
//! ```
//!
//! ## Error mapping
//!
//! | Error | Meaning | HTTP analogue |
//! |-------|---------|---------------|
//! | `DocumentNotFound` | delete/restore precondition failed | 4xx |
//! | `InvalidInput` | request rejected before reaching the store | 4xx |
//! | `Internal` | unexpected failure | 5xx |

#![warn(missing_docs)]

mod command;
mod error;
mod executor;
mod output;

// Handler modules
mod handlers;


// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use command::Command;
pub use error::Error;
pub use executor::Executor;
pub use output::Output;

pub use docsearch_core::{DocId, Document};
pub use docsearch_engine::{
    ConfigError, DocumentStore, IndexStrategy, StoreConfig, StoreStats, CONFIG_FILE_NAME,
};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
