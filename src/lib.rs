//! docsearch - in-memory document repository with whole-word keyword search
//!
//! Documents are stored under caller-supplied IDs and indexed by their
//! lowercase whitespace-delimited words. Deletion is soft: deleted
//! documents are retained and can be restored.
//!
//! # Quick Start
//!
//! ```
//! use docsearch::{Document, DocumentStore};
//!
//! let store = DocumentStore::new();
//! store.upsert("doc1", Document::new("This is a test document"));
//!
//! assert_eq!(store.search("test"), vec!["doc1"]);
//! ```
//!
//! # Architecture
//!
//! - `docsearch-core`: IDs, documents, the NotFound error
//! - `docsearch-search`: tokenizer and inverted index
//! - `docsearch-engine`: the document store and its configuration
//! - `docsearch-executor`: command surface for request-handling layers
//!
//! Everything a host needs is re-exported from the executor.

// Re-export the public API from docsearch-executor
pub use docsearch_executor::*;
