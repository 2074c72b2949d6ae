//! Document store engine for docsearch
//!
//! This crate ties the lower layers together:
//! - DocumentStore: active/retained documents plus the inverted index,
//!   kept consistent under one lock
//! - StoreConfig: `docsearch.toml` configuration
//! - StoreStats: counters for introspection
//!
//! The engine is the only component that mutates the index; callers go
//! through the store so index and documents never drift apart.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod store;

pub use config::{ConfigError, StoreConfig, CONFIG_FILE_NAME};
pub use docsearch_search::IndexStrategy;
pub use store::{DocumentStore, StoreStats};
