//! Core types for docsearch
//!
//! This crate defines the foundational types used throughout the system:
//! - DocId: Caller-supplied document identifier
//! - Document: The stored document value
//! - Error: The single domain error (document not found)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{DocId, Document};
