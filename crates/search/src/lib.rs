//! Search infrastructure for docsearch
//!
//! This crate provides:
//! - Whitespace tokenizer with lowercase normalization
//! - InvertedIndex mapping terms to the set of documents containing them
//! - IndexStrategy selecting how documents are removed from the index
//!
//! The index carries no synchronization of its own. It is owned by the
//! document store, which serializes every mutation behind one lock.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod index;
pub mod tokenizer;

// Re-export commonly used types
pub use index::{IndexStrategy, InvertedIndex};
pub use tokenizer::{normalize_term, tokenize, tokenize_unique};
