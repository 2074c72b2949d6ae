//! Core types for docsearch
//!
//! This module defines the foundational types:
//! - DocId: Opaque caller-supplied identifier for a document
//! - Document: Text document stored and indexed by the engine

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a document
///
/// IDs are opaque strings chosen by the caller; the store never generates
/// them. Any string is accepted, including the empty string.
///
/// `DocId` orders lexicographically so collections of IDs have a
/// deterministic iteration order, and borrows as `str` so maps keyed by
/// `DocId` can be queried with plain string slices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocId(String);

impl DocId {
    /// Create a DocId from anything convertible into a String
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the ID, returning the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for DocId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DocId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DocId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DocId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&DocId> for DocId {
    fn from(id: &DocId) -> Self {
        id.clone()
    }
}

impl PartialEq<str> for DocId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DocId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A stored document
///
/// The store treats documents as immutable values: an update replaces the
/// whole record, it never merges fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Free-form text content; the only indexed field
    pub content: String,
}

impl Document {
    /// Create a document with the given content
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// The document content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl From<&str> for Document {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for Document {
    fn from(content: String) -> Self {
        Self { content }
    }
}
