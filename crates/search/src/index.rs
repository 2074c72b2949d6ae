//! Inverted index for whole-word keyword search
//!
//! This module provides:
//! - InvertedIndex mapping a normalized term to the set of document IDs
//! - IndexStrategy choosing how a document's entries are found on removal
//! - Version counter bumped on every state change
//!
//! # Invariants
//!
//! - A document appears at most once in a term's set.
//! - A term whose set becomes empty is removed from the index; absence of
//!   a term means no indexed document contains it.
//!
//! # Removal strategies
//!
//! `Scan` keeps only the forward map and removes a document by visiting
//! every term. `ReverseMap` additionally tracks the terms of each document
//! so removal only touches that document's own terms. Both produce the
//! same index contents.

use crate::tokenizer::{normalize_term, tokenize};
use docsearch_core::DocId;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::BTreeSet;

// ============================================================================
// IndexStrategy
// ============================================================================

/// How the index locates a document's entries when removing it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexStrategy {
    /// Visit every term on removal. No per-document bookkeeping.
    #[default]
    Scan,
    /// Keep a document -> terms map; removal visits only the document's terms.
    ReverseMap,
}

impl IndexStrategy {
    /// Strategy name as written in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexStrategy::Scan => "scan",
            IndexStrategy::ReverseMap => "reverse_map",
        }
    }
}

// ============================================================================
// InvertedIndex
// ============================================================================

/// Inverted index from term to document IDs
///
/// # Thread Safety
///
/// None. All mutation goes through `&mut self`; the owner is responsible for
/// serializing access together with whatever document state the index
/// mirrors.
#[derive(Debug, Clone)]
pub struct InvertedIndex {
    /// Term -> documents containing the term
    postings: FxHashMap<String, BTreeSet<DocId>>,

    /// Document -> its indexed terms (only for `IndexStrategy::ReverseMap`)
    doc_terms: Option<FxHashMap<DocId, BTreeSet<String>>>,

    strategy: IndexStrategy,

    /// Bumped on every add/remove that changes the index
    version: u64,
}

impl Default for InvertedIndex {
    fn default() -> Self {
        Self::new(IndexStrategy::default())
    }
}

impl InvertedIndex {
    /// Create an empty index using the given removal strategy
    pub fn new(strategy: IndexStrategy) -> Self {
        let doc_terms = match strategy {
            IndexStrategy::Scan => None,
            IndexStrategy::ReverseMap => Some(FxHashMap::default()),
        };
        InvertedIndex {
            postings: FxHashMap::default(),
            doc_terms,
            strategy,
            version: 0,
        }
    }

    /// The removal strategy in use
    pub fn strategy(&self) -> IndexStrategy {
        self.strategy
    }

    /// Current version watermark
    pub fn version(&self) -> u64 {
        self.version
    }

    // ========================================================================
    // Index Updates
    // ========================================================================

    /// Associate `id` with every term in `tokens`
    ///
    /// Tokens are expected to be normalized already (see [`tokenize`]).
    /// Adding an existing id/term pair is a no-op, so duplicate tokens are
    /// harmless. Returns the number of new memberships created.
    pub fn add<I, T>(&mut self, id: &DocId, tokens: I) -> usize
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut added = 0;

        for token in tokens {
            let term: String = token.into();

            if let Some(doc_terms) = self.doc_terms.as_mut() {
                doc_terms
                    .entry(id.clone())
                    .or_default()
                    .insert(term.clone());
            }

            if self.postings.entry(term).or_default().insert(id.clone()) {
                added += 1;
            }
        }

        if added > 0 {
            self.version += 1;
        }
        added
    }

    /// Tokenize `text` and add the resulting terms for `id`
    pub fn index_document(&mut self, id: &DocId, text: &str) -> usize {
        self.add(id, tokenize(text))
    }

    /// Remove `id` from every term, dropping terms left with no documents
    ///
    /// Returns the number of terms `id` was removed from. Removing an id
    /// that is not indexed is a no-op returning 0.
    pub fn remove(&mut self, id: &str) -> usize {
        let removed = match self.strategy {
            IndexStrategy::Scan => self.remove_by_scan(id),
            IndexStrategy::ReverseMap => self.remove_by_reverse_map(id),
        };

        if removed > 0 {
            self.version += 1;
        }
        removed
    }

    fn remove_by_scan(&mut self, id: &str) -> usize {
        let mut removed = 0;
        self.postings.retain(|_, ids| {
            if ids.remove(id) {
                removed += 1;
            }
            !ids.is_empty()
        });
        removed
    }

    fn remove_by_reverse_map(&mut self, id: &str) -> usize {
        let terms = match self.doc_terms.as_mut().and_then(|m| m.remove(id)) {
            Some(terms) => terms,
            None => return 0,
        };

        let mut removed = 0;
        for term in terms {
            if let Entry::Occupied(mut entry) = self.postings.entry(term) {
                if entry.get_mut().remove(id) {
                    removed += 1;
                }
                if entry.get().is_empty() {
                    entry.remove();
                }
            }
        }
        removed
    }

    // ========================================================================
    // Query
    // ========================================================================

    /// Documents containing `term`
    ///
    /// The term is normalized before lookup. Returns an empty vector when the
    /// term is not indexed; IDs are in ascending order.
    pub fn lookup(&self, term: &str) -> Vec<DocId> {
        self.postings
            .get(normalize_term(term).as_str())
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Raw posting set for an already-normalized term
    pub fn postings(&self, term: &str) -> Option<&BTreeSet<DocId>> {
        self.postings.get(term)
    }

    /// Whether the index holds an entry for the exact (normalized) term
    pub fn contains_term(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    /// Number of documents containing `term` (normalized before lookup)
    pub fn doc_freq(&self, term: &str) -> usize {
        self.postings
            .get(normalize_term(term).as_str())
            .map_or(0, BTreeSet::len)
    }

    /// All indexed terms in ascending order
    pub fn terms(&self) -> Vec<String> {
        let mut terms: Vec<String> = self.postings.keys().cloned().collect();
        terms.sort_unstable();
        terms
    }

    /// Number of distinct terms
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Whether the index holds no terms at all
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
