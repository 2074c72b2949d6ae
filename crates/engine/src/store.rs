//! Document store with soft deletion and keyword search
//!
//! The store owns three pieces of state:
//! - active documents (live and searchable)
//! - retained documents (soft-deleted, restorable, not searchable)
//! - the inverted index over active documents
//!
//! Each document ID is in exactly one of three states:
//!
//! ```text
//!            upsert                delete
//!   absent ──────────▶ active ──────────────▶ retained
//!                      │  ▲ ◀──────────────────┘
//!                upsert└──┘        restore
//! ```
//!
//! # Invariants
//!
//! - Every active document is fully represented in the index, and the index
//!   holds nothing that is not in an active document's current content.
//! - Retained documents have no index entries.
//! - Active and retained sets are disjoint.
//! - The index never holds a term with no documents.
//!
//! # Thread Safety
//!
//! A single `RwLock` covers all three pieces of state. Every mutation runs
//! under the write guard from start to finish, so no caller can observe a
//! document stored without its index entries or vice versa. Per-document
//! locking would not be sound: index terms are shared across documents.

use crate::config::StoreConfig;
use docsearch_core::{DocId, Document, Error, Result};
use docsearch_search::{normalize_term, tokenize, IndexStrategy, InvertedIndex};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Point-in-time counters describing the store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    /// Number of active documents
    pub active_documents: usize,
    /// Number of retained (soft-deleted) documents
    pub retained_documents: usize,
    /// Number of distinct terms in the index
    pub indexed_terms: usize,
    /// Index version watermark
    pub index_version: u64,
}

/// State guarded by the store lock
#[derive(Debug)]
struct StoreState {
    /// Active documents by ID
    /// BTreeMap for deterministic iteration
    active: BTreeMap<DocId, Document>,
    /// Retained (soft-deleted) documents by ID
    retained: BTreeMap<DocId, Document>,
    index: InvertedIndex,
}

impl StoreState {
    fn new(strategy: IndexStrategy) -> Self {
        Self {
            active: BTreeMap::new(),
            retained: BTreeMap::new(),
            index: InvertedIndex::new(strategy),
        }
    }

    /// Insert or replace an active document and rebuild its index entries.
    ///
    /// Prior entries are removed before the new content is indexed, so a
    /// replacement never leaves terms from the old version behind.
    fn upsert(&mut self, id: DocId, document: Document) {
        let replaced = self.active.contains_key(&id);
        let removed = if replaced {
            self.index.remove(id.as_str())
        } else {
            0
        };

        // A retained copy under the same ID is superseded by the new document.
        let superseded = self.retained.remove(&id).is_some();

        let tokens = tokenize(&document.content);
        let token_count = tokens.len();
        let added = self.index.add(&id, tokens);

        debug!(
            id = %id,
            replaced,
            superseded,
            tokens = token_count,
            removed_entries = removed,
            added_entries = added,
            "Upserted document"
        );

        self.active.insert(id, document);
    }
}

/// In-memory document store
///
/// Construct one explicitly and share it by handle (`Arc<DocumentStore>`)
/// with whatever serves requests; a fresh instance per test keeps tests
/// isolated.
///
/// # Example
///
/// ```
/// use docsearch_engine::DocumentStore;
/// use docsearch_core::Document;
///
/// let store = DocumentStore::new();
/// store.upsert("doc1", Document::new("This is a test document"));
/// assert_eq!(store.search("TEST"), vec!["doc1"]);
///
/// store.delete("doc1").unwrap();
/// assert!(store.search("test").is_empty());
/// assert_eq!(store.list_deleted(), vec!["doc1"]);
///
/// store.restore("doc1").unwrap();
/// assert_eq!(store.search("test"), vec!["doc1"]);
/// ```
#[derive(Debug)]
pub struct DocumentStore {
    state: RwLock<StoreState>,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore {
    /// Create an empty store with the default configuration
    pub fn new() -> Self {
        Self::with_config(&StoreConfig::default())
    }

    /// Create an empty store from configuration
    pub fn with_config(config: &StoreConfig) -> Self {
        info!(
            index_strategy = config.index_strategy.as_str(),
            "Created document store"
        );
        Self {
            state: RwLock::new(StoreState::new(config.index_strategy)),
        }
    }

    /// The index removal strategy this store was built with
    pub fn index_strategy(&self) -> IndexStrategy {
        self.state.read().index.strategy()
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Insert a document, or replace the active document with the same ID
    ///
    /// Always succeeds. Afterward the ID is active and the index reflects
    /// exactly the new content. If the ID was retained, the retained copy is
    /// discarded in favor of the new document.
    pub fn upsert(&self, id: impl Into<DocId>, document: Document) {
        self.state.write().upsert(id.into(), document);
    }

    /// Soft-delete an active document
    ///
    /// The document moves to the retained set and all of its index entries
    /// are removed.
    ///
    /// # Errors
    ///
    /// `Error::NotFound` if the ID is not active. The store is unchanged.
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut state = self.state.write();

        let (id, document) = match state.active.remove_entry(id) {
            Some(entry) => entry,
            None => {
                warn!(id, "Delete of document that is not active");
                return Err(Error::not_found(id));
            }
        };

        let removed = state.index.remove(id.as_str());
        debug!(id = %id, removed_entries = removed, "Deleted document");

        state.retained.insert(id, document);
        Ok(())
    }

    /// Restore a retained document to the active set
    ///
    /// Runs the full upsert path with the retained content, rebuilding its
    /// index entries.
    ///
    /// # Errors
    ///
    /// `Error::NotFound` if the ID is not retained. The store is unchanged.
    pub fn restore(&self, id: &str) -> Result<()> {
        let mut state = self.state.write();

        let (id, document) = match state.retained.remove_entry(id) {
            Some(entry) => entry,
            None => {
                warn!(id, "Restore of document that is not retained");
                return Err(Error::not_found(id));
            }
        };

        debug!(id = %id, "Restoring document");
        state.upsert(id, document);
        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// IDs of active documents containing `keyword` as a whole word
    ///
    /// Case-insensitive. Unknown keywords return an empty vector. IDs are
    /// in ascending order and never repeat.
    pub fn search(&self, keyword: &str) -> Vec<DocId> {
        let state = self.state.read();
        let hits = state.index.lookup(keyword);
        debug!(keyword = %normalize_term(keyword), hits = hits.len(), "Search");
        hits
    }

    /// IDs of all retained documents, in ascending order
    pub fn list_deleted(&self) -> Vec<DocId> {
        self.state.read().retained.keys().cloned().collect()
    }

    /// The active document with this ID, if any
    pub fn get(&self, id: &str) -> Option<Document> {
        self.state.read().active.get(id).cloned()
    }

    /// The retained document with this ID, if any
    pub fn get_deleted(&self, id: &str) -> Option<Document> {
        self.state.read().retained.get(id).cloned()
    }

    /// Whether the ID is active
    pub fn contains(&self, id: &str) -> bool {
        self.state.read().active.contains_key(id)
    }

    /// Whether the ID is retained
    pub fn is_deleted(&self, id: &str) -> bool {
        self.state.read().retained.contains_key(id)
    }

    /// IDs of all active documents, in ascending order
    pub fn active_ids(&self) -> Vec<DocId> {
        self.state.read().active.keys().cloned().collect()
    }

    /// Raw index lookup for a term (normalized first)
    ///
    /// Equivalent to [`search`](Self::search) without logging; exposed for
    /// consistency checks against the index.
    pub fn lookup(&self, term: &str) -> Vec<DocId> {
        self.state.read().index.lookup(term)
    }

    /// All indexed terms in ascending order
    pub fn indexed_terms(&self) -> Vec<String> {
        self.state.read().index.terms()
    }

    /// Current counters
    pub fn stats(&self) -> StoreStats {
        let state = self.state.read();
        StoreStats {
            active_documents: state.active.len(),
            retained_documents: state.retained.len(),
            indexed_terms: state.index.term_count(),
            index_version: state.index.version(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
