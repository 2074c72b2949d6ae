//! Search command handlers.
//!
//! Keyword validation lives here rather than in the store: the store
//! accepts any string and simply finds nothing for it.

use docsearch_engine::DocumentStore;

use crate::{Error, Output, Result};

/// Handle Search command
pub fn search(store: &DocumentStore, keyword: String) -> Result<Output> {
    if keyword.is_empty() {
        return Err(Error::InvalidInput {
            reason: "Keyword must not be empty".to_string(),
        });
    }
    Ok(Output::DocumentIds(store.search(&keyword)))
}

/// Handle ListDeleted command
pub fn list_deleted(store: &DocumentStore) -> Result<Output> {
    Ok(Output::DocumentIds(store.list_deleted()))
}
