//! Document command handlers.

use docsearch_core::{DocId, Document};
use docsearch_engine::DocumentStore;

use crate::{Output, Result};

/// Handle UpsertDocument command
pub fn upsert(store: &DocumentStore, id: DocId, document: Document) -> Result<Output> {
    store.upsert(id, document);
    Ok(Output::Unit)
}

/// Handle DeleteDocument command
pub fn delete(store: &DocumentStore, id: DocId) -> Result<Output> {
    store.delete(id.as_str())?;
    Ok(Output::Unit)
}

/// Handle RestoreDocument command
pub fn restore(store: &DocumentStore, id: DocId) -> Result<Output> {
    store.restore(id.as_str())?;
    Ok(Output::Unit)
}

/// Handle GetDocument command
pub fn get(store: &DocumentStore, id: DocId) -> Result<Output> {
    Ok(Output::MaybeDocument(store.get(id.as_str())))
}
