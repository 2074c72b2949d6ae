//! The Executor - single entry point to the document store.
//!
//! The Executor is a stateless dispatcher that validates commands, routes
//! them to the store, and converts results to outputs.

use std::sync::Arc;

use docsearch_engine::DocumentStore;
use tracing::debug;

use crate::handlers;
use crate::{Command, Output, Result};

/// The command executor.
///
/// The Executor is **stateless**: it holds a handle to the store but no
/// state of its own. Cloning it is cheap and every clone sees the same
/// store.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads; the store
/// serializes mutations internally.
#[derive(Debug, Clone)]
pub struct Executor {
    store: Arc<DocumentStore>,
}

impl Executor {
    /// Create a new executor over a store.
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    /// Execute a single command.
    ///
    /// Returns the command result or an error.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        debug!(command = cmd.name(), "Executing command");

        match cmd {
            // Document commands
            Command::UpsertDocument { id, document } => {
                handlers::document::upsert(&self.store, id, document)
            }
            Command::DeleteDocument { id } => handlers::document::delete(&self.store, id),
            Command::RestoreDocument { id } => handlers::document::restore(&self.store, id),
            Command::GetDocument { id } => handlers::document::get(&self.store, id),

            // Search commands
            Command::Search { keyword } => handlers::search::search(&self.store, keyword),
            Command::ListDeleted => handlers::search::list_deleted(&self.store),

            // Store commands
            Command::Stats => Ok(Output::Stats(self.store.stats())),
            Command::Ping => Ok(Output::Pong {
                version: env!("CARGO_PKG_VERSION").to_string(),
            }),
        }
    }

    /// Execute multiple commands sequentially.
    ///
    /// Returns all results in the same order as the input commands.
    /// Execution continues even if some commands fail. Each command is
    /// atomic on its own; the batch as a whole is not.
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    /// Get a reference to the underlying store.
    pub fn store(&self) -> &Arc<DocumentStore> {
        &self.store
    }
}
