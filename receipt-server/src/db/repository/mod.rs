//! Repository Module
//!
//! The storage seam for receipts. Handlers only see the [`ReceiptStore`]
//! trait; the concrete backend (SurrealDB or in-memory) is chosen at
//! startup and injected through [`crate::core::ServerState`].

pub mod memory;
pub mod receipt;

// Re-exports
pub use memory::MemoryReceiptStore;
pub use receipt::ReceiptRepository;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;
use thiserror::Error;

use crate::db::models::Receipt;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Storage timeout after {0}ms")]
    Timeout(u64),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Storage contract for receipts
///
/// One document per receipt, keyed by the generated identifier. Stored
/// receipts are never mutated; there are exactly two operations.
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    /// Persist a receipt under its id
    ///
    /// The receipt must already carry an id. A duplicate id is a storage
    /// error (ids are 128-bit random, so this is never expected).
    async fn insert(&self, receipt: Receipt) -> RepoResult<Receipt>;

    /// Load a receipt by id, `None` if absent
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Receipt>>;
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Client>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Client>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Client> {
        &self.db
    }
}
