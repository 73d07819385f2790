//! Receipt Repository
//!
//! SurrealDB-backed [`ReceiptStore`]. Every operation is bounded by the
//! configured per-operation timeout; a timeout surfaces as a storage error
//! (no retries).

use std::future::IntoFuture;
use std::time::Duration;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use super::{BaseRepository, ReceiptStore, RepoError, RepoResult};
use crate::db::models::Receipt;

const TABLE: &str = "receipt";

#[derive(Clone)]
pub struct ReceiptRepository {
    base: BaseRepository,
    op_timeout: Duration,
}

impl ReceiptRepository {
    pub fn new(db: Surreal<Client>, op_timeout: Duration) -> Self {
        Self {
            base: BaseRepository::new(db),
            op_timeout,
        }
    }

    /// Bound a storage operation by the per-operation timeout
    async fn bounded<F, T>(&self, fut: F) -> RepoResult<T>
    where
        F: IntoFuture<Output = Result<T, surrealdb::Error>>,
    {
        match tokio::time::timeout(self.op_timeout, fut).await {
            Ok(result) => result.map_err(RepoError::from),
            Err(_) => Err(RepoError::Timeout(self.op_timeout.as_millis() as u64)),
        }
    }
}

#[async_trait]
impl ReceiptStore for ReceiptRepository {
    async fn insert(&self, receipt: Receipt) -> RepoResult<Receipt> {
        let id = receipt
            .id
            .clone()
            .ok_or_else(|| RepoError::Database("Receipt is missing an id".to_string()))?;

        // The id is the record key; the document body carries the rest.
        // SurrealDB rejects a second create under the same key.
        let created: Option<Receipt> = self
            .bounded(self.base.db().create((TABLE, id.as_str())).content(receipt))
            .await?;

        let mut created =
            created.ok_or_else(|| RepoError::Database("Failed to store receipt".to_string()))?;
        created.id = Some(id);
        Ok(created)
    }

    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Receipt>> {
        let found: Option<Receipt> = self.bounded(self.base.db().select((TABLE, id))).await?;

        Ok(found.map(|mut receipt| {
            receipt.id = Some(id.to_string());
            receipt
        }))
    }
}
