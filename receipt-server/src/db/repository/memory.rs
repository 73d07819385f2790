//! In-Memory Receipt Store
//!
//! Concurrent map implementation of [`ReceiptStore`]. Backs the `memory`
//! storage backend for local development and is the substitutable fake for
//! tests. Data does not survive restarts.

use async_trait::async_trait;
use dashmap::DashMap;

use super::{ReceiptStore, RepoError, RepoResult};
use crate::db::models::Receipt;

#[derive(Debug, Default)]
pub struct MemoryReceiptStore {
    receipts: DashMap<String, Receipt>,
}

impl MemoryReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored receipts
    pub fn len(&self) -> usize {
        self.receipts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receipts.is_empty()
    }
}

#[async_trait]
impl ReceiptStore for MemoryReceiptStore {
    async fn insert(&self, receipt: Receipt) -> RepoResult<Receipt> {
        let id = receipt
            .id
            .clone()
            .ok_or_else(|| RepoError::Database("Receipt is missing an id".to_string()))?;

        if self.receipts.contains_key(&id) {
            return Err(RepoError::Duplicate(format!(
                "Receipt {} already exists",
                id
            )));
        }

        self.receipts.insert(id, receipt.clone());
        Ok(receipt)
    }

    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Receipt>> {
        Ok(self.receipts.get(id).map(|entry| entry.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::Receipt;

    fn receipt(id: &str) -> Receipt {
        Receipt {
            id: Some(id.to_string()),
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![],
            total: "35.35".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_then_find_returns_stored_receipt() {
        let store = MemoryReceiptStore::new();
        store.insert(receipt("r1")).await.unwrap();

        let found = store.find_by_id("r1").await.unwrap().unwrap();
        assert_eq!(found.retailer, "Target");
        assert_eq!(found.id.as_deref(), Some("r1"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn find_unknown_id_returns_none() {
        let store = MemoryReceiptStore::new();
        assert!(store.find_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_insert_is_an_error() {
        let store = MemoryReceiptStore::new();
        store.insert(receipt("r1")).await.unwrap();

        let err = store.insert(receipt("r1")).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn insert_without_id_is_rejected() {
        let store = MemoryReceiptStore::new();
        let mut r = receipt("r1");
        r.id = None;

        let err = store.insert(r).await.unwrap_err();
        assert!(matches!(err, RepoError::Database(_)));
        assert!(store.is_empty());
    }
}
