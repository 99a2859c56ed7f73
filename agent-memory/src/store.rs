//! Memory store capability and a local in-memory implementation.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::record::{EmbeddingRecord, MemoryTier};
use crate::MemoryResult;

/// Interface for memory store clients.
#[async_trait]
pub trait MemoryStore: Send + Sync {
    /// Returns every record of `tier` authored by `author`, in store order.
    ///
    /// `author` is expected in lowercase.
    async fn query_by_author(
        &self,
        tier: MemoryTier,
        author: &str,
    ) -> MemoryResult<Vec<EmbeddingRecord>>;
}

/// Serializable contents of a [`LocalMemoryStore`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemorySnapshot {
    /// Short-term records, in insertion order.
    #[serde(default)]
    pub short_term: Vec<EmbeddingRecord>,
    /// Long-term records, in insertion order.
    #[serde(default)]
    pub long_term: Vec<EmbeddingRecord>,
}

impl MemorySnapshot {
    /// Reads a JSON snapshot from disk.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MemoryError`] when the file cannot be read or a record
    /// fails validation.
    pub async fn load(path: impl AsRef<Path>) -> MemoryResult<Self> {
        let data = tokio::fs::read(path.as_ref()).await?;
        Ok(serde_json::from_slice(&data)?)
    }
}

/// Simple in-memory store keeping both tiers as append-only lists.
#[derive(Debug, Default)]
pub struct LocalMemoryStore {
    tiers: RwLock<HashMap<MemoryTier, Vec<EmbeddingRecord>>>,
}

impl LocalMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated from a snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: MemorySnapshot) -> Self {
        let mut tiers = HashMap::new();
        tiers.insert(MemoryTier::ShortTerm, snapshot.short_term);
        tiers.insert(MemoryTier::LongTerm, snapshot.long_term);
        Self {
            tiers: RwLock::new(tiers),
        }
    }

    /// Appends a record to the given tier.
    pub async fn insert(&self, tier: MemoryTier, record: EmbeddingRecord) {
        let mut guard = self.tiers.write().await;
        guard.entry(tier).or_default().push(record);
    }

    /// Returns the number of records held in `tier`.
    #[must_use]
    pub async fn count(&self, tier: MemoryTier) -> usize {
        let guard = self.tiers.read().await;
        guard.get(&tier).map_or(0, Vec::len)
    }
}

#[async_trait]
impl MemoryStore for LocalMemoryStore {
    async fn query_by_author(
        &self,
        tier: MemoryTier,
        author: &str,
    ) -> MemoryResult<Vec<EmbeddingRecord>> {
        let guard = self.tiers.read().await;
        let records = guard
            .get(&tier)
            .map(|records| {
                records
                    .iter()
                    .filter(|record| record.author() == author)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embeddings::EmbeddingVector;

    fn record(author: &str, document: &str, values: &[f32]) -> EmbeddingRecord {
        EmbeddingRecord::builder(author, EmbeddingVector::from_slice(values).unwrap())
            .document(document)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn filters_by_author_and_tier() {
        let store = LocalMemoryStore::new();
        store
            .insert(MemoryTier::ShortTerm, record("Anna", "coffee", &[1.0, 0.0]))
            .await;
        store
            .insert(MemoryTier::ShortTerm, record("Bea", "tea", &[0.0, 1.0]))
            .await;
        store
            .insert(MemoryTier::LongTerm, record("anna", "school", &[0.5, 0.5]))
            .await;

        let short = store
            .query_by_author(MemoryTier::ShortTerm, "anna")
            .await
            .unwrap();
        assert_eq!(short.len(), 1);
        assert_eq!(short[0].document(), "coffee");

        let long = store
            .query_by_author(MemoryTier::LongTerm, "anna")
            .await
            .unwrap();
        assert_eq!(long.len(), 1);
        assert_eq!(long[0].document(), "school");

        assert!(store
            .query_by_author(MemoryTier::LongTerm, "bea")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn preserves_insertion_order() {
        let store = LocalMemoryStore::new();
        for document in ["first", "second", "third"] {
            store
                .insert(MemoryTier::LongTerm, record("carlo", document, &[1.0]))
                .await;
        }

        let documents: Vec<_> = store
            .query_by_author(MemoryTier::LongTerm, "carlo")
            .await
            .unwrap()
            .iter()
            .map(|record| record.document().to_owned())
            .collect();
        assert_eq!(documents, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn snapshot_populates_both_tiers() {
        let snapshot: MemorySnapshot = serde_json::from_str(
            r#"{
                "short_term": [{"author": "Dario", "document": "a", "embedding": [1.0, 0.0]}],
                "long_term": [
                    {"author": "Dario", "document": "b", "embedding": [0.0, 1.0]},
                    {"author": "Elena", "document": "c", "embedding": [1.0, 1.0]}
                ]
            }"#,
        )
        .unwrap();
        let store = LocalMemoryStore::from_snapshot(snapshot);

        assert_eq!(store.count(MemoryTier::ShortTerm).await, 1);
        assert_eq!(store.count(MemoryTier::LongTerm).await, 2);
    }

    #[tokio::test]
    async fn snapshot_load_reads_file() {
        let mut path = std::env::temp_dir();
        path.push(format!("memory-snapshot-{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(
            &path,
            br#"{"short_term": [{"author": "Franco", "embedding": [0.1, 0.2]}]}"#,
        )
        .await
        .unwrap();

        let snapshot = MemorySnapshot::load(&path).await.unwrap();
        assert_eq!(snapshot.short_term.len(), 1);
        assert!(snapshot.long_term.is_empty());

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn snapshot_load_rejects_invalid_embedding() {
        let mut path = std::env::temp_dir();
        path.push(format!("memory-snapshot-{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, br#"{"long_term": [{"author": "Gino", "embedding": []}]}"#)
            .await
            .unwrap();

        let err = MemorySnapshot::load(&path).await.expect_err("empty embedding");
        assert!(matches!(err, crate::MemoryError::Serialization { .. }));

        let _ = std::fs::remove_file(path);
    }
}
