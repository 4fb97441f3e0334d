// db/local.rs
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::store::{BackendKind, Collection, StoreBackend, StoreError};

/// Fallback store: one JSON file per collection under a data directory.
/// Single-device persistence for when no remote store is configured.
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub async fn open(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(LocalStore { root })
    }

    fn path(&self, collection: Collection) -> PathBuf {
        self.root.join(format!("{}.json", collection.key()))
    }
}

#[async_trait]
impl StoreBackend for LocalStore {
    fn kind(&self) -> BackendKind {
        BackendKind::Local
    }

    async fn load(&self, collection: Collection) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path(collection)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, collection: Collection, snapshot: String) -> Result<(), StoreError> {
        fs::write(self.path(collection), snapshot).await?;
        Ok(())
    }

    async fn upsert(
        &self,
        collection: Collection,
        record: serde_json::Value,
    ) -> Result<(), StoreError> {
        let mut records: Vec<serde_json::Value> = match self.load(collection).await? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };

        let id = record.get("id").cloned();
        match records
            .iter_mut()
            .find(|existing| id.is_some() && existing.get("id") == id.as_ref())
        {
            Some(existing) => *existing = record,
            None => records.push(record),
        }

        self.save(collection, serde_json::to_string(&records)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn scratch_store() -> LocalStore {
        let dir = std::env::temp_dir().join(format!("campus_connect_test_{}", uuid::Uuid::new_v4()));
        LocalStore::open(&dir).await.unwrap()
    }

    #[tokio::test]
    async fn test_load_returns_none_before_first_save() {
        let store = scratch_store().await;
        assert!(store.load(Collection::Rides).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let store = scratch_store().await;
        store
            .save(Collection::Bills, r#"[{"id":"b1"}]"#.to_string())
            .await
            .unwrap();
        let raw = store.load(Collection::Bills).await.unwrap().unwrap();
        assert_eq!(raw, r#"[{"id":"b1"}]"#);
    }

    #[tokio::test]
    async fn test_upsert_replaces_matching_id_and_appends_new() {
        let store = scratch_store().await;
        store
            .upsert(Collection::Users, json!({"id": "u1", "name": "A"}))
            .await
            .unwrap();
        store
            .upsert(Collection::Users, json!({"id": "u1", "name": "B"}))
            .await
            .unwrap();
        store
            .upsert(Collection::Users, json!({"id": "u2", "name": "C"}))
            .await
            .unwrap();

        let raw = store.load(Collection::Users).await.unwrap().unwrap();
        let records: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["name"], "B");
        assert_eq!(records[1]["id"], "u2");
    }
}
