// db/remote.rs
use async_trait::async_trait;

use super::store::{BackendKind, Collection, StoreBackend, StoreError};

/// Collections with a provisioned remote schema. Everything else is served
/// as an empty snapshot until the corresponding table lands.
const SCHEMA_BACKED: &[Collection] = &[Collection::Users];

/// Durable store: a thin client over a PostgREST-style query interface
/// (select / upsert per table). Snapshot writes are not implemented on
/// this path — callers get `StoreError::Unimplemented`, which surfaces as
/// a 501 rather than a crash.
pub struct RemoteStore {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RemoteStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        RemoteStore {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self, collection: Collection) -> String {
        format!(
            "{}/rest/v1/{}",
            self.base_url.trim_end_matches('/'),
            collection.table()
        )
    }

    fn is_schema_backed(collection: Collection) -> bool {
        SCHEMA_BACKED.contains(&collection)
    }
}

#[async_trait]
impl StoreBackend for RemoteStore {
    fn kind(&self) -> BackendKind {
        BackendKind::Remote
    }

    async fn load(&self, collection: Collection) -> Result<Option<String>, StoreError> {
        if !Self::is_schema_backed(collection) {
            tracing::debug!(
                "remote table '{}' not provisioned; serving empty collection",
                collection.table()
            );
            return Ok(Some("[]".to_string()));
        }

        let response = self
            .http
            .get(self.endpoint(collection))
            .query(&[("select", "*")])
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?
            .error_for_status()?;

        Ok(Some(response.text().await?))
    }

    async fn save(&self, _collection: Collection, _snapshot: String) -> Result<(), StoreError> {
        Err(StoreError::Unimplemented("collection snapshot writes"))
    }

    async fn upsert(
        &self,
        collection: Collection,
        record: serde_json::Value,
    ) -> Result<(), StoreError> {
        if !Self::is_schema_backed(collection) {
            return Err(StoreError::Unimplemented("upsert on unprovisioned tables"));
        }

        self.http
            .post(self.endpoint(collection))
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Prefer", "resolution=merge-duplicates")
            .json(&record)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unprovisioned_tables_serve_empty_snapshots() {
        let store = RemoteStore::new("https://demo.supabase.co", "anon-key");
        let raw = store.load(Collection::Rides).await.unwrap().unwrap();
        assert_eq!(raw, "[]");
    }

    #[tokio::test]
    async fn test_snapshot_writes_are_unimplemented() {
        let store = RemoteStore::new("https://demo.supabase.co", "anon-key");
        let err = store
            .save(Collection::Rides, "[]".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Unimplemented(_)));
    }
}
