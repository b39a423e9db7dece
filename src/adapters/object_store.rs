//! Storage adapter over the Apache `object_store` crate.
//!
//! Production runs use AWS S3 configured from the environment (credentials,
//! region) via `AmazonS3Builder::from_env`. Tests construct the adapter over
//! `object_store::memory::InMemory` instead.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use object_store::aws::AmazonS3Builder;
use object_store::path::Path as ObjectPath;
use object_store::ObjectStore as ApacheObjectStore;

use super::{ObjectStorage, StorageError};

/// [`ObjectStorage`] backed by one `object_store` instance per bucket
pub struct ObjectStoreStorage {
    stores: HashMap<String, Arc<dyn ApacheObjectStore>>,
}

impl ObjectStoreStorage {
    /// Build an S3-backed store for a single bucket from the environment
    pub fn for_bucket(bucket: &str) -> Result<Self, StorageError> {
        let store = AmazonS3Builder::from_env()
            .with_bucket_name(bucket)
            .build()
            .map_err(|e| StorageError::Backend {
                message: format!("failed to configure S3 client for bucket '{bucket}': {e}"),
            })?;
        Ok(Self::with_store(bucket, Arc::new(store)))
    }

    /// Wrap an existing store (used by tests with `InMemory`)
    pub fn with_store(bucket: &str, store: Arc<dyn ApacheObjectStore>) -> Self {
        let mut stores = HashMap::new();
        stores.insert(bucket.to_string(), store);
        Self { stores }
    }

    fn store(&self, bucket: &str) -> Result<&Arc<dyn ApacheObjectStore>, StorageError> {
        self.stores.get(bucket).ok_or_else(|| StorageError::UnknownBucket {
            bucket: bucket.to_string(),
        })
    }
}

fn map_store_error(key: &str, err: object_store::Error) -> StorageError {
    match err {
        object_store::Error::NotFound { .. } => StorageError::NotFound {
            key: key.to_string(),
        },
        other => StorageError::Backend {
            message: other.to_string(),
        },
    }
}

#[async_trait]
impl ObjectStorage for ObjectStoreStorage {
    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError> {
        let store = self.store(bucket)?;
        let path = ObjectPath::from(key);

        let result = store.get(&path).await.map_err(|e| map_store_error(key, e))?;
        let bytes = result.bytes().await.map_err(|e| map_store_error(key, e))?;

        Ok(bytes.to_vec())
    }

    async fn copy(&self, bucket: &str, src_key: &str, dst_key: &str) -> Result<(), StorageError> {
        let store = self.store(bucket)?;
        let from = ObjectPath::from(src_key);
        let to = ObjectPath::from(dst_key);

        store.copy(&from, &to).await.map_err(|e| map_store_error(src_key, e))
    }

    async fn delete(&self, bucket: &str, key: &str) -> Result<(), StorageError> {
        let store = self.store(bucket)?;
        let path = ObjectPath::from(key);

        store.delete(&path).await.map_err(|e| map_store_error(key, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use object_store::memory::InMemory;
    use object_store::PutPayload;

    fn memory_storage(bucket: &str) -> (ObjectStoreStorage, Arc<InMemory>) {
        let inner = Arc::new(InMemory::new());
        let storage = ObjectStoreStorage::with_store(bucket, inner.clone());
        (storage, inner)
    }

    #[tokio::test]
    async fn test_get_returns_full_body() {
        let (storage, inner) = memory_storage("b1");
        inner
            .put(
                &ObjectPath::from("data/report.json"),
                PutPayload::from_static(b"{\"x\":1}"),
            )
            .await
            .unwrap();

        let body = storage.get("b1", "data/report.json").await.unwrap();
        assert_eq!(body, b"{\"x\":1}");
    }

    #[tokio::test]
    async fn test_missing_object_maps_to_not_found() {
        let (storage, _inner) = memory_storage("b1");

        let err = storage.get("b1", "absent.json").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound { key } if key == "absent.json"));
    }

    #[tokio::test]
    async fn test_unknown_bucket_is_rejected() {
        let (storage, _inner) = memory_storage("b1");

        let err = storage.get("b2", "data/report.json").await.unwrap_err();
        assert!(matches!(err, StorageError::UnknownBucket { bucket } if bucket == "b2"));
    }

    #[tokio::test]
    async fn test_copy_then_delete_relocates() {
        let (storage, inner) = memory_storage("b1");
        inner
            .put(
                &ObjectPath::from("data/report.json"),
                PutPayload::from_static(b"{\"x\":1}"),
            )
            .await
            .unwrap();

        storage
            .copy("b1", "data/report.json", "processed/data/report.json")
            .await
            .unwrap();
        storage.delete("b1", "data/report.json").await.unwrap();

        let moved = storage.get("b1", "processed/data/report.json").await.unwrap();
        assert_eq!(moved, b"{\"x\":1}");
        assert!(matches!(
            storage.get("b1", "data/report.json").await.unwrap_err(),
            StorageError::NotFound { .. }
        ));
    }
}
