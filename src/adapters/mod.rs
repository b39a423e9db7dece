//! Capability interfaces for external systems.
//!
//! The pipeline talks to object storage and to the delivery endpoint only
//! through these traits, so tests can substitute in-memory fakes for both.

pub mod http;
pub mod object_store;

use async_trait::async_trait;
use thiserror::Error;

pub use self::http::HttpDeliverySink;
pub use self::object_store::ObjectStoreStorage;

/// Errors from the object-storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object not found: {key}")]
    NotFound { key: String },
    #[error("no store configured for bucket '{bucket}'")]
    UnknownBucket { bucket: String },
    #[error("storage backend error: {message}")]
    Backend { message: String },
}

/// Transport-level delivery failure (DNS, connect, TLS, mid-body abort).
///
/// A response with a non-200 status is NOT a `DeliveryError`; the sink
/// returns the status code and the pipeline decides what to do with it.
#[derive(Debug, Error)]
#[error("delivery transport error: {message}")]
pub struct DeliveryError {
    pub message: String,
}

/// Object storage capability: get, server-side copy, delete by key
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Fetch the full body of an object
    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError>;

    /// Copy an object to a new key within the same bucket
    async fn copy(&self, bucket: &str, src_key: &str, dst_key: &str) -> Result<(), StorageError>;

    /// Delete an object
    async fn delete(&self, bucket: &str, key: &str) -> Result<(), StorageError>;
}

/// Delivery capability: PUT a payload, report the response status
#[async_trait]
pub trait DeliverySink: Send + Sync {
    /// Send `body` as the full request body and return the HTTP status code
    async fn put(&self, body: String, content_type: &str) -> Result<u16, DeliveryError>;
}
