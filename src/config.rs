//! Invocation configuration.
//!
//! Built once by the entry point and passed by value into the pipeline; the
//! pipeline itself never reads the environment. Sources (via clap's `env`
//! support): `S3_BUCKET`, `S3_FILE_KEY`, `API_ENDPOINT`.

use crate::domain::ObjectRef;

/// Fallback delivery endpoint when `API_ENDPOINT` is not set
pub const DEFAULT_ENDPOINT: &str = "https://httpbin.org/put";

/// Everything one invocation needs
#[derive(Debug, Clone)]
pub struct TaskConfig {
    /// Source bucket (required)
    pub bucket: String,
    /// Key of the object to process (required)
    pub key: String,
    /// Delivery endpoint URL
    pub endpoint: String,
}

impl TaskConfig {
    /// Reference to the object this invocation targets
    pub fn object_ref(&self) -> ObjectRef {
        ObjectRef::new(self.bucket.clone(), self.key.clone())
    }
}
