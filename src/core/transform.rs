//! JSON to YAML conversion.
//!
//! The transform goes through `serde_json::Value` so arbitrary documents
//! (scalars, sequences, nested mappings) survive unchanged. Two properties
//! are contractual for downstream consumers: mapping keys keep their
//! document order (serde_json is built with `preserve_order`), and non-ASCII
//! text is emitted literally rather than escaped.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to render YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Convert a JSON document to its YAML representation
pub fn json_to_yaml(input: &str) -> Result<String, TransformError> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    Ok(serde_yaml::to_string(&value)?)
}
