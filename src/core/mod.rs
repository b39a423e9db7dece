//! Pipeline logic: the stage driver and the JSON to YAML transform.

pub mod pipeline;
pub mod transform;

pub use pipeline::{process_object, PipelineError, YAML_CONTENT_TYPE};
pub use transform::{json_to_yaml, TransformError};
