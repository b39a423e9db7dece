//! The pipeline driver.
//!
//! One invocation runs four stages in order against a single object:
//! retrieve, parse/transform, deliver, relocate. Every stage error is
//! contained here and reported as a [`TaskOutcome::Failed`]; nothing below
//! the configuration layer propagates out of [`process_object`].

use thiserror::Error;
use tracing::{error, info, instrument, warn};

use crate::adapters::{DeliverySink, ObjectStorage, StorageError};
use crate::domain::{FailureKind, ObjectRef, TaskOutcome};

use super::transform::{self, TransformError};

/// Content type sent with every delivery
pub const YAML_CONTENT_TYPE: &str = "application/x-yaml";

/// A stage error contained at the per-object boundary
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to retrieve object: {0}")]
    Retrieval(StorageError),
    #[error("object body is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
    #[error(transparent)]
    Parse(#[from] TransformError),
    #[error("failed to relocate object: {0}")]
    Relocation(StorageError),
}

impl PipelineError {
    /// Stage classification for outcome reporting
    pub fn kind(&self) -> FailureKind {
        match self {
            PipelineError::Retrieval(_) | PipelineError::Decode(_) => FailureKind::Retrieval,
            PipelineError::Parse(_) => FailureKind::Parse,
            PipelineError::Relocation(_) => FailureKind::Relocation,
        }
    }
}

/// Run the full pipeline for one object.
///
/// Ineligible keys return [`TaskOutcome::Skipped`] before any storage or
/// network call. Stage errors are logged with the offending key and folded
/// into [`TaskOutcome::Failed`]; this function never returns an error.
#[instrument(skip(storage, sink), fields(bucket = %source.bucket, key = %source.key))]
pub async fn process_object(
    storage: &dyn ObjectStorage,
    sink: &dyn DeliverySink,
    source: &ObjectRef,
) -> TaskOutcome {
    if !source.is_eligible() {
        info!("skipping non-JSON or already processed object");
        return TaskOutcome::Skipped;
    }

    info!("processing JSON object");

    match run_stages(storage, sink, source).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(error = %e, "error processing {}", source.key);
            TaskOutcome::Failed {
                kind: e.kind(),
                detail: e.to_string(),
            }
        }
    }
}

/// Stages 1-4 for an eligible object
async fn run_stages(
    storage: &dyn ObjectStorage,
    sink: &dyn DeliverySink,
    source: &ObjectRef,
) -> Result<TaskOutcome, PipelineError> {
    // Stage 1: retrieve the full body and decode it as UTF-8
    let raw = storage
        .get(&source.bucket, &source.key)
        .await
        .map_err(PipelineError::Retrieval)?;
    let text = String::from_utf8(raw)?;

    // Stage 2: parse the JSON document and render it as YAML
    let yaml = transform::json_to_yaml(&text)?;

    // Stage 3: deliver. A transport failure is fail-open, same as a non-200
    // status: logged, no relocation, not an error.
    let status = match sink.put(yaml, YAML_CONTENT_TYPE).await {
        Ok(status) => {
            info!(status, "delivery response received");
            Some(status)
        }
        Err(e) => {
            warn!(error = %e, "delivery transport failure");
            None
        }
    };

    if status != Some(200) {
        warn!("delivery did not succeed, leaving object at {}", source.key);
        return Ok(TaskOutcome::NotRelocated { status });
    }

    // Stage 4: relocate with copy-then-delete. Not transactional: a delete
    // failure after a successful copy leaves the object at both keys.
    let destination = source.processed_key();
    storage
        .copy(&source.bucket, &source.key, &destination)
        .await
        .map_err(PipelineError::Relocation)?;
    storage
        .delete(&source.bucket, &source.key)
        .await
        .map_err(PipelineError::Relocation)?;

    info!("moved {} to {}", source.key, destination);
    Ok(TaskOutcome::Succeeded)
}
