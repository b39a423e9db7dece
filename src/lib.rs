//! yaml-courier - single-object JSON to YAML relay task
//!
//! Fetches one JSON object from a bucket, converts it to YAML, delivers the
//! YAML to an HTTP endpoint with PUT, and on a 200 response archives the
//! source object under `processed/` (copy, then delete).
//!
//! # Architecture
//!
//! The pipeline is a strict sequence with per-object error containment:
//! - Ineligible keys (not `.json`, or already under `processed/`) are
//!   skipped before any I/O
//! - Stage failures are contained and reported as an outcome, never raised
//! - A non-200 delivery is fail-open: logged, no relocation, not an error
//! - The copy-then-delete relocation is deliberately not transactional
//!
//! # Modules
//!
//! - `adapters`: capability traits and their S3/HTTP implementations
//! - `core`: the stage driver and the JSON to YAML transform
//! - `domain`: data structures (ObjectRef, TaskOutcome)
//! - `cli`: command-line interface
//!
//! # Usage
//!
//! ```bash
//! S3_BUCKET=b1 S3_FILE_KEY=data/report.json yaml-courier
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;

// Re-export main types at crate root for convenience
pub use crate::core::{json_to_yaml, process_object, PipelineError, YAML_CONTENT_TYPE};
pub use adapters::{
    DeliveryError, DeliverySink, HttpDeliverySink, ObjectStorage, ObjectStoreStorage, StorageError,
};
pub use config::{TaskConfig, DEFAULT_ENDPOINT};
pub use domain::{FailureKind, ObjectRef, TaskOutcome};
