//! Data structures for a single task invocation.
//!
//! Nothing here is persisted. An [`ObjectRef`] identifies the source object
//! for one run and a [`TaskOutcome`] reports how that run ended.

use std::fmt;

/// Prefix under which processed objects are archived
pub const PROCESSED_PREFIX: &str = "processed/";

/// Identifies the source object for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRef {
    /// Bucket holding the object
    pub bucket: String,
    /// Full key of the object within the bucket
    pub key: String,
}

impl ObjectRef {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Whether this object should be processed at all.
    ///
    /// Only `.json` keys are eligible, and keys already under `processed/`
    /// are never picked up again.
    pub fn is_eligible(&self) -> bool {
        self.key.ends_with(".json") && !self.key.starts_with(PROCESSED_PREFIX)
    }

    /// Destination key after a successful relocation
    pub fn processed_key(&self) -> String {
        format!("{}{}", PROCESSED_PREFIX, self.key)
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

/// Which pipeline stage a contained failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Object missing, access denied, or body not valid UTF-8
    Retrieval,
    /// Body was not a well-formed JSON document
    Parse,
    /// Copy or delete failed after a successful delivery
    Relocation,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::Retrieval => "retrieval",
            FailureKind::Parse => "parse",
            FailureKind::Relocation => "relocation",
        };
        f.write_str(name)
    }
}

/// Terminal result of one invocation.
///
/// Every variant is a normal completion from the process's point of view;
/// only a configuration error upstream of the pipeline aborts the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    /// Key was ineligible; no storage or network call was made
    Skipped,
    /// Delivered with status 200 and relocated to `processed/`
    Succeeded,
    /// Delivery came back with a non-200 status (`Some`) or failed at the
    /// transport level (`None`). Fail-open: the object stays where it is.
    NotRelocated { status: Option<u16> },
    /// A stage error was contained at the per-object boundary
    Failed { kind: FailureKind, detail: String },
}

impl TaskOutcome {
    /// Whether the source object was relocated by this run
    pub fn relocated(&self) -> bool {
        matches!(self, TaskOutcome::Succeeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_key_is_eligible() {
        assert!(ObjectRef::new("b1", "data/report.json").is_eligible());
        assert!(ObjectRef::new("b1", "report.json").is_eligible());
    }

    #[test]
    fn test_non_json_key_is_ineligible() {
        assert!(!ObjectRef::new("b1", "report.txt").is_eligible());
        assert!(!ObjectRef::new("b1", "report.yaml").is_eligible());
        assert!(!ObjectRef::new("b1", "report.json.bak").is_eligible());
    }

    #[test]
    fn test_processed_key_is_ineligible() {
        assert!(!ObjectRef::new("b1", "processed/report.json").is_eligible());
        assert!(!ObjectRef::new("b1", "processed/data/report.json").is_eligible());
    }

    #[test]
    fn test_processed_key_keeps_nested_path() {
        let source = ObjectRef::new("b1", "data/report.json");
        assert_eq!(source.processed_key(), "processed/data/report.json");
    }

    #[test]
    fn test_only_succeeded_counts_as_relocated() {
        assert!(TaskOutcome::Succeeded.relocated());
        assert!(!TaskOutcome::Skipped.relocated());
        assert!(!TaskOutcome::NotRelocated { status: Some(503) }.relocated());
        assert!(!TaskOutcome::Failed {
            kind: FailureKind::Parse,
            detail: "bad document".to_string()
        }
        .relocated());
    }
}
