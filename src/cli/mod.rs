//! Command-line interface for yaml-courier.
//!
//! The task is invoked once per object, typically as a container task with
//! configuration in the environment. Missing required configuration is the
//! one error that escapes to the process boundary; every pipeline failure is
//! contained and still exits 0.

use anyhow::{bail, Result};
use clap::Parser;
use tracing::{info, warn};

use crate::adapters::{HttpDeliverySink, ObjectStoreStorage};
use crate::config::{TaskConfig, DEFAULT_ENDPOINT};
use crate::core::process_object;
use crate::domain::TaskOutcome;

/// yaml-courier - fetch a JSON object, relay it as YAML, archive the source
#[derive(Parser, Debug)]
#[command(name = "yaml-courier")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Bucket holding the source object
    #[arg(long, env = "S3_BUCKET")]
    pub bucket: Option<String>,

    /// Key of the object to process
    #[arg(long, env = "S3_FILE_KEY")]
    pub key: Option<String>,

    /// Delivery endpoint URL
    #[arg(long, env = "API_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

impl Cli {
    /// Validate required inputs and build the invocation config
    pub fn into_config(self) -> Result<TaskConfig> {
        let Some(bucket) = self.bucket else {
            bail!("S3_BUCKET environment variable is required");
        };
        let Some(key) = self.key else {
            bail!("S3_FILE_KEY environment variable is required");
        };

        Ok(TaskConfig {
            bucket,
            key,
            endpoint: self.endpoint,
        })
    }

    /// Run one invocation end to end
    pub async fn execute(self) -> Result<()> {
        let config = self.into_config()?;

        info!("starting JSON to YAML converter task");
        info!(bucket = %config.bucket, key = %config.key, "evaluating object");

        let source = config.object_ref();
        let storage = ObjectStoreStorage::for_bucket(&config.bucket)?;
        let sink = HttpDeliverySink::new(&config.endpoint);
        info!(endpoint = sink.endpoint(), "delivery sink ready");

        let outcome = process_object(&storage, &sink, &source).await;

        match outcome {
            TaskOutcome::Skipped => {
                info!("skipped {}: not an unprocessed JSON object", source.key);
            }
            TaskOutcome::Succeeded => {
                info!("task completed successfully");
            }
            TaskOutcome::NotRelocated { status } => {
                info!(?status, "task completed, object left in place");
            }
            TaskOutcome::Failed { kind, detail } => {
                warn!(%kind, "task completed with contained failure: {detail}");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_bucket_is_fatal() {
        let cli = Cli {
            bucket: None,
            key: Some("data/report.json".to_string()),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        };

        let err = cli.into_config().unwrap_err();
        assert!(err.to_string().contains("S3_BUCKET"));
    }

    #[test]
    fn test_missing_key_is_fatal() {
        let cli = Cli {
            bucket: Some("b1".to_string()),
            key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        };

        let err = cli.into_config().unwrap_err();
        assert!(err.to_string().contains("S3_FILE_KEY"));
    }

    #[test]
    fn test_full_config_passes_through() {
        let cli = Cli {
            bucket: Some("b1".to_string()),
            key: Some("data/report.json".to_string()),
            endpoint: "https://example.com/put".to_string(),
        };

        let config = cli.into_config().unwrap();
        assert_eq!(config.bucket, "b1");
        assert_eq!(config.key, "data/report.json");
        assert_eq!(config.endpoint, "https://example.com/put");
        assert_eq!(config.object_ref().processed_key(), "processed/data/report.json");
    }
}
