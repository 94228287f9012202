//! # bedrock-access-check
//!
//! Finds out which AWS Bedrock foundation models the current credentials
//! are allowed to invoke.
//!
//! The checker lists a region's model catalog, sends every model an empty
//! `{}` `InvokeModel` request and reads the error code that comes back.
//! Bedrock checks authorization before it validates the body, so:
//!
//! - `AccessDeniedException` means invoke permission is missing;
//! - `ResourceNotFoundException` means the model is unavailable in the region;
//! - a validation-type error (or success) means the permission is granted;
//! - anything else is reported as an error with its raw code.
//!
//! No inference is performed and no tokens are billed.
//!
//! ## Library use
//!
//! ```rust,no_run
//! use bedrock_access_check::{AccessChecker, AwsCredentials, BedrockClient, CheckerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CheckerConfig::from_env();
//!     let credentials = AwsCredentials::resolve(&config.region).await?;
//!     let client = BedrockClient::new(&config, credentials)?;
//!
//!     let report = AccessChecker::new(config.region.clone(), client).run().await?;
//!     println!("{:?}", report.buckets.granted_model_ids());
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod app;
pub mod bedrock;
pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;

// Re-export main types
pub use bedrock::{AwsCredentials, BedrockApi, BedrockClient, ModelDescriptor, ProbeOutcome};
pub use checker::{AccessChecker, AccessStatus, CheckReport, ClassificationResult, ReportBuckets};
pub use config::CheckerConfig;
pub use error::{CheckerError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
