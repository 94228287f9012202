//! AWS Bedrock access
//!
//! Control-plane catalog listing and data-plane invoke probes over
//! SigV4-signed HTTP, behind the [`BedrockApi`] capability.

mod api;
mod client;
pub mod credentials;
pub mod error;
pub mod region;
pub mod sigv4;
mod types;

pub use api::BedrockApi;
pub use client::{BedrockClient, PROBE_BODY};
pub use credentials::AwsCredentials;
pub use error::ServiceError;
pub use region::{AWS_REGIONS, is_known_region};
pub use types::{ListFoundationModelsResponse, ModelDescriptor, ProbeOutcome};

#[cfg(test)]
pub use api::MockBedrockApi;
