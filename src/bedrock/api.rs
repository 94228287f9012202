//! Capability the access checker needs from Bedrock

use async_trait::async_trait;
use std::sync::Arc;

use super::types::{ModelDescriptor, ProbeOutcome};
use crate::error::Result;

/// The two Bedrock calls the checker depends on
///
/// `Err` from either method means the call could not be completed at the
/// transport level and the run must stop. A structured error from the
/// invoke endpoint is an `Ok(ProbeOutcome::ServiceError(..))`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BedrockApi: Send + Sync {
    /// Fetch the foundation model catalog (single page)
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>>;

    /// Invoke `model_id` with an empty JSON body
    async fn invoke_probe(&self, model_id: &str) -> Result<ProbeOutcome>;
}

#[async_trait]
impl<T: BedrockApi + ?Sized> BedrockApi for Arc<T> {
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>> {
        self.as_ref().list_models().await
    }

    async fn invoke_probe(&self, model_id: &str) -> Result<ProbeOutcome> {
        self.as_ref().invoke_probe(model_id).await
    }
}
