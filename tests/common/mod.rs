//! Common test utilities
//!
//! - [`FakeBedrockApi`]: scripted catalog and per-model probe outcomes
//! - [`fixtures`]: model descriptors and canned Bedrock responses


use async_trait::async_trait;
use bedrock_access_check::{BedrockApi, CheckerError, ModelDescriptor, ProbeOutcome};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory `BedrockApi` returning scripted results
///
/// Models without a scripted outcome succeed.
#[derive(Debug, Default)]
pub struct FakeBedrockApi {
    catalog: Vec<ModelDescriptor>,
    outcomes: HashMap<String, Result<ProbeOutcome, CheckerError>>,
    list_error: Option<CheckerError>,
    probed: Mutex<Vec<String>>,
}

impl FakeBedrockApi {
    pub fn with_catalog(catalog: Vec<ModelDescriptor>) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    pub fn failing_list(error: CheckerError) -> Self {
        Self {
            list_error: Some(error),
            ..Self::default()
        }
    }

    /// Script a service error for one model
    pub fn reply(mut self, model_id: &str, code: &str, message: &str) -> Self {
        self.outcomes.insert(
            model_id.to_string(),
            Ok(ProbeOutcome::service_error(code, message)),
        );
        self
    }

    /// Script a transport failure for one model
    pub fn fail(mut self, model_id: &str, error: CheckerError) -> Self {
        self.outcomes.insert(model_id.to_string(), Err(error));
        self
    }

    /// Model identifiers probed so far, in call order
    pub fn probed(&self) -> Vec<String> {
        self.probed.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl BedrockApi for FakeBedrockApi {
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, CheckerError> {
        match &self.list_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.catalog.clone()),
        }
    }

    async fn invoke_probe(&self, model_id: &str) -> Result<ProbeOutcome, CheckerError> {
        if let Ok(mut probed) = self.probed.lock() {
            probed.push(model_id.to_string());
        }
        self.outcomes
            .get(model_id)
            .cloned()
            .unwrap_or(Ok(ProbeOutcome::Success))
    }
}
