//! Wire types for the Bedrock calls the checker makes

use serde::{Deserialize, Serialize};

use super::error::ServiceError;

/// One foundation model from the region's catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    pub model_id: String,
    #[serde(default)]
    pub model_name: String,
    #[serde(default)]
    pub provider_name: String,
}

impl ModelDescriptor {
    pub fn new(
        model_id: impl Into<String>,
        model_name: impl Into<String>,
        provider_name: impl Into<String>,
    ) -> Self {
        Self {
            model_id: model_id.into(),
            model_name: model_name.into(),
            provider_name: provider_name.into(),
        }
    }
}

/// `ListFoundationModels` response body
///
/// Only the fields the checker reads are modelled; the rest of each
/// summary (modalities, lifecycle, inference types) is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFoundationModelsResponse {
    #[serde(default)]
    pub model_summaries: Vec<ModelDescriptor>,
}

/// Raw observation of one invoke probe, before classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The endpoint accepted the request
    Success,
    /// The endpoint answered with a structured error
    ServiceError(ServiceError),
}

impl ProbeOutcome {
    /// Convenience for building service-error outcomes in tests and fakes
    pub fn service_error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ServiceError(ServiceError {
            status: 400,
            code: code.into(),
            message: message.into(),
        })
    }
}
