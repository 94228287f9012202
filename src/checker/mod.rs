//! Bedrock invoke-permission checker
//!
//! Runs list → probe-all in one pass. Models are probed one after the
//! other in catalog order; a transport failure aborts the run and no
//! partial result is returned.

mod classify;
mod types;

pub use classify::{ACCESS_DENIED, PAST_AUTHORIZATION, RESOURCE_NOT_FOUND, classify};
pub use types::{AccessStatus, CheckReport, ClassificationResult, ReportBuckets};

use tracing::{debug, info};

use crate::bedrock::{BedrockApi, ModelDescriptor};
use crate::error::Result;

/// Probes every model of a region's catalog for invoke permission
pub struct AccessChecker<A> {
    region: String,
    api: A,
    provider_filter: Option<String>,
}

impl<A: BedrockApi> AccessChecker<A> {
    pub fn new(region: impl Into<String>, api: A) -> Self {
        Self {
            region: region.into(),
            api,
            provider_filter: None,
        }
    }

    /// Only check models whose provider matches, ignoring case
    pub fn with_provider_filter(mut self, provider: Option<String>) -> Self {
        self.provider_filter = provider.filter(|p| !p.trim().is_empty());
        self
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Fetch the catalog, applying the provider filter if any
    pub async fn list_models(&self) -> Result<Vec<ModelDescriptor>> {
        let mut models = self.api.list_models().await?;
        if let Some(provider) = &self.provider_filter {
            let before = models.len();
            models.retain(|m| m.provider_name.eq_ignore_ascii_case(provider));
            debug!(
                provider = %provider,
                before,
                after = models.len(),
                "Applied provider filter"
            );
        }
        Ok(models)
    }

    /// Probe a single model
    pub async fn probe(&self, model: ModelDescriptor) -> Result<ClassificationResult> {
        let outcome = self.api.invoke_probe(&model.model_id).await?;
        Ok(classify(model, &outcome))
    }

    /// Probe every model in order and group the verdicts
    pub async fn classify_all(&self, models: Vec<ModelDescriptor>) -> Result<ReportBuckets> {
        let total = models.len();
        let mut buckets = ReportBuckets::new();

        for (index, model) in models.into_iter().enumerate() {
            debug!(model_id = %model.model_id, "Probing model {}/{}", index + 1, total);
            let result = self.probe(model).await?;
            debug!(
                model_id = %result.model.model_id,
                status = %result.status,
                "Classified model"
            );
            buckets.push(result);
        }

        Ok(buckets)
    }

    /// List, then probe everything
    pub async fn run(&self) -> Result<CheckReport> {
        let models = self.list_models().await?;
        info!(region = %self.region, models = models.len(), "Checking Bedrock invoke permissions");

        let buckets = self.classify_all(models).await?;
        info!(
            granted = buckets.bucket(AccessStatus::Granted).len(),
            not_granted = buckets.bucket(AccessStatus::NotGranted).len(),
            not_found = buckets.bucket(AccessStatus::NotFound).len(),
            error = buckets.bucket(AccessStatus::Error).len(),
            "Access check complete"
        );

        Ok(CheckReport {
            region: self.region.clone(),
            buckets,
        })
    }
}
