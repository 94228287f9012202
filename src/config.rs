//! Checker configuration
//!
//! Settings come from the environment first and are then overridden by
//! command-line flags. The region selects both the control-plane and the
//! data-plane endpoints.

use crate::bedrock::region::is_known_region;
use crate::error::{CheckerError, Result};
use std::time::Duration;
use tracing::warn;

/// Region used when `AWS_REGION` is unset or empty
pub const DEFAULT_REGION: &str = "us-east-1";

/// Environment variable selecting the region
pub const REGION_ENV: &str = "AWS_REGION";
/// Environment variable overriding the control-plane base URL
pub const ENDPOINT_ENV: &str = "BEDROCK_ENDPOINT_URL";
/// Environment variable overriding the data-plane base URL
pub const RUNTIME_ENDPOINT_ENV: &str = "BEDROCK_RUNTIME_ENDPOINT_URL";

/// Access checker configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    /// AWS region for both Bedrock endpoints
    pub region: String,
    /// Base URL override for the `bedrock` control plane
    pub endpoint_url: Option<String>,
    /// Base URL override for the `bedrock-runtime` data plane
    pub runtime_endpoint_url: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint_url: None,
            runtime_endpoint_url: None,
            timeout_seconds: 30,
        }
    }
}

impl CheckerConfig {
    /// Build a configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            region: non_empty(REGION_ENV).unwrap_or_else(|| DEFAULT_REGION.to_string()),
            endpoint_url: non_empty(ENDPOINT_ENV),
            runtime_endpoint_url: non_empty(RUNTIME_ENDPOINT_ENV),
            ..Self::default()
        }
    }

    /// Replace the region when one was given explicitly
    pub fn with_region(mut self, region: Option<String>) -> Self {
        if let Some(region) = region.filter(|r| !r.trim().is_empty()) {
            self.region = region;
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Validate before any client is built
    pub fn validate(&self) -> Result<()> {
        if self.region.trim().is_empty() {
            return Err(CheckerError::configuration("AWS region is required"));
        }
        if self.timeout_seconds == 0 {
            return Err(CheckerError::configuration(
                "Timeout must be greater than 0",
            ));
        }
        for endpoint in [&self.endpoint_url, &self.runtime_endpoint_url]
            .into_iter()
            .flatten()
        {
            url::Url::parse(endpoint).map_err(|e| {
                CheckerError::configuration(format!("Invalid endpoint URL '{}': {}", endpoint, e))
            })?;
        }
        if !is_known_region(&self.region) {
            warn!(
                region = %self.region,
                "Region is not in the list of known Bedrock regions; continuing anyway"
            );
        }
        Ok(())
    }
}
