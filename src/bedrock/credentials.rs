//! AWS credentials for Bedrock
//!
//! Credentials are resolved once per run through the AWS SDK's default
//! chain: environment variables, shared profile files (including SSO),
//! web identity, and container or instance roles.

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::provider::ProvideCredentials;
use std::fmt;
use tracing::debug;

use crate::error::{CheckerError, Result};

/// Static AWS credentials used to sign requests
#[derive(Clone, PartialEq, Eq)]
pub struct AwsCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

impl AwsCredentials {
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token,
        }
    }

    /// Resolve credentials through the default provider chain
    pub async fn resolve(region: &str) -> Result<Self> {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;

        let provider = sdk_config
            .credentials_provider()
            .ok_or_else(|| CheckerError::credentials("no credentials provider configured"))?;

        let credentials = provider
            .provide_credentials()
            .await
            .map_err(|e| CheckerError::credentials(e.to_string()))?;

        let resolved = Self::new(
            credentials.access_key_id(),
            credentials.secret_access_key(),
            credentials.session_token().map(str::to_string),
        );
        debug!(
            credential_type = resolved.credential_type(),
            "Resolved AWS credentials"
        );
        Ok(resolved)
    }

    /// Check if credentials are temporary (have session token)
    pub fn is_temporary(&self) -> bool {
        self.session_token.is_some()
    }

    /// Get credential type for logging
    pub fn credential_type(&self) -> &'static str {
        if self.access_key_id.starts_with("AKIA") {
            "long-term"
        } else if self.access_key_id.starts_with("ASIA") || self.is_temporary() {
            "temporary"
        } else {
            "unknown"
        }
    }
}

// Secrets never reach log output
impl fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "** redacted **"),
            )
            .finish()
    }
}
