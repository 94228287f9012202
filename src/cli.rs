//! Command-line interface

use clap::Parser;

use crate::config::{CheckerConfig, ENDPOINT_ENV, RUNTIME_ENDPOINT_ENV};
use crate::report::OutputFormat;

/// Check which AWS Bedrock foundation models the current credentials may invoke
#[derive(Parser, Debug, Clone)]
#[command(
    name = "bedrock-access-check",
    version,
    about,
    long_about = "Lists the foundation models of one Bedrock region and sends each an \
empty `{}` InvokeModel request. Bedrock authorizes a request before validating its body, \
so a validation error means invoke permission is granted while AccessDeniedException means \
it is not. No inference is performed.\n\n\
Credentials come from the standard AWS chain (environment, ~/.aws profiles, SSO, \
container or instance role)."
)]
pub struct Cli {
    /// AWS region to check (default: $AWS_REGION, then us-east-1)
    #[arg(long)]
    pub region: Option<String>,

    /// Only check models from this provider, e.g. Anthropic (case-insensitive)
    #[arg(long)]
    pub provider: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Override the Bedrock control-plane endpoint URL
    #[arg(long, env = ENDPOINT_ENV)]
    pub endpoint_url: Option<String>,

    /// Override the Bedrock runtime endpoint URL
    #[arg(long, env = RUNTIME_ENDPOINT_ENV)]
    pub runtime_endpoint_url: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace); logs go to stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Layer the flags over an environment-derived configuration
    pub fn apply(&self, base: CheckerConfig) -> CheckerConfig {
        let mut config = base.with_region(self.region.clone());
        config.timeout_seconds = self.timeout;
        if self.endpoint_url.is_some() {
            config.endpoint_url = self.endpoint_url.clone();
        }
        if self.runtime_endpoint_url.is_some() {
            config.runtime_endpoint_url = self.runtime_endpoint_url.clone();
        }
        config
    }
}
