//! End-to-end run of the command-line tool

use std::io::Write;
use tracing::{debug, info};

use crate::bedrock::{AwsCredentials, BedrockApi, BedrockClient};
use crate::checker::{AccessChecker, CheckReport};
use crate::cli::Cli;
use crate::config::CheckerConfig;
use crate::error::{CheckerError, Result};
use crate::report::{self, OutputFormat};

/// Resolve configuration and credentials, build the client, then check
pub async fn run(cli: &Cli) -> Result<()> {
    let config = cli.apply(CheckerConfig::from_env());
    config.validate()?;
    debug!(?config, "Resolved configuration");

    let credentials = AwsCredentials::resolve(&config.region).await?;
    let client = BedrockClient::new(&config, credentials)?;
    info!(region = %client.region(), "Bedrock client ready");

    let checker =
        AccessChecker::new(config.region.clone(), client).with_provider_filter(cli.provider.clone());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    check_and_report(&checker, cli.format, &mut out).await
}

/// List, probe and write the report for an already-built checker
///
/// In text mode the banner is written once the catalog is known, before
/// any probe, so a long run shows progress context immediately.
pub async fn check_and_report<A, W>(
    checker: &AccessChecker<A>,
    format: OutputFormat,
    out: &mut W,
) -> Result<()>
where
    A: BedrockApi,
    W: Write,
{
    let models = checker.list_models().await?;

    if format == OutputFormat::Text {
        report::write_banner(out, checker.region()).map_err(|e| CheckerError::output(&e))?;
        out.flush().map_err(|e| CheckerError::output(&e))?;
    }

    let buckets = checker.classify_all(models).await?;

    let check_report = CheckReport {
        region: checker.region().to_string(),
        buckets,
    };
    report::write_report(out, &check_report, format).map_err(|e| CheckerError::output(&e))
}
