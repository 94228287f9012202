//! Report rendering
//!
//! The text report is the tool's primary output: one section per status in
//! fixed order, the error section only when it has entries. The JSON form
//! carries the same grouping for scripts. The allow-list form is a bare JSON
//! array of granted model identifiers, the shape the Bedrock allow-list
//! loader reads from `BEDROCK_ALLOWED_MODELS_PATH`.

use serde::Serialize;
use std::io::{self, Write};

use crate::checker::{AccessStatus, CheckReport, ClassificationResult, ReportBuckets};

const RULE_WIDTH: usize = 50;

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    /// JSON array of granted model ids
    AllowList,
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn section_title(status: AccessStatus) -> &'static str {
    match status {
        AccessStatus::Granted => "✅ GRANTED (Invoke allowed)",
        AccessStatus::NotGranted => "❌ NOT GRANTED (Access denied)",
        AccessStatus::NotFound => "🚫 NOT FOUND (Wrong region or unavailable)",
        AccessStatus::Error => "⚠️  ERROR STATUS MODELS",
    }
}

/// Banner printed before probing starts
pub fn write_banner<W: Write>(out: &mut W, region: &str) -> io::Result<()> {
    writeln!(out, "Checking Bedrock INVOKE permissions in region {}...", region)?;
    writeln!(out, "{}", rule())
}

/// Write the grouped text report
pub fn write_text<W: Write>(out: &mut W, buckets: &ReportBuckets) -> io::Result<()> {
    for (status, results) in buckets.iter() {
        if status == AccessStatus::Error && results.is_empty() {
            continue;
        }
        // Granted opens with a blank line to separate it from the banner
        if status == AccessStatus::Granted {
            writeln!(out)?;
        }
        writeln!(out, "{} ({} models)", section_title(status), results.len())?;
        writeln!(out, "{}", rule())?;
        for result in results {
            write_model_block(out, result)?;
        }
    }
    Ok(())
}

fn write_model_block<W: Write>(out: &mut W, result: &ClassificationResult) -> io::Result<()> {
    writeln!(out, "{}", result.model.model_id)?;
    writeln!(out, "   Name: {}", result.model.model_name)?;
    writeln!(out, "   Provider: {}", result.model.provider_name)?;
    match result.status {
        AccessStatus::Granted => {}
        AccessStatus::NotGranted | AccessStatus::NotFound => {
            if let Some(message) = &result.message {
                writeln!(out, "   Message: {}", message)?;
            }
        }
        AccessStatus::Error => {
            if let Some(code) = &result.error_code {
                writeln!(out, "   Error: {}", code)?;
            }
        }
    }
    writeln!(out)
}

#[derive(Debug, Serialize)]
struct JsonEntry<'a> {
    id: &'a str,
    name: &'a str,
    provider: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl<'a> From<&'a ClassificationResult> for JsonEntry<'a> {
    fn from(result: &'a ClassificationResult) -> Self {
        Self {
            id: &result.model.model_id,
            name: &result.model.model_name,
            provider: &result.model.provider_name,
            message: result.message.as_deref(),
            error: result.error_code.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    region: &'a str,
    granted: Vec<JsonEntry<'a>>,
    not_granted: Vec<JsonEntry<'a>>,
    not_found: Vec<JsonEntry<'a>>,
    error: Vec<JsonEntry<'a>>,
}

/// Render the report as a JSON value
pub fn to_json(report: &CheckReport) -> serde_json::Value {
    let entries = |status| {
        report
            .buckets
            .bucket(status)
            .iter()
            .map(JsonEntry::from)
            .collect::<Vec<_>>()
    };
    let json = JsonReport {
        region: &report.region,
        granted: entries(AccessStatus::Granted),
        not_granted: entries(AccessStatus::NotGranted),
        not_found: entries(AccessStatus::NotFound),
        error: entries(AccessStatus::Error),
    };
    serde_json::to_value(&json).unwrap_or(serde_json::Value::Null)
}

/// Granted model ids, in catalog order
pub fn to_allow_list(report: &CheckReport) -> serde_json::Value {
    serde_json::Value::from(report.buckets.granted_model_ids())
}

/// Write a finished report in the requested format
///
/// The text banner is not part of the report; it goes out through
/// [`write_banner`] before probing starts.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &CheckReport,
    format: OutputFormat,
) -> io::Result<()> {
    let json = match format {
        OutputFormat::Text => return write_text(out, &report.buckets),
        OutputFormat::Json => to_json(report),
        OutputFormat::AllowList => to_allow_list(report),
    };
    serde_json::to_writer_pretty(&mut *out, &json)?;
    writeln!(out)
}
