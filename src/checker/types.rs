//! Classification results and their grouping

use serde::Serialize;
use std::fmt;

use crate::bedrock::ModelDescriptor;

/// Invoke-permission verdict for one model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessStatus {
    Granted,
    NotGranted,
    NotFound,
    Error,
}

impl AccessStatus {
    /// Report order
    pub const ALL: [AccessStatus; 4] = [
        AccessStatus::Granted,
        AccessStatus::NotGranted,
        AccessStatus::NotFound,
        AccessStatus::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessStatus::Granted => "granted",
            AccessStatus::NotGranted => "not_granted",
            AccessStatus::NotFound => "not_found",
            AccessStatus::Error => "error",
        }
    }
}

impl fmt::Display for AccessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict for one model plus what the probe reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    pub model: ModelDescriptor,
    pub status: AccessStatus,
    /// Service message, kept for display only
    pub message: Option<String>,
    /// Raw error code, set for [`AccessStatus::Error`]
    pub error_code: Option<String>,
}

impl ClassificationResult {
    pub fn granted(model: ModelDescriptor) -> Self {
        Self {
            model,
            status: AccessStatus::Granted,
            message: None,
            error_code: None,
        }
    }

    pub fn not_granted(model: ModelDescriptor, message: &str) -> Self {
        Self {
            model,
            status: AccessStatus::NotGranted,
            message: non_empty(message),
            error_code: None,
        }
    }

    pub fn not_found(model: ModelDescriptor, message: &str) -> Self {
        Self {
            model,
            status: AccessStatus::NotFound,
            message: non_empty(message),
            error_code: None,
        }
    }

    pub fn error(model: ModelDescriptor, code: &str, message: &str) -> Self {
        Self {
            model,
            status: AccessStatus::Error,
            message: non_empty(message),
            error_code: Some(code.to_string()),
        }
    }
}

fn non_empty(message: &str) -> Option<String> {
    (!message.is_empty()).then(|| message.to_string())
}

/// Results grouped by status, each group in catalog order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportBuckets {
    granted: Vec<ClassificationResult>,
    not_granted: Vec<ClassificationResult>,
    not_found: Vec<ClassificationResult>,
    error: Vec<ClassificationResult>,
}

impl ReportBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result to the bucket matching its status
    pub fn push(&mut self, result: ClassificationResult) {
        self.bucket_mut(result.status).push(result);
    }

    pub fn bucket(&self, status: AccessStatus) -> &[ClassificationResult] {
        match status {
            AccessStatus::Granted => &self.granted,
            AccessStatus::NotGranted => &self.not_granted,
            AccessStatus::NotFound => &self.not_found,
            AccessStatus::Error => &self.error,
        }
    }

    fn bucket_mut(&mut self, status: AccessStatus) -> &mut Vec<ClassificationResult> {
        match status {
            AccessStatus::Granted => &mut self.granted,
            AccessStatus::NotGranted => &mut self.not_granted,
            AccessStatus::NotFound => &mut self.not_found,
            AccessStatus::Error => &mut self.error,
        }
    }

    /// Buckets in report order
    pub fn iter(&self) -> impl Iterator<Item = (AccessStatus, &[ClassificationResult])> {
        AccessStatus::ALL
            .into_iter()
            .map(move |status| (status, self.bucket(status)))
    }

    /// Number of classified models across all buckets
    pub fn total(&self) -> usize {
        self.iter().map(|(_, results)| results.len()).sum()
    }

    /// Identifiers of the models whose invoke permission looks granted
    pub fn granted_model_ids(&self) -> Vec<&str> {
        self.granted
            .iter()
            .map(|r| r.model.model_id.as_str())
            .collect()
    }
}

/// Outcome of a complete run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub region: String,
    pub buckets: ReportBuckets,
}
