//! Mapping from an invoke probe outcome to an access verdict
//!
//! Bedrock authorizes a request before it validates the payload, so an
//! empty `{}` body that reaches validation proves the caller may invoke
//! the model. This ordering belongs to the service, not to this crate; if
//! Bedrock ever validated first, validation errors would stop implying a
//! grant.

use super::types::ClassificationResult;
use crate::bedrock::{ModelDescriptor, ProbeOutcome};

pub const ACCESS_DENIED: &str = "AccessDeniedException";
pub const RESOURCE_NOT_FOUND: &str = "ResourceNotFoundException";

/// Codes raised after authorization succeeded
pub const PAST_AUTHORIZATION: &[&str] = &[
    "ValidationException",
    "ModelErrorException",
    "BadRequestException",
];

/// Classify one probe outcome. Branches on the code only, never the message.
pub fn classify(model: ModelDescriptor, outcome: &ProbeOutcome) -> ClassificationResult {
    let error = match outcome {
        ProbeOutcome::Success => return ClassificationResult::granted(model),
        ProbeOutcome::ServiceError(error) => error,
    };

    match error.code.as_str() {
        ACCESS_DENIED => ClassificationResult::not_granted(model, &error.message),
        RESOURCE_NOT_FOUND => ClassificationResult::not_found(model, &error.message),
        code if PAST_AUTHORIZATION.contains(&code) => ClassificationResult::granted(model),
        code => ClassificationResult::error(model, code, &error.message),
    }
}
