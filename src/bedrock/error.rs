//! Bedrock error responses
//!
//! Bedrock speaks the REST-JSON protocol: the error code travels in the
//! `x-amzn-ErrorType` header and, depending on the endpoint, in the body
//! as `__type` or `code`. The message is `message` or `Message`. A response
//! carrying no code at all (a proxy's HTML 502, say) is reported under its
//! HTTP status.

use reqwest::header::HeaderMap;
use serde_json::Value;

/// Header carrying the error code on REST-JSON responses
pub const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";

/// A structured error returned by a Bedrock endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    pub status: u16,
    pub code: String,
    pub message: String,
}

impl ServiceError {
    /// Parse an error response from its status, headers and raw body
    pub fn from_response(status: u16, headers: &HeaderMap, body: &str) -> Self {
        let json: Option<Value> = serde_json::from_str(body).ok();

        let header_code = headers
            .get(ERROR_TYPE_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(sanitize_error_code)
            .filter(|c| !c.is_empty());

        let body_code = json.as_ref().and_then(|v| {
            ["__type", "code", "Code"]
                .iter()
                .find_map(|key| v.get(*key).and_then(Value::as_str))
                .map(sanitize_error_code)
                .filter(|c| !c.is_empty())
        });

        let message = json
            .as_ref()
            .and_then(|v| {
                ["message", "Message"]
                    .iter()
                    .find_map(|key| v.get(*key).and_then(Value::as_str))
            })
            .unwrap_or_default()
            .to_string();

        Self {
            status,
            code: header_code
                .or(body_code)
                .unwrap_or_else(|| status.to_string()),
            message,
        }
    }
}

/// Strip the `:uri` suffix and `namespace#` prefix from an error code
///
/// `AccessDeniedException:http://internal.amazon.com/coral/...` and
/// `com.amazon.coral.service#AccessDeniedException` both become
/// `AccessDeniedException`.
pub fn sanitize_error_code(raw: &str) -> String {
    let without_uri = raw.split(':').next().unwrap_or(raw);
    let without_namespace = without_uri.rsplit('#').next().unwrap_or(without_uri);
    without_namespace.trim().to_string()
}
