//! AWS SigV4 Authentication for Bedrock
//!
//! Implementation of AWS Signature Version 4 signing process
//! for authenticating requests to the Bedrock control and data planes.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

use super::credentials::AwsCredentials;

type HmacSha256 = Hmac<Sha256>;

/// Characters left untouched by URI encoding (RFC 3986 unreserved set)
const URI_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Both Bedrock endpoints sign with this service name
pub const BEDROCK_SIGNING_NAME: &str = "bedrock";

const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Percent-encode a single path segment
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, URI_ENCODE_SET).to_string()
}

/// AWS SigV4 signer for Bedrock requests
#[derive(Debug, Clone)]
pub struct SigV4Signer {
    credentials: AwsCredentials,
    region: String,
    service: String,
}

impl SigV4Signer {
    pub fn new(credentials: AwsCredentials, region: String) -> Self {
        Self {
            credentials,
            region,
            service: BEDROCK_SIGNING_NAME.to_string(),
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Sign an HTTP request with AWS SigV4
    ///
    /// Returns the full header set to send: the caller's headers plus
    /// `host`, `x-amz-date`, the optional security token and
    /// `Authorization`.
    pub fn sign_request(
        &self,
        method: &str,
        url: &str,
        headers: &BTreeMap<String, String>,
        body: &[u8],
        timestamp: DateTime<Utc>,
    ) -> Result<BTreeMap<String, String>, String> {
        let parsed_url = url::Url::parse(url).map_err(|e| format!("Invalid URL: {}", e))?;

        let host = match (parsed_url.host_str(), parsed_url.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port),
            (Some(host), None) => host.to_string(),
            (None, _) => return Err("Missing host in URL".to_string()),
        };

        let canonical_uri = canonical_uri(parsed_url.path());
        let canonical_query = canonical_query(&parsed_url);

        let amz_date = timestamp.format("%Y%m%dT%H%M%SZ").to_string();
        let date_stamp = timestamp.format("%Y%m%d").to_string();

        // Keys are lower-cased so the map order is the canonical order
        let mut canonical_headers: BTreeMap<String, String> = headers
            .iter()
            .map(|(k, v)| (k.to_lowercase(), v.trim().to_string()))
            .collect();
        canonical_headers.insert("host".to_string(), host);
        canonical_headers.insert("x-amz-date".to_string(), amz_date.clone());

        if let Some(token) = self.credentials.session_token.as_deref() {
            canonical_headers.insert("x-amz-security-token".to_string(), token.to_string());
        }

        let canonical_headers_str: String = canonical_headers
            .iter()
            .map(|(k, v)| format!("{}:{}\n", k, v))
            .collect();

        let signed_headers = canonical_headers
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(";");

        let payload_hash = hex::encode(Sha256::digest(body));
        let canonical_request = format!(
            "{}\n{}\n{}\n{}\n{}\n{}",
            method.to_uppercase(),
            canonical_uri,
            canonical_query,
            canonical_headers_str,
            signed_headers,
            payload_hash
        );

        let credential_scope = format!(
            "{}/{}/{}/aws4_request",
            date_stamp, self.region, self.service
        );
        let canonical_request_hash = hex::encode(Sha256::digest(canonical_request.as_bytes()));

        let string_to_sign = format!(
            "{}\n{}\n{}\n{}",
            ALGORITHM, amz_date, credential_scope, canonical_request_hash
        );

        let signature = self.calculate_signature(&string_to_sign, &date_stamp)?;

        let authorization = format!(
            "{} Credential={}/{}, SignedHeaders={}, Signature={}",
            ALGORITHM, self.credentials.access_key_id, credential_scope, signed_headers, signature
        );

        let mut final_headers = canonical_headers;
        final_headers.insert("authorization".to_string(), authorization);

        Ok(final_headers)
    }

    fn calculate_signature(&self, string_to_sign: &str, date_stamp: &str) -> Result<String, String> {
        let k_date = hmac_sha256(
            format!("AWS4{}", self.credentials.secret_access_key).as_bytes(),
            date_stamp.as_bytes(),
        )?;

        let k_region = hmac_sha256(&k_date, self.region.as_bytes())?;
        let k_service = hmac_sha256(&k_region, self.service.as_bytes())?;
        let k_signing = hmac_sha256(&k_service, b"aws4_request")?;

        let signature = hmac_sha256(&k_signing, string_to_sign.as_bytes())?;
        Ok(hex::encode(signature))
    }
}

/// Non-S3 services encode each already-encoded path segment once more
fn canonical_uri(path: &str) -> String {
    if path.is_empty() {
        return "/".to_string();
    }
    path.split('/')
        .map(encode_path_segment)
        .collect::<Vec<_>>()
        .join("/")
}

fn canonical_query(url: &url::Url) -> String {
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (encode_path_segment(&k), encode_path_segment(&v)))
        .collect();
    pairs.sort();
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>, String> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|e| format!("HMAC key error: {}", e))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}
