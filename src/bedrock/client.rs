//! Bedrock HTTP Client
//!
//! Thin `reqwest` client for the two calls the checker makes, signing
//! every request with AWS SigV4.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Response};
use std::collections::BTreeMap;
use tracing::{debug, error, trace};

use super::api::BedrockApi;
use super::credentials::AwsCredentials;
use super::error::ServiceError;
use super::region::{control_plane_base, runtime_base};
use super::sigv4::{SigV4Signer, encode_path_segment};
use super::types::{ListFoundationModelsResponse, ModelDescriptor, ProbeOutcome};
use crate::config::CheckerConfig;
use crate::error::{CheckerError, Result};

/// Body sent with every invoke probe
pub const PROBE_BODY: &[u8] = b"{}";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Bedrock HTTP client
#[derive(Debug, Clone)]
pub struct BedrockClient {
    http: Client,
    signer: SigV4Signer,
    control_base: String,
    runtime_base: String,
}

impl BedrockClient {
    /// Create a new Bedrock client for the configured region
    pub fn new(config: &CheckerConfig, credentials: AwsCredentials) -> Result<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| CheckerError::configuration(format!("HTTP client: {}", e)))?;

        let control_base = config
            .endpoint_url
            .clone()
            .unwrap_or_else(|| control_plane_base(&config.region));
        let runtime_base = config
            .runtime_endpoint_url
            .clone()
            .unwrap_or_else(|| runtime_base(&config.region));

        Ok(Self {
            http,
            signer: SigV4Signer::new(credentials, config.region.clone()),
            control_base: control_base.trim_end_matches('/').to_string(),
            runtime_base: runtime_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn region(&self) -> &str {
        self.signer.region()
    }

    /// URL of the `ListFoundationModels` operation
    pub fn list_models_url(&self) -> String {
        format!("{}/foundation-models", self.control_base)
    }

    /// URL of the `InvokeModel` operation for one model
    pub fn invoke_url(&self, model_id: &str) -> String {
        format!(
            "{}/model/{}/invoke",
            self.runtime_base,
            encode_path_segment(model_id)
        )
    }

    /// Sign and send one request
    async fn send_signed(
        &self,
        method: Method,
        url: &str,
        headers: BTreeMap<String, String>,
        body: &'static [u8],
    ) -> Result<Response> {
        let signed = self
            .signer
            .sign_request(method.as_str(), url, &headers, body, chrono::Utc::now())
            .map_err(CheckerError::signing)?;

        let mut header_map = HeaderMap::new();
        for (key, value) in signed {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| CheckerError::signing(format!("header {}: {}", key, e)))?;
            let value = HeaderValue::from_str(&value)
                .map_err(|e| CheckerError::signing(format!("header {}: {}", key, e)))?;
            header_map.insert(name, value);
        }

        trace!(%method, url, "Sending signed Bedrock request");

        let mut request = self.http.request(method, url).headers(header_map);
        if !body.is_empty() {
            request = request.body(body);
        }
        request
            .send()
            .await
            .map_err(|e| CheckerError::from_transport(url, &e))
    }

    async fn read_body(url: &str, response: Response) -> Result<String> {
        response
            .text()
            .await
            .map_err(|e| CheckerError::from_transport(url, &e))
    }
}

#[async_trait]
impl BedrockApi for BedrockClient {
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>> {
        let url = self.list_models_url();
        debug!(url = %url, "Listing foundation models");

        let response = self
            .send_signed(Method::GET, &url, BTreeMap::new(), b"")
            .await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = Self::read_body(&url, response).await?;

        if !(200..300).contains(&status) {
            let service_error = ServiceError::from_response(status, &headers, &body);
            error!(
                status,
                code = %service_error.code,
                "Bedrock ListFoundationModels failed"
            );
            return Err(CheckerError::Api {
                status,
                code: service_error.code,
                message: service_error.message,
            });
        }

        let parsed: ListFoundationModelsResponse = serde_json::from_str(&body)
            .map_err(|e| CheckerError::response_parsing(e.to_string()))?;
        debug!(count = parsed.model_summaries.len(), "Fetched model catalog");
        Ok(parsed.model_summaries)
    }

    async fn invoke_probe(&self, model_id: &str) -> Result<ProbeOutcome> {
        let url = self.invoke_url(model_id);

        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), JSON_CONTENT_TYPE.to_string());
        headers.insert("accept".to_string(), JSON_CONTENT_TYPE.to_string());

        let response = self
            .send_signed(Method::POST, &url, headers, PROBE_BODY)
            .await?;
        let status = response.status().as_u16();

        if (200..300).contains(&status) {
            debug!(model_id, status, "Invoke probe succeeded");
            return Ok(ProbeOutcome::Success);
        }

        let headers = response.headers().clone();
        let body = Self::read_body(&url, response).await?;
        let service_error = ServiceError::from_response(status, &headers, &body);
        debug!(
            model_id,
            status,
            code = %service_error.code,
            "Invoke probe returned a service error"
        );
        Ok(ProbeOutcome::ServiceError(service_error))
    }
}
