//! BedrockClient HTTP tests
//!
//! Point both endpoints at a local `wiremock` server and check the wire
//! contract: request shape, signing headers, and error-code parsing.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{claude_haiku, list_response, llama, test_credentials, titan_lite};
    use bedrock_access_check::app::check_and_report;
    use bedrock_access_check::report::OutputFormat;
    use bedrock_access_check::{
        AccessChecker, AccessStatus, BedrockApi, BedrockClient, CheckerConfig, CheckerError,
        ProbeOutcome,
    };
    use std::time::Duration;
    use wiremock::matchers::{body_string, header, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> BedrockClient {
        let config = CheckerConfig {
            endpoint_url: Some(server.uri()),
            runtime_endpoint_url: Some(server.uri()),
            timeout_seconds: 5,
            ..CheckerConfig::default()
        };
        BedrockClient::new(&config, test_credentials()).unwrap()
    }

    fn error_response(status: u16, code: &str, message: &str) -> ResponseTemplate {
        ResponseTemplate::new(status)
            .insert_header(
                "x-amzn-ErrorType",
                format!("{}:http://internal.amazon.com/coral/com.amazon.bedrock/", code),
            )
            .set_body_json(serde_json::json!({ "message": message }))
    }

    // ==================== ListFoundationModels ====================

    #[tokio::test]
    async fn test_list_models() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/foundation-models"))
            .and(header_exists("authorization"))
            .and(header_exists("x-amz-date"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(list_response(&[claude_haiku(), titan_lite()])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let models = client_for(&server).list_models().await.unwrap();

        assert_eq!(models, vec![claude_haiku(), titan_lite()]);
    }

    #[tokio::test]
    async fn test_list_models_auth_failure_is_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/foundation-models"))
            .respond_with(error_response(
                403,
                "UnrecognizedClientException",
                "The security token included in the request is invalid.",
            ))
            .mount(&server)
            .await;

        let result = client_for(&server).list_models().await;

        match result {
            Err(CheckerError::Api {
                status,
                code,
                message,
            }) => {
                assert_eq!(status, 403);
                assert_eq!(code, "UnrecognizedClientException");
                assert!(message.contains("security token"));
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_models_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/foundation-models"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = client_for(&server).list_models().await;
        assert!(matches!(result, Err(CheckerError::ResponseParsing(_))));
    }

    // ==================== InvokeModel probe ====================

    #[tokio::test]
    async fn test_probe_request_shape() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/model/amazon.titan-text-lite-v1/invoke"))
            .and(header("content-type", "application/json"))
            .and(header("accept", "application/json"))
            .and(header_exists("authorization"))
            .and(body_string("{}"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = client_for(&server)
            .invoke_probe(&titan_lite().model_id)
            .await
            .unwrap();

        assert_eq!(outcome, ProbeOutcome::Success);
    }

    #[tokio::test]
    async fn test_probe_encodes_model_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/model/meta.llama3-8b-instruct-v1%3A0/invoke"))
            .respond_with(error_response(
                400,
                "ValidationException",
                "Malformed input request, please reformat your input and try again.",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = client_for(&server)
            .invoke_probe(&llama().model_id)
            .await
            .unwrap();

        match outcome {
            ProbeOutcome::ServiceError(error) => {
                assert_eq!(error.status, 400);
                assert_eq!(error.code, "ValidationException");
            }
            other => panic!("Expected service error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_probe_error_code_from_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/model/amazon.titan-text-lite-v1/invoke"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "__type": "com.amazon.bedrock#ResourceNotFoundException",
                "Message": "Could not resolve the foundation model from the provided model identifier."
            })))
            .mount(&server)
            .await;

        let outcome = client_for(&server)
            .invoke_probe(&titan_lite().model_id)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            ProbeOutcome::ServiceError(bedrock_access_check::bedrock::ServiceError {
                status: 404,
                code: "ResourceNotFoundException".to_string(),
                message: "Could not resolve the foundation model from the provided model identifier."
                    .to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_probe_without_error_code_reports_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/model/amazon.titan-text-lite-v1/invoke"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let checker = AccessChecker::new("us-east-1", client_for(&server));
        let result = checker.probe(titan_lite()).await.unwrap();

        assert_eq!(result.status, AccessStatus::Error);
        assert_eq!(result.error_code.as_deref(), Some("502"));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // Bind then release a port so nothing is listening on it
        let uri = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            format!("http://{}", listener.local_addr().unwrap())
        };
        let config = CheckerConfig {
            endpoint_url: Some(uri.clone()),
            runtime_endpoint_url: Some(uri),
            ..CheckerConfig::default()
        };
        let client = BedrockClient::new(&config, test_credentials()).unwrap();

        let result = client.invoke_probe(&titan_lite().model_id).await;
        assert!(matches!(result, Err(CheckerError::Network { .. })));
    }

    #[tokio::test]
    async fn test_slow_response_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;
        let config = CheckerConfig {
            runtime_endpoint_url: Some(server.uri()),
            timeout_seconds: 1,
            ..CheckerConfig::default()
        };
        let client = BedrockClient::new(&config, test_credentials()).unwrap();

        let result = client.invoke_probe(&titan_lite().model_id).await;
        assert!(matches!(result, Err(CheckerError::Timeout { .. })));
    }

    // ==================== End to end over HTTP ====================

    #[tokio::test]
    async fn test_full_run_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/foundation-models"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(list_response(&[claude_haiku(), titan_lite(), llama()])),
            )
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/model/anthropic.claude-3-haiku-20240307-v1%3A0/invoke"))
            .respond_with(error_response(
                403,
                "AccessDeniedException",
                "You don't have access to the model with the specified model ID.",
            ))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/model/amazon.titan-text-lite-v1/invoke"))
            .respond_with(error_response(400, "ValidationException", "Malformed input request"))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/model/meta.llama3-8b-instruct-v1%3A0/invoke"))
            .respond_with(error_response(429, "ThrottlingException", "Too many requests"))
            .mount(&server)
            .await;

        let checker = AccessChecker::new("us-east-1", client_for(&server));
        let report = checker.run().await.unwrap();

        assert_eq!(report.buckets.granted_model_ids(), vec![titan_lite().model_id]);
        let denied = report.buckets.bucket(AccessStatus::NotGranted);
        assert_eq!(denied.len(), 1);
        assert_eq!(
            denied[0].message.as_deref(),
            Some("You don't have access to the model with the specified model ID.")
        );
        let errors = report.buckets.bucket(AccessStatus::Error);
        assert_eq!(errors[0].error_code.as_deref(), Some("ThrottlingException"));

        let mut out = Vec::new();
        check_and_report(&checker, OutputFormat::Text, &mut out)
            .await
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("⚠️  ERROR STATUS MODELS (1 models)"));
        assert!(text.contains("   Error: ThrottlingException"));
    }
}
