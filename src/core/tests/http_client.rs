// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#[cfg(test)]
mod test {
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use ibm_cloud_sdk_core::client_builder::internal::{ClientConfig, ServiceInfo};
    use ibm_cloud_sdk_core::credentials::{BasicAuthenticator, BearerTokenAuthenticator, NoAuth};
    use ibm_cloud_sdk_core::http::{ReqwestClient, RequestBody};
    use ibm_cloud_sdk_core::multipart::{FilePart, FormData, OCTET_STREAM};
    use ibm_cloud_sdk_core::options::RequestOptions;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use std::time::Duration;

    type Result = anyhow::Result<()>;

    const INFO: ServiceInfo = ServiceInfo {
        service_name: "http_client_test",
        analytics_name: "http-client-test",
        service_version: "V1",
        default_host: "https://unused.example.com",
        default_version: "2020-01-01",
    };

    async fn test_client(server: &Server, config: ClientConfig) -> anyhow::Result<ReqwestClient> {
        let config = ClientConfig {
            endpoint: Some(format!("http://{}", server.addr())),
            cred: config.cred.or_else(|| Some(NoAuth.into())),
            ..config
        };
        Ok(ReqwestClient::new(config, &INFO).await?)
    }

    #[tokio::test]
    async fn json_request() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/things"),
                request::query(url_decoded(contains(("version", "2020-01-01")))),
                request::headers(contains(("content-type", "application/json"))),
                request::headers(contains(key("user-agent"))),
                request::body(json_decoded(eq(json!({"text": ["Hello"]})))),
            ])
            .respond_with(json_encoded(json!({"word_count": 28}))),
        );

        let client = test_client(&server, ClientConfig::default()).await?;
        let builder = client.builder(reqwest::Method::POST, "/v1/things".to_string());
        let body = RequestBody::json(&json!({"text": ["Hello"]}))?;
        let response = client
            .execute::<Value>(builder, body, RequestOptions::default())
            .await?;
        assert_eq!(response.status_code(), 200);
        assert_eq!(response.into_body(), Some(json!({"word_count": 28})));
        Ok(())
    }

    #[tokio::test]
    async fn text_request() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/identify"),
                request::headers(contains(("content-type", "text/plain"))),
                request::body(matches("^Hola mundo$")),
            ])
            .respond_with(json_encoded(json!({"languages": []}))),
        );

        let client = test_client(&server, ClientConfig::default()).await?;
        let builder = client.builder(reqwest::Method::POST, "/v1/identify".to_string());
        let body = RequestBody::Text("Hola mundo".to_string());
        let response = client
            .execute::<Value>(builder, body, RequestOptions::default())
            .await?;
        assert_eq!(response.into_body(), Some(json!({"languages": []})));
        Ok(())
    }

    #[tokio::test]
    async fn text_request_custom_content_type() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/identify"),
                request::headers(contains(("content-type", "text/plain; charset=utf-8"))),
                request::headers(not(contains(("content-type", "text/plain")))),
                request::body(matches("^Hola mundo$")),
            ])
            .respond_with(json_encoded(json!({"languages": []}))),
        );

        let client = test_client(&server, ClientConfig::default()).await?;
        let builder = client.builder(reqwest::Method::POST, "/v1/identify".to_string());
        let body = RequestBody::Text("Hola mundo".to_string());
        let mut options = RequestOptions::default();
        options.set_header("Content-Type", "text/plain; charset=utf-8");
        let response = client.execute::<Value>(builder, body, options).await?;
        assert_eq!(response.into_body(), Some(json!({"languages": []})));
        Ok(())
    }

    #[tokio::test]
    async fn multipart_request() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/documents"),
                request::headers(contains((
                    "content-type",
                    matches("^multipart/form-data; boundary=")
                ))),
                request::body(matches("name=\"file\"; filename=\"hello.txt\"")),
                request::body(matches("name=\"model_id\"")),
            ])
            .respond_with(status_code(202).body(r#"{"document_id": "doc-1"}"#)),
        );

        let client = test_client(&server, ClientConfig::default()).await?;
        let builder = client.builder(reqwest::Method::POST, "/v1/documents".to_string());
        let form = FormData::new()
            .file("file", FilePart::new("Hello").set_filename("hello.txt"), OCTET_STREAM)
            .text("model_id", "en-es");
        let response = client
            .execute::<Value>(builder, RequestBody::Multipart(form), RequestOptions::default())
            .await?;
        assert_eq!(response.status_code(), 202);
        assert_eq!(response.into_body(), Some(json!({"document_id": "doc-1"})));
        Ok(())
    }

    #[tokio::test]
    async fn empty_response() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("DELETE", "/v1/things/abc"))
                .respond_with(status_code(204)),
        );

        let client = test_client(&server, ClientConfig::default()).await?;
        let builder = client.builder(reqwest::Method::DELETE, "/v1/things/abc".to_string());
        let response = client
            .execute::<Value>(builder, RequestBody::Empty, RequestOptions::default())
            .await?;
        assert_eq!(response.status_code(), 204);
        assert_eq!(response.into_body(), None);
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/things/missing")).respond_with(
                status_code(404)
                    .insert_header("x-global-transaction-id", "txn-123")
                    .body(r#"{"code": 404, "error": "Thing not found"}"#),
            ),
        );

        let client = test_client(&server, ClientConfig::default()).await?;
        let builder = client.builder(reqwest::Method::GET, "/v1/things/missing".to_string());
        let err = client
            .execute::<Value>(builder, RequestBody::Empty, RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_service(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(404));
        assert_eq!(
            err.http_headers()
                .and_then(|h| h.get("x-global-transaction-id"))
                .and_then(|v| v.to_str().ok()),
            Some("txn-123")
        );
        assert_eq!(
            err.service_error().map(|e| e.message()),
            Some("Thing not found")
        );
        Ok(())
    }

    #[tokio::test]
    async fn malformed_response() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/things"))
                .respond_with(status_code(200).body("{not json")),
        );

        let client = test_client(&server, ClientConfig::default()).await?;
        let builder = client.builder(reqwest::Method::GET, "/v1/things".to_string());
        let err = client
            .execute::<Value>(builder, RequestBody::Empty, RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn headers() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/things"),
                request::headers(contains(("x-watson-learning-opt-out", "true"))),
                request::headers(contains(("x-watson-metadata", "customer_id=abc"))),
                request::headers(not(contains(("x-watson-metadata", "customer_id=default")))),
                request::headers(contains(("authorization", "Basic dXNlcjpwYXNz"))),
                request::headers(contains((
                    "user-agent",
                    matches("^test-prefix ibm-watson-rust-sdk/")
                ))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let config = ClientConfig {
            cred: Some(BasicAuthenticator::new("user", "pass").into()),
            default_headers: vec![
                ("X-Watson-Learning-Opt-Out".to_string(), "true".to_string()),
                ("X-Watson-Metadata".to_string(), "customer_id=default".to_string()),
            ],
            ..Default::default()
        };
        let client = test_client(&server, config).await?;
        let mut options = RequestOptions::default();
        options.set_header("X-Watson-Metadata", "customer_id=abc");
        options.set_user_agent("test-prefix");
        let builder = client.builder(reqwest::Method::GET, "/v1/things".to_string());
        let response = client
            .execute::<Value>(builder, RequestBody::Empty, options)
            .await?;
        assert_eq!(response.into_body(), Some(json!({})));
        Ok(())
    }

    #[tokio::test]
    async fn bearer_token() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/things"),
                request::headers(contains(("authorization", "Bearer token-123"))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let config = ClientConfig {
            cred: Some(BearerTokenAuthenticator::new("token-123").into()),
            ..Default::default()
        };
        let client = test_client(&server, config).await?;
        let builder = client.builder(reqwest::Method::GET, "/v1/things".to_string());
        client
            .execute::<Value>(builder, RequestBody::Empty, RequestOptions::default())
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn invalid_custom_header() -> Result {
        // The request fails before any network traffic.
        let server = Server::run();
        let client = test_client(&server, ClientConfig::default()).await?;
        let mut options = RequestOptions::default();
        options.set_header("bad header", "value");
        let builder = client.builder(reqwest::Method::GET, "/v1/things".to_string());
        let err = client
            .execute::<Value>(builder, RequestBody::Empty, options)
            .await
            .unwrap_err();
        assert!(err.is_serialization(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn timeout() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/slow")).respond_with(
                delay_and_then(Duration::from_secs(2), json_encoded(json!({}))),
            ),
        );

        let client = test_client(&server, ClientConfig::default()).await?;
        let mut options = RequestOptions::default();
        options.set_attempt_timeout(Duration::from_millis(100));
        let builder = client.builder(reqwest::Method::GET, "/v1/slow".to_string());
        let err = client
            .execute::<Value>(builder, RequestBody::Empty, options)
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn connection_refused() -> Result {
        let config = ClientConfig {
            endpoint: Some("http://127.0.0.1:1".to_string()),
            cred: Some(NoAuth.into()),
            ..Default::default()
        };
        let client = ReqwestClient::new(config, &INFO).await?;
        let builder = client.builder(reqwest::Method::GET, "/v1/things".to_string());
        let err = client
            .execute::<Value>(builder, RequestBody::Empty, RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_io(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn streaming() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/documents/doc-1/translated_document"),
                request::headers(contains(("accept", "application/pdf"))),
            ])
            .respond_with(
                status_code(200)
                    .insert_header("content-type", "application/pdf")
                    .body("%PDF-1.4 translated"),
            ),
        );

        let client = test_client(&server, ClientConfig::default()).await?;
        let builder = client
            .builder(
                reqwest::Method::GET,
                "/v1/documents/doc-1/translated_document".to_string(),
            )
            .header("Accept", "application/pdf");
        let response = client
            .execute_streaming(builder, RequestBody::Empty, RequestOptions::default())
            .await?;
        assert_eq!(
            response
                .headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok()),
            Some("application/pdf")
        );
        let contents = response.into_body().all_bytes().await?;
        assert_eq!(contents, bytes::Bytes::from_static(b"%PDF-1.4 translated"));
        Ok(())
    }

    #[tokio::test]
    async fn streaming_error() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/documents/doc-1/translated_document"))
                .respond_with(status_code(400).body(r#"{"error": "Document is not ready"}"#)),
        );

        let client = test_client(&server, ClientConfig::default()).await?;
        let builder = client.builder(
            reqwest::Method::GET,
            "/v1/documents/doc-1/translated_document".to_string(),
        );
        let err = client
            .execute_streaming(builder, RequestBody::Empty, RequestOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(400));
        assert_eq!(
            err.service_error().map(|e| e.message()),
            Some("Document is not ready")
        );
        Ok(())
    }
}
