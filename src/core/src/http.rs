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

//! The HTTP client used by the generated transports.

use crate::Result;
use crate::client_builder::Error as BuilderError;
use crate::client_builder::internal::{ClientConfig, ServiceInfo};
use crate::credentials::{Credentials, CredentialsError};
use crate::error::Error;
use crate::multipart::FormData;
use crate::options::RequestOptions;
use crate::response::{Parts, Response};
use crate::streaming::ByteStream;
use http::{HeaderMap, HeaderName, HeaderValue};
use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    version: String,
    default_headers: HeaderMap,
}

/// The payload of a request.
#[derive(Debug)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Text(String),
    Multipart(FormData),
}

impl RequestBody {
    pub fn json<T: serde::Serialize>(value: &T) -> Result<Self> {
        serde_json::to_value(value)
            .map(Self::Json)
            .map_err(Error::ser)
    }
}

impl ReqwestClient {
    pub async fn new(config: ClientConfig, info: &ServiceInfo) -> crate::client_builder::Result<Self> {
        let service_name = config
            .service_name
            .clone()
            .unwrap_or_else(|| info.service_name.to_string());
        let properties = crate::environment::service_properties(&service_name);
        let cred = Self::make_credentials(&config, &service_name, &properties)?;
        let endpoint = config
            .endpoint
            .or_else(|| properties.get("URL").cloned())
            .unwrap_or_else(|| info.default_host.to_string());
        let endpoint = endpoint.trim_end_matches('/').to_string();
        let version = config
            .version
            .unwrap_or_else(|| info.default_version.to_string());
        let default_headers = config
            .default_headers
            .iter()
            .map(|(k, v)| to_header(k, v))
            .collect::<std::result::Result<HeaderMap, _>>()
            .map_err(BuilderError::transport)?;
        let disable_ssl = config.disable_ssl_verification
            || crate::environment::is_true(&properties, "DISABLE_SSL");
        let inner = reqwest::Client::builder()
            .danger_accept_invalid_certs(disable_ssl)
            .build()
            .map_err(BuilderError::transport)?;
        tracing::debug!(
            service_name = %service_name,
            endpoint = %endpoint,
            version = %version,
            authentication_type = cred.authentication_type(),
            disable_ssl,
            "initialized HTTP client"
        );
        Ok(Self {
            inner,
            cred,
            endpoint,
            version,
            default_headers,
        })
    }

    /// The service endpoint, without any trailing `/`.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The API version date sent with each request.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner
            .request(method, format!("{}{path}", &self.endpoint))
            .query(&[("version", &self.version)])
    }

    /// Sends a request and parses the JSON response.
    ///
    /// A successful response with an empty payload returns `None`.
    pub async fn execute<O: serde::de::DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
        body: RequestBody,
        options: RequestOptions,
    ) -> Result<Response<Option<O>>> {
        let response = self.send(builder, body, &options).await?;
        self::to_http_response(response).await
    }

    /// Sends a request and returns the response payload as a stream.
    pub async fn execute_streaming(
        &self,
        builder: reqwest::RequestBuilder,
        body: RequestBody,
        options: RequestOptions,
    ) -> Result<Response<ByteStream>> {
        let response = self.send(builder, body, &options).await?;
        let parts = Parts::new()
            .set_status(response.status())
            .set_headers(response.headers().clone());
        Ok(Response::from_parts(
            parts,
            ByteStream::from_response(response),
        ))
    }

    fn make_credentials(
        config: &ClientConfig,
        service_name: &str,
        properties: &HashMap<String, String>,
    ) -> crate::client_builder::Result<Credentials> {
        let cred = match config.cred.clone() {
            Some(c) => c,
            None => crate::credentials::from_properties(properties)
                .map_err(BuilderError::cred)?
                .ok_or_else(|| {
                    BuilderError::cred(CredentialsError::NotConfigured(service_name.to_string()))
                })?,
        };
        cred.validate().map_err(BuilderError::cred)?;
        Ok(cred)
    }

    async fn send(
        &self,
        mut builder: reqwest::RequestBuilder,
        body: RequestBody,
        options: &RequestOptions,
    ) -> Result<reqwest::Response> {
        builder = options
            .attempt_timeout()
            .iter()
            .fold(builder, |b, t| b.timeout(*t));
        let user_agent = match options.user_agent() {
            Some(prefix) => format!("{prefix} {}", crate::api_header::user_agent()),
            None => crate::api_header::user_agent().to_string(),
        };
        builder = builder.header(
            reqwest::header::USER_AGENT,
            HeaderValue::from_str(&user_agent).map_err(Error::ser)?,
        );
        // Per-request headers replace any default header with the same name.
        builder = builder.headers(self.default_headers.clone());
        let custom = options
            .headers()
            .iter()
            .map(|(k, v)| to_header(k, v))
            .collect::<std::result::Result<HeaderMap, _>>()
            .map_err(Error::ser)?;
        let has_content_type = custom.contains_key(reqwest::header::CONTENT_TYPE)
            || self.default_headers.contains_key(reqwest::header::CONTENT_TYPE);
        builder = builder.headers(custom);
        let auth_headers = self.cred.headers().await.map_err(Error::authentication)?;
        builder = builder.headers(auth_headers);
        builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(v) => builder.json(&v),
            RequestBody::Text(t) if has_content_type => builder.body(t),
            RequestBody::Text(t) => builder
                .header(reqwest::header::CONTENT_TYPE, "text/plain")
                .body(t),
            RequestBody::Multipart(form) => builder.multipart(form.into_form()?),
        };
        let request = builder.build().map_err(Error::ser)?;
        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");
        let response = self
            .inner
            .execute(request)
            .await
            .map_err(Self::map_send_error)?;
        if !response.status().is_success() {
            return self::to_http_error(response).await;
        }
        Ok(response)
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

fn to_header(name: &str, value: &str) -> std::result::Result<(HeaderName, HeaderValue), http::Error> {
    Ok((HeaderName::try_from(name)?, HeaderValue::try_from(value)?))
}

pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    tracing::debug!(status_code, "the service returned an error");
    Err(Error::service(status_code, parts.headers, body))
}

async fn to_http_response<O: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Response<Option<O>>> {
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    // Some operations return a successful status with no payload.
    let body = match body {
        content if content.iter().all(u8::is_ascii_whitespace) => None,
        content => Some(serde_json::from_slice::<O>(&content).map_err(Error::deser)?),
    };

    Ok(Response::from_parts(
        Parts::new()
            .set_status(parts.status)
            .set_headers(parts.headers),
        body,
    ))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::credentials::{BasicAuthenticator, NoAuth};
    use http::{HeaderMap, HeaderValue};
    use pretty_assertions::assert_eq;
    use scoped_env::ScopedEnv;
    use serde_json::{Value, json};
    use test_case::test_case;
    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    const INFO: ServiceInfo = ServiceInfo {
        service_name: "test_only_http",
        analytics_name: "test-only-http",
        service_version: "V1",
        default_host: "https://test-only.example.com",
        default_version: "2020-01-01",
    };

    #[tokio::test]
    async fn client_http_error_bytes() -> TestResult {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(404)
            .body(r#"{"code": 404, "error": "Model not found"}"#)?;
        let response: reqwest::Response = http_resp.into();
        assert!(response.status().is_client_error());
        let response = super::to_http_error::<()>(response).await;
        let err = response.unwrap_err();
        assert!(err.is_service(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(404));
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("application/json"));
        assert_eq!(err.http_headers(), Some(&want));
        assert_eq!(
            err.http_payload(),
            Some(bytes::Bytes::from(r#"{"code": 404, "error": "Model not found"}"#)).as_ref()
        );
        assert_eq!(
            err.service_error().map(|e| e.message()),
            Some("Model not found")
        );
        Ok(())
    }

    #[tokio::test]
    #[test_case(reqwest::StatusCode::OK, ""; "200 with empty content")]
    #[test_case(reqwest::StatusCode::NO_CONTENT, ""; "204 with empty content")]
    #[test_case(reqwest::StatusCode::OK, " \n"; "200 with whitespace")]
    async fn client_empty_content(code: reqwest::StatusCode, content: &str) -> TestResult {
        let response = resp_from_code_content(code, content)?;
        let response = super::to_http_response::<Value>(response).await?;
        assert_eq!(response.status_code(), code.as_u16());
        assert_eq!(response.into_body(), None);
        Ok(())
    }

    #[tokio::test]
    async fn client_content() -> TestResult {
        let response = resp_from_code_content(reqwest::StatusCode::OK, r#"{"word_count": 28}"#)?;
        let response = super::to_http_response::<Value>(response).await?;
        assert_eq!(
            response.headers().get("content-type"),
            Some(&HeaderValue::from_static("application/json"))
        );
        assert_eq!(response.into_body(), Some(json!({"word_count": 28})));
        Ok(())
    }

    #[tokio::test]
    async fn client_malformed_content() -> TestResult {
        let response = resp_from_code_content(reqwest::StatusCode::OK, "{not json")?;
        let response = super::to_http_response::<Value>(response).await;
        assert!(
            matches!(&response, Err(e) if e.is_deserialization()),
            "{response:?}"
        );
        Ok(())
    }

    fn resp_from_code_content(
        code: reqwest::StatusCode,
        content: &str,
    ) -> http::Result<reqwest::Response> {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(code)
            .body(content.to_string())?;

        let response: reqwest::Response = http_resp.into();
        Ok(response)
    }

    #[test]
    fn json_body() -> TestResult {
        let body = RequestBody::json(&json!({"text": ["Hello"]}))?;
        assert!(
            matches!(&body, RequestBody::Json(v) if v == &json!({"text": ["Hello"]})),
            "{body:?}"
        );
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn defaults() -> TestResult {
        let _url = ScopedEnv::remove("TEST_ONLY_HTTP_URL");
        let config = ClientConfig {
            cred: Some(NoAuth.into()),
            ..Default::default()
        };
        let client = ReqwestClient::new(config, &INFO).await?;
        assert_eq!(client.endpoint(), "https://test-only.example.com");
        assert_eq!(client.version(), "2020-01-01");
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn overrides() -> TestResult {
        let _url = ScopedEnv::set("TEST_ONLY_HTTP_URL", "https://from-env.example.com");
        let config = ClientConfig {
            endpoint: Some("https://private.example.com/".to_string()),
            version: Some("2021-02-03".to_string()),
            cred: Some(NoAuth.into()),
            ..Default::default()
        };
        let client = ReqwestClient::new(config, &INFO).await?;
        assert_eq!(client.endpoint(), "https://private.example.com");
        assert_eq!(client.version(), "2021-02-03");
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn environment() -> TestResult {
        let _url = ScopedEnv::set("TEST_ONLY_HTTP_URL", "https://from-env.example.com");
        let _auth = ScopedEnv::set("TEST_ONLY_HTTP_AUTH_TYPE", "basic");
        let _user = ScopedEnv::set("TEST_ONLY_HTTP_USERNAME", "user");
        let _pass = ScopedEnv::set("TEST_ONLY_HTTP_PASSWORD", "pass");
        let _ssl = ScopedEnv::set("TEST_ONLY_HTTP_DISABLE_SSL", "true");
        let client = ReqwestClient::new(ClientConfig::default(), &INFO).await?;
        assert_eq!(client.endpoint(), "https://from-env.example.com");
        assert_eq!(client.cred.authentication_type(), "basic");
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn environment_with_service_name() -> TestResult {
        let _url = ScopedEnv::set("MY_TRANSLATOR_URL", "https://custom.example.com");
        let _auth = ScopedEnv::set("MY_TRANSLATOR_AUTH_TYPE", "noAuth");
        let config = ClientConfig {
            service_name: Some("my_translator".to_string()),
            ..Default::default()
        };
        let client = ReqwestClient::new(config, &INFO).await?;
        assert_eq!(client.endpoint(), "https://custom.example.com");
        assert_eq!(client.cred.authentication_type(), "noAuth");
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn missing_credentials() {
        let _auth = ScopedEnv::remove("TEST_ONLY_HTTP_AUTH_TYPE");
        let _user = ScopedEnv::remove("TEST_ONLY_HTTP_USERNAME");
        let _pass = ScopedEnv::remove("TEST_ONLY_HTTP_PASSWORD");
        let _token = ScopedEnv::remove("TEST_ONLY_HTTP_BEARER_TOKEN");
        let _key = ScopedEnv::remove("TEST_ONLY_HTTP_APIKEY");
        let got = ReqwestClient::new(ClientConfig::default(), &INFO).await;
        assert!(matches!(&got, Err(e) if e.is_credentials()), "{got:?}");
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn unsupported_credentials() {
        let _auth = ScopedEnv::set("TEST_ONLY_HTTP_AUTH_TYPE", "iam");
        let _key = ScopedEnv::set("TEST_ONLY_HTTP_APIKEY", "my-api-key");
        let got = ReqwestClient::new(ClientConfig::default(), &INFO).await;
        assert!(matches!(&got, Err(e) if e.is_credentials()), "{got:?}");
    }

    #[tokio::test]
    async fn invalid_credentials() {
        let config = ClientConfig {
            cred: Some(BasicAuthenticator::new("{user}", "pass").into()),
            ..Default::default()
        };
        let got = ReqwestClient::new(config, &INFO).await;
        assert!(matches!(&got, Err(e) if e.is_credentials()), "{got:?}");
    }

    #[tokio::test]
    #[test_case("bad header name", "value"; "bad name")]
    #[test_case("x-good-name", "bad\nvalue"; "bad value")]
    async fn invalid_default_header(name: &str, value: &str) {
        let config = ClientConfig {
            cred: Some(NoAuth.into()),
            default_headers: vec![(name.to_string(), value.to_string())],
            ..Default::default()
        };
        let got = ReqwestClient::new(config, &INFO).await;
        assert!(matches!(&got, Err(e) if e.is_transport()), "{got:?}");
    }
}
