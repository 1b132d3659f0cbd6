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

//! Authenticators for IBM Cloud services.
//!
//! Every request made by a client carries the headers produced by an
//! [Authenticator]. This module provides the authenticators for HTTP basic
//! authentication, for caller-managed bearer tokens, and for services that do
//! not require authentication.
//!
//! Applications rarely use these types directly beyond creating them and
//! passing them to a client builder:
//!
//! ```
//! use ibm_cloud_sdk_core::credentials::{BasicAuthenticator, Credentials};
//! let credentials: Credentials = BasicAuthenticator::new("apikey", "my-api-key").into();
//! assert_eq!(credentials.authentication_type(), "basic");
//! ```

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use http::HeaderMap;
use http::header::{AUTHORIZATION, HeaderValue};
use std::collections::HashMap;
use std::sync::Arc;

/// The names of the supported authentication types.
///
/// These are the values accepted by the `<SERVICE>_AUTH_TYPE` environment
/// variable.
pub mod auth_type {
    /// HTTP basic authentication.
    pub const BASIC: &str = "basic";
    /// A bearer token managed by the application.
    pub const BEARER_TOKEN: &str = "bearerToken";
    /// No authentication.
    pub const NO_AUTH: &str = "noAuth";
    /// IAM API key authentication, not supported by this library.
    pub const IAM: &str = "iam";
}

/// Represents an error creating or validating an authenticator.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum CredentialsError {
    /// A required property is missing or empty.
    #[error("the {0} property is required but was not set")]
    MissingProperty(&'static str),
    /// A property starts or ends with a brace or a quote.
    ///
    /// This usually indicates a copy and paste error from a JSON document.
    #[error("the {0} property cannot begin or end with curly braces or quotes")]
    BadCharacters(&'static str),
    /// The authentication type is unknown or unsupported.
    #[error("the authentication type {0} is not supported")]
    UnsupportedType(String),
    /// The configuration does not name an authenticator.
    #[error("no authenticator was configured for service {0}")]
    NotConfigured(String),
    /// A property cannot be used in an HTTP header.
    #[error("the {0} property is not a valid header value")]
    InvalidHeader(&'static str, #[source] http::header::InvalidHeaderValue),
}

/// An implementation of [Credentials].
///
/// Applications only implement this trait to provide custom authentication,
/// for example, bearer tokens refreshed by some external system.
#[async_trait::async_trait]
pub trait Authenticator: std::fmt::Debug + Send + Sync {
    /// The name of the authentication type, see [auth_type].
    fn authentication_type(&self) -> &'static str;

    /// Verifies the authenticator configuration.
    ///
    /// The clients call this function once, when the client is created.
    fn validate(&self) -> Result<(), CredentialsError>;

    /// Returns the headers to include in each request.
    async fn headers(&self) -> Result<HeaderMap, CredentialsError>;
}

/// An authenticator shared by all the requests of a client.
///
/// This is a thin wrapper around an [Authenticator] trait object. It can be
/// cheaply cloned.
#[derive(Clone, Debug)]
pub struct Credentials {
    inner: Arc<dyn Authenticator>,
}

impl Credentials {
    /// The name of the authentication type, see [auth_type].
    pub fn authentication_type(&self) -> &'static str {
        self.inner.authentication_type()
    }

    /// Verifies the authenticator configuration.
    pub fn validate(&self) -> Result<(), CredentialsError> {
        self.inner.validate()
    }

    /// Returns the headers to include in each request.
    pub async fn headers(&self) -> Result<HeaderMap, CredentialsError> {
        self.inner.headers().await
    }
}

impl<T> From<T> for Credentials
where
    T: Authenticator + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

/// An authenticator that adds no headers.
///
/// Use this with services that do not require authentication, for example,
/// a local emulator or a test server.
#[derive(Clone, Debug, Default)]
pub struct NoAuth;

#[async_trait::async_trait]
impl Authenticator for NoAuth {
    fn authentication_type(&self) -> &'static str {
        auth_type::NO_AUTH
    }

    fn validate(&self) -> Result<(), CredentialsError> {
        Ok(())
    }

    async fn headers(&self) -> Result<HeaderMap, CredentialsError> {
        Ok(HeaderMap::new())
    }
}

/// An authenticator using HTTP basic authentication.
///
/// With IBM Cloud API keys use `apikey` as the username, and the API key as
/// the password.
///
/// # Example
/// ```
/// use ibm_cloud_sdk_core::credentials::{Authenticator, BasicAuthenticator};
/// let auth = BasicAuthenticator::new("apikey", "my-api-key");
/// assert!(auth.validate().is_ok());
/// ```
#[derive(Clone)]
pub struct BasicAuthenticator {
    username: String,
    password: String,
}

impl BasicAuthenticator {
    /// Creates a new authenticator.
    ///
    /// The values are validated when the client is created.
    pub fn new<U: Into<String>, P: Into<String>>(username: U, password: P) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The configured username.
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl std::fmt::Debug for BasicAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuthenticator")
            .field("username", &self.username)
            .field("password", &"[censored]")
            .finish()
    }
}

#[async_trait::async_trait]
impl Authenticator for BasicAuthenticator {
    fn authentication_type(&self) -> &'static str {
        auth_type::BASIC
    }

    fn validate(&self) -> Result<(), CredentialsError> {
        check_property("username", &self.username)?;
        check_property("password", &self.password)
    }

    async fn headers(&self) -> Result<HeaderMap, CredentialsError> {
        let encoded = BASE64_STANDARD.encode(format!("{}:{}", self.username, self.password));
        let value = format!("Basic {encoded}");
        let mut value =
            HeaderValue::from_str(&value).map_err(|e| CredentialsError::InvalidHeader("password", e))?;
        value.set_sensitive(true);
        Ok(HeaderMap::from_iter([(AUTHORIZATION, value)]))
    }
}

/// An authenticator using a bearer token managed by the application.
///
/// The library does not refresh the token. Applications must create a new
/// client, or implement [Authenticator], to use a different token.
#[derive(Clone)]
pub struct BearerTokenAuthenticator {
    bearer_token: String,
}

impl BearerTokenAuthenticator {
    /// Creates a new authenticator.
    pub fn new<T: Into<String>>(bearer_token: T) -> Self {
        Self {
            bearer_token: bearer_token.into(),
        }
    }
}

impl std::fmt::Debug for BearerTokenAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerTokenAuthenticator")
            .field("bearer_token", &"[censored]")
            .finish()
    }
}

#[async_trait::async_trait]
impl Authenticator for BearerTokenAuthenticator {
    fn authentication_type(&self) -> &'static str {
        auth_type::BEARER_TOKEN
    }

    fn validate(&self) -> Result<(), CredentialsError> {
        if self.bearer_token.is_empty() {
            return Err(CredentialsError::MissingProperty("bearer_token"));
        }
        Ok(())
    }

    async fn headers(&self) -> Result<HeaderMap, CredentialsError> {
        let value = format!("Bearer {}", self.bearer_token);
        let mut value = HeaderValue::from_str(&value)
            .map_err(|e| CredentialsError::InvalidHeader("bearer_token", e))?;
        value.set_sensitive(true);
        Ok(HeaderMap::from_iter([(AUTHORIZATION, value)]))
    }
}

fn check_property(name: &'static str, value: &str) -> Result<(), CredentialsError> {
    if value.is_empty() {
        return Err(CredentialsError::MissingProperty(name));
    }
    let bad = |c: Option<char>| matches!(c, Some('{' | '}' | '"'));
    if bad(value.chars().next()) || bad(value.chars().last()) {
        return Err(CredentialsError::BadCharacters(name));
    }
    Ok(())
}

/// Creates an authenticator from the properties found in the environment.
///
/// Returns `Ok(None)` if the properties do not configure any authenticator.
pub(crate) fn from_properties(
    properties: &HashMap<String, String>,
) -> Result<Option<Credentials>, CredentialsError> {
    let get = |k: &str| properties.get(k).map(String::as_str);
    let auth_type = match get("AUTH_TYPE") {
        Some(t) => t,
        None if get("BEARER_TOKEN").is_some() => auth_type::BEARER_TOKEN,
        None if get("USERNAME").is_some() || get("PASSWORD").is_some() => auth_type::BASIC,
        None if get("APIKEY").is_some() => auth_type::IAM,
        None => return Ok(None),
    };
    let credentials: Credentials = match auth_type {
        t if t.eq_ignore_ascii_case(auth_type::BASIC) => BasicAuthenticator::new(
            get("USERNAME").unwrap_or_default(),
            get("PASSWORD").unwrap_or_default(),
        )
        .into(),
        t if t.eq_ignore_ascii_case(auth_type::BEARER_TOKEN) => {
            BearerTokenAuthenticator::new(get("BEARER_TOKEN").unwrap_or_default()).into()
        }
        t if t.eq_ignore_ascii_case(auth_type::NO_AUTH) => NoAuth.into(),
        t => return Err(CredentialsError::UnsupportedType(t.to_string())),
    };
    Ok(Some(credentials))
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[tokio::test]
    async fn no_auth() -> anyhow::Result<()> {
        let cred = Credentials::from(NoAuth);
        assert_eq!(cred.authentication_type(), "noAuth");
        cred.validate()?;
        assert!(cred.headers().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn basic() -> anyhow::Result<()> {
        let cred = Credentials::from(BasicAuthenticator::new("user", "pass"));
        assert_eq!(cred.authentication_type(), "basic");
        cred.validate()?;
        let headers = cred.headers().await?;
        let got = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
        // echo -n "user:pass" | base64
        assert_eq!(got, Some("Basic dXNlcjpwYXNz"));
        assert!(headers.get(AUTHORIZATION).is_some_and(HeaderValue::is_sensitive));
        Ok(())
    }

    #[test]
    fn basic_debug() {
        let auth = BasicAuthenticator::new("user", "super-secret");
        let got = format!("{auth:?}");
        assert!(got.contains("user"), "{got}");
        assert!(!got.contains("super-secret"), "{got}");
    }

    #[test_case("", "pass", "username"; "empty username")]
    #[test_case("user", "", "password"; "empty password")]
    fn basic_missing(username: &str, password: &str, want: &str) {
        let got = BasicAuthenticator::new(username, password).validate();
        assert!(
            matches!(got, Err(CredentialsError::MissingProperty(p)) if p == want),
            "{got:?}"
        );
    }

    #[test_case("{user}", "pass", "username"; "braces username")]
    #[test_case("\"user\"", "pass", "username"; "quoted username")]
    #[test_case("user", "{pass", "password"; "leading brace password")]
    #[test_case("user", "pass\"", "password"; "trailing quote password")]
    fn basic_bad_characters(username: &str, password: &str, want: &str) {
        let got = BasicAuthenticator::new(username, password).validate();
        assert!(
            matches!(got, Err(CredentialsError::BadCharacters(p)) if p == want),
            "{got:?}"
        );
    }

    #[tokio::test]
    async fn bearer_token() -> anyhow::Result<()> {
        let cred = Credentials::from(BearerTokenAuthenticator::new("token-123"));
        assert_eq!(cred.authentication_type(), "bearerToken");
        cred.validate()?;
        let headers = cred.headers().await?;
        let got = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
        assert_eq!(got, Some("Bearer token-123"));

        let got = format!("{:?}", BearerTokenAuthenticator::new("token-123"));
        assert!(!got.contains("token-123"), "{got}");
        Ok(())
    }

    #[test]
    fn bearer_token_missing() {
        let got = BearerTokenAuthenticator::new("").validate();
        assert!(
            matches!(got, Err(CredentialsError::MissingProperty("bearer_token"))),
            "{got:?}"
        );
    }

    #[tokio::test]
    async fn bearer_token_invalid_header() {
        let got = BearerTokenAuthenticator::new("bad\ntoken").headers().await;
        assert!(
            matches!(got, Err(CredentialsError::InvalidHeader("bearer_token", _))),
            "{got:?}"
        );
    }

    fn properties(values: &[(&str, &str)]) -> HashMap<String, String> {
        values
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test_case(&[("AUTH_TYPE", "basic"), ("USERNAME", "u"), ("PASSWORD", "p")], "basic")]
    #[test_case(&[("AUTH_TYPE", "BASIC"), ("USERNAME", "u"), ("PASSWORD", "p")], "basic")]
    #[test_case(&[("AUTH_TYPE", "bearerToken"), ("BEARER_TOKEN", "t")], "bearerToken")]
    #[test_case(&[("AUTH_TYPE", "noAuth")], "noAuth")]
    #[test_case(&[("USERNAME", "u"), ("PASSWORD", "p")], "basic"; "inferred basic")]
    #[test_case(&[("BEARER_TOKEN", "t")], "bearerToken"; "inferred bearer")]
    fn from_properties_success(values: &[(&str, &str)], want: &str) -> anyhow::Result<()> {
        let got = from_properties(&properties(values))?;
        assert_eq!(got.map(|c| c.authentication_type()), Some(want));
        Ok(())
    }

    #[test]
    fn from_properties_empty() -> anyhow::Result<()> {
        let got = from_properties(&properties(&[("URL", "https://example.com")]))?;
        assert!(got.is_none(), "{got:?}");
        Ok(())
    }

    #[test_case(&[("AUTH_TYPE", "iam"), ("APIKEY", "k")]; "explicit iam")]
    #[test_case(&[("APIKEY", "k")]; "inferred iam")]
    #[test_case(&[("AUTH_TYPE", "cp4d")]; "cp4d")]
    fn from_properties_unsupported(values: &[(&str, &str)]) {
        let got = from_properties(&properties(values));
        assert!(
            matches!(got, Err(CredentialsError::UnsupportedType(_))),
            "{got:?}"
        );
    }

    #[test]
    fn send_and_sync() {
        static_assertions::assert_impl_all!(Credentials: Clone, Send, Sync);
    }
}
