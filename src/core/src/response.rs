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

//! Response types.
//!
//! This module contains types related to IBM Watson service responses.
//! Notably it contains the `Response` type itself. Typically you'll import
//! this type.
//!
//! # Examples
//!
//! Creating a response for mocks
//!
//! ```
//! # use ibm_cloud_sdk_core::Result;
//! # use ibm_cloud_sdk_core::response::Response;
//! // A type representing a service result, for example, a translation.
//! struct Translation {
//!   // ...
//! }
//!
//! fn make_mock_response(body: Translation) -> Result<Response<Option<Translation>>> {
//!     Ok(Response::from(Some(body)))
//! }
//! ```

/// Represents an IBM Watson service response.
///
/// A response consists of a body, the HTTP status code, and the HTTP headers.
/// The generated clients use `Option<T>` as the body for operations that
/// return JSON, because the service may return a successful status with an
/// empty payload.
///
/// Typically you get a response as the result of making a request via some
/// client stub. You may also create responses directly when mocking clients
/// for your own tests.
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response with the given body, a `200 OK` status code, and no
    /// headers.
    pub fn from(body: T) -> Self {
        Self {
            body,
            parts: Parts::default(),
        }
    }

    /// Creates a response from the given parts.
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// The HTTP status code.
    pub fn status_code(&self) -> u16 {
        self.parts.status.as_u16()
    }

    /// The HTTP headers.
    pub fn headers(&self) -> &http::HeaderMap<http::HeaderValue> {
        &self.parts.headers
    }

    /// Read-only access to the body.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Decomposes the response into its parts and body.
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }

    /// Consumes the response, returning only the body.
    pub fn into_body(self) -> T {
        self.body
    }

    /// Transforms the body, preserving the status code and headers.
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            parts: self.parts,
            body: f(self.body),
        }
    }
}

/// Component parts of a response.
///
/// The response parts, excluding the body, consist of the HTTP status code and
/// headers.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Parts {
    /// The HTTP status code.
    pub status: http::StatusCode,

    /// The HTTP headers.
    pub headers: http::HeaderMap<http::HeaderValue>,
}

impl Parts {
    /// Create a new instance.
    pub fn new() -> Self {
        Parts::default()
    }

    /// Set the status code.
    pub fn set_status<V>(mut self, v: V) -> Self
    where
        V: Into<http::StatusCode>,
    {
        self.status = v.into();
        self
    }

    /// Set the headers.
    pub fn set_headers<V>(mut self, v: V) -> Self
    where
        V: Into<http::HeaderMap>,
    {
        self.headers = v.into();
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn response_from() {
        let response = Response::from("abc123".to_string());
        assert!(response.headers().is_empty());
        assert_eq!(response.status_code(), 200);
        assert_eq!(response.body().as_str(), "abc123");

        let body = response.into_body();
        assert_eq!(body.as_str(), "abc123");
    }

    #[test]
    fn response_from_parts() {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        let parts = Parts::new()
            .set_status(http::StatusCode::CREATED)
            .set_headers(headers.clone());

        let response = Response::from_parts(parts, "abc123".to_string());
        assert_eq!(response.status_code(), 201);
        assert_eq!(response.body().as_str(), "abc123");
        assert_eq!(response.headers(), &headers);

        let (parts, body) = response.into_parts();
        assert_eq!(body.as_str(), "abc123");
        assert_eq!(parts.headers, headers);
        assert_eq!(parts.status, http::StatusCode::CREATED);
    }

    #[test]
    fn map() {
        let mut headers = http::HeaderMap::new();
        headers.insert("x-global-transaction-id", http::HeaderValue::from_static("t-1"));
        let parts = Parts::new()
            .set_status(http::StatusCode::ACCEPTED)
            .set_headers(headers.clone());
        let response = Response::from_parts(parts, 42_i32).map(|v| v.to_string());
        assert_eq!(response.status_code(), 202);
        assert_eq!(response.headers(), &headers);
        assert_eq!(response.body().as_str(), "42");
    }
}
