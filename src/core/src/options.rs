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

//! Per request options.
//!
//! Applications may need to customize the behavior of some calls made via a
//! client. For example, an application may send the `X-Watson-Learning-Opt-Out`
//! header on a single call, or change the timeout for a slow document
//! translation. The `*Builder` returned by each client method implements the
//! [RequestOptionsBuilder] trait where applications can override some defaults.

use std::time::Duration;

/// A set of options configuring a single request.
///
/// Application only use this class directly in mocks, where they may want to
/// verify their application has configured all the right request parameters and
/// options.
///
/// All other code uses this type indirectly, via the per-request builders.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    headers: Vec<(String, String)>,
    user_agent: Option<String>,
    attempt_timeout: Option<Duration>,
}

impl RequestOptions {
    /// Adds a custom header to the request.
    ///
    /// Custom headers replace any client default header with the same name. Setting a
    /// header more than once sends all the values.
    pub fn set_header<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) {
        self.headers.push((name.into(), value.into()));
    }

    /// The custom headers for this request.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Prepends this prefix to the user agent header value.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user-agent prefix.
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the timeout for the request.
    pub fn set_attempt_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current timeout.
    pub fn attempt_timeout(&self) -> &Option<Duration> {
        &self.attempt_timeout
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The IBM Watson client libraries for Rust provide a builder for each
/// operation. These builders can be used to set the request parameters, e.g.,
/// the text to translate, as well as any options affecting the request, such
/// as additional headers or timeouts.
pub trait RequestOptionsBuilder {
    /// Adds a custom header to the request.
    fn with_header<K: Into<String>, V: Into<String>>(self, name: K, value: V) -> Self;

    /// Set the user agent header.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the timeout for the request.
    fn with_attempt_timeout<V: Into<Duration>>(self, v: V) -> Self;
}

#[doc(hidden)]
pub mod internal {
    //! Implementation details used by the generated request builders.

    use super::RequestOptions;

    /// Simplify implementation of the [RequestOptionsBuilder][super::RequestOptionsBuilder]
    /// trait in generated code.
    ///
    /// This is an implementation detail, most applications have little need to
    /// worry about or use this trait.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }
}

/// Implements the [RequestOptionsBuilder] trait for any [RequestBuilder][internal::RequestBuilder]
/// implementation.
impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.request_options().set_header(name, value);
        self
    }

    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }
}
