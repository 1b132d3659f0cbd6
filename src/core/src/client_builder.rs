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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoint, the API version date, or
//! the authenticator. The IBM Watson client libraries for Rust use a generic
//! builder type to provide such functionality. The types in this module
//! implement the client builders.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder.
//!
//! Any setting not configured in the builder is loaded from the environment,
//! using variables prefixed by the service name. For example, the Language
//! Translator client reads `LANGUAGE_TRANSLATOR_URL`,
//! `LANGUAGE_TRANSLATOR_AUTH_TYPE`, `LANGUAGE_TRANSLATOR_USERNAME`, and so on.
//!
//! ## Example: create a client with a different endpoint
//!
//! ```
//! # use ibm_cloud_sdk_core::client_builder::examples;
//! # use ibm_cloud_sdk_core::client_builder::Result;
//! # use ibm_cloud_sdk_core::credentials::BasicAuthenticator;
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder()
//!     .with_endpoint("https://api.eu-de.language-translator.watson.cloud.ibm.com")
//!     .with_credentials(BasicAuthenticator::new("apikey", "my-api-key"))
//!     .build().await?;
//! # Result::<()>::Ok(()) });
//! ```

use crate::credentials::Credentials;

/// The result type for client construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```no_run
/// # use ibm_cloud_sdk_core::client_builder::examples;
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// use examples::Client; // Placeholder for examples
/// match Client::builder().build().await {
///     Ok(c) => { /* use the client */ },
///     Err(e) if e.is_credentials() => {
///         println!("error configuring the authenticator {e:?}");
///     },
///     Err(e) if e.is_transport() => {
///         println!("error initializing the HTTP client {e:?}");
///     },
///     Err(e) => { println!("some other error {e:?}"); },
/// };
/// # });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client could not configure the authenticator.
    ///
    /// Either no authenticator was configured in the builder or in the
    /// environment, or the configured authenticator is invalid.
    pub fn is_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::Credentials(_))
    }

    /// If true, the client could not initialize the HTTP client.
    ///
    /// For example, a default header has an invalid name or value.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Credentials(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not configure the authenticator")]
    Credentials(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// In the IBM Watson client libraries for Rust a "client" represents a
/// connection to a specific service. Each client library defines one or more
/// client types. All the clients are initialized using a `ClientBuilder`.
///
/// Applications obtain a builder with the correct generic types using the
/// `builder()` method on each client:
/// ```
/// # use ibm_cloud_sdk_core::client_builder::examples;
/// # use ibm_cloud_sdk_core::client_builder::Result;
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// use examples::Client; // Placeholder for examples
/// let builder = Client::builder();
/// # Result::<()>::Ok(()) });
/// ```
///
/// To create a client with the default configuration just invoke the
/// `.build()` method. The defaults are loaded from the environment.
#[derive(Clone, Debug)]
pub struct ClientBuilder<F> {
    config: internal::ClientConfig,
    factory: F,
}

impl<F> ClientBuilder<F> {
    /// Creates a new client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    ///
    /// Each IBM Cloud region hosts its own endpoint, for example
    /// `https://api.eu-de.language-translator.watson.cloud.ibm.com`. Dedicated
    /// and private instances use different endpoints too.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Sets the API version date.
    ///
    /// Every request includes this value as the `version` query parameter.
    /// The service uses it to select the API behavior.
    pub fn with_version<V: Into<String>>(mut self, v: V) -> Self {
        self.config.version = Some(v.into());
        self
    }

    /// Configures the authenticator.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_sdk_core::client_builder::examples;
    /// # use ibm_cloud_sdk_core::client_builder::Result;
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// use ibm_cloud_sdk_core::credentials::BearerTokenAuthenticator;
    /// let client = Client::builder()
    ///     .with_credentials(BearerTokenAuthenticator::new("my-access-token"))
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_credentials<T: Into<Credentials>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Sets the service name used to find the configuration in the
    /// environment.
    ///
    /// For example, with `with_service_name("my_translator")` the client
    /// reads `MY_TRANSLATOR_URL`, `MY_TRANSLATOR_AUTH_TYPE`, and so on.
    pub fn with_service_name<V: Into<String>>(mut self, v: V) -> Self {
        self.config.service_name = Some(v.into());
        self
    }

    /// Adds a header sent with every request.
    ///
    /// A per-request header with the same name replaces the default header.
    pub fn with_default_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.config.default_headers.push((name.into(), value.into()));
        self
    }

    /// Disables the TLS certificate verification.
    ///
    /// Only use this with private instances using self-signed certificates.
    pub fn with_disable_ssl_verification(mut self) -> Self {
        self.config.disable_ssl_verification = true;
        self
    }

    /// Enables tracing.
    ///
    /// The client libraries can be dynamically instrumented with the Tokio
    /// [tracing] framework. Setting this flag enables this instrumentation.
    /// Setting the `IBM_CLOUD_RUST_LOGGING` environment variable to `true`
    /// has the same effect.
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }
}

#[doc(hidden)]
pub mod internal {
    use super::*;

    pub(crate) const LOGGING_VAR: &str = "IBM_CLOUD_RUST_LOGGING";

    pub trait ClientFactory {
        type Client;
        fn build(self, config: ClientConfig) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, C>(factory: F) -> super::ClientBuilder<F>
    where
        F: ClientFactory<Client = C>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// Configure a client.
    ///
    /// A common implementation detail for all the clients. Any field left
    /// unset is loaded from the environment, or uses the service defaults.
    #[derive(Clone, Debug, Default)]
    pub struct ClientConfig {
        pub endpoint: Option<String>,
        pub version: Option<String>,
        pub cred: Option<Credentials>,
        pub service_name: Option<String>,
        pub default_headers: Vec<(String, String)>,
        pub disable_ssl_verification: bool,
        pub tracing: bool,
    }

    /// The defaults for each service.
    #[derive(Copy, Clone, Debug)]
    pub struct ServiceInfo {
        /// The name used to find the service configuration in the environment.
        pub service_name: &'static str,
        /// The name reported in the SDK analytics header.
        pub analytics_name: &'static str,
        /// The major version of the API, e.g. `V3`.
        pub service_version: &'static str,
        pub default_host: &'static str,
        pub default_version: &'static str,
    }

    // Returns true if the environment or client configuration enables tracing.
    pub fn tracing_enabled(config: &ClientConfig) -> bool {
        if config.tracing {
            return true;
        }
        std::env::var(LOGGING_VAR)
            .map(|v| v == "true")
            .unwrap_or(false)
    }
}

#[doc(hidden)]
pub mod examples {
    //! This module contains helper types used in the rustdoc examples.

    use super::Result;
    type Config = super::internal::ClientConfig;

    #[allow(dead_code)]
    pub struct Client(Config);
    impl Client {
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory)
        }

        async fn new(config: Config) -> Result<Self> {
            Ok(Self(config))
        }
    }
    mod client {
        pub type Builder = super::super::ClientBuilder<Factory>;
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Client = super::Client;
            async fn build(self, config: super::Config) -> super::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    // We use the examples as scaffolding for the tests.
    #[cfg(test)]
    mod test {
        use super::*;
        use crate::credentials::BasicAuthenticator;

        #[tokio::test]
        async fn build_default() -> anyhow::Result<()> {
            let client = Client::builder().build().await?;
            let config = client.0;
            assert_eq!(config.endpoint, None);
            assert_eq!(config.version, None);
            assert!(config.cred.is_none(), "{config:?}");
            assert_eq!(config.service_name, None);
            assert!(config.default_headers.is_empty(), "{config:?}");
            assert!(!config.disable_ssl_verification);
            assert!(!config.tracing);
            Ok(())
        }

        #[tokio::test]
        async fn endpoint_and_version() -> anyhow::Result<()> {
            let client = Client::builder()
                .with_endpoint("http://example.com")
                .with_version("2018-05-01")
                .build()
                .await?;
            let config = client.0;
            assert_eq!(config.endpoint.as_deref(), Some("http://example.com"));
            assert_eq!(config.version.as_deref(), Some("2018-05-01"));
            Ok(())
        }

        #[tokio::test]
        async fn credentials() -> anyhow::Result<()> {
            let client = Client::builder()
                .with_credentials(BasicAuthenticator::new("user", "pass"))
                .build()
                .await?;
            let config = client.0;
            let cred = config.cred.map(|c| c.authentication_type());
            assert_eq!(cred, Some("basic"));
            Ok(())
        }

        #[tokio::test]
        async fn service_name_and_headers() -> anyhow::Result<()> {
            let client = Client::builder()
                .with_service_name("my_translator")
                .with_default_header("X-Watson-Learning-Opt-Out", "true")
                .with_disable_ssl_verification()
                .with_tracing()
                .build()
                .await?;
            let config = client.0;
            assert_eq!(config.service_name.as_deref(), Some("my_translator"));
            assert_eq!(
                config.default_headers,
                vec![("X-Watson-Learning-Opt-Out".to_string(), "true".to_string())]
            );
            assert!(config.disable_ssl_verification);
            assert!(config.tracing);
            Ok(())
        }
    }
}
