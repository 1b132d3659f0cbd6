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

//! IBM Watson Client Libraries for Rust - Language Translator V3
//!
//! This crate contains the client library for the Watson Language Translator
//! service. The service translates text and documents from one language to
//! another, identifies the language of a piece of text, and manages custom
//! translation models.
//!
//! # Example
//! ```no_run
//! # use ibm_watson_language_translator_v3::client::LanguageTranslator;
//! # use ibm_watson_language_translator_v3::credentials::BasicAuthenticator;
//! # async fn sample() -> anyhow::Result<()> {
//! let client = LanguageTranslator::builder()
//!     .with_credentials(BasicAuthenticator::new("apikey", "my-api-key"))
//!     .build()
//!     .await?;
//! let result = client
//!     .translate()
//!     .set_text(["Hello"])
//!     .set_model_id("en-es")
//!     .send()
//!     .await?;
//! println!("result={result:?}");
//! # Ok(()) }
//! ```
//!
//! **WARNING:** the Language Translator service has been deprecated by IBM.
//! Existing instances continue to work until the service is withdrawn.

/// The re-exported result type, used by all the operations.
pub use sdk_core::Result;

/// The re-exported error type, used by all the operations.
pub use sdk_core::error::Error;

/// The messages and enums that are part of this client library.
pub mod model;

pub use sdk_core::credentials;
pub use sdk_core::multipart;
pub use sdk_core::options::RequestOptionsBuilder;
pub use sdk_core::response::Response;
pub use sdk_core::streaming::ByteStream;

/// Concrete implementations of this client library traits.
pub mod client;

/// Request builders.
pub mod builder;

/// Traits to mock the clients in this library.
///
/// Application developers may need to mock the clients in this library to test
/// how their application works with different (and sometimes hard to trigger)
/// client and service behavior. Such test can define mocks implementing the
/// trait(s) defined in this module, initialize the client with an instance of
/// this mock in their tests, and verify their application responds as expected.
pub mod stub;

pub(crate) mod info {
    use sdk_core::client_builder::internal::ServiceInfo;

    pub(crate) const SERVICE_INFO: ServiceInfo = ServiceInfo {
        service_name: "language_translator",
        analytics_name: "language_translator",
        service_version: "V3",
        default_host: super::DEFAULT_HOST,
        default_version: super::DEFAULT_VERSION,
    };
}

/// The default endpoint, in the `us-south` region.
pub const DEFAULT_HOST: &str = "https://api.us-south.language-translator.watson.cloud.ibm.com";

/// The API version date used unless the client is configured with another.
pub const DEFAULT_VERSION: &str = "2018-05-01";

mod tracing;
mod transport;
