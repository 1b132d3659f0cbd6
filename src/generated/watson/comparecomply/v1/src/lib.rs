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

//! IBM Watson Client Libraries for Rust - Compare and Comply V1
//!
//! This crate contains the client library for the Watson Compare and Comply
//! service. The service analyzes governing documents, such as contracts and
//! invoices. It converts documents to HTML, classifies their elements and
//! parties, extracts tables, compares pairs of documents, and processes whole
//! Cloud Object Storage buckets as batches.
//!
//! # Example
//! ```no_run
//! # use ibm_watson_compare_comply_v1::client::CompareComply;
//! # use ibm_watson_compare_comply_v1::credentials::BasicAuthenticator;
//! # use ibm_watson_compare_comply_v1::multipart::FilePart;
//! # async fn sample() -> anyhow::Result<()> {
//! let client = CompareComply::builder()
//!     .with_credentials(BasicAuthenticator::new("apikey", "my-api-key"))
//!     .build()
//!     .await?;
//! let contract = FilePart::from_path("contract.pdf").await?;
//! let result = client
//!     .classify_elements()
//!     .set_file(contract)
//!     .send()
//!     .await?;
//! for element in result.iter().flat_map(|r| r.elements.iter()) {
//!     println!("{:?}", element.text);
//! }
//! # Ok(()) }
//! ```

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
        service_name: "compare_comply",
        analytics_name: "compare-comply",
        service_version: "V1",
        default_host: super::DEFAULT_HOST,
        default_version: super::DEFAULT_VERSION,
    };
}

/// The default endpoint, in the `us-south` region.
pub const DEFAULT_HOST: &str = "https://api.us-south.compare-comply.watson.cloud.ibm.com";

/// The API version date used unless the client is configured with another.
pub const DEFAULT_VERSION: &str = "2018-10-15";

mod tracing;
mod transport;
