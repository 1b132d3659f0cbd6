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

//! Errors returned by the IBM Watson client libraries.
//!
//! The client libraries distinguish between errors detected before a request
//! is sent (e.g. a required parameter is missing), errors sending the request
//! or receiving the response (e.g. the connection is dropped), and errors
//! returned by the service itself.
//!
//! # Examples
//!
//! ```
//! use ibm_cloud_sdk_core::error::Error;
//! fn handle_error(e: Error) {
//!     if let Some(details) = e.service_error() {
//!         println!("the service rejected the request: {}", details.message());
//!     }
//! }
//! ```

mod core_error;
mod service_error;
pub use core_error::*;
pub use service_error::*;
