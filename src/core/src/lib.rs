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

//! Core components shared by the IBM Watson client libraries for Rust.
//!
//! This crate contains the types used by all the service clients: the error
//! type, the response wrapper, the per-request options, the client builder,
//! and the authenticators. It also contains the HTTP plumbing used by the
//! generated transports. Most applications use this crate indirectly, through
//! the re-exports in each client library.
//!
//! Types and functions marked `#[doc(hidden)]` are implementation details.
//! They are public because the client libraries need them, but they are not
//! intended for applications and may change without notice.

/// An alias of [std::result::Result] where the error is always [Error][crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

pub mod client_builder;
pub mod credentials;
pub mod error;
pub mod multipart;
pub mod options;
pub mod response;
pub mod streaming;

#[doc(hidden)]
pub mod api_header;

#[doc(hidden)]
pub mod http;

#[doc(hidden)]
pub mod path_parameter;

#[doc(hidden)]
pub mod query_parameter;

#[doc(hidden)]
pub mod unimplemented;

#[doc(hidden)]
pub mod validation;

pub(crate) mod environment;
