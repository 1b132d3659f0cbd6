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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

#![allow(rustdoc::broken_intra_doc_links)]

pub(crate) mod dynamic;

use sdk_core::options::RequestOptions;
use sdk_core::response::Response;
use sdk_core::unimplemented::unimplemented_stub;

/// Defines the trait used to implement [super::client::CompareComply].
///
/// Application developers may need to implement this trait to mock
/// `client::CompareComply`. In other use-cases, application developers only
/// use `client::CompareComply` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new operations routinely. Consequently, this trait gains new
/// methods too. To avoid breaking applications the trait provides a default
/// implementation of each method. These implementations panic.
pub trait CompareComply: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::CompareComply::convert_to_html].
    fn convert_to_html(
        &self,
        _req: crate::model::ConvertToHtmlOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<Response<Option<crate::model::HtmlReturn>>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::CompareComply::classify_elements].
    fn classify_elements(
        &self,
        _req: crate::model::ClassifyElementsOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<Response<Option<crate::model::ClassifyReturn>>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::CompareComply::extract_tables].
    fn extract_tables(
        &self,
        _req: crate::model::ExtractTablesOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<Response<Option<crate::model::TableReturn>>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::CompareComply::compare_documents].
    fn compare_documents(
        &self,
        _req: crate::model::CompareDocumentsOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<Response<Option<crate::model::CompareReturn>>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::CompareComply::add_feedback].
    fn add_feedback(
        &self,
        _req: crate::model::AddFeedbackOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<Response<Option<crate::model::FeedbackReturn>>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::CompareComply::list_feedback].
    fn list_feedback(
        &self,
        _req: crate::model::ListFeedbackOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<Response<Option<crate::model::FeedbackList>>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::CompareComply::get_feedback].
    fn get_feedback(
        &self,
        _req: crate::model::GetFeedbackOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<Response<Option<crate::model::GetFeedback>>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::CompareComply::delete_feedback].
    fn delete_feedback(
        &self,
        _req: crate::model::DeleteFeedbackOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<Response<Option<crate::model::FeedbackDeleted>>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::CompareComply::create_batch].
    fn create_batch(
        &self,
        _req: crate::model::CreateBatchOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<Response<Option<crate::model::BatchStatus>>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::CompareComply::list_batches].
    fn list_batches(
        &self,
        _req: crate::model::ListBatchesOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<Response<Option<crate::model::Batches>>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::CompareComply::get_batch].
    fn get_batch(
        &self,
        _req: crate::model::GetBatchOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<Response<Option<crate::model::BatchStatus>>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::CompareComply::update_batch].
    fn update_batch(
        &self,
        _req: crate::model::UpdateBatchOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<Response<Option<crate::model::BatchStatus>>>,
    > + Send {
        unimplemented_stub()
    }
}
