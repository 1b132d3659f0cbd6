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

use sdk_core::options::RequestOptions;
use sdk_core::response::Response;

/// A dyn-compatible, crate-private version of [super::CompareComply].
#[async_trait::async_trait]
pub trait CompareComply: std::fmt::Debug + Send + Sync {
    async fn convert_to_html(
        &self,
        req: crate::model::ConvertToHtmlOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::HtmlReturn>>>;

    async fn classify_elements(
        &self,
        req: crate::model::ClassifyElementsOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::ClassifyReturn>>>;

    async fn extract_tables(
        &self,
        req: crate::model::ExtractTablesOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::TableReturn>>>;

    async fn compare_documents(
        &self,
        req: crate::model::CompareDocumentsOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::CompareReturn>>>;

    async fn add_feedback(
        &self,
        req: crate::model::AddFeedbackOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::FeedbackReturn>>>;

    async fn list_feedback(
        &self,
        req: crate::model::ListFeedbackOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::FeedbackList>>>;

    async fn get_feedback(
        &self,
        req: crate::model::GetFeedbackOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::GetFeedback>>>;

    async fn delete_feedback(
        &self,
        req: crate::model::DeleteFeedbackOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::FeedbackDeleted>>>;

    async fn create_batch(
        &self,
        req: crate::model::CreateBatchOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::BatchStatus>>>;

    async fn list_batches(
        &self,
        req: crate::model::ListBatchesOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::Batches>>>;

    async fn get_batch(
        &self,
        req: crate::model::GetBatchOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::BatchStatus>>>;

    async fn update_batch(
        &self,
        req: crate::model::UpdateBatchOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::BatchStatus>>>;
}

/// All implementations of [super::CompareComply] also implement [CompareComply].
#[async_trait::async_trait]
impl<T: super::CompareComply> CompareComply for T {
    async fn convert_to_html(
        &self,
        req: crate::model::ConvertToHtmlOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::HtmlReturn>>> {
        T::convert_to_html(self, req, options).await
    }

    async fn classify_elements(
        &self,
        req: crate::model::ClassifyElementsOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::ClassifyReturn>>> {
        T::classify_elements(self, req, options).await
    }

    async fn extract_tables(
        &self,
        req: crate::model::ExtractTablesOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::TableReturn>>> {
        T::extract_tables(self, req, options).await
    }

    async fn compare_documents(
        &self,
        req: crate::model::CompareDocumentsOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::CompareReturn>>> {
        T::compare_documents(self, req, options).await
    }

    async fn add_feedback(
        &self,
        req: crate::model::AddFeedbackOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::FeedbackReturn>>> {
        T::add_feedback(self, req, options).await
    }

    async fn list_feedback(
        &self,
        req: crate::model::ListFeedbackOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::FeedbackList>>> {
        T::list_feedback(self, req, options).await
    }

    async fn get_feedback(
        &self,
        req: crate::model::GetFeedbackOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::GetFeedback>>> {
        T::get_feedback(self, req, options).await
    }

    async fn delete_feedback(
        &self,
        req: crate::model::DeleteFeedbackOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::FeedbackDeleted>>> {
        T::delete_feedback(self, req, options).await
    }

    async fn create_batch(
        &self,
        req: crate::model::CreateBatchOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::BatchStatus>>> {
        T::create_batch(self, req, options).await
    }

    async fn list_batches(
        &self,
        req: crate::model::ListBatchesOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::Batches>>> {
        T::list_batches(self, req, options).await
    }

    async fn get_batch(
        &self,
        req: crate::model::GetBatchOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::BatchStatus>>> {
        T::get_batch(self, req, options).await
    }

    async fn update_batch(
        &self,
        req: crate::model::UpdateBatchOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::BatchStatus>>> {
        T::update_batch(self, req, options).await
    }
}
