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

use crate::Result;
use sdk_core::options::RequestOptions;
use sdk_core::response::Response;

/// Implements a [CompareComply](super::stub::CompareComply) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct CompareComply<T>
where
    T: super::stub::CompareComply + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> CompareComply<T>
where
    T: super::stub::CompareComply + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::CompareComply for CompareComply<T>
where
    T: super::stub::CompareComply + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn convert_to_html(
        &self,
        req: crate::model::ConvertToHtmlOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::HtmlReturn>>> {
        self.inner.convert_to_html(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn classify_elements(
        &self,
        req: crate::model::ClassifyElementsOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::ClassifyReturn>>> {
        self.inner.classify_elements(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn extract_tables(
        &self,
        req: crate::model::ExtractTablesOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::TableReturn>>> {
        self.inner.extract_tables(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn compare_documents(
        &self,
        req: crate::model::CompareDocumentsOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::CompareReturn>>> {
        self.inner.compare_documents(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn add_feedback(
        &self,
        req: crate::model::AddFeedbackOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::FeedbackReturn>>> {
        self.inner.add_feedback(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_feedback(
        &self,
        req: crate::model::ListFeedbackOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::FeedbackList>>> {
        self.inner.list_feedback(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_feedback(
        &self,
        req: crate::model::GetFeedbackOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::GetFeedback>>> {
        self.inner.get_feedback(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_feedback(
        &self,
        req: crate::model::DeleteFeedbackOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::FeedbackDeleted>>> {
        self.inner.delete_feedback(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_batch(
        &self,
        req: crate::model::CreateBatchOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::BatchStatus>>> {
        self.inner.create_batch(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_batches(
        &self,
        req: crate::model::ListBatchesOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::Batches>>> {
        self.inner.list_batches(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_batch(
        &self,
        req: crate::model::GetBatchOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::BatchStatus>>> {
        self.inner.get_batch(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_batch(
        &self,
        req: crate::model::UpdateBatchOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::BatchStatus>>> {
        self.inner.update_batch(req, options).await
    }
}
