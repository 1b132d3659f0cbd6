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
use reqwest::Method;
use reqwest::header::ACCEPT;
use sdk_core::api_header::{SDK_ANALYTICS, sdk_analytics};
use sdk_core::client_builder::internal::ClientConfig;
use sdk_core::http::{ReqwestClient, RequestBody};
use sdk_core::multipart::{FilePart, FormData, OCTET_STREAM};
use sdk_core::options::RequestOptions;
use sdk_core::path_parameter;
use sdk_core::query_parameter::QueryParameter;
use sdk_core::response::Response;
use sdk_core::validation;

const JSON: &str = "application/json";

/// Implements [CompareComply](super::stub::CompareComply) using a [ReqwestClient].
#[derive(Clone)]
pub struct CompareComply {
    inner: ReqwestClient,
}

impl std::fmt::Debug for CompareComply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("CompareComply")
            .field("inner", &self.inner)
            .finish()
    }
}

impl CompareComply {
    pub async fn new(config: ClientConfig) -> sdk_core::client_builder::Result<Self> {
        let inner = ReqwestClient::new(config, &crate::info::SERVICE_INFO).await?;
        Ok(Self { inner })
    }

    fn request(&self, method: Method, path: String, operation_id: &str) -> reqwest::RequestBuilder {
        self.inner
            .builder(method, path)
            .header(SDK_ANALYTICS, sdk_analytics(&crate::info::SERVICE_INFO, operation_id))
            .header(ACCEPT, JSON)
    }

    // The three single-document analyses share the same request shape.
    async fn analyze<O>(
        &self,
        path: &str,
        operation_id: &str,
        file: Option<FilePart>,
        model: Option<&str>,
        options: RequestOptions,
    ) -> Result<Response<Option<O>>>
    where
        O: serde::de::DeserializeOwned,
    {
        let file = file.ok_or_else(|| validation::missing("file"))?;
        let builder = self.request(Method::POST, path.to_string(), operation_id);
        let builder = model.add(builder, "model");
        let form = FormData::new().file("file", file, OCTET_STREAM);
        self.inner
            .execute(builder, RequestBody::Multipart(form), options)
            .await
    }
}

impl super::stub::CompareComply for CompareComply {
    async fn convert_to_html(
        &self,
        req: crate::model::ConvertToHtmlOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::HtmlReturn>>> {
        self.analyze(
            "/v1/html_conversion",
            "ConvertToHtml",
            req.file,
            req.model.as_deref(),
            options,
        )
        .await
    }

    async fn classify_elements(
        &self,
        req: crate::model::ClassifyElementsOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::ClassifyReturn>>> {
        self.analyze(
            "/v1/element_classification",
            "ClassifyElements",
            req.file,
            req.model.as_deref(),
            options,
        )
        .await
    }

    async fn extract_tables(
        &self,
        req: crate::model::ExtractTablesOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::TableReturn>>> {
        self.analyze(
            "/v1/tables",
            "ExtractTables",
            req.file,
            req.model.as_deref(),
            options,
        )
        .await
    }

    async fn compare_documents(
        &self,
        req: crate::model::CompareDocumentsOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::CompareReturn>>> {
        let file_1 = req.file_1.ok_or_else(|| validation::missing("file_1"))?;
        let file_2 = req.file_2.ok_or_else(|| validation::missing("file_2"))?;
        let builder = self.request(
            Method::POST,
            "/v1/comparison".to_string(),
            "CompareDocuments",
        );
        let builder = req.file_1_label.as_deref().add(builder, "file_1_label");
        let builder = req.file_2_label.as_deref().add(builder, "file_2_label");
        let builder = req.model.as_deref().add(builder, "model");
        let form = FormData::new()
            .file("file_1", file_1, OCTET_STREAM)
            .file("file_2", file_2, OCTET_STREAM);
        self.inner
            .execute(builder, RequestBody::Multipart(form), options)
            .await
    }

    async fn add_feedback(
        &self,
        req: crate::model::AddFeedbackOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::FeedbackReturn>>> {
        let data = validation::required("feedback_data", req.feedback_data.as_ref())?;
        validation::required_str("feedback_data.feedback_type", &data.feedback_type)?;
        validation::required("feedback_data.location", data.location.as_ref())?;
        validation::required_str("feedback_data.text", &data.text)?;
        validation::required("feedback_data.original_labels", data.original_labels.as_ref())?;
        validation::required("feedback_data.updated_labels", data.updated_labels.as_ref())?;
        let builder = self.request(Method::POST, "/v1/feedback".to_string(), "AddFeedback");
        self.inner
            .execute(builder, RequestBody::json(&req)?, options)
            .await
    }

    async fn list_feedback(
        &self,
        req: crate::model::ListFeedbackOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::FeedbackList>>> {
        let builder = self.request(Method::GET, "/v1/feedback".to_string(), "ListFeedback");
        let builder = req.feedback_type.as_deref().add(builder, "feedback_type");
        let builder = req.before.as_ref().add(builder, "before");
        let builder = req.after.as_ref().add(builder, "after");
        let builder = req.document_title.as_deref().add(builder, "document_title");
        let builder = req.model_id.as_deref().add(builder, "model_id");
        let builder = req.model_version.as_deref().add(builder, "model_version");
        let builder = req
            .category_removed
            .as_deref()
            .add(builder, "category_removed");
        let builder = req.category_added.as_deref().add(builder, "category_added");
        let builder = req
            .category_not_changed
            .as_deref()
            .add(builder, "category_not_changed");
        let builder = req.type_removed.as_deref().add(builder, "type_removed");
        let builder = req.type_added.as_deref().add(builder, "type_added");
        let builder = req
            .type_not_changed
            .as_deref()
            .add(builder, "type_not_changed");
        let builder = req.page_limit.add(builder, "page_limit");
        let builder = req.cursor.as_deref().add(builder, "cursor");
        let builder = req.sort.as_deref().add(builder, "sort");
        let builder = req.include_total.add(builder, "include_total");
        self.inner
            .execute(builder, RequestBody::Empty, options)
            .await
    }

    async fn get_feedback(
        &self,
        req: crate::model::GetFeedbackOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::GetFeedback>>> {
        let feedback_id = path_parameter::required("feedback_id", &req.feedback_id)?;
        let builder = self.request(
            Method::GET,
            format!("/v1/feedback/{feedback_id}"),
            "GetFeedback",
        );
        let builder = req.model.as_deref().add(builder, "model");
        self.inner
            .execute(builder, RequestBody::Empty, options)
            .await
    }

    async fn delete_feedback(
        &self,
        req: crate::model::DeleteFeedbackOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::FeedbackDeleted>>> {
        let feedback_id = path_parameter::required("feedback_id", &req.feedback_id)?;
        let builder = self.request(
            Method::DELETE,
            format!("/v1/feedback/{feedback_id}"),
            "DeleteFeedback",
        );
        let builder = req.model.as_deref().add(builder, "model");
        self.inner
            .execute(builder, RequestBody::Empty, options)
            .await
    }

    async fn create_batch(
        &self,
        req: crate::model::CreateBatchOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::BatchStatus>>> {
        let function = validation::required_str("function", &req.function)?;
        let input_credentials_file = req
            .input_credentials_file
            .ok_or_else(|| validation::missing("input_credentials_file"))?;
        let input_bucket_location =
            validation::required_str("input_bucket_location", &req.input_bucket_location)?;
        let input_bucket_name = validation::required_str("input_bucket_name", &req.input_bucket_name)?;
        let output_credentials_file = req
            .output_credentials_file
            .ok_or_else(|| validation::missing("output_credentials_file"))?;
        let output_bucket_location =
            validation::required_str("output_bucket_location", &req.output_bucket_location)?;
        let output_bucket_name =
            validation::required_str("output_bucket_name", &req.output_bucket_name)?;

        let builder = self.request(Method::POST, "/v1/batches".to_string(), "CreateBatch");
        let builder = function.add(builder, "function");
        let builder = req.model.as_deref().add(builder, "model");
        // The credentials files are JSON documents.
        let form = FormData::new()
            .file("input_credentials_file", input_credentials_file, JSON)
            .text("input_bucket_location", input_bucket_location)
            .text("input_bucket_name", input_bucket_name)
            .file("output_credentials_file", output_credentials_file, JSON)
            .text("output_bucket_location", output_bucket_location)
            .text("output_bucket_name", output_bucket_name);
        self.inner
            .execute(builder, RequestBody::Multipart(form), options)
            .await
    }

    async fn list_batches(
        &self,
        _req: crate::model::ListBatchesOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::Batches>>> {
        let builder = self.request(Method::GET, "/v1/batches".to_string(), "ListBatches");
        self.inner
            .execute(builder, RequestBody::Empty, options)
            .await
    }

    async fn get_batch(
        &self,
        req: crate::model::GetBatchOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::BatchStatus>>> {
        let batch_id = path_parameter::required("batch_id", &req.batch_id)?;
        let builder = self.request(Method::GET, format!("/v1/batches/{batch_id}"), "GetBatch");
        self.inner
            .execute(builder, RequestBody::Empty, options)
            .await
    }

    async fn update_batch(
        &self,
        req: crate::model::UpdateBatchOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::BatchStatus>>> {
        let batch_id = path_parameter::required("batch_id", &req.batch_id)?;
        let action = validation::required_str("action", &req.action)?;
        let builder = self.request(
            Method::PUT,
            format!("/v1/batches/{batch_id}"),
            "UpdateBatch",
        );
        let builder = action.add(builder, "action");
        let builder = req.model.as_deref().add(builder, "model");
        self.inner
            .execute(builder, RequestBody::Empty, options)
            .await
    }
}
