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
use sdk_core::multipart::{FormData, OCTET_STREAM};
use sdk_core::options::RequestOptions;
use sdk_core::path_parameter;
use sdk_core::query_parameter::QueryParameter;
use sdk_core::response::Response;
use sdk_core::streaming::ByteStream;
use sdk_core::validation;

const JSON: &str = "application/json";

/// Implements [LanguageTranslator](super::stub::LanguageTranslator) using a [ReqwestClient].
#[derive(Clone)]
pub struct LanguageTranslator {
    inner: ReqwestClient,
}

impl std::fmt::Debug for LanguageTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("LanguageTranslator")
            .field("inner", &self.inner)
            .finish()
    }
}

impl LanguageTranslator {
    pub async fn new(config: ClientConfig) -> sdk_core::client_builder::Result<Self> {
        let inner = ReqwestClient::new(config, &crate::info::SERVICE_INFO).await?;
        Ok(Self { inner })
    }

    fn request(&self, method: Method, path: String, operation_id: &str) -> reqwest::RequestBuilder {
        self.inner
            .builder(method, path)
            .header(SDK_ANALYTICS, sdk_analytics(&crate::info::SERVICE_INFO, operation_id))
    }
}

impl super::stub::LanguageTranslator for LanguageTranslator {
    async fn list_languages(
        &self,
        _req: crate::model::ListLanguagesOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::Languages>>> {
        let builder = self
            .request(Method::GET, "/v3/languages".to_string(), "ListLanguages")
            .header(ACCEPT, JSON);
        self.inner
            .execute(builder, RequestBody::Empty, options)
            .await
    }

    async fn translate(
        &self,
        req: crate::model::TranslateOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::TranslationResult>>> {
        validation::required_list("text", &req.text)?;
        let builder = self
            .request(Method::POST, "/v3/translate".to_string(), "Translate")
            .header(ACCEPT, JSON);
        self.inner
            .execute(builder, RequestBody::json(&req)?, options)
            .await
    }

    async fn list_identifiable_languages(
        &self,
        _req: crate::model::ListIdentifiableLanguagesOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::IdentifiableLanguages>>> {
        let builder = self
            .request(
                Method::GET,
                "/v3/identifiable_languages".to_string(),
                "ListIdentifiableLanguages",
            )
            .header(ACCEPT, JSON);
        self.inner
            .execute(builder, RequestBody::Empty, options)
            .await
    }

    async fn identify(
        &self,
        req: crate::model::IdentifyOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::IdentifiedLanguages>>> {
        validation::required_str("text", &req.text)?;
        let builder = self
            .request(Method::POST, "/v3/identify".to_string(), "Identify")
            .header(ACCEPT, JSON);
        self.inner
            .execute(builder, RequestBody::Text(req.text), options)
            .await
    }

    async fn list_models(
        &self,
        req: crate::model::ListModelsOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::TranslationModels>>> {
        let builder = self
            .request(Method::GET, "/v3/models".to_string(), "ListModels")
            .header(ACCEPT, JSON);
        let builder = req.source.as_deref().add(builder, "source");
        let builder = req.target.as_deref().add(builder, "target");
        let builder = req.default.add(builder, "default");
        self.inner
            .execute(builder, RequestBody::Empty, options)
            .await
    }

    async fn create_model(
        &self,
        req: crate::model::CreateModelOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::TranslationModel>>> {
        let base_model_id = validation::required_str("base_model_id", &req.base_model_id)?;
        let builder = self
            .request(Method::POST, "/v3/models".to_string(), "CreateModel")
            .header(ACCEPT, JSON);
        let builder = base_model_id.add(builder, "base_model_id");
        let builder = req.name.as_deref().add(builder, "name");
        let form = FormData::new()
            .optional_file("forced_glossary", req.forced_glossary, OCTET_STREAM)
            .optional_file("parallel_corpus", req.parallel_corpus, OCTET_STREAM);
        self.inner
            .execute(builder, RequestBody::Multipart(form), options)
            .await
    }

    async fn delete_model(
        &self,
        req: crate::model::DeleteModelOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::DeleteModelResult>>> {
        let model_id = path_parameter::required("model_id", &req.model_id)?;
        let builder = self
            .request(Method::DELETE, format!("/v3/models/{model_id}"), "DeleteModel")
            .header(ACCEPT, JSON);
        self.inner
            .execute(builder, RequestBody::Empty, options)
            .await
    }

    async fn get_model(
        &self,
        req: crate::model::GetModelOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::TranslationModel>>> {
        let model_id = path_parameter::required("model_id", &req.model_id)?;
        let builder = self
            .request(Method::GET, format!("/v3/models/{model_id}"), "GetModel")
            .header(ACCEPT, JSON);
        self.inner
            .execute(builder, RequestBody::Empty, options)
            .await
    }

    async fn list_documents(
        &self,
        _req: crate::model::ListDocumentsOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::DocumentList>>> {
        let builder = self
            .request(Method::GET, "/v3/documents".to_string(), "ListDocuments")
            .header(ACCEPT, JSON);
        self.inner
            .execute(builder, RequestBody::Empty, options)
            .await
    }

    async fn translate_document(
        &self,
        req: crate::model::TranslateDocumentOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::DocumentStatus>>> {
        let file = req.file.ok_or_else(|| validation::missing("file"))?;
        let builder = self
            .request(Method::POST, "/v3/documents".to_string(), "TranslateDocument")
            .header(ACCEPT, JSON);
        let form = FormData::new()
            .file("file", file, OCTET_STREAM)
            .optional_text("model_id", req.model_id.as_deref())
            .optional_text("source", req.source.as_deref())
            .optional_text("target", req.target.as_deref())
            .optional_text("document_id", req.document_id.as_deref());
        self.inner
            .execute(builder, RequestBody::Multipart(form), options)
            .await
    }

    async fn get_document_status(
        &self,
        req: crate::model::GetDocumentStatusOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::DocumentStatus>>> {
        let document_id = path_parameter::required("document_id", &req.document_id)?;
        let builder = self
            .request(
                Method::GET,
                format!("/v3/documents/{document_id}"),
                "GetDocumentStatus",
            )
            .header(ACCEPT, JSON);
        self.inner
            .execute(builder, RequestBody::Empty, options)
            .await
    }

    async fn delete_document(
        &self,
        req: crate::model::DeleteDocumentOptions,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let document_id = path_parameter::required("document_id", &req.document_id)?;
        let builder = self.request(
            Method::DELETE,
            format!("/v3/documents/{document_id}"),
            "DeleteDocument",
        );
        self.inner
            .execute::<serde_json::Value>(builder, RequestBody::Empty, options)
            .await
            .map(|r| r.map(|_| ()))
    }

    async fn get_translated_document(
        &self,
        req: crate::model::GetTranslatedDocumentOptions,
        options: RequestOptions,
    ) -> Result<Response<ByteStream>> {
        let document_id = path_parameter::required("document_id", &req.document_id)?;
        let builder = self.request(
            Method::GET,
            format!("/v3/documents/{document_id}/translated_document"),
            "GetTranslatedDocument",
        );
        let builder = match req.accept.as_deref() {
            Some(accept) => builder.header(ACCEPT, accept),
            None => builder,
        };
        self.inner
            .execute_streaming(builder, RequestBody::Empty, options)
            .await
    }
}
