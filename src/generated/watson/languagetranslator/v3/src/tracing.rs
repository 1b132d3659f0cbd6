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
use sdk_core::streaming::ByteStream;

/// Implements a [LanguageTranslator](super::stub::LanguageTranslator) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct LanguageTranslator<T>
where
    T: super::stub::LanguageTranslator + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> LanguageTranslator<T>
where
    T: super::stub::LanguageTranslator + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::LanguageTranslator for LanguageTranslator<T>
where
    T: super::stub::LanguageTranslator + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn list_languages(
        &self,
        req: crate::model::ListLanguagesOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::Languages>>> {
        self.inner.list_languages(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn translate(
        &self,
        req: crate::model::TranslateOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::TranslationResult>>> {
        self.inner.translate(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_identifiable_languages(
        &self,
        req: crate::model::ListIdentifiableLanguagesOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::IdentifiableLanguages>>> {
        self.inner.list_identifiable_languages(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn identify(
        &self,
        req: crate::model::IdentifyOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::IdentifiedLanguages>>> {
        self.inner.identify(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_models(
        &self,
        req: crate::model::ListModelsOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::TranslationModels>>> {
        self.inner.list_models(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_model(
        &self,
        req: crate::model::CreateModelOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::TranslationModel>>> {
        self.inner.create_model(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_model(
        &self,
        req: crate::model::DeleteModelOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::DeleteModelResult>>> {
        self.inner.delete_model(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_model(
        &self,
        req: crate::model::GetModelOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::TranslationModel>>> {
        self.inner.get_model(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_documents(
        &self,
        req: crate::model::ListDocumentsOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::DocumentList>>> {
        self.inner.list_documents(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn translate_document(
        &self,
        req: crate::model::TranslateDocumentOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::DocumentStatus>>> {
        self.inner.translate_document(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_document_status(
        &self,
        req: crate::model::GetDocumentStatusOptions,
        options: RequestOptions,
    ) -> Result<Response<Option<crate::model::DocumentStatus>>> {
        self.inner.get_document_status(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_document(
        &self,
        req: crate::model::DeleteDocumentOptions,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        self.inner.delete_document(req, options).await
    }

    // The payload is streamed, only the response headers are logged.
    #[tracing::instrument(ret)]
    async fn get_translated_document(
        &self,
        req: crate::model::GetTranslatedDocumentOptions,
        options: RequestOptions,
    ) -> Result<Response<ByteStream>> {
        self.inner.get_translated_document(req, options).await
    }
}
