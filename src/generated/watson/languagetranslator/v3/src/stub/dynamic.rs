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
use sdk_core::streaming::ByteStream;

/// A dyn-compatible, crate-private version of [super::LanguageTranslator].
#[async_trait::async_trait]
pub trait LanguageTranslator: std::fmt::Debug + Send + Sync {
    async fn list_languages(
        &self,
        req: crate::model::ListLanguagesOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::Languages>>>;

    async fn translate(
        &self,
        req: crate::model::TranslateOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::TranslationResult>>>;

    async fn list_identifiable_languages(
        &self,
        req: crate::model::ListIdentifiableLanguagesOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::IdentifiableLanguages>>>;

    async fn identify(
        &self,
        req: crate::model::IdentifyOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::IdentifiedLanguages>>>;

    async fn list_models(
        &self,
        req: crate::model::ListModelsOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::TranslationModels>>>;

    async fn create_model(
        &self,
        req: crate::model::CreateModelOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::TranslationModel>>>;

    async fn delete_model(
        &self,
        req: crate::model::DeleteModelOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::DeleteModelResult>>>;

    async fn get_model(
        &self,
        req: crate::model::GetModelOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::TranslationModel>>>;

    async fn list_documents(
        &self,
        req: crate::model::ListDocumentsOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::DocumentList>>>;

    async fn translate_document(
        &self,
        req: crate::model::TranslateDocumentOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::DocumentStatus>>>;

    async fn get_document_status(
        &self,
        req: crate::model::GetDocumentStatusOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::DocumentStatus>>>;

    async fn delete_document(
        &self,
        req: crate::model::DeleteDocumentOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<()>>;

    async fn get_translated_document(
        &self,
        req: crate::model::GetTranslatedDocumentOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<ByteStream>>;
}

/// All implementations of [super::LanguageTranslator] also implement [LanguageTranslator].
#[async_trait::async_trait]
impl<T: super::LanguageTranslator> LanguageTranslator for T {
    async fn list_languages(
        &self,
        req: crate::model::ListLanguagesOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::Languages>>> {
        T::list_languages(self, req, options).await
    }

    async fn translate(
        &self,
        req: crate::model::TranslateOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::TranslationResult>>> {
        T::translate(self, req, options).await
    }

    async fn list_identifiable_languages(
        &self,
        req: crate::model::ListIdentifiableLanguagesOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::IdentifiableLanguages>>> {
        T::list_identifiable_languages(self, req, options).await
    }

    async fn identify(
        &self,
        req: crate::model::IdentifyOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::IdentifiedLanguages>>> {
        T::identify(self, req, options).await
    }

    async fn list_models(
        &self,
        req: crate::model::ListModelsOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::TranslationModels>>> {
        T::list_models(self, req, options).await
    }

    async fn create_model(
        &self,
        req: crate::model::CreateModelOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::TranslationModel>>> {
        T::create_model(self, req, options).await
    }

    async fn delete_model(
        &self,
        req: crate::model::DeleteModelOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::DeleteModelResult>>> {
        T::delete_model(self, req, options).await
    }

    async fn get_model(
        &self,
        req: crate::model::GetModelOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::TranslationModel>>> {
        T::get_model(self, req, options).await
    }

    async fn list_documents(
        &self,
        req: crate::model::ListDocumentsOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::DocumentList>>> {
        T::list_documents(self, req, options).await
    }

    async fn translate_document(
        &self,
        req: crate::model::TranslateDocumentOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::DocumentStatus>>> {
        T::translate_document(self, req, options).await
    }

    async fn get_document_status(
        &self,
        req: crate::model::GetDocumentStatusOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<Option<crate::model::DocumentStatus>>> {
        T::get_document_status(self, req, options).await
    }

    async fn delete_document(
        &self,
        req: crate::model::DeleteDocumentOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<()>> {
        T::delete_document(self, req, options).await
    }

    async fn get_translated_document(
        &self,
        req: crate::model::GetTranslatedDocumentOptions,
        options: RequestOptions,
    ) -> crate::Result<Response<ByteStream>> {
        T::get_translated_document(self, req, options).await
    }
}
