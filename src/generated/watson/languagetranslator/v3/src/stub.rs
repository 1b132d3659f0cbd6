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
use sdk_core::streaming::ByteStream;
use sdk_core::unimplemented::unimplemented_stub;

/// Defines the trait used to implement [super::client::LanguageTranslator].
///
/// Application developers may need to implement this trait to mock
/// `client::LanguageTranslator`. In other use-cases, application developers
/// only use `client::LanguageTranslator` and need not be concerned with this
/// trait or its implementations.
///
/// Services gain new operations routinely. Consequently, this trait gains new
/// methods too. To avoid breaking applications the trait provides a default
/// implementation of each method. These implementations panic.
pub trait LanguageTranslator: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::LanguageTranslator::list_languages].
    fn list_languages(
        &self,
        _req: crate::model::ListLanguagesOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<Response<Option<crate::model::Languages>>>> + Send
    {
        unimplemented_stub()
    }

    /// Implements [super::client::LanguageTranslator::translate].
    fn translate(
        &self,
        _req: crate::model::TranslateOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<Response<Option<crate::model::TranslationResult>>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::LanguageTranslator::list_identifiable_languages].
    fn list_identifiable_languages(
        &self,
        _req: crate::model::ListIdentifiableLanguagesOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<Response<Option<crate::model::IdentifiableLanguages>>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::LanguageTranslator::identify].
    fn identify(
        &self,
        _req: crate::model::IdentifyOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<Response<Option<crate::model::IdentifiedLanguages>>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::LanguageTranslator::list_models].
    fn list_models(
        &self,
        _req: crate::model::ListModelsOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<Response<Option<crate::model::TranslationModels>>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::LanguageTranslator::create_model].
    fn create_model(
        &self,
        _req: crate::model::CreateModelOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<Response<Option<crate::model::TranslationModel>>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::LanguageTranslator::delete_model].
    fn delete_model(
        &self,
        _req: crate::model::DeleteModelOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<Response<Option<crate::model::DeleteModelResult>>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::LanguageTranslator::get_model].
    fn get_model(
        &self,
        _req: crate::model::GetModelOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<Response<Option<crate::model::TranslationModel>>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::LanguageTranslator::list_documents].
    fn list_documents(
        &self,
        _req: crate::model::ListDocumentsOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<Response<Option<crate::model::DocumentList>>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::LanguageTranslator::translate_document].
    fn translate_document(
        &self,
        _req: crate::model::TranslateDocumentOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<Response<Option<crate::model::DocumentStatus>>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::LanguageTranslator::get_document_status].
    fn get_document_status(
        &self,
        _req: crate::model::GetDocumentStatusOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<Response<Option<crate::model::DocumentStatus>>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::LanguageTranslator::delete_document].
    fn delete_document(
        &self,
        _req: crate::model::DeleteDocumentOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<Response<()>>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::LanguageTranslator::get_translated_document].
    fn get_translated_document(
        &self,
        _req: crate::model::GetTranslatedDocumentOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<Response<ByteStream>>> + Send {
        unimplemented_stub()
    }
}
