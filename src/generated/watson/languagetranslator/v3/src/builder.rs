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

pub mod language_translator {
    use crate::Result;
    use sdk_core::multipart::FilePart;

    /// A builder for [LanguageTranslator][crate::client::LanguageTranslator].
    ///
    /// ```no_run
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use ibm_watson_language_translator_v3::builder::language_translator::ClientBuilder;
    /// # use ibm_watson_language_translator_v3::client::LanguageTranslator;
    /// let builder: ClientBuilder = LanguageTranslator::builder();
    /// let client = builder
    ///     .with_endpoint("https://api.eu-de.example.watson.cloud.ibm.com")
    ///     .build()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub type ClientBuilder = sdk_core::client_builder::ClientBuilder<client::Factory>;

    pub(crate) mod client {
        use super::super::super::client::LanguageTranslator;
        pub struct Factory;
        impl sdk_core::client_builder::internal::ClientFactory for Factory {
            type Client = LanguageTranslator;
            async fn build(
                self,
                config: sdk_core::client_builder::internal::ClientConfig,
            ) -> sdk_core::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [LanguageTranslator][crate::client::LanguageTranslator] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::LanguageTranslator>,
        request: R,
        options: sdk_core::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LanguageTranslator>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: sdk_core::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [LanguageTranslator::list_languages][crate::client::LanguageTranslator::list_languages] calls.
    ///
    /// # Example
    /// ```
    /// # use ibm_watson_language_translator_v3::builder::language_translator::ListLanguages;
    /// # async fn sample() -> ibm_watson_language_translator_v3::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListLanguages {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListLanguages(RequestBuilder<crate::model::ListLanguagesOptions>);

    impl ListLanguages {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LanguageTranslator>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLanguagesOptions>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<sdk_core::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// Returns `None` if the service returns an empty payload.
        pub async fn send(self) -> Result<Option<crate::model::Languages>> {
            (*self.0.stub)
                .list_languages(self.0.request, self.0.options)
                .await
                .map(sdk_core::response::Response::into_body)
        }
    }

    #[doc(hidden)]
    impl sdk_core::options::internal::RequestBuilder for ListLanguages {
        fn request_options(&mut self) -> &mut sdk_core::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LanguageTranslator::translate][crate::client::LanguageTranslator::translate] calls.
    ///
    /// # Example
    /// ```
    /// # use ibm_watson_language_translator_v3::builder::language_translator::Translate;
    /// # async fn sample() -> ibm_watson_language_translator_v3::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> Translate {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct Translate(RequestBuilder<crate::model::TranslateOptions>);

    impl Translate {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LanguageTranslator>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::TranslateOptions>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<sdk_core::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// Returns `None` if the service returns an empty payload.
        pub async fn send(self) -> Result<Option<crate::model::TranslationResult>> {
            (*self.0.stub)
                .translate(self.0.request, self.0.options)
                .await
                .map(sdk_core::response::Response::into_body)
        }

        /// Sets the value of [text][crate::model::TranslateOptions::text].
        ///
        /// This is a **required** field for requests.
        pub fn set_text<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.0.request.text = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [model_id][crate::model::TranslateOptions::model_id].
        pub fn set_model_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.model_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [model_id][crate::model::TranslateOptions::model_id].
        pub fn set_or_clear_model_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.model_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [source][crate::model::TranslateOptions::source].
        pub fn set_source<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.source = Some(v.into());
            self
        }

        /// Sets or clears the value of [source][crate::model::TranslateOptions::source].
        pub fn set_or_clear_source<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.source = v.map(|x| x.into());
            self
        }

        /// Sets the value of [target][crate::model::TranslateOptions::target].
        pub fn set_target<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.target = Some(v.into());
            self
        }

        /// Sets or clears the value of [target][crate::model::TranslateOptions::target].
        pub fn set_or_clear_target<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.target = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl sdk_core::options::internal::RequestBuilder for Translate {
        fn request_options(&mut self) -> &mut sdk_core::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LanguageTranslator::list_identifiable_languages][crate::client::LanguageTranslator::list_identifiable_languages] calls.
    ///
    /// # Example
    /// ```
    /// # use ibm_watson_language_translator_v3::builder::language_translator::ListIdentifiableLanguages;
    /// # async fn sample() -> ibm_watson_language_translator_v3::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListIdentifiableLanguages {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListIdentifiableLanguages(RequestBuilder<crate::model::ListIdentifiableLanguagesOptions>);

    impl ListIdentifiableLanguages {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LanguageTranslator>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListIdentifiableLanguagesOptions>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<sdk_core::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// Returns `None` if the service returns an empty payload.
        pub async fn send(self) -> Result<Option<crate::model::IdentifiableLanguages>> {
            (*self.0.stub)
                .list_identifiable_languages(self.0.request, self.0.options)
                .await
                .map(sdk_core::response::Response::into_body)
        }
    }

    #[doc(hidden)]
    impl sdk_core::options::internal::RequestBuilder for ListIdentifiableLanguages {
        fn request_options(&mut self) -> &mut sdk_core::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LanguageTranslator::identify][crate::client::LanguageTranslator::identify] calls.
    ///
    /// # Example
    /// ```
    /// # use ibm_watson_language_translator_v3::builder::language_translator::Identify;
    /// # async fn sample() -> ibm_watson_language_translator_v3::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> Identify {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct Identify(RequestBuilder<crate::model::IdentifyOptions>);

    impl Identify {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LanguageTranslator>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::IdentifyOptions>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<sdk_core::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// Returns `None` if the service returns an empty payload.
        pub async fn send(self) -> Result<Option<crate::model::IdentifiedLanguages>> {
            (*self.0.stub)
                .identify(self.0.request, self.0.options)
                .await
                .map(sdk_core::response::Response::into_body)
        }

        /// Sets the value of [text][crate::model::IdentifyOptions::text].
        ///
        /// This is a **required** field for requests.
        pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.text = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl sdk_core::options::internal::RequestBuilder for Identify {
        fn request_options(&mut self) -> &mut sdk_core::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LanguageTranslator::list_models][crate::client::LanguageTranslator::list_models] calls.
    ///
    /// # Example
    /// ```
    /// # use ibm_watson_language_translator_v3::builder::language_translator::ListModels;
    /// # async fn sample() -> ibm_watson_language_translator_v3::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListModels {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListModels(RequestBuilder<crate::model::ListModelsOptions>);

    impl ListModels {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LanguageTranslator>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListModelsOptions>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<sdk_core::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// Returns `None` if the service returns an empty payload.
        pub async fn send(self) -> Result<Option<crate::model::TranslationModels>> {
            (*self.0.stub)
                .list_models(self.0.request, self.0.options)
                .await
                .map(sdk_core::response::Response::into_body)
        }

        /// Sets the value of [source][crate::model::ListModelsOptions::source].
        pub fn set_source<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.source = Some(v.into());
            self
        }

        /// Sets or clears the value of [source][crate::model::ListModelsOptions::source].
        pub fn set_or_clear_source<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.source = v.map(|x| x.into());
            self
        }

        /// Sets the value of [target][crate::model::ListModelsOptions::target].
        pub fn set_target<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.target = Some(v.into());
            self
        }

        /// Sets or clears the value of [target][crate::model::ListModelsOptions::target].
        pub fn set_or_clear_target<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.target = v.map(|x| x.into());
            self
        }

        /// Sets the value of [default][crate::model::ListModelsOptions::default].
        pub fn set_default<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.default = Some(v.into());
            self
        }

        /// Sets or clears the value of [default][crate::model::ListModelsOptions::default].
        pub fn set_or_clear_default<T: Into<bool>>(mut self, v: Option<T>) -> Self {
            self.0.request.default = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl sdk_core::options::internal::RequestBuilder for ListModels {
        fn request_options(&mut self) -> &mut sdk_core::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LanguageTranslator::create_model][crate::client::LanguageTranslator::create_model] calls.
    ///
    /// # Example
    /// ```
    /// # use ibm_watson_language_translator_v3::builder::language_translator::CreateModel;
    /// # async fn sample() -> ibm_watson_language_translator_v3::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> CreateModel {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateModel(RequestBuilder<crate::model::CreateModelOptions>);

    impl CreateModel {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LanguageTranslator>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateModelOptions>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<sdk_core::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// Returns `None` if the service returns an empty payload.
        pub async fn send(self) -> Result<Option<crate::model::TranslationModel>> {
            (*self.0.stub)
                .create_model(self.0.request, self.0.options)
                .await
                .map(sdk_core::response::Response::into_body)
        }

        /// Sets the value of [base_model_id][crate::model::CreateModelOptions::base_model_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_base_model_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.base_model_id = v.into();
            self
        }

        /// Sets the value of [forced_glossary][crate::model::CreateModelOptions::forced_glossary].
        pub fn set_forced_glossary<T: Into<FilePart>>(mut self, v: T) -> Self {
            self.0.request.forced_glossary = Some(v.into());
            self
        }

        /// Sets or clears the value of [forced_glossary][crate::model::CreateModelOptions::forced_glossary].
        pub fn set_or_clear_forced_glossary<T: Into<FilePart>>(mut self, v: Option<T>) -> Self {
            self.0.request.forced_glossary = v.map(|x| x.into());
            self
        }

        /// Sets the value of [parallel_corpus][crate::model::CreateModelOptions::parallel_corpus].
        pub fn set_parallel_corpus<T: Into<FilePart>>(mut self, v: T) -> Self {
            self.0.request.parallel_corpus = Some(v.into());
            self
        }

        /// Sets or clears the value of [parallel_corpus][crate::model::CreateModelOptions::parallel_corpus].
        pub fn set_or_clear_parallel_corpus<T: Into<FilePart>>(mut self, v: Option<T>) -> Self {
            self.0.request.parallel_corpus = v.map(|x| x.into());
            self
        }

        /// Sets the value of [name][crate::model::CreateModelOptions::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::CreateModelOptions::name].
        pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.name = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl sdk_core::options::internal::RequestBuilder for CreateModel {
        fn request_options(&mut self) -> &mut sdk_core::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LanguageTranslator::delete_model][crate::client::LanguageTranslator::delete_model] calls.
    ///
    /// # Example
    /// ```
    /// # use ibm_watson_language_translator_v3::builder::language_translator::DeleteModel;
    /// # async fn sample() -> ibm_watson_language_translator_v3::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> DeleteModel {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteModel(RequestBuilder<crate::model::DeleteModelOptions>);

    impl DeleteModel {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LanguageTranslator>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteModelOptions>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<sdk_core::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// Returns `None` if the service returns an empty payload.
        pub async fn send(self) -> Result<Option<crate::model::DeleteModelResult>> {
            (*self.0.stub)
                .delete_model(self.0.request, self.0.options)
                .await
                .map(sdk_core::response::Response::into_body)
        }

        /// Sets the value of [model_id][crate::model::DeleteModelOptions::model_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_model_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.model_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl sdk_core::options::internal::RequestBuilder for DeleteModel {
        fn request_options(&mut self) -> &mut sdk_core::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LanguageTranslator::get_model][crate::client::LanguageTranslator::get_model] calls.
    ///
    /// # Example
    /// ```
    /// # use ibm_watson_language_translator_v3::builder::language_translator::GetModel;
    /// # async fn sample() -> ibm_watson_language_translator_v3::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetModel {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetModel(RequestBuilder<crate::model::GetModelOptions>);

    impl GetModel {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LanguageTranslator>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetModelOptions>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<sdk_core::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// Returns `None` if the service returns an empty payload.
        pub async fn send(self) -> Result<Option<crate::model::TranslationModel>> {
            (*self.0.stub)
                .get_model(self.0.request, self.0.options)
                .await
                .map(sdk_core::response::Response::into_body)
        }

        /// Sets the value of [model_id][crate::model::GetModelOptions::model_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_model_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.model_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl sdk_core::options::internal::RequestBuilder for GetModel {
        fn request_options(&mut self) -> &mut sdk_core::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LanguageTranslator::list_documents][crate::client::LanguageTranslator::list_documents] calls.
    ///
    /// # Example
    /// ```
    /// # use ibm_watson_language_translator_v3::builder::language_translator::ListDocuments;
    /// # async fn sample() -> ibm_watson_language_translator_v3::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListDocuments {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListDocuments(RequestBuilder<crate::model::ListDocumentsOptions>);

    impl ListDocuments {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LanguageTranslator>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListDocumentsOptions>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<sdk_core::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// Returns `None` if the service returns an empty payload.
        pub async fn send(self) -> Result<Option<crate::model::DocumentList>> {
            (*self.0.stub)
                .list_documents(self.0.request, self.0.options)
                .await
                .map(sdk_core::response::Response::into_body)
        }
    }

    #[doc(hidden)]
    impl sdk_core::options::internal::RequestBuilder for ListDocuments {
        fn request_options(&mut self) -> &mut sdk_core::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LanguageTranslator::translate_document][crate::client::LanguageTranslator::translate_document] calls.
    ///
    /// # Example
    /// ```
    /// # use ibm_watson_language_translator_v3::builder::language_translator::TranslateDocument;
    /// # async fn sample() -> ibm_watson_language_translator_v3::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> TranslateDocument {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct TranslateDocument(RequestBuilder<crate::model::TranslateDocumentOptions>);

    impl TranslateDocument {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LanguageTranslator>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::TranslateDocumentOptions>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<sdk_core::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// Returns `None` if the service returns an empty payload.
        pub async fn send(self) -> Result<Option<crate::model::DocumentStatus>> {
            (*self.0.stub)
                .translate_document(self.0.request, self.0.options)
                .await
                .map(sdk_core::response::Response::into_body)
        }

        /// Sets the value of [file][crate::model::TranslateDocumentOptions::file].
        ///
        /// This is a **required** field for requests.
        pub fn set_file<T: Into<FilePart>>(mut self, v: T) -> Self {
            self.0.request.file = Some(v.into());
            self
        }

        /// Sets the value of [model_id][crate::model::TranslateDocumentOptions::model_id].
        pub fn set_model_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.model_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [model_id][crate::model::TranslateDocumentOptions::model_id].
        pub fn set_or_clear_model_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.model_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [source][crate::model::TranslateDocumentOptions::source].
        pub fn set_source<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.source = Some(v.into());
            self
        }

        /// Sets or clears the value of [source][crate::model::TranslateDocumentOptions::source].
        pub fn set_or_clear_source<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.source = v.map(|x| x.into());
            self
        }

        /// Sets the value of [target][crate::model::TranslateDocumentOptions::target].
        pub fn set_target<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.target = Some(v.into());
            self
        }

        /// Sets or clears the value of [target][crate::model::TranslateDocumentOptions::target].
        pub fn set_or_clear_target<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.target = v.map(|x| x.into());
            self
        }

        /// Sets the value of [document_id][crate::model::TranslateDocumentOptions::document_id].
        pub fn set_document_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.document_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [document_id][crate::model::TranslateDocumentOptions::document_id].
        pub fn set_or_clear_document_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.document_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl sdk_core::options::internal::RequestBuilder for TranslateDocument {
        fn request_options(&mut self) -> &mut sdk_core::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LanguageTranslator::get_document_status][crate::client::LanguageTranslator::get_document_status] calls.
    ///
    /// # Example
    /// ```
    /// # use ibm_watson_language_translator_v3::builder::language_translator::GetDocumentStatus;
    /// # async fn sample() -> ibm_watson_language_translator_v3::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetDocumentStatus {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetDocumentStatus(RequestBuilder<crate::model::GetDocumentStatusOptions>);

    impl GetDocumentStatus {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LanguageTranslator>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetDocumentStatusOptions>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<sdk_core::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// Returns `None` if the service returns an empty payload.
        pub async fn send(self) -> Result<Option<crate::model::DocumentStatus>> {
            (*self.0.stub)
                .get_document_status(self.0.request, self.0.options)
                .await
                .map(sdk_core::response::Response::into_body)
        }

        /// Sets the value of [document_id][crate::model::GetDocumentStatusOptions::document_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_document_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.document_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl sdk_core::options::internal::RequestBuilder for GetDocumentStatus {
        fn request_options(&mut self) -> &mut sdk_core::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LanguageTranslator::delete_document][crate::client::LanguageTranslator::delete_document] calls.
    ///
    /// # Example
    /// ```
    /// # use ibm_watson_language_translator_v3::builder::language_translator::DeleteDocument;
    /// # async fn sample() -> ibm_watson_language_translator_v3::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> DeleteDocument {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteDocument(RequestBuilder<crate::model::DeleteDocumentOptions>);

    impl DeleteDocument {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LanguageTranslator>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteDocumentOptions>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<sdk_core::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            (*self.0.stub)
                .delete_document(self.0.request, self.0.options)
                .await
                .map(sdk_core::response::Response::into_body)
        }

        /// Sets the value of [document_id][crate::model::DeleteDocumentOptions::document_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_document_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.document_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl sdk_core::options::internal::RequestBuilder for DeleteDocument {
        fn request_options(&mut self) -> &mut sdk_core::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LanguageTranslator::get_translated_document][crate::client::LanguageTranslator::get_translated_document] calls.
    ///
    /// # Example
    /// ```
    /// # use ibm_watson_language_translator_v3::builder::language_translator::GetTranslatedDocument;
    /// # async fn sample() -> ibm_watson_language_translator_v3::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetTranslatedDocument {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetTranslatedDocument(RequestBuilder<crate::model::GetTranslatedDocumentOptions>);

    impl GetTranslatedDocument {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LanguageTranslator>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetTranslatedDocumentOptions>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<sdk_core::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// Returns the document contents as a stream of bytes.
        pub async fn send(self) -> Result<sdk_core::streaming::ByteStream> {
            (*self.0.stub)
                .get_translated_document(self.0.request, self.0.options)
                .await
                .map(sdk_core::response::Response::into_body)
        }

        /// Sets the value of [document_id][crate::model::GetTranslatedDocumentOptions::document_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_document_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.document_id = v.into();
            self
        }

        /// Sets the value of [accept][crate::model::GetTranslatedDocumentOptions::accept].
        pub fn set_accept<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.accept = Some(v.into());
            self
        }

        /// Sets or clears the value of [accept][crate::model::GetTranslatedDocumentOptions::accept].
        pub fn set_or_clear_accept<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.accept = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl sdk_core::options::internal::RequestBuilder for GetTranslatedDocument {
        fn request_options(&mut self) -> &mut sdk_core::options::RequestOptions {
            &mut self.0.options
        }
    }
}
