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

use std::sync::Arc;

/// Implements a client for the Language Translator API.
///
/// # Example
/// ```no_run
/// # use ibm_watson_language_translator_v3::client::LanguageTranslator;
/// # use ibm_watson_language_translator_v3::credentials::BasicAuthenticator;
/// # async fn sample() -> anyhow::Result<()> {
/// let client = LanguageTranslator::builder()
///     .with_credentials(BasicAuthenticator::new("apikey", "my-api-key"))
///     .build()
///     .await?;
/// let languages = client.list_identifiable_languages().send().await?;
/// println!("languages={languages:?}");
/// # Ok(()) }
/// ```
///
/// # Configuration
///
/// To configure `LanguageTranslator` use the `with_*` methods in the type
/// returned by [builder()][LanguageTranslator::builder]. Settings that are not
/// configured in the builder are loaded from the `LANGUAGE_TRANSLATOR_*`
/// environment variables. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the `us-south` endpoint
///   (`https://api.us-south.language-translator.watson.cloud.ibm.com`).
///   Applications using instances in other regions must override this
///   default.
/// * [with_credentials()]: by default this client uses the credentials
///   configured in the environment. Applications may use basic or bearer
///   token authentication instead.
///
/// # Pooling and Cloning
///
/// `LanguageTranslator` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `LanguageTranslator`
/// in an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an
/// `Arc` internally.
///
/// # Service Description
///
/// Language Translator translates text from one language to another. The
/// service offers multiple IBM provided translation models that you can
/// customize based on your unique terminology and language. Use Language
/// Translator to take news from across the globe and present it in your
/// language, communicate with your customers in their own language, and more.
///
/// [with_endpoint()]: super::builder::language_translator::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::language_translator::ClientBuilder::with_credentials
#[derive(Clone, Debug)]
pub struct LanguageTranslator {
    inner: Arc<dyn super::stub::dynamic::LanguageTranslator>,
}

impl LanguageTranslator {
    /// Returns a builder for [LanguageTranslator].
    ///
    /// ```no_run
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use ibm_watson_language_translator_v3::client::LanguageTranslator;
    /// let client = LanguageTranslator::builder().build().await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> super::builder::language_translator::ClientBuilder {
        sdk_core::client_builder::internal::new_builder(
            super::builder::language_translator::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::LanguageTranslator + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: sdk_core::client_builder::internal::ClientConfig,
    ) -> sdk_core::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: sdk_core::client_builder::internal::ClientConfig,
    ) -> sdk_core::client_builder::Result<Arc<dyn super::stub::dynamic::LanguageTranslator>> {
        if sdk_core::client_builder::internal::tracing_enabled(&conf) {
            return Ok(Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: sdk_core::client_builder::internal::ClientConfig,
    ) -> sdk_core::client_builder::Result<impl super::stub::LanguageTranslator> {
        super::transport::LanguageTranslator::new(conf).await
    }

    async fn build_with_tracing(
        conf: sdk_core::client_builder::internal::ClientConfig,
    ) -> sdk_core::client_builder::Result<impl super::stub::LanguageTranslator> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::LanguageTranslator::new)
    }

    /// Lists the languages supported by the service.
    pub fn list_languages(&self) -> super::builder::language_translator::ListLanguages {
        super::builder::language_translator::ListLanguages::new(self.inner.clone())
    }

    /// Translates the input text from the source language to the target
    /// language.
    ///
    /// Specify a model ID that indicates the source and target languages, or
    /// specify the source and target languages individually. You can omit the
    /// source language to have the service attempt to detect the language
    /// from the input text.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_watson_language_translator_v3::client::LanguageTranslator;
    /// async fn sample(client: &LanguageTranslator) -> anyhow::Result<()> {
    ///     let result = client
    ///         .translate()
    ///         .set_text(["Hello", "How are you today?"])
    ///         .set_model_id("en-es")
    ///         .send()
    ///         .await?;
    ///     for t in result.iter().flat_map(|r| r.translations.iter()) {
    ///         println!("{:?}", t.translation);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn translate(&self) -> super::builder::language_translator::Translate {
        super::builder::language_translator::Translate::new(self.inner.clone())
    }

    /// Lists the languages that the service can identify.
    pub fn list_identifiable_languages(
        &self,
    ) -> super::builder::language_translator::ListIdentifiableLanguages {
        super::builder::language_translator::ListIdentifiableLanguages::new(self.inner.clone())
    }

    /// Identifies the language of the input text.
    pub fn identify(&self) -> super::builder::language_translator::Identify {
        super::builder::language_translator::Identify::new(self.inner.clone())
    }

    /// Lists available translation models.
    pub fn list_models(&self) -> super::builder::language_translator::ListModels {
        super::builder::language_translator::ListModels::new(self.inner.clone())
    }

    /// Uploads training files to customize a translation model.
    ///
    /// The service returns immediately, while the model trains in the
    /// background. Use [get_model][LanguageTranslator::get_model] to poll the
    /// model status.
    pub fn create_model(&self) -> super::builder::language_translator::CreateModel {
        super::builder::language_translator::CreateModel::new(self.inner.clone())
    }

    /// Deletes a custom translation model.
    pub fn delete_model(&self) -> super::builder::language_translator::DeleteModel {
        super::builder::language_translator::DeleteModel::new(self.inner.clone())
    }

    /// Gets information about a translation model, including training status
    /// for custom models.
    pub fn get_model(&self) -> super::builder::language_translator::GetModel {
        super::builder::language_translator::GetModel::new(self.inner.clone())
    }

    /// Lists documents that have been submitted for translation.
    pub fn list_documents(&self) -> super::builder::language_translator::ListDocuments {
        super::builder::language_translator::ListDocuments::new(self.inner.clone())
    }

    /// Submits a document for translation.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_watson_language_translator_v3::client::LanguageTranslator;
    /// use ibm_watson_language_translator_v3::multipart::FilePart;
    /// async fn sample(client: &LanguageTranslator) -> anyhow::Result<()> {
    ///     let file = FilePart::from_path("report.docx").await?;
    ///     let status = client
    ///         .translate_document()
    ///         .set_file(file)
    ///         .set_model_id("en-fr")
    ///         .send()
    ///         .await?;
    ///     println!("status={status:?}");
    ///     Ok(())
    /// }
    /// ```
    pub fn translate_document(&self) -> super::builder::language_translator::TranslateDocument {
        super::builder::language_translator::TranslateDocument::new(self.inner.clone())
    }

    /// Gets the translation status of a document.
    pub fn get_document_status(&self) -> super::builder::language_translator::GetDocumentStatus {
        super::builder::language_translator::GetDocumentStatus::new(self.inner.clone())
    }

    /// Deletes a document.
    pub fn delete_document(&self) -> super::builder::language_translator::DeleteDocument {
        super::builder::language_translator::DeleteDocument::new(self.inner.clone())
    }

    /// Downloads the translated document.
    ///
    /// Only documents with an `available` status can be downloaded.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_watson_language_translator_v3::client::LanguageTranslator;
    /// async fn sample(client: &LanguageTranslator) -> anyhow::Result<()> {
    ///     let mut stream = client
    ///         .get_translated_document()
    ///         .set_document_id("my-document-id")
    ///         .set_accept("application/pdf")
    ///         .send()
    ///         .await?;
    ///     while let Some(chunk) = stream.next().await.transpose()? {
    ///         println!("received {} bytes", chunk.len());
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn get_translated_document(
        &self,
    ) -> super::builder::language_translator::GetTranslatedDocument {
        super::builder::language_translator::GetTranslatedDocument::new(self.inner.clone())
    }
}
