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

use chrono::{DateTime, Utc};
use sdk_core::multipart::FilePart;

/// The options for [LanguageTranslator::list_languages][crate::client::LanguageTranslator::list_languages].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListLanguagesOptions {}

impl ListLanguagesOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The options for [LanguageTranslator::translate][crate::client::LanguageTranslator::translate].
///
/// Either `model_id`, or both `source` and `target`, select the translation
/// model.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct TranslateOptions {
    /// Input text in UTF-8 encoding. Multiple entries result in multiple
    /// translations in the response.
    pub text: Vec<String>,

    /// The model to use for translation, for example `en-de`.
    pub model_id: Option<String>,

    /// Language code of the input text. When omitted, the service attempts
    /// to identify the language.
    pub source: Option<String>,

    /// Language code of the translation target.
    pub target: Option<String>,
}

impl TranslateOptions {
    pub fn new<T, V>(text: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self::default().set_text(text)
    }

    /// Sets the value of [text][TranslateOptions::text].
    pub fn set_text<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.text = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [model_id][TranslateOptions::model_id].
    pub fn set_model_id<T: Into<String>>(mut self, v: T) -> Self {
        self.model_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [model_id][TranslateOptions::model_id].
    pub fn set_or_clear_model_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.model_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source][TranslateOptions::source].
    pub fn set_source<T: Into<String>>(mut self, v: T) -> Self {
        self.source = Some(v.into());
        self
    }

    /// Sets or clears the value of [source][TranslateOptions::source].
    pub fn set_or_clear_source<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.source = v.map(|x| x.into());
        self
    }

    /// Sets the value of [target][TranslateOptions::target].
    pub fn set_target<T: Into<String>>(mut self, v: T) -> Self {
        self.target = Some(v.into());
        self
    }

    /// Sets or clears the value of [target][TranslateOptions::target].
    pub fn set_or_clear_target<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.target = v.map(|x| x.into());
        self
    }
}

/// The options for [LanguageTranslator::list_identifiable_languages][crate::client::LanguageTranslator::list_identifiable_languages].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListIdentifiableLanguagesOptions {}

impl ListIdentifiableLanguagesOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The options for [LanguageTranslator::identify][crate::client::LanguageTranslator::identify].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct IdentifyOptions {
    /// Input text in UTF-8 format.
    pub text: String,
}

impl IdentifyOptions {
    pub fn new<T: Into<String>>(text: T) -> Self {
        Self::default().set_text(text)
    }

    /// Sets the value of [text][IdentifyOptions::text].
    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = v.into();
        self
    }
}

/// The options for [LanguageTranslator::list_models][crate::client::LanguageTranslator::list_models].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListModelsOptions {
    /// Filter models by source language.
    pub source: Option<String>,

    /// Filter models by target language.
    pub target: Option<String>,

    /// If true, return only default models. If false, return only custom
    /// models. If unset, return both.
    pub default: Option<bool>,
}

impl ListModelsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [source][ListModelsOptions::source].
    pub fn set_source<T: Into<String>>(mut self, v: T) -> Self {
        self.source = Some(v.into());
        self
    }

    /// Sets or clears the value of [source][ListModelsOptions::source].
    pub fn set_or_clear_source<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.source = v.map(|x| x.into());
        self
    }

    /// Sets the value of [target][ListModelsOptions::target].
    pub fn set_target<T: Into<String>>(mut self, v: T) -> Self {
        self.target = Some(v.into());
        self
    }

    /// Sets or clears the value of [target][ListModelsOptions::target].
    pub fn set_or_clear_target<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.target = v.map(|x| x.into());
        self
    }

    /// Sets the value of [default][ListModelsOptions::default].
    pub fn set_default<T: Into<bool>>(mut self, v: T) -> Self {
        self.default = Some(v.into());
        self
    }

    /// Sets or clears the value of [default][ListModelsOptions::default].
    pub fn set_or_clear_default<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.default = v.map(|x| x.into());
        self
    }
}

/// The options for [LanguageTranslator::create_model][crate::client::LanguageTranslator::create_model].
///
/// A custom model is trained on a base model, using a forced glossary, a
/// parallel corpus, or both.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateModelOptions {
    /// The ID of the translation model to use as the base for customization.
    pub base_model_id: String,

    /// A file with terms that must always be translated a certain way. The
    /// service accepts TMX, XLIFF, CSV, TSV, and a few other formats.
    pub forced_glossary: Option<FilePart>,

    /// A file with parallel sentences for the source and target languages.
    pub parallel_corpus: Option<FilePart>,

    /// An optional model name.
    pub name: Option<String>,
}

impl CreateModelOptions {
    pub fn new<T: Into<String>>(base_model_id: T) -> Self {
        Self::default().set_base_model_id(base_model_id)
    }

    /// Sets the value of [base_model_id][CreateModelOptions::base_model_id].
    pub fn set_base_model_id<T: Into<String>>(mut self, v: T) -> Self {
        self.base_model_id = v.into();
        self
    }

    /// Sets the value of [forced_glossary][CreateModelOptions::forced_glossary].
    pub fn set_forced_glossary<T: Into<FilePart>>(mut self, v: T) -> Self {
        self.forced_glossary = Some(v.into());
        self
    }

    /// Sets or clears the value of [forced_glossary][CreateModelOptions::forced_glossary].
    pub fn set_or_clear_forced_glossary<T: Into<FilePart>>(mut self, v: Option<T>) -> Self {
        self.forced_glossary = v.map(|x| x.into());
        self
    }

    /// Sets the value of [parallel_corpus][CreateModelOptions::parallel_corpus].
    pub fn set_parallel_corpus<T: Into<FilePart>>(mut self, v: T) -> Self {
        self.parallel_corpus = Some(v.into());
        self
    }

    /// Sets or clears the value of [parallel_corpus][CreateModelOptions::parallel_corpus].
    pub fn set_or_clear_parallel_corpus<T: Into<FilePart>>(mut self, v: Option<T>) -> Self {
        self.parallel_corpus = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][CreateModelOptions::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][CreateModelOptions::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }
}

/// The options for [LanguageTranslator::delete_model][crate::client::LanguageTranslator::delete_model].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteModelOptions {
    /// The ID of the custom model to delete.
    pub model_id: String,
}

impl DeleteModelOptions {
    pub fn new<T: Into<String>>(model_id: T) -> Self {
        Self::default().set_model_id(model_id)
    }

    /// Sets the value of [model_id][DeleteModelOptions::model_id].
    pub fn set_model_id<T: Into<String>>(mut self, v: T) -> Self {
        self.model_id = v.into();
        self
    }
}

/// The options for [LanguageTranslator::get_model][crate::client::LanguageTranslator::get_model].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetModelOptions {
    /// The ID of the model.
    pub model_id: String,
}

impl GetModelOptions {
    pub fn new<T: Into<String>>(model_id: T) -> Self {
        Self::default().set_model_id(model_id)
    }

    /// Sets the value of [model_id][GetModelOptions::model_id].
    pub fn set_model_id<T: Into<String>>(mut self, v: T) -> Self {
        self.model_id = v.into();
        self
    }
}

/// The options for [LanguageTranslator::list_documents][crate::client::LanguageTranslator::list_documents].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListDocumentsOptions {}

impl ListDocumentsOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The options for [LanguageTranslator::translate_document][crate::client::LanguageTranslator::translate_document].
///
/// The file name and content type of the uploaded document are part of the
/// [FilePart]. The service uses them to detect the document format.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct TranslateDocumentOptions {
    /// The contents of the source file to translate.
    pub file: Option<FilePart>,

    /// The model to use for translation, for example `en-de`.
    pub model_id: Option<String>,

    /// Language code of the source document.
    pub source: Option<String>,

    /// Language code of the translation target.
    pub target: Option<String>,

    /// To use a previously submitted document as the source for a new
    /// translation, provide the `document_id` of the document.
    pub document_id: Option<String>,
}

impl TranslateDocumentOptions {
    pub fn new<T: Into<FilePart>>(file: T) -> Self {
        Self::default().set_file(file)
    }

    /// Sets the value of [file][TranslateDocumentOptions::file].
    pub fn set_file<T: Into<FilePart>>(mut self, v: T) -> Self {
        self.file = Some(v.into());
        self
    }

    /// Sets the value of [model_id][TranslateDocumentOptions::model_id].
    pub fn set_model_id<T: Into<String>>(mut self, v: T) -> Self {
        self.model_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [model_id][TranslateDocumentOptions::model_id].
    pub fn set_or_clear_model_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.model_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source][TranslateDocumentOptions::source].
    pub fn set_source<T: Into<String>>(mut self, v: T) -> Self {
        self.source = Some(v.into());
        self
    }

    /// Sets or clears the value of [source][TranslateDocumentOptions::source].
    pub fn set_or_clear_source<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.source = v.map(|x| x.into());
        self
    }

    /// Sets the value of [target][TranslateDocumentOptions::target].
    pub fn set_target<T: Into<String>>(mut self, v: T) -> Self {
        self.target = Some(v.into());
        self
    }

    /// Sets or clears the value of [target][TranslateDocumentOptions::target].
    pub fn set_or_clear_target<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.target = v.map(|x| x.into());
        self
    }

    /// Sets the value of [document_id][TranslateDocumentOptions::document_id].
    pub fn set_document_id<T: Into<String>>(mut self, v: T) -> Self {
        self.document_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [document_id][TranslateDocumentOptions::document_id].
    pub fn set_or_clear_document_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.document_id = v.map(|x| x.into());
        self
    }
}

/// The options for [LanguageTranslator::get_document_status][crate::client::LanguageTranslator::get_document_status].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetDocumentStatusOptions {
    /// The document ID of the document.
    pub document_id: String,
}

impl GetDocumentStatusOptions {
    pub fn new<T: Into<String>>(document_id: T) -> Self {
        Self::default().set_document_id(document_id)
    }

    /// Sets the value of [document_id][GetDocumentStatusOptions::document_id].
    pub fn set_document_id<T: Into<String>>(mut self, v: T) -> Self {
        self.document_id = v.into();
        self
    }
}

/// The options for [LanguageTranslator::delete_document][crate::client::LanguageTranslator::delete_document].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteDocumentOptions {
    /// Document ID of the document to delete.
    pub document_id: String,
}

impl DeleteDocumentOptions {
    pub fn new<T: Into<String>>(document_id: T) -> Self {
        Self::default().set_document_id(document_id)
    }

    /// Sets the value of [document_id][DeleteDocumentOptions::document_id].
    pub fn set_document_id<T: Into<String>>(mut self, v: T) -> Self {
        self.document_id = v.into();
        self
    }
}

/// The options for [LanguageTranslator::get_translated_document][crate::client::LanguageTranslator::get_translated_document].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetTranslatedDocumentOptions {
    /// The document ID of the source document.
    pub document_id: String,

    /// The type of the response, for example `application/pdf`. A `*/*`
    /// value, or leaving this unset, returns the same format as the source
    /// document.
    pub accept: Option<String>,
}

impl GetTranslatedDocumentOptions {
    pub fn new<T: Into<String>>(document_id: T) -> Self {
        Self::default().set_document_id(document_id)
    }

    /// Sets the value of [document_id][GetTranslatedDocumentOptions::document_id].
    pub fn set_document_id<T: Into<String>>(mut self, v: T) -> Self {
        self.document_id = v.into();
        self
    }

    /// Sets the value of [accept][GetTranslatedDocumentOptions::accept].
    pub fn set_accept<T: Into<String>>(mut self, v: T) -> Self {
        self.accept = Some(v.into());
        self
    }

    /// Sets or clears the value of [accept][GetTranslatedDocumentOptions::accept].
    pub fn set_or_clear_accept<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.accept = v.map(|x| x.into());
        self
    }
}

/// The languages supported for translation.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Languages {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<Language>,
}

impl Languages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [languages][Languages::languages].
    pub fn set_languages<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Language>,
    {
        self.languages = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Information about a language supported by the service.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Language {
    /// The language code, for example `en` or `es`.
    pub language: Option<String>,

    /// The name of the language in English.
    pub language_name: Option<String>,

    /// The native name of the language.
    pub native_language_name: Option<String>,

    /// The country code for the language, for example `ES` for Spanish.
    pub country_code: Option<String>,

    /// Indicates whether words of the language are separated by whitespace.
    pub words_separated: Option<bool>,

    /// Indicates the direction of the language: `right_to_left` or
    /// `left_to_right`.
    pub direction: Option<String>,

    pub supported_as_source: Option<bool>,

    pub supported_as_target: Option<bool>,

    /// Indicates whether the language can be identified by the service.
    pub identifiable: Option<bool>,
}

impl Language {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [language][Language::language].
    pub fn set_language<T: Into<String>>(mut self, v: T) -> Self {
        self.language = Some(v.into());
        self
    }

    /// Sets the value of [language_name][Language::language_name].
    pub fn set_language_name<T: Into<String>>(mut self, v: T) -> Self {
        self.language_name = Some(v.into());
        self
    }

    /// Sets the value of [native_language_name][Language::native_language_name].
    pub fn set_native_language_name<T: Into<String>>(mut self, v: T) -> Self {
        self.native_language_name = Some(v.into());
        self
    }

    /// Sets the value of [country_code][Language::country_code].
    pub fn set_country_code<T: Into<String>>(mut self, v: T) -> Self {
        self.country_code = Some(v.into());
        self
    }

    /// Sets the value of [words_separated][Language::words_separated].
    pub fn set_words_separated<T: Into<bool>>(mut self, v: T) -> Self {
        self.words_separated = Some(v.into());
        self
    }

    /// Sets the value of [direction][Language::direction].
    pub fn set_direction<T: Into<String>>(mut self, v: T) -> Self {
        self.direction = Some(v.into());
        self
    }

    /// Sets the value of [supported_as_source][Language::supported_as_source].
    pub fn set_supported_as_source<T: Into<bool>>(mut self, v: T) -> Self {
        self.supported_as_source = Some(v.into());
        self
    }

    /// Sets the value of [supported_as_target][Language::supported_as_target].
    pub fn set_supported_as_target<T: Into<bool>>(mut self, v: T) -> Self {
        self.supported_as_target = Some(v.into());
        self
    }

    /// Sets the value of [identifiable][Language::identifiable].
    pub fn set_identifiable<T: Into<bool>>(mut self, v: T) -> Self {
        self.identifiable = Some(v.into());
        self
    }
}

/// Defines the values for [Language::direction].
pub mod language {
    pub mod direction {
        pub const RIGHT_TO_LEFT: &str = "right_to_left";
        pub const LEFT_TO_RIGHT: &str = "left_to_right";
    }
}

/// The result of [LanguageTranslator::translate][crate::client::LanguageTranslator::translate].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct TranslationResult {
    /// An estimate of the number of words in the input text.
    pub word_count: Option<i64>,

    /// Number of characters in the input text.
    pub character_count: Option<i64>,

    /// The language code of the source text, if the source language was
    /// automatically detected.
    pub detected_language: Option<String>,

    /// A score between 0 and 1 indicating the confidence of the source
    /// language detection.
    pub detected_language_confidence: Option<f64>,

    /// One translation for each input text.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub translations: Vec<Translation>,
}

impl TranslationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [word_count][TranslationResult::word_count].
    pub fn set_word_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.word_count = Some(v.into());
        self
    }

    /// Sets the value of [character_count][TranslationResult::character_count].
    pub fn set_character_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.character_count = Some(v.into());
        self
    }

    /// Sets the value of [detected_language][TranslationResult::detected_language].
    pub fn set_detected_language<T: Into<String>>(mut self, v: T) -> Self {
        self.detected_language = Some(v.into());
        self
    }

    /// Sets the value of [detected_language_confidence][TranslationResult::detected_language_confidence].
    pub fn set_detected_language_confidence<T: Into<f64>>(mut self, v: T) -> Self {
        self.detected_language_confidence = Some(v.into());
        self
    }

    /// Sets the value of [translations][TranslationResult::translations].
    pub fn set_translations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Translation>,
    {
        self.translations = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A single translation.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Translation {
    /// Translation output in UTF-8.
    pub translation: Option<String>,
}

impl Translation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [translation][Translation::translation].
    pub fn set_translation<T: Into<String>>(mut self, v: T) -> Self {
        self.translation = Some(v.into());
        self
    }
}

/// The languages the service can identify.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct IdentifiableLanguages {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<IdentifiableLanguage>,
}

impl IdentifiableLanguages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [languages][IdentifiableLanguages::languages].
    pub fn set_languages<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<IdentifiableLanguage>,
    {
        self.languages = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct IdentifiableLanguage {
    /// The language code for an identifiable language.
    pub language: Option<String>,

    /// The name of the identifiable language.
    pub name: Option<String>,
}

impl IdentifiableLanguage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [language][IdentifiableLanguage::language].
    pub fn set_language<T: Into<String>>(mut self, v: T) -> Self {
        self.language = Some(v.into());
        self
    }

    /// Sets the value of [name][IdentifiableLanguage::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// The result of [LanguageTranslator::identify][crate::client::LanguageTranslator::identify].
///
/// The languages are sorted by decreasing confidence.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct IdentifiedLanguages {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<IdentifiedLanguage>,
}

impl IdentifiedLanguages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [languages][IdentifiedLanguages::languages].
    pub fn set_languages<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<IdentifiedLanguage>,
    {
        self.languages = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct IdentifiedLanguage {
    /// The language code for an identified language.
    pub language: Option<String>,

    /// The confidence score for the identified language.
    pub confidence: Option<f64>,
}

impl IdentifiedLanguage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [language][IdentifiedLanguage::language].
    pub fn set_language<T: Into<String>>(mut self, v: T) -> Self {
        self.language = Some(v.into());
        self
    }

    /// Sets the value of [confidence][IdentifiedLanguage::confidence].
    pub fn set_confidence<T: Into<f64>>(mut self, v: T) -> Self {
        self.confidence = Some(v.into());
        self
    }
}

/// The translation models available to the caller.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct TranslationModels {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub models: Vec<TranslationModel>,
}

impl TranslationModels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [models][TranslationModels::models].
    pub fn set_models<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<TranslationModel>,
    {
        self.models = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Response payload for models.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct TranslationModel {
    /// A globally unique string that identifies the underlying model.
    pub model_id: Option<String>,

    /// Optional name that can be specified when the model is created.
    pub name: Option<String>,

    /// Translation source language code.
    pub source: Option<String>,

    /// Translation target language code.
    pub target: Option<String>,

    /// Model ID of the base model that was used to customize this model.
    pub base_model_id: Option<String>,

    /// The domain of the translation model.
    pub domain: Option<String>,

    /// Whether this model can be used as a base for customization.
    pub customizable: Option<bool>,

    /// Whether or not the model is a default model.
    pub default_model: Option<bool>,

    /// Either an empty string, indicating the model is not a custom model, or
    /// the ID of the service instance that created the model.
    pub owner: Option<String>,

    /// Availability of a model. See [translation_model::status] for the
    /// possible values.
    pub status: Option<String>,
}

impl TranslationModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [model_id][TranslationModel::model_id].
    pub fn set_model_id<T: Into<String>>(mut self, v: T) -> Self {
        self.model_id = Some(v.into());
        self
    }

    /// Sets the value of [name][TranslationModel::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [source][TranslationModel::source].
    pub fn set_source<T: Into<String>>(mut self, v: T) -> Self {
        self.source = Some(v.into());
        self
    }

    /// Sets the value of [target][TranslationModel::target].
    pub fn set_target<T: Into<String>>(mut self, v: T) -> Self {
        self.target = Some(v.into());
        self
    }

    /// Sets the value of [base_model_id][TranslationModel::base_model_id].
    pub fn set_base_model_id<T: Into<String>>(mut self, v: T) -> Self {
        self.base_model_id = Some(v.into());
        self
    }

    /// Sets the value of [domain][TranslationModel::domain].
    pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.domain = Some(v.into());
        self
    }

    /// Sets the value of [customizable][TranslationModel::customizable].
    pub fn set_customizable<T: Into<bool>>(mut self, v: T) -> Self {
        self.customizable = Some(v.into());
        self
    }

    /// Sets the value of [default_model][TranslationModel::default_model].
    pub fn set_default_model<T: Into<bool>>(mut self, v: T) -> Self {
        self.default_model = Some(v.into());
        self
    }

    /// Sets the value of [owner][TranslationModel::owner].
    pub fn set_owner<T: Into<String>>(mut self, v: T) -> Self {
        self.owner = Some(v.into());
        self
    }

    /// Sets the value of [status][TranslationModel::status].
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }
}

/// Defines the values for [TranslationModel::status].
pub mod translation_model {
    pub mod status {
        pub const UPLOADING: &str = "uploading";
        pub const UPLOADED: &str = "uploaded";
        pub const DISPATCHING: &str = "dispatching";
        pub const QUEUED: &str = "queued";
        pub const TRAINING: &str = "training";
        pub const TRAINED: &str = "trained";
        pub const PUBLISHING: &str = "publishing";
        pub const AVAILABLE: &str = "available";
        pub const DELETED: &str = "deleted";
        pub const ERROR: &str = "error";
    }
}

/// The result of [LanguageTranslator::delete_model][crate::client::LanguageTranslator::delete_model].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeleteModelResult {
    /// `OK` indicates that the model was successfully deleted.
    pub status: Option<String>,
}

impl DeleteModelResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [status][DeleteModelResult::status].
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }
}

/// The documents submitted for translation.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DocumentList {
    /// An array of all previously submitted documents.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<DocumentStatus>,
}

impl DocumentList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [documents][DocumentList::documents].
    pub fn set_documents<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<DocumentStatus>,
    {
        self.documents = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Document information, including translation status.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DocumentStatus {
    /// System generated ID identifying a document being translated using one
    /// specific translation model.
    pub document_id: Option<String>,

    /// Filename from the submission.
    pub filename: Option<String>,

    /// The status of the translation job. See [document_status::status] for
    /// the possible values.
    pub status: Option<String>,

    /// A globally unique string that identifies the underlying model that is
    /// used for translation.
    pub model_id: Option<String>,

    /// Model ID of the base model that was used to customize the model.
    pub base_model_id: Option<String>,

    /// Translation source language code.
    pub source: Option<String>,

    /// A score between 0 and 1 indicating the confidence of the source
    /// language detection.
    pub detected_language_confidence: Option<f64>,

    /// Translation target language code.
    pub target: Option<String>,

    /// The time when the document was submitted.
    pub created: Option<DateTime<Utc>>,

    /// The time when the translation completed.
    pub completed: Option<DateTime<Utc>>,

    /// An estimate of the number of words in the source document.
    pub word_count: Option<i64>,

    /// The number of characters in the source document.
    pub character_count: Option<i64>,
}

impl DocumentStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [document_id][DocumentStatus::document_id].
    pub fn set_document_id<T: Into<String>>(mut self, v: T) -> Self {
        self.document_id = Some(v.into());
        self
    }

    /// Sets the value of [filename][DocumentStatus::filename].
    pub fn set_filename<T: Into<String>>(mut self, v: T) -> Self {
        self.filename = Some(v.into());
        self
    }

    /// Sets the value of [status][DocumentStatus::status].
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [model_id][DocumentStatus::model_id].
    pub fn set_model_id<T: Into<String>>(mut self, v: T) -> Self {
        self.model_id = Some(v.into());
        self
    }

    /// Sets the value of [base_model_id][DocumentStatus::base_model_id].
    pub fn set_base_model_id<T: Into<String>>(mut self, v: T) -> Self {
        self.base_model_id = Some(v.into());
        self
    }

    /// Sets the value of [source][DocumentStatus::source].
    pub fn set_source<T: Into<String>>(mut self, v: T) -> Self {
        self.source = Some(v.into());
        self
    }

    /// Sets the value of [detected_language_confidence][DocumentStatus::detected_language_confidence].
    pub fn set_detected_language_confidence<T: Into<f64>>(mut self, v: T) -> Self {
        self.detected_language_confidence = Some(v.into());
        self
    }

    /// Sets the value of [target][DocumentStatus::target].
    pub fn set_target<T: Into<String>>(mut self, v: T) -> Self {
        self.target = Some(v.into());
        self
    }

    /// Sets the value of [created][DocumentStatus::created].
    pub fn set_created<T: Into<DateTime<Utc>>>(mut self, v: T) -> Self {
        self.created = Some(v.into());
        self
    }

    /// Sets the value of [completed][DocumentStatus::completed].
    pub fn set_completed<T: Into<DateTime<Utc>>>(mut self, v: T) -> Self {
        self.completed = Some(v.into());
        self
    }

    /// Sets the value of [word_count][DocumentStatus::word_count].
    pub fn set_word_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.word_count = Some(v.into());
        self
    }

    /// Sets the value of [character_count][DocumentStatus::character_count].
    pub fn set_character_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.character_count = Some(v.into());
        self
    }
}

/// Defines the values for [DocumentStatus::status].
pub mod document_status {
    pub mod status {
        pub const PROCESSING: &str = "processing";
        pub const AVAILABLE: &str = "available";
        pub const FAILED: &str = "failed";
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn translate_options_json() -> anyhow::Result<()> {
        let options = TranslateOptions::new(["Hello", "World"]).set_model_id("en-es");
        let got = serde_json::to_value(&options)?;
        assert_eq!(got, json!({"text": ["Hello", "World"], "model_id": "en-es"}));
        Ok(())
    }

    #[test]
    fn translate_options_clear() {
        let options = TranslateOptions::new(["Hello"])
            .set_source("en")
            .set_target("es")
            .set_or_clear_source(None::<String>);
        assert_eq!(options.text, vec!["Hello".to_string()]);
        assert_eq!(options.source, None);
        assert_eq!(options.target.as_deref(), Some("es"));
    }

    #[test]
    fn translate_document_options() {
        let file = FilePart::new("Hello").set_filename("hello.txt");
        let options = TranslateDocumentOptions::new(file.clone())
            .set_model_id("en-es")
            .set_document_id("doc-1");
        assert_eq!(options.file, Some(file));
        assert_eq!(options.model_id.as_deref(), Some("en-es"));
        assert_eq!(options.source, None);
        assert_eq!(options.document_id.as_deref(), Some("doc-1"));
    }

    #[test]
    fn translation_result() -> anyhow::Result<()> {
        let input = json!({
            "word_count": 1,
            "character_count": 5,
            "detected_language": "en",
            "detected_language_confidence": 0.75,
            "translations": [{"translation": "Hola"}],
            "unknown_field": "ignored"
        });
        let got = serde_json::from_value::<TranslationResult>(input)?;
        let want = TranslationResult::new()
            .set_word_count(1)
            .set_character_count(5)
            .set_detected_language("en")
            .set_detected_language_confidence(0.75)
            .set_translations([Translation::new().set_translation("Hola")]);
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn document_status() -> anyhow::Result<()> {
        let input = json!({
            "document_id": "doc-1",
            "filename": "hello.txt",
            "status": "available",
            "model_id": "en-es",
            "source": "en",
            "target": "es",
            "created": "2019-03-07T12:34:56Z",
            "completed": "2019-03-07T12:35:10Z",
            "word_count": 2
        });
        let got = serde_json::from_value::<DocumentStatus>(input)?;
        assert_eq!(got.document_id.as_deref(), Some("doc-1"));
        assert_eq!(got.status.as_deref(), Some(document_status::status::AVAILABLE));
        let created = Utc.with_ymd_and_hms(2019, 3, 7, 12, 34, 56).single();
        assert_eq!(got.created, created);
        assert!(got.completed > got.created, "{got:?}");
        assert_eq!(got.character_count, None);
        Ok(())
    }

    #[test]
    fn empty_lists_are_omitted() -> anyhow::Result<()> {
        let got = serde_json::to_value(TranslationModels::new())?;
        assert_eq!(got, json!({}));
        let got = serde_json::to_value(
            TranslationModels::new().set_models([TranslationModel::new().set_model_id("en-es")]),
        )?;
        assert_eq!(got, json!({"models": [{"model_id": "en-es"}]}));
        Ok(())
    }

    type Observed = [Option<String>; 3];

    fn optional_string<O: Clone>(
        options: O,
        set: fn(O, &'static str) -> O,
        set_or_clear: fn(O, Option<&'static str>) -> O,
        get: fn(O) -> Option<String>,
    ) -> Observed {
        let with_value = set(options.clone(), "value");
        let cleared = set_or_clear(with_value.clone(), None);
        let replaced = set_or_clear(options, Some("other"));
        [get(with_value), get(cleared), get(replaced)]
    }

    #[test_case(optional_string(TranslateOptions::default(), TranslateOptions::set_model_id, TranslateOptions::set_or_clear_model_id, |o| o.model_id); "translate model_id")]
    #[test_case(optional_string(TranslateOptions::default(), TranslateOptions::set_source, TranslateOptions::set_or_clear_source, |o| o.source); "translate source")]
    #[test_case(optional_string(TranslateOptions::default(), TranslateOptions::set_target, TranslateOptions::set_or_clear_target, |o| o.target); "translate target")]
    #[test_case(optional_string(ListModelsOptions::default(), ListModelsOptions::set_source, ListModelsOptions::set_or_clear_source, |o| o.source); "list_models source")]
    #[test_case(optional_string(ListModelsOptions::default(), ListModelsOptions::set_target, ListModelsOptions::set_or_clear_target, |o| o.target); "list_models target")]
    #[test_case(optional_string(CreateModelOptions::default(), CreateModelOptions::set_name, CreateModelOptions::set_or_clear_name, |o| o.name); "create_model name")]
    #[test_case(optional_string(TranslateDocumentOptions::default(), TranslateDocumentOptions::set_model_id, TranslateDocumentOptions::set_or_clear_model_id, |o| o.model_id); "translate_document model_id")]
    #[test_case(optional_string(TranslateDocumentOptions::default(), TranslateDocumentOptions::set_source, TranslateDocumentOptions::set_or_clear_source, |o| o.source); "translate_document source")]
    #[test_case(optional_string(TranslateDocumentOptions::default(), TranslateDocumentOptions::set_target, TranslateDocumentOptions::set_or_clear_target, |o| o.target); "translate_document target")]
    #[test_case(optional_string(TranslateDocumentOptions::default(), TranslateDocumentOptions::set_document_id, TranslateDocumentOptions::set_or_clear_document_id, |o| o.document_id); "translate_document document_id")]
    #[test_case(optional_string(GetTranslatedDocumentOptions::default(), GetTranslatedDocumentOptions::set_accept, GetTranslatedDocumentOptions::set_or_clear_accept, |o| o.accept); "get_translated_document accept")]
    fn optional_string_setters(got: Observed) {
        let want = [Some("value".to_string()), None, Some("other".to_string())];
        assert_eq!(got, want);
    }

    fn required_string<O: Default>(set: fn(O, &'static str) -> O, get: fn(O) -> String) -> String {
        get(set(O::default(), "value"))
    }

    #[test_case(required_string(IdentifyOptions::set_text, |o| o.text); "identify text")]
    #[test_case(required_string(CreateModelOptions::set_base_model_id, |o| o.base_model_id); "create_model base_model_id")]
    #[test_case(required_string(DeleteModelOptions::set_model_id, |o| o.model_id); "delete_model model_id")]
    #[test_case(required_string(GetModelOptions::set_model_id, |o| o.model_id); "get_model model_id")]
    #[test_case(required_string(GetDocumentStatusOptions::set_document_id, |o| o.document_id); "get_document_status document_id")]
    #[test_case(required_string(DeleteDocumentOptions::set_document_id, |o| o.document_id); "delete_document document_id")]
    #[test_case(required_string(GetTranslatedDocumentOptions::set_document_id, |o| o.document_id); "get_translated_document document_id")]
    fn required_string_setters(got: String) {
        assert_eq!(got, "value");
    }

    fn file_part<O: Default>(set: fn(O, FilePart) -> O, get: fn(O) -> Option<FilePart>) -> Option<FilePart> {
        get(set(O::default(), glossary()))
    }

    fn glossary() -> FilePart {
        FilePart::new("<tmx/>").set_filename("glossary.tmx")
    }

    #[test_case(file_part(CreateModelOptions::set_forced_glossary, |o| o.forced_glossary); "create_model forced_glossary")]
    #[test_case(file_part(CreateModelOptions::set_parallel_corpus, |o| o.parallel_corpus); "create_model parallel_corpus")]
    #[test_case(file_part(TranslateDocumentOptions::set_file, |o| o.file); "translate_document file")]
    fn file_setters(got: Option<FilePart>) {
        assert_eq!(got, Some(glossary()));
    }

    #[test]
    fn create_model_clear_files() {
        let options = CreateModelOptions::new("en-es")
            .set_forced_glossary(glossary())
            .set_parallel_corpus(glossary())
            .set_or_clear_forced_glossary(None::<FilePart>)
            .set_or_clear_parallel_corpus(Some(glossary()));
        assert_eq!(options.forced_glossary, None);
        assert_eq!(options.parallel_corpus, Some(glossary()));
    }

    #[test]
    fn list_models_default() {
        let options = ListModelsOptions::new().set_default(true);
        assert_eq!(options.default, Some(true));
        let options = options.set_or_clear_default(None::<bool>);
        assert_eq!(options.default, None);
        let options = options.set_or_clear_default(Some(false));
        assert_eq!(options.default, Some(false));
    }

    #[test]
    fn translate_text() {
        let options = TranslateOptions::default().set_text(["Hello", "world"]);
        assert_eq!(options.text, vec!["Hello".to_string(), "world".to_string()]);
    }
}
