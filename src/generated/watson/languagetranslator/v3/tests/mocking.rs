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

#[cfg(test)]
mod tests {
    use ibm_watson_language_translator_v3::client::LanguageTranslator;
    use ibm_watson_language_translator_v3::model::*;
    use ibm_watson_language_translator_v3::multipart::FilePart;
    use ibm_watson_language_translator_v3::{
        ByteStream, Error, RequestOptionsBuilder, Response, Result, stub,
    };
    use sdk_core::options::RequestOptions;
    use std::time::Duration;

    mockall::mock! {
        #[derive(Debug)]
        LanguageTranslator {}
        impl stub::LanguageTranslator for LanguageTranslator {
            async fn translate(&self, req: TranslateOptions, options: RequestOptions) -> Result<Response<Option<TranslationResult>>>;
            async fn identify(&self, req: IdentifyOptions, options: RequestOptions) -> Result<Response<Option<IdentifiedLanguages>>>;
            async fn translate_document(&self, req: TranslateDocumentOptions, options: RequestOptions) -> Result<Response<Option<DocumentStatus>>>;
            async fn delete_document(&self, req: DeleteDocumentOptions, options: RequestOptions) -> Result<Response<()>>;
            async fn get_translated_document(&self, req: GetTranslatedDocumentOptions, options: RequestOptions) -> Result<Response<ByteStream>>;
        }
    }

    static_assertions::assert_impl_all!(LanguageTranslator: Clone, Send, Sync, std::fmt::Debug);

    #[tokio::test]
    async fn translate() -> anyhow::Result<()> {
        let mut mock = MockLanguageTranslator::new();
        mock.expect_translate()
            .withf(|req, options| {
                req.text == vec!["Hello".to_string()]
                    && req.model_id.as_deref() == Some("en-es")
                    && req.source.is_none()
                    && options.attempt_timeout() == &Some(Duration::from_secs(5))
            })
            .return_once(|_, _| {
                Ok(Response::from(Some(
                    TranslationResult::new()
                        .set_word_count(1)
                        .set_translations([Translation::new().set_translation("Hola")]),
                )))
            });

        let client = LanguageTranslator::from_stub(mock);
        let result = client
            .translate()
            .set_text(["Hello"])
            .set_model_id("en-es")
            .with_attempt_timeout(Duration::from_secs(5))
            .send()
            .await?;
        let translations = result
            .iter()
            .flat_map(|r| r.translations.iter())
            .filter_map(|t| t.translation.as_deref())
            .collect::<Vec<_>>();
        assert_eq!(translations, vec!["Hola"]);
        Ok(())
    }

    #[tokio::test]
    async fn identify_error() -> anyhow::Result<()> {
        let mut mock = MockLanguageTranslator::new();
        mock.expect_identify()
            .withf(|req, options| {
                req.text == "Hola"
                    && options
                        .headers()
                        .iter()
                        .any(|(k, v)| k == "X-Watson-Metadata" && v == "customer_id=abc")
            })
            .return_once(|_, _| Err(Error::binding("simulated failure")));

        let client = LanguageTranslator::from_stub(mock);
        let err = client
            .identify()
            .set_text("Hola")
            .with_header("X-Watson-Metadata", "customer_id=abc")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn translate_document() -> anyhow::Result<()> {
        let mut mock = MockLanguageTranslator::new();
        mock.expect_translate_document()
            .withf(|req, _| {
                req.file
                    .as_ref()
                    .is_some_and(|f| f.filename.as_deref() == Some("hello.txt"))
                    && req.target.as_deref() == Some("fr")
            })
            .return_once(|_, _| {
                Ok(Response::from(Some(
                    DocumentStatus::new()
                        .set_document_id("doc-1")
                        .set_status(document_status::status::PROCESSING),
                )))
            });
        mock.expect_delete_document()
            .withf(|req, _| req.document_id == "doc-1")
            .return_once(|_, _| Ok(Response::from(())));

        let client = LanguageTranslator::from_stub(mock);
        let status = client
            .translate_document()
            .set_file(FilePart::new("Hello").set_filename("hello.txt"))
            .set_target("fr")
            .send()
            .await?;
        let document_id = status
            .and_then(|s| s.document_id)
            .unwrap_or_default();
        assert_eq!(document_id, "doc-1");

        client
            .delete_document()
            .set_document_id(document_id)
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn get_translated_document() -> anyhow::Result<()> {
        let mut mock = MockLanguageTranslator::new();
        mock.expect_get_translated_document()
            .withf(|req, _| {
                req.document_id == "doc-1" && req.accept.as_deref() == Some("text/plain")
            })
            .return_once(|_, _| Ok(Response::from(ByteStream::from_bytes("Bonjour"))));

        let client = LanguageTranslator::from_stub(mock);
        let stream = client
            .get_translated_document()
            .set_document_id("doc-1")
            .set_accept("text/plain")
            .send()
            .await?;
        let contents = stream.all_bytes().await?;
        assert_eq!(contents.as_ref(), b"Bonjour");
        Ok(())
    }
}
