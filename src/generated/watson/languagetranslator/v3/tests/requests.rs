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
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use ibm_watson_language_translator_v3::RequestOptionsBuilder;
    use ibm_watson_language_translator_v3::client::LanguageTranslator;
    use ibm_watson_language_translator_v3::credentials::NoAuth;
    use ibm_watson_language_translator_v3::model::*;
    use ibm_watson_language_translator_v3::multipart::FilePart;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type Result = anyhow::Result<()>;

    const VERSION: &str = "2018-05-01";

    async fn test_client(server: &Server) -> anyhow::Result<LanguageTranslator> {
        let client = LanguageTranslator::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(NoAuth)
            .build()
            .await?;
        Ok(client)
    }

    fn analytics(operation_id: &str) -> String {
        format!(
            "service_name=language_translator;service_version=V3;operation_id={operation_id}"
        )
    }

    #[tokio::test]
    async fn translate() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v3/translate"),
                request::query(url_decoded(contains(("version", VERSION)))),
                request::headers(contains(("accept", "application/json"))),
                request::headers(contains(("x-ibmcloud-sdk-analytics", analytics("Translate")))),
                request::body(json_decoded(eq(json!({
                    "text": ["Hello"],
                    "model_id": "en-es"
                })))),
            ])
            .respond_with(json_encoded(json!({"word_count": 28}))),
        );

        let client = test_client(&server).await?;
        let result = client
            .translate()
            .set_text(["Hello"])
            .set_model_id("en-es")
            .send()
            .await?;
        let result = result.expect("the service returned a payload");
        assert_eq!(result.word_count, Some(28));
        assert!(result.translations.is_empty(), "{result:?}");
        Ok(())
    }

    #[tokio::test]
    async fn translate_with_request() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v3/translate"),
                request::body(json_decoded(eq(json!({
                    "text": ["Hello", "Goodbye"],
                    "source": "en",
                    "target": "es"
                })))),
            ])
            .respond_with(json_encoded(json!({
                "word_count": 2,
                "character_count": 12,
                "translations": [{"translation": "Hola"}, {"translation": "Adiós"}]
            }))),
        );

        let client = test_client(&server).await?;
        let options = TranslateOptions::new(["Hello", "Goodbye"])
            .set_source("en")
            .set_target("es");
        let result = client.translate().with_request(options).send().await?;
        let want = TranslationResult::new()
            .set_word_count(2)
            .set_character_count(12)
            .set_translations([
                Translation::new().set_translation("Hola"),
                Translation::new().set_translation("Adiós"),
            ]);
        assert_eq!(result, Some(want));
        Ok(())
    }

    #[tokio::test]
    async fn list_languages() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v3/languages"),
                request::query(url_decoded(contains(("version", VERSION)))),
                request::headers(contains((
                    "x-ibmcloud-sdk-analytics",
                    analytics("ListLanguages")
                ))),
            ])
            .respond_with(json_encoded(json!({
                "languages": [{
                    "language": "es",
                    "language_name": "Spanish",
                    "native_language_name": "Español",
                    "country_code": "ES",
                    "words_separated": true,
                    "direction": "left_to_right",
                    "supported_as_source": true,
                    "supported_as_target": true,
                    "identifiable": true
                }]
            }))),
        );

        let client = test_client(&server).await?;
        let result = client.list_languages().send().await?;
        let want = Languages::new().set_languages([Language::new()
            .set_language("es")
            .set_language_name("Spanish")
            .set_native_language_name("Español")
            .set_country_code("ES")
            .set_words_separated(true)
            .set_direction(language::direction::LEFT_TO_RIGHT)
            .set_supported_as_source(true)
            .set_supported_as_target(true)
            .set_identifiable(true)]);
        assert_eq!(result, Some(want));
        Ok(())
    }

    #[tokio::test]
    async fn list_identifiable_languages() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v3/identifiable_languages"))
                .respond_with(json_encoded(json!({
                    "languages": [{"language": "af", "name": "Afrikaans"}]
                }))),
        );

        let client = test_client(&server).await?;
        let result = client.list_identifiable_languages().send().await?;
        let want = IdentifiableLanguages::new().set_languages([IdentifiableLanguage::new()
            .set_language("af")
            .set_name("Afrikaans")]);
        assert_eq!(result, Some(want));
        Ok(())
    }

    #[tokio::test]
    async fn identify() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v3/identify"),
                request::headers(contains(("content-type", "text/plain"))),
                request::headers(contains(("x-ibmcloud-sdk-analytics", analytics("Identify")))),
                request::body(matches("^Language Translator translates text$")),
            ])
            .respond_with(json_encoded(json!({
                "languages": [
                    {"language": "en", "confidence": 0.9},
                    {"language": "nn", "confidence": 0.01}
                ]
            }))),
        );

        let client = test_client(&server).await?;
        let result = client
            .identify()
            .set_text("Language Translator translates text")
            .send()
            .await?;
        let languages = result.map(|r| r.languages).unwrap_or_default();
        assert_eq!(
            languages.first().and_then(|l| l.language.as_deref()),
            Some("en")
        );
        assert_eq!(languages.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn list_models() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v3/models"),
                request::query(url_decoded(contains(("version", VERSION)))),
                request::query(url_decoded(contains(("source", "en")))),
                request::query(url_decoded(contains(("target", "fr")))),
                request::query(url_decoded(contains(("default", "true")))),
            ])
            .respond_with(json_encoded(json!({
                "models": [{
                    "model_id": "en-fr",
                    "source": "en",
                    "target": "fr",
                    "default_model": true,
                    "status": "available"
                }]
            }))),
        );

        let client = test_client(&server).await?;
        let result = client
            .list_models()
            .set_source("en")
            .set_target("fr")
            .set_default(true)
            .send()
            .await?;
        let models = result.map(|r| r.models).unwrap_or_default();
        assert_eq!(models.len(), 1, "{models:?}");
        assert_eq!(
            models[0].status.as_deref(),
            Some(translation_model::status::AVAILABLE)
        );
        Ok(())
    }

    #[tokio::test]
    async fn list_models_no_filters() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v3/models"),
                request::query(url_decoded(contains(("version", VERSION)))),
                request::query(url_decoded(not(contains(key("source"))))),
                request::query(url_decoded(not(contains(key("target"))))),
                request::query(url_decoded(not(contains(key("default"))))),
            ])
            .respond_with(json_encoded(json!({"models": []}))),
        );

        let client = test_client(&server).await?;
        let result = client.list_models().send().await?;
        assert_eq!(result, Some(TranslationModels::new()));
        Ok(())
    }

    #[tokio::test]
    async fn create_model() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v3/models"),
                request::query(url_decoded(contains(("version", VERSION)))),
                request::query(url_decoded(contains(("base_model_id", "en-fr")))),
                request::query(url_decoded(contains(("name", "my-model")))),
                request::headers(contains((
                    "content-type",
                    matches("^multipart/form-data; boundary=")
                ))),
                request::body(matches(
                    "name=\"forced_glossary\"; filename=\"glossary.tmx\""
                )),
                request::body(matches("(?i)content-type: application/x-tmx\\+xml")),
                request::body(matches("<tmx version")),
                request::body(not(matches("parallel_corpus"))),
            ])
            .respond_with(json_encoded(json!({
                "model_id": "custom-en-fr",
                "base_model_id": "en-fr",
                "name": "my-model",
                "status": "dispatching"
            }))),
        );

        let client = test_client(&server).await?;
        let glossary = FilePart::new("<tmx version=\"1.4\"></tmx>")
            .set_filename("glossary.tmx")
            .set_content_type("application/x-tmx+xml");
        let result = client
            .create_model()
            .set_base_model_id("en-fr")
            .set_name("my-model")
            .set_forced_glossary(glossary)
            .send()
            .await?;
        let want = TranslationModel::new()
            .set_model_id("custom-en-fr")
            .set_base_model_id("en-fr")
            .set_name("my-model")
            .set_status(translation_model::status::DISPATCHING);
        assert_eq!(result, Some(want));
        Ok(())
    }

    #[tokio::test]
    async fn delete_model() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/v3/models/my%20model%2F1"),
                request::query(url_decoded(contains(("version", VERSION)))),
            ])
            .respond_with(json_encoded(json!({"status": "OK"}))),
        );

        let client = test_client(&server).await?;
        let result = client
            .delete_model()
            .set_model_id("my model/1")
            .send()
            .await?;
        assert_eq!(result, Some(DeleteModelResult::new().set_status("OK")));
        Ok(())
    }

    #[tokio::test]
    async fn get_model() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v3/models/en-es"),
                request::headers(contains(("x-ibmcloud-sdk-analytics", analytics("GetModel")))),
            ])
            .respond_with(json_encoded(json!({
                "model_id": "en-es",
                "customizable": true,
                "default_model": true,
                "owner": "",
                "status": "available"
            }))),
        );

        let client = test_client(&server).await?;
        let result = client
            .get_model()
            .with_request(GetModelOptions::new("en-es"))
            .send()
            .await?;
        let want = TranslationModel::new()
            .set_model_id("en-es")
            .set_customizable(true)
            .set_default_model(true)
            .set_owner("")
            .set_status("available");
        assert_eq!(result, Some(want));
        Ok(())
    }

    #[tokio::test]
    async fn list_documents() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v3/documents")).respond_with(
                json_encoded(json!({
                    "documents": [
                        {"document_id": "doc-1", "status": "processing"},
                        {"document_id": "doc-2", "status": "available"}
                    ]
                })),
            ),
        );

        let client = test_client(&server).await?;
        let result = client.list_documents().send().await?;
        let ids = result
            .iter()
            .flat_map(|r| r.documents.iter())
            .filter_map(|d| d.document_id.as_deref())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["doc-1", "doc-2"]);
        Ok(())
    }

    #[tokio::test]
    async fn translate_document() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v3/documents"),
                request::query(url_decoded(contains(("version", VERSION)))),
                request::headers(contains((
                    "x-ibmcloud-sdk-analytics",
                    analytics("TranslateDocument")
                ))),
                request::body(matches("name=\"file\"; filename=\"filename\"")),
                request::body(matches("(?i)content-type: application/octet-stream")),
                request::body(matches("name=\"model_id\"\r\n\r\nen-es\r\n")),
                request::body(not(matches("name=\"source\""))),
                request::body(not(matches("name=\"document_id\""))),
            ])
            .respond_with(
                status_code(202)
                    .append_header("content-type", "application/json")
                    .body(r#"{"document_id": "doc-1", "status": "processing", "model_id": "en-es"}"#),
            ),
        );

        let client = test_client(&server).await?;
        let result = client
            .translate_document()
            .set_file(FilePart::new("Hello world"))
            .set_model_id("en-es")
            .send()
            .await?;
        let want = DocumentStatus::new()
            .set_document_id("doc-1")
            .set_status(document_status::status::PROCESSING)
            .set_model_id("en-es");
        assert_eq!(result, Some(want));
        Ok(())
    }

    #[tokio::test]
    async fn get_document_status() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v3/documents/doc-1"))
                .respond_with(json_encoded(json!({
                    "document_id": "doc-1",
                    "filename": "hello.txt",
                    "status": "available",
                    "created": "2019-03-07T12:34:56Z",
                    "word_count": 2,
                    "character_count": 11
                }))),
        );

        let client = test_client(&server).await?;
        let result = client
            .get_document_status()
            .set_document_id("doc-1")
            .send()
            .await?
            .expect("the service returned a payload");
        assert_eq!(result.filename.as_deref(), Some("hello.txt"));
        assert_eq!(result.word_count, Some(2));
        assert!(result.created.is_some(), "{result:?}");
        Ok(())
    }

    #[tokio::test]
    async fn delete_document() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/v3/documents/doc-1"),
                request::query(url_decoded(contains(("version", VERSION)))),
            ])
            .respond_with(status_code(204)),
        );

        let client = test_client(&server).await?;
        client
            .delete_document()
            .set_document_id("doc-1")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn get_translated_document() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v3/documents/doc-1/translated_document"),
                request::headers(contains(("accept", "text/plain"))),
                request::headers(contains((
                    "x-ibmcloud-sdk-analytics",
                    analytics("GetTranslatedDocument")
                ))),
            ])
            .respond_with(
                status_code(200)
                    .append_header("content-type", "text/plain")
                    .body("Hola mundo"),
            ),
        );

        let client = test_client(&server).await?;
        let stream = client
            .get_translated_document()
            .set_document_id("doc-1")
            .set_accept("text/plain")
            .send()
            .await?;
        let contents = stream.all_bytes().await?;
        assert_eq!(contents.as_ref(), b"Hola mundo");
        Ok(())
    }

    #[tokio::test]
    async fn empty_payload() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v3/documents"))
                .respond_with(status_code(200)),
        );

        let client = test_client(&server).await?;
        let result = client.list_documents().send().await?;
        assert_eq!(result, None);
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v3/models/not-a-model"))
                .respond_with(
                    status_code(404)
                        .append_header("content-type", "application/json")
                        .body(r#"{"code": 404, "error": "Model not found"}"#),
                ),
        );

        let client = test_client(&server).await?;
        let err = client
            .get_model()
            .set_model_id("not-a-model")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_service(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(404));
        assert_eq!(
            err.service_error().map(|e| e.message()),
            Some("Model not found")
        );
        Ok(())
    }

    #[tokio::test]
    async fn malformed_payload() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v3/languages"))
                .respond_with(status_code(200).body("<html>not json</html>")),
        );

        let client = test_client(&server).await?;
        let err = client.list_languages().send().await.unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn missing_required_fields() -> Result {
        // The server fails the test if it receives any request.
        let server = Server::run();
        let client = test_client(&server).await?;

        let err = client.translate().send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        let err = client.identify().send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        let err = client.create_model().send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        let err = client.delete_model().send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        let err = client.get_model().send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        let err = client.translate_document().send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        let err = client.get_document_status().send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        let err = client.delete_document().send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        let err = client.get_translated_document().send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn custom_headers() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v3/translate"),
                request::headers(contains(("x-watson-metadata", "customer_id=my-customer"))),
                request::headers(contains(("x-watson-learning-opt-out", "true"))),
                request::headers(contains(("user-agent", matches("^my-app/1.0 ")))),
            ])
            .respond_with(json_encoded(json!({"word_count": 1}))),
        );

        let client = LanguageTranslator::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(NoAuth)
            .with_default_header("X-Watson-Learning-Opt-Out", "true")
            .build()
            .await?;
        let result = client
            .translate()
            .set_text(["Hello"])
            .set_model_id("en-es")
            .with_header("X-Watson-Metadata", "customer_id=my-customer")
            .with_user_agent("my-app/1.0")
            .send()
            .await?;
        assert_eq!(result.and_then(|r| r.word_count), Some(1));
        Ok(())
    }

    #[tokio::test]
    async fn custom_version() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v3/identifiable_languages"),
                request::query(url_decoded(contains(("version", "2019-01-01")))),
            ])
            .respond_with(json_encoded(json!({"languages": []}))),
        );

        let client = LanguageTranslator::builder()
            .with_endpoint(format!("http://{}/", server.addr()))
            .with_version("2019-01-01")
            .with_credentials(NoAuth)
            .with_tracing()
            .build()
            .await?;
        let result = client.list_identifiable_languages().send().await?;
        assert_eq!(result, Some(IdentifiableLanguages::new()));
        Ok(())
    }
}
