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

//! Files uploaded in `multipart/form-data` requests.
//!
//! Several Watson operations upload documents: translating a document,
//! training a custom model with a glossary, or converting a contract to HTML.
//! Applications provide the contents of these documents as a [FilePart].
//!
//! # Example
//! ```
//! # use ibm_cloud_sdk_core::multipart::FilePart;
//! let part = FilePart::new("Hello, world!")
//!     .set_filename("hello.txt")
//!     .set_content_type("text/plain");
//! assert_eq!(part.data.len(), 13);
//! ```

use crate::Result;
use crate::error::Error;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};

/// The filename used when the application does not provide one.
pub const DEFAULT_FILENAME: &str = "filename";

/// The content type used for documents when the application does not
/// provide one.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// A file uploaded as part of a request.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct FilePart {
    /// The contents of the file.
    pub data: Bytes,

    /// The name of the file. Some operations use the extension to detect the
    /// document format.
    pub filename: Option<String>,

    /// The media type of the file, e.g. `application/pdf`.
    pub content_type: Option<String>,
}

impl FilePart {
    /// Creates a new part with the given contents.
    pub fn new<T: Into<Bytes>>(data: T) -> Self {
        Self {
            data: data.into(),
            ..Default::default()
        }
    }

    /// Reads the contents from a file.
    ///
    /// The filename is set to the last component of `path`.
    pub async fn from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        Ok(Self {
            data: Bytes::from(data),
            filename,
            content_type: None,
        })
    }

    /// Sets the value of [filename][FilePart::filename].
    pub fn set_filename<T: Into<String>>(mut self, v: T) -> Self {
        self.filename = Some(v.into());
        self
    }

    /// Sets the value of [content_type][FilePart::content_type].
    pub fn set_content_type<T: Into<String>>(mut self, v: T) -> Self {
        self.content_type = Some(v.into());
        self
    }
}

// The contents can be large, and are often binary.
impl std::fmt::Debug for FilePart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilePart")
            .field("data.len()", &self.data.len())
            .field("filename", &self.filename)
            .field("content_type", &self.content_type)
            .finish()
    }
}

impl From<Bytes> for FilePart {
    fn from(value: Bytes) -> Self {
        Self::new(value)
    }
}

impl From<Vec<u8>> for FilePart {
    fn from(value: Vec<u8>) -> Self {
        Self::new(value)
    }
}

impl From<&'static str> for FilePart {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}

impl From<String> for FilePart {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// The fields of a `multipart/form-data` request body.
///
/// Fields are sent in the order they are added.
#[derive(Clone, Debug, Default)]
pub struct FormData {
    fields: Vec<Field>,
}

#[derive(Clone, Debug)]
enum Field {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        part: FilePart,
        default_content_type: &'static str,
    },
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a text field.
    pub fn text<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.fields.push(Field::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Adds a text field if `value` is set.
    pub fn optional_text<K: Into<String>>(self, name: K, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.text(name, v),
            None => self,
        }
    }

    /// Adds a file field.
    ///
    /// If the part has no content type, `default_content_type` is used. If the
    /// part has no filename, [DEFAULT_FILENAME] is used.
    pub fn file<K: Into<String>>(
        mut self,
        name: K,
        part: FilePart,
        default_content_type: &'static str,
    ) -> Self {
        self.fields.push(Field::File {
            name: name.into(),
            part,
            default_content_type,
        });
        self
    }

    /// Adds a file field if `part` is set.
    pub fn optional_file<K: Into<String>>(
        self,
        name: K,
        part: Option<FilePart>,
        default_content_type: &'static str,
    ) -> Self {
        match part {
            Some(p) => self.file(name, p, default_content_type),
            None => self,
        }
    }

    /// The number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn into_form(self) -> Result<Form> {
        self.fields
            .into_iter()
            .try_fold(Form::new(), |form, field| match field {
                Field::Text { name, value } => Ok(form.text(name, value)),
                Field::File {
                    name,
                    part,
                    default_content_type,
                } => {
                    let content_type = part
                        .content_type
                        .unwrap_or_else(|| default_content_type.to_string());
                    let filename = part
                        .filename
                        .unwrap_or_else(|| DEFAULT_FILENAME.to_string());
                    let part = Part::bytes(part.data.to_vec())
                        .file_name(filename)
                        .mime_str(&content_type)
                        .map_err(Error::ser)?;
                    Ok(form.part(name, part))
                }
            })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use http_body_util::BodyExt;
    use pretty_assertions::assert_eq;

    // Parse a multipart body into (name, filename, content type, contents).
    async fn parse_form(
        form: Form,
    ) -> anyhow::Result<Vec<(String, Option<String>, Option<String>, Bytes)>> {
        let mut request = reqwest::Client::new()
            .post("https://test.example.com/v3/documents")
            .multipart(form)
            .build()?;
        let boundary = request
            .headers()
            .get("content-type")
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("multipart/form-data; boundary="))
            .expect("request should include content-type")
            .to_string();
        let stream = request
            .body_mut()
            .take()
            .expect("request should have a body")
            .into_data_stream();
        let mut multipart = multer::Multipart::new(stream, boundary);
        let mut fields = Vec::new();
        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            let filename = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(|m| m.to_string());
            let contents = field.bytes().await?;
            fields.push((name, filename, content_type, contents));
        }
        Ok(fields)
    }

    #[test]
    fn file_part() {
        let part = FilePart::new(vec![1_u8, 2, 3])
            .set_filename("glossary.tmx")
            .set_content_type("application/x-tmx+xml");
        assert_eq!(part.data, Bytes::from_static(&[1, 2, 3]));
        assert_eq!(part.filename.as_deref(), Some("glossary.tmx"));
        assert_eq!(part.content_type.as_deref(), Some("application/x-tmx+xml"));
        let got = format!("{part:?}");
        assert!(got.contains("data.len()"), "{got}");
    }

    #[test]
    fn file_part_from() {
        assert_eq!(FilePart::from("abc").data, Bytes::from_static(b"abc"));
        assert_eq!(FilePart::from("abc".to_string()).data, Bytes::from_static(b"abc"));
        assert_eq!(FilePart::from(vec![b'a']).data, Bytes::from_static(b"a"));
        assert_eq!(
            FilePart::from(Bytes::from_static(b"xyz")).data,
            Bytes::from_static(b"xyz")
        );
    }

    #[tokio::test]
    async fn file_part_from_path() -> anyhow::Result<()> {
        let path = std::env::temp_dir().join(format!("multipart-test-{}.txt", std::process::id()));
        tokio::fs::write(&path, "Hello").await?;
        let part = FilePart::from_path(&path).await;
        tokio::fs::remove_file(&path).await?;
        let part = part?;
        assert_eq!(part.data, Bytes::from_static(b"Hello"));
        assert_eq!(
            part.filename.as_deref(),
            path.file_name().and_then(|n| n.to_str())
        );
        assert_eq!(part.content_type, None);
        Ok(())
    }

    #[tokio::test]
    async fn form_defaults() -> anyhow::Result<()> {
        let form = FormData::new().file("file", FilePart::new("contents"), OCTET_STREAM);
        assert_eq!(form.len(), 1);
        let fields = parse_form(form.into_form()?).await?;
        assert_eq!(
            fields,
            vec![(
                "file".to_string(),
                Some("filename".to_string()),
                Some("application/octet-stream".to_string()),
                Bytes::from_static(b"contents"),
            )]
        );
        Ok(())
    }

    #[tokio::test]
    async fn form_fields() -> anyhow::Result<()> {
        let form = FormData::new()
            .file(
                "file",
                FilePart::new("Hello").set_filename("hello.txt").set_content_type("text/plain"),
                OCTET_STREAM,
            )
            .optional_text("model_id", Some("en-es"))
            .optional_text("source", None)
            .optional_file("glossary", None, OCTET_STREAM)
            .text("target", "es");
        assert_eq!(form.len(), 3);
        let fields = parse_form(form.into_form()?).await?;
        assert_eq!(
            fields,
            vec![
                (
                    "file".to_string(),
                    Some("hello.txt".to_string()),
                    Some("text/plain".to_string()),
                    Bytes::from_static(b"Hello"),
                ),
                ("model_id".to_string(), None, None, Bytes::from_static(b"en-es")),
                ("target".to_string(), None, None, Bytes::from_static(b"es")),
            ]
        );
        Ok(())
    }

    #[test]
    fn form_bad_content_type() {
        let form = FormData::new().file(
            "file",
            FilePart::new("x").set_content_type("not a\nmime type"),
            OCTET_STREAM,
        );
        let got = form.into_form();
        assert!(matches!(&got, Err(e) if e.is_serialization()), "{got:?}");
    }

    #[test]
    fn empty() {
        let form = FormData::new();
        assert!(form.is_empty());
        assert_eq!(form.len(), 0);
    }
}
