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

//! Binary payloads returned by download operations.

use crate::Result;
use crate::error::Error;
use bytes::Bytes;
use futures::Stream;

/// The contents of a downloaded document.
///
/// Operations returning binary data, such as downloading a translated
/// document, return the payload as a stream of bytes. The application can
/// read the data in chunks, or collect all the data in memory.
///
/// # Example
/// ```
/// # use ibm_cloud_sdk_core::streaming::ByteStream;
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let mut stream = ByteStream::from_bytes("Hola mundo");
/// while let Some(chunk) = stream.next().await {
///     println!("chunk={:?}", chunk?);
/// }
/// # ibm_cloud_sdk_core::Result::<()>::Ok(()) });
/// ```
#[derive(Debug)]
pub struct ByteStream {
    inner: Inner,
}

#[derive(Debug)]
enum Inner {
    Http(reqwest::Response),
    Buffered(Option<Bytes>),
}

impl ByteStream {
    /// Creates a stream returning `data` in a single chunk.
    ///
    /// Useful when mocking the clients.
    pub fn from_bytes<T: Into<Bytes>>(data: T) -> Self {
        let data = data.into();
        let chunk = if data.is_empty() { None } else { Some(data) };
        Self {
            inner: Inner::Buffered(chunk),
        }
    }

    pub(crate) fn from_response(response: reqwest::Response) -> Self {
        Self {
            inner: Inner::Http(response),
        }
    }

    /// Returns the next chunk of data.
    ///
    /// When the stream has been exhausted, this will return None.
    pub async fn next(&mut self) -> Option<Result<Bytes>> {
        match &mut self.inner {
            Inner::Http(response) => response.chunk().await.map_err(Error::io).transpose(),
            Inner::Buffered(chunk) => chunk.take().map(Ok),
        }
    }

    /// Collects the full payload in memory.
    pub async fn all_bytes(mut self) -> Result<Bytes> {
        let mut contents = Vec::new();
        while let Some(b) = self.next().await.transpose()? {
            contents.extend_from_slice(&b);
        }
        Ok(Bytes::from_owner(contents))
    }

    /// Convert the payload to a [Stream].
    pub fn into_stream(self) -> impl Stream<Item = Result<Bytes>> + Unpin {
        use futures::stream::unfold;
        Box::pin(unfold(Some(self), move |state| async move {
            if let Some(mut this) = state {
                if let Some(chunk) = this.next().await {
                    return Some((chunk, Some(this)));
                }
            };
            None
        }))
    }
}
