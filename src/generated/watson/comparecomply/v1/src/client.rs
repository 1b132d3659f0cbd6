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

/// Implements a client for the Compare and Comply API.
///
/// # Example
/// ```no_run
/// # use ibm_watson_compare_comply_v1::client::CompareComply;
/// # use ibm_watson_compare_comply_v1::credentials::BasicAuthenticator;
/// # async fn sample() -> anyhow::Result<()> {
/// let client = CompareComply::builder()
///     .with_credentials(BasicAuthenticator::new("apikey", "my-api-key"))
///     .build()
///     .await?;
/// let batches = client.list_batches().send().await?;
/// println!("batches={batches:?}");
/// # Ok(()) }
/// ```
///
/// # Configuration
///
/// To configure `CompareComply` use the `with_*` methods in the type returned
/// by [builder()][CompareComply::builder]. Settings that are not configured in
/// the builder are loaded from the `COMPARE_COMPLY_*` environment variables.
/// Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the `us-south` endpoint
///   (`https://api.us-south.compare-comply.watson.cloud.ibm.com`).
///   Applications using instances in other regions must override this
///   default.
/// * [with_credentials()]: by default this client uses the credentials
///   configured in the environment. Applications may use basic or bearer
///   token authentication instead.
///
/// # Pooling and Cloning
///
/// `CompareComply` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `CompareComply` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an
/// `Arc` internally.
///
/// # Service Description
///
/// IBM Watson Compare and Comply analyzes governing documents to provide
/// details about critical aspects of the documents.
///
/// [with_endpoint()]: super::builder::compare_comply::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::compare_comply::ClientBuilder::with_credentials
#[derive(Clone, Debug)]
pub struct CompareComply {
    inner: Arc<dyn super::stub::dynamic::CompareComply>,
}

impl CompareComply {
    /// Returns a builder for [CompareComply].
    ///
    /// ```no_run
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use ibm_watson_compare_comply_v1::client::CompareComply;
    /// let client = CompareComply::builder().build().await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> super::builder::compare_comply::ClientBuilder {
        sdk_core::client_builder::internal::new_builder(
            super::builder::compare_comply::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::CompareComply + 'static,
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
    ) -> sdk_core::client_builder::Result<Arc<dyn super::stub::dynamic::CompareComply>> {
        if sdk_core::client_builder::internal::tracing_enabled(&conf) {
            return Ok(Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: sdk_core::client_builder::internal::ClientConfig,
    ) -> sdk_core::client_builder::Result<impl super::stub::CompareComply> {
        super::transport::CompareComply::new(conf).await
    }

    async fn build_with_tracing(
        conf: sdk_core::client_builder::internal::ClientConfig,
    ) -> sdk_core::client_builder::Result<impl super::stub::CompareComply> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::CompareComply::new)
    }

    /// Converts a document to HTML.
    pub fn convert_to_html(&self) -> super::builder::compare_comply::ConvertToHtml {
        super::builder::compare_comply::ConvertToHtml::new(self.inner.clone())
    }

    /// Analyzes the structural and semantic elements of a document.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_watson_compare_comply_v1::client::CompareComply;
    /// use ibm_watson_compare_comply_v1::model::label::nature;
    /// use ibm_watson_compare_comply_v1::multipart::FilePart;
    /// async fn sample(client: &CompareComply) -> anyhow::Result<()> {
    ///     let contract = FilePart::from_path("contract.pdf").await?;
    ///     let result = client
    ///         .classify_elements()
    ///         .set_file(contract)
    ///         .send()
    ///         .await?;
    ///     let obligations = result
    ///         .iter()
    ///         .flat_map(|r| r.elements.iter())
    ///         .filter(|e| {
    ///             e.types.iter().any(|t| {
    ///                 t.label.as_ref().and_then(|l| l.nature.as_deref()) == Some(nature::OBLIGATION)
    ///             })
    ///         });
    ///     for e in obligations {
    ///         println!("{:?}", e.text);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn classify_elements(&self) -> super::builder::compare_comply::ClassifyElements {
        super::builder::compare_comply::ClassifyElements::new(self.inner.clone())
    }

    /// Analyzes the tables in a document.
    pub fn extract_tables(&self) -> super::builder::compare_comply::ExtractTables {
        super::builder::compare_comply::ExtractTables::new(self.inner.clone())
    }

    /// Compares two input documents.
    ///
    /// Documents must be in the same format.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_watson_compare_comply_v1::client::CompareComply;
    /// use ibm_watson_compare_comply_v1::multipart::FilePart;
    /// async fn sample(client: &CompareComply) -> anyhow::Result<()> {
    ///     let result = client
    ///         .compare_documents()
    ///         .set_file_1(FilePart::from_path("contract_a.pdf").await?)
    ///         .set_file_1_label("contract_a")
    ///         .set_file_2(FilePart::from_path("contract_b.pdf").await?)
    ///         .set_file_2_label("contract_b")
    ///         .send()
    ///         .await?;
    ///     for u in result.iter().flat_map(|r| r.unaligned_elements.iter()) {
    ///         println!("only in {:?}: {:?}", u.document_label, u.text);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn compare_documents(&self) -> super::builder::compare_comply::CompareDocuments {
        super::builder::compare_comply::CompareDocuments::new(self.inner.clone())
    }

    /// Adds feedback in the form of _labels_ from a subject-matter expert
    /// (SME) to a governing document.
    ///
    /// **Important:** Feedback is not immediately incorporated into the
    /// training model, nor is it guaranteed to be incorporated at a later date.
    pub fn add_feedback(&self) -> super::builder::compare_comply::AddFeedback {
        super::builder::compare_comply::AddFeedback::new(self.inner.clone())
    }

    /// Lists the feedback in a document.
    pub fn list_feedback(&self) -> super::builder::compare_comply::ListFeedback {
        super::builder::compare_comply::ListFeedback::new(self.inner.clone())
    }

    /// Gets a specified feedback entry.
    pub fn get_feedback(&self) -> super::builder::compare_comply::GetFeedback {
        super::builder::compare_comply::GetFeedback::new(self.inner.clone())
    }

    /// Deletes an existing feedback entry.
    pub fn delete_feedback(&self) -> super::builder::compare_comply::DeleteFeedback {
        super::builder::compare_comply::DeleteFeedback::new(self.inner.clone())
    }

    /// Runs Compare and Comply methods over a collection of input documents.
    ///
    /// **Important:** Batch processing requires the use of the
    /// [IBM Cloud Object Storage service](https://cloud.ibm.com/docs/cloud-object-storage).
    /// The use of IBM Cloud Object Storage with Compare and Comply is
    /// discussed at
    /// [Using batch processing](https://cloud.ibm.com/docs/compare-comply?topic=compare-comply-batching#before-you-batch).
    pub fn create_batch(&self) -> super::builder::compare_comply::CreateBatch {
        super::builder::compare_comply::CreateBatch::new(self.inner.clone())
    }

    /// Lists the batch-processing jobs submitted by users.
    pub fn list_batches(&self) -> super::builder::compare_comply::ListBatches {
        super::builder::compare_comply::ListBatches::new(self.inner.clone())
    }

    /// Gets information about a specific batch-processing job.
    pub fn get_batch(&self) -> super::builder::compare_comply::GetBatch {
        super::builder::compare_comply::GetBatch::new(self.inner.clone())
    }

    /// Updates a pending or active batch-processing job.
    ///
    /// You can rescan the input bucket to check for new documents or cancel a
    /// job.
    pub fn update_batch(&self) -> super::builder::compare_comply::UpdateBatch {
        super::builder::compare_comply::UpdateBatch::new(self.inner.clone())
    }
}
