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

pub mod compare_comply {
    use crate::Result;
    use sdk_core::multipart::FilePart;

    /// A builder for [CompareComply][crate::client::CompareComply].
    ///
    /// ```no_run
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use ibm_watson_compare_comply_v1::builder::compare_comply::ClientBuilder;
    /// # use ibm_watson_compare_comply_v1::client::CompareComply;
    /// let builder: ClientBuilder = CompareComply::builder();
    /// let client = builder
    ///     .with_endpoint("https://api.eu-de.example.watson.cloud.ibm.com")
    ///     .build()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub type ClientBuilder = sdk_core::client_builder::ClientBuilder<client::Factory>;

    pub(crate) mod client {
        use super::super::super::client::CompareComply;
        pub struct Factory;
        impl sdk_core::client_builder::internal::ClientFactory for Factory {
            type Client = CompareComply;
            async fn build(
                self,
                config: sdk_core::client_builder::internal::ClientConfig,
            ) -> sdk_core::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [CompareComply][crate::client::CompareComply] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::CompareComply>,
        request: R,
        options: sdk_core::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CompareComply>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: sdk_core::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [CompareComply::convert_to_html][crate::client::CompareComply::convert_to_html] calls.
    ///
    /// # Example
    /// ```
    /// # use ibm_watson_compare_comply_v1::builder::compare_comply::ConvertToHtml;
    /// # async fn sample() -> ibm_watson_compare_comply_v1::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ConvertToHtml {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ConvertToHtml(RequestBuilder<crate::model::ConvertToHtmlOptions>);

    impl ConvertToHtml {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CompareComply>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ConvertToHtmlOptions>>(mut self, v: V) -> Self {
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
        pub async fn send(self) -> Result<Option<crate::model::HtmlReturn>> {
            (*self.0.stub)
                .convert_to_html(self.0.request, self.0.options)
                .await
                .map(sdk_core::response::Response::into_body)
        }

        /// Sets the value of [file][crate::model::ConvertToHtmlOptions::file].
        ///
        /// This is a **required** field for requests.
        pub fn set_file<T: Into<FilePart>>(mut self, v: T) -> Self {
            self.0.request.file = Some(v.into());
            self
        }

        /// Sets the value of [model][crate::model::ConvertToHtmlOptions::model].
        pub fn set_model<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.model = Some(v.into());
            self
        }

        /// Sets or clears the value of [model][crate::model::ConvertToHtmlOptions::model].
        pub fn set_or_clear_model<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.model = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl sdk_core::options::internal::RequestBuilder for ConvertToHtml {
        fn request_options(&mut self) -> &mut sdk_core::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CompareComply::classify_elements][crate::client::CompareComply::classify_elements] calls.
    ///
    /// # Example
    /// ```
    /// # use ibm_watson_compare_comply_v1::builder::compare_comply::ClassifyElements;
    /// # async fn sample() -> ibm_watson_compare_comply_v1::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ClassifyElements {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ClassifyElements(RequestBuilder<crate::model::ClassifyElementsOptions>);

    impl ClassifyElements {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CompareComply>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ClassifyElementsOptions>>(mut self, v: V) -> Self {
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
        pub async fn send(self) -> Result<Option<crate::model::ClassifyReturn>> {
            (*self.0.stub)
                .classify_elements(self.0.request, self.0.options)
                .await
                .map(sdk_core::response::Response::into_body)
        }

        /// Sets the value of [file][crate::model::ClassifyElementsOptions::file].
        ///
        /// This is a **required** field for requests.
        pub fn set_file<T: Into<FilePart>>(mut self, v: T) -> Self {
            self.0.request.file = Some(v.into());
            self
        }

        /// Sets the value of [model][crate::model::ClassifyElementsOptions::model].
        pub fn set_model<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.model = Some(v.into());
            self
        }

        /// Sets or clears the value of [model][crate::model::ClassifyElementsOptions::model].
        pub fn set_or_clear_model<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.model = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl sdk_core::options::internal::RequestBuilder for ClassifyElements {
        fn request_options(&mut self) -> &mut sdk_core::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CompareComply::extract_tables][crate::client::CompareComply::extract_tables] calls.
    ///
    /// # Example
    /// ```
    /// # use ibm_watson_compare_comply_v1::builder::compare_comply::ExtractTables;
    /// # async fn sample() -> ibm_watson_compare_comply_v1::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ExtractTables {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ExtractTables(RequestBuilder<crate::model::ExtractTablesOptions>);

    impl ExtractTables {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CompareComply>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ExtractTablesOptions>>(mut self, v: V) -> Self {
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
        pub async fn send(self) -> Result<Option<crate::model::TableReturn>> {
            (*self.0.stub)
                .extract_tables(self.0.request, self.0.options)
                .await
                .map(sdk_core::response::Response::into_body)
        }

        /// Sets the value of [file][crate::model::ExtractTablesOptions::file].
        ///
        /// This is a **required** field for requests.
        pub fn set_file<T: Into<FilePart>>(mut self, v: T) -> Self {
            self.0.request.file = Some(v.into());
            self
        }

        /// Sets the value of [model][crate::model::ExtractTablesOptions::model].
        pub fn set_model<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.model = Some(v.into());
            self
        }

        /// Sets or clears the value of [model][crate::model::ExtractTablesOptions::model].
        pub fn set_or_clear_model<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.model = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl sdk_core::options::internal::RequestBuilder for ExtractTables {
        fn request_options(&mut self) -> &mut sdk_core::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CompareComply::compare_documents][crate::client::CompareComply::compare_documents] calls.
    ///
    /// # Example
    /// ```
    /// # use ibm_watson_compare_comply_v1::builder::compare_comply::CompareDocuments;
    /// # async fn sample() -> ibm_watson_compare_comply_v1::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> CompareDocuments {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CompareDocuments(RequestBuilder<crate::model::CompareDocumentsOptions>);

    impl CompareDocuments {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CompareComply>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CompareDocumentsOptions>>(mut self, v: V) -> Self {
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
        pub async fn send(self) -> Result<Option<crate::model::CompareReturn>> {
            (*self.0.stub)
                .compare_documents(self.0.request, self.0.options)
                .await
                .map(sdk_core::response::Response::into_body)
        }

        /// Sets the value of [file_1][crate::model::CompareDocumentsOptions::file_1].
        ///
        /// This is a **required** field for requests.
        pub fn set_file_1<T: Into<FilePart>>(mut self, v: T) -> Self {
            self.0.request.file_1 = Some(v.into());
            self
        }

        /// Sets the value of [file_2][crate::model::CompareDocumentsOptions::file_2].
        ///
        /// This is a **required** field for requests.
        pub fn set_file_2<T: Into<FilePart>>(mut self, v: T) -> Self {
            self.0.request.file_2 = Some(v.into());
            self
        }

        /// Sets the value of [file_1_label][crate::model::CompareDocumentsOptions::file_1_label].
        pub fn set_file_1_label<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.file_1_label = Some(v.into());
            self
        }

        /// Sets or clears the value of [file_1_label][crate::model::CompareDocumentsOptions::file_1_label].
        pub fn set_or_clear_file_1_label<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.file_1_label = v.map(|x| x.into());
            self
        }

        /// Sets the value of [file_2_label][crate::model::CompareDocumentsOptions::file_2_label].
        pub fn set_file_2_label<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.file_2_label = Some(v.into());
            self
        }

        /// Sets or clears the value of [file_2_label][crate::model::CompareDocumentsOptions::file_2_label].
        pub fn set_or_clear_file_2_label<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.file_2_label = v.map(|x| x.into());
            self
        }

        /// Sets the value of [model][crate::model::CompareDocumentsOptions::model].
        pub fn set_model<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.model = Some(v.into());
            self
        }

        /// Sets or clears the value of [model][crate::model::CompareDocumentsOptions::model].
        pub fn set_or_clear_model<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.model = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl sdk_core::options::internal::RequestBuilder for CompareDocuments {
        fn request_options(&mut self) -> &mut sdk_core::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CompareComply::add_feedback][crate::client::CompareComply::add_feedback] calls.
    ///
    /// # Example
    /// ```
    /// # use ibm_watson_compare_comply_v1::builder::compare_comply::AddFeedback;
    /// # async fn sample() -> ibm_watson_compare_comply_v1::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> AddFeedback {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct AddFeedback(RequestBuilder<crate::model::AddFeedbackOptions>);

    impl AddFeedback {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CompareComply>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::AddFeedbackOptions>>(mut self, v: V) -> Self {
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
        pub async fn send(self) -> Result<Option<crate::model::FeedbackReturn>> {
            (*self.0.stub)
                .add_feedback(self.0.request, self.0.options)
                .await
                .map(sdk_core::response::Response::into_body)
        }

        /// Sets the value of [feedback_data][crate::model::AddFeedbackOptions::feedback_data].
        ///
        /// This is a **required** field for requests.
        pub fn set_feedback_data<T: Into<crate::model::FeedbackDataInput>>(mut self, v: T) -> Self {
            self.0.request.feedback_data = Some(v.into());
            self
        }

        /// Sets the value of [user_id][crate::model::AddFeedbackOptions::user_id].
        pub fn set_user_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.user_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [user_id][crate::model::AddFeedbackOptions::user_id].
        pub fn set_or_clear_user_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.user_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [comment][crate::model::AddFeedbackOptions::comment].
        pub fn set_comment<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.comment = Some(v.into());
            self
        }

        /// Sets or clears the value of [comment][crate::model::AddFeedbackOptions::comment].
        pub fn set_or_clear_comment<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.comment = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl sdk_core::options::internal::RequestBuilder for AddFeedback {
        fn request_options(&mut self) -> &mut sdk_core::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CompareComply::list_feedback][crate::client::CompareComply::list_feedback] calls.
    ///
    /// # Example
    /// ```
    /// # use ibm_watson_compare_comply_v1::builder::compare_comply::ListFeedback;
    /// # async fn sample() -> ibm_watson_compare_comply_v1::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListFeedback {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListFeedback(RequestBuilder<crate::model::ListFeedbackOptions>);

    impl ListFeedback {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CompareComply>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListFeedbackOptions>>(mut self, v: V) -> Self {
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
        pub async fn send(self) -> Result<Option<crate::model::FeedbackList>> {
            (*self.0.stub)
                .list_feedback(self.0.request, self.0.options)
                .await
                .map(sdk_core::response::Response::into_body)
        }

        /// Sets the value of [feedback_type][crate::model::ListFeedbackOptions::feedback_type].
        pub fn set_feedback_type<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.feedback_type = Some(v.into());
            self
        }

        /// Sets or clears the value of [feedback_type][crate::model::ListFeedbackOptions::feedback_type].
        pub fn set_or_clear_feedback_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.feedback_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [before][crate::model::ListFeedbackOptions::before].
        pub fn set_before<T: Into<chrono::NaiveDate>>(mut self, v: T) -> Self {
            self.0.request.before = Some(v.into());
            self
        }

        /// Sets or clears the value of [before][crate::model::ListFeedbackOptions::before].
        pub fn set_or_clear_before<T: Into<chrono::NaiveDate>>(mut self, v: Option<T>) -> Self {
            self.0.request.before = v.map(|x| x.into());
            self
        }

        /// Sets the value of [after][crate::model::ListFeedbackOptions::after].
        pub fn set_after<T: Into<chrono::NaiveDate>>(mut self, v: T) -> Self {
            self.0.request.after = Some(v.into());
            self
        }

        /// Sets or clears the value of [after][crate::model::ListFeedbackOptions::after].
        pub fn set_or_clear_after<T: Into<chrono::NaiveDate>>(mut self, v: Option<T>) -> Self {
            self.0.request.after = v.map(|x| x.into());
            self
        }

        /// Sets the value of [document_title][crate::model::ListFeedbackOptions::document_title].
        pub fn set_document_title<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.document_title = Some(v.into());
            self
        }

        /// Sets or clears the value of [document_title][crate::model::ListFeedbackOptions::document_title].
        pub fn set_or_clear_document_title<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.document_title = v.map(|x| x.into());
            self
        }

        /// Sets the value of [model_id][crate::model::ListFeedbackOptions::model_id].
        pub fn set_model_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.model_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [model_id][crate::model::ListFeedbackOptions::model_id].
        pub fn set_or_clear_model_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.model_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [model_version][crate::model::ListFeedbackOptions::model_version].
        pub fn set_model_version<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.model_version = Some(v.into());
            self
        }

        /// Sets or clears the value of [model_version][crate::model::ListFeedbackOptions::model_version].
        pub fn set_or_clear_model_version<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.model_version = v.map(|x| x.into());
            self
        }

        /// Sets the value of [category_removed][crate::model::ListFeedbackOptions::category_removed].
        pub fn set_category_removed<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.category_removed = Some(v.into());
            self
        }

        /// Sets or clears the value of [category_removed][crate::model::ListFeedbackOptions::category_removed].
        pub fn set_or_clear_category_removed<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.category_removed = v.map(|x| x.into());
            self
        }

        /// Sets the value of [category_added][crate::model::ListFeedbackOptions::category_added].
        pub fn set_category_added<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.category_added = Some(v.into());
            self
        }

        /// Sets or clears the value of [category_added][crate::model::ListFeedbackOptions::category_added].
        pub fn set_or_clear_category_added<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.category_added = v.map(|x| x.into());
            self
        }

        /// Sets the value of [category_not_changed][crate::model::ListFeedbackOptions::category_not_changed].
        pub fn set_category_not_changed<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.category_not_changed = Some(v.into());
            self
        }

        /// Sets or clears the value of [category_not_changed][crate::model::ListFeedbackOptions::category_not_changed].
        pub fn set_or_clear_category_not_changed<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.category_not_changed = v.map(|x| x.into());
            self
        }

        /// Sets the value of [type_removed][crate::model::ListFeedbackOptions::type_removed].
        pub fn set_type_removed<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.type_removed = Some(v.into());
            self
        }

        /// Sets or clears the value of [type_removed][crate::model::ListFeedbackOptions::type_removed].
        pub fn set_or_clear_type_removed<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.type_removed = v.map(|x| x.into());
            self
        }

        /// Sets the value of [type_added][crate::model::ListFeedbackOptions::type_added].
        pub fn set_type_added<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.type_added = Some(v.into());
            self
        }

        /// Sets or clears the value of [type_added][crate::model::ListFeedbackOptions::type_added].
        pub fn set_or_clear_type_added<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.type_added = v.map(|x| x.into());
            self
        }

        /// Sets the value of [type_not_changed][crate::model::ListFeedbackOptions::type_not_changed].
        pub fn set_type_not_changed<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.type_not_changed = Some(v.into());
            self
        }

        /// Sets or clears the value of [type_not_changed][crate::model::ListFeedbackOptions::type_not_changed].
        pub fn set_or_clear_type_not_changed<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.type_not_changed = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_limit][crate::model::ListFeedbackOptions::page_limit].
        pub fn set_page_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.page_limit = Some(v.into());
            self
        }

        /// Sets or clears the value of [page_limit][crate::model::ListFeedbackOptions::page_limit].
        pub fn set_or_clear_page_limit<T: Into<i64>>(mut self, v: Option<T>) -> Self {
            self.0.request.page_limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [cursor][crate::model::ListFeedbackOptions::cursor].
        pub fn set_cursor<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cursor = Some(v.into());
            self
        }

        /// Sets or clears the value of [cursor][crate::model::ListFeedbackOptions::cursor].
        pub fn set_or_clear_cursor<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.cursor = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort][crate::model::ListFeedbackOptions::sort].
        pub fn set_sort<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.sort = Some(v.into());
            self
        }

        /// Sets or clears the value of [sort][crate::model::ListFeedbackOptions::sort].
        pub fn set_or_clear_sort<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.sort = v.map(|x| x.into());
            self
        }

        /// Sets the value of [include_total][crate::model::ListFeedbackOptions::include_total].
        pub fn set_include_total<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.include_total = Some(v.into());
            self
        }

        /// Sets or clears the value of [include_total][crate::model::ListFeedbackOptions::include_total].
        pub fn set_or_clear_include_total<T: Into<bool>>(mut self, v: Option<T>) -> Self {
            self.0.request.include_total = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl sdk_core::options::internal::RequestBuilder for ListFeedback {
        fn request_options(&mut self) -> &mut sdk_core::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CompareComply::get_feedback][crate::client::CompareComply::get_feedback] calls.
    ///
    /// # Example
    /// ```
    /// # use ibm_watson_compare_comply_v1::builder::compare_comply::GetFeedback;
    /// # async fn sample() -> ibm_watson_compare_comply_v1::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetFeedback {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetFeedback(RequestBuilder<crate::model::GetFeedbackOptions>);

    impl GetFeedback {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CompareComply>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetFeedbackOptions>>(mut self, v: V) -> Self {
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
        pub async fn send(self) -> Result<Option<crate::model::GetFeedback>> {
            (*self.0.stub)
                .get_feedback(self.0.request, self.0.options)
                .await
                .map(sdk_core::response::Response::into_body)
        }

        /// Sets the value of [feedback_id][crate::model::GetFeedbackOptions::feedback_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_feedback_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.feedback_id = v.into();
            self
        }

        /// Sets the value of [model][crate::model::GetFeedbackOptions::model].
        pub fn set_model<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.model = Some(v.into());
            self
        }

        /// Sets or clears the value of [model][crate::model::GetFeedbackOptions::model].
        pub fn set_or_clear_model<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.model = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl sdk_core::options::internal::RequestBuilder for GetFeedback {
        fn request_options(&mut self) -> &mut sdk_core::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CompareComply::delete_feedback][crate::client::CompareComply::delete_feedback] calls.
    ///
    /// # Example
    /// ```
    /// # use ibm_watson_compare_comply_v1::builder::compare_comply::DeleteFeedback;
    /// # async fn sample() -> ibm_watson_compare_comply_v1::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> DeleteFeedback {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteFeedback(RequestBuilder<crate::model::DeleteFeedbackOptions>);

    impl DeleteFeedback {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CompareComply>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteFeedbackOptions>>(mut self, v: V) -> Self {
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
        pub async fn send(self) -> Result<Option<crate::model::FeedbackDeleted>> {
            (*self.0.stub)
                .delete_feedback(self.0.request, self.0.options)
                .await
                .map(sdk_core::response::Response::into_body)
        }

        /// Sets the value of [feedback_id][crate::model::DeleteFeedbackOptions::feedback_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_feedback_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.feedback_id = v.into();
            self
        }

        /// Sets the value of [model][crate::model::DeleteFeedbackOptions::model].
        pub fn set_model<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.model = Some(v.into());
            self
        }

        /// Sets or clears the value of [model][crate::model::DeleteFeedbackOptions::model].
        pub fn set_or_clear_model<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.model = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl sdk_core::options::internal::RequestBuilder for DeleteFeedback {
        fn request_options(&mut self) -> &mut sdk_core::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CompareComply::create_batch][crate::client::CompareComply::create_batch] calls.
    ///
    /// # Example
    /// ```
    /// # use ibm_watson_compare_comply_v1::builder::compare_comply::CreateBatch;
    /// # async fn sample() -> ibm_watson_compare_comply_v1::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> CreateBatch {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateBatch(RequestBuilder<crate::model::CreateBatchOptions>);

    impl CreateBatch {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CompareComply>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateBatchOptions>>(mut self, v: V) -> Self {
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
        pub async fn send(self) -> Result<Option<crate::model::BatchStatus>> {
            (*self.0.stub)
                .create_batch(self.0.request, self.0.options)
                .await
                .map(sdk_core::response::Response::into_body)
        }

        /// Sets the value of [function][crate::model::CreateBatchOptions::function].
        ///
        /// This is a **required** field for requests.
        pub fn set_function<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.function = v.into();
            self
        }

        /// Sets the value of [input_credentials_file][crate::model::CreateBatchOptions::input_credentials_file].
        ///
        /// This is a **required** field for requests.
        pub fn set_input_credentials_file<T: Into<FilePart>>(mut self, v: T) -> Self {
            self.0.request.input_credentials_file = Some(v.into());
            self
        }

        /// Sets the value of [input_bucket_location][crate::model::CreateBatchOptions::input_bucket_location].
        ///
        /// This is a **required** field for requests.
        pub fn set_input_bucket_location<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.input_bucket_location = v.into();
            self
        }

        /// Sets the value of [input_bucket_name][crate::model::CreateBatchOptions::input_bucket_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_input_bucket_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.input_bucket_name = v.into();
            self
        }

        /// Sets the value of [output_credentials_file][crate::model::CreateBatchOptions::output_credentials_file].
        ///
        /// This is a **required** field for requests.
        pub fn set_output_credentials_file<T: Into<FilePart>>(mut self, v: T) -> Self {
            self.0.request.output_credentials_file = Some(v.into());
            self
        }

        /// Sets the value of [output_bucket_location][crate::model::CreateBatchOptions::output_bucket_location].
        ///
        /// This is a **required** field for requests.
        pub fn set_output_bucket_location<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.output_bucket_location = v.into();
            self
        }

        /// Sets the value of [output_bucket_name][crate::model::CreateBatchOptions::output_bucket_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_output_bucket_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.output_bucket_name = v.into();
            self
        }

        /// Sets the value of [model][crate::model::CreateBatchOptions::model].
        pub fn set_model<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.model = Some(v.into());
            self
        }

        /// Sets or clears the value of [model][crate::model::CreateBatchOptions::model].
        pub fn set_or_clear_model<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.model = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl sdk_core::options::internal::RequestBuilder for CreateBatch {
        fn request_options(&mut self) -> &mut sdk_core::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CompareComply::list_batches][crate::client::CompareComply::list_batches] calls.
    ///
    /// # Example
    /// ```
    /// # use ibm_watson_compare_comply_v1::builder::compare_comply::ListBatches;
    /// # async fn sample() -> ibm_watson_compare_comply_v1::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListBatches {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListBatches(RequestBuilder<crate::model::ListBatchesOptions>);

    impl ListBatches {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CompareComply>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListBatchesOptions>>(mut self, v: V) -> Self {
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
        pub async fn send(self) -> Result<Option<crate::model::Batches>> {
            (*self.0.stub)
                .list_batches(self.0.request, self.0.options)
                .await
                .map(sdk_core::response::Response::into_body)
        }
    }

    #[doc(hidden)]
    impl sdk_core::options::internal::RequestBuilder for ListBatches {
        fn request_options(&mut self) -> &mut sdk_core::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CompareComply::get_batch][crate::client::CompareComply::get_batch] calls.
    ///
    /// # Example
    /// ```
    /// # use ibm_watson_compare_comply_v1::builder::compare_comply::GetBatch;
    /// # async fn sample() -> ibm_watson_compare_comply_v1::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetBatch {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetBatch(RequestBuilder<crate::model::GetBatchOptions>);

    impl GetBatch {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CompareComply>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetBatchOptions>>(mut self, v: V) -> Self {
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
        pub async fn send(self) -> Result<Option<crate::model::BatchStatus>> {
            (*self.0.stub)
                .get_batch(self.0.request, self.0.options)
                .await
                .map(sdk_core::response::Response::into_body)
        }

        /// Sets the value of [batch_id][crate::model::GetBatchOptions::batch_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_batch_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.batch_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl sdk_core::options::internal::RequestBuilder for GetBatch {
        fn request_options(&mut self) -> &mut sdk_core::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CompareComply::update_batch][crate::client::CompareComply::update_batch] calls.
    ///
    /// # Example
    /// ```
    /// # use ibm_watson_compare_comply_v1::builder::compare_comply::UpdateBatch;
    /// # async fn sample() -> ibm_watson_compare_comply_v1::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> UpdateBatch {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateBatch(RequestBuilder<crate::model::UpdateBatchOptions>);

    impl UpdateBatch {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CompareComply>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateBatchOptions>>(mut self, v: V) -> Self {
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
        pub async fn send(self) -> Result<Option<crate::model::BatchStatus>> {
            (*self.0.stub)
                .update_batch(self.0.request, self.0.options)
                .await
                .map(sdk_core::response::Response::into_body)
        }

        /// Sets the value of [batch_id][crate::model::UpdateBatchOptions::batch_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_batch_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.batch_id = v.into();
            self
        }

        /// Sets the value of [action][crate::model::UpdateBatchOptions::action].
        ///
        /// This is a **required** field for requests.
        pub fn set_action<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.action = v.into();
            self
        }

        /// Sets the value of [model][crate::model::UpdateBatchOptions::model].
        pub fn set_model<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.model = Some(v.into());
            self
        }

        /// Sets or clears the value of [model][crate::model::UpdateBatchOptions::model].
        pub fn set_or_clear_model<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.model = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl sdk_core::options::internal::RequestBuilder for UpdateBatch {
        fn request_options(&mut self) -> &mut sdk_core::options::RequestOptions {
            &mut self.0.options
        }
    }
}
