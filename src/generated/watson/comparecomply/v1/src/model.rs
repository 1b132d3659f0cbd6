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

use chrono::{DateTime, NaiveDate, Utc};
use sdk_core::multipart::FilePart;

/// The options for [CompareComply::convert_to_html][crate::client::CompareComply::convert_to_html].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ConvertToHtmlOptions {
    /// The document to convert.
    pub file: Option<FilePart>,

    /// The element classification model, `contracts` or `tables`. Compare and
    /// Comply uses `contracts` when this is unset.
    pub model: Option<String>,
}

impl ConvertToHtmlOptions {
    pub fn new<T: Into<FilePart>>(file: T) -> Self {
        Self::default().set_file(file)
    }

    /// Sets the value of [file][ConvertToHtmlOptions::file].
    pub fn set_file<T: Into<FilePart>>(mut self, v: T) -> Self {
        self.file = Some(v.into());
        self
    }

    /// Sets the value of [model][ConvertToHtmlOptions::model].
    pub fn set_model<T: Into<String>>(mut self, v: T) -> Self {
        self.model = Some(v.into());
        self
    }

    /// Sets or clears the value of [model][ConvertToHtmlOptions::model].
    pub fn set_or_clear_model<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.model = v.map(|x| x.into());
        self
    }
}

/// The options for [CompareComply::classify_elements][crate::client::CompareComply::classify_elements].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ClassifyElementsOptions {
    /// The document to classify.
    pub file: Option<FilePart>,

    /// The element classification model, `contracts` or `tables`. Compare and
    /// Comply uses `contracts` when this is unset.
    pub model: Option<String>,
}

impl ClassifyElementsOptions {
    pub fn new<T: Into<FilePart>>(file: T) -> Self {
        Self::default().set_file(file)
    }

    /// Sets the value of [file][ClassifyElementsOptions::file].
    pub fn set_file<T: Into<FilePart>>(mut self, v: T) -> Self {
        self.file = Some(v.into());
        self
    }

    /// Sets the value of [model][ClassifyElementsOptions::model].
    pub fn set_model<T: Into<String>>(mut self, v: T) -> Self {
        self.model = Some(v.into());
        self
    }

    /// Sets or clears the value of [model][ClassifyElementsOptions::model].
    pub fn set_or_clear_model<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.model = v.map(|x| x.into());
        self
    }
}

/// The options for [CompareComply::extract_tables][crate::client::CompareComply::extract_tables].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ExtractTablesOptions {
    /// The document on which to run table extraction.
    pub file: Option<FilePart>,

    pub model: Option<String>,
}

impl ExtractTablesOptions {
    pub fn new<T: Into<FilePart>>(file: T) -> Self {
        Self::default().set_file(file)
    }

    /// Sets the value of [file][ExtractTablesOptions::file].
    pub fn set_file<T: Into<FilePart>>(mut self, v: T) -> Self {
        self.file = Some(v.into());
        self
    }

    /// Sets the value of [model][ExtractTablesOptions::model].
    pub fn set_model<T: Into<String>>(mut self, v: T) -> Self {
        self.model = Some(v.into());
        self
    }

    /// Sets or clears the value of [model][ExtractTablesOptions::model].
    pub fn set_or_clear_model<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.model = v.map(|x| x.into());
        self
    }
}

/// The options for [CompareComply::compare_documents][crate::client::CompareComply::compare_documents].
///
/// Both documents must be in the same format.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CompareDocumentsOptions {
    /// The first document to compare.
    pub file_1: Option<FilePart>,

    /// The second document to compare.
    pub file_2: Option<FilePart>,

    /// A text label for the first document. The service uses `file_1` if unset.
    pub file_1_label: Option<String>,

    /// A text label for the second document. The service uses `file_2` if
    /// unset.
    pub file_2_label: Option<String>,

    pub model: Option<String>,
}

impl CompareDocumentsOptions {
    pub fn new<T: Into<FilePart>, U: Into<FilePart>>(file_1: T, file_2: U) -> Self {
        Self::default()
            .set_file_1(file_1)
            .set_file_2(file_2)
    }

    /// Sets the value of [file_1][CompareDocumentsOptions::file_1].
    pub fn set_file_1<T: Into<FilePart>>(mut self, v: T) -> Self {
        self.file_1 = Some(v.into());
        self
    }

    /// Sets the value of [file_2][CompareDocumentsOptions::file_2].
    pub fn set_file_2<T: Into<FilePart>>(mut self, v: T) -> Self {
        self.file_2 = Some(v.into());
        self
    }

    /// Sets the value of [file_1_label][CompareDocumentsOptions::file_1_label].
    pub fn set_file_1_label<T: Into<String>>(mut self, v: T) -> Self {
        self.file_1_label = Some(v.into());
        self
    }

    /// Sets or clears the value of [file_1_label][CompareDocumentsOptions::file_1_label].
    pub fn set_or_clear_file_1_label<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.file_1_label = v.map(|x| x.into());
        self
    }

    /// Sets the value of [file_2_label][CompareDocumentsOptions::file_2_label].
    pub fn set_file_2_label<T: Into<String>>(mut self, v: T) -> Self {
        self.file_2_label = Some(v.into());
        self
    }

    /// Sets or clears the value of [file_2_label][CompareDocumentsOptions::file_2_label].
    pub fn set_or_clear_file_2_label<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.file_2_label = v.map(|x| x.into());
        self
    }

    /// Sets the value of [model][CompareDocumentsOptions::model].
    pub fn set_model<T: Into<String>>(mut self, v: T) -> Self {
        self.model = Some(v.into());
        self
    }

    /// Sets or clears the value of [model][CompareDocumentsOptions::model].
    pub fn set_or_clear_model<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.model = v.map(|x| x.into());
        self
    }
}

/// The options for [CompareComply::add_feedback][crate::client::CompareComply::add_feedback].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct AddFeedbackOptions {
    /// Feedback data for submission.
    pub feedback_data: Option<FeedbackDataInput>,

    /// An optional string identifying the user.
    pub user_id: Option<String>,

    /// An optional comment on or description of the feedback.
    pub comment: Option<String>,
}

impl AddFeedbackOptions {
    pub fn new<T: Into<FeedbackDataInput>>(feedback_data: T) -> Self {
        Self::default().set_feedback_data(feedback_data)
    }

    /// Sets the value of [feedback_data][AddFeedbackOptions::feedback_data].
    pub fn set_feedback_data<T: Into<FeedbackDataInput>>(mut self, v: T) -> Self {
        self.feedback_data = Some(v.into());
        self
    }

    /// Sets the value of [user_id][AddFeedbackOptions::user_id].
    pub fn set_user_id<T: Into<String>>(mut self, v: T) -> Self {
        self.user_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [user_id][AddFeedbackOptions::user_id].
    pub fn set_or_clear_user_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.user_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [comment][AddFeedbackOptions::comment].
    pub fn set_comment<T: Into<String>>(mut self, v: T) -> Self {
        self.comment = Some(v.into());
        self
    }

    /// Sets or clears the value of [comment][AddFeedbackOptions::comment].
    pub fn set_or_clear_comment<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.comment = v.map(|x| x.into());
        self
    }
}

/// The options for [CompareComply::list_feedback][crate::client::CompareComply::list_feedback].
///
/// All the fields are optional filters. Unset filters are not sent to the
/// service.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListFeedbackOptions {
    /// Only return feedback of this type, for example `element_classification`.
    pub feedback_type: Option<String>,

    /// Only return feedback created before this date.
    pub before: Option<NaiveDate>,

    /// Only return feedback created after this date.
    pub after: Option<NaiveDate>,

    pub document_title: Option<String>,

    pub model_id: Option<String>,

    pub model_version: Option<String>,

    /// A comma-separated list of categories removed by the feedback.
    pub category_removed: Option<String>,

    /// A comma-separated list of categories added by the feedback.
    pub category_added: Option<String>,

    /// A comma-separated list of categories left unchanged by the feedback.
    pub category_not_changed: Option<String>,

    /// A comma-separated list of types removed by the feedback, in
    /// `nature:party` form.
    pub type_removed: Option<String>,

    /// A comma-separated list of types added by the feedback, in `nature:party`
    /// form.
    pub type_added: Option<String>,

    /// A comma-separated list of types left unchanged by the feedback, in
    /// `nature:party` form.
    pub type_not_changed: Option<String>,

    /// The maximum number of entries in each page of results.
    pub page_limit: Option<i64>,

    /// The cursor returned by a previous call, used to fetch the next page.
    pub cursor: Option<String>,

    /// A comma-separated list of fields to sort by. Prefix a field with `-` for
    /// descending order.
    pub sort: Option<String>,

    /// Whether to include the total number of entries in the pagination
    /// metadata.
    pub include_total: Option<bool>,
}

impl ListFeedbackOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [feedback_type][ListFeedbackOptions::feedback_type].
    pub fn set_feedback_type<T: Into<String>>(mut self, v: T) -> Self {
        self.feedback_type = Some(v.into());
        self
    }

    /// Sets or clears the value of [feedback_type][ListFeedbackOptions::feedback_type].
    pub fn set_or_clear_feedback_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.feedback_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [before][ListFeedbackOptions::before].
    pub fn set_before<T: Into<NaiveDate>>(mut self, v: T) -> Self {
        self.before = Some(v.into());
        self
    }

    /// Sets or clears the value of [before][ListFeedbackOptions::before].
    pub fn set_or_clear_before<T: Into<NaiveDate>>(mut self, v: Option<T>) -> Self {
        self.before = v.map(|x| x.into());
        self
    }

    /// Sets the value of [after][ListFeedbackOptions::after].
    pub fn set_after<T: Into<NaiveDate>>(mut self, v: T) -> Self {
        self.after = Some(v.into());
        self
    }

    /// Sets or clears the value of [after][ListFeedbackOptions::after].
    pub fn set_or_clear_after<T: Into<NaiveDate>>(mut self, v: Option<T>) -> Self {
        self.after = v.map(|x| x.into());
        self
    }

    /// Sets the value of [document_title][ListFeedbackOptions::document_title].
    pub fn set_document_title<T: Into<String>>(mut self, v: T) -> Self {
        self.document_title = Some(v.into());
        self
    }

    /// Sets or clears the value of [document_title][ListFeedbackOptions::document_title].
    pub fn set_or_clear_document_title<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.document_title = v.map(|x| x.into());
        self
    }

    /// Sets the value of [model_id][ListFeedbackOptions::model_id].
    pub fn set_model_id<T: Into<String>>(mut self, v: T) -> Self {
        self.model_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [model_id][ListFeedbackOptions::model_id].
    pub fn set_or_clear_model_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.model_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [model_version][ListFeedbackOptions::model_version].
    pub fn set_model_version<T: Into<String>>(mut self, v: T) -> Self {
        self.model_version = Some(v.into());
        self
    }

    /// Sets or clears the value of [model_version][ListFeedbackOptions::model_version].
    pub fn set_or_clear_model_version<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.model_version = v.map(|x| x.into());
        self
    }

    /// Sets the value of [category_removed][ListFeedbackOptions::category_removed].
    pub fn set_category_removed<T: Into<String>>(mut self, v: T) -> Self {
        self.category_removed = Some(v.into());
        self
    }

    /// Sets or clears the value of [category_removed][ListFeedbackOptions::category_removed].
    pub fn set_or_clear_category_removed<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.category_removed = v.map(|x| x.into());
        self
    }

    /// Sets the value of [category_added][ListFeedbackOptions::category_added].
    pub fn set_category_added<T: Into<String>>(mut self, v: T) -> Self {
        self.category_added = Some(v.into());
        self
    }

    /// Sets or clears the value of [category_added][ListFeedbackOptions::category_added].
    pub fn set_or_clear_category_added<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.category_added = v.map(|x| x.into());
        self
    }

    /// Sets the value of [category_not_changed][ListFeedbackOptions::category_not_changed].
    pub fn set_category_not_changed<T: Into<String>>(mut self, v: T) -> Self {
        self.category_not_changed = Some(v.into());
        self
    }

    /// Sets or clears the value of [category_not_changed][ListFeedbackOptions::category_not_changed].
    pub fn set_or_clear_category_not_changed<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.category_not_changed = v.map(|x| x.into());
        self
    }

    /// Sets the value of [type_removed][ListFeedbackOptions::type_removed].
    pub fn set_type_removed<T: Into<String>>(mut self, v: T) -> Self {
        self.type_removed = Some(v.into());
        self
    }

    /// Sets or clears the value of [type_removed][ListFeedbackOptions::type_removed].
    pub fn set_or_clear_type_removed<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.type_removed = v.map(|x| x.into());
        self
    }

    /// Sets the value of [type_added][ListFeedbackOptions::type_added].
    pub fn set_type_added<T: Into<String>>(mut self, v: T) -> Self {
        self.type_added = Some(v.into());
        self
    }

    /// Sets or clears the value of [type_added][ListFeedbackOptions::type_added].
    pub fn set_or_clear_type_added<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.type_added = v.map(|x| x.into());
        self
    }

    /// Sets the value of [type_not_changed][ListFeedbackOptions::type_not_changed].
    pub fn set_type_not_changed<T: Into<String>>(mut self, v: T) -> Self {
        self.type_not_changed = Some(v.into());
        self
    }

    /// Sets or clears the value of [type_not_changed][ListFeedbackOptions::type_not_changed].
    pub fn set_or_clear_type_not_changed<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.type_not_changed = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page_limit][ListFeedbackOptions::page_limit].
    pub fn set_page_limit<T: Into<i64>>(mut self, v: T) -> Self {
        self.page_limit = Some(v.into());
        self
    }

    /// Sets or clears the value of [page_limit][ListFeedbackOptions::page_limit].
    pub fn set_or_clear_page_limit<T: Into<i64>>(mut self, v: Option<T>) -> Self {
        self.page_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [cursor][ListFeedbackOptions::cursor].
    pub fn set_cursor<T: Into<String>>(mut self, v: T) -> Self {
        self.cursor = Some(v.into());
        self
    }

    /// Sets or clears the value of [cursor][ListFeedbackOptions::cursor].
    pub fn set_or_clear_cursor<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.cursor = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort][ListFeedbackOptions::sort].
    pub fn set_sort<T: Into<String>>(mut self, v: T) -> Self {
        self.sort = Some(v.into());
        self
    }

    /// Sets or clears the value of [sort][ListFeedbackOptions::sort].
    pub fn set_or_clear_sort<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.sort = v.map(|x| x.into());
        self
    }

    /// Sets the value of [include_total][ListFeedbackOptions::include_total].
    pub fn set_include_total<T: Into<bool>>(mut self, v: T) -> Self {
        self.include_total = Some(v.into());
        self
    }

    /// Sets or clears the value of [include_total][ListFeedbackOptions::include_total].
    pub fn set_or_clear_include_total<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.include_total = v.map(|x| x.into());
        self
    }
}

/// The options for [CompareComply::get_feedback][crate::client::CompareComply::get_feedback].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetFeedbackOptions {
    /// The ID of the feedback entry to retrieve.
    pub feedback_id: String,

    pub model: Option<String>,
}

impl GetFeedbackOptions {
    pub fn new<T: Into<String>>(feedback_id: T) -> Self {
        Self::default().set_feedback_id(feedback_id)
    }

    /// Sets the value of [feedback_id][GetFeedbackOptions::feedback_id].
    pub fn set_feedback_id<T: Into<String>>(mut self, v: T) -> Self {
        self.feedback_id = v.into();
        self
    }

    /// Sets the value of [model][GetFeedbackOptions::model].
    pub fn set_model<T: Into<String>>(mut self, v: T) -> Self {
        self.model = Some(v.into());
        self
    }

    /// Sets or clears the value of [model][GetFeedbackOptions::model].
    pub fn set_or_clear_model<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.model = v.map(|x| x.into());
        self
    }
}

/// The options for [CompareComply::delete_feedback][crate::client::CompareComply::delete_feedback].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteFeedbackOptions {
    /// The ID of the feedback entry to delete.
    pub feedback_id: String,

    pub model: Option<String>,
}

impl DeleteFeedbackOptions {
    pub fn new<T: Into<String>>(feedback_id: T) -> Self {
        Self::default().set_feedback_id(feedback_id)
    }

    /// Sets the value of [feedback_id][DeleteFeedbackOptions::feedback_id].
    pub fn set_feedback_id<T: Into<String>>(mut self, v: T) -> Self {
        self.feedback_id = v.into();
        self
    }

    /// Sets the value of [model][DeleteFeedbackOptions::model].
    pub fn set_model<T: Into<String>>(mut self, v: T) -> Self {
        self.model = Some(v.into());
        self
    }

    /// Sets or clears the value of [model][DeleteFeedbackOptions::model].
    pub fn set_or_clear_model<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.model = v.map(|x| x.into());
        self
    }
}

/// The options for [CompareComply::create_batch][crate::client::CompareComply::create_batch].
///
/// The batch reads its input documents from a Cloud Object Storage bucket and
/// writes the results to a second bucket. All the fields except `model` are
/// required.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateBatchOptions {
    /// The analysis to run, see [batch_status::function] for the possible
    /// values.
    pub function: String,

    /// A JSON file with the credentials for the input bucket.
    pub input_credentials_file: Option<FilePart>,

    /// The geographical location of the input bucket, for example `us-geo`.
    pub input_bucket_location: String,

    /// The name of the input bucket.
    pub input_bucket_name: String,

    /// A JSON file with the credentials for the output bucket.
    pub output_credentials_file: Option<FilePart>,

    /// The geographical location of the output bucket.
    pub output_bucket_location: String,

    /// The name of the output bucket.
    pub output_bucket_name: String,

    pub model: Option<String>,
}

impl CreateBatchOptions {
    pub fn new<T, U, V, W, X, Y, Z>(
        function: T,
        input_credentials_file: U,
        input_bucket_location: V,
        input_bucket_name: W,
        output_credentials_file: X,
        output_bucket_location: Y,
        output_bucket_name: Z,
    ) -> Self
    where
        T: Into<String>,
        U: Into<FilePart>,
        V: Into<String>,
        W: Into<String>,
        X: Into<FilePart>,
        Y: Into<String>,
        Z: Into<String>,
    {
        Self::default()
            .set_function(function)
            .set_input_credentials_file(input_credentials_file)
            .set_input_bucket_location(input_bucket_location)
            .set_input_bucket_name(input_bucket_name)
            .set_output_credentials_file(output_credentials_file)
            .set_output_bucket_location(output_bucket_location)
            .set_output_bucket_name(output_bucket_name)
    }

    /// Sets the value of [function][CreateBatchOptions::function].
    pub fn set_function<T: Into<String>>(mut self, v: T) -> Self {
        self.function = v.into();
        self
    }

    /// Sets the value of [input_credentials_file][CreateBatchOptions::input_credentials_file].
    pub fn set_input_credentials_file<T: Into<FilePart>>(mut self, v: T) -> Self {
        self.input_credentials_file = Some(v.into());
        self
    }

    /// Sets the value of [input_bucket_location][CreateBatchOptions::input_bucket_location].
    pub fn set_input_bucket_location<T: Into<String>>(mut self, v: T) -> Self {
        self.input_bucket_location = v.into();
        self
    }

    /// Sets the value of [input_bucket_name][CreateBatchOptions::input_bucket_name].
    pub fn set_input_bucket_name<T: Into<String>>(mut self, v: T) -> Self {
        self.input_bucket_name = v.into();
        self
    }

    /// Sets the value of [output_credentials_file][CreateBatchOptions::output_credentials_file].
    pub fn set_output_credentials_file<T: Into<FilePart>>(mut self, v: T) -> Self {
        self.output_credentials_file = Some(v.into());
        self
    }

    /// Sets the value of [output_bucket_location][CreateBatchOptions::output_bucket_location].
    pub fn set_output_bucket_location<T: Into<String>>(mut self, v: T) -> Self {
        self.output_bucket_location = v.into();
        self
    }

    /// Sets the value of [output_bucket_name][CreateBatchOptions::output_bucket_name].
    pub fn set_output_bucket_name<T: Into<String>>(mut self, v: T) -> Self {
        self.output_bucket_name = v.into();
        self
    }

    /// Sets the value of [model][CreateBatchOptions::model].
    pub fn set_model<T: Into<String>>(mut self, v: T) -> Self {
        self.model = Some(v.into());
        self
    }

    /// Sets or clears the value of [model][CreateBatchOptions::model].
    pub fn set_or_clear_model<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.model = v.map(|x| x.into());
        self
    }
}

/// The options for [CompareComply::list_batches][crate::client::CompareComply::list_batches].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListBatchesOptions {}

impl ListBatchesOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The options for [CompareComply::get_batch][crate::client::CompareComply::get_batch].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetBatchOptions {
    /// The ID of the batch request.
    pub batch_id: String,
}

impl GetBatchOptions {
    pub fn new<T: Into<String>>(batch_id: T) -> Self {
        Self::default().set_batch_id(batch_id)
    }

    /// Sets the value of [batch_id][GetBatchOptions::batch_id].
    pub fn set_batch_id<T: Into<String>>(mut self, v: T) -> Self {
        self.batch_id = v.into();
        self
    }
}

/// The options for [CompareComply::update_batch][crate::client::CompareComply::update_batch].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateBatchOptions {
    /// The ID of the batch request.
    pub batch_id: String,

    /// The action to perform, see [update_batch_options::action] for the
    /// possible values.
    pub action: String,

    pub model: Option<String>,
}

impl UpdateBatchOptions {
    pub fn new<T: Into<String>, U: Into<String>>(batch_id: T, action: U) -> Self {
        Self::default()
            .set_batch_id(batch_id)
            .set_action(action)
    }

    /// Sets the value of [batch_id][UpdateBatchOptions::batch_id].
    pub fn set_batch_id<T: Into<String>>(mut self, v: T) -> Self {
        self.batch_id = v.into();
        self
    }

    /// Sets the value of [action][UpdateBatchOptions::action].
    pub fn set_action<T: Into<String>>(mut self, v: T) -> Self {
        self.action = v.into();
        self
    }

    /// Sets the value of [model][UpdateBatchOptions::model].
    pub fn set_model<T: Into<String>>(mut self, v: T) -> Self {
        self.model = Some(v.into());
        self
    }

    /// Sets or clears the value of [model][UpdateBatchOptions::model].
    pub fn set_or_clear_model<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.model = v.map(|x| x.into());
        self
    }
}

/// Defines the values for [UpdateBatchOptions::action].
pub mod update_batch_options {
    pub mod action {
        pub const RESCAN: &str = "rescan";
        pub const CANCEL: &str = "cancel";
    }
}

/// Defines the values for the `model` parameter of each operation.
pub mod model_type {
    pub const CONTRACTS: &str = "contracts";
    pub const TABLES: &str = "tables";
}

/// The HTML converted from an input document.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct HtmlReturn {
    /// The number of pages in the input document.
    pub num_pages: Option<String>,

    /// The author of the input document, if identified.
    pub author: Option<String>,

    /// The publication date of the input document, if identified.
    pub publication_date: Option<String>,

    /// The title of the input document, if identified.
    pub title: Option<String>,

    /// The HTML version of the input document.
    pub html: Option<String>,
}

impl HtmlReturn {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [num_pages][HtmlReturn::num_pages].
    pub fn set_num_pages<T: Into<String>>(mut self, v: T) -> Self {
        self.num_pages = Some(v.into());
        self
    }

    /// Sets the value of [author][HtmlReturn::author].
    pub fn set_author<T: Into<String>>(mut self, v: T) -> Self {
        self.author = Some(v.into());
        self
    }

    /// Sets the value of [publication_date][HtmlReturn::publication_date].
    pub fn set_publication_date<T: Into<String>>(mut self, v: T) -> Self {
        self.publication_date = Some(v.into());
        self
    }

    /// Sets the value of [title][HtmlReturn::title].
    pub fn set_title<T: Into<String>>(mut self, v: T) -> Self {
        self.title = Some(v.into());
        self
    }

    /// Sets the value of [html][HtmlReturn::html].
    pub fn set_html<T: Into<String>>(mut self, v: T) -> Self {
        self.html = Some(v.into());
        self
    }
}

/// The analysis of objects returned by
/// [CompareComply::classify_elements][crate::client::CompareComply::classify_elements].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ClassifyReturn {
    /// Basic information about the input document.
    pub document: Option<Document>,

    /// The analysis model used to classify the input document.
    pub model_id: Option<String>,

    /// The version of the analysis model.
    pub model_version: Option<String>,

    /// Document elements identified by the service.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<Element>,

    /// The date or dates on which the document becomes effective.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub effective_dates: Vec<EffectiveDates>,

    /// The monetary amounts that identify the total amount of the contract that
    /// needs to be paid.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contract_amounts: Vec<ContractAmts>,

    /// The dates on which the document is to be terminated.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub termination_dates: Vec<TerminationDates>,

    /// The contract type as declared in the document.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contract_types: Vec<ContractTypes>,

    /// The durations of the contract.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contract_terms: Vec<ContractTerms>,

    /// The document's payment durations.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub payment_terms: Vec<PaymentTerms>,

    /// The contract currencies as declared in the document.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contract_currencies: Vec<ContractCurrencies>,

    /// Definition of tables identified in the input document.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tables: Vec<Tables>,

    /// The structure of the input document.
    pub document_structure: Option<DocStructure>,

    /// Definitions of the parties identified in the input document.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parties: Vec<Parties>,
}

impl ClassifyReturn {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [document][ClassifyReturn::document].
    pub fn set_document<T: Into<Document>>(mut self, v: T) -> Self {
        self.document = Some(v.into());
        self
    }

    /// Sets or clears the value of [document][ClassifyReturn::document].
    pub fn set_or_clear_document<T: Into<Document>>(mut self, v: Option<T>) -> Self {
        self.document = v.map(|x| x.into());
        self
    }

    /// Sets the value of [model_id][ClassifyReturn::model_id].
    pub fn set_model_id<T: Into<String>>(mut self, v: T) -> Self {
        self.model_id = Some(v.into());
        self
    }

    /// Sets the value of [model_version][ClassifyReturn::model_version].
    pub fn set_model_version<T: Into<String>>(mut self, v: T) -> Self {
        self.model_version = Some(v.into());
        self
    }

    /// Sets the value of [elements][ClassifyReturn::elements].
    pub fn set_elements<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Element>,
    {
        self.elements = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [effective_dates][ClassifyReturn::effective_dates].
    pub fn set_effective_dates<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<EffectiveDates>,
    {
        self.effective_dates = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [contract_amounts][ClassifyReturn::contract_amounts].
    pub fn set_contract_amounts<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ContractAmts>,
    {
        self.contract_amounts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [termination_dates][ClassifyReturn::termination_dates].
    pub fn set_termination_dates<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<TerminationDates>,
    {
        self.termination_dates = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [contract_types][ClassifyReturn::contract_types].
    pub fn set_contract_types<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ContractTypes>,
    {
        self.contract_types = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [contract_terms][ClassifyReturn::contract_terms].
    pub fn set_contract_terms<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ContractTerms>,
    {
        self.contract_terms = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [payment_terms][ClassifyReturn::payment_terms].
    pub fn set_payment_terms<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<PaymentTerms>,
    {
        self.payment_terms = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [contract_currencies][ClassifyReturn::contract_currencies].
    pub fn set_contract_currencies<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ContractCurrencies>,
    {
        self.contract_currencies = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [tables][ClassifyReturn::tables].
    pub fn set_tables<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Tables>,
    {
        self.tables = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [document_structure][ClassifyReturn::document_structure].
    pub fn set_document_structure<T: Into<DocStructure>>(mut self, v: T) -> Self {
        self.document_structure = Some(v.into());
        self
    }

    /// Sets or clears the value of [document_structure][ClassifyReturn::document_structure].
    pub fn set_or_clear_document_structure<T: Into<DocStructure>>(mut self, v: Option<T>) -> Self {
        self.document_structure = v.map(|x| x.into());
        self
    }

    /// Sets the value of [parties][ClassifyReturn::parties].
    pub fn set_parties<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Parties>,
    {
        self.parties = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Basic information about the input document.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Document {
    /// Document title, if detected.
    pub title: Option<String>,

    /// The input document converted into HTML format.
    pub html: Option<String>,

    /// The MD5 hash of the input document.
    pub hash: Option<String>,

    /// The label applied to the input document with the calling method's
    /// `file_1_label` or `file_2_label` value. This field is set only in
    /// comparison results.
    pub label: Option<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [title][Document::title].
    pub fn set_title<T: Into<String>>(mut self, v: T) -> Self {
        self.title = Some(v.into());
        self
    }

    /// Sets the value of [html][Document::html].
    pub fn set_html<T: Into<String>>(mut self, v: T) -> Self {
        self.html = Some(v.into());
        self
    }

    /// Sets the value of [hash][Document::hash].
    pub fn set_hash<T: Into<String>>(mut self, v: T) -> Self {
        self.hash = Some(v.into());
        self
    }

    /// Sets the value of [label][Document::label].
    pub fn set_label<T: Into<String>>(mut self, v: T) -> Self {
        self.label = Some(v.into());
        self
    }
}

/// Information about the parsed input document.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DocInfo {
    /// The full text of the parsed document in HTML format.
    pub html: Option<String>,

    /// The title of the parsed document. If the service did not detect a title,
    /// the value of this element is `null`.
    pub title: Option<String>,

    /// The MD5 hash of the input document.
    pub hash: Option<String>,
}

impl DocInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [html][DocInfo::html].
    pub fn set_html<T: Into<String>>(mut self, v: T) -> Self {
        self.html = Some(v.into());
        self
    }

    /// Sets the value of [title][DocInfo::title].
    pub fn set_title<T: Into<String>>(mut self, v: T) -> Self {
        self.title = Some(v.into());
        self
    }

    /// Sets the value of [hash][DocInfo::hash].
    pub fn set_hash<T: Into<String>>(mut self, v: T) -> Self {
        self.hash = Some(v.into());
        self
    }
}

/// A component of the input document.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Element {
    pub location: Option<Location>,

    /// The text of the element.
    pub text: Option<String>,

    /// Description of the action specified by the element and whom it affects.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<TypeLabel>,

    /// List of functional categories into which the element falls; in other
    /// words, the subject matter of the element.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,

    /// List of document attributes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [location][Element::location].
    pub fn set_location<T: Into<Location>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets or clears the value of [location][Element::location].
    pub fn set_or_clear_location<T: Into<Location>>(mut self, v: Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [text][Element::text].
    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }

    /// Sets the value of [types][Element::types].
    pub fn set_types<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<TypeLabel>,
    {
        self.types = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [categories][Element::categories].
    pub fn set_categories<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Category>,
    {
        self.categories = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [attributes][Element::attributes].
    pub fn set_attributes<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Attribute>,
    {
        self.attributes = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The numeric location of the identified element in the document, represented
/// with two integers labeled `begin` and `end`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Location {
    /// The element's `begin` index.
    pub begin: Option<i64>,

    /// The element's `end` index.
    pub end: Option<i64>,
}

impl Location {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [begin][Location::begin].
    pub fn set_begin<T: Into<i64>>(mut self, v: T) -> Self {
        self.begin = Some(v.into());
        self
    }

    /// Sets the value of [end][Location::end].
    pub fn set_end<T: Into<i64>>(mut self, v: T) -> Self {
        self.end = Some(v.into());
        self
    }
}

/// Identification of a specific type.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct TypeLabel {
    pub label: Option<Label>,

    /// Hashed values that you can send to IBM to provide feedback or receive
    /// support.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub provenance_ids: Vec<String>,

    /// The type of modification of the feedback entry in the updated labels
    /// response. See [type_label::modification] for the possible values.
    pub modification: Option<String>,
}

impl TypeLabel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [label][TypeLabel::label].
    pub fn set_label<T: Into<Label>>(mut self, v: T) -> Self {
        self.label = Some(v.into());
        self
    }

    /// Sets or clears the value of [label][TypeLabel::label].
    pub fn set_or_clear_label<T: Into<Label>>(mut self, v: Option<T>) -> Self {
        self.label = v.map(|x| x.into());
        self
    }

    /// Sets the value of [provenance_ids][TypeLabel::provenance_ids].
    pub fn set_provenance_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.provenance_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [modification][TypeLabel::modification].
    pub fn set_modification<T: Into<String>>(mut self, v: T) -> Self {
        self.modification = Some(v.into());
        self
    }
}

/// Defines the values for [TypeLabel::modification].
pub mod type_label {
    pub mod modification {
        pub const ADDED: &str = "added";
        pub const UNCHANGED: &str = "unchanged";
        pub const REMOVED: &str = "removed";
    }
}

/// A pair of `nature` and `party` objects. The `nature` object identifies the
/// effect of the element on the identified `party`, and the `party` object
/// identifies the affected party.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Label {
    /// The identified `nature` of the element, see [label::nature] for common
    /// values.
    pub nature: Option<String>,

    /// The identified `party` of the element.
    pub party: Option<String>,
}

impl Label {
    pub fn new<T: Into<String>, U: Into<String>>(nature: T, party: U) -> Self {
        Self::default()
            .set_nature(nature)
            .set_party(party)
    }

    /// Sets the value of [nature][Label::nature].
    pub fn set_nature<T: Into<String>>(mut self, v: T) -> Self {
        self.nature = Some(v.into());
        self
    }

    /// Sets the value of [party][Label::party].
    pub fn set_party<T: Into<String>>(mut self, v: T) -> Self {
        self.party = Some(v.into());
        self
    }
}

/// Defines common values for [Label::nature].
pub mod label {
    pub mod nature {
        pub const DEFINITION: &str = "Definition";
        pub const DISCLAIMER: &str = "Disclaimer";
        pub const EXCLUSION: &str = "Exclusion";
        pub const OBLIGATION: &str = "Obligation";
        pub const RIGHT: &str = "Right";
    }
}

/// Information defining an element's subject matter.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Category {
    /// The category of the associated element.
    pub label: Option<String>,

    /// Hashed values that you can send to IBM to provide feedback or receive
    /// support.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub provenance_ids: Vec<String>,

    /// The type of modification of the feedback entry in the updated labels
    /// response. See [category::modification] for the possible values.
    pub modification: Option<String>,
}

impl Category {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [label][Category::label].
    pub fn set_label<T: Into<String>>(mut self, v: T) -> Self {
        self.label = Some(v.into());
        self
    }

    /// Sets the value of [provenance_ids][Category::provenance_ids].
    pub fn set_provenance_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.provenance_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [modification][Category::modification].
    pub fn set_modification<T: Into<String>>(mut self, v: T) -> Self {
        self.modification = Some(v.into());
        self
    }
}

/// Defines the values for [Category::modification].
pub mod category {
    pub mod modification {
        pub const ADDED: &str = "added";
        pub const UNCHANGED: &str = "unchanged";
        pub const REMOVED: &str = "removed";
    }
}

/// List of document attributes.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Attribute {
    /// The type of attribute, see [attribute::attribute_type] for the possible
    /// values.
    pub r#type: Option<String>,

    /// The text associated with the attribute.
    pub text: Option<String>,

    pub location: Option<Location>,
}

impl Attribute {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [r#type][Attribute::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets the value of [text][Attribute::text].
    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }

    /// Sets the value of [location][Attribute::location].
    pub fn set_location<T: Into<Location>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets or clears the value of [location][Attribute::location].
    pub fn set_or_clear_location<T: Into<Location>>(mut self, v: Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }
}

/// Defines the values for [Attribute::type][Attribute::r#type].
pub mod attribute {
    pub mod attribute_type {
        pub const CURRENCY: &str = "Currency";
        pub const DATE_TIME: &str = "DateTime";
        pub const DEFINED_TERM: &str = "DefinedTerm";
        pub const DURATION: &str = "Duration";
        pub const LOCATION: &str = "Location";
        pub const NUMBER: &str = "Number";
        pub const ORGANIZATION: &str = "Organization";
        pub const PERCENTAGE: &str = "Percentage";
        pub const PERSON: &str = "Person";
    }
}

/// An effective date.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct EffectiveDates {
    /// The confidence level in the identification, see [confidence_level] for
    /// the possible values.
    pub confidence_level: Option<String>,

    /// The effective date, listed as a string.
    pub text: Option<String>,

    /// The normalized form of the effective date, which is listed as a string.
    /// This element is optional; it is returned only if normalized text exists.
    pub text_normalized: Option<String>,

    /// Hashed values that you can send to IBM to provide feedback or receive
    /// support.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub provenance_ids: Vec<String>,

    pub location: Option<Location>,
}

impl EffectiveDates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [confidence_level][EffectiveDates::confidence_level].
    pub fn set_confidence_level<T: Into<String>>(mut self, v: T) -> Self {
        self.confidence_level = Some(v.into());
        self
    }

    /// Sets the value of [text][EffectiveDates::text].
    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }

    /// Sets the value of [text_normalized][EffectiveDates::text_normalized].
    pub fn set_text_normalized<T: Into<String>>(mut self, v: T) -> Self {
        self.text_normalized = Some(v.into());
        self
    }

    /// Sets the value of [provenance_ids][EffectiveDates::provenance_ids].
    pub fn set_provenance_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.provenance_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [location][EffectiveDates::location].
    pub fn set_location<T: Into<Location>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets or clears the value of [location][EffectiveDates::location].
    pub fn set_or_clear_location<T: Into<Location>>(mut self, v: Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }
}

/// A monetary amount identified in the input document.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ContractAmts {
    /// The confidence level in the identification, see [confidence_level] for
    /// the possible values.
    pub confidence_level: Option<String>,

    /// The monetary amount.
    pub text: Option<String>,

    pub text_normalized: Option<String>,

    pub interpretation: Option<Interpretation>,

    /// Hashed values that you can send to IBM to provide feedback or receive
    /// support.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub provenance_ids: Vec<String>,

    pub location: Option<Location>,
}

impl ContractAmts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [confidence_level][ContractAmts::confidence_level].
    pub fn set_confidence_level<T: Into<String>>(mut self, v: T) -> Self {
        self.confidence_level = Some(v.into());
        self
    }

    /// Sets the value of [text][ContractAmts::text].
    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }

    /// Sets the value of [text_normalized][ContractAmts::text_normalized].
    pub fn set_text_normalized<T: Into<String>>(mut self, v: T) -> Self {
        self.text_normalized = Some(v.into());
        self
    }

    /// Sets the value of [interpretation][ContractAmts::interpretation].
    pub fn set_interpretation<T: Into<Interpretation>>(mut self, v: T) -> Self {
        self.interpretation = Some(v.into());
        self
    }

    /// Sets or clears the value of [interpretation][ContractAmts::interpretation].
    pub fn set_or_clear_interpretation<T: Into<Interpretation>>(mut self, v: Option<T>) -> Self {
        self.interpretation = v.map(|x| x.into());
        self
    }

    /// Sets the value of [provenance_ids][ContractAmts::provenance_ids].
    pub fn set_provenance_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.provenance_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [location][ContractAmts::location].
    pub fn set_location<T: Into<Location>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets or clears the value of [location][ContractAmts::location].
    pub fn set_or_clear_location<T: Into<Location>>(mut self, v: Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }
}

/// Termination dates identified in the input document.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct TerminationDates {
    /// The confidence level in the identification, see [confidence_level] for
    /// the possible values.
    pub confidence_level: Option<String>,

    /// The termination date.
    pub text: Option<String>,

    pub text_normalized: Option<String>,

    /// Hashed values that you can send to IBM to provide feedback or receive
    /// support.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub provenance_ids: Vec<String>,

    pub location: Option<Location>,
}

impl TerminationDates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [confidence_level][TerminationDates::confidence_level].
    pub fn set_confidence_level<T: Into<String>>(mut self, v: T) -> Self {
        self.confidence_level = Some(v.into());
        self
    }

    /// Sets the value of [text][TerminationDates::text].
    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }

    /// Sets the value of [text_normalized][TerminationDates::text_normalized].
    pub fn set_text_normalized<T: Into<String>>(mut self, v: T) -> Self {
        self.text_normalized = Some(v.into());
        self
    }

    /// Sets the value of [provenance_ids][TerminationDates::provenance_ids].
    pub fn set_provenance_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.provenance_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [location][TerminationDates::location].
    pub fn set_location<T: Into<Location>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets or clears the value of [location][TerminationDates::location].
    pub fn set_or_clear_location<T: Into<Location>>(mut self, v: Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }
}

/// The contract type identified in the input document.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ContractTypes {
    /// The confidence level in the identification, see [confidence_level] for
    /// the possible values.
    pub confidence_level: Option<String>,

    /// The contract type.
    pub text: Option<String>,

    /// Hashed values that you can send to IBM to provide feedback or receive
    /// support.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub provenance_ids: Vec<String>,

    pub location: Option<Location>,
}

impl ContractTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [confidence_level][ContractTypes::confidence_level].
    pub fn set_confidence_level<T: Into<String>>(mut self, v: T) -> Self {
        self.confidence_level = Some(v.into());
        self
    }

    /// Sets the value of [text][ContractTypes::text].
    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }

    /// Sets the value of [provenance_ids][ContractTypes::provenance_ids].
    pub fn set_provenance_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.provenance_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [location][ContractTypes::location].
    pub fn set_location<T: Into<Location>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets or clears the value of [location][ContractTypes::location].
    pub fn set_or_clear_location<T: Into<Location>>(mut self, v: Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }
}

/// The duration or durations of the contract.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ContractTerms {
    /// The confidence level in the identification, see [confidence_level] for
    /// the possible values.
    pub confidence_level: Option<String>,

    /// The contract term (duration).
    pub text: Option<String>,

    pub text_normalized: Option<String>,

    pub interpretation: Option<Interpretation>,

    /// Hashed values that you can send to IBM to provide feedback or receive
    /// support.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub provenance_ids: Vec<String>,

    pub location: Option<Location>,
}

impl ContractTerms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [confidence_level][ContractTerms::confidence_level].
    pub fn set_confidence_level<T: Into<String>>(mut self, v: T) -> Self {
        self.confidence_level = Some(v.into());
        self
    }

    /// Sets the value of [text][ContractTerms::text].
    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }

    /// Sets the value of [text_normalized][ContractTerms::text_normalized].
    pub fn set_text_normalized<T: Into<String>>(mut self, v: T) -> Self {
        self.text_normalized = Some(v.into());
        self
    }

    /// Sets the value of [interpretation][ContractTerms::interpretation].
    pub fn set_interpretation<T: Into<Interpretation>>(mut self, v: T) -> Self {
        self.interpretation = Some(v.into());
        self
    }

    /// Sets or clears the value of [interpretation][ContractTerms::interpretation].
    pub fn set_or_clear_interpretation<T: Into<Interpretation>>(mut self, v: Option<T>) -> Self {
        self.interpretation = v.map(|x| x.into());
        self
    }

    /// Sets the value of [provenance_ids][ContractTerms::provenance_ids].
    pub fn set_provenance_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.provenance_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [location][ContractTerms::location].
    pub fn set_location<T: Into<Location>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets or clears the value of [location][ContractTerms::location].
    pub fn set_or_clear_location<T: Into<Location>>(mut self, v: Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }
}

/// The document's payment duration or durations.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct PaymentTerms {
    /// The confidence level in the identification, see [confidence_level] for
    /// the possible values.
    pub confidence_level: Option<String>,

    /// The payment term (duration).
    pub text: Option<String>,

    pub text_normalized: Option<String>,

    pub interpretation: Option<Interpretation>,

    /// Hashed values that you can send to IBM to provide feedback or receive
    /// support.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub provenance_ids: Vec<String>,

    pub location: Option<Location>,
}

impl PaymentTerms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [confidence_level][PaymentTerms::confidence_level].
    pub fn set_confidence_level<T: Into<String>>(mut self, v: T) -> Self {
        self.confidence_level = Some(v.into());
        self
    }

    /// Sets the value of [text][PaymentTerms::text].
    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }

    /// Sets the value of [text_normalized][PaymentTerms::text_normalized].
    pub fn set_text_normalized<T: Into<String>>(mut self, v: T) -> Self {
        self.text_normalized = Some(v.into());
        self
    }

    /// Sets the value of [interpretation][PaymentTerms::interpretation].
    pub fn set_interpretation<T: Into<Interpretation>>(mut self, v: T) -> Self {
        self.interpretation = Some(v.into());
        self
    }

    /// Sets or clears the value of [interpretation][PaymentTerms::interpretation].
    pub fn set_or_clear_interpretation<T: Into<Interpretation>>(mut self, v: Option<T>) -> Self {
        self.interpretation = v.map(|x| x.into());
        self
    }

    /// Sets the value of [provenance_ids][PaymentTerms::provenance_ids].
    pub fn set_provenance_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.provenance_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [location][PaymentTerms::location].
    pub fn set_location<T: Into<Location>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets or clears the value of [location][PaymentTerms::location].
    pub fn set_or_clear_location<T: Into<Location>>(mut self, v: Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }
}

/// The contract currencies that are declared in the document.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ContractCurrencies {
    /// The confidence level in the identification, see [confidence_level] for
    /// the possible values.
    pub confidence_level: Option<String>,

    /// The contract currency.
    pub text: Option<String>,

    /// The normalized form of the currency, for example `USD`.
    pub text_normalized: Option<String>,

    /// Hashed values that you can send to IBM to provide feedback or receive
    /// support.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub provenance_ids: Vec<String>,

    pub location: Option<Location>,
}

impl ContractCurrencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [confidence_level][ContractCurrencies::confidence_level].
    pub fn set_confidence_level<T: Into<String>>(mut self, v: T) -> Self {
        self.confidence_level = Some(v.into());
        self
    }

    /// Sets the value of [text][ContractCurrencies::text].
    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }

    /// Sets the value of [text_normalized][ContractCurrencies::text_normalized].
    pub fn set_text_normalized<T: Into<String>>(mut self, v: T) -> Self {
        self.text_normalized = Some(v.into());
        self
    }

    /// Sets the value of [provenance_ids][ContractCurrencies::provenance_ids].
    pub fn set_provenance_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.provenance_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [location][ContractCurrencies::location].
    pub fn set_location<T: Into<Location>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets or clears the value of [location][ContractCurrencies::location].
    pub fn set_or_clear_location<T: Into<Location>>(mut self, v: Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }
}

/// Defines the values for the `confidence_level` field in [EffectiveDates],
/// [ContractAmts], [TerminationDates], [ContractTypes], [ContractTerms],
/// [PaymentTerms], and [ContractCurrencies].
pub mod confidence_level {
    pub const HIGH: &str = "High";
    pub const MEDIUM: &str = "Medium";
    pub const LOW: &str = "Low";
}

/// The details of the normalized text, if applicable.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Interpretation {
    /// A string that lists the value as it appears in the document.
    pub value: Option<String>,

    /// An integer or float expressing the numeric value.
    pub numeric_value: Option<f64>,

    /// A unit of measure, for example `MONTH` or `USD`.
    pub unit: Option<String>,
}

impl Interpretation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [value][Interpretation::value].
    pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }

    /// Sets the value of [numeric_value][Interpretation::numeric_value].
    pub fn set_numeric_value<T: Into<f64>>(mut self, v: T) -> Self {
        self.numeric_value = Some(v.into());
        self
    }

    /// Sets the value of [unit][Interpretation::unit].
    pub fn set_unit<T: Into<String>>(mut self, v: T) -> Self {
        self.unit = Some(v.into());
        self
    }
}

/// The analysis of the document's tables.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct TableReturn {
    /// Information about the parsed input document.
    pub document: Option<DocInfo>,

    /// The ID of the model used to extract the table contents.
    pub model_id: Option<String>,

    pub model_version: Option<String>,

    /// Definitions of the tables identified in the input document.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tables: Vec<Tables>,
}

impl TableReturn {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [document][TableReturn::document].
    pub fn set_document<T: Into<DocInfo>>(mut self, v: T) -> Self {
        self.document = Some(v.into());
        self
    }

    /// Sets or clears the value of [document][TableReturn::document].
    pub fn set_or_clear_document<T: Into<DocInfo>>(mut self, v: Option<T>) -> Self {
        self.document = v.map(|x| x.into());
        self
    }

    /// Sets the value of [model_id][TableReturn::model_id].
    pub fn set_model_id<T: Into<String>>(mut self, v: T) -> Self {
        self.model_id = Some(v.into());
        self
    }

    /// Sets the value of [model_version][TableReturn::model_version].
    pub fn set_model_version<T: Into<String>>(mut self, v: T) -> Self {
        self.model_version = Some(v.into());
        self
    }

    /// Sets the value of [tables][TableReturn::tables].
    pub fn set_tables<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Tables>,
    {
        self.tables = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The contents of a table identified in the document.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Tables {
    pub location: Option<Location>,

    /// The textual contents of the current table from the input document
    /// without associated markup content.
    pub text: Option<String>,

    /// The table's section title, if identified.
    pub section_title: Option<SectionTitle>,

    /// If identified, the title or caption of the current table.
    pub title: Option<TableTitle>,

    /// An array of table-level cells that apply as headers to all the other
    /// cells in the current table.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub table_headers: Vec<TableHeaders>,

    /// An array of row-level cells, each applicable as a header to other cells
    /// in the same row as itself, of the current table.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub row_headers: Vec<RowHeaders>,

    /// An array of column-level cells, each applicable as a header to other
    /// cells in the same column as itself, of the current table.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub column_headers: Vec<ColumnHeaders>,

    /// An array of cells that are neither table header nor column header nor
    /// row header cells.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub body_cells: Vec<BodyCells>,

    /// An array of lists of textual entries across the document related to the
    /// current table being parsed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contexts: Vec<Contexts>,

    /// An array of key-value pairs identified in the current table.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub key_value_pairs: Vec<KeyValuePair>,
}

impl Tables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [location][Tables::location].
    pub fn set_location<T: Into<Location>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets or clears the value of [location][Tables::location].
    pub fn set_or_clear_location<T: Into<Location>>(mut self, v: Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [text][Tables::text].
    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }

    /// Sets the value of [section_title][Tables::section_title].
    pub fn set_section_title<T: Into<SectionTitle>>(mut self, v: T) -> Self {
        self.section_title = Some(v.into());
        self
    }

    /// Sets or clears the value of [section_title][Tables::section_title].
    pub fn set_or_clear_section_title<T: Into<SectionTitle>>(mut self, v: Option<T>) -> Self {
        self.section_title = v.map(|x| x.into());
        self
    }

    /// Sets the value of [title][Tables::title].
    pub fn set_title<T: Into<TableTitle>>(mut self, v: T) -> Self {
        self.title = Some(v.into());
        self
    }

    /// Sets or clears the value of [title][Tables::title].
    pub fn set_or_clear_title<T: Into<TableTitle>>(mut self, v: Option<T>) -> Self {
        self.title = v.map(|x| x.into());
        self
    }

    /// Sets the value of [table_headers][Tables::table_headers].
    pub fn set_table_headers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<TableHeaders>,
    {
        self.table_headers = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [row_headers][Tables::row_headers].
    pub fn set_row_headers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<RowHeaders>,
    {
        self.row_headers = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [column_headers][Tables::column_headers].
    pub fn set_column_headers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ColumnHeaders>,
    {
        self.column_headers = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [body_cells][Tables::body_cells].
    pub fn set_body_cells<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<BodyCells>,
    {
        self.body_cells = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [contexts][Tables::contexts].
    pub fn set_contexts<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Contexts>,
    {
        self.contexts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [key_value_pairs][Tables::key_value_pairs].
    pub fn set_key_value_pairs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<KeyValuePair>,
    {
        self.key_value_pairs = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The table's section title, if identified.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct SectionTitle {
    /// The text of the section title, if identified.
    pub text: Option<String>,

    pub location: Option<Location>,
}

impl SectionTitle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [text][SectionTitle::text].
    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }

    /// Sets the value of [location][SectionTitle::location].
    pub fn set_location<T: Into<Location>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets or clears the value of [location][SectionTitle::location].
    pub fn set_or_clear_location<T: Into<Location>>(mut self, v: Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }
}

/// If identified, the title or caption of the current table.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct TableTitle {
    pub location: Option<Location>,

    /// The text of the identified table title or caption.
    pub text: Option<String>,
}

impl TableTitle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [location][TableTitle::location].
    pub fn set_location<T: Into<Location>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets or clears the value of [location][TableTitle::location].
    pub fn set_or_clear_location<T: Into<Location>>(mut self, v: Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [text][TableTitle::text].
    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }
}

/// The contents of the current table's header.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct TableHeaders {
    /// The unique ID of the cell in the current table.
    pub cell_id: Option<String>,

    pub location: Option<Location>,

    /// The textual contents of the cell from the input document without
    /// associated markup content.
    pub text: Option<String>,

    /// The `begin` index of this cell's `row` location in the current table.
    pub row_index_begin: Option<i64>,

    /// The `end` index of this cell's `row` location in the current table.
    pub row_index_end: Option<i64>,

    /// The `begin` index of this cell's `column` location in the current table.
    pub column_index_begin: Option<i64>,

    /// The `end` index of this cell's `column` location in the current table.
    pub column_index_end: Option<i64>,
}

impl TableHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [cell_id][TableHeaders::cell_id].
    pub fn set_cell_id<T: Into<String>>(mut self, v: T) -> Self {
        self.cell_id = Some(v.into());
        self
    }

    /// Sets the value of [location][TableHeaders::location].
    pub fn set_location<T: Into<Location>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets or clears the value of [location][TableHeaders::location].
    pub fn set_or_clear_location<T: Into<Location>>(mut self, v: Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [text][TableHeaders::text].
    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }

    /// Sets the value of [row_index_begin][TableHeaders::row_index_begin].
    pub fn set_row_index_begin<T: Into<i64>>(mut self, v: T) -> Self {
        self.row_index_begin = Some(v.into());
        self
    }

    /// Sets the value of [row_index_end][TableHeaders::row_index_end].
    pub fn set_row_index_end<T: Into<i64>>(mut self, v: T) -> Self {
        self.row_index_end = Some(v.into());
        self
    }

    /// Sets the value of [column_index_begin][TableHeaders::column_index_begin].
    pub fn set_column_index_begin<T: Into<i64>>(mut self, v: T) -> Self {
        self.column_index_begin = Some(v.into());
        self
    }

    /// Sets the value of [column_index_end][TableHeaders::column_index_end].
    pub fn set_column_index_end<T: Into<i64>>(mut self, v: T) -> Self {
        self.column_index_end = Some(v.into());
        self
    }
}

/// Row-level cells, each applicable as a header to other cells in the same row
/// as itself, of the current table.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct RowHeaders {
    /// The unique ID of the cell in the current table.
    pub cell_id: Option<String>,

    pub location: Option<Location>,

    pub text: Option<String>,

    /// If you provide customization input, the normalized version of the cell
    /// text according to the customization; otherwise, the same value as
    /// `text`.
    pub text_normalized: Option<String>,

    /// The `begin` index of this cell's `row` location in the current table.
    pub row_index_begin: Option<i64>,

    /// The `end` index of this cell's `row` location in the current table.
    pub row_index_end: Option<i64>,

    /// The `begin` index of this cell's `column` location in the current table.
    pub column_index_begin: Option<i64>,

    /// The `end` index of this cell's `column` location in the current table.
    pub column_index_end: Option<i64>,
}

impl RowHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [cell_id][RowHeaders::cell_id].
    pub fn set_cell_id<T: Into<String>>(mut self, v: T) -> Self {
        self.cell_id = Some(v.into());
        self
    }

    /// Sets the value of [location][RowHeaders::location].
    pub fn set_location<T: Into<Location>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets or clears the value of [location][RowHeaders::location].
    pub fn set_or_clear_location<T: Into<Location>>(mut self, v: Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [text][RowHeaders::text].
    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }

    /// Sets the value of [text_normalized][RowHeaders::text_normalized].
    pub fn set_text_normalized<T: Into<String>>(mut self, v: T) -> Self {
        self.text_normalized = Some(v.into());
        self
    }

    /// Sets the value of [row_index_begin][RowHeaders::row_index_begin].
    pub fn set_row_index_begin<T: Into<i64>>(mut self, v: T) -> Self {
        self.row_index_begin = Some(v.into());
        self
    }

    /// Sets the value of [row_index_end][RowHeaders::row_index_end].
    pub fn set_row_index_end<T: Into<i64>>(mut self, v: T) -> Self {
        self.row_index_end = Some(v.into());
        self
    }

    /// Sets the value of [column_index_begin][RowHeaders::column_index_begin].
    pub fn set_column_index_begin<T: Into<i64>>(mut self, v: T) -> Self {
        self.column_index_begin = Some(v.into());
        self
    }

    /// Sets the value of [column_index_end][RowHeaders::column_index_end].
    pub fn set_column_index_end<T: Into<i64>>(mut self, v: T) -> Self {
        self.column_index_end = Some(v.into());
        self
    }
}

/// Column-level cells, each applicable as a header to other cells in the same
/// column as itself, of the current table.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ColumnHeaders {
    /// The unique ID of the cell in the current table.
    pub cell_id: Option<String>,

    pub location: Option<Location>,

    pub text: Option<String>,

    pub text_normalized: Option<String>,

    /// The `begin` index of this cell's `row` location in the current table.
    pub row_index_begin: Option<i64>,

    /// The `end` index of this cell's `row` location in the current table.
    pub row_index_end: Option<i64>,

    /// The `begin` index of this cell's `column` location in the current table.
    pub column_index_begin: Option<i64>,

    /// The `end` index of this cell's `column` location in the current table.
    pub column_index_end: Option<i64>,
}

impl ColumnHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [cell_id][ColumnHeaders::cell_id].
    pub fn set_cell_id<T: Into<String>>(mut self, v: T) -> Self {
        self.cell_id = Some(v.into());
        self
    }

    /// Sets the value of [location][ColumnHeaders::location].
    pub fn set_location<T: Into<Location>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets or clears the value of [location][ColumnHeaders::location].
    pub fn set_or_clear_location<T: Into<Location>>(mut self, v: Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [text][ColumnHeaders::text].
    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }

    /// Sets the value of [text_normalized][ColumnHeaders::text_normalized].
    pub fn set_text_normalized<T: Into<String>>(mut self, v: T) -> Self {
        self.text_normalized = Some(v.into());
        self
    }

    /// Sets the value of [row_index_begin][ColumnHeaders::row_index_begin].
    pub fn set_row_index_begin<T: Into<i64>>(mut self, v: T) -> Self {
        self.row_index_begin = Some(v.into());
        self
    }

    /// Sets the value of [row_index_end][ColumnHeaders::row_index_end].
    pub fn set_row_index_end<T: Into<i64>>(mut self, v: T) -> Self {
        self.row_index_end = Some(v.into());
        self
    }

    /// Sets the value of [column_index_begin][ColumnHeaders::column_index_begin].
    pub fn set_column_index_begin<T: Into<i64>>(mut self, v: T) -> Self {
        self.column_index_begin = Some(v.into());
        self
    }

    /// Sets the value of [column_index_end][ColumnHeaders::column_index_end].
    pub fn set_column_index_end<T: Into<i64>>(mut self, v: T) -> Self {
        self.column_index_end = Some(v.into());
        self
    }
}

/// Cells that are not table header, column header, or row header cells.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct BodyCells {
    /// The unique ID of the cell in the current table.
    pub cell_id: Option<String>,

    pub location: Option<Location>,

    pub text: Option<String>,

    /// The `begin` index of this cell's `row` location in the current table.
    pub row_index_begin: Option<i64>,

    /// The `end` index of this cell's `row` location in the current table.
    pub row_index_end: Option<i64>,

    /// The `begin` index of this cell's `column` location in the current table.
    pub column_index_begin: Option<i64>,

    /// The `end` index of this cell's `column` location in the current table.
    pub column_index_end: Option<i64>,

    /// An array that contains the `id` value of a row header that is applicable
    /// to this body cell.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub row_header_ids: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub row_header_texts: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub row_header_texts_normalized: Vec<String>,

    /// An array that contains the `id` value of a column header that is
    /// applicable to the current cell.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub column_header_ids: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub column_header_texts: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub column_header_texts_normalized: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
}

impl BodyCells {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [cell_id][BodyCells::cell_id].
    pub fn set_cell_id<T: Into<String>>(mut self, v: T) -> Self {
        self.cell_id = Some(v.into());
        self
    }

    /// Sets the value of [location][BodyCells::location].
    pub fn set_location<T: Into<Location>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets or clears the value of [location][BodyCells::location].
    pub fn set_or_clear_location<T: Into<Location>>(mut self, v: Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [text][BodyCells::text].
    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }

    /// Sets the value of [row_index_begin][BodyCells::row_index_begin].
    pub fn set_row_index_begin<T: Into<i64>>(mut self, v: T) -> Self {
        self.row_index_begin = Some(v.into());
        self
    }

    /// Sets the value of [row_index_end][BodyCells::row_index_end].
    pub fn set_row_index_end<T: Into<i64>>(mut self, v: T) -> Self {
        self.row_index_end = Some(v.into());
        self
    }

    /// Sets the value of [column_index_begin][BodyCells::column_index_begin].
    pub fn set_column_index_begin<T: Into<i64>>(mut self, v: T) -> Self {
        self.column_index_begin = Some(v.into());
        self
    }

    /// Sets the value of [column_index_end][BodyCells::column_index_end].
    pub fn set_column_index_end<T: Into<i64>>(mut self, v: T) -> Self {
        self.column_index_end = Some(v.into());
        self
    }

    /// Sets the value of [row_header_ids][BodyCells::row_header_ids].
    pub fn set_row_header_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.row_header_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [row_header_texts][BodyCells::row_header_texts].
    pub fn set_row_header_texts<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.row_header_texts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [row_header_texts_normalized][BodyCells::row_header_texts_normalized].
    pub fn set_row_header_texts_normalized<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.row_header_texts_normalized = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [column_header_ids][BodyCells::column_header_ids].
    pub fn set_column_header_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.column_header_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [column_header_texts][BodyCells::column_header_texts].
    pub fn set_column_header_texts<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.column_header_texts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [column_header_texts_normalized][BodyCells::column_header_texts_normalized].
    pub fn set_column_header_texts_normalized<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.column_header_texts_normalized = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [attributes][BodyCells::attributes].
    pub fn set_attributes<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Attribute>,
    {
        self.attributes = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Text that is related to the contents of the table and that precedes or
/// follows the current table.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Contexts {
    /// The related text.
    pub text: Option<String>,

    pub location: Option<Location>,
}

impl Contexts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [text][Contexts::text].
    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }

    /// Sets the value of [location][Contexts::location].
    pub fn set_location<T: Into<Location>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets or clears the value of [location][Contexts::location].
    pub fn set_or_clear_location<T: Into<Location>>(mut self, v: Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }
}

/// Key-value pairs detected across cell boundaries.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct KeyValuePair {
    /// A key in a key-value pair.
    pub key: Option<Key>,

    /// A list of values in a key-value pair.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub value: Vec<Value>,
}

impl KeyValuePair {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [key][KeyValuePair::key].
    pub fn set_key<T: Into<Key>>(mut self, v: T) -> Self {
        self.key = Some(v.into());
        self
    }

    /// Sets or clears the value of [key][KeyValuePair::key].
    pub fn set_or_clear_key<T: Into<Key>>(mut self, v: Option<T>) -> Self {
        self.key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [value][KeyValuePair::value].
    pub fn set_value<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.value = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A key in a key-value pair.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Key {
    /// The unique ID of the key in the table.
    pub cell_id: Option<String>,

    pub location: Option<Location>,

    /// The text content of the table cell without HTML markup.
    pub text: Option<String>,
}

impl Key {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [cell_id][Key::cell_id].
    pub fn set_cell_id<T: Into<String>>(mut self, v: T) -> Self {
        self.cell_id = Some(v.into());
        self
    }

    /// Sets the value of [location][Key::location].
    pub fn set_location<T: Into<Location>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets or clears the value of [location][Key::location].
    pub fn set_or_clear_location<T: Into<Location>>(mut self, v: Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [text][Key::text].
    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }
}

/// A value in a key-value pair.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Value {
    /// The unique ID of the value in the table.
    pub cell_id: Option<String>,

    pub location: Option<Location>,

    /// The text content of the table cell without HTML markup.
    pub text: Option<String>,
}

impl Value {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [cell_id][Value::cell_id].
    pub fn set_cell_id<T: Into<String>>(mut self, v: T) -> Self {
        self.cell_id = Some(v.into());
        self
    }

    /// Sets the value of [location][Value::location].
    pub fn set_location<T: Into<Location>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets or clears the value of [location][Value::location].
    pub fn set_or_clear_location<T: Into<Location>>(mut self, v: Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [text][Value::text].
    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }
}

/// The structure of the input document.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DocStructure {
    /// An array containing one object per section or subsection identified in
    /// the input document.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub section_titles: Vec<SectionTitles>,

    /// An array containing one object per section or subsection, in parallel
    /// with the `section_titles` array, that details the leading sentences in
    /// the corresponding section or subsection.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub leading_sentences: Vec<LeadingSentence>,

    /// An array containing one object per paragraph, in parallel with the
    /// `section_titles` and `leading_sentences` arrays.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub paragraphs: Vec<Paragraphs>,
}

impl DocStructure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [section_titles][DocStructure::section_titles].
    pub fn set_section_titles<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<SectionTitles>,
    {
        self.section_titles = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [leading_sentences][DocStructure::leading_sentences].
    pub fn set_leading_sentences<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<LeadingSentence>,
    {
        self.leading_sentences = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [paragraphs][DocStructure::paragraphs].
    pub fn set_paragraphs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Paragraphs>,
    {
        self.paragraphs = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// An object containing information about a section or subsection title.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct SectionTitles {
    /// The text of the section title, if identified.
    pub text: Option<String>,

    pub location: Option<Location>,

    /// An integer indicating the level at which the section is located in the
    /// input document. For example, `1` represents a top-level section, `2`
    /// represents a subsection within the level `1` section, and so forth.
    pub level: Option<i64>,

    /// An array of `location` objects that lists the locations of detected
    /// section titles.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub element_locations: Vec<ElementLocations>,
}

impl SectionTitles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [text][SectionTitles::text].
    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }

    /// Sets the value of [location][SectionTitles::location].
    pub fn set_location<T: Into<Location>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets or clears the value of [location][SectionTitles::location].
    pub fn set_or_clear_location<T: Into<Location>>(mut self, v: Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [level][SectionTitles::level].
    pub fn set_level<T: Into<i64>>(mut self, v: T) -> Self {
        self.level = Some(v.into());
        self
    }

    /// Sets the value of [element_locations][SectionTitles::element_locations].
    pub fn set_element_locations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ElementLocations>,
    {
        self.element_locations = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The leading sentences in a section or subsection of the input document.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct LeadingSentence {
    /// The text of the leading sentence.
    pub text: Option<String>,

    pub location: Option<Location>,

    /// An array of `location` objects that lists the locations of detected
    /// leading sentences.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub element_locations: Vec<ElementLocations>,
}

impl LeadingSentence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [text][LeadingSentence::text].
    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }

    /// Sets the value of [location][LeadingSentence::location].
    pub fn set_location<T: Into<Location>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets or clears the value of [location][LeadingSentence::location].
    pub fn set_or_clear_location<T: Into<Location>>(mut self, v: Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [element_locations][LeadingSentence::element_locations].
    pub fn set_element_locations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ElementLocations>,
    {
        self.element_locations = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A list of `begin` and `end` indexes that indicate the locations of the
/// elements in the input document.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ElementLocations {
    /// An integer that indicates the starting position of the element in the
    /// input document.
    pub begin: Option<i64>,

    /// An integer that indicates the ending position of the element in the
    /// input document.
    pub end: Option<i64>,
}

impl ElementLocations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [begin][ElementLocations::begin].
    pub fn set_begin<T: Into<i64>>(mut self, v: T) -> Self {
        self.begin = Some(v.into());
        self
    }

    /// Sets the value of [end][ElementLocations::end].
    pub fn set_end<T: Into<i64>>(mut self, v: T) -> Self {
        self.end = Some(v.into());
        self
    }
}

/// The locations of each paragraph in the input document.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Paragraphs {
    pub location: Option<Location>,
}

impl Paragraphs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [location][Paragraphs::location].
    pub fn set_location<T: Into<Location>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets or clears the value of [location][Paragraphs::location].
    pub fn set_or_clear_location<T: Into<Location>>(mut self, v: Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }
}

/// A party and its corresponding role, including address and contact
/// information if identified.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Parties {
    /// The normalized form of the party's name.
    pub party: Option<String>,

    /// A string identifying the party's role.
    pub role: Option<String>,

    /// A string that identifies the importance of the party, see
    /// [parties::importance] for the possible values.
    pub importance: Option<String>,

    /// A list of the party's address or addresses.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<Address>,

    /// A list of the names and roles of contacts identified in the input
    /// document.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<Contact>,

    /// A list of the party's mentions in the input document.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mentions: Vec<Mention>,
}

impl Parties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [party][Parties::party].
    pub fn set_party<T: Into<String>>(mut self, v: T) -> Self {
        self.party = Some(v.into());
        self
    }

    /// Sets the value of [role][Parties::role].
    pub fn set_role<T: Into<String>>(mut self, v: T) -> Self {
        self.role = Some(v.into());
        self
    }

    /// Sets the value of [importance][Parties::importance].
    pub fn set_importance<T: Into<String>>(mut self, v: T) -> Self {
        self.importance = Some(v.into());
        self
    }

    /// Sets the value of [addresses][Parties::addresses].
    pub fn set_addresses<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Address>,
    {
        self.addresses = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [contacts][Parties::contacts].
    pub fn set_contacts<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Contact>,
    {
        self.contacts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [mentions][Parties::mentions].
    pub fn set_mentions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Mention>,
    {
        self.mentions = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Defines the values for [Parties::importance].
pub mod parties {
    pub mod importance {
        pub const PRIMARY: &str = "Primary";
        pub const UNKNOWN: &str = "Unknown";
    }
}

/// A party's address.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Address {
    /// A string listing the address.
    pub text: Option<String>,

    pub location: Option<Location>,
}

impl Address {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [text][Address::text].
    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }

    /// Sets the value of [location][Address::location].
    pub fn set_location<T: Into<Location>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets or clears the value of [location][Address::location].
    pub fn set_or_clear_location<T: Into<Location>>(mut self, v: Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }
}

/// A contact.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Contact {
    /// A string listing the name of the contact.
    pub name: Option<String>,

    /// A string listing the role of the contact.
    pub role: Option<String>,
}

impl Contact {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Contact::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [role][Contact::role].
    pub fn set_role<T: Into<String>>(mut self, v: T) -> Self {
        self.role = Some(v.into());
        self
    }
}

/// A mention of a party.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Mention {
    /// The name of the party.
    pub text: Option<String>,

    pub location: Option<Location>,
}

impl Mention {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [text][Mention::text].
    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }

    /// Sets the value of [location][Mention::location].
    pub fn set_location<T: Into<Location>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets or clears the value of [location][Mention::location].
    pub fn set_or_clear_location<T: Into<Location>>(mut self, v: Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }
}

/// The comparison of the two submitted documents.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CompareReturn {
    /// The analysis model used to compare the input documents.
    pub model_id: Option<String>,

    /// The version of the analysis model.
    pub model_version: Option<String>,

    /// Information about the documents being compared.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<Document>,

    /// A list of pairwise alignments between the elements of the two documents.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aligned_elements: Vec<AlignedElement>,

    /// A list of elements that do not have a match in the other document.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unaligned_elements: Vec<UnalignedElement>,
}

impl CompareReturn {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [model_id][CompareReturn::model_id].
    pub fn set_model_id<T: Into<String>>(mut self, v: T) -> Self {
        self.model_id = Some(v.into());
        self
    }

    /// Sets the value of [model_version][CompareReturn::model_version].
    pub fn set_model_version<T: Into<String>>(mut self, v: T) -> Self {
        self.model_version = Some(v.into());
        self
    }

    /// Sets the value of [documents][CompareReturn::documents].
    pub fn set_documents<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Document>,
    {
        self.documents = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [aligned_elements][CompareReturn::aligned_elements].
    pub fn set_aligned_elements<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<AlignedElement>,
    {
        self.aligned_elements = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [unaligned_elements][CompareReturn::unaligned_elements].
    pub fn set_unaligned_elements<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<UnalignedElement>,
    {
        self.unaligned_elements = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// An element pair aligned between the two documents.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AlignedElement {
    /// Identifies two elements that semantically align between the compared
    /// documents.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub element_pair: Vec<ElementPair>,

    /// Specifies whether the aligned element is identical. Elements are
    /// considered identical despite minor differences such as leading
    /// punctuation, end-of-sentence punctuation, whitespace, the presence or
    /// absence of definite or indefinite articles, and others.
    pub identical_text: Option<bool>,

    /// Hashed values that you can send to IBM to provide feedback or receive
    /// support.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub provenance_ids: Vec<String>,

    /// Indicates that the elements aligned are contractual clauses of
    /// significance.
    pub significant_elements: Option<bool>,
}

impl AlignedElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [element_pair][AlignedElement::element_pair].
    pub fn set_element_pair<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ElementPair>,
    {
        self.element_pair = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [identical_text][AlignedElement::identical_text].
    pub fn set_identical_text<T: Into<bool>>(mut self, v: T) -> Self {
        self.identical_text = Some(v.into());
        self
    }

    /// Sets the value of [provenance_ids][AlignedElement::provenance_ids].
    pub fn set_provenance_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.provenance_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [significant_elements][AlignedElement::significant_elements].
    pub fn set_significant_elements<T: Into<bool>>(mut self, v: T) -> Self {
        self.significant_elements = Some(v.into());
        self
    }
}

/// Details of semantically aligned elements.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ElementPair {
    /// The label of the document (that is, the value of either the
    /// `file_1_label` or `file_2_label` parameters) in which the element
    /// occurs.
    pub document_label: Option<String>,

    /// The contents of the element.
    pub text: Option<String>,

    pub location: Option<Location>,

    /// Description of the action specified by the element and whom it affects.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<TypeLabelComparison>,

    /// List of functional categories into which the element falls; in other
    /// words, the subject matter of the element.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<CategoryComparison>,

    /// List of document attributes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
}

impl ElementPair {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [document_label][ElementPair::document_label].
    pub fn set_document_label<T: Into<String>>(mut self, v: T) -> Self {
        self.document_label = Some(v.into());
        self
    }

    /// Sets the value of [text][ElementPair::text].
    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }

    /// Sets the value of [location][ElementPair::location].
    pub fn set_location<T: Into<Location>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets or clears the value of [location][ElementPair::location].
    pub fn set_or_clear_location<T: Into<Location>>(mut self, v: Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [types][ElementPair::types].
    pub fn set_types<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<TypeLabelComparison>,
    {
        self.types = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [categories][ElementPair::categories].
    pub fn set_categories<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<CategoryComparison>,
    {
        self.categories = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [attributes][ElementPair::attributes].
    pub fn set_attributes<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Attribute>,
    {
        self.attributes = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Identification of a specific type.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct TypeLabelComparison {
    pub label: Option<Label>,
}

impl TypeLabelComparison {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [label][TypeLabelComparison::label].
    pub fn set_label<T: Into<Label>>(mut self, v: T) -> Self {
        self.label = Some(v.into());
        self
    }

    /// Sets or clears the value of [label][TypeLabelComparison::label].
    pub fn set_or_clear_label<T: Into<Label>>(mut self, v: Option<T>) -> Self {
        self.label = v.map(|x| x.into());
        self
    }
}

/// Information defining an element's subject matter.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CategoryComparison {
    /// The category of the associated element.
    pub label: Option<String>,
}

impl CategoryComparison {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [label][CategoryComparison::label].
    pub fn set_label<T: Into<String>>(mut self, v: T) -> Self {
        self.label = Some(v.into());
        self
    }
}

/// Element that does not align semantically between two compared documents.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct UnalignedElement {
    /// The label assigned to the document by the value of the `file_1_label` or
    /// `file_2_label` parameters.
    pub document_label: Option<String>,

    pub location: Option<Location>,

    /// The text of the element.
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<TypeLabelComparison>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<CategoryComparison>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
}

impl UnalignedElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [document_label][UnalignedElement::document_label].
    pub fn set_document_label<T: Into<String>>(mut self, v: T) -> Self {
        self.document_label = Some(v.into());
        self
    }

    /// Sets the value of [location][UnalignedElement::location].
    pub fn set_location<T: Into<Location>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets or clears the value of [location][UnalignedElement::location].
    pub fn set_or_clear_location<T: Into<Location>>(mut self, v: Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [text][UnalignedElement::text].
    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }

    /// Sets the value of [types][UnalignedElement::types].
    pub fn set_types<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<TypeLabelComparison>,
    {
        self.types = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [categories][UnalignedElement::categories].
    pub fn set_categories<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<CategoryComparison>,
    {
        self.categories = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [attributes][UnalignedElement::attributes].
    pub fn set_attributes<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Attribute>,
    {
        self.attributes = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Feedback data for submission.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FeedbackDataInput {
    /// The type of feedback. The only permitted value is
    /// `element_classification`.
    pub feedback_type: String,

    /// Brief information about the input document.
    pub document: Option<ShortDoc>,

    /// An optional string identifying the model ID. The only permitted value is
    /// `contracts`.
    pub model_id: Option<String>,

    /// An optional string identifying the version of the model used.
    pub model_version: Option<String>,

    pub location: Option<Location>,

    /// The text on which to submit feedback.
    pub text: String,

    /// The original labeling from the input document, without the submitted
    /// feedback.
    pub original_labels: Option<OriginalLabelsIn>,

    /// The updated labeling from the input document, accounting for the
    /// submitted feedback.
    pub updated_labels: Option<UpdatedLabelsIn>,
}

impl FeedbackDataInput {
    pub fn new<T, U, V, W, X>(
        feedback_type: T,
        location: U,
        text: V,
        original_labels: W,
        updated_labels: X,
    ) -> Self
    where
        T: Into<String>,
        U: Into<Location>,
        V: Into<String>,
        W: Into<OriginalLabelsIn>,
        X: Into<UpdatedLabelsIn>,
    {
        Self::default()
            .set_feedback_type(feedback_type)
            .set_location(location)
            .set_text(text)
            .set_original_labels(original_labels)
            .set_updated_labels(updated_labels)
    }

    /// Sets the value of [feedback_type][FeedbackDataInput::feedback_type].
    pub fn set_feedback_type<T: Into<String>>(mut self, v: T) -> Self {
        self.feedback_type = v.into();
        self
    }

    /// Sets the value of [document][FeedbackDataInput::document].
    pub fn set_document<T: Into<ShortDoc>>(mut self, v: T) -> Self {
        self.document = Some(v.into());
        self
    }

    /// Sets or clears the value of [document][FeedbackDataInput::document].
    pub fn set_or_clear_document<T: Into<ShortDoc>>(mut self, v: Option<T>) -> Self {
        self.document = v.map(|x| x.into());
        self
    }

    /// Sets the value of [model_id][FeedbackDataInput::model_id].
    pub fn set_model_id<T: Into<String>>(mut self, v: T) -> Self {
        self.model_id = Some(v.into());
        self
    }

    /// Sets the value of [model_version][FeedbackDataInput::model_version].
    pub fn set_model_version<T: Into<String>>(mut self, v: T) -> Self {
        self.model_version = Some(v.into());
        self
    }

    /// Sets the value of [location][FeedbackDataInput::location].
    pub fn set_location<T: Into<Location>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets or clears the value of [location][FeedbackDataInput::location].
    pub fn set_or_clear_location<T: Into<Location>>(mut self, v: Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [text][FeedbackDataInput::text].
    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = v.into();
        self
    }

    /// Sets the value of [original_labels][FeedbackDataInput::original_labels].
    pub fn set_original_labels<T: Into<OriginalLabelsIn>>(mut self, v: T) -> Self {
        self.original_labels = Some(v.into());
        self
    }

    /// Sets or clears the value of [original_labels][FeedbackDataInput::original_labels].
    pub fn set_or_clear_original_labels<T: Into<OriginalLabelsIn>>(mut self, v: Option<T>) -> Self {
        self.original_labels = v.map(|x| x.into());
        self
    }

    /// Sets the value of [updated_labels][FeedbackDataInput::updated_labels].
    pub fn set_updated_labels<T: Into<UpdatedLabelsIn>>(mut self, v: T) -> Self {
        self.updated_labels = Some(v.into());
        self
    }

    /// Sets or clears the value of [updated_labels][FeedbackDataInput::updated_labels].
    pub fn set_or_clear_updated_labels<T: Into<UpdatedLabelsIn>>(mut self, v: Option<T>) -> Self {
        self.updated_labels = v.map(|x| x.into());
        self
    }
}

/// Brief information about the input document.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ShortDoc {
    /// The title of the input document, if identified.
    pub title: Option<String>,

    /// The MD5 hash of the input document.
    pub hash: Option<String>,
}

impl ShortDoc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [title][ShortDoc::title].
    pub fn set_title<T: Into<String>>(mut self, v: T) -> Self {
        self.title = Some(v.into());
        self
    }

    /// Sets the value of [hash][ShortDoc::hash].
    pub fn set_hash<T: Into<String>>(mut self, v: T) -> Self {
        self.hash = Some(v.into());
        self
    }
}

/// The original labeling from the input document, without the submitted
/// feedback.
///
/// Both lists are always sent, even when empty.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct OriginalLabelsIn {
    /// Description of the action specified by the element and whom it affects.
    pub types: Vec<TypeLabel>,

    /// List of functional categories into which the element falls; in other
    /// words, the subject matter of the element.
    pub categories: Vec<Category>,
}

impl OriginalLabelsIn {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [types][OriginalLabelsIn::types].
    pub fn set_types<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<TypeLabel>,
    {
        self.types = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [categories][OriginalLabelsIn::categories].
    pub fn set_categories<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Category>,
    {
        self.categories = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The updated labeling from the input document, accounting for the submitted
/// feedback.
///
/// Both lists are always sent, even when empty.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct UpdatedLabelsIn {
    /// Description of the action specified by the element and whom it affects.
    pub types: Vec<TypeLabel>,

    /// List of functional categories into which the element falls; in other
    /// words, the subject matter of the element.
    pub categories: Vec<Category>,
}

impl UpdatedLabelsIn {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [types][UpdatedLabelsIn::types].
    pub fn set_types<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<TypeLabel>,
    {
        self.types = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [categories][UpdatedLabelsIn::categories].
    pub fn set_categories<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Category>,
    {
        self.categories = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Information returned from the
/// [CompareComply::add_feedback][crate::client::CompareComply::add_feedback]
/// method.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FeedbackDataOutput {
    /// A string identifying the user adding the feedback. The only permitted
    /// value is `element_classification`.
    pub feedback_type: Option<String>,

    pub document: Option<ShortDoc>,

    pub model_id: Option<String>,

    pub model_version: Option<String>,

    pub location: Option<Location>,

    /// The text to which the feedback applies.
    pub text: Option<String>,

    /// The original labeling from the input document, without the submitted
    /// feedback.
    pub original_labels: Option<OriginalLabelsOut>,

    /// The updated labeling from the input document, accounting for the
    /// submitted feedback.
    pub updated_labels: Option<UpdatedLabelsOut>,

    /// Pagination details, if required by the length of the output.
    pub pagination: Option<Pagination>,
}

impl FeedbackDataOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [feedback_type][FeedbackDataOutput::feedback_type].
    pub fn set_feedback_type<T: Into<String>>(mut self, v: T) -> Self {
        self.feedback_type = Some(v.into());
        self
    }

    /// Sets the value of [document][FeedbackDataOutput::document].
    pub fn set_document<T: Into<ShortDoc>>(mut self, v: T) -> Self {
        self.document = Some(v.into());
        self
    }

    /// Sets or clears the value of [document][FeedbackDataOutput::document].
    pub fn set_or_clear_document<T: Into<ShortDoc>>(mut self, v: Option<T>) -> Self {
        self.document = v.map(|x| x.into());
        self
    }

    /// Sets the value of [model_id][FeedbackDataOutput::model_id].
    pub fn set_model_id<T: Into<String>>(mut self, v: T) -> Self {
        self.model_id = Some(v.into());
        self
    }

    /// Sets the value of [model_version][FeedbackDataOutput::model_version].
    pub fn set_model_version<T: Into<String>>(mut self, v: T) -> Self {
        self.model_version = Some(v.into());
        self
    }

    /// Sets the value of [location][FeedbackDataOutput::location].
    pub fn set_location<T: Into<Location>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets or clears the value of [location][FeedbackDataOutput::location].
    pub fn set_or_clear_location<T: Into<Location>>(mut self, v: Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [text][FeedbackDataOutput::text].
    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }

    /// Sets the value of [original_labels][FeedbackDataOutput::original_labels].
    pub fn set_original_labels<T: Into<OriginalLabelsOut>>(mut self, v: T) -> Self {
        self.original_labels = Some(v.into());
        self
    }

    /// Sets or clears the value of [original_labels][FeedbackDataOutput::original_labels].
    pub fn set_or_clear_original_labels<T: Into<OriginalLabelsOut>>(mut self, v: Option<T>) -> Self {
        self.original_labels = v.map(|x| x.into());
        self
    }

    /// Sets the value of [updated_labels][FeedbackDataOutput::updated_labels].
    pub fn set_updated_labels<T: Into<UpdatedLabelsOut>>(mut self, v: T) -> Self {
        self.updated_labels = Some(v.into());
        self
    }

    /// Sets or clears the value of [updated_labels][FeedbackDataOutput::updated_labels].
    pub fn set_or_clear_updated_labels<T: Into<UpdatedLabelsOut>>(mut self, v: Option<T>) -> Self {
        self.updated_labels = v.map(|x| x.into());
        self
    }

    /// Sets the value of [pagination][FeedbackDataOutput::pagination].
    pub fn set_pagination<T: Into<Pagination>>(mut self, v: T) -> Self {
        self.pagination = Some(v.into());
        self
    }

    /// Sets or clears the value of [pagination][FeedbackDataOutput::pagination].
    pub fn set_or_clear_pagination<T: Into<Pagination>>(mut self, v: Option<T>) -> Self {
        self.pagination = v.map(|x| x.into());
        self
    }
}

/// The original labeling from the input document, without the submitted
/// feedback.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct OriginalLabelsOut {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<TypeLabel>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,

    /// A string identifying the type of modification the feedback entry in the
    /// `updated_labels` array. See [original_labels_out::modification] for the
    /// possible values.
    pub modification: Option<String>,
}

impl OriginalLabelsOut {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [types][OriginalLabelsOut::types].
    pub fn set_types<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<TypeLabel>,
    {
        self.types = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [categories][OriginalLabelsOut::categories].
    pub fn set_categories<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Category>,
    {
        self.categories = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [modification][OriginalLabelsOut::modification].
    pub fn set_modification<T: Into<String>>(mut self, v: T) -> Self {
        self.modification = Some(v.into());
        self
    }
}

/// Defines the values for [OriginalLabelsOut::modification].
pub mod original_labels_out {
    pub mod modification {
        pub const ADDED: &str = "added";
        pub const UNCHANGED: &str = "unchanged";
        pub const REMOVED: &str = "removed";
    }
}

/// The updated labeling from the input document, accounting for the submitted
/// feedback.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct UpdatedLabelsOut {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<TypeLabel>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,

    /// The type of modification the feedback entry in the `updated_labels`
    /// array. See [updated_labels_out::modification] for the possible values.
    pub modification: Option<String>,
}

impl UpdatedLabelsOut {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [types][UpdatedLabelsOut::types].
    pub fn set_types<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<TypeLabel>,
    {
        self.types = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [categories][UpdatedLabelsOut::categories].
    pub fn set_categories<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Category>,
    {
        self.categories = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [modification][UpdatedLabelsOut::modification].
    pub fn set_modification<T: Into<String>>(mut self, v: T) -> Self {
        self.modification = Some(v.into());
        self
    }
}

/// Defines the values for [UpdatedLabelsOut::modification].
pub mod updated_labels_out {
    pub mod modification {
        pub const ADDED: &str = "added";
        pub const UNCHANGED: &str = "unchanged";
        pub const REMOVED: &str = "removed";
    }
}

/// Pagination details, if required by the length of the output.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Pagination {
    /// A token identifying the current page of results.
    pub refresh_cursor: Option<String>,

    /// A token identifying the next page of results.
    pub next_cursor: Option<String>,

    /// The updated URL of the current page of results.
    pub refresh_url: Option<String>,

    /// The URL of the next page of results.
    pub next_url: Option<String>,

    /// Reserved for future use.
    pub total: Option<i64>,
}

impl Pagination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [refresh_cursor][Pagination::refresh_cursor].
    pub fn set_refresh_cursor<T: Into<String>>(mut self, v: T) -> Self {
        self.refresh_cursor = Some(v.into());
        self
    }

    /// Sets the value of [next_cursor][Pagination::next_cursor].
    pub fn set_next_cursor<T: Into<String>>(mut self, v: T) -> Self {
        self.next_cursor = Some(v.into());
        self
    }

    /// Sets the value of [refresh_url][Pagination::refresh_url].
    pub fn set_refresh_url<T: Into<String>>(mut self, v: T) -> Self {
        self.refresh_url = Some(v.into());
        self
    }

    /// Sets the value of [next_url][Pagination::next_url].
    pub fn set_next_url<T: Into<String>>(mut self, v: T) -> Self {
        self.next_url = Some(v.into());
        self
    }

    /// Sets the value of [total][Pagination::total].
    pub fn set_total<T: Into<i64>>(mut self, v: T) -> Self {
        self.total = Some(v.into());
        self
    }
}

/// Information about the submitted feedback.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FeedbackReturn {
    /// The unique ID of the feedback object.
    pub feedback_id: Option<String>,

    /// An optional string identifying the person submitting feedback.
    pub user_id: Option<String>,

    /// An optional comment from the person submitting the feedback.
    pub comment: Option<String>,

    /// Timestamp listing the creation time of the feedback submission.
    pub created: Option<DateTime<Utc>>,

    /// Information returned from the
    /// [CompareComply::add_feedback][crate::client::CompareComply::add_feedback]
    /// method.
    pub feedback_data: Option<FeedbackDataOutput>,
}

impl FeedbackReturn {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [feedback_id][FeedbackReturn::feedback_id].
    pub fn set_feedback_id<T: Into<String>>(mut self, v: T) -> Self {
        self.feedback_id = Some(v.into());
        self
    }

    /// Sets the value of [user_id][FeedbackReturn::user_id].
    pub fn set_user_id<T: Into<String>>(mut self, v: T) -> Self {
        self.user_id = Some(v.into());
        self
    }

    /// Sets the value of [comment][FeedbackReturn::comment].
    pub fn set_comment<T: Into<String>>(mut self, v: T) -> Self {
        self.comment = Some(v.into());
        self
    }

    /// Sets the value of [created][FeedbackReturn::created].
    pub fn set_created<T: Into<DateTime<Utc>>>(mut self, v: T) -> Self {
        self.created = Some(v.into());
        self
    }

    /// Sets the value of [feedback_data][FeedbackReturn::feedback_data].
    pub fn set_feedback_data<T: Into<FeedbackDataOutput>>(mut self, v: T) -> Self {
        self.feedback_data = Some(v.into());
        self
    }

    /// Sets or clears the value of [feedback_data][FeedbackReturn::feedback_data].
    pub fn set_or_clear_feedback_data<T: Into<FeedbackDataOutput>>(mut self, v: Option<T>) -> Self {
        self.feedback_data = v.map(|x| x.into());
        self
    }
}

/// The results of a successful
/// [CompareComply::list_feedback][crate::client::CompareComply::list_feedback]
/// request for all feedback.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FeedbackList {
    /// A list of all feedback for the document.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub feedback: Vec<GetFeedback>,
}

impl FeedbackList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [feedback][FeedbackList::feedback].
    pub fn set_feedback<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<GetFeedback>,
    {
        self.feedback = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The results of a single feedback query.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GetFeedback {
    /// A string uniquely identifying the feedback entry.
    pub feedback_id: Option<String>,

    /// A timestamp identifying the creation time of the feedback entry.
    pub created: Option<DateTime<Utc>>,

    /// A string containing the user's comment about the feedback entry.
    pub comment: Option<String>,

    /// Information returned from the
    /// [CompareComply::add_feedback][crate::client::CompareComply::add_feedback]
    /// method.
    pub feedback_data: Option<FeedbackDataOutput>,
}

impl GetFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [feedback_id][GetFeedback::feedback_id].
    pub fn set_feedback_id<T: Into<String>>(mut self, v: T) -> Self {
        self.feedback_id = Some(v.into());
        self
    }

    /// Sets the value of [created][GetFeedback::created].
    pub fn set_created<T: Into<DateTime<Utc>>>(mut self, v: T) -> Self {
        self.created = Some(v.into());
        self
    }

    /// Sets the value of [comment][GetFeedback::comment].
    pub fn set_comment<T: Into<String>>(mut self, v: T) -> Self {
        self.comment = Some(v.into());
        self
    }

    /// Sets the value of [feedback_data][GetFeedback::feedback_data].
    pub fn set_feedback_data<T: Into<FeedbackDataOutput>>(mut self, v: T) -> Self {
        self.feedback_data = Some(v.into());
        self
    }

    /// Sets or clears the value of [feedback_data][GetFeedback::feedback_data].
    pub fn set_or_clear_feedback_data<T: Into<FeedbackDataOutput>>(mut self, v: Option<T>) -> Self {
        self.feedback_data = v.map(|x| x.into());
        self
    }
}

/// The status and message of the deletion request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FeedbackDeleted {
    /// HTTP return code.
    pub status: Option<i64>,

    /// Status message returned from the service.
    pub message: Option<String>,
}

impl FeedbackDeleted {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [status][FeedbackDeleted::status].
    pub fn set_status<T: Into<i64>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [message][FeedbackDeleted::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = Some(v.into());
        self
    }
}

/// The batch-request status.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct BatchStatus {
    /// The method to be run against the documents. See [batch_status::function]
    /// for the possible values.
    pub function: Option<String>,

    /// The geographical location of the Cloud Object Storage input bucket as
    /// listed on the **Endpoint** tab of your COS instance; for example,
    /// `us-geo`, `eu-geo`, or `ap-geo`.
    pub input_bucket_location: Option<String>,

    /// The name of the Cloud Object Storage input bucket.
    pub input_bucket_name: Option<String>,

    /// The geographical location of the Cloud Object Storage output bucket as
    /// listed on the **Endpoint** tab of your COS instance; for example,
    /// `us-geo`, `eu-geo`, or `ap-geo`.
    pub output_bucket_location: Option<String>,

    /// The name of the Cloud Object Storage output bucket.
    pub output_bucket_name: Option<String>,

    /// The unique identifier for the batch request.
    pub batch_id: Option<String>,

    /// Document counts.
    pub document_counts: Option<DocCounts>,

    /// The status of the batch request.
    pub status: Option<String>,

    /// The creation time of the batch request.
    pub created: Option<DateTime<Utc>>,

    /// The time of the most recent update to the batch request.
    pub updated: Option<DateTime<Utc>>,
}

impl BatchStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [function][BatchStatus::function].
    pub fn set_function<T: Into<String>>(mut self, v: T) -> Self {
        self.function = Some(v.into());
        self
    }

    /// Sets the value of [input_bucket_location][BatchStatus::input_bucket_location].
    pub fn set_input_bucket_location<T: Into<String>>(mut self, v: T) -> Self {
        self.input_bucket_location = Some(v.into());
        self
    }

    /// Sets the value of [input_bucket_name][BatchStatus::input_bucket_name].
    pub fn set_input_bucket_name<T: Into<String>>(mut self, v: T) -> Self {
        self.input_bucket_name = Some(v.into());
        self
    }

    /// Sets the value of [output_bucket_location][BatchStatus::output_bucket_location].
    pub fn set_output_bucket_location<T: Into<String>>(mut self, v: T) -> Self {
        self.output_bucket_location = Some(v.into());
        self
    }

    /// Sets the value of [output_bucket_name][BatchStatus::output_bucket_name].
    pub fn set_output_bucket_name<T: Into<String>>(mut self, v: T) -> Self {
        self.output_bucket_name = Some(v.into());
        self
    }

    /// Sets the value of [batch_id][BatchStatus::batch_id].
    pub fn set_batch_id<T: Into<String>>(mut self, v: T) -> Self {
        self.batch_id = Some(v.into());
        self
    }

    /// Sets the value of [document_counts][BatchStatus::document_counts].
    pub fn set_document_counts<T: Into<DocCounts>>(mut self, v: T) -> Self {
        self.document_counts = Some(v.into());
        self
    }

    /// Sets or clears the value of [document_counts][BatchStatus::document_counts].
    pub fn set_or_clear_document_counts<T: Into<DocCounts>>(mut self, v: Option<T>) -> Self {
        self.document_counts = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status][BatchStatus::status].
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [created][BatchStatus::created].
    pub fn set_created<T: Into<DateTime<Utc>>>(mut self, v: T) -> Self {
        self.created = Some(v.into());
        self
    }

    /// Sets the value of [updated][BatchStatus::updated].
    pub fn set_updated<T: Into<DateTime<Utc>>>(mut self, v: T) -> Self {
        self.updated = Some(v.into());
        self
    }
}

/// Defines the values for [BatchStatus::function] and
/// [CreateBatchOptions::function].
pub mod batch_status {
    pub mod function {
        pub const ELEMENT_CLASSIFICATION: &str = "element_classification";
        pub const HTML_CONVERSION: &str = "html_conversion";
        pub const TABLES: &str = "tables";
    }
}

/// The results of a successful
/// [CompareComply::list_batches][crate::client::CompareComply::list_batches]
/// request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Batches {
    /// A list of the status of all batch requests.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub batches: Vec<BatchStatus>,
}

impl Batches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [batches][Batches::batches].
    pub fn set_batches<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<BatchStatus>,
    {
        self.batches = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Document counts.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DocCounts {
    /// Total number of documents.
    pub total: Option<i64>,

    /// Number of pending documents.
    pub pending: Option<i64>,

    /// Number of documents successfully processed.
    pub successful: Option<i64>,

    /// Number of documents not successfully processed.
    pub failed: Option<i64>,
}

impl DocCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [total][DocCounts::total].
    pub fn set_total<T: Into<i64>>(mut self, v: T) -> Self {
        self.total = Some(v.into());
        self
    }

    /// Sets the value of [pending][DocCounts::pending].
    pub fn set_pending<T: Into<i64>>(mut self, v: T) -> Self {
        self.pending = Some(v.into());
        self
    }

    /// Sets the value of [successful][DocCounts::successful].
    pub fn set_successful<T: Into<i64>>(mut self, v: T) -> Self {
        self.successful = Some(v.into());
        self
    }

    /// Sets the value of [failed][DocCounts::failed].
    pub fn set_failed<T: Into<i64>>(mut self, v: T) -> Self {
        self.failed = Some(v.into());
        self
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
    fn classify_return() -> anyhow::Result<()> {
        let input = json!({
            "document": {"title": "Contract", "hash": "abc123"},
            "model_id": "contracts",
            "model_version": "1.2.0",
            "elements": [{
                "location": {"begin": 10, "end": 50},
                "text": "The Supplier shall deliver the goods.",
                "types": [{
                    "label": {"nature": "Obligation", "party": "Supplier"},
                    "provenance_ids": ["p1", "p2"]
                }],
                "categories": [{"label": "Delivery", "provenance_ids": ["p3"]}],
                "attributes": [{
                    "type": "Organization",
                    "text": "Supplier",
                    "location": {"begin": 14, "end": 22}
                }]
            }],
            "contract_amounts": [{
                "confidence_level": "High",
                "text": "$1,000",
                "interpretation": {"value": "1000", "numeric_value": 1000.0, "unit": "USD"}
            }],
            "parties": [{
                "party": "Supplier",
                "importance": "Primary",
                "contacts": [{"name": "Jane Doe", "role": "Manager"}]
            }]
        });
        let got = serde_json::from_value::<ClassifyReturn>(input)?;
        assert_eq!(got.model_id.as_deref(), Some("contracts"));
        assert_eq!(
            got.document,
            Some(Document::new().set_title("Contract").set_hash("abc123"))
        );

        let want = Element::new()
            .set_location(Location::new().set_begin(10).set_end(50))
            .set_text("The Supplier shall deliver the goods.")
            .set_types([TypeLabel::new()
                .set_label(Label::new(label::nature::OBLIGATION, "Supplier"))
                .set_provenance_ids(["p1", "p2"])])
            .set_categories([Category::new()
                .set_label("Delivery")
                .set_provenance_ids(["p3"])])
            .set_attributes([Attribute::new()
                .set_type(attribute::attribute_type::ORGANIZATION)
                .set_text("Supplier")
                .set_location(Location::new().set_begin(14).set_end(22))]);
        assert_eq!(got.elements, vec![want]);

        let amount = got.contract_amounts.first();
        assert_eq!(
            amount.and_then(|a| a.confidence_level.as_deref()),
            Some(confidence_level::HIGH)
        );
        assert_eq!(
            amount
                .and_then(|a| a.interpretation.as_ref())
                .and_then(|i| i.numeric_value),
            Some(1000.0)
        );
        assert_eq!(
            got.parties.first().and_then(|p| p.importance.as_deref()),
            Some(parties::importance::PRIMARY)
        );
        assert!(got.tables.is_empty(), "{got:?}");
        assert!(got.document_structure.is_none(), "{got:?}");
        Ok(())
    }

    #[test]
    fn attribute_type_field() -> anyhow::Result<()> {
        let attribute = Attribute::new()
            .set_type(attribute::attribute_type::CURRENCY)
            .set_text("USD");
        let got = serde_json::to_value(&attribute)?;
        assert_eq!(got, json!({"type": "Currency", "text": "USD"}));
        Ok(())
    }

    #[test]
    fn table_return() -> anyhow::Result<()> {
        let input = json!({
            "document": {"html": "<html></html>", "title": "Invoice"},
            "tables": [{
                "text": "Item Price",
                "title": {"text": "Prices"},
                "body_cells": [{
                    "cell_id": "bodyCell-1",
                    "text": "$5",
                    "row_index_begin": 1,
                    "row_index_end": 1,
                    "column_index_begin": 1,
                    "column_index_end": 1,
                    "row_header_ids": ["rowHeader-1"],
                    "column_header_texts": ["Price"]
                }],
                "key_value_pairs": [{
                    "key": {"cell_id": "key-1", "text": "Total"},
                    "value": [{"cell_id": "value-1", "text": "$5"}]
                }]
            }]
        });
        let got = serde_json::from_value::<TableReturn>(input)?;
        let table = got.tables.first().cloned().unwrap_or_default();
        assert_eq!(table.title, Some(TableTitle::new().set_text("Prices")));
        let cell = table.body_cells.first().cloned().unwrap_or_default();
        assert_eq!(cell.row_index_begin, Some(1));
        assert_eq!(cell.row_header_ids, vec!["rowHeader-1".to_string()]);
        assert!(cell.row_header_texts.is_empty(), "{cell:?}");
        let want = KeyValuePair::new()
            .set_key(Key::new().set_cell_id("key-1").set_text("Total"))
            .set_value([Value::new().set_cell_id("value-1").set_text("$5")]);
        assert_eq!(table.key_value_pairs, vec![want]);
        Ok(())
    }

    #[test]
    fn feedback_data_input() -> anyhow::Result<()> {
        let input = FeedbackDataInput::new(
            "element_classification",
            Location::new().set_begin(241).set_end(237),
            "1. IBM will provide a Senior Managing Consultant / expert resource.",
            OriginalLabelsIn::new().set_types([
                TypeLabel::new().set_label(Label::new("Obligation", "IBM"))
            ]),
            UpdatedLabelsIn::new(),
        )
        .set_document(ShortDoc::new().set_title("Super Services Agreement"));
        let options = AddFeedbackOptions::new(input).set_user_id("user-1");
        let got = serde_json::to_value(&options)?;
        let want = json!({
            "feedback_data": {
                "feedback_type": "element_classification",
                "document": {"title": "Super Services Agreement"},
                "location": {"begin": 241, "end": 237},
                "text": "1. IBM will provide a Senior Managing Consultant / expert resource.",
                "original_labels": {
                    "types": [{"label": {"nature": "Obligation", "party": "IBM"}}],
                    "categories": []
                },
                "updated_labels": {"types": [], "categories": []}
            },
            "user_id": "user-1"
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn feedback_return() -> anyhow::Result<()> {
        let input = json!({
            "feedback_id": "fb-1",
            "created": "2018-11-16T22:57:14Z",
            "comment": "test",
            "feedback_data": {
                "feedback_type": "element_classification",
                "updated_labels": {
                    "types": [{
                        "label": {"nature": "Obligation", "party": "IBM"},
                        "modification": "added"
                    }],
                    "modification": "added"
                },
                "pagination": {"next_cursor": "abc", "total": 3}
            }
        });
        let got = serde_json::from_value::<FeedbackReturn>(input)?;
        assert_eq!(
            got.created,
            Utc.with_ymd_and_hms(2018, 11, 16, 22, 57, 14).single()
        );
        let data = got.feedback_data.unwrap_or_default();
        let updated = data.updated_labels.unwrap_or_default();
        assert_eq!(
            updated.modification.as_deref(),
            Some(updated_labels_out::modification::ADDED)
        );
        assert_eq!(
            updated.types.first().and_then(|t| t.modification.as_deref()),
            Some(type_label::modification::ADDED)
        );
        assert_eq!(
            data.pagination,
            Some(Pagination::new().set_next_cursor("abc").set_total(3))
        );
        Ok(())
    }

    #[test]
    fn batch_status() -> anyhow::Result<()> {
        let input = json!({
            "function": "html_conversion",
            "input_bucket_location": "us-geo",
            "input_bucket_name": "input",
            "output_bucket_location": "us-geo",
            "output_bucket_name": "output",
            "batch_id": "batch-1",
            "document_counts": {"total": 4, "pending": 1, "successful": 2, "failed": 1},
            "status": "active",
            "created": "2018-10-15T14:30:00Z",
            "updated": "2018-10-15T14:45:00Z"
        });
        let got = serde_json::from_value::<BatchStatus>(input)?;
        assert_eq!(
            got.function.as_deref(),
            Some(batch_status::function::HTML_CONVERSION)
        );
        let counts = got.document_counts.clone().unwrap_or_default();
        assert_eq!(counts.total, Some(4));
        assert_eq!(counts.failed, Some(1));
        assert!(got.updated > got.created, "{got:?}");
        Ok(())
    }

    #[test]
    fn compare_return() -> anyhow::Result<()> {
        let input = json!({
            "model_id": "contracts",
            "documents": [{"label": "contract_a"}, {"label": "contract_b"}],
            "aligned_elements": [{
                "element_pair": [
                    {"document_label": "contract_a", "text": "a", "types": [{"label": {"nature": "Right", "party": "Buyer"}}]},
                    {"document_label": "contract_b", "text": "b"}
                ],
                "identical_text": false,
                "significant_elements": true
            }],
            "unaligned_elements": [{
                "document_label": "contract_b",
                "text": "c",
                "categories": [{"label": "Warranties"}]
            }]
        });
        let got = serde_json::from_value::<CompareReturn>(input)?;
        let labels = got
            .documents
            .iter()
            .filter_map(|d| d.label.as_deref())
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["contract_a", "contract_b"]);
        let aligned = got.aligned_elements.first().cloned().unwrap_or_default();
        assert_eq!(aligned.identical_text, Some(false));
        assert_eq!(aligned.significant_elements, Some(true));
        assert_eq!(aligned.element_pair.len(), 2);
        assert_eq!(
            aligned.element_pair[0].types,
            vec![TypeLabelComparison::new().set_label(Label::new(label::nature::RIGHT, "Buyer"))]
        );
        assert_eq!(
            got.unaligned_elements.first().map(|u| u.categories.clone()),
            Some(vec![CategoryComparison::new().set_label("Warranties")])
        );
        Ok(())
    }

    #[test]
    fn options() {
        let file = FilePart::new("%PDF-1.4").set_filename("contract.pdf");
        let options = CompareDocumentsOptions::new(file.clone(), FilePart::new("other"))
            .set_file_1_label("a")
            .set_model(model_type::CONTRACTS);
        assert_eq!(options.file_1, Some(file));
        assert_eq!(options.file_1_label.as_deref(), Some("a"));
        assert_eq!(options.file_2_label, None);

        let before = NaiveDate::from_ymd_opt(2018, 11, 16);
        let options = ListFeedbackOptions::new()
            .set_or_clear_before(before)
            .set_page_limit(10)
            .set_include_total(true);
        assert_eq!(options.before, before);
        assert_eq!(options.after, None);
        assert_eq!(options.page_limit, Some(10));

        let options = UpdateBatchOptions::new("batch-1", update_batch_options::action::RESCAN);
        assert_eq!(options.batch_id, "batch-1");
        assert_eq!(options.action, "rescan");
        assert_eq!(options.model, None);
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

    #[test_case(optional_string(ConvertToHtmlOptions::default(), ConvertToHtmlOptions::set_model, ConvertToHtmlOptions::set_or_clear_model, |o| o.model); "convert_to_html model")]
    #[test_case(optional_string(ClassifyElementsOptions::default(), ClassifyElementsOptions::set_model, ClassifyElementsOptions::set_or_clear_model, |o| o.model); "classify_elements model")]
    #[test_case(optional_string(ExtractTablesOptions::default(), ExtractTablesOptions::set_model, ExtractTablesOptions::set_or_clear_model, |o| o.model); "extract_tables model")]
    #[test_case(optional_string(CompareDocumentsOptions::default(), CompareDocumentsOptions::set_file_1_label, CompareDocumentsOptions::set_or_clear_file_1_label, |o| o.file_1_label); "compare_documents file_1_label")]
    #[test_case(optional_string(CompareDocumentsOptions::default(), CompareDocumentsOptions::set_file_2_label, CompareDocumentsOptions::set_or_clear_file_2_label, |o| o.file_2_label); "compare_documents file_2_label")]
    #[test_case(optional_string(CompareDocumentsOptions::default(), CompareDocumentsOptions::set_model, CompareDocumentsOptions::set_or_clear_model, |o| o.model); "compare_documents model")]
    #[test_case(optional_string(AddFeedbackOptions::default(), AddFeedbackOptions::set_user_id, AddFeedbackOptions::set_or_clear_user_id, |o| o.user_id); "add_feedback user_id")]
    #[test_case(optional_string(AddFeedbackOptions::default(), AddFeedbackOptions::set_comment, AddFeedbackOptions::set_or_clear_comment, |o| o.comment); "add_feedback comment")]
    #[test_case(optional_string(ListFeedbackOptions::default(), ListFeedbackOptions::set_feedback_type, ListFeedbackOptions::set_or_clear_feedback_type, |o| o.feedback_type); "list_feedback feedback_type")]
    #[test_case(optional_string(ListFeedbackOptions::default(), ListFeedbackOptions::set_document_title, ListFeedbackOptions::set_or_clear_document_title, |o| o.document_title); "list_feedback document_title")]
    #[test_case(optional_string(ListFeedbackOptions::default(), ListFeedbackOptions::set_model_id, ListFeedbackOptions::set_or_clear_model_id, |o| o.model_id); "list_feedback model_id")]
    #[test_case(optional_string(ListFeedbackOptions::default(), ListFeedbackOptions::set_model_version, ListFeedbackOptions::set_or_clear_model_version, |o| o.model_version); "list_feedback model_version")]
    #[test_case(optional_string(ListFeedbackOptions::default(), ListFeedbackOptions::set_category_removed, ListFeedbackOptions::set_or_clear_category_removed, |o| o.category_removed); "list_feedback category_removed")]
    #[test_case(optional_string(ListFeedbackOptions::default(), ListFeedbackOptions::set_category_added, ListFeedbackOptions::set_or_clear_category_added, |o| o.category_added); "list_feedback category_added")]
    #[test_case(optional_string(ListFeedbackOptions::default(), ListFeedbackOptions::set_category_not_changed, ListFeedbackOptions::set_or_clear_category_not_changed, |o| o.category_not_changed); "list_feedback category_not_changed")]
    #[test_case(optional_string(ListFeedbackOptions::default(), ListFeedbackOptions::set_type_removed, ListFeedbackOptions::set_or_clear_type_removed, |o| o.type_removed); "list_feedback type_removed")]
    #[test_case(optional_string(ListFeedbackOptions::default(), ListFeedbackOptions::set_type_added, ListFeedbackOptions::set_or_clear_type_added, |o| o.type_added); "list_feedback type_added")]
    #[test_case(optional_string(ListFeedbackOptions::default(), ListFeedbackOptions::set_type_not_changed, ListFeedbackOptions::set_or_clear_type_not_changed, |o| o.type_not_changed); "list_feedback type_not_changed")]
    #[test_case(optional_string(ListFeedbackOptions::default(), ListFeedbackOptions::set_cursor, ListFeedbackOptions::set_or_clear_cursor, |o| o.cursor); "list_feedback cursor")]
    #[test_case(optional_string(ListFeedbackOptions::default(), ListFeedbackOptions::set_sort, ListFeedbackOptions::set_or_clear_sort, |o| o.sort); "list_feedback sort")]
    #[test_case(optional_string(GetFeedbackOptions::default(), GetFeedbackOptions::set_model, GetFeedbackOptions::set_or_clear_model, |o| o.model); "get_feedback model")]
    #[test_case(optional_string(DeleteFeedbackOptions::default(), DeleteFeedbackOptions::set_model, DeleteFeedbackOptions::set_or_clear_model, |o| o.model); "delete_feedback model")]
    #[test_case(optional_string(CreateBatchOptions::default(), CreateBatchOptions::set_model, CreateBatchOptions::set_or_clear_model, |o| o.model); "create_batch model")]
    #[test_case(optional_string(UpdateBatchOptions::default(), UpdateBatchOptions::set_model, UpdateBatchOptions::set_or_clear_model, |o| o.model); "update_batch model")]
    fn optional_string_setters(got: Observed) {
        let want = [Some("value".to_string()), None, Some("other".to_string())];
        assert_eq!(got, want);
    }

    fn required_string<O: Default>(set: fn(O, &'static str) -> O, get: fn(O) -> String) -> String {
        get(set(O::default(), "value"))
    }

    #[test_case(required_string(GetFeedbackOptions::set_feedback_id, |o| o.feedback_id); "get_feedback feedback_id")]
    #[test_case(required_string(DeleteFeedbackOptions::set_feedback_id, |o| o.feedback_id); "delete_feedback feedback_id")]
    #[test_case(required_string(CreateBatchOptions::set_function, |o| o.function); "create_batch function")]
    #[test_case(required_string(CreateBatchOptions::set_input_bucket_location, |o| o.input_bucket_location); "create_batch input_bucket_location")]
    #[test_case(required_string(CreateBatchOptions::set_input_bucket_name, |o| o.input_bucket_name); "create_batch input_bucket_name")]
    #[test_case(required_string(CreateBatchOptions::set_output_bucket_location, |o| o.output_bucket_location); "create_batch output_bucket_location")]
    #[test_case(required_string(CreateBatchOptions::set_output_bucket_name, |o| o.output_bucket_name); "create_batch output_bucket_name")]
    #[test_case(required_string(GetBatchOptions::set_batch_id, |o| o.batch_id); "get_batch batch_id")]
    #[test_case(required_string(UpdateBatchOptions::set_batch_id, |o| o.batch_id); "update_batch batch_id")]
    #[test_case(required_string(UpdateBatchOptions::set_action, |o| o.action); "update_batch action")]
    fn required_string_setters(got: String) {
        assert_eq!(got, "value");
    }

    fn credentials() -> FilePart {
        FilePart::new(r#"{"apikey": "k"}"#).set_filename("credentials.json")
    }

    fn file_part<O: Default>(set: fn(O, FilePart) -> O, get: fn(O) -> Option<FilePart>) -> Option<FilePart> {
        get(set(O::default(), credentials()))
    }

    #[test_case(file_part(ConvertToHtmlOptions::set_file, |o| o.file); "convert_to_html file")]
    #[test_case(file_part(ClassifyElementsOptions::set_file, |o| o.file); "classify_elements file")]
    #[test_case(file_part(ExtractTablesOptions::set_file, |o| o.file); "extract_tables file")]
    #[test_case(file_part(CompareDocumentsOptions::set_file_1, |o| o.file_1); "compare_documents file_1")]
    #[test_case(file_part(CompareDocumentsOptions::set_file_2, |o| o.file_2); "compare_documents file_2")]
    #[test_case(file_part(CreateBatchOptions::set_input_credentials_file, |o| o.input_credentials_file); "create_batch input_credentials_file")]
    #[test_case(file_part(CreateBatchOptions::set_output_credentials_file, |o| o.output_credentials_file); "create_batch output_credentials_file")]
    fn file_setters(got: Option<FilePart>) {
        assert_eq!(got, Some(credentials()));
    }

    #[test]
    fn list_feedback_scalars() {
        let day = NaiveDate::from_ymd_opt(2018, 11, 16).unwrap_or_default();
        let options = ListFeedbackOptions::new()
            .set_before(day)
            .set_after(day)
            .set_page_limit(25)
            .set_include_total(false);
        assert_eq!(options.before, Some(day));
        assert_eq!(options.after, Some(day));
        assert_eq!(options.page_limit, Some(25));
        assert_eq!(options.include_total, Some(false));

        let options = options
            .set_or_clear_before(None::<NaiveDate>)
            .set_or_clear_after(None::<NaiveDate>)
            .set_or_clear_page_limit(None::<i64>)
            .set_or_clear_include_total(Some(true));
        assert_eq!(options.before, None);
        assert_eq!(options.after, None);
        assert_eq!(options.page_limit, None);
        assert_eq!(options.include_total, Some(true));
    }

    #[test]
    fn add_feedback_data() {
        let data = FeedbackDataInput::default().set_text("clause");
        let options = AddFeedbackOptions::default().set_feedback_data(data.clone());
        assert_eq!(options.feedback_data, Some(data));
    }
}
