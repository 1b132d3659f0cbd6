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
    use ibm_watson_compare_comply_v1::client::CompareComply;
    use ibm_watson_compare_comply_v1::model::*;
    use ibm_watson_compare_comply_v1::multipart::FilePart;
    use ibm_watson_compare_comply_v1::{Error, RequestOptionsBuilder, Response, Result, stub};
    use sdk_core::options::RequestOptions;

    mockall::mock! {
        #[derive(Debug)]
        CompareComply {}
        impl stub::CompareComply for CompareComply {
            async fn classify_elements(&self, req: ClassifyElementsOptions, options: RequestOptions) -> Result<Response<Option<ClassifyReturn>>>;
            async fn get_feedback(&self, req: GetFeedbackOptions, options: RequestOptions) -> Result<Response<Option<GetFeedback>>>;
            async fn get_batch(&self, req: GetBatchOptions, options: RequestOptions) -> Result<Response<Option<BatchStatus>>>;
            async fn update_batch(&self, req: UpdateBatchOptions, options: RequestOptions) -> Result<Response<Option<BatchStatus>>>;
        }
    }

    static_assertions::assert_impl_all!(CompareComply: Clone, Send, Sync, std::fmt::Debug);

    #[tokio::test]
    async fn classify_elements() -> anyhow::Result<()> {
        let mut mock = MockCompareComply::new();
        mock.expect_classify_elements()
            .withf(|req, _| {
                req.file.as_ref().and_then(|f| f.filename.as_deref()) == Some("contract.pdf")
                    && req.model.as_deref() == Some(model_type::CONTRACTS)
            })
            .return_once(|_, _| {
                Ok(Response::from(Some(
                    ClassifyReturn::new()
                        .set_model_id("contracts")
                        .set_elements([Element::new().set_text("The Supplier shall deliver.")]),
                )))
            });

        let client = CompareComply::from_stub(mock);
        let result = client
            .classify_elements()
            .set_file(FilePart::new("%PDF-1.4").set_filename("contract.pdf"))
            .set_model(model_type::CONTRACTS)
            .send()
            .await?;
        let texts = result
            .iter()
            .flat_map(|r| r.elements.iter())
            .filter_map(|e| e.text.as_deref())
            .collect::<Vec<_>>();
        assert_eq!(texts, vec!["The Supplier shall deliver."]);
        Ok(())
    }

    #[tokio::test]
    async fn get_feedback_error() -> anyhow::Result<()> {
        let mut mock = MockCompareComply::new();
        mock.expect_get_feedback()
            .withf(|req, options| {
                req.feedback_id == "fb-1"
                    && options
                        .headers()
                        .iter()
                        .any(|(k, v)| k == "X-Watson-Learning-Opt-Out" && v == "true")
            })
            .return_once(|_, _| Err(Error::binding("simulated failure")));

        let client = CompareComply::from_stub(mock);
        let err = client
            .get_feedback()
            .set_feedback_id("fb-1")
            .with_header("X-Watson-Learning-Opt-Out", "true")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn batch_lifecycle() -> anyhow::Result<()> {
        let mut mock = MockCompareComply::new();
        mock.expect_update_batch()
            .withf(|req, _| {
                req.batch_id == "batch-1" && req.action == update_batch_options::action::CANCEL
            })
            .return_once(|_, _| {
                Ok(Response::from(Some(
                    BatchStatus::new()
                        .set_batch_id("batch-1")
                        .set_status("canceled"),
                )))
            });
        mock.expect_get_batch()
            .withf(|req, _| req.batch_id == "batch-1")
            .return_once(|_, _| Ok(Response::from(None)));

        let client = CompareComply::from_stub(mock);
        let updated = client
            .update_batch()
            .with_request(UpdateBatchOptions::new(
                "batch-1",
                update_batch_options::action::CANCEL,
            ))
            .send()
            .await?;
        assert_eq!(
            updated.and_then(|b| b.status).as_deref(),
            Some("canceled")
        );

        let status = client.get_batch().set_batch_id("batch-1").send().await?;
        assert_eq!(status, None);
        Ok(())
    }
}
