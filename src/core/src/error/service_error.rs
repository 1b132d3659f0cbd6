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

use bytes::Bytes;
use serde_json::Value;

/// The error details returned by IBM Cloud services.
///
/// IBM Cloud services report errors using a handful of JSON formats. The most
/// common are:
///
/// ```json
/// {"code": 404, "error": "Model not found"}
/// {"errors": [{"code": "not_found", "message": "Model not found"}], "trace": "..."}
/// {"message": "Model not found"}
/// {"errorMessage": "Model not found"}
/// ```
///
/// This type extracts the message, and the numeric code and trace when
/// present.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ServiceError {
    message: String,
    code: Option<i64>,
    trace: Option<String>,
}

impl ServiceError {
    /// The human readable message describing the error.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The numeric error code included in the payload, if any.
    ///
    /// This is usually, but not always, the same as the HTTP status code.
    pub fn code(&self) -> Option<i64> {
        self.code
    }

    /// The trace identifier included in the payload, if any.
    ///
    /// Include this value when contacting IBM Cloud support.
    pub fn trace(&self) -> Option<&str> {
        self.trace.as_deref()
    }
}

/// The payload is not a JSON object with a recognized error message.
#[derive(thiserror::Error, Debug)]
#[error("the payload does not contain an error message")]
pub struct NoErrorMessage;

impl TryFrom<&Bytes> for ServiceError {
    type Error = NoErrorMessage;

    fn try_from(value: &Bytes) -> Result<Self, Self::Error> {
        let json = serde_json::from_slice::<Value>(value).map_err(|_| NoErrorMessage)?;
        let message = error_message(&json).ok_or(NoErrorMessage)?;
        let code = json.get("code").and_then(Value::as_i64);
        let trace = json
            .get("trace")
            .and_then(Value::as_str)
            .map(str::to_string);
        Ok(Self {
            message,
            code,
            trace,
        })
    }
}

fn error_message(json: &Value) -> Option<String> {
    let first_error = json
        .get("errors")
        .and_then(Value::as_array)
        .and_then(|v| v.first())
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str);
    first_error
        .or_else(|| json.get("error").and_then(Value::as_str))
        .or_else(|| json.get("message").and_then(Value::as_str))
        .or_else(|| json.get("errorMessage").and_then(Value::as_str))
        .map(str::to_string)
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!({"code": 404, "error": "Model not found"}), "Model not found", Some(404); "error field")]
    #[test_case(json!({"errors": [{"code": "bad_request", "message": "first"}, {"message": "second"}]}), "first", None; "errors array")]
    #[test_case(json!({"message": "plain message", "code": 500}), "plain message", Some(500); "message field")]
    #[test_case(json!({"errorMessage": "legacy message"}), "legacy message", None; "errorMessage field")]
    #[test_case(json!({"error": "preferred", "message": "ignored"}), "preferred", None; "error before message")]
    fn parse(input: Value, message: &str, code: Option<i64>) -> anyhow::Result<()> {
        let payload = Bytes::from(input.to_string());
        let got = ServiceError::try_from(&payload)?;
        assert_eq!(got.message(), message);
        assert_eq!(got.code(), code);
        Ok(())
    }

    #[test]
    fn trace() -> anyhow::Result<()> {
        let payload = Bytes::from(
            json!({"errors": [{"message": "oh noes"}], "trace": "trace-123"}).to_string(),
        );
        let got = ServiceError::try_from(&payload)?;
        assert_eq!(got.trace(), Some("trace-123"));
        Ok(())
    }

    #[test_case(""; "empty")]
    #[test_case("not json"; "not json")]
    #[test_case("[1, 2, 3]"; "array")]
    #[test_case(r#"{"error": {"nested": true}}"#; "error is not a string")]
    #[test_case(r#"{"errors": []}"#; "empty errors")]
    fn no_message(input: &str) {
        let payload = Bytes::from(input.to_string());
        let got = ServiceError::try_from(&payload);
        assert!(got.is_err(), "{got:?}");
    }
}
