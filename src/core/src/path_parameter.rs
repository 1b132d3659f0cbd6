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

//! Handling of path parameters.
//!
//! Parameters used to build the request path (aka 'path parameters') are
//! always required, and must be encoded so they form a single path segment.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

// Characters allowed in a path segment without encoding, see RFC 3986.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Validates a path parameter and encodes it as a single path segment.
///
/// # Example
/// ```
/// # use ibm_cloud_sdk_core::path_parameter::required;
/// let segment = required("model_id", "en-es/custom model")?;
/// assert_eq!(segment, "en-es%2Fcustom%20model");
/// # ibm_cloud_sdk_core::Result::<()>::Ok(())
/// ```
pub fn required(name: &str, value: &str) -> crate::Result<String> {
    let value = crate::validation::required_str(name, value)?;
    Ok(utf8_percent_encode(value, SEGMENT).to_string())
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("en-es", "en-es")]
    #[test_case("a1b2_c3.d4~", "a1b2_c3.d4~")]
    #[test_case("with space", "with%20space")]
    #[test_case("a/b", "a%2Fb")]
    #[test_case("a?b#c", "a%3Fb%23c")]
    #[test_case("ñ", "%C3%B1")]
    fn encoded(input: &str, want: &str) -> anyhow::Result<()> {
        assert_eq!(required("model_id", input)?, want);
        Ok(())
    }

    #[test]
    fn empty() {
        let got = required("document_id", "");
        assert!(matches!(&got, Err(e) if e.is_binding()), "{got:?}");
    }
}
