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

//! Handling of missing required parameters.
//!
//! The generated transports validate the request before any network traffic.
//! Strings must be non-empty, lists must have at least one element, and other
//! required values (such as files) must be present. A few small helpers make
//! the generated code easier to read.

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(String),
}

pub fn missing(name: &str) -> crate::error::Error {
    crate::error::Error::binding(Error::MissingRequiredParameter(name.to_string()))
}

/// Returns `value` if it is not empty.
pub fn required_str<'a>(name: &str, value: &'a str) -> crate::Result<&'a str> {
    if value.is_empty() {
        return Err(missing(name));
    }
    Ok(value)
}

/// Returns `value` if it has at least one element.
pub fn required_list<'a, T>(name: &str, value: &'a [T]) -> crate::Result<&'a [T]> {
    if value.is_empty() {
        return Err(missing(name));
    }
    Ok(value)
}

/// Returns the contents of `value` if it is present.
pub fn required<'a, T>(name: &str, value: Option<&'a T>) -> crate::Result<&'a T> {
    value.ok_or_else(|| missing(name))
}

#[cfg(test)]
mod test {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn missing() {
        let e = super::missing("abc123");
        assert!(e.is_binding(), "{e:?}");
        let fmt = format!("{e}");
        assert!(fmt.contains("abc123"), "{e:?}");
        let source = e.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(source, Some(Error::MissingRequiredParameter(p)) if p == "abc123"),
            "{e:?}"
        );
    }

    #[test]
    fn strings() -> anyhow::Result<()> {
        assert_eq!(required_str("model_id", "en-es")?, "en-es");
        let e = required_str("model_id", "").unwrap_err();
        assert!(e.is_binding(), "{e:?}");
        assert!(e.to_string().contains("model_id"), "{e}");
        Ok(())
    }

    #[test]
    fn lists() -> anyhow::Result<()> {
        let text = vec!["Hello".to_string()];
        assert_eq!(required_list("text", &text)?, text.as_slice());
        let empty: Vec<String> = Vec::new();
        let e = required_list("text", &empty).unwrap_err();
        assert!(e.is_binding(), "{e:?}");
        Ok(())
    }

    #[test]
    fn options() -> anyhow::Result<()> {
        let file = Some(42);
        assert_eq!(required("file", file.as_ref())?, &42);
        let e = required::<i32>("file", None).unwrap_err();
        assert!(e.is_binding(), "{e:?}");
        assert!(e.to_string().contains("file"), "{e}");
        Ok(())
    }
}
