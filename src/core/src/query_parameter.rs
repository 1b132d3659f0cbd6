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

//! Defines traits and helpers to serialize query parameters.
//!
//! Query parameters in the Watson APIs are strings, booleans, integers, and
//! dates. Most are optional, and must be omitted from the request when unset.
//! The generated transports are easier to read if all the query parameters
//! can be treated uniformly, without any conditional code for each type.
//!
//! The types are not intended for application developers to use. They are
//! public because each service crate uses these helpers.

/// [QueryParameter] is a trait representing types that can be used as a query
/// parameter.
pub trait QueryParameter {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder;
}

impl QueryParameter for &str {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        builder.query(&[(name, self)])
    }
}

impl QueryParameter for bool {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        builder.query(&[(name, self)])
    }
}

impl QueryParameter for i64 {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        builder.query(&[(name, self)])
    }
}

/// Dates are formatted as `YYYY-MM-DD`.
impl QueryParameter for &chrono::NaiveDate {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        builder.query(&[(name, self.format("%Y-%m-%d").to_string())])
    }
}

/// Unset parameters are omitted.
impl<T: QueryParameter> QueryParameter for Option<T> {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        match self {
            Some(v) => v.add(builder, name),
            None => builder,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn split_query(r: &reqwest::Request) -> Vec<&str> {
        r.url()
            .query()
            .unwrap_or_default()
            .split("&")
            .filter(|p| !p.is_empty())
            .collect()
    }

    fn builder() -> reqwest::RequestBuilder {
        reqwest::Client::builder()
            .build()
            .unwrap()
            .get("https://test.example.com")
    }

    #[test]
    fn scalars() -> TestResult {
        let date = chrono::NaiveDate::from_ymd_opt(2019, 3, 7).unwrap();
        let builder = "en".add(builder(), "source");
        let builder = true.add(builder, "default");
        let builder = 25_i64.add(builder, "page_limit");
        let builder = (&date).add(builder, "before");
        let r = builder.build()?;
        assert_eq!(
            split_query(&r),
            vec!["source=en", "default=true", "page_limit=25", "before=2019-03-07"]
        );
        Ok(())
    }

    #[test]
    fn escaped() -> TestResult {
        let r = "a b&c".add(builder(), "document_title").build()?;
        assert_eq!(split_query(&r), vec!["document_title=a+b%26c"]);
        Ok(())
    }

    #[test]
    fn optional() -> TestResult {
        let source: Option<String> = None;
        let target = Some("es".to_string());
        let builder = source.as_deref().add(builder(), "source");
        let builder = target.as_deref().add(builder, "target");
        let builder = None::<bool>.add(builder, "default");
        let builder = Some(false).add(builder, "include_total");
        let r = builder.build()?;
        assert_eq!(split_query(&r), vec!["target=es", "include_total=false"]);
        Ok(())
    }
}
