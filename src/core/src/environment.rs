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

use std::collections::HashMap;

/// Returns the service properties configured in the environment.
///
/// For a service named `language_translator` this returns every variable
/// starting with `LANGUAGE_TRANSLATOR_`, with the prefix removed. For example,
/// `LANGUAGE_TRANSLATOR_URL` is returned with the `URL` key.
pub(crate) fn service_properties(service_name: &str) -> HashMap<String, String> {
    let prefix = format!("{}_", service_name.to_uppercase().replace('-', "_"));
    std::env::vars()
        .filter_map(|(k, v)| k.strip_prefix(&prefix).map(|k| (k.to_string(), v)))
        .collect()
}

/// Interprets a boolean property, as in `DISABLE_SSL=true`.
pub(crate) fn is_true(properties: &HashMap<String, String>, key: &str) -> bool {
    properties
        .get(key)
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}
