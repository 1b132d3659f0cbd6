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

//! Telemetry header helpers.

use crate::client_builder::internal::ServiceInfo;
use std::sync::LazyLock;

/// The name of the header identifying the service and operation of each
/// request.
pub const SDK_ANALYTICS: &str = "X-IBMCloud-SDK-Analytics";

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

static USER_AGENT: LazyLock<String> = LazyLock::new(|| {
    format!(
        "ibm-watson-rust-sdk/{PKG_VERSION} ({}; {})",
        std::env::consts::OS,
        std::env::consts::ARCH
    )
});

/// The default value for the `User-Agent` header.
pub fn user_agent() -> &'static str {
    USER_AGENT.as_str()
}

/// Format the value for the `X-IBMCloud-SDK-Analytics` header.
///
/// Generated transports call this once per request, with the name of the
/// operation as it appears in the service API definition, e.g. `Translate`.
pub fn sdk_analytics(info: &ServiceInfo, operation_id: &str) -> String {
    format!(
        "service_name={};service_version={};operation_id={operation_id}",
        info.analytics_name, info.service_version
    )
}

#[cfg(test)]
mod test {
    use super::*;

    const INFO: ServiceInfo = ServiceInfo {
        service_name: "test_only",
        analytics_name: "test-only",
        service_version: "V9",
        default_host: "https://test-only.example.com",
        default_version: "2020-01-01",
    };

    #[test]
    fn analytics() {
        let got = sdk_analytics(&INFO, "ListThings");
        assert_eq!(
            got,
            "service_name=test-only;service_version=V9;operation_id=ListThings"
        );
    }

    #[test]
    fn agent() {
        let got = user_agent();
        assert!(
            got.starts_with(&format!("ibm-watson-rust-sdk/{PKG_VERSION} (")),
            "{got}"
        );
        assert!(got.contains(std::env::consts::OS), "{got}");
    }
}
