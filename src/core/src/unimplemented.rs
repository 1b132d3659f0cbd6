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

/// The default implementation for all the methods in the stub traits.
pub async fn unimplemented_stub<T: Send>() -> crate::Result<crate::response::Response<T>> {
    unimplemented!(concat!(
        "the stub traits provide default implementations of each method, so ",
        "services can gain new operations without breaking existing mocks. ",
        "The transports in the client libraries override all the methods. ",
        "Therefore, this error should only appear in test code mocking the ",
        "client libraries. If that is how you got this error, verify that ",
        "you have mocked all the methods used in your test."
    ));
}
