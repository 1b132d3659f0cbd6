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

use super::ServiceError;
use crate::credentials::CredentialsError;
use bytes::Bytes;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries.
///
/// The client libraries report errors from multiple sources. For example, the
/// service may return an error, the transport may be unable to create the
/// necessary connection to make a request, the request may timeout before a
/// response is received, or the library may be unable to format the request
/// due to invalid or missing application inputs.
///
/// Most applications will just return the error or log it, without any further
/// action. However, some applications may need to interrogate the error
/// details. This type offers a series of predicates to determine the error
/// kind. The type also offers accessors to query the most common error details.
/// Applications can query the error [source][std::error::Error::source] for
/// deeper information.
///
/// # Example
/// ```
/// use ibm_cloud_sdk_core::error::Error;
/// match example_function() {
///     Err(e) if e.http_status_code() == Some(404) => {
///         println!("not found {e}");
///     },
///     Err(e) if e.is_timeout() => { println!("not enough time {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # Err(Error::service(404, http::HeaderMap::new(), bytes::Bytes::from_static(b"{\"error\":\"Not Found\"}")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the information returned by the service.
    ///
    /// The payload is kept verbatim. If the payload is a JSON object in any of
    /// the formats used by IBM Cloud services, the error message and other
    /// details are available via [service_error()][Error::service_error].
    ///
    /// # Example
    /// ```
    /// use ibm_cloud_sdk_core::error::Error;
    /// let payload = bytes::Bytes::from_static(br#"{"code":404,"error":"Model not found"}"#);
    /// let error = Error::service(404, http::HeaderMap::new(), payload);
    /// assert_eq!(error.http_status_code(), Some(404));
    /// assert_eq!(error.service_error().map(|e| e.message()), Some("Model not found"));
    /// ```
    pub fn service(status_code: u16, headers: HeaderMap, payload: Bytes) -> Self {
        let error = ServiceError::try_from(&payload).ok();
        let details = ServiceDetails {
            status_code,
            headers,
            payload,
            error,
        };
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// The service received the request and rejected it.
    ///
    /// The HTTP status code, headers, and payload are available via
    /// [http_status_code()][Error::http_status_code],
    /// [http_headers()][Error::http_headers], and
    /// [http_payload()][Error::http_payload].
    pub fn is_service(&self) -> bool {
        matches!(self.kind, ErrorKind::Service(_))
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use ibm_cloud_sdk_core::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before its deadline.
    ///
    /// This is always a client-side generated error. Note that the request may
    /// or may not have started, and it may or may not complete in the service.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause of this problem is setting a timeout value that is
    /// based on the observed latency when the service is not under load.
    /// Document translation and batch requests can take several seconds.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error representing a problem receiving the response.
    #[doc(hidden)]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response was received, but it could not be parsed.
    ///
    /// # Troubleshooting
    ///
    /// This usually indicates the service returned a payload that does not
    /// match the expected data model, or the endpoint is not an IBM Watson
    /// service. Check the endpoint configured in the client builder.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    #[doc(hidden)]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// For example, a custom header value contains invalid characters, or a
    /// multipart file declares an invalid content type.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    #[doc(hidden)]
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Binding,
            source: Some(source.into()),
        }
    }

    /// A required parameter is missing or empty.
    ///
    /// This is always detected before any network traffic. The source contains
    /// the name of the missing parameter.
    pub fn is_binding(&self) -> bool {
        matches!(self.kind, ErrorKind::Binding)
    }

    #[doc(hidden)]
    pub fn authentication(source: CredentialsError) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// The authenticator could not produce the authentication headers.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    #[doc(hidden)]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Io,
            source: Some(source.into()),
        }
    }

    /// The request could not be sent, or the response could not be received.
    ///
    /// For example, the connection was refused or dropped.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io)
    }

    /// Creates an unclassified error, mostly useful in mocks.
    #[doc(hidden)]
    pub fn other<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Other,
            source: Some(source.into()),
        }
    }

    /// The HTTP status code returned by the service, if any.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Service(d) => Some(d.status_code),
            _ => None,
        }
    }

    /// The HTTP headers returned by the service, if any.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.headers),
            _ => None,
        }
    }

    /// The raw payload returned by the service, if any.
    pub fn http_payload(&self) -> Option<&Bytes> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.payload),
            _ => None,
        }
    }

    /// The error details parsed from the service payload, if any.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match &self.kind {
            ErrorKind::Service(d) => d.error.as_ref(),
            _ => None,
        }
    }

    /// Returns the source of this error downcast to `T`, if possible.
    ///
    /// # Example
    /// ```
    /// use ibm_cloud_sdk_core::error::Error;
    /// let error = Error::other(std::io::Error::other("simulated"));
    /// assert!(error.as_inner::<std::io::Error>().is_some());
    /// ```
    pub fn as_inner<T: StdError + Send + Sync + 'static>(&self) -> Option<&T> {
        self.source.as_ref().and_then(|e| e.downcast_ref::<T>())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let ErrorKind::Service(d) = &self.kind {
            return d.display(f);
        }
        let prefix = match &self.kind {
            ErrorKind::Binding => "cannot build the request, a required parameter is missing",
            ErrorKind::Serialization => "cannot serialize the request",
            ErrorKind::Deserialization => "cannot deserialize the response",
            ErrorKind::Authentication => "cannot create the authentication headers",
            ErrorKind::Timeout => "the request exceeded the request deadline",
            ErrorKind::Io => "cannot send the request or receive the response",
            ErrorKind::Service(_) | ErrorKind::Other => "an unclassified problem making a request",
        };
        match &self.source {
            Some(e) => write!(f, "{prefix}: {e}"),
            None => write!(f, "{prefix}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn StdError))
    }
}

#[derive(Debug)]
enum ErrorKind {
    Binding,
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Io,
    Service(Box<ServiceDetails>),
    Other,
}

#[derive(Debug)]
struct ServiceDetails {
    status_code: u16,
    headers: HeaderMap,
    payload: Bytes,
    error: Option<ServiceError>,
}

impl ServiceDetails {
    fn display(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.error {
            Some(e) => write!(
                f,
                "the service reports an error with HTTP status {} described as: {}",
                self.status_code,
                e.message()
            ),
            None => write!(
                f,
                "the service reports an error with HTTP status {} and payload: {}",
                self.status_code,
                String::from_utf8_lossy(&self.payload)
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test]
    fn service() {
        let mut headers = HeaderMap::new();
        headers.insert("x-global-transaction-id", "abc123".parse().unwrap());
        let payload = Bytes::from_static(br#"{"code":400,"error":"Text is required"}"#);
        let error = Error::service(400, headers.clone(), payload.clone());
        assert!(error.is_service(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(400));
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(error.http_payload(), Some(&payload));
        assert_eq!(
            error.service_error().map(ServiceError::message),
            Some("Text is required")
        );
        let got = error.to_string();
        assert!(got.contains("400"), "{got}");
        assert!(got.contains("Text is required"), "{got}");
        assert!(error.source().is_none(), "{error:?}");
    }

    #[test]
    fn service_without_json() {
        let payload = Bytes::from_static(b"<html>Bad Gateway</html>");
        let error = Error::service(502, HeaderMap::new(), payload.clone());
        assert!(error.is_service(), "{error:?}");
        assert_eq!(error.http_payload(), Some(&payload));
        assert!(error.service_error().is_none(), "{error:?}");
        let got = error.to_string();
        assert!(got.contains("Bad Gateway"), "{got}");
    }

    #[test_case(Error::binding("missing text"), Error::is_binding)]
    #[test_case(Error::ser("bad header"), Error::is_serialization)]
    #[test_case(Error::deser("bad json"), Error::is_deserialization)]
    #[test_case(Error::timeout("too slow"), Error::is_timeout)]
    #[test_case(Error::io("connection refused"), Error::is_io)]
    #[test_case(Error::authentication(CredentialsError::MissingProperty("username")), Error::is_authentication)]
    fn client_side(error: Error, predicate: fn(&Error) -> bool) {
        assert!(predicate(&error), "{error:?}");
        assert!(!error.is_service(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert_eq!(error.http_status_code(), None);
        assert_eq!(error.http_headers(), None);
        assert_eq!(error.http_payload(), None);
        assert!(error.service_error().is_none(), "{error:?}");
    }

    #[test]
    fn display_includes_source() {
        let error = Error::binding("the `text` field is required");
        let got = error.to_string();
        assert!(got.contains("the `text` field is required"), "{got}");
    }

    #[test]
    fn as_inner() {
        let error = Error::authentication(CredentialsError::MissingProperty("password"));
        let got = error.as_inner::<CredentialsError>();
        assert!(
            matches!(got, Some(CredentialsError::MissingProperty("password"))),
            "{got:?}"
        );
        assert!(error.as_inner::<std::io::Error>().is_none(), "{error:?}");
    }

    #[test]
    fn send_and_sync() {
        static_assertions::assert_impl_all!(Error: Send, Sync);
    }
}
