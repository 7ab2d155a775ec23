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

use super::CredentialsError;
use super::rpc::Status;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The error returned by every RPC in the client library.
///
/// Errors come from multiple sources. The service may reject the request, the
/// transport may be unable to reach the service, the request may time out, or
/// the library may be unable to serialize the request or parse the response.
///
/// Most applications just return the error or log it. Applications that need
/// to inspect the error use the predicates and accessors in this type, and the
/// error [source][std::error::Error::source] for deeper information.
///
/// # Example
/// ```
/// use dialogflow_cx_gax::error::Error;
/// match example_function() {
///     Err(e) if e.status().is_some() => {
///         println!("service error {e}, debug using {:?}", e.status());
///     },
///     Err(e) if e.is_timeout() => { println!("not enough time {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     # use dialogflow_cx_gax::error::rpc::{Code, Status};
///     # Err(Error::service(Status::default().set_code(Code::NotFound).set_message("NOT FOUND")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    fn new(kind: ErrorKind, source: Option<BoxError>) -> Self {
        Self { kind, source }
    }

    /// Creates an error with the information returned by the service.
    ///
    /// # Example
    /// ```
    /// use dialogflow_cx_gax::error::Error;
    /// use dialogflow_cx_gax::error::rpc::{Code, Status};
    /// let status = Status::default().set_code(Code::NotFound).set_message("NOT FOUND");
    /// let error = Error::service(status.clone());
    /// assert_eq!(error.status(), Some(&status));
    /// ```
    pub fn service(status: Status) -> Self {
        Self::service_with_http_metadata(status, None, None)
    }

    /// Creates a service error including the HTTP status code and headers.
    pub fn service_with_http_metadata(
        status: Status,
        status_code: Option<u16>,
        headers: Option<HeaderMap>,
    ) -> Self {
        let response = HttpResponse {
            status_code,
            headers,
            payload: None,
        };
        Self::new(ErrorKind::Service(Box::new((status, response))), None)
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use dialogflow_cx_gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Timeout, Some(source.into()))
    }

    /// The request did not complete before the configured attempt timeout.
    ///
    /// The request may have reached the service, and may still complete
    /// there. Check the resource before sending a create or update again.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error representing a deserialization problem.
    ///
    /// ```
    /// use std::error::Error as _;
    /// use dialogflow_cx_gax::error::Error;
    /// let error = Error::deser("simulated problem");
    /// assert!(error.is_deserialization());
    /// assert!(error.source().is_some());
    /// ```
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Deserialization, Some(source.into()))
    }

    /// The response could not be deserialized.
    ///
    /// The service completed the request, but the response is not valid
    /// JSON or a field has the wrong format, e.g. a `bytes` field with
    /// malformed base64 text or a timestamp that is not RFC 3339. The error
    /// [source][std::error::Error::source] names the offending field.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Creates an error representing a serialization problem.
    ///
    /// ```
    /// use std::error::Error as _;
    /// use dialogflow_cx_gax::error::Error;
    /// let error = Error::ser("simulated problem");
    /// assert!(error.is_serialization());
    /// assert!(error.source().is_some());
    /// ```
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Serialization, Some(source.into()))
    }

    /// The request could not be serialized, it was never sent.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Creates an error representing a failure in the credentials provider.
    pub fn authentication(source: CredentialsError) -> Self {
        Self::new(ErrorKind::Authentication, Some(source.into()))
    }

    /// The credentials provider could not produce the request headers.
    ///
    /// The error [source][std::error::Error::source] is the
    /// [CredentialsError] returned by the provider.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Creates an error for an HTTP response with a non-success status code.
    ///
    /// Used when the payload is not a [Status], e.g. an HTML page from a
    /// proxy or load balancer.
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let response = HttpResponse {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        };
        Self::new(ErrorKind::Http(Box::new(response)), None)
    }

    /// Creates an error for transport problems without an HTTP response.
    ///
    /// For example, a failure to connect or a connection dropped while
    /// reading the response body.
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Io, Some(source.into()))
    }

    /// The request could not be sent or the response could not be received.
    ///
    /// Verify the endpoint is reachable. Agents outside the `global` location
    /// require a regional endpoint, e.g.
    /// `https://us-central1-dialogflow.googleapis.com`.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io)
    }

    /// The error was reported by the transport layer, with or without an
    /// HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Io | ErrorKind::Http(_))
    }

    /// The [Status] payload returned by the service, if any.
    ///
    /// # Examples
    /// ```
    /// use dialogflow_cx_gax::error::{Error, rpc::{Code, Status}};
    /// let error = Error::service(Status::default().set_code(Code::NotFound));
    /// if let Some(status) = error.status() {
    ///     if status.code == Code::NotFound {
    ///         println!("cannot find the agent, more details in {:?}", status.details);
    ///     }
    /// }
    /// ```
    ///
    /// See [AIP-193] for the error model used by the service.
    ///
    /// [AIP-193]: https://google.aip.dev/193
    pub fn status(&self) -> Option<&Status> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.0),
            _ => None,
        }
    }

    /// The HTTP status code, if any, associated with this error.
    ///
    /// # Example
    /// ```
    /// use dialogflow_cx_gax::error::Error;
    /// let e = Error::http(404, http::HeaderMap::new(), bytes::Bytes::from_static(b"NOT FOUND"));
    /// assert_eq!(e.http_status_code(), Some(404));
    /// ```
    pub fn http_status_code(&self) -> Option<u16> {
        self.response().and_then(|r| r.status_code)
    }

    /// The HTTP headers, if any, associated with this error.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        self.response().and_then(|r| r.headers.as_ref())
    }

    /// The HTTP payload, if any, associated with this error.
    ///
    /// Only set when the payload could not be parsed as a [Status].
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        self.response().and_then(|r| r.payload.as_ref())
    }

    fn response(&self) -> Option<&HttpResponse> {
        match &self.kind {
            ErrorKind::Http(r) => Some(r),
            ErrorKind::Service(d) => Some(&d.1),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match &self.kind {
            ErrorKind::Serialization => "cannot serialize the request",
            ErrorKind::Deserialization => "cannot deserialize the response",
            ErrorKind::Authentication => "cannot create the authentication headers",
            ErrorKind::Timeout => "the request exceeded the attempt timeout",
            ErrorKind::Io => "the transport reports an error",
            ErrorKind::Http(r) => {
                let code = r.status_code.unwrap_or_default();
                let payload = r.payload.clone().unwrap_or_default();
                return match std::str::from_utf8(&payload) {
                    Ok(text) => write!(f, "the service responded with HTTP {code}: {text}"),
                    Err(_) => write!(f, "the service responded with HTTP {code}: {payload:?}"),
                };
            }
            ErrorKind::Service(d) => {
                return write!(
                    f,
                    "the service reports an error with code {} described as: {}",
                    d.0.code, d.0.message
                );
            }
        };
        match &self.source {
            Some(e) => write!(f, "{prefix}: {e}"),
            None => f.write_str(prefix),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

#[derive(Debug)]
enum ErrorKind {
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Io,
    Http(Box<HttpResponse>),
    Service(Box<(Status, HttpResponse)>),
}

// The parts of a failed HTTP response kept in the error.
#[derive(Debug)]
struct HttpResponse {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::rpc::Code;
    use std::error::Error as StdError;

    fn source() -> std::io::Error {
        std::io::Error::other("test-only-source")
    }

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            "content-type",
            http::HeaderValue::from_static("application/json"),
        );
        headers
    }

    #[test]
    fn service() {
        let status = Status::default()
            .set_code(Code::NotFound)
            .set_message("NOT FOUND");
        let error = Error::service(status.clone());
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.status(), Some(&status));
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert!(error.to_string().contains(Code::NotFound.name()), "{error}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
    }

    #[test]
    fn service_with_http_metadata() {
        let status = Status::default()
            .set_code(Code::InvalidArgument)
            .set_message("bad agent");
        let error =
            Error::service_with_http_metadata(status.clone(), Some(400), Some(headers()));
        assert_eq!(error.status(), Some(&status));
        assert_eq!(error.http_status_code(), Some(400));
        assert_eq!(error.http_headers(), Some(&headers()));
        assert!(error.http_payload().is_none(), "{error:?}");
    }

    #[test]
    fn timeout() {
        let error = Error::timeout(source());
        assert!(error.is_timeout(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<std::io::Error>());
        assert!(got.is_some(), "{error:?}");
        assert!(error.to_string().contains("test-only-source"), "{error}");
        assert!(error.status().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.http_headers().is_none(), "{error:?}");
        assert!(error.http_payload().is_none(), "{error:?}");
    }

    #[test]
    fn ser_and_deser() {
        let error = Error::ser(source());
        assert!(error.is_serialization(), "{error:?}");
        assert!(!error.is_deserialization(), "{error:?}");
        assert!(error.to_string().contains("test-only-source"), "{error}");

        let error = Error::deser(source());
        assert!(error.is_deserialization(), "{error:?}");
        assert!(!error.is_serialization(), "{error:?}");
        assert!(error.to_string().contains("test-only-source"), "{error}");
    }

    #[test]
    fn authentication() {
        let error = Error::authentication(CredentialsError::from_msg(true, "test-message"));
        assert!(error.is_authentication(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<CredentialsError>());
        assert!(matches!(got, Some(c) if c.is_transient()), "{error:?}");
        assert!(error.to_string().contains("test-message"), "{error}");
    }

    #[test]
    fn http() {
        let payload = bytes::Bytes::from_static(b"NOT FOUND");
        let error = Error::http(404, headers(), payload.clone());
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert!(error.status().is_none(), "{error:?}");
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert!(error.to_string().contains("404"), "{error}");
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.http_headers(), Some(&headers()));
        assert_eq!(error.http_payload(), Some(&payload));
    }

    #[test]
    fn http_binary() {
        let payload = bytes::Bytes::from_static(&[0xFF, 0xFF]);
        let error = Error::http(502, headers(), payload.clone());
        assert!(error.to_string().contains(&format!("{payload:?}")), "{error}");
        assert!(error.to_string().contains("502"), "{error}");
    }

    #[test]
    fn io() {
        let error = Error::io(source());
        assert!(error.is_transport(), "{error:?}");
        assert!(error.is_io(), "{error:?}");
        assert!(error.status().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.to_string().contains("test-only-source"), "{error}");
    }
}
