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

//! Response types.
//!
//! Most applications only use the body of a response. The response headers
//! are available for troubleshooting, for example, to find the request id
//! the service assigned to a call.
//!
//! # Example
//!
//! Creating a response for mocks
//!
//! ```
//! # use dialogflow_cx_gax::Result;
//! # use dialogflow_cx_gax::response::Response;
//! struct Agent {
//!   // ...
//! }
//!
//! fn make_mock_response(body: Agent) -> Result<Response<Agent>> {
//!     Ok(Response::from(body))
//! }
//! ```

/// A successful response from the service.
///
/// A response has a body (potentially [Empty]) and the HTTP headers returned
/// by the service.
///
/// [Empty]: https://docs.rs/dialogflow-cx-wkt/latest/dialogflow_cx_wkt/struct.Empty.html
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response from the body, with no headers.
    pub fn from(body: T) -> Self {
        Self {
            body,
            parts: Parts::default(),
        }
    }

    /// Creates a response from the given parts.
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// Returns the headers associated with this response.
    pub fn headers(&self) -> &http::HeaderMap<http::HeaderValue> {
        &self.parts.headers
    }

    /// Returns the body associated with this response.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Converts the response into its parts.
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }

    /// Consumes the response, returning only the body.
    pub fn into_body(self) -> T {
        self.body
    }
}

/// The metadata of a [Response].
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Parts {
    /// The HTTP headers.
    pub headers: http::HeaderMap<http::HeaderValue>,
}

impl Parts {
    /// Creates a new instance.
    pub fn new() -> Self {
        Parts::default()
    }

    /// Sets the headers.
    ///
    /// # Example
    /// ```
    /// # use dialogflow_cx_gax::response::Parts;
    /// let mut headers = http::HeaderMap::new();
    /// headers.insert("x-goog-request-id", http::HeaderValue::from_static("abc-123"));
    /// let parts = Parts::new().set_headers(headers.clone());
    /// assert_eq!(parts.headers, headers);
    /// ```
    pub fn set_headers<V>(mut self, v: V) -> Self
    where
        V: Into<http::HeaderMap>,
    {
        self.headers = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_from() {
        let response = Response::from("abc123".to_string());
        assert!(response.headers().is_empty());
        assert_eq!(response.body().as_str(), "abc123");

        let body = response.into_body();
        assert_eq!(body.as_str(), "abc123");
    }

    #[test]
    fn response_from_parts() {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        let parts = Parts::new().set_headers(headers.clone());

        let response = Response::from_parts(parts, "abc123".to_string());
        assert_eq!(response.body().as_str(), "abc123");
        assert_eq!(response.headers(), &headers);

        let (parts, body) = response.into_parts();
        assert_eq!(body.as_str(), "abc123");
        assert_eq!(parts.headers, headers);
    }
}
