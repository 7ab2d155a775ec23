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

//! Tracing spans and events for HTTP requests.
//!
//! Attribute names follow the OpenTelemetry semantic conventions for HTTP
//! client spans, see
//! <https://opentelemetry.io/docs/specs/semconv/http/http-spans/>.

use crate::options::InstrumentationClientInfo;
use gax::Result;
use gax::response::Response;
use tracing::Span;
use tracing::field::Empty;

pub(crate) const KEY_OTEL_KIND: &str = "otel.kind";
pub(crate) const KEY_OTEL_NAME: &str = "otel.name";
pub(crate) const KEY_OTEL_STATUS: &str = "otel.status";
pub(crate) const KEY_RPC_SYSTEM: &str = "rpc.system";
pub(crate) const KEY_HTTP_REQUEST_METHOD: &str = "http.request.method";
pub(crate) const KEY_SERVER_ADDRESS: &str = "server.address";
pub(crate) const KEY_SERVER_PORT: &str = "server.port";
pub(crate) const KEY_URL_PATH: &str = "url.path";
pub(crate) const KEY_URL_SCHEME: &str = "url.scheme";
pub(crate) const KEY_HTTP_RESPONSE_STATUS_CODE: &str = "http.response.status_code";
pub(crate) const KEY_ERROR_TYPE: &str = "error.type";
pub(crate) const KEY_GCP_CLIENT_SERVICE: &str = "gcp.client.service";
pub(crate) const KEY_GCP_CLIENT_VERSION: &str = "gcp.client.version";
pub(crate) const KEY_GCP_CLIENT_ARTIFACT: &str = "gcp.client.artifact";

/// Creates the span for a single HTTP request.
///
/// The span is created at `DEBUG` level. The response fields are recorded by
/// [record_result].
pub(crate) fn create_span(
    request: &reqwest::Request,
    instrumentation: Option<&'static InstrumentationClientInfo>,
) -> Span {
    let url = request.url();
    let method = request.method().as_str();
    tracing::debug_span!(
        "http_request",
        { KEY_OTEL_NAME } = method,
        { KEY_OTEL_KIND } = "Client",
        { KEY_OTEL_STATUS } = Empty,
        { KEY_RPC_SYSTEM } = "http",
        { KEY_HTTP_REQUEST_METHOD } = method,
        { KEY_SERVER_ADDRESS } = url.host_str().unwrap_or_default(),
        { KEY_SERVER_PORT } = url.port_or_known_default().map(i64::from),
        { KEY_URL_PATH } = url.path(),
        { KEY_URL_SCHEME } = url.scheme(),
        { KEY_HTTP_RESPONSE_STATUS_CODE } = Empty,
        { KEY_ERROR_TYPE } = Empty,
        { KEY_GCP_CLIENT_SERVICE } = instrumentation.map(|i| i.service_name),
        { KEY_GCP_CLIENT_VERSION } = instrumentation.map(|i| i.client_version),
        { KEY_GCP_CLIENT_ARTIFACT } = instrumentation.map(|i| i.client_artifact),
    )
}

/// Records the outcome of a request in `span` and emits an event for it.
pub(crate) fn record_result<O>(span: &Span, result: &Result<Response<O>>) {
    match result {
        Ok(_) => {
            span.record(KEY_OTEL_STATUS, "Ok");
            tracing::debug!(parent: span, "request succeeded");
        }
        Err(e) => {
            span.record(KEY_OTEL_STATUS, "Error");
            if let Some(code) = e.http_status_code() {
                span.record(KEY_HTTP_RESPONSE_STATUS_CODE, i64::from(code));
            }
            let error_type = error_type(e);
            span.record(KEY_ERROR_TYPE, error_type.as_str());
            tracing::warn!(parent: span, error = %e, error_type = %error_type, "request failed");
        }
    }
}

/// Records the status code of a successful response.
pub(crate) fn record_status_code(span: &Span, code: u16) {
    span.record(KEY_HTTP_RESPONSE_STATUS_CODE, i64::from(code));
}

/// A low-cardinality classification of the error.
///
/// Errors with an HTTP status code use the code, other errors use a short
/// identifier.
pub(crate) fn error_type(error: &gax::error::Error) -> String {
    if let Some(code) = error.http_status_code() {
        return code.to_string();
    }
    let name = match error {
        e if e.is_timeout() => "CLIENT_TIMEOUT",
        e if e.is_authentication() => "CLIENT_AUTHENTICATION_ERROR",
        e if e.is_io() => "CLIENT_CONNECTION_ERROR",
        e if e.is_serialization() => "CLIENT_REQUEST_ERROR",
        e if e.is_deserialization() => "CLIENT_RESPONSE_DECODE_ERROR",
        _ => "INTERNAL",
    };
    name.to_string()
}
