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

use crate::options::{ClientConfig, InstrumentationClientInfo};
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::credentials::Credentials;
use gax::error::Error;
use gax::response::{Parts, Response};
use reqwest::header::{CONTENT_TYPE, HeaderValue, USER_AGENT};
use tracing::Instrument;

#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    user_agent: Option<HeaderValue>,
    attempt_timeout: Option<std::time::Duration>,
    tracing: bool,
    instrumentation: Option<&'static InstrumentationClientInfo>,
}

impl ReqwestClient {
    pub async fn new(
        config: ClientConfig,
        default_endpoint: &str,
    ) -> gax::client_builder::Result<Self> {
        let tracing = crate::options::tracing_enabled(&config);
        let cred = config
            .cred
            .ok_or_else(|| BuilderError::cred("the client requires credentials"))?;
        let endpoint = crate::host::origin(config.endpoint.as_deref(), default_endpoint)?;
        let user_agent = config
            .user_agent
            .map(|v| HeaderValue::from_str(&v))
            .transpose()
            .map_err(BuilderError::transport)?;
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        Ok(Self {
            inner,
            cred,
            endpoint,
            user_agent,
            attempt_timeout: config.attempt_timeout,
            tracing,
            instrumentation: None,
        })
    }

    pub fn with_instrumentation(
        mut self,
        instrumentation: &'static InstrumentationClientInfo,
    ) -> Self {
        self.instrumentation = Some(instrumentation);
        self
    }

    pub fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner
            .request(method, format!("{}{path}", &self.endpoint))
    }

    pub async fn execute<I: serde::ser::Serialize, O: serde::de::DeserializeOwned + Default>(
        &self,
        mut builder: reqwest::RequestBuilder,
        body: Option<I>,
    ) -> Result<Response<O>> {
        if let Some(user_agent) = &self.user_agent {
            builder = builder.header(USER_AGENT, user_agent.clone());
        }
        if let Some(body) = body {
            let payload = serde_json::to_vec(&body).map_err(Error::ser)?;
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(payload);
        }
        if let Some(timeout) = self.attempt_timeout {
            builder = builder.timeout(timeout);
        }
        let request = builder.build().map_err(Error::ser)?;

        if !self.tracing {
            return self.request_attempt(request, None).await;
        }
        let span = crate::observability::create_span(&request, self.instrumentation);
        let result = self
            .request_attempt(request, Some(&span))
            .instrument(span.clone())
            .await;
        crate::observability::record_result(&span, &result);
        result
    }

    async fn request_attempt<O: serde::de::DeserializeOwned + Default>(
        &self,
        mut request: reqwest::Request,
        span: Option<&tracing::Span>,
    ) -> Result<Response<O>> {
        // Fetched inside the span so authentication failures are recorded.
        let auth_headers = self.cred.headers().await.map_err(Error::authentication)?;
        request.headers_mut().extend(auth_headers);
        let response = self
            .inner
            .execute(request)
            .await
            .map_err(Self::map_send_error)?;
        if let Some(span) = span {
            crate::observability::record_status_code(span, response.status().as_u16());
        }
        if !response.status().is_success() {
            return self::to_http_error(response).await;
        }

        self::to_http_response(response).await
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

/// The type for requests without a body.
#[derive(serde::Serialize)]
pub struct NoBody;

pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    let error = match gax::error::rpc::Status::try_from(&body) {
        Ok(status) => {
            Error::service_with_http_metadata(status, Some(status_code), Some(parts.headers))
        }
        Err(_) => Error::http(status_code, parts.headers, body),
    };
    Err(error)
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<Response<O>> {
    // 204 No Content has no body and fails to parse as JSON.
    let no_content_status = response.status() == reqwest::StatusCode::NO_CONTENT;
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?;

    let response = match body.to_bytes() {
        content if (content.is_empty() && no_content_status) => O::default(),
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser)?,
    };

    Ok(Response::from_parts(
        Parts::new().set_headers(parts.headers),
        response,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderMap;
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    #[tokio::test]
    async fn client_http_error_bytes() -> TestResult {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(400)
            .body(r#"{"error": "bad request"}"#)?;
        let response: reqwest::Response = http_resp.into();
        assert!(response.status().is_client_error());
        let err = match super::to_http_error::<()>(response).await {
            Ok(v) => anyhow::bail!("expected an error, got {v:?}"),
            Err(e) => e,
        };
        assert_eq!(err.http_status_code(), Some(400));
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("application/json"));
        assert_eq!(err.http_headers(), Some(&want));
        assert_eq!(
            err.http_payload(),
            Some(bytes::Bytes::from(r#"{"error": "bad request"}"#)).as_ref()
        );
        Ok(())
    }

    #[tokio::test]
    async fn client_error_with_status() -> TestResult {
        use gax::error::rpc::{Code, Status};
        let details = serde_json::json!({
            "@type": "type.googleapis.com/google.rpc.LocalizedMessage",
            "locale": "en-US",
            "message": "we searched everywhere, honest",
        });
        let body = serde_json::json!({"error": {
            "code": 404,
            "message": "The agent is not there, oh noes!",
            "status": "NOT_FOUND",
            "details": [details.clone()]
        }});
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(404)
            .body(body.to_string())?;
        let response: reqwest::Response = http_resp.into();
        let err = match super::to_http_error::<()>(response).await {
            Ok(v) => anyhow::bail!("expected an error, got {v:?}"),
            Err(e) => e,
        };
        let want_status = Status::default()
            .set_code(Code::NotFound)
            .set_message("The agent is not there, oh noes!")
            .set_details([details]);
        assert_eq!(err.status(), Some(&want_status));
        assert_eq!(err.http_status_code(), Some(404_u16));
        assert!(err.http_payload().is_none(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    #[test_case(reqwest::StatusCode::OK, "{}"; "200 with empty object")]
    #[test_case(reqwest::StatusCode::NO_CONTENT, "{}"; "204 with empty object")]
    #[test_case(reqwest::StatusCode::NO_CONTENT, ""; "204 with empty content")]
    async fn client_empty_content(code: reqwest::StatusCode, content: &str) -> TestResult {
        let response = resp_from_code_content(code, content)?;
        assert!(response.status().is_success());

        let response = super::to_http_response::<wkt::Empty>(response).await?;
        assert_eq!(response.into_body(), wkt::Empty::default());
        Ok(())
    }

    #[tokio::test]
    #[test_case(reqwest::StatusCode::OK, ""; "200 with empty content")]
    #[test_case(reqwest::StatusCode::OK, "<html>"; "200 with html")]
    async fn client_error_with_bad_content(
        code: reqwest::StatusCode,
        content: &str,
    ) -> TestResult {
        let response = resp_from_code_content(code, content)?;
        assert!(response.status().is_success());

        let response = super::to_http_response::<wkt::Empty>(response).await;
        assert!(
            matches!(&response, Err(e) if e.is_deserialization()),
            "{response:?}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn client_response_headers() -> TestResult {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .header("x-goog-request-id", "abc-123")
            .status(200)
            .body(r#"{"name": "projects/p/locations/l/agents/a"}"#.to_string())?;
        let response = super::to_http_response::<serde_json::Value>(http_resp.into()).await?;
        assert_eq!(
            response.headers().get("x-goog-request-id"),
            Some(&HeaderValue::from_static("abc-123"))
        );
        assert_eq!(
            response.body(),
            &serde_json::json!({"name": "projects/p/locations/l/agents/a"})
        );
        Ok(())
    }

    fn resp_from_code_content(
        code: reqwest::StatusCode,
        content: &str,
    ) -> http::Result<reqwest::Response> {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(code)
            .body(content.to_string())?;

        let response: reqwest::Response = http_resp.into();
        Ok(response)
    }
}
