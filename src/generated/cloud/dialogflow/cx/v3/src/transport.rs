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

use crate::info;
use gax::Result;
use gaxi::http::ReqwestClient;
use reqwest::Method;
use reqwest::header::HeaderValue;

/// Issues the requests for all the views.
///
/// Paths are relative to `{endpoint}/v3/`, resource names are substituted
/// verbatim.
#[derive(Clone, Debug)]
pub(crate) struct Transport {
    inner: ReqwestClient,
}

impl Transport {
    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = ReqwestClient::new(config, crate::DEFAULT_HOST)
            .await?
            .with_instrumentation(&info::INSTRUMENTATION_CLIENT_INFO);
        Ok(Self { inner })
    }

    pub(crate) async fn call<Q, I, O>(
        &self,
        method: Method,
        path: &str,
        query: &Q,
        body: Option<I>,
    ) -> Result<O>
    where
        Q: serde::ser::Serialize,
        I: serde::ser::Serialize,
        O: serde::de::DeserializeOwned + Default,
    {
        let builder = self
            .inner
            .builder(method, format!("/v3/{path}"))
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                HeaderValue::from_static(&info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add_options(builder, query)?;
        self.inner
            .execute(builder, body)
            .await
            .map(gax::response::Response::into_body)
    }

    pub(crate) async fn get<Q, O>(&self, path: &str, query: &Q) -> Result<O>
    where
        Q: serde::ser::Serialize,
        O: serde::de::DeserializeOwned + Default,
    {
        self.call(Method::GET, path, query, None::<gaxi::http::NoBody>)
            .await
    }

    pub(crate) async fn post<I, O>(&self, path: &str, body: I) -> Result<O>
    where
        I: serde::ser::Serialize,
        O: serde::de::DeserializeOwned + Default,
    {
        self.call(Method::POST, path, &(), Some(body)).await
    }

    pub(crate) async fn post_with_options<Q, I, O>(
        &self,
        path: &str,
        query: &Q,
        body: I,
    ) -> Result<O>
    where
        Q: serde::ser::Serialize,
        I: serde::ser::Serialize,
        O: serde::de::DeserializeOwned + Default,
    {
        self.call(Method::POST, path, query, Some(body)).await
    }

    pub(crate) async fn patch<Q, I, O>(&self, path: &str, query: &Q, body: I) -> Result<O>
    where
        Q: serde::ser::Serialize,
        I: serde::ser::Serialize,
        O: serde::de::DeserializeOwned + Default,
    {
        self.call(Method::PATCH, path, query, Some(body)).await
    }

    pub(crate) async fn delete<Q>(&self, path: &str, query: &Q) -> Result<wkt::Empty>
    where
        Q: serde::ser::Serialize,
    {
        self.call(Method::DELETE, path, query, None::<gaxi::http::NoBody>)
            .await
    }
}
