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

//! Types to authenticate requests.
//!
//! The client library does not acquire or refresh credentials. Applications
//! supply a [CredentialsProvider] when creating a client, and the client asks
//! the provider for the authentication headers before sending each request.
//!
//! # Example
//! ```
//! # use dialogflow_cx_gax::credentials::{AccessTokenCredentials, Credentials};
//! # tokio_test::block_on(async {
//! let credentials = Credentials::from(AccessTokenCredentials::new("ya29.test-only"));
//! let headers = credentials.headers().await?;
//! assert_eq!(headers.get(http::header::AUTHORIZATION).map(|v| v.as_bytes()), Some(b"Bearer ya29.test-only".as_slice()));
//! # Ok::<(), anyhow::Error>(()) });
//! ```

use crate::error::CredentialsError;
use http::{HeaderMap, HeaderValue};
use std::sync::Arc;

/// The seam between the client library and the source of credentials.
///
/// Implementations return the headers attached to every request, typically
/// an `authorization` header with an OAuth2 access token. Implementations
/// that cache and refresh tokens should return transient
/// [CredentialsError]s for failures that may succeed on a later attempt.
#[async_trait::async_trait]
pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
    /// Returns the headers to attach to the next request.
    async fn headers(&self) -> Result<HeaderMap, CredentialsError>;
}

/// The credentials used by a client.
///
/// This is a cheap to clone handle around an application-supplied
/// [CredentialsProvider].
#[derive(Clone, Debug)]
pub struct Credentials {
    // Clients are `Clone + Send + Sync`, and share the provider across all
    // requests.
    inner: Arc<dyn CredentialsProvider>,
}

impl<T> From<T> for Credentials
where
    T: CredentialsProvider + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns the headers to attach to the next request.
    pub async fn headers(&self) -> Result<HeaderMap, CredentialsError> {
        self.inner.headers().await
    }
}

/// Credentials backed by an access token obtained by the application.
///
/// The token is sent as-is in the `authorization` header. This type never
/// refreshes the token, applications must create a new client (or provide
/// their own [CredentialsProvider]) once the token expires.
#[derive(Clone)]
pub struct AccessTokenCredentials {
    token: String,
}

impl AccessTokenCredentials {
    /// Creates credentials for a bearer `token`.
    pub fn new<T: Into<String>>(token: T) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for AccessTokenCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessTokenCredentials")
            .field("token", &"[censored]")
            .finish()
    }
}

#[async_trait::async_trait]
impl CredentialsProvider for AccessTokenCredentials {
    async fn headers(&self) -> Result<HeaderMap, CredentialsError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|e| CredentialsError::new(false, "invalid access token", e))?;
        value.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(http::header::AUTHORIZATION, value);
        Ok(headers)
    }
}

/// Credentials that add no headers.
///
/// Useful with local emulators and test servers.
#[derive(Clone, Debug, Default)]
pub struct AnonymousCredentials;

impl AnonymousCredentials {
    /// Creates anonymous credentials.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl CredentialsProvider for AnonymousCredentials {
    async fn headers(&self) -> Result<HeaderMap, CredentialsError> {
        Ok(HeaderMap::new())
    }
}
