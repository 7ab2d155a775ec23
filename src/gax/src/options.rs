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

//! Client configuration.
//!
//! Applications rarely use these types directly, the client builder in
//! [client_builder][crate::client_builder] populates them.

use crate::credentials::Credentials;

/// Configure a client.
///
/// The default configuration uses the service default endpoint and disables
/// tracing. There are no default credentials, the application must always
/// provide them.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct ClientConfig {
    /// Overrides the default endpoint, e.g. for regional agents.
    pub endpoint: Option<String>,
    /// The credentials used to authenticate each request.
    pub cred: Option<Credentials>,
    /// Enables tracing of each request.
    pub tracing: bool,
    /// The value sent in the `user-agent` header.
    ///
    /// When set, it replaces the default `user-agent` header sent by the
    /// HTTP client.
    pub user_agent: Option<String>,
    /// The maximum time for each request, including reading the response.
    pub attempt_timeout: Option<std::time::Duration>,
}

/// Set this environment variable to `true` to enable tracing in all clients.
pub const LOGGING_VAR: &str = "DIALOGFLOW_CX_RUST_LOGGING";

impl ClientConfig {
    /// Returns a default [ClientConfig].
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if tracing is enabled, either in the configuration or via
    /// the environment.
    pub fn tracing_enabled(&self) -> bool {
        if self.tracing {
            return true;
        }
        std::env::var(LOGGING_VAR)
            .map(|v| v == "true")
            .unwrap_or(false)
    }

    /// Sets an endpoint that overrides the default endpoint.
    pub fn set_endpoint<T: Into<String>>(mut self, v: T) -> Self {
        self.endpoint = Some(v.into());
        self
    }

    /// Enables tracing.
    pub fn enable_tracing(mut self) -> Self {
        self.tracing = true;
        self
    }

    /// Disables tracing.
    pub fn disable_tracing(mut self) -> Self {
        self.tracing = false;
        self
    }

    /// Configures the authentication credentials.
    pub fn set_credential<T: Into<Option<Credentials>>>(mut self, v: T) -> Self {
        self.cred = v.into();
        self
    }

    /// Sets the value of the `user-agent` header.
    pub fn set_user_agent<T: Into<String>>(mut self, v: T) -> Self {
        self.user_agent = Some(v.into());
        self
    }

    /// Sets the attempt timeout.
    pub fn set_attempt_timeout<T: Into<std::time::Duration>>(mut self, v: T) -> Self {
        self.attempt_timeout = Some(v.into());
        self
    }
}
