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

use std::collections::HashMap;

/// Webhooks host the developer's business logic.
///
/// During a session, webhooks allow the developer to use the data extracted
/// by Dialogflow's natural language processing to generate dynamic
/// responses, validate collected data, or trigger actions on the backend.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Webhook {
    /// The unique identifier of the webhook, in the
    /// `projects/{p}/locations/{l}/agents/{a}/webhooks/{w}` format.
    pub name: Option<String>,

    /// Required. The human-readable name of the webhook, unique within the
    /// agent.
    pub display_name: Option<String>,

    /// Configuration for a generic web service.
    pub generic_web_service: Option<webhook::GenericWebService>,

    /// Configuration for a [Service Directory] service.
    ///
    /// [Service Directory]: https://cloud.google.com/service-directory
    pub service_directory: Option<webhook::ServiceDirectoryConfig>,

    /// Webhook execution timeout. Execution is considered failed if
    /// Dialogflow doesn't receive a response from webhook at the end of the
    /// timeout period.
    pub timeout: Option<wkt::Duration>,

    /// Indicates whether the webhook is disabled.
    pub disabled: Option<bool>,
}

impl Webhook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Webhook::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [display_name][Webhook::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [generic_web_service][Webhook::generic_web_service].
    pub fn set_generic_web_service<T: Into<webhook::GenericWebService>>(mut self, v: T) -> Self {
        self.generic_web_service = Some(v.into());
        self
    }

    /// Sets the value of [service_directory][Webhook::service_directory].
    pub fn set_service_directory<T: Into<webhook::ServiceDirectoryConfig>>(
        mut self,
        v: T,
    ) -> Self {
        self.service_directory = Some(v.into());
        self
    }

    /// Sets the value of [timeout][Webhook::timeout].
    pub fn set_timeout<T: Into<wkt::Duration>>(mut self, v: T) -> Self {
        self.timeout = Some(v.into());
        self
    }

    /// Sets the value of [disabled][Webhook::disabled].
    pub fn set_disabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.disabled = Some(v.into());
        self
    }
}

/// Defines additional types related to [Webhook].
pub mod webhook {
    use super::*;

    /// Represents configuration for a generic web service.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct GenericWebService {
        /// Required. The webhook URI for receiving POST requests. It must use
        /// https protocol.
        pub uri: Option<String>,

        /// The user name for HTTP Basic authentication.
        pub username: Option<String>,

        /// The password for HTTP Basic authentication.
        pub password: Option<String>,

        /// The HTTP request headers to send together with webhook requests.
        pub request_headers: Option<HashMap<String, String>>,

        /// Optional. Specifies a list of allowed custom CA certificates (in
        /// DER format) for HTTPS verification.
        #[serde_as(as = "Option<Vec<wkt::internal::Base64>>")]
        pub allowed_ca_certs: Option<Vec<bytes::Bytes>>,

        /// Optional. The OAuth configuration of the webhook.
        pub oauth_config: Option<generic_web_service::OAuthConfig>,

        /// Optional. Indicate the auth token type generated from the
        /// Diglogflow service agent, e.g. `ID_TOKEN`.
        pub service_agent_auth: Option<String>,

        /// Optional. Type of the webhook, e.g. `STANDARD` or `FLEXIBLE`.
        pub webhook_type: Option<String>,

        /// Optional. HTTP method for the flexible webhook calls.
        pub http_method: Option<String>,

        /// Optional. Defines a custom JSON object as request body to send to
        /// flexible webhook.
        pub request_body: Option<String>,

        /// Optional. Maps the values extracted from specific fields of the
        /// flexible webhook response into session parameters.
        pub parameter_mapping: Option<HashMap<String, String>>,
    }

    impl GenericWebService {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value of [uri][GenericWebService::uri].
        pub fn set_uri<T: Into<String>>(mut self, v: T) -> Self {
            self.uri = Some(v.into());
            self
        }

        /// Sets the value of [request_headers][GenericWebService::request_headers].
        pub fn set_request_headers<T, K, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = (K, V)>,
            K: Into<String>,
            V: Into<String>,
        {
            self.request_headers = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
            self
        }

        /// Sets the value of [allowed_ca_certs][GenericWebService::allowed_ca_certs].
        ///
        /// # Example
        /// ```
        /// # use dialogflow_cx_v3::model::webhook::GenericWebService;
        /// let service = GenericWebService::new()
        ///     .set_uri("https://example.com/webhook")
        ///     .set_allowed_ca_certs([bytes::Bytes::from_static(b"\x30\x82")]);
        /// let value = serde_json::to_value(&service)?;
        /// assert_eq!(value["allowedCaCerts"], serde_json::json!(["MII="]));
        /// # anyhow::Ok(())
        /// ```
        pub fn set_allowed_ca_certs<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<bytes::Bytes>,
        {
            self.allowed_ca_certs = Some(v.into_iter().map(|i| i.into()).collect());
            self
        }

        /// Sets the value of [oauth_config][GenericWebService::oauth_config].
        pub fn set_oauth_config<T: Into<generic_web_service::OAuthConfig>>(
            mut self,
            v: T,
        ) -> Self {
            self.oauth_config = Some(v.into());
            self
        }
    }

    /// Defines additional types related to [GenericWebService].
    pub mod generic_web_service {
        /// Represents configuration of OAuth client credential flow for 3rd
        /// party API authentication.
        #[serde_with::serde_as]
        #[serde_with::skip_serializing_none]
        #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct OAuthConfig {
            /// Required. The client ID provided by the 3rd party platform.
            pub client_id: Option<String>,
            /// Optional. The client secret provided by the 3rd party
            /// platform.
            pub client_secret: Option<String>,
            /// Required. The token endpoint provided by the 3rd party
            /// platform to exchange an access token.
            pub token_endpoint: Option<String>,
            /// Optional. The OAuth scopes to grant.
            pub scopes: Option<Vec<String>>,
        }

        impl OAuthConfig {
            pub fn new() -> Self {
                Self::default()
            }

            /// Sets the value of [client_id][OAuthConfig::client_id].
            pub fn set_client_id<T: Into<String>>(mut self, v: T) -> Self {
                self.client_id = Some(v.into());
                self
            }

            /// Sets the value of [token_endpoint][OAuthConfig::token_endpoint].
            pub fn set_token_endpoint<T: Into<String>>(mut self, v: T) -> Self {
                self.token_endpoint = Some(v.into());
                self
            }
        }
    }

    /// Represents configuration for a Service Directory service.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct ServiceDirectoryConfig {
        /// Required. The name of Service Directory service.
        pub service: Option<String>,

        /// Generic Service configuration of this webhook.
        pub generic_web_service: Option<GenericWebService>,
    }

    impl ServiceDirectoryConfig {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value of [service][ServiceDirectoryConfig::service].
        pub fn set_service<T: Into<String>>(mut self, v: T) -> Self {
            self.service = Some(v.into());
            self
        }

        /// Sets the value of [generic_web_service][ServiceDirectoryConfig::generic_web_service].
        pub fn set_generic_web_service<T: Into<GenericWebService>>(mut self, v: T) -> Self {
            self.generic_web_service = Some(v.into());
            self
        }
    }
}

/// The response of [Webhooks::list_webhooks][crate::client::Webhooks::list_webhooks].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListWebhooksResponse {
    pub webhooks: Option<Vec<Webhook>>,
    pub next_page_token: Option<String>,
}
