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

//! Dialogflow CX API v3 client library.
//!
//! This crate contains the types and a client for the [Dialogflow CX] REST
//! API. Create a [client::Dialogflow] once and use the per-resource views it
//! returns, for example [agents()][client::Dialogflow::agents] or
//! [sessions()][client::Dialogflow::sessions], to make requests.
//!
//! # Example
//! ```no_run
//! # use dialogflow_cx_v3::client::Dialogflow;
//! # use dialogflow_cx_v3::model::{DetectIntentRequest, QueryInput, TextInput};
//! # use gax::credentials::AccessTokenCredentials;
//! # tokio_test::block_on(async {
//! let client = Dialogflow::builder()
//!     .with_credentials(AccessTokenCredentials::new("ya29.test-only"))
//!     .build()
//!     .await?;
//! let request = DetectIntentRequest::new().set_query_input(
//!     QueryInput::new()
//!         .set_language_code("en")
//!         .set_text(TextInput::new().set_text("book a table for two")),
//! );
//! let response = client
//!     .sessions()
//!     .detect_intent(
//!         "projects/my-project/locations/global/agents/my-agent/sessions/my-session",
//!         request,
//!     )
//!     .await?;
//! println!("{response:?}");
//! # anyhow::Ok(()) });
//! ```
//!
//! The client never polls long-running operations. Methods like
//! [export_agent()][client::Agents::export_agent] return the
//! [model::Operation] as sent by the service.
//!
//! [Dialogflow CX]: https://cloud.google.com/dialogflow/cx/docs

/// The messages and enums that are part of this client library.
pub mod model;

/// The client and its per-resource views.
pub mod client;

pub mod wire;

pub(crate) mod transport;

/// The default endpoint, used by agents in the `global` location.
pub const DEFAULT_HOST: &str = "https://dialogflow.googleapis.com";

pub(crate) mod info {
    const NAME: &str = env!("CARGO_PKG_NAME");
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    lazy_static::lazy_static! {
        pub(crate) static ref X_GOOG_API_CLIENT_HEADER: String = {
            let ac = gaxi::api_header::XGoogApiClient{
                name:          NAME,
                version:       VERSION,
                library_type:  gaxi::api_header::GCCL,
            };
            ac.rest_header_value()
        };
    }

    pub(crate) static INSTRUMENTATION_CLIENT_INFO: gaxi::options::InstrumentationClientInfo =
        gaxi::options::InstrumentationClientInfo {
            service_name: "dialogflow",
            client_version: VERSION,
            client_artifact: NAME,
            default_host: "dialogflow",
        };
}
