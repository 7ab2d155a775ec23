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

use crate::transport::Transport;
use std::sync::Arc;

mod agents;
mod changelogs;
mod deployments;
mod entity_types;
mod environments;
mod experiments;
mod flows;
mod generators;
mod intents;
mod locations;
mod operations;
mod pages;
mod security_settings;
mod session_entity_types;
mod sessions;
mod test_cases;
mod transition_route_groups;
mod versions;
mod webhooks;

pub use agents::Agents;
pub use changelogs::Changelogs;
pub use deployments::Deployments;
pub use entity_types::EntityTypes;
pub use environments::Environments;
pub use experiments::Experiments;
pub use flows::Flows;
pub use generators::Generators;
pub use intents::Intents;
pub use locations::Locations;
pub use operations::Operations;
pub use pages::Pages;
pub use security_settings::SecuritySettingsService;
pub use session_entity_types::SessionEntityTypes;
pub use sessions::Sessions;
pub use test_cases::TestCases;
pub use transition_route_groups::TransitionRouteGroups;
pub use versions::Versions;
pub use webhooks::Webhooks;

/// A builder for [Dialogflow].
///
/// ```
/// # tokio_test::block_on(async {
/// # use dialogflow_cx_v3::client::Dialogflow;
/// # use gax::credentials::AccessTokenCredentials;
/// let builder = Dialogflow::builder();
/// let client = builder
///     .with_endpoint("https://europe-west1-dialogflow.googleapis.com")
///     .with_credentials(AccessTokenCredentials::new("ya29.test-only"))
///     .build()
///     .await?;
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
pub type ClientBuilder = gax::client_builder::ClientBuilder<client_builder::Factory>;

pub(crate) mod client_builder {
    use super::Dialogflow;

    pub struct Factory;
    impl gax::client_builder::internal::ClientFactory for Factory {
        type Client = Dialogflow;
        async fn build(
            self,
            config: gaxi::options::ClientConfig,
        ) -> gax::client_builder::Result<Self::Client> {
            Self::Client::new(config).await
        }
    }
}

/// Implements a client for the Dialogflow CX API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use dialogflow_cx_v3::client::Dialogflow;
/// # use dialogflow_cx_v3::model::ListOptions;
/// # use gax::credentials::AccessTokenCredentials;
/// let client = Dialogflow::builder()
///     .with_credentials(AccessTokenCredentials::new("ya29.test-only"))
///     .build()
///     .await?;
/// let agents = client.agents();
/// // use `agents` to make requests, e.g.
/// // agents.list_agents("projects/my-project/locations/global", ListOptions::new()).await?;
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Dialogflow CX is a conversational AI service. The API manages the
/// resources of an agent (flows, pages, intents, entity types, webhooks, test
/// cases and more) and runs conversations through sessions.
///
/// The client exposes one view per resource type. Views are cheap to create
/// and to clone, they all share the client's connection pool and
/// credentials.
///
/// # Configuration
///
/// To configure `Dialogflow` use the `with_*` methods in the type returned
/// by [builder()][Dialogflow::builder]. Applications must provide
/// credentials, this library does not discover them. Agents outside the
/// `global` location must use a regional endpoint, see
/// [with_endpoint()][gax::client_builder::ClientBuilder::with_endpoint].
///
/// # Pooling and Cloning
///
/// `Dialogflow` holds a connection pool internally, it is advised to create
/// one and then reuse it. You do not need to wrap `Dialogflow` in an
/// [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
#[derive(Clone, Debug)]
pub struct Dialogflow {
    inner: Arc<Transport>,
}

impl Dialogflow {
    /// Returns a builder for [Dialogflow].
    pub fn builder() -> ClientBuilder {
        gax::client_builder::internal::new_builder(client_builder::Factory)
    }

    async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = Transport::new(config).await?;
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Returns a view to manage [Location][crate::model::Location] resources.
    pub fn locations(&self) -> Locations {
        Locations::new(self.inner.clone())
    }

    /// Returns a view to query and cancel long-running operations.
    pub fn operations(&self) -> Operations {
        Operations::new(self.inner.clone())
    }

    /// Returns a view to manage [Agent][crate::model::Agent] resources.
    pub fn agents(&self) -> Agents {
        Agents::new(self.inner.clone())
    }

    /// Returns a view to read [Changelog][crate::model::Changelog] resources.
    pub fn changelogs(&self) -> Changelogs {
        Changelogs::new(self.inner.clone())
    }

    /// Returns a view to manage [EntityType][crate::model::EntityType] resources.
    pub fn entity_types(&self) -> EntityTypes {
        EntityTypes::new(self.inner.clone())
    }

    /// Returns a view to manage [Environment][crate::model::Environment] resources.
    pub fn environments(&self) -> Environments {
        Environments::new(self.inner.clone())
    }

    /// Returns a view to read [Deployment][crate::model::Deployment] resources.
    pub fn deployments(&self) -> Deployments {
        Deployments::new(self.inner.clone())
    }

    /// Returns a view to manage [Experiment][crate::model::Experiment] resources.
    pub fn experiments(&self) -> Experiments {
        Experiments::new(self.inner.clone())
    }

    /// Returns a view to manage [Flow][crate::model::Flow] resources.
    pub fn flows(&self) -> Flows {
        Flows::new(self.inner.clone())
    }

    /// Returns a view to manage [Page][crate::model::Page] resources.
    pub fn pages(&self) -> Pages {
        Pages::new(self.inner.clone())
    }

    /// Returns a view to manage
    /// [TransitionRouteGroup][crate::model::TransitionRouteGroup] resources.
    pub fn transition_route_groups(&self) -> TransitionRouteGroups {
        TransitionRouteGroups::new(self.inner.clone())
    }

    /// Returns a view to manage [Version][crate::model::Version] resources.
    pub fn versions(&self) -> Versions {
        Versions::new(self.inner.clone())
    }

    /// Returns a view to manage [Generator][crate::model::Generator] resources.
    pub fn generators(&self) -> Generators {
        Generators::new(self.inner.clone())
    }

    /// Returns a view to manage [Intent][crate::model::Intent] resources.
    pub fn intents(&self) -> Intents {
        Intents::new(self.inner.clone())
    }

    /// Returns a view to run conversations.
    pub fn sessions(&self) -> Sessions {
        Sessions::new(self.inner.clone())
    }

    /// Returns a view to manage
    /// [SessionEntityType][crate::model::SessionEntityType] resources.
    pub fn session_entity_types(&self) -> SessionEntityTypes {
        SessionEntityTypes::new(self.inner.clone())
    }

    /// Returns a view to manage [TestCase][crate::model::TestCase] resources
    /// and their results.
    pub fn test_cases(&self) -> TestCases {
        TestCases::new(self.inner.clone())
    }

    /// Returns a view to manage [Webhook][crate::model::Webhook] resources.
    pub fn webhooks(&self) -> Webhooks {
        Webhooks::new(self.inner.clone())
    }

    /// Returns a view to manage
    /// [SecuritySettings][crate::model::SecuritySettings] resources.
    pub fn security_settings(&self) -> SecuritySettingsService {
        SecuritySettingsService::new(self.inner.clone())
    }
}
