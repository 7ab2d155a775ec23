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

use crate::model;
use crate::transport::Transport;
use gax::Result;
use std::sync::Arc;

/// Manages [Agent][model::Agent] resources.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use dialogflow_cx_v3::client::Dialogflow;
/// # use dialogflow_cx_v3::model::ListOptions;
/// # use gax::credentials::AccessTokenCredentials;
/// let client = Dialogflow::builder()
///     .with_credentials(AccessTokenCredentials::new("ya29.test-only"))
///     .build()
///     .await?;
/// let response = client
///     .agents()
///     .list_agents("projects/my-project/locations/global", ListOptions::new().set_page_size(10))
///     .await?;
/// for agent in response.agents.unwrap_or_default() {
///     println!("{agent:?}");
/// }
/// # anyhow::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct Agents {
    inner: Arc<Transport>,
}

impl Agents {
    pub(crate) fn new(inner: Arc<Transport>) -> Self {
        Self { inner }
    }

    /// Returns the list of all agents in the specified location.
    ///
    /// `parent` is the location, in the `projects/{p}/locations/{l}` format.
    pub async fn list_agents(
        &self,
        parent: &str,
        options: model::ListOptions,
    ) -> Result<model::ListAgentsResponse> {
        self.inner.get(&format!("{parent}/agents"), &options).await
    }

    /// Retrieves the specified agent.
    pub async fn get_agent(&self, name: &str) -> Result<model::Agent> {
        self.inner.get(name, &()).await
    }

    /// Creates an agent in the specified location.
    ///
    /// You should always train flows prior to sending them queries.
    pub async fn create_agent(&self, parent: &str, agent: model::Agent) -> Result<model::Agent> {
        self.inner.post(&format!("{parent}/agents"), agent).await
    }

    /// Updates the specified agent.
    ///
    /// Only the fields named in the update mask are changed. Without a mask
    /// all the fields are updated.
    pub async fn update_agent(
        &self,
        name: &str,
        agent: model::Agent,
        options: model::UpdateOptions,
    ) -> Result<model::Agent> {
        self.inner.patch(name, &options, agent).await
    }

    /// Deletes the specified agent.
    pub async fn delete_agent(&self, name: &str) -> Result<wkt::Empty> {
        self.inner.delete(name, &()).await
    }

    /// Exports the specified agent to a binary file.
    ///
    /// Returns a long-running operation. On completion its response is an
    /// [ExportAgentResponse][model::ExportAgentResponse].
    pub async fn export_agent(
        &self,
        name: &str,
        request: model::ExportAgentRequest,
    ) -> Result<model::Operation> {
        self.inner.post(&format!("{name}:export"), request).await
    }

    /// Restores the specified agent from a binary file.
    ///
    /// Replaces the current agent with a new one. All existing resources in
    /// the agent are replaced. The returned operation has an empty response.
    pub async fn restore_agent(
        &self,
        name: &str,
        request: model::RestoreAgentRequest,
    ) -> Result<model::Operation> {
        self.inner.post(&format!("{name}:restore"), request).await
    }

    /// Validates the specified agent and creates or updates validation
    /// results.
    pub async fn validate_agent(
        &self,
        name: &str,
        request: model::ValidateAgentRequest,
    ) -> Result<model::AgentValidationResult> {
        self.inner.post(&format!("{name}:validate"), request).await
    }

    /// Gets the latest agent validation result.
    ///
    /// `name` is the validation result, in the
    /// `projects/{p}/locations/{l}/agents/{a}/validationResult` format.
    pub async fn get_agent_validation_result(
        &self,
        name: &str,
        options: model::LanguageOptions,
    ) -> Result<model::AgentValidationResult> {
        self.inner.get(name, &options).await
    }

    /// Gets the generative settings for the agent.
    ///
    /// `name` is in the
    /// `projects/{p}/locations/{l}/agents/{a}/generativeSettings` format.
    pub async fn get_generative_settings(
        &self,
        name: &str,
        options: model::LanguageOptions,
    ) -> Result<model::GenerativeSettings> {
        self.inner.get(name, &options).await
    }

    /// Updates the generative settings for the agent.
    pub async fn update_generative_settings(
        &self,
        name: &str,
        settings: model::GenerativeSettings,
        options: model::UpdateOptions,
    ) -> Result<model::GenerativeSettings> {
        self.inner.patch(name, &options, settings).await
    }
}
