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

/// Manages [Flow][model::Flow] resources.
#[derive(Clone, Debug)]
pub struct Flows {
    inner: Arc<Transport>,
}

impl Flows {
    pub(crate) fn new(inner: Arc<Transport>) -> Self {
        Self { inner }
    }

    /// Returns the list of all flows in the specified agent.
    pub async fn list_flows(
        &self,
        parent: &str,
        options: model::LocalizedListOptions,
    ) -> Result<model::ListFlowsResponse> {
        self.inner.get(&format!("{parent}/flows"), &options).await
    }

    /// Retrieves the specified flow.
    pub async fn get_flow(&self, name: &str, options: model::LanguageOptions) -> Result<model::Flow> {
        self.inner.get(name, &options).await
    }

    /// Creates a flow in the specified agent.
    pub async fn create_flow(
        &self,
        parent: &str,
        flow: model::Flow,
        options: model::LanguageOptions,
    ) -> Result<model::Flow> {
        self.inner
            .post_with_options(&format!("{parent}/flows"), &options, flow)
            .await
    }

    /// Updates the specified flow.
    pub async fn update_flow(
        &self,
        name: &str,
        flow: model::Flow,
        options: model::LocalizedUpdateOptions,
    ) -> Result<model::Flow> {
        self.inner.patch(name, &options, flow).await
    }

    /// Deletes a specified flow.
    pub async fn delete_flow(&self, name: &str, options: model::DeleteOptions) -> Result<wkt::Empty> {
        self.inner.delete(name, &options).await
    }

    /// Trains the specified flow. Note that only the flow in the draft
    /// environment is trained.
    ///
    /// The returned operation has an empty response.
    pub async fn train_flow(&self, name: &str) -> Result<model::Operation> {
        self.inner
            .post(&format!("{name}:train"), wkt::Empty::default())
            .await
    }

    /// Validates the specified flow and creates or updates validation
    /// results.
    pub async fn validate_flow(
        &self,
        name: &str,
        request: model::ValidateFlowRequest,
    ) -> Result<model::FlowValidationResult> {
        self.inner.post(&format!("{name}:validate"), request).await
    }

    /// Gets the latest flow validation result.
    ///
    /// `name` is in the
    /// `projects/{p}/locations/{l}/agents/{a}/flows/{f}/validationResult`
    /// format.
    pub async fn get_flow_validation_result(
        &self,
        name: &str,
        options: model::LanguageOptions,
    ) -> Result<model::FlowValidationResult> {
        self.inner.get(name, &options).await
    }

    /// Imports the specified flow to the specified agent from a binary file.
    ///
    /// On completion the operation response is an
    /// [ImportFlowResponse][model::ImportFlowResponse].
    pub async fn import_flow(
        &self,
        parent: &str,
        request: model::ImportFlowRequest,
    ) -> Result<model::Operation> {
        self.inner
            .post(&format!("{parent}/flows:import"), request)
            .await
    }

    /// Exports the specified flow to a binary file.
    ///
    /// On completion the operation response is an
    /// [ExportFlowResponse][model::ExportFlowResponse].
    pub async fn export_flow(
        &self,
        name: &str,
        request: model::ExportFlowRequest,
    ) -> Result<model::Operation> {
        self.inner.post(&format!("{name}:export"), request).await
    }
}
