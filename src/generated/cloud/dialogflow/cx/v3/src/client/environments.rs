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

/// Manages [Environment][model::Environment] resources and the continuous
/// tests that run in them.
#[derive(Clone, Debug)]
pub struct Environments {
    inner: Arc<Transport>,
}

impl Environments {
    pub(crate) fn new(inner: Arc<Transport>) -> Self {
        Self { inner }
    }

    /// Returns the list of all environments in the specified agent.
    pub async fn list_environments(
        &self,
        parent: &str,
        options: model::ListOptions,
    ) -> Result<model::ListEnvironmentsResponse> {
        self.inner
            .get(&format!("{parent}/environments"), &options)
            .await
    }

    /// Retrieves the specified environment.
    pub async fn get_environment(&self, name: &str) -> Result<model::Environment> {
        self.inner.get(name, &()).await
    }

    /// Creates an environment in the specified agent.
    ///
    /// On completion the operation response is the new
    /// [Environment][model::Environment].
    pub async fn create_environment(
        &self,
        parent: &str,
        environment: model::Environment,
    ) -> Result<model::Operation> {
        self.inner
            .post(&format!("{parent}/environments"), environment)
            .await
    }

    /// Updates the specified environment.
    pub async fn update_environment(
        &self,
        name: &str,
        environment: model::Environment,
        options: model::UpdateOptions,
    ) -> Result<model::Operation> {
        self.inner.patch(name, &options, environment).await
    }

    /// Deletes the specified environment.
    pub async fn delete_environment(&self, name: &str) -> Result<wkt::Empty> {
        self.inner.delete(name, &()).await
    }

    /// Looks up the history of the specified environment.
    pub async fn lookup_environment_history(
        &self,
        name: &str,
        options: model::ListOptions,
    ) -> Result<model::LookupEnvironmentHistoryResponse> {
        self.inner
            .get(&format!("{name}:lookupEnvironmentHistory"), &options)
            .await
    }

    /// Kicks off a continuous test under the specified environment.
    ///
    /// On completion the operation response is a
    /// [RunContinuousTestResponse][model::RunContinuousTestResponse].
    pub async fn run_continuous_test(
        &self,
        environment: &str,
        request: model::RunContinuousTestRequest,
    ) -> Result<model::Operation> {
        self.inner
            .post(&format!("{environment}:runContinuousTest"), request)
            .await
    }

    /// Fetches a list of continuous test results for a given environment.
    pub async fn list_continuous_test_results(
        &self,
        parent: &str,
        options: model::ListOptions,
    ) -> Result<model::ListContinuousTestResultsResponse> {
        self.inner
            .get(&format!("{parent}/continuousTestResults"), &options)
            .await
    }

    /// Deploys a flow to the specified environment.
    ///
    /// On completion the operation response is a
    /// [DeployFlowResponse][model::DeployFlowResponse].
    pub async fn deploy_flow(
        &self,
        environment: &str,
        request: model::DeployFlowRequest,
    ) -> Result<model::Operation> {
        self.inner
            .post(&format!("{environment}:deployFlow"), request)
            .await
    }
}
