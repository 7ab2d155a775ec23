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

/// Reads the [Deployment][model::Deployment] history of an environment.
#[derive(Clone, Debug)]
pub struct Deployments {
    inner: Arc<Transport>,
}

impl Deployments {
    pub(crate) fn new(inner: Arc<Transport>) -> Self {
        Self { inner }
    }

    /// Returns the list of all deployments in the specified environment.
    pub async fn list_deployments(
        &self,
        parent: &str,
        options: model::ListOptions,
    ) -> Result<model::ListDeploymentsResponse> {
        self.inner
            .get(&format!("{parent}/deployments"), &options)
            .await
    }

    /// Retrieves the specified deployment.
    pub async fn get_deployment(&self, name: &str) -> Result<model::Deployment> {
        self.inner.get(name, &()).await
    }
}
