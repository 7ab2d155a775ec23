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

/// Manages [Experiment][model::Experiment] resources.
#[derive(Clone, Debug)]
pub struct Experiments {
    inner: Arc<Transport>,
}

impl Experiments {
    pub(crate) fn new(inner: Arc<Transport>) -> Self {
        Self { inner }
    }

    /// Returns the list of all experiments in the specified environment.
    pub async fn list_experiments(
        &self,
        parent: &str,
        options: model::ListOptions,
    ) -> Result<model::ListExperimentsResponse> {
        self.inner
            .get(&format!("{parent}/experiments"), &options)
            .await
    }

    /// Retrieves the specified experiment.
    pub async fn get_experiment(&self, name: &str) -> Result<model::Experiment> {
        self.inner.get(name, &()).await
    }

    /// Creates an experiment in the specified environment.
    pub async fn create_experiment(
        &self,
        parent: &str,
        experiment: model::Experiment,
    ) -> Result<model::Experiment> {
        self.inner
            .post(&format!("{parent}/experiments"), experiment)
            .await
    }

    /// Updates the specified experiment.
    pub async fn update_experiment(
        &self,
        name: &str,
        experiment: model::Experiment,
        options: model::UpdateOptions,
    ) -> Result<model::Experiment> {
        self.inner.patch(name, &options, experiment).await
    }

    /// Deletes the specified experiment.
    pub async fn delete_experiment(&self, name: &str) -> Result<wkt::Empty> {
        self.inner.delete(name, &()).await
    }

    /// Starts the specified experiment. This changes the state of the
    /// experiment from `PENDING` to `RUNNING`.
    pub async fn start_experiment(&self, name: &str) -> Result<model::Experiment> {
        self.inner
            .post(&format!("{name}:start"), wkt::Empty::default())
            .await
    }

    /// Stops the specified experiment. This changes the state of the
    /// experiment from `RUNNING` to `DONE`.
    pub async fn stop_experiment(&self, name: &str) -> Result<model::Experiment> {
        self.inner
            .post(&format!("{name}:stop"), wkt::Empty::default())
            .await
    }
}
